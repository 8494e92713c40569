//! Command-line arguments
//!
//! Each argument falls back to an environment variable; anything still
//! unset is taken from the config file or the compiled default.

use std::path::PathBuf;

use clap::Parser;
use fyyur_common::config::Overrides;

/// Command-line arguments for fyyur-web
#[derive(Parser, Debug, Default)]
#[command(name = "fyyur-web")]
#[command(about = "Venue and artist booking directory")]
#[command(version)]
pub struct Args {
    /// Port to listen on
    #[arg(short, long, env = "FYYUR_PORT")]
    pub port: Option<u16>,

    /// Address to bind
    #[arg(long, env = "FYYUR_HOST")]
    pub host: Option<String>,

    /// SQLite database file
    #[arg(short, long, env = "FYYUR_DATABASE")]
    pub database: Option<PathBuf>,

    /// TOML config file
    #[arg(short, long, env = "FYYUR_CONFIG")]
    pub config: Option<PathBuf>,
}

impl Args {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            host: self.host.clone(),
            port: self.port,
            database: self.database.clone(),
            config_file: self.config.clone(),
        }
    }
}
