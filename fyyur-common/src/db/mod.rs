//! Database models and queries

pub mod artists;
pub mod init;
pub mod migrations;
pub mod models;
pub mod shows;
pub mod venues;

pub use init::*;
pub use migrations::*;
pub use models::*;

/// Keep the rows whose name contains `term`, ignoring case
///
/// Both sides are Unicode-lowercased ("CAFÉ" finds "Café Éclair"); SQLite
/// `LIKE` folds ASCII only. A blank term keeps every row.
pub(crate) fn filter_by_name(rows: Vec<Summary>, term: &str) -> Vec<Summary> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return rows;
    }
    rows.into_iter()
        .filter(|row| row.name.to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(id: i64, name: &str) -> Summary {
        Summary {
            id,
            name: name.to_string(),
            num_upcoming_shows: 0,
        }
    }

    fn names(rows: &[Summary]) -> Vec<&str> {
        rows.iter().map(|row| row.name.as_str()).collect()
    }

    #[test]
    fn test_filter_folds_unicode_case() {
        let rows = vec![summary(1, "Café Éclair"), summary(2, "The Musical Hop")];
        assert_eq!(names(&filter_by_name(rows.clone(), "CAFÉ ÉCLAIR")), ["Café Éclair"]);
        assert_eq!(names(&filter_by_name(rows, "éclair")), ["Café Éclair"]);
    }

    #[test]
    fn test_filter_trims_and_keeps_all_for_blank_term() {
        let rows = vec![summary(1, "Park Square Live"), summary(2, "The Musical Hop")];
        assert_eq!(filter_by_name(rows.clone(), "   ").len(), 2);
        assert_eq!(names(&filter_by_name(rows, "  hop ")), ["The Musical Hop"]);
    }

    #[test]
    fn test_filter_treats_wildcards_literally() {
        let rows = vec![summary(1, "100% Funk"), summary(2, "1000 Funk")];
        assert_eq!(names(&filter_by_name(rows.clone(), "100%")), ["100% Funk"]);
        assert!(filter_by_name(rows, "_").is_empty());
    }
}
