//! Upcoming/past show classification
//!
//! A show is upcoming when its start time is strictly after `now`;
//! everything else, including a show starting exactly now, is past.

use chrono::NaiveDateTime;
use serde::Serialize;

/// Anything with a start time
pub trait Scheduled {
    fn start_time(&self) -> NaiveDateTime;
}

/// A record's shows split around `now`
#[derive(Debug, Clone, Serialize)]
pub struct ShowPartition<T> {
    pub upcoming_shows: Vec<T>,
    pub past_shows: Vec<T>,
}

impl<T> ShowPartition<T> {
    pub fn upcoming_count(&self) -> usize {
        self.upcoming_shows.len()
    }

    pub fn past_count(&self) -> usize {
        self.past_shows.len()
    }
}

fn is_upcoming(start_time: NaiveDateTime, now: NaiveDateTime) -> bool {
    start_time > now
}

/// Split shows into upcoming and past, keeping their input order
pub fn partition<T: Scheduled>(shows: Vec<T>, now: NaiveDateTime) -> ShowPartition<T> {
    let (upcoming_shows, past_shows) = shows
        .into_iter()
        .partition(|show| is_upcoming(show.start_time(), now));

    ShowPartition {
        upcoming_shows,
        past_shows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    #[derive(Debug, Clone, PartialEq)]
    struct Slot(NaiveDateTime);

    impl Scheduled for Slot {
        fn start_time(&self) -> NaiveDateTime {
            self.0
        }
    }

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_partition_splits_around_now() {
        let shows = vec![
            Slot(now() - Duration::days(30)),
            Slot(now() + Duration::days(1)),
            Slot(now() - Duration::hours(1)),
            Slot(now() + Duration::days(90)),
        ];

        let split = partition(shows, now());

        assert_eq!(split.upcoming_count(), 2);
        assert_eq!(split.past_count(), 2);
        assert_eq!(split.upcoming_shows[0], Slot(now() + Duration::days(1)));
        assert_eq!(split.upcoming_shows[1], Slot(now() + Duration::days(90)));
        assert_eq!(split.past_shows[0], Slot(now() - Duration::days(30)));
    }

    #[test]
    fn test_show_starting_now_is_past() {
        let split = partition(vec![Slot(now())], now());
        assert_eq!(split.upcoming_count(), 0);
        assert_eq!(split.past_count(), 1);
    }

    #[test]
    fn test_one_second_either_side() {
        assert!(is_upcoming(now() + Duration::seconds(1), now()));
        assert!(!is_upcoming(now() - Duration::seconds(1), now()));
    }

    #[test]
    fn test_partition_empty() {
        let split = partition(Vec::<Slot>::new(), now());
        assert!(split.upcoming_shows.is_empty());
        assert!(split.past_shows.is_empty());
    }
}
