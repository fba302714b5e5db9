//! Date picker rules: weekends and past dates cannot be booked.

use chrono::{Datelike, NaiveDate, Weekday};

/// Whether `date` may be picked when the current date is `today`.
pub fn is_selectable(date: NaiveDate, today: NaiveDate) -> bool {
    date >= today && !is_weekend(date)
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// The next `count` selectable dates starting at `today`.
pub fn upcoming(today: NaiveDate, count: usize) -> Vec<NaiveDate> {
    today
        .iter_days()
        .filter(|d| is_selectable(*d, today))
        .take(count)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    // Wednesday.
    fn today() -> NaiveDate {
        d(2024, 5, 1)
    }

    #[test]
    fn test_today_and_later_weekdays_selectable() {
        assert!(is_selectable(today(), today()));
        assert!(is_selectable(d(2024, 5, 3), today()));
        assert!(is_selectable(d(2024, 5, 6), today()));
        assert!(is_selectable(d(2030, 1, 2), today()));
    }

    #[test]
    fn test_weekends_never_selectable() {
        assert!(!is_selectable(d(2024, 5, 4), today()));
        assert!(!is_selectable(d(2024, 5, 5), today()));
        for date in today().iter_days().take(60) {
            if is_weekend(date) {
                assert!(!is_selectable(date, today()), "{date}");
            } else {
                assert!(is_selectable(date, today()), "{date}");
            }
        }
    }

    #[test]
    fn test_past_dates_not_selectable() {
        assert!(!is_selectable(d(2024, 4, 30), today()));
        assert!(!is_selectable(d(2023, 5, 1), today()));
    }

    #[test]
    fn test_upcoming_skips_weekend() {
        let days = upcoming(d(2024, 5, 3), 3);
        assert_eq!(days, vec![d(2024, 5, 3), d(2024, 5, 6), d(2024, 5, 7)]);
    }
}
