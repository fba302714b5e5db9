//! Bookable time slots: every half hour from 09:00 to 17:30.

use chrono::NaiveTime;
use std::fmt;
use std::str::FromStr;

use crate::error::BookingError;

const FIRST_SLOT_MINUTES: u32 = 9 * 60;
const SLOT_MINUTES: u32 = 30;
const SLOT_COUNT: u8 = 18;

/// One of the 18 offered start times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeSlot(u8);

impl TimeSlot {
    /// All slots in ascending order.
    pub fn all() -> impl Iterator<Item = TimeSlot> {
        (0..SLOT_COUNT).map(TimeSlot)
    }

    fn minutes_since_midnight(self) -> u32 {
        FIRST_SLOT_MINUTES + u32::from(self.0) * SLOT_MINUTES
    }

    pub fn hour(self) -> u32 {
        self.minutes_since_midnight() / 60
    }

    pub fn minute(self) -> u32 {
        self.minutes_since_midnight() % 60
    }

    pub fn as_time(self) -> NaiveTime {
        NaiveTime::from_hms_opt(self.hour(), self.minute(), 0)
            .unwrap_or(NaiveTime::MIN)
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for TimeSlot {
    type Err = BookingError;

    /// Parse `HH:MM`; only exact slot labels are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .find(|slot| slot.to_string() == s)
            .ok_or_else(|| BookingError::InvalidSlot(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eighteen_half_hour_slots() {
        let labels: Vec<String> = TimeSlot::all().map(|s| s.to_string()).collect();
        assert_eq!(labels.len(), 18);
        assert_eq!(labels.first().unwrap(), "09:00");
        assert_eq!(labels[1], "09:30");
        assert_eq!(labels[6], "12:00");
        assert_eq!(labels.last().unwrap(), "17:30");
    }

    #[test]
    fn test_parse() {
        let slot: TimeSlot = "10:00".parse().unwrap();
        assert_eq!(slot.as_time(), NaiveTime::from_hms_opt(10, 0, 0).unwrap());
        assert_eq!(
            "18:00".parse::<TimeSlot>(),
            Err(BookingError::InvalidSlot("18:00".into()))
        );
        assert!("10:15".parse::<TimeSlot>().is_err());
        assert!("9:00".parse::<TimeSlot>().is_err());
        assert!("".parse::<TimeSlot>().is_err());
    }

    #[test]
    fn test_ordering_matches_time() {
        let slots: Vec<TimeSlot> = TimeSlot::all().collect();
        assert!(slots.windows(2).all(|w| w[0].as_time() < w[1].as_time()));
    }
}
