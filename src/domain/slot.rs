use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Range violations for a [`TimeSlot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SlotError {
    #[error("Hour must be between 0-23")]
    Hour(i64),

    #[error("Day must be between 1-7")]
    Day(i64),

    #[error("Weekend must be 0 or 1")]
    Weekend(i64),
}

/// Validated prediction input: hour of day, day of week and weekend flag.
///
/// A `TimeSlot` can only be built through [`TimeSlot::new`], so holding one
/// means all three values are in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeSlot {
    hour: u8,
    day: u8,
    weekend: bool,
}

impl TimeSlot {
    pub const HOURS: std::ops::RangeInclusive<i64> = 0..=23;
    pub const DAYS: std::ops::RangeInclusive<i64> = 1..=7;

    /// Validate in the order hour, day, weekend and report the first violation.
    pub fn new(hour: i64, day: i64, weekend: i64) -> Result<Self, SlotError> {
        if !Self::HOURS.contains(&hour) {
            return Err(SlotError::Hour(hour));
        }
        if !Self::DAYS.contains(&day) {
            return Err(SlotError::Day(day));
        }
        let weekend = match weekend {
            0 => false,
            1 => true,
            other => return Err(SlotError::Weekend(other)),
        };

        Ok(Self {
            hour: hour as u8,
            day: day as u8,
            weekend,
        })
    }

    /// Hour of day (0-23)
    pub fn hour(&self) -> u8 {
        self.hour
    }

    /// Day of week (1-7)
    pub fn day(&self) -> u8 {
        self.day
    }

    pub fn is_weekend(&self) -> bool {
        self.weekend
    }

    /// Weekend flag as the 0/1 integer the models were fit on.
    pub fn weekend_flag(&self) -> u8 {
        u8::from(self.weekend)
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hour={} day={} weekend={}",
            self.hour,
            self.day,
            self.weekend_flag()
        )
    }
}
