//! Rule-of-thumb consumption profile
//!
//! Used whenever the model-backed path cannot answer. Pure arithmetic on the
//! time slot; it never fails.

use crate::domain::{round_to_tenth, TimeSlot};

pub const BASE_KWH: f64 = 35.0;
pub const WEEKEND_DAYTIME_BONUS_KWH: f64 = 10.0;

/// Adjustment from [`BASE_KWH`] by hour-of-day band.
fn hour_band_adjustment(hour: u8) -> f64 {
    match hour {
        0..=5 => -10.0,
        6..=8 => 15.0,
        9..=16 => 5.0,
        17..=21 => 25.0,
        _ => 0.0,
    }
}

fn is_daytime(hour: u8) -> bool {
    (9..17).contains(&hour)
}

/// Heuristic estimate in kWh, rounded to one decimal place.
pub fn estimate(slot: &TimeSlot) -> f64 {
    let hour = slot.hour();
    let mut consumption = BASE_KWH + hour_band_adjustment(hour);

    if slot.is_weekend() && is_daytime(hour) {
        consumption += WEEKEND_DAYTIME_BONUS_KWH;
    }
    consumption += f64::from(slot.day() % 3) * 2.0;

    round_to_tenth(consumption)
}
