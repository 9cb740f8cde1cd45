//! Feature assembly for consumption models
//!
//! Models and scalers are fit against a fixed column order, recorded in the
//! features artifact. The row handed to the scaler must follow that order
//! exactly.

use std::collections::HashSet;
use std::str::FromStr;

use strum::{Display, EnumString};

use super::{FeatureVector, PredictError};
use crate::domain::TimeSlot;

/// Input columns a consumption model can be fit on.
///
/// The French column names written by the existing training notebook are
/// accepted as aliases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
pub enum FeatureName {
    #[strum(to_string = "hour_of_day", serialize = "heure_jour")]
    HourOfDay,
    #[strum(to_string = "day_of_week", serialize = "jour_semaine")]
    DayOfWeek,
    #[strum(to_string = "weekend")]
    Weekend,
}

impl FeatureName {
    pub fn value_for(&self, slot: &TimeSlot) -> f64 {
        match self {
            FeatureName::HourOfDay => f64::from(slot.hour()),
            FeatureName::DayOfWeek => f64::from(slot.day()),
            FeatureName::Weekend => f64::from(slot.weekend_flag()),
        }
    }
}

/// Build a single-row feature record in the given column order.
///
/// Unknown and duplicated column names are schema mismatches.
pub fn assemble(slot: &TimeSlot, ordering: &[String]) -> Result<FeatureVector, PredictError> {
    if ordering.is_empty() {
        return Err(PredictError::inference("feature list is empty"));
    }

    let mut seen = HashSet::with_capacity(ordering.len());
    let mut values = Vec::with_capacity(ordering.len());

    for raw in ordering {
        let name = FeatureName::from_str(raw)
            .map_err(|_| PredictError::inference(format!("unknown feature '{raw}'")))?;
        if !seen.insert(name) {
            return Err(PredictError::inference(format!(
                "feature '{name}' listed more than once"
            )));
        }
        values.push(name.value_for(slot));
    }

    FeatureVector::new(values, ordering.to_vec())
}
