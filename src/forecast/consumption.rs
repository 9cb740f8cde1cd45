use crate::domain::TimeSlot;
use crate::ml::inference::ModelPredictor;
use crate::ml::PredictError;

/// Anything that can put a (raw, unrounded) kWh figure on a time slot.
pub trait ConsumptionForecaster {
    fn forecast(&self, slot: &TimeSlot) -> Result<f64, PredictError>;
}

impl ConsumptionForecaster for ModelPredictor {
    fn forecast(&self, slot: &TimeSlot) -> Result<f64, PredictError> {
        self.predict(slot)
    }
}
