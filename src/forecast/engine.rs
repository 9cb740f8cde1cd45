use tracing::{debug, error};

use super::heuristic;
use super::ConsumptionForecaster;
use crate::domain::{EnergyEstimate, EstimateSource, TimeSlot};
use crate::ml::PredictError;

/// Primary forecaster with a one-shot heuristic substitution.
///
/// `estimate` always yields a value: any [`PredictError`] from the primary
/// is reported on stderr and replaced by the heuristic. There is no retry.
pub struct ForecastEngine {
    pub primary: Box<dyn ConsumptionForecaster>,
}

impl ForecastEngine {
    pub fn new(primary: Box<dyn ConsumptionForecaster>) -> Self {
        Self { primary }
    }

    pub fn estimate(&self, slot: &TimeSlot) -> EnergyEstimate {
        match self.primary.forecast(slot) {
            Ok(kwh) => EnergyEstimate::new(kwh, EstimateSource::Model),
            Err(err) => {
                report(&err);
                let kwh = heuristic::estimate(slot);
                debug!(%slot, kwh, "DEBUG: falling back to heuristic estimate");
                EnergyEstimate::new(kwh, EstimateSource::Heuristic)
            }
        }
    }
}

fn report(err: &PredictError) {
    match err {
        PredictError::ArtifactMissing { .. } => error!("FATAL ERROR: {err}"),
        PredictError::LoadFailed { .. } | PredictError::InferenceFailed(_) => {
            error!("ERROR during prediction: {err}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::path::PathBuf;
    use std::rc::Rc;

    struct Fixed(f64);

    impl ConsumptionForecaster for Fixed {
        fn forecast(&self, _slot: &TimeSlot) -> Result<f64, PredictError> {
            Ok(self.0)
        }
    }

    /// Fails with a fresh error on every call and counts the calls.
    struct Failing {
        kind: fn() -> PredictError,
        calls: Rc<Cell<usize>>,
    }

    impl ConsumptionForecaster for Failing {
        fn forecast(&self, _slot: &TimeSlot) -> Result<f64, PredictError> {
            self.calls.set(self.calls.get() + 1);
            Err((self.kind)())
        }
    }

    fn failing(kind: fn() -> PredictError) -> (ForecastEngine, Rc<Cell<usize>>) {
        let calls = Rc::new(Cell::new(0));
        let engine = ForecastEngine::new(Box::new(Failing {
            kind,
            calls: calls.clone(),
        }));
        (engine, calls)
    }

    #[test]
    fn test_model_value_is_rounded() {
        let engine = ForecastEngine::new(Box::new(Fixed(47.26)));
        let estimate = engine.estimate(&TimeSlot::new(7, 1, 0).unwrap());
        assert_eq!(estimate.kwh, 47.3);
        assert_eq!(estimate.source, EstimateSource::Model);
    }

    #[test]
    fn test_missing_artifact_falls_back() {
        let (engine, calls) = failing(|| PredictError::ArtifactMissing {
            path: PathBuf::from("/nowhere/model.json"),
        });
        let estimate = engine.estimate(&TimeSlot::new(7, 1, 0).unwrap());
        assert_eq!(estimate.kwh, 52.0);
        assert_eq!(estimate.source, EstimateSource::Heuristic);
        assert_eq!(calls.get(), 1, "fallback must not retry the model");
    }

    #[test]
    fn test_inference_failure_falls_back() {
        let (engine, calls) = failing(|| PredictError::inference("shape mismatch"));
        let estimate = engine.estimate(&TimeSlot::new(10, 3, 1).unwrap());
        assert_eq!(estimate.kwh, 50.0);
        assert_eq!(estimate.source, EstimateSource::Heuristic);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_load_failure_falls_back() {
        let (engine, _) = failing(|| {
            PredictError::load_failed(
                "/m/model.json",
                std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
            )
        });
        let estimate = engine.estimate(&TimeSlot::new(23, 7, 0).unwrap());
        assert_eq!(estimate.kwh, 37.0);
    }
}
