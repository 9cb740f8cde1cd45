//! Energy consumption predictor.
//!
//! Produces one kWh estimate for an (hour, day-of-week, weekend) slot from a
//! pre-trained regression model, falling back to a fixed heuristic when the
//! model artifacts are missing or unusable.

pub mod cli;
pub mod config;
pub mod domain;
pub mod forecast;
pub mod ml;
pub mod telemetry;
