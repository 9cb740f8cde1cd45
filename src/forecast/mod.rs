pub mod consumption;
pub mod engine;
pub mod heuristic;

pub use consumption::*;
pub use engine::*;
