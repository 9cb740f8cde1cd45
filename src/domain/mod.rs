pub mod estimate;
pub mod slot;

pub use estimate::*;
pub use slot::*;
