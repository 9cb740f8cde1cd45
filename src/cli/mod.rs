pub mod args;
pub mod error;
pub mod output;

pub use args::{parse, Cli, USAGE};
pub use error::CliError;
pub use output::write_estimate;
