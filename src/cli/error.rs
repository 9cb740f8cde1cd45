use thiserror::Error;

/// Argument failures. These end the process with a non-zero exit code;
/// nothing is predicted.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Usage: predict-energy <hour> <day> <weekend>")]
    InvalidArgumentCount,

    #[error("Invalid input argument. {0}")]
    InvalidArgumentValue(String),

    /// `--help` / `--version`, or a malformed flag.
    #[error(transparent)]
    Clap(#[from] clap::Error),
}

impl CliError {
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Clap(err) if !err.use_stderr() => 0,
            _ => 1,
        }
    }
}
