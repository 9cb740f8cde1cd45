use std::io::IsTerminal;

use serde::{Deserialize, Serialize};
use tracing_subscriber::{
    filter::Directive, fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

/// Diagnostic output format. Diagnostics always go to stderr; stdout is
/// reserved for the prediction line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Bare messages, one per line
    #[default]
    Plain,
    /// One JSON object per event
    Json,
}

/// Targets whose events make up the stderr contract with the caller. They
/// stay at `debug` whatever `RUST_LOG` the parent process passes down.
const PINNED_TARGETS: [&str; 2] = ["energy_predict", "predict_energy"];

/// `RUST_LOG` (default `debug`) with [`PINNED_TARGETS`] forced to `debug`.
pub fn diagnostics_filter() -> EnvFilter {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "debug".into());
    PINNED_TARGETS
        .iter()
        .filter_map(|target| format!("{target}=debug").parse::<Directive>().ok())
        .fold(filter, EnvFilter::add_directive)
}

pub fn init_tracing(format: LogFormat) {
    let registry = tracing_subscriber::registry().with(diagnostics_filter());

    // a subscriber may already be installed (tests); keep it
    let _ = match format {
        LogFormat::Plain => registry
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_ansi(std::io::stderr().is_terminal())
                    .without_time()
                    .with_level(false)
                    .with_target(false),
            )
            .try_init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init(),
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pinned_targets_survive_off() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("RUST_LOG", "off");
            let rendered = diagnostics_filter().to_string();
            assert!(rendered.contains("energy_predict=debug"), "{rendered}");
            assert!(rendered.contains("predict_energy=debug"), "{rendered}");
            Ok(())
        });
    }

    #[test]
    fn test_pinned_targets_override_same_target() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("RUST_LOG", "energy_predict=error,hyper=warn");
            let rendered = diagnostics_filter().to_string();
            assert!(rendered.contains("energy_predict=debug"), "{rendered}");
            assert!(!rendered.contains("energy_predict=error"), "{rendered}");
            assert!(rendered.contains("hyper=warn"), "{rendered}");
            Ok(())
        });
    }
}
