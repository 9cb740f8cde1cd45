use std::io;
use std::process::ExitCode;

use energy_predict::{cli, config, forecast, ml, telemetry};
use cli::CliError;
use config::Config;
use forecast::ForecastEngine;
use ml::inference::ModelPredictor;
use telemetry::{init_tracing, LogFormat};
use tracing::{debug, error, warn};

fn main() -> ExitCode {
    let argv: Vec<String> = std::env::args_os()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();

    let cli = match cli::parse(&argv) {
        Ok(cli) => cli,
        Err(err) => {
            init_tracing(LogFormat::Plain);
            debug!("DEBUG: received arguments: {argv:?}");
            return fail(err);
        }
    };

    let install_dir = config::install_dir();
    let (mut cfg, config_error) =
        match Config::load(install_dir.as_deref().ok(), cli.config.as_deref()) {
            Ok(cfg) => (cfg, None),
            Err(err) => (Config::default(), Some(err)),
        };

    init_tracing(cli.log_format.unwrap_or(cfg.logging.format));
    debug!("DEBUG: received arguments: {argv:?}");

    if let Some(err) = config_error {
        error!("ERROR loading configuration, using defaults: {err:#}");
    }
    if !cli.extra.is_empty() {
        warn!("ignoring extra arguments: {:?}", cli.extra);
    }

    let slot = match cli.time_slot() {
        Ok(slot) => slot,
        Err(err) => return fail(err),
    };

    if let Some(dir) = &cli.artifact_dir {
        cfg.artifacts.dir = std::path::absolute(dir).unwrap_or_else(|_| dir.clone());
    }

    let engine = ForecastEngine::new(Box::new(ModelPredictor::locate(
        &cfg.artifacts,
        install_dir,
    )));
    let estimate = engine.estimate(&slot);
    debug!(source = %estimate.source, kwh = estimate.kwh, "DEBUG: prediction complete");

    if let Err(err) = cli::write_estimate(&mut io::stdout().lock(), &estimate) {
        error!("FATAL ERROR: cannot write prediction: {err}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn fail(err: CliError) -> ExitCode {
    match &err {
        CliError::InvalidArgumentCount => error!("{err}"),
        CliError::InvalidArgumentValue(_) => error!("FATAL ERROR: {err}"),
        CliError::Clap(clap_err) => {
            let _ = clap_err.print();
        }
    }
    ExitCode::from(err.exit_code())
}
