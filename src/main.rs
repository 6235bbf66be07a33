mod cli;
mod config;
mod output;

use std::io::{self, Write};
use std::process;

use casekit::Error;
use cli::{Cli, OutputFormat};
use config::Configuration;
use output::ConversionRecord;
use tracing::{debug, error, info_span, warn};

fn main() {
    let config = match Configuration::from_cli(Cli::parse_args()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };
    setup_logging(config.verbose);

    match run(config) {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            error!("Application error: {}", e);
            process::exit(1);
        }
    }
}

/// Convert every input, returning whether all of them succeeded
fn run(config: Configuration) -> Result<bool, Error> {
    let converter = config.converter;

    let span = info_span!(
        "convert",
        style = %converter.style(),
        policy = %converter.policy(),
        inputs = config.inputs.len(),
    );
    let _enter = span.enter();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut all_ok = true;

    for input in &config.inputs {
        let result = converter.convert(input);
        if let Err(e) = &result {
            warn!(input = %input, error = %e, "Conversion failed");
            all_ok = false;
        }

        match config.output {
            OutputFormat::Text => match &result {
                Ok(converted) => writeln!(out, "{converted}")?,
                Err(e) => eprintln!("Error: {e}"),
            },
            OutputFormat::Json => {
                let record = ConversionRecord::new(input, &result);
                writeln!(out, "{}", serde_json::to_string(&record)?)?;
            }
        }
    }

    debug!(all_ok, "Finished converting inputs");
    Ok(all_ok)
}

fn setup_logging(verbose: bool) {
    // CASEKIT_LOG wins over the verbosity flag
    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter = tracing_subscriber::EnvFilter::try_from_env("CASEKIT_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_target(true)
        .init();
}
