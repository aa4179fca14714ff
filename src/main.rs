use clap::Parser;
use std::io::{self, Write};
use tally::utils::{logger, validation::Validate};
use tally::{CliConfig, CountEngine};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::debug!("Starting tally CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let engine = CountEngine::new(config);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match engine.run(&mut out) {
        Ok(summary) => {
            out.flush()?;
            tracing::debug!(
                "run complete: {} word(s), {} distinct, {} skipped input(s)",
                summary.total_words,
                summary.distinct_words,
                summary.skipped_inputs.len()
            );
        }
        Err(e) => {
            tracing::error!("run failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
