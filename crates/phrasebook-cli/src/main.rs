//! Main entry point for the phrasebook binary.

use clap::Parser;
use phrasebook_cli::{build_localizer, render, Args, CliResult};
use phrasebook_common::init_logging;
use phrasebook_config::ConfigLoader;
use tracing::{debug, error};

fn main() -> CliResult<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => ConfigLoader::load_from_file(path)?,
        None => ConfigLoader::load()?,
    };
    if let Some(level) = &args.log_level {
        config.logging.level.clone_from(level);
    }

    // Keep the guard alive so file output is flushed on exit
    let _guard = init_logging(&config.logging.to_logging_config())?;
    debug!("Configuration loaded: {:?}", config);

    let localizer = build_localizer(&config)?;

    match render(&localizer, &args.command, args.culture.as_ref()) {
        Ok(phrase) => {
            println!("{phrase}");
            Ok(())
        }
        Err(e) => {
            error!("Failed to render phrase: {}", e);
            Err(e)
        }
    }
}
