//! Wiring between configuration, the localizer and commands.

use crate::args::Command;
use crate::error::CliResult;
use chrono::Utc;
use phrasebook_config::Config;
use phrasebook_i18n::{Culture, Localizer};
use tracing::{debug, info};

/// Build the localizer described by `config`.
pub fn build_localizer(config: &Config) -> CliResult<Localizer> {
    let mut builder = Localizer::builder().cache_enabled(config.cache.enabled);

    if let Some(tag) = &config.localization.default_culture {
        builder = builder.default_culture(Culture::parse(tag)?);
    }
    if let Some(dir) = &config.localization.resources_dir {
        info!("Loading additional resources from {:?}", dir);
        builder = builder.resources_dir(dir);
    }

    let localizer = builder.build()?;
    debug!("Default culture is '{}'", localizer.default_culture());
    Ok(localizer)
}

/// Render the phrase for `command`.
pub fn render(localizer: &Localizer, command: &Command, culture: Option<&Culture>) -> CliResult<String> {
    let phrase = match command {
        Command::Count { count, noun } => localizer.to_localized_count(*count, *noun, culture)?,
        Command::Ago { instant, reference } => {
            localizer.time_ago(instant, culture, reference.map(|r| r.with_timezone(&Utc)))?
        }
        Command::Until { instant, reference } => {
            localizer.time_until(instant, culture, reference.map(|r| r.with_timezone(&Utc)))?
        }
        Command::Ordinal { value } => localizer.ordinal(*value, culture)?,
        Command::YesNo { value } => localizer.yes_no(*value, culture)?,
    };
    Ok(phrase)
}
