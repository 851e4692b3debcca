//! Command-line argument definitions.

use chrono::{DateTime, FixedOffset};
use clap::{ArgAction, Parser, Subcommand};
use phrasebook_i18n::{CountNoun, Culture};
use std::path::PathBuf;

/// Phrasebook - culture-aware counts, ordinals, yes/no and relative times
#[derive(Parser, Debug)]
#[command(name = "phrasebook", author, version, about, long_about = None)]
pub struct Args {
    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level, overriding the configuration (e.g. debug, phrasebook_i18n=trace)
    #[arg(short, long, global = true)]
    pub log_level: Option<String>,

    /// Culture to render in, e.g. fr-CA (defaults to the configured or ambient culture)
    #[arg(long, global = true)]
    pub culture: Option<Culture>,

    /// What to render
    #[command(subcommand)]
    pub command: Command,
}

/// Phrases the binary can render.
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Render a count with a noun, e.g. "3 files"
    Count {
        /// The count
        #[arg(allow_negative_numbers = true)]
        count: i64,
        /// Noun: item, result, file, user, warning, error, record or device
        noun: CountNoun,
    },

    /// Describe how long ago an RFC 3339 instant was
    Ago {
        /// Instant, e.g. 2024-06-15T12:00:00Z
        instant: DateTime<FixedOffset>,
        /// Measure from this instant instead of now
        #[arg(long)]
        reference: Option<DateTime<FixedOffset>>,
    },

    /// Describe how long until an RFC 3339 instant
    Until {
        /// Instant, e.g. 2024-06-15T12:00:00+02:00
        instant: DateTime<FixedOffset>,
        /// Measure from this instant instead of now
        #[arg(long)]
        reference: Option<DateTime<FixedOffset>>,
    },

    /// Render an ordinal number, e.g. "22nd"
    Ordinal {
        /// The number
        #[arg(allow_negative_numbers = true)]
        value: i64,
    },

    /// Render a boolean as a localized yes or no
    YesNo {
        /// true or false
        #[arg(action = ArgAction::Set)]
        value: bool,
    },
}
