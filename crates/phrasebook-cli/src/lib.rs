//! # Phrasebook CLI
//!
//! Command-line front end for the Phrasebook localization engine.
//!
//! This crate owns the application lifecycle: it loads configuration,
//! initializes logging, builds the localizer and renders one phrase.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod app;
pub mod args;
pub mod error;

pub use app::*;
pub use args::*;
pub use error::*;
