//! # Phrasebook Common
//!
//! Shared types, utilities, and common functionality for Phrasebook.
//!
//! This crate provides the error type, logging setup and locale-tag helpers
//! used across all other crates in the Phrasebook workspace.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod logging;
pub mod types;
pub mod utils;

#[cfg(any(test, feature = "testing"))]
pub mod test_utils;

pub use logging::*;
pub use types::*;
pub use utils::*;
