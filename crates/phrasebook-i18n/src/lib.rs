//! Culture-aware phrase resolution for Phrasebook
//!
//! This crate turns values into culture-specific strings:
//!
//! - Yes/No and ordinals ("1st", "22nd", "11th")
//! - Relative time ("3 days ago", "in 2 hours", "yesterday")
//! - Pluralized noun counts ("3 files", "5 файлов", "3 个文件", Hebrew
//!   gender-agreeing zero phrases)
//!
//! Templates are looked up in the requested culture, then its neutral
//! language, then English, and memoized per requested culture.
//!
//! # Example
//!
//! ```rust
//! use phrasebook_i18n::{CountNoun, Culture, Localizer};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let localizer = Localizer::builder()
//!     .default_culture(Culture::english())
//!     .build()?;
//!
//! let russian = Culture::parse("ru-RU")?;
//! let phrase = localizer.to_localized_count(5, CountNoun::File, Some(&russian))?;
//! assert_eq!(phrase, "5 файлов");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cache;
pub mod count;
pub mod culture;
pub mod domain;
pub mod error;
pub mod ext;
pub mod format;
pub mod localizer;
pub mod noun;
pub mod pluralization;
pub mod relative_time;
pub mod resolver;
pub mod store;

pub use cache::{CacheStats, ResolvedCache};
pub use culture::{Culture, FALLBACK_CULTURE};
pub use domain::{keys, ResourceDomain, ResourceKey};
pub use error::{I18nError, I18nResult};
pub use ext::{LocalizedCountExt, OrdinalExt, RelativeTimeExt, YesNoExt};
pub use format::{format_template, FormatArg};
pub use localizer::{Localizer, LocalizerBuilder};
pub use noun::{CountNoun, GrammaticalGender};
pub use pluralization::{CountRule, PluralForm};
pub use relative_time::{Direction, TimeBucket};
pub use resolver::{CultureResolver, Resolution};
pub use store::{ResourceLookup, ResourceStore};
