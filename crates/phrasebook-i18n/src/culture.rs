//! Culture identifiers and the fallback chain derived from them

use crate::error::{I18nError, I18nResult};
use phrasebook_common::{ambient_locale_tag, normalize_locale_tag};
use std::fmt;
use std::str::FromStr;
use tracing::debug;
use unic_langid::LanguageIdentifier;

/// Name of the universal fallback culture
pub const FALLBACK_CULTURE: &str = "en";

/// A parsed culture such as `fr-CA`, `pt` or `zh-Hant-TW`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Culture {
    id: LanguageIdentifier,
    name: String,
}

impl Culture {
    /// Parse a culture from a BCP-47 or POSIX style tag
    pub fn parse(tag: &str) -> I18nResult<Self> {
        let normalized =
            normalize_locale_tag(tag).ok_or_else(|| I18nError::InvalidCulture(tag.to_string()))?;
        let id: LanguageIdentifier = normalized
            .parse()
            .map_err(|_| I18nError::InvalidCulture(tag.to_string()))?;

        if id.language.is_empty() {
            return Err(I18nError::InvalidCulture(tag.to_string()));
        }

        let name = id.to_string();
        Ok(Self { id, name })
    }

    /// The universal fallback culture
    pub fn english() -> Self {
        Self {
            id: unic_langid::langid!("en"),
            name: FALLBACK_CULTURE.to_string(),
        }
    }

    /// The ambient UI culture of the process, or English when none can be detected
    pub fn ambient() -> Self {
        match ambient_locale_tag().map(|tag| Self::parse(&tag)) {
            Some(Ok(culture)) => culture,
            Some(Err(e)) => {
                debug!("Ignoring unusable ambient locale: {}", e);
                Self::english()
            }
            None => Self::english(),
        }
    }

    /// Canonical name, e.g. `fr-CA`
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Two-letter (or three-letter) language code, e.g. `fr`
    pub fn language(&self) -> &str {
        self.id.language.as_str()
    }

    /// Whether this culture has no region, script or variants
    pub fn is_neutral(&self) -> bool {
        self.name == self.language()
    }

    /// The neutral culture for this culture's language
    pub fn neutral(&self) -> Self {
        if self.is_neutral() {
            return self.clone();
        }
        let id = LanguageIdentifier::from_parts(self.id.language, None, None, &[]);
        let name = id.to_string();
        Self { id, name }
    }

    /// Culture names to consult, most specific first, ending at `en`
    pub fn fallback_chain(&self) -> Vec<&str> {
        let mut chain = Vec::with_capacity(3);
        for name in [self.name(), self.language(), FALLBACK_CULTURE] {
            if !chain.contains(&name) {
                chain.push(name);
            }
        }
        chain
    }

    /// Underlying language identifier
    pub fn language_identifier(&self) -> &LanguageIdentifier {
        &self.id
    }
}

impl Default for Culture {
    fn default() -> Self {
        Self::english()
    }
}

impl FromStr for Culture {
    type Err = I18nError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Culture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
