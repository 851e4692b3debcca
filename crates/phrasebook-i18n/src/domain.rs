//! Resource domains and the keys that live in them

use crate::error::{I18nError, I18nResult};
use crate::noun::CountNoun;
use crate::pluralization::PluralForm;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// Fixed key names, grouped by domain.
pub mod keys {
    pub const YES: &str = "Yes";
    pub const NO: &str = "No";

    pub const ORDINAL_1: &str = "Ordinal_1";
    pub const ORDINAL_2: &str = "Ordinal_2";
    pub const ORDINAL_3: &str = "Ordinal_3";
    pub const ORDINAL_N: &str = "Ordinal_N";

    pub const JUST_NOW: &str = "JustNow";
    pub const IN_A_FEW_SECONDS: &str = "InAFewSeconds";
    pub const SECONDS_AGO: &str = "SecondsAgo";
    pub const MINUTES_AGO: &str = "MinutesAgo";
    pub const HOURS_AGO: &str = "HoursAgo";
    pub const YESTERDAY: &str = "Yesterday";
    pub const DAYS_AGO: &str = "DaysAgo";
    pub const MONTHS_AGO: &str = "MonthsAgo";
    pub const YEARS_AGO: &str = "YearsAgo";
    pub const IN_SECONDS: &str = "InSeconds";
    pub const IN_MINUTES: &str = "InMinutes";
    pub const IN_HOURS: &str = "InHours";
    pub const TOMORROW: &str = "Tomorrow";
    pub const IN_DAYS: &str = "InDays";
    pub const IN_MONTHS: &str = "InMonths";
    pub const IN_YEARS: &str = "InYears";

    /// Last-resort Hebrew zero phrase.
    pub const ZERO_DEFAULT: &str = "Zero.Default";

    pub const YES_NO_KEYS: [&str; 2] = [YES, NO];

    pub const ORDINAL_KEYS: [&str; 4] = [ORDINAL_1, ORDINAL_2, ORDINAL_3, ORDINAL_N];

    pub const TIME_KEYS: [&str; 16] = [
        JUST_NOW,
        IN_A_FEW_SECONDS,
        SECONDS_AGO,
        MINUTES_AGO,
        HOURS_AGO,
        YESTERDAY,
        DAYS_AGO,
        MONTHS_AGO,
        YEARS_AGO,
        IN_SECONDS,
        IN_MINUTES,
        IN_HOURS,
        TOMORROW,
        IN_DAYS,
        IN_MONTHS,
        IN_YEARS,
    ];
}

/// A family of related templates, bundled together
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ResourceDomain {
    YesNo,
    OrdinalStrings,
    TimeStrings,
    CountNouns,
}

impl ResourceDomain {
    /// Get the display name for this domain
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::YesNo => "YesNo",
            Self::OrdinalStrings => "OrdinalStrings",
            Self::TimeStrings => "TimeStrings",
            Self::CountNouns => "CountNouns",
        }
    }

    /// Get the resource file stem for this domain
    pub fn file_stem(&self) -> &'static str {
        match self {
            Self::YesNo => "yes_no",
            Self::OrdinalStrings => "ordinals",
            Self::TimeStrings => "time",
            Self::CountNouns => "count_nouns",
        }
    }

    /// Get all domains
    pub fn all() -> [Self; 4] {
        [
            Self::YesNo,
            Self::OrdinalStrings,
            Self::TimeStrings,
            Self::CountNouns,
        ]
    }

    /// Route a bare key name to the domain that owns it
    pub fn for_key(key: &str) -> Option<Self> {
        if keys::YES_NO_KEYS.contains(&key) {
            Some(Self::YesNo)
        } else if keys::ORDINAL_KEYS.contains(&key) {
            Some(Self::OrdinalStrings)
        } else if keys::TIME_KEYS.contains(&key) {
            Some(Self::TimeStrings)
        } else if ["Noun.", "Zero.", "Classifier."]
            .iter()
            .any(|prefix| key.len() > prefix.len() && key.starts_with(prefix))
        {
            Some(Self::CountNouns)
        } else {
            None
        }
    }
}

impl fmt::Display for ResourceDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifies one template: a domain plus a key name unique within it
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceKey {
    domain: ResourceDomain,
    name: Cow<'static, str>,
}

impl ResourceKey {
    /// Create a key, rejecting empty names
    pub fn new(domain: ResourceDomain, name: impl Into<Cow<'static, str>>) -> I18nResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(I18nError::InvalidArgument(format!(
                "empty resource key in domain {domain}"
            )));
        }
        Ok(Self { domain, name })
    }

    /// Key for one of the fixed constants in [`keys`]
    pub(crate) const fn fixed(domain: ResourceDomain, name: &'static str) -> Self {
        Self {
            domain,
            name: Cow::Borrowed(name),
        }
    }

    /// Parse a bare key name, routing it to its domain
    pub fn parse(name: &str) -> I18nResult<Self> {
        if name.trim().is_empty() {
            return Err(I18nError::InvalidArgument("empty resource key".to_string()));
        }
        let domain = ResourceDomain::for_key(name).ok_or_else(|| {
            I18nError::InvalidArgument(format!(
                "cannot route resource key '{name}' to a resource domain"
            ))
        })?;
        Ok(Self {
            domain,
            name: Cow::Owned(name.to_string()),
        })
    }

    /// `Noun.<Noun>.<Form>`
    pub fn noun_form(noun: CountNoun, form: PluralForm) -> Self {
        Self::count_noun(format!("Noun.{}.{}", noun.as_str(), form.as_str()))
    }

    /// `Zero.<Noun>`
    pub fn zero(noun: CountNoun) -> Self {
        Self::count_noun(format!("Zero.{}", noun.as_str()))
    }

    /// `Zero.<Noun>.<Masc|Fem>`
    pub fn zero_gendered(noun: CountNoun, suffix: &str) -> Self {
        Self::count_noun(format!("Zero.{}.{suffix}", noun.as_str()))
    }

    /// `Classifier.<Noun>.<Zh|Ja|Ko>`
    pub fn classifier(noun: CountNoun, language_suffix: &str) -> Self {
        Self::count_noun(format!("Classifier.{}.{language_suffix}", noun.as_str()))
    }

    fn count_noun(name: String) -> Self {
        Self {
            domain: ResourceDomain::CountNouns,
            name: Cow::Owned(name),
        }
    }

    pub fn domain(&self) -> ResourceDomain {
        self.domain
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for ResourceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.domain, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_route_to_their_domain() {
        assert_eq!(ResourceDomain::for_key("Yes"), Some(ResourceDomain::YesNo));
        assert_eq!(
            ResourceDomain::for_key("Ordinal_N"),
            Some(ResourceDomain::OrdinalStrings)
        );
        assert_eq!(
            ResourceDomain::for_key("InMonths"),
            Some(ResourceDomain::TimeStrings)
        );
        assert_eq!(
            ResourceDomain::for_key("Noun.File.Many"),
            Some(ResourceDomain::CountNouns)
        );
        assert_eq!(ResourceDomain::for_key("Noun."), None);
        assert_eq!(ResourceDomain::for_key("Maybe"), None);
    }

    #[test]
    fn test_empty_keys_are_invalid() {
        assert!(matches!(
            ResourceKey::parse(""),
            Err(I18nError::InvalidArgument(_))
        ));
        assert!(matches!(
            ResourceKey::new(ResourceDomain::YesNo, "  "),
            Err(I18nError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_unknown_key_is_invalid() {
        assert!(matches!(
            ResourceKey::parse("Perhaps"),
            Err(I18nError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_count_noun_key_names() {
        assert_eq!(
            ResourceKey::noun_form(CountNoun::File, PluralForm::Few).name(),
            "Noun.File.Few"
        );
        assert_eq!(ResourceKey::zero(CountNoun::Error).name(), "Zero.Error");
        assert_eq!(
            ResourceKey::zero_gendered(CountNoun::Item, "Masc").name(),
            "Zero.Item.Masc"
        );
        assert_eq!(
            ResourceKey::classifier(CountNoun::User, "Ko").to_string(),
            "CountNouns:Classifier.User.Ko"
        );
    }
}
