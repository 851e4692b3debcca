//! Pluralization rules for different languages
//!
//! This module decides which grammatical form a count takes and how the
//! count, classifier and noun word are put together. Resource lookups live in
//! [`crate::count`]; everything here is pure.

use std::fmt;

/// Grammatical form selected for a count, used as the `Noun.<Noun>.<Form>` suffix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PluralForm {
    One,
    Few,
    Many,
}

impl PluralForm {
    /// Get the key suffix for this form
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::One => "One",
            Self::Few => "Few",
            Self::Many => "Many",
        }
    }
}

impl fmt::Display for PluralForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a language counts nouns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountRule {
    /// Chinese: classifier, no morphological plural
    Chinese,
    /// Japanese: counter suffix, no morphological plural
    Japanese,
    /// Korean: counter, no morphological plural
    Korean,
    /// Russian: one / few / many
    Russian,
    /// Everything else: one / many
    Western,
}

/// Classifier lookup details for a CJK language
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassifierStyle {
    /// Suffix of the `Classifier.<Noun>.<Suffix>` key
    pub key_suffix: &'static str,
    /// Classifier used when the bundle has none for the noun
    pub default_classifier: &'static str,
    /// Text between the number and the classifier
    pub separator: &'static str,
}

impl CountRule {
    /// Select the rule from a two-letter language code
    pub fn for_language(language: &str) -> Self {
        match language {
            "zh" => Self::Chinese,
            "ja" => Self::Japanese,
            "ko" => Self::Korean,
            "ru" => Self::Russian,
            _ => Self::Western,
        }
    }

    /// Get the form the noun takes for `count`
    pub fn plural_form(&self, count: i64) -> PluralForm {
        match self {
            Self::Chinese | Self::Japanese | Self::Korean => PluralForm::One,
            Self::Russian => russian_plural_form(count),
            Self::Western => western_plural_form(count),
        }
    }

    /// Classifier details, for languages that count with classifiers
    pub fn classifier(&self) -> Option<ClassifierStyle> {
        match self {
            Self::Chinese => Some(ClassifierStyle {
                key_suffix: "Zh",
                default_classifier: "个",
                separator: " ",
            }),
            Self::Japanese => Some(ClassifierStyle {
                key_suffix: "Ja",
                default_classifier: "つ",
                separator: "",
            }),
            Self::Korean => Some(ClassifierStyle {
                key_suffix: "Ko",
                default_classifier: "개",
                separator: " ",
            }),
            Self::Russian | Self::Western => None,
        }
    }
}

/// English-like rule: exactly one is singular
pub fn western_plural_form(count: i64) -> PluralForm {
    if count == 1 {
        PluralForm::One
    } else {
        PluralForm::Many
    }
}

/// Russian rule on the last two decimal digits of the magnitude
pub fn russian_plural_form(count: i64) -> PluralForm {
    let n = count.unsigned_abs();
    let mod10 = n % 10;
    let mod100 = n % 100;

    if mod10 == 1 && mod100 != 11 {
        PluralForm::One
    } else if (2..=4).contains(&mod10) && !(12..=14).contains(&mod100) {
        PluralForm::Few
    } else {
        PluralForm::Many
    }
}

/// `"<count> <word>"`
pub fn compose_counted(count: i64, word: &str) -> String {
    format!("{count} {word}")
}

/// `"<count><sep><classifier><word>"`
pub fn compose_classified(count: i64, style: &ClassifierStyle, classifier: &str, word: &str) -> String {
    format!("{count}{}{classifier}{word}", style.separator)
}
