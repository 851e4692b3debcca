//! Localized noun counts ("3 files", "5 файлов", "3 个文件")

use crate::culture::Culture;
use crate::domain::{keys, ResourceDomain, ResourceKey};
use crate::error::I18nResult;
use crate::format::{format_template, FormatArg};
use crate::localizer::Localizer;
use crate::noun::CountNoun;
use crate::pluralization::{compose_classified, compose_counted, CountRule, PluralForm};
use std::sync::Arc;
use tracing::debug;

const HEBREW: &str = "he";

impl Localizer {
    /// Render `count` followed by the right form of `noun`
    pub fn to_localized_count(&self, count: i64, noun: CountNoun, culture: Option<&Culture>) -> I18nResult<String> {
        self.with_culture(culture, |culture| self.count_phrase(count, noun, culture))
    }

    fn count_phrase(&self, count: i64, noun: CountNoun, culture: &Culture) -> I18nResult<String> {
        if count == 0 {
            if let Some(template) = self.zero_template(noun, culture) {
                return format_template(&template, culture, &[FormatArg::Int(count)]);
            }
        }

        let rule = CountRule::for_language(culture.language());

        if let Some(style) = rule.classifier() {
            let classifier = self.probe(&ResourceKey::classifier(noun, style.key_suffix), culture);
            let word = self.resolve(&ResourceKey::noun_form(noun, PluralForm::One), culture)?;
            return Ok(compose_classified(
                count,
                &style,
                classifier.as_deref().unwrap_or(style.default_classifier),
                &word,
            ));
        }

        let word = match rule.plural_form(count) {
            PluralForm::Many if rule == CountRule::Western => {
                match self.probe(&ResourceKey::noun_form(noun, PluralForm::Many), culture) {
                    Some(word) => word,
                    None => {
                        debug!("No plural form of {} for '{}', using singular", noun, culture);
                        self.resolve(&ResourceKey::noun_form(noun, PluralForm::One), culture)?
                    }
                }
            }
            form => self.resolve(&ResourceKey::noun_form(noun, form), culture)?,
        };
        Ok(compose_counted(count, &word))
    }

    /// Dedicated zero phrase, if the culture has one
    ///
    /// Hebrew tries the gender-agreeing phrase, then the noun's generic one,
    /// then `Zero.Default`. Other cultures only have the generic phrase.
    fn zero_template(&self, noun: CountNoun, culture: &Culture) -> Option<Arc<str>> {
        if culture.language() != HEBREW {
            return self.probe(&ResourceKey::zero(noun), culture);
        }

        noun.gender()
            .zero_key_suffix()
            .and_then(|suffix| self.probe(&ResourceKey::zero_gendered(noun, suffix), culture))
            .or_else(|| self.probe(&ResourceKey::zero(noun), culture))
            .or_else(|| {
                self.probe(
                    &ResourceKey::fixed(ResourceDomain::CountNouns, keys::ZERO_DEFAULT),
                    culture,
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::I18nError;
    use crate::store::ResourceStore;

    fn localizer() -> Localizer {
        Localizer::builder()
            .default_culture(Culture::english())
            .build()
            .unwrap()
    }

    fn count(localizer: &Localizer, n: i64, noun: CountNoun, tag: &str) -> String {
        let culture = Culture::parse(tag).unwrap();
        localizer.to_localized_count(n, noun, Some(&culture)).unwrap()
    }

    #[test]
    fn test_english_counts() {
        let localizer = localizer();
        assert_eq!(localizer.to_localized_count(1, CountNoun::File, None).unwrap(), "1 file");
        assert_eq!(localizer.to_localized_count(3, CountNoun::File, None).unwrap(), "3 files");
        assert_eq!(localizer.to_localized_count(0, CountNoun::File, None).unwrap(), "0 files");
        assert_eq!(localizer.to_localized_count(-1, CountNoun::Item, None).unwrap(), "-1 items");
    }

    #[test]
    fn test_russian_counts() {
        let localizer = localizer();
        assert_eq!(count(&localizer, 1, CountNoun::File, "ru"), "1 файл");
        assert_eq!(count(&localizer, 3, CountNoun::File, "ru"), "3 файла");
        assert_eq!(count(&localizer, 5, CountNoun::File, "ru"), "5 файлов");
        assert_eq!(count(&localizer, 11, CountNoun::File, "ru"), "11 файлов");
        assert_eq!(count(&localizer, 21, CountNoun::File, "ru-RU"), "21 файл");
    }

    #[test]
    fn test_cjk_counts() {
        let localizer = localizer();
        assert_eq!(count(&localizer, 3, CountNoun::File, "zh"), "3 个文件");
        assert_eq!(count(&localizer, 2, CountNoun::User, "zh-CN"), "2 位用户");
        assert_eq!(count(&localizer, 3, CountNoun::File, "ja"), "3個ファイル");
        assert_eq!(count(&localizer, 4, CountNoun::User, "ko"), "4 명사용자");
    }

    #[test]
    fn test_cjk_default_classifier() {
        let mut store = ResourceStore::new();
        store
            .insert(ResourceDomain::CountNouns, "ja", "Noun.Item.One", "アイテム")
            .unwrap();
        let localizer = Localizer::builder()
            .default_culture(Culture::english())
            .store(store)
            .build()
            .unwrap();
        assert_eq!(count(&localizer, 2, CountNoun::Item, "ja"), "2つアイテム");
    }

    #[test]
    fn test_hebrew_zero_agrees_with_gender() {
        let localizer = localizer();
        assert_eq!(count(&localizer, 0, CountNoun::Item, "he"), "אף פריט לא נמצא");
        assert_eq!(count(&localizer, 0, CountNoun::Error, "he-IL"), "אף שגיאה לא נמצאה");
        assert_eq!(count(&localizer, 2, CountNoun::Error, "he"), "2 שגיאות");
    }

    #[test]
    fn test_hebrew_zero_last_resort() {
        let mut store = ResourceStore::new();
        store
            .insert(ResourceDomain::CountNouns, "he", "Zero.Default", "לא נמצאו פריטים")
            .unwrap();
        store
            .insert(ResourceDomain::CountNouns, "he", "Zero.Item.Masc", " ")
            .unwrap();
        let localizer = Localizer::builder()
            .default_culture(Culture::english())
            .store(store)
            .build()
            .unwrap();
        assert_eq!(count(&localizer, 0, CountNoun::Item, "he"), "לא נמצאו פריטים");
    }

    #[test]
    fn test_many_falls_back_to_one() {
        let mut store = ResourceStore::new();
        store
            .insert(ResourceDomain::CountNouns, "en", "Noun.Device.One", "device")
            .unwrap();
        let localizer = Localizer::builder()
            .default_culture(Culture::english())
            .store(store)
            .build()
            .unwrap();
        assert_eq!(
            localizer.to_localized_count(4, CountNoun::Device, None).unwrap(),
            "4 device"
        );
        assert!(matches!(
            localizer.to_localized_count(4, CountNoun::File, None),
            Err(I18nError::MissingResource { .. })
        ));
    }

    #[test]
    fn test_regional_override() {
        let localizer = localizer();
        assert_eq!(count(&localizer, 2, CountNoun::File, "pt-PT"), "2 ficheiros");
        assert_eq!(count(&localizer, 2, CountNoun::File, "pt-BR"), "2 arquivos");
    }
}
