//! Verify the bundled resources cover every key each culture needs

use phrasebook_i18n::{
    keys, CountNoun, CountRule, Culture, PluralForm, ResourceDomain, ResourceKey, ResourceLookup,
    ResourceStore,
};

const PHRASE_CULTURES: [&str; 11] = ["en", "es", "fr", "pt", "de", "it", "ru", "he", "zh", "ja", "ko"];

fn store() -> ResourceStore {
    ResourceStore::bundled().expect("bundled resources should parse")
}

#[test]
fn test_yes_no_has_both_keys_everywhere() {
    let store = store();
    let cultures = store.cultures(ResourceDomain::YesNo);
    assert!(cultures.len() >= 30, "only {} yes/no cultures", cultures.len());

    for culture in cultures {
        for key in keys::YES_NO_KEYS {
            assert!(
                store.lookup(ResourceDomain::YesNo, key, culture).is_some(),
                "{key} missing for {culture}"
            );
        }
    }
}

#[test]
fn test_ordinals_and_time_strings_are_complete() {
    let store = store();
    for culture in PHRASE_CULTURES {
        for key in keys::ORDINAL_KEYS {
            let template = store
                .lookup(ResourceDomain::OrdinalStrings, key, culture)
                .unwrap_or_else(|| panic!("{key} missing for {culture}"));
            assert!(template.contains("{0}"), "{key} in {culture} drops the number");
        }
        for key in keys::TIME_KEYS {
            assert!(
                store.lookup(ResourceDomain::TimeStrings, key, culture).is_some(),
                "{key} missing for {culture}"
            );
        }
    }
}

#[test]
fn test_every_noun_has_the_forms_its_language_uses() {
    let store = store();
    for culture in PHRASE_CULTURES {
        let rule = CountRule::for_language(culture);
        let forms: &[PluralForm] = match rule {
            CountRule::Russian => &[PluralForm::One, PluralForm::Few, PluralForm::Many],
            CountRule::Western => &[PluralForm::One, PluralForm::Many],
            _ => &[PluralForm::One],
        };

        for noun in CountNoun::all() {
            for form in forms {
                let key = ResourceKey::noun_form(noun, *form);
                assert!(
                    store.lookup(key.domain(), key.name(), culture).is_some(),
                    "{key} missing for {culture}"
                );
            }

            if let Some(style) = rule.classifier() {
                let key = ResourceKey::classifier(noun, style.key_suffix);
                assert!(
                    store.lookup(key.domain(), key.name(), culture).is_some(),
                    "{key} missing for {culture}"
                );
            }
        }
    }
}

#[test]
fn test_hebrew_has_gendered_zero_phrases() {
    let store = store();
    for noun in CountNoun::all() {
        let suffix = noun.gender().zero_key_suffix().expect("Hebrew nouns are gendered");
        let key = ResourceKey::zero_gendered(noun, suffix);
        assert!(
            store.lookup(key.domain(), key.name(), "he").is_some(),
            "{key} missing for he"
        );
    }
    assert!(store
        .lookup(ResourceDomain::CountNouns, keys::ZERO_DEFAULT, "he")
        .is_some());
    assert!(store
        .lookup(ResourceDomain::CountNouns, keys::ZERO_DEFAULT, "en")
        .is_some());
}

#[test]
fn test_regional_overrides_are_partial() {
    let store = store();
    let pt_pt = store.keys(ResourceDomain::CountNouns, "pt-PT");
    let pt = store.keys(ResourceDomain::CountNouns, "pt");
    assert!(!pt_pt.is_empty());
    assert!(pt_pt.len() < pt.len());
    assert!(pt_pt.iter().all(|key| pt.contains(key)));

    let tw = Culture::parse("zh_TW").unwrap();
    assert!(!store.keys(ResourceDomain::CountNouns, tw.name()).is_empty());
}
