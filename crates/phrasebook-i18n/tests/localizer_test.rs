//! Integration tests for culture fallback and phrase rendering

use chrono::{Duration, FixedOffset, TimeZone};
use phrasebook_common::test_utils::{init_test_logging, mock_timestamp};
use phrasebook_i18n::{
    CountNoun, Culture, I18nError, Localizer, ResourceDomain, ResourceLookup, ResourceStore,
};
use std::fs;
use std::sync::Arc;
use std::thread;
use tempfile::TempDir;

fn localizer() -> Localizer {
    init_test_logging();
    Localizer::builder()
        .default_culture(Culture::english())
        .build()
        .expect("bundled localizer")
}

fn culture(tag: &str) -> Culture {
    Culture::parse(tag).unwrap()
}

#[test]
fn test_specific_culture_uses_neutral_template() {
    let localizer = localizer();
    let fr_fr = culture("fr-FR");

    assert_eq!(localizer.yes_no(true, Some(&fr_fr)).unwrap(), "Oui");
    assert_eq!(localizer.ordinal(2, Some(&fr_fr)).unwrap(), "2e");
    assert_eq!(
        localizer.to_localized_count(2, CountNoun::File, Some(&fr_fr)).unwrap(),
        "2 fichiers"
    );
}

#[test]
fn test_unsupported_culture_falls_back_to_english() {
    let localizer = localizer();
    let swahili = culture("sw-KE");
    assert_eq!(localizer.yes_no(false, Some(&swahili)).unwrap(), "No");
    assert_eq!(
        localizer.to_localized_count(1, CountNoun::Record, Some(&swahili)).unwrap(),
        "1 record"
    );
}

#[test]
fn test_time_ago_scenarios() {
    let localizer = localizer();
    let now = mock_timestamp(2024, 6, 15, 12, 0, 0);
    let ago = |offset: Duration| localizer.time_ago(&(now + offset), None, Some(now)).unwrap();

    assert_eq!(ago(Duration::seconds(-3)), "just now");
    assert_eq!(ago(Duration::seconds(-90)), "1 minutes ago");
    assert_eq!(ago(Duration::hours(-25)), "yesterday");
    assert_eq!(ago(Duration::days(-40)), "1 months ago");
    assert_eq!(ago(Duration::days(-800)), "2 years ago");
}

#[test]
fn test_time_until_scenarios() {
    let localizer = localizer();
    let now = mock_timestamp(2024, 6, 15, 12, 0, 0);
    let de = culture("de-DE");
    let until = |offset: Duration| {
        localizer
            .time_until(&(now + offset), Some(&de), Some(now))
            .unwrap()
    };

    assert_eq!(until(Duration::seconds(-1)), "gerade eben");
    assert_eq!(until(Duration::seconds(2)), "in wenigen Sekunden");
    assert_eq!(until(Duration::minutes(10)), "in 10 Minuten");
    assert_eq!(until(Duration::hours(30)), "morgen");
    assert_eq!(until(Duration::days(5)), "in 5 Tagen");
}

#[test]
fn test_time_zones_are_normalized() {
    let localizer = localizer();
    let now = mock_timestamp(2024, 6, 15, 12, 0, 0);
    let tokyo = FixedOffset::east_opt(9 * 3600).unwrap();
    // 20:00 in Tokyo is 11:00 UTC
    let instant = tokyo.with_ymd_and_hms(2024, 6, 15, 20, 0, 0).unwrap();

    assert_eq!(
        localizer.time_ago(&instant, Some(&culture("ja")), Some(now)).unwrap(),
        "1時間前"
    );
}

#[test]
fn test_load_dir_extends_bundled_resources() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("yes_no.toml"),
        "[fr-CA]\nYes = \"Ouais\"\n",
    )
    .unwrap();

    let localizer = Localizer::builder()
        .default_culture(culture("fr-CA"))
        .resources_dir(dir.path())
        .build()
        .unwrap();

    assert_eq!(localizer.yes_no(true, None).unwrap(), "Ouais");
    assert_eq!(localizer.yes_no(false, None).unwrap(), "Non");
}

#[test]
fn test_invalid_resources_dir_bundle_fails_build() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("ordinals.toml"), "[en]\nOrdinal_N = \"{0th\"\n").unwrap();

    let result = Localizer::builder().resources_dir(dir.path()).build();
    assert!(matches!(result, Err(I18nError::ResourceParse { .. })));
}

/// A lookup that only knows English "Yes", to exercise the trait seam
#[derive(Debug)]
struct SingleTemplate;

impl ResourceLookup for SingleTemplate {
    fn lookup(&self, domain: ResourceDomain, key: &str, culture: &str) -> Option<&str> {
        (domain == ResourceDomain::YesNo && key == "Yes" && culture == "en").then_some("Affirmative")
    }
}

#[test]
fn test_custom_lookup() {
    let localizer = Localizer::from_lookup(Arc::new(SingleTemplate), culture("nl-BE"), true);
    assert_eq!(localizer.yes_no(true, None).unwrap(), "Affirmative");

    match localizer.yes_no(false, None) {
        Err(I18nError::MissingResource { key, culture, .. }) => {
            assert_eq!(key, "No");
            assert_eq!(culture, "nl-BE");
        }
        other => panic!("expected MissingResource, got {other:?}"),
    }
}

#[test]
fn test_concurrent_callers_see_identical_strings() {
    let localizer = Arc::new(localizer());
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let localizer = Arc::clone(&localizer);
            thread::spawn(move || {
                let ru = Culture::parse("ru-RU").unwrap();
                (0..50)
                    .map(|n| localizer.to_localized_count(n, CountNoun::Error, Some(&ru)).unwrap())
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let results: Vec<Vec<String>> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(results.windows(2).all(|pair| pair[0] == pair[1]));
    assert_eq!(results[0][22], "22 ошибки");
    assert_eq!(results[0][25], "25 ошибок");
}

#[test]
fn test_resource_store_is_exposed_for_inspection() {
    let store = ResourceStore::bundled().unwrap();
    assert!(store.cultures(ResourceDomain::TimeStrings).contains(&"he"));
}
