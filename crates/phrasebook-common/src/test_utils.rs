//! Test utilities and shared test helpers for Phrasebook.
//!
//! This module provides common testing utilities and fixtures that can be used
//! across all crates in the workspace for unit and integration testing.

use chrono::{DateTime, TimeZone, Utc};
use std::sync::Once;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize test logging once per test run.
static INIT: Once = Once::new();

/// Initialize logging for tests with a sensible default configuration.
/// This function is safe to call multiple times and will only initialize once.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

        // Another harness may already own the global subscriber
        fmt().with_test_writer().with_env_filter(filter).try_init().ok();
    });
}

/// Test fixture for creating a fixed UTC timestamp.
pub fn mock_timestamp(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    min: u32,
    sec: u32,
) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, min, sec)
        .unwrap()
}

/// Property-based testing utilities using proptest.
#[cfg(feature = "proptest")]
pub mod property_testing {
    use proptest::prelude::*;

    /// Strategy for generating well-formed locale tags such as `fr`, `pt-BR` or `de_AT`.
    pub fn locale_tag_strategy() -> impl Strategy<Value = String> {
        r"[a-z]{2}([-_][A-Z]{2})?".prop_map(|s| s.to_string())
    }

    /// Strategy for counts spanning the interesting plural boundaries.
    pub fn count_strategy() -> impl Strategy<Value = i64> {
        prop_oneof![0i64..=30, 100i64..=130, 1_000i64..=1_030, any::<i64>()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_init_logging_multiple_calls() {
        // Should not panic when called multiple times
        init_test_logging();
        init_test_logging();
        init_test_logging();
    }

    #[test]
    fn test_mock_timestamp() {
        let timestamp = mock_timestamp(2024, 1, 1, 12, 0, 0);
        assert_eq!(timestamp.year(), 2024);
        assert_eq!(timestamp.month(), 1);
        assert_eq!(timestamp.day(), 1);
        assert_eq!(timestamp.hour(), 12);
    }

    #[cfg(feature = "proptest")]
    mod property_tests {
        use super::super::property_testing;
        use crate::normalize_locale_tag;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn test_property_locale_tags_normalize(tag in property_testing::locale_tag_strategy()) {
                let normalized = normalize_locale_tag(&tag).unwrap();
                prop_assert!(!normalized.contains('_'));
                prop_assert_eq!(normalized.len(), tag.len());
            }
        }
    }
}
