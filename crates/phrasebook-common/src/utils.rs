//! Locale tag helpers shared by configuration and localization.

use std::env;

/// Environment variables consulted for the ambient UI culture, in priority order.
pub const LOCALE_ENV_VARS: [&str; 3] = ["LC_ALL", "LC_MESSAGES", "LANG"];

/// Normalizes a raw locale string into a BCP-47 style tag.
///
/// POSIX forms such as `pt_BR.UTF-8` or `de_DE@euro` become `pt-BR` and
/// `de-DE`. The `C` and `POSIX` locales carry no language and yield `None`.
pub fn normalize_locale_tag(raw: &str) -> Option<String> {
    let base = raw.trim().split(['.', '@']).next().unwrap_or_default();

    if base.is_empty() || base.eq_ignore_ascii_case("c") || base.eq_ignore_ascii_case("posix") {
        return None;
    }

    Some(base.replace('_', "-"))
}

/// Detects the ambient UI locale of the process.
///
/// Locale environment variables win over the platform setting so a process
/// can be pinned to a culture without touching system preferences.
pub fn ambient_locale_tag() -> Option<String> {
    LOCALE_ENV_VARS
        .iter()
        .find_map(|var| env::var(var).ok().and_then(|value| normalize_locale_tag(&value)))
        .or_else(|| sys_locale::get_locale().and_then(|value| normalize_locale_tag(&value)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_posix_locale() {
        assert_eq!(normalize_locale_tag("pt_BR.UTF-8"), Some("pt-BR".to_string()));
        assert_eq!(normalize_locale_tag("de_DE@euro"), Some("de-DE".to_string()));
        assert_eq!(normalize_locale_tag(" fr-CA "), Some("fr-CA".to_string()));
    }

    #[test]
    fn test_normalize_rejects_languageless_locales() {
        assert_eq!(normalize_locale_tag("C"), None);
        assert_eq!(normalize_locale_tag("C.UTF-8"), None);
        assert_eq!(normalize_locale_tag("POSIX"), None);
        assert_eq!(normalize_locale_tag(""), None);
    }
}
