//! Localization entry point

use crate::cache::{CacheStats, ResolvedCache};
use crate::culture::Culture;
use crate::domain::{keys, ResourceDomain, ResourceKey};
use crate::error::I18nResult;
use crate::format::{format_template, FormatArg};
use crate::resolver::CultureResolver;
use crate::store::{ResourceLookup, ResourceStore};
use arc_swap::ArcSwap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};

/// Produces culture-specific strings from a resource store
///
/// Owns its resolver and cache; share it between threads behind an `Arc`.
#[derive(Debug)]
pub struct Localizer {
    /// Fallback resolver over the resource store
    resolver: CultureResolver,
    /// Memo of resolved templates
    cache: ResolvedCache,
    /// Culture used when a call passes none
    default_culture: ArcSwap<Culture>,
}

impl Localizer {
    /// Start building a localizer over the bundled resources
    pub fn builder() -> LocalizerBuilder {
        LocalizerBuilder::default()
    }

    /// Localizer over the bundled resources, defaulting to the ambient culture
    pub fn bundled() -> I18nResult<Self> {
        Self::builder().build()
    }

    /// Localizer over a custom lookup
    pub fn from_lookup(lookup: Arc<dyn ResourceLookup>, default_culture: Culture, cache_enabled: bool) -> Self {
        info!(
            "Localizer initialized with default culture '{}' (cache {})",
            default_culture,
            if cache_enabled { "enabled" } else { "disabled" }
        );
        Self {
            resolver: CultureResolver::new(lookup),
            cache: ResolvedCache::new(cache_enabled),
            default_culture: ArcSwap::from_pointee(default_culture),
        }
    }

    /// Culture used when an operation is called without one
    pub fn default_culture(&self) -> Arc<Culture> {
        self.default_culture.load_full()
    }

    /// Replace the default culture for subsequent calls
    pub fn set_default_culture(&self, culture: Culture) {
        info!("Default culture changed to '{}'", culture);
        self.default_culture.store(Arc::new(culture));
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Run `f` with the given culture, or the default one
    pub(crate) fn with_culture<R>(&self, culture: Option<&Culture>, f: impl FnOnce(&Culture) -> R) -> R {
        match culture {
            Some(culture) => f(culture),
            None => {
                let default = self.default_culture.load();
                f(&default)
            }
        }
    }

    /// Template for `key`, through the cache and the fallback chain
    pub fn resolve(&self, key: &ResourceKey, culture: &Culture) -> I18nResult<Arc<str>> {
        self.cache.get_or_resolve(culture.name(), key, || {
            self.resolver
                .resolve(key, culture)
                .map(|resolution| resolution.template.to_string())
        })
    }

    /// Like [`resolve`](Self::resolve), but absence is not an error
    pub(crate) fn probe(&self, key: &ResourceKey, culture: &Culture) -> Option<Arc<str>> {
        self.cache.get_or_probe(culture.name(), key, || {
            self.resolver
                .lookup(key, culture)
                .map(|resolution| resolution.template.to_string())
        })
    }

    /// Raw template for any known key name
    pub fn get(&self, key: &str, culture: Option<&Culture>) -> I18nResult<Arc<str>> {
        let key = ResourceKey::parse(key)?;
        self.with_culture(culture, |culture| self.resolve(&key, culture))
    }

    /// Template for any known key name, with `args` applied
    pub fn get_formatted(&self, key: &str, culture: Option<&Culture>, args: &[FormatArg]) -> I18nResult<String> {
        let key = ResourceKey::parse(key)?;
        self.with_culture(culture, |culture| {
            let template = self.resolve(&key, culture)?;
            format_template(&template, culture, args)
        })
    }

    /// Ordinal form of `value`, e.g. "1st", "22nd", "11th"
    ///
    /// Negative values always use the generic form.
    pub fn ordinal(&self, value: i64, culture: Option<&Culture>) -> I18nResult<String> {
        let key = ResourceKey::fixed(ResourceDomain::OrdinalStrings, ordinal_key(value));
        self.with_culture(culture, |culture| {
            let template = self.resolve(&key, culture)?;
            format_template(&template, culture, &[FormatArg::Int(value)])
        })
    }

    /// Localized "Yes" or "No"
    pub fn yes_no(&self, value: bool, culture: Option<&Culture>) -> I18nResult<String> {
        let name = if value { keys::YES } else { keys::NO };
        let key = ResourceKey::fixed(ResourceDomain::YesNo, name);
        self.with_culture(culture, |culture| {
            let template = self.resolve(&key, culture)?;
            format_template(&template, culture, &[])
        })
    }

    /// Localized "Yes" or "No", or an empty string for `None`
    pub fn yes_no_opt(&self, value: Option<bool>, culture: Option<&Culture>) -> I18nResult<String> {
        match value {
            Some(value) => self.yes_no(value, culture),
            None => Ok(String::new()),
        }
    }
}

/// Select the ordinal key from the last two decimal digits
pub fn ordinal_key(value: i64) -> &'static str {
    match (value % 10, value % 100) {
        (1, m) if m != 11 => keys::ORDINAL_1,
        (2, m) if m != 12 => keys::ORDINAL_2,
        (3, m) if m != 13 => keys::ORDINAL_3,
        _ => keys::ORDINAL_N,
    }
}

/// Builder for [`Localizer`]
#[derive(Debug)]
pub struct LocalizerBuilder {
    default_culture: Option<Culture>,
    store: Option<ResourceStore>,
    resources_dir: Option<PathBuf>,
    cache_enabled: bool,
}

impl Default for LocalizerBuilder {
    fn default() -> Self {
        Self {
            default_culture: None,
            store: None,
            resources_dir: None,
            cache_enabled: true,
        }
    }
}

impl LocalizerBuilder {
    /// Culture used when calls pass none; the ambient culture if unset
    pub fn default_culture(mut self, culture: Culture) -> Self {
        self.default_culture = Some(culture);
        self
    }

    /// Start from `store` instead of the bundled resources
    pub fn store(mut self, store: ResourceStore) -> Self {
        self.store = Some(store);
        self
    }

    /// Directory of TOML bundles merged over the base store
    pub fn resources_dir<P: AsRef<Path>>(mut self, dir: P) -> Self {
        self.resources_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    pub fn cache_enabled(mut self, enabled: bool) -> Self {
        self.cache_enabled = enabled;
        self
    }

    pub fn build(self) -> I18nResult<Localizer> {
        let mut store = match self.store {
            Some(store) => store,
            None => ResourceStore::bundled()?,
        };
        if let Some(dir) = &self.resources_dir {
            store.load_dir(dir)?;
        }
        debug!("Resource store holds {} templates", store.len());

        let default_culture = self.default_culture.unwrap_or_else(Culture::ambient);
        Ok(Localizer::from_lookup(
            Arc::new(store),
            default_culture,
            self.cache_enabled,
        ))
    }
}
