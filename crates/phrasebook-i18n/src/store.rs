//! Resource bundles: (domain, key, culture) to raw template
//!
//! Bundles are TOML documents, one per [`ResourceDomain`]. Each top-level table
//! is a culture name; nested tables are flattened into dotted key names, so
//! `[en.Noun.File] One = "file"` defines `Noun.File.One` for `en`.

use crate::culture::Culture;
use crate::domain::ResourceDomain;
use crate::error::{I18nError, I18nResult};
use crate::format::placeholder_count;
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

const BUNDLED: [(ResourceDomain, &str); 4] = [
    (ResourceDomain::YesNo, include_str!("../locales/yes_no.toml")),
    (
        ResourceDomain::OrdinalStrings,
        include_str!("../locales/ordinals.toml"),
    ),
    (ResourceDomain::TimeStrings, include_str!("../locales/time.toml")),
    (
        ResourceDomain::CountNouns,
        include_str!("../locales/count_nouns.toml"),
    ),
];

/// Exact-culture template lookup, with no fallback
pub trait ResourceLookup: Send + Sync + fmt::Debug {
    /// Template for `key` in exactly `culture`, if one exists
    fn lookup(&self, domain: ResourceDomain, key: &str, culture: &str) -> Option<&str>;
}

type CultureTable = HashMap<String, HashMap<String, String>>;

/// In-memory resource store, read-only once handed to a localizer
#[derive(Debug, Clone, Default)]
pub struct ResourceStore {
    bundles: HashMap<ResourceDomain, CultureTable>,
}

impl ResourceStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Store holding the bundles compiled into this crate
    pub fn bundled() -> I18nResult<Self> {
        let mut store = Self::new();
        for (domain, source) in BUNDLED {
            let count = store.merge_toml(domain, source)?;
            debug!("Loaded {} bundled {} templates", count, domain);
        }
        Ok(store)
    }

    /// Merge `<stem>.toml` bundles from `dir` over the current contents
    ///
    /// Missing files are skipped; templates in the directory replace
    /// templates already present for the same culture and key.
    pub fn load_dir<P: AsRef<Path>>(&mut self, dir: P) -> I18nResult<usize> {
        let dir = dir.as_ref();
        let mut total = 0;

        for domain in ResourceDomain::all() {
            let path = dir.join(format!("{}.toml", domain.file_stem()));
            if !path.is_file() {
                debug!("No {} bundle at {:?}", domain, path);
                continue;
            }

            let source = fs::read_to_string(&path).map_err(|source| I18nError::ResourceLoad {
                path: path.display().to_string(),
                source,
            })?;
            let count = self.merge_toml(domain, &source)?;
            debug!("Loaded {} {} templates from {:?}", count, domain, path);
            total += count;
        }

        info!("Loaded {} templates from {:?}", total, dir);
        Ok(total)
    }

    /// Parse a TOML bundle for `domain` and merge it into the store
    pub fn merge_toml(&mut self, domain: ResourceDomain, source: &str) -> I18nResult<usize> {
        let document: toml::Table = source.parse().map_err(|e: toml::de::Error| {
            I18nError::ResourceParse {
                domain,
                message: e.message().to_string(),
            }
        })?;

        let mut count = 0;
        for (culture, value) in document {
            let toml::Value::Table(table) = value else {
                return Err(I18nError::ResourceParse {
                    domain,
                    message: format!("expected a table for culture '{culture}'"),
                });
            };

            let mut flat = Vec::new();
            flatten_table(domain, &table, "", &mut flat)?;
            for (key, template) in flat {
                self.insert(domain, &culture, &key, &template)?;
                count += 1;
            }
        }
        Ok(count)
    }

    /// Add or replace a single template
    ///
    /// The culture name is canonicalized, the key must belong to `domain`
    /// and the template must parse.
    pub fn insert(
        &mut self,
        domain: ResourceDomain,
        culture: &str,
        key: &str,
        template: &str,
    ) -> I18nResult<()> {
        let culture = Culture::parse(culture).map_err(|_| I18nError::ResourceParse {
            domain,
            message: format!("invalid culture name '{culture}'"),
        })?;

        if ResourceDomain::for_key(key) != Some(domain) {
            return Err(I18nError::ResourceParse {
                domain,
                message: format!("key '{key}' does not belong to this domain"),
            });
        }

        placeholder_count(template).map_err(|e| I18nError::ResourceParse {
            domain,
            message: format!("{key} ({culture}): {e}"),
        })?;

        self.bundles
            .entry(domain)
            .or_default()
            .entry(culture.name().to_string())
            .or_default()
            .insert(key.to_string(), template.to_string());
        Ok(())
    }

    /// Cultures with at least one template in `domain`, sorted
    pub fn cultures(&self, domain: ResourceDomain) -> Vec<&str> {
        let mut cultures: Vec<&str> = self
            .bundles
            .get(&domain)
            .map(|table| table.keys().map(String::as_str).collect())
            .unwrap_or_default();
        cultures.sort_unstable();
        cultures
    }

    /// Keys defined for exactly `culture` in `domain`, sorted
    pub fn keys(&self, domain: ResourceDomain, culture: &str) -> Vec<&str> {
        let mut keys: Vec<&str> = self
            .bundles
            .get(&domain)
            .and_then(|table| table.get(culture))
            .map(|templates| templates.keys().map(String::as_str).collect())
            .unwrap_or_default();
        keys.sort_unstable();
        keys
    }

    /// Total number of templates across all domains
    pub fn len(&self) -> usize {
        self.bundles
            .values()
            .flat_map(HashMap::values)
            .map(HashMap::len)
            .sum()
    }

    /// Whether the store has no templates
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ResourceLookup for ResourceStore {
    fn lookup(&self, domain: ResourceDomain, key: &str, culture: &str) -> Option<&str> {
        self.bundles
            .get(&domain)?
            .get(culture)?
            .get(key)
            .map(String::as_str)
    }
}

fn flatten_table(
    domain: ResourceDomain,
    table: &toml::Table,
    prefix: &str,
    out: &mut Vec<(String, String)>,
) -> I18nResult<()> {
    for (name, value) in table {
        let key = if prefix.is_empty() {
            name.clone()
        } else {
            format!("{prefix}.{name}")
        };

        match value {
            toml::Value::String(template) => out.push((key, template.clone())),
            toml::Value::Table(nested) => flatten_table(domain, nested, &key, out)?,
            other => {
                return Err(I18nError::ResourceParse {
                    domain,
                    message: format!("'{key}' must be a string, found {}", other.type_str()),
                })
            }
        }
    }
    Ok(())
}
