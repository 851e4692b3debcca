//! Culture fallback resolution
//!
//! A key is looked up in the requested culture, then its neutral language,
//! then English. Blank templates count as absent.

use crate::culture::{Culture, FALLBACK_CULTURE};
use crate::domain::ResourceKey;
use crate::error::{I18nError, I18nResult};
use crate::store::ResourceLookup;
use std::sync::Arc;
use tracing::{debug, warn};

/// A template together with the culture it was found in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution<'a> {
    pub template: &'a str,
    pub culture: &'a str,
}

/// Walks a culture's fallback chain against a [`ResourceLookup`]
#[derive(Debug, Clone)]
pub struct CultureResolver {
    store: Arc<dyn ResourceLookup>,
}

impl CultureResolver {
    pub fn new(store: Arc<dyn ResourceLookup>) -> Self {
        Self { store }
    }

    /// First non-blank template in the chain, or `None`
    pub fn lookup<'a>(&'a self, key: &ResourceKey, culture: &'a Culture) -> Option<Resolution<'a>> {
        for (hop, name) in culture.fallback_chain().into_iter().enumerate() {
            let Some(template) = self.store.lookup(key.domain(), key.name(), name) else {
                continue;
            };
            if template.trim().is_empty() {
                debug!("Skipping blank template for {} in '{}'", key, name);
                continue;
            }

            if hop > 0 {
                if name == FALLBACK_CULTURE && culture.language() != FALLBACK_CULTURE {
                    warn!(
                        "Resource {} not found for culture '{}', falling back to '{}'",
                        key, culture, FALLBACK_CULTURE
                    );
                } else {
                    debug!("Resource {} for '{}' resolved from '{}'", key, culture, name);
                }
            }

            return Some(Resolution {
                template,
                culture: name,
            });
        }
        None
    }

    /// Like [`lookup`](Self::lookup), but a miss is a [`I18nError::MissingResource`]
    pub fn resolve<'a>(&'a self, key: &ResourceKey, culture: &'a Culture) -> I18nResult<Resolution<'a>> {
        self.lookup(key, culture)
            .ok_or_else(|| I18nError::MissingResource {
                domain: key.domain(),
                key: key.name().to_string(),
                culture: culture.name().to_string(),
            })
    }
}
