//! Built-in metadata providers.

use crate::config::ConfigurationOptions;
use crate::core::traits::MetadataProvider;

/// Discovers metadata at runtime; the result is worth caching.
#[derive(Debug, Clone)]
pub struct ReflectMetadataProvider {
    entities: Vec<String>,
}

impl ReflectMetadataProvider {
    pub fn new(options: &ConfigurationOptions) -> Self {
        Self {
            entities: options.entities.clone(),
        }
    }

    /// Entity sources this provider discovers from.
    pub fn entities(&self) -> &[String] {
        &self.entities
    }
}

impl MetadataProvider for ReflectMetadataProvider {
    fn use_cache(&self) -> bool {
        true
    }
}

/// Metadata declared up front; nothing to cache.
#[derive(Debug, Clone)]
pub struct StaticMetadataProvider {
    entities: Vec<String>,
}

impl StaticMetadataProvider {
    pub fn new(options: &ConfigurationOptions) -> Self {
        Self {
            entities: options.entities.clone(),
        }
    }

    pub fn entities(&self) -> &[String] {
        &self.entities
    }
}

impl MetadataProvider for StaticMetadataProvider {
    fn use_cache(&self) -> bool {
        false
    }
}
