//! Service catalog for explicit dependency injection.
//!
//! The [`ServiceCatalog`] maps the names used in options (`naming_strategy`,
//! `hydrator`, `metadata_provider`, `cache.adapter`, `result_cache.adapter`)
//! to constructors. It is built per configuration, starting from the
//! built-ins and extended with whatever the application registered on its
//! [`Options`](crate::config::Options).

use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use serde_json::{Map, Value};

use crate::config::ConfigurationOptions;
use crate::error::{OrmError, Result};

use super::traits::{CacheAdapter, Hydrator, MetadataProvider, NamingStrategy, Platform};

pub type NamingStrategyFactory = Arc<dyn Fn() -> Result<Arc<dyn NamingStrategy>> + Send + Sync>;

pub type HydratorFactory =
    Arc<dyn Fn(Arc<dyn Platform>) -> Result<Arc<dyn Hydrator>> + Send + Sync>;

pub type MetadataProviderFactory =
    Arc<dyn Fn(&ConfigurationOptions) -> Result<Arc<dyn MetadataProvider>> + Send + Sync>;

pub type CacheAdapterFactory =
    Arc<dyn Fn(&CacheAdapterArgs) -> Result<Arc<dyn CacheAdapter>> + Send + Sync>;

/// Constructor arguments for cache adapters.
///
/// The metadata cache passes its options, the base directory and the pretty
/// flag; the result cache passes only its options (with `expiration`).
#[derive(Debug, Clone, Default)]
pub struct CacheAdapterArgs {
    pub options: Map<String, Value>,
    pub base_dir: Option<PathBuf>,
    pub pretty: bool,
}

/// Registry of pluggable service constructors, keyed by name.
#[derive(Clone, Default)]
pub struct ServiceCatalog {
    naming_strategies: HashMap<String, NamingStrategyFactory>,
    hydrators: HashMap<String, HydratorFactory>,
    metadata_providers: HashMap<String, MetadataProviderFactory>,
    cache_adapters: HashMap<String, CacheAdapterFactory>,
}

impl ServiceCatalog {
    /// Create a new empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog with the built-in services registered.
    pub fn with_builtins() -> Self {
        use crate::services::{
            EntityCaseNamingStrategy, FileCacheAdapter, MemoryCacheAdapter, MongoNamingStrategy,
            NullCacheAdapter, ObjectHydrator, ReflectMetadataProvider, StaticMetadataProvider,
            UnderscoreNamingStrategy,
        };

        let mut catalog = Self::new();

        catalog.register_naming_strategy("underscore", || Ok(Arc::new(UnderscoreNamingStrategy)));
        catalog.register_naming_strategy("entity_case", || Ok(Arc::new(EntityCaseNamingStrategy)));
        catalog.register_naming_strategy("mongo", || Ok(Arc::new(MongoNamingStrategy)));

        catalog.register_hydrator("object", |platform| Ok(Arc::new(ObjectHydrator::new(platform))));

        catalog.register_metadata_provider("reflect", |options| {
            Ok(Arc::new(ReflectMetadataProvider::new(options)))
        });
        catalog.register_metadata_provider("static", |options| {
            Ok(Arc::new(StaticMetadataProvider::new(options)))
        });

        catalog.register_cache_adapter("file", |args| Ok(Arc::new(FileCacheAdapter::new(args))));
        catalog.register_cache_adapter("memory", |args| {
            Ok(Arc::new(MemoryCacheAdapter::new(args)))
        });
        catalog.register_cache_adapter("null", |_| Ok(Arc::new(NullCacheAdapter)));

        catalog
    }

    pub fn register_naming_strategy<F>(&mut self, name: impl Into<String>, factory: F)
    where
        F: Fn() -> Result<Arc<dyn NamingStrategy>> + Send + Sync + 'static,
    {
        self.naming_strategies.insert(name.into(), Arc::new(factory));
    }

    pub fn register_hydrator<F>(&mut self, name: impl Into<String>, factory: F)
    where
        F: Fn(Arc<dyn Platform>) -> Result<Arc<dyn Hydrator>> + Send + Sync + 'static,
    {
        self.hydrators.insert(name.into(), Arc::new(factory));
    }

    pub fn register_metadata_provider<F>(&mut self, name: impl Into<String>, factory: F)
    where
        F: Fn(&ConfigurationOptions) -> Result<Arc<dyn MetadataProvider>> + Send + Sync + 'static,
    {
        self.metadata_providers.insert(name.into(), Arc::new(factory));
    }

    pub fn register_cache_adapter<F>(&mut self, name: impl Into<String>, factory: F)
    where
        F: Fn(&CacheAdapterArgs) -> Result<Arc<dyn CacheAdapter>> + Send + Sync + 'static,
    {
        self.cache_adapters.insert(name.into(), Arc::new(factory));
    }

    /// Add every entry of `other`, replacing entries with the same name.
    pub fn extend(&mut self, other: &ServiceCatalog) {
        self.naming_strategies
            .extend(other.naming_strategies.iter().map(|(k, v)| (k.clone(), v.clone())));
        self.hydrators
            .extend(other.hydrators.iter().map(|(k, v)| (k.clone(), v.clone())));
        self.metadata_providers
            .extend(other.metadata_providers.iter().map(|(k, v)| (k.clone(), v.clone())));
        self.cache_adapters
            .extend(other.cache_adapters.iter().map(|(k, v)| (k.clone(), v.clone())));
    }

    pub fn require_naming_strategy(&self, name: &str) -> Result<NamingStrategyFactory> {
        require(&self.naming_strategies, "naming strategy", name)
    }

    pub fn require_hydrator(&self, name: &str) -> Result<HydratorFactory> {
        require(&self.hydrators, "hydrator", name)
    }

    pub fn require_metadata_provider(&self, name: &str) -> Result<MetadataProviderFactory> {
        require(&self.metadata_providers, "metadata provider", name)
    }

    pub fn require_cache_adapter(&self, name: &str) -> Result<CacheAdapterFactory> {
        require(&self.cache_adapters, "cache adapter", name)
    }

    /// Get all registered cache adapter names, sorted.
    pub fn cache_adapter_names(&self) -> Vec<String> {
        sorted_names(&self.cache_adapters)
    }

    /// Get all registered naming strategy names, sorted.
    pub fn naming_strategy_names(&self) -> Vec<String> {
        sorted_names(&self.naming_strategies)
    }
}

fn require<F: Clone>(entries: &HashMap<String, F>, kind: &'static str, name: &str) -> Result<F> {
    entries
        .get(name)
        .cloned()
        .ok_or_else(|| OrmError::UnknownService {
            kind,
            name: name.to_string(),
            available: sorted_names(entries),
        })
}

fn sorted_names<F>(entries: &HashMap<String, F>) -> Vec<String> {
    let mut names: Vec<String> = entries.keys().cloned().collect();
    names.sort();
    names
}

impl fmt::Debug for ServiceCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceCatalog")
            .field("naming_strategies", &sorted_names(&self.naming_strategies))
            .field("hydrators", &sorted_names(&self.hydrators))
            .field("metadata_providers", &sorted_names(&self.metadata_providers))
            .field("cache_adapters", &sorted_names(&self.cache_adapters))
            .finish()
    }
}
