//! Collaborator traits consumed by the configuration core.
//!
//! - [`Driver`], [`Connection`], [`Platform`]: backend connector and its
//!   database-kind specific behaviour
//! - [`NamingStrategy`], [`Hydrator`], [`MetadataProvider`], [`CacheAdapter`]:
//!   pluggable services resolved through the service catalog
//! - [`Logger`], [`Highlighter`], [`EventSubscriber`], [`PasswordProvider`]:
//!   hooks supplied by the application
//!
//! The configuration core only depends on these narrow surfaces; concrete
//! implementations live in `drivers` and `services`.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::config::{ConfigurationOptions, DebugMode, LoggerNamespace, OptionsHandle};
use crate::error::Result;

/// Backend connection handle.
pub trait Connection: Send + Sync {
    /// Client URL used when the application did not configure one.
    fn default_client_url(&self) -> String;
}

/// Database-kind specific behaviour.
pub trait Platform: Send + Sync {
    /// Platform identifier (e.g., "postgresql", "mongo").
    fn name(&self) -> &str;

    /// Hand the platform a handle on the live options of its configuration.
    /// Only the first call has an effect.
    fn set_config(&self, options: OptionsHandle);

    /// Name of the naming strategy used when none is configured.
    fn naming_strategy(&self) -> &str;

    /// Whether statements run in implicit transactions by default.
    fn uses_implicit_transactions(&self) -> bool;

    fn default_charset(&self) -> &str;

    /// Repository class used when neither the entity nor the options name one.
    fn repository_class(&self) -> &str;

    /// Quote an identifier (table name, column name, etc.).
    fn quote_identifier(&self, name: &str) -> String;

    /// Configured schema, falling back to the platform's default schema.
    fn schema_name(&self) -> Option<String>;
}

/// Backend connector that owns a [`Connection`] and a [`Platform`].
pub trait Driver: Send + Sync {
    /// Driver class name (e.g., "PostgreSqlDriver").
    fn name(&self) -> &str;

    fn platform(&self) -> Arc<dyn Platform>;

    fn connection(&self) -> &dyn Connection;
}

type DriverCtor = dyn Fn(&ConfigurationOptions) -> Result<Arc<dyn Driver>> + Send + Sync;

/// Named driver constructor.
///
/// Stands in for a driver class reference: the name is its identity and the
/// constructor receives the merged options so the driver can read them
/// during its own setup.
#[derive(Clone)]
pub struct DriverClass {
    name: Cow<'static, str>,
    ctor: Arc<DriverCtor>,
}

impl DriverClass {
    pub fn new<F>(name: impl Into<Cow<'static, str>>, ctor: F) -> Self
    where
        F: Fn(&ConfigurationOptions) -> Result<Arc<dyn Driver>> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            ctor: Arc::new(ctor),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Construct a driver instance.
    pub fn construct(&self, options: &ConfigurationOptions) -> Result<Arc<dyn Driver>> {
        (self.ctor)(options)
    }
}

impl fmt::Debug for DriverClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("DriverClass").field(&self.name).finish()
    }
}

/// Maps entity and property names to table and column names.
pub trait NamingStrategy: Send + Sync {
    fn class_to_table_name(&self, entity_name: &str) -> String;

    fn property_to_column_name(&self, property_name: &str) -> String;

    /// Name of the primary key column referenced by default.
    fn reference_column_name(&self) -> String {
        "id".to_string()
    }

    fn join_table_name(&self, source_entity: &str, target_entity: &str, property: &str)
        -> String;

    fn join_key_column_name(&self, entity_name: &str, referenced_column: Option<&str>) -> String;
}

/// Assigns raw data onto entity instances.
pub trait Hydrator: Send + Sync {
    /// Copy `data` onto `entity`, returning the number of assigned properties.
    fn hydrate(&self, entity: &mut Map<String, Value>, data: &Map<String, Value>) -> usize;
}

/// Source of entity metadata.
pub trait MetadataProvider: Send + Sync {
    /// Whether discovered metadata may be cached.
    fn use_cache(&self) -> bool;

    /// Subscribers collected while discovering entities.
    fn discovered_subscribers(&self) -> Vec<Arc<dyn EventSubscriber>> {
        Vec::new()
    }
}

/// Key/value cache used for metadata and query results.
pub trait CacheAdapter: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<Value>>;

    /// Store a value. `expiration` is in milliseconds; adapters without
    /// expiry support ignore it.
    fn set(&self, key: &str, value: Value, expiration: Option<u64>) -> Result<()>;

    fn remove(&self, key: &str) -> Result<()>;

    fn clear(&self) -> Result<()>;
}

/// Syntax highlighting for logged queries.
pub trait Highlighter: Send + Sync {
    fn highlight(&self, text: &str) -> String;
}

/// Entity lifecycle subscriber.
pub trait EventSubscriber: Send + Sync {
    fn name(&self) -> &str;

    /// Entities this subscriber listens to; empty means all of them.
    fn subscribed_entities(&self) -> Vec<String> {
        Vec::new()
    }
}

/// ORM level logger, distinct from the crate's own `tracing` output.
pub trait Logger: Send + Sync {
    fn log(&self, namespace: LoggerNamespace, message: &str);

    fn warn(&self, namespace: LoggerNamespace, message: &str) {
        self.log(namespace, &format!("warning: {message}"));
    }

    fn is_enabled(&self, namespace: LoggerNamespace) -> bool;
}

/// Raw output sink used by loggers.
pub type LogWriter = Arc<dyn Fn(&str) + Send + Sync>;

/// Everything a logger factory receives.
#[derive(Clone)]
pub struct LoggerOptions {
    pub debug_mode: DebugMode,
    pub ignore_deprecations: bool,
    pub uses_replicas: bool,
    pub highlighter: Arc<dyn Highlighter>,
    pub writer: LogWriter,
}

impl fmt::Debug for LoggerOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerOptions")
            .field("debug_mode", &self.debug_mode)
            .field("ignore_deprecations", &self.ignore_deprecations)
            .field("uses_replicas", &self.uses_replicas)
            .finish_non_exhaustive()
    }
}

/// Deferred password resolution (e.g., short-lived cloud IAM tokens).
#[async_trait]
pub trait PasswordProvider: Send + Sync {
    async fn password(&self) -> Result<String>;
}
