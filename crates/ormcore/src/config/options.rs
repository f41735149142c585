//! User-facing option set.
//!
//! [`Options`] carries three kinds of input:
//!
//! - plain values, kept as a JSON tree keyed like the option schema
//!   (`db_name`, `migrations.path`, ...) and merged over the defaults
//! - plugins: code-valued collaborators (custom driver class, logger
//!   factory, highlighter, subscribers, named service constructors,
//!   module loader, extensions)
//! - hooks: callbacks invoked later through the configuration (file name
//!   generators, context resolver, not-found handlers, password provider)

use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::sync::Arc;

use serde_json::{Map, Value};

use crate::core::catalog::{CacheAdapterArgs, ServiceCatalog};
use crate::core::registry::ModuleLoader;
use crate::core::traits::{
    CacheAdapter, DriverClass, EventSubscriber, Highlighter, Hydrator, LogWriter, Logger,
    LoggerOptions, MetadataProvider, NamingStrategy, PasswordProvider, Platform,
};
use crate::error::{OrmError, Result};

use super::merge;
use super::types::ConfigurationOptions;

pub type LoggerFactory = Arc<dyn Fn(LoggerOptions) -> Arc<dyn Logger> + Send + Sync>;

/// `(timestamp, name) -> file name`, without extension.
pub type MigrationFileNameFn = Arc<dyn Fn(&str, Option<&str>) -> String + Send + Sync>;

/// `class name -> file name`, without extension.
pub type FileNameFn = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// Returns the active context registered under the given name, if any.
pub type ContextResolver = Arc<dyn Fn(&str) -> Option<Extension> + Send + Sync>;

/// Builds the error raised when a lookup by `where` finds nothing (or not
/// exactly one entity).
pub type NotFoundHandler = Arc<dyn Fn(&str, &Value) -> OrmError + Send + Sync>;

/// Opaque value registered by an application or plugin.
pub type Extension = Arc<dyn Any + Send + Sync>;

/// Callback hooks consulted after construction.
#[derive(Clone, Default)]
pub struct Hooks {
    pub migration_file_name: Option<MigrationFileNameFn>,
    pub seeder_file_name: Option<FileNameFn>,
    pub entity_file_name: Option<FileNameFn>,
    pub context: Option<ContextResolver>,
    pub find_one_or_fail: Option<NotFoundHandler>,
    pub find_exactly_one_or_fail: Option<NotFoundHandler>,
    pub password_provider: Option<Arc<dyn PasswordProvider>>,
}

/// Options supplied by the application when building a
/// [`Configuration`](super::Configuration).
#[derive(Clone)]
pub struct Options {
    pub(crate) values: Value,
    pub(crate) driver: Option<DriverClass>,
    pub(crate) services: ServiceCatalog,
    pub(crate) logger_factory: Option<LoggerFactory>,
    pub(crate) log_writer: Option<LogWriter>,
    pub(crate) highlighter: Option<Arc<dyn Highlighter>>,
    pub(crate) subscribers: Vec<Arc<dyn EventSubscriber>>,
    pub(crate) module_loader: Option<Arc<dyn ModuleLoader>>,
    pub(crate) extensions: HashMap<String, Extension>,
    pub(crate) hooks: Hooks,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            values: Value::Object(Map::new()),
            driver: None,
            services: ServiceCatalog::new(),
            logger_factory: None,
            log_writer: None,
            highlighter: None,
            subscribers: Vec::new(),
            module_loader: None,
            extensions: HashMap::new(),
            hooks: Hooks::default(),
        }
    }
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a value tree. The root must be an object.
    pub fn from_value(values: Value) -> Result<Self> {
        if !values.is_object() {
            return Err(OrmError::Config(
                "options must be a mapping of option names to values".into(),
            ));
        }
        Ok(Self {
            values,
            ..Self::default()
        })
    }

    /// Build from a fully typed option set, e.g. one returned by
    /// [`Configuration::get_all`](super::Configuration::get_all).
    pub fn from_typed(options: &ConfigurationOptions) -> Result<Self> {
        Self::from_value(serde_json::to_value(options)?)
    }

    /// Set a value at a dotted key (`migrations.path`).
    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        merge::insert(&mut self.values, key, value.into());
        self
    }

    /// Platform tag, one of the platform registry keys.
    pub fn with_type(self, tag: &str) -> Self {
        self.with("type", tag)
    }

    pub fn with_db_name(self, db_name: &str) -> Self {
        self.with("db_name", db_name)
    }

    pub fn with_client_url(self, client_url: &str) -> Self {
        self.with("client_url", client_url)
    }

    pub fn with_entities<I, S>(self, entities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entities: Vec<Value> = entities.into_iter().map(|e| Value::String(e.into())).collect();
        self.with("entities", entities)
    }

    pub fn with_base_dir(self, base_dir: impl AsRef<Path>) -> Self {
        let base_dir = base_dir.as_ref().to_string_lossy().into_owned();
        self.with("base_dir", base_dir)
    }

    /// Use an explicit driver class instead of the platform registry.
    pub fn with_driver(mut self, driver: DriverClass) -> Self {
        self.driver = Some(driver);
        self
    }

    pub fn register_naming_strategy<F>(mut self, name: &str, factory: F) -> Self
    where
        F: Fn() -> Result<Arc<dyn NamingStrategy>> + Send + Sync + 'static,
    {
        self.services.register_naming_strategy(name, factory);
        self
    }

    pub fn register_hydrator<F>(mut self, name: &str, factory: F) -> Self
    where
        F: Fn(Arc<dyn Platform>) -> Result<Arc<dyn Hydrator>> + Send + Sync + 'static,
    {
        self.services.register_hydrator(name, factory);
        self
    }

    pub fn register_metadata_provider<F>(mut self, name: &str, factory: F) -> Self
    where
        F: Fn(&ConfigurationOptions) -> Result<Arc<dyn MetadataProvider>> + Send + Sync + 'static,
    {
        self.services.register_metadata_provider(name, factory);
        self
    }

    pub fn register_cache_adapter<F>(mut self, name: &str, factory: F) -> Self
    where
        F: Fn(&CacheAdapterArgs) -> Result<Arc<dyn CacheAdapter>> + Send + Sync + 'static,
    {
        self.services.register_cache_adapter(name, factory);
        self
    }

    /// Replace the default logger.
    pub fn with_logger<F>(mut self, factory: F) -> Self
    where
        F: Fn(LoggerOptions) -> Arc<dyn Logger> + Send + Sync + 'static,
    {
        self.logger_factory = Some(Arc::new(factory));
        self
    }

    /// Raw sink receiving every formatted log line.
    pub fn with_log_writer<F>(mut self, writer: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.log_writer = Some(Arc::new(writer));
        self
    }

    pub fn with_highlighter(mut self, highlighter: Arc<dyn Highlighter>) -> Self {
        self.highlighter = Some(highlighter);
        self
    }

    pub fn with_subscriber(mut self, subscriber: Arc<dyn EventSubscriber>) -> Self {
        self.subscribers.push(subscriber);
        self
    }

    /// Install a process-wide module loader during construction.
    pub fn with_module_loader(mut self, loader: Arc<dyn ModuleLoader>) -> Self {
        self.module_loader = Some(loader);
        self
    }

    pub fn with_extension(mut self, name: &str, extension: Extension) -> Self {
        self.extensions.insert(name.to_string(), extension);
        self
    }

    pub fn on_migration_file_name<F>(mut self, f: F) -> Self
    where
        F: Fn(&str, Option<&str>) -> String + Send + Sync + 'static,
    {
        self.hooks.migration_file_name = Some(Arc::new(f));
        self
    }

    pub fn on_seeder_file_name<F>(mut self, f: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.hooks.seeder_file_name = Some(Arc::new(f));
        self
    }

    pub fn on_entity_file_name<F>(mut self, f: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.hooks.entity_file_name = Some(Arc::new(f));
        self
    }

    pub fn with_context_resolver<F>(mut self, f: F) -> Self
    where
        F: Fn(&str) -> Option<Extension> + Send + Sync + 'static,
    {
        self.hooks.context = Some(Arc::new(f));
        self
    }

    pub fn on_find_one_or_fail<F>(mut self, f: F) -> Self
    where
        F: Fn(&str, &Value) -> OrmError + Send + Sync + 'static,
    {
        self.hooks.find_one_or_fail = Some(Arc::new(f));
        self
    }

    pub fn on_find_exactly_one_or_fail<F>(mut self, f: F) -> Self
    where
        F: Fn(&str, &Value) -> OrmError + Send + Sync + 'static,
    {
        self.hooks.find_exactly_one_or_fail = Some(Arc::new(f));
        self
    }

    /// Resolve the password lazily instead of reading the `password` option.
    pub fn with_password_provider(mut self, provider: Arc<dyn PasswordProvider>) -> Self {
        self.hooks.password_provider = Some(provider);
        self
    }

    /// Merge `other` over `self`. Values deep-merge; plugins and hooks set in
    /// `other` win, subscribers and registrations accumulate.
    pub fn merge(mut self, other: Options) -> Self {
        merge::deep_merge(&mut self.values, other.values);
        self.services.extend(&other.services);
        self.subscribers.extend(other.subscribers);
        self.extensions.extend(other.extensions);
        self.driver = other.driver.or(self.driver);
        self.logger_factory = other.logger_factory.or(self.logger_factory);
        self.log_writer = other.log_writer.or(self.log_writer);
        self.highlighter = other.highlighter.or(self.highlighter);
        self.module_loader = other.module_loader.or(self.module_loader);

        let hooks = other.hooks;
        self.hooks = Hooks {
            migration_file_name: hooks.migration_file_name.or(self.hooks.migration_file_name),
            seeder_file_name: hooks.seeder_file_name.or(self.hooks.seeder_file_name),
            entity_file_name: hooks.entity_file_name.or(self.hooks.entity_file_name),
            context: hooks.context.or(self.hooks.context),
            find_one_or_fail: hooks.find_one_or_fail.or(self.hooks.find_one_or_fail),
            find_exactly_one_or_fail: hooks
                .find_exactly_one_or_fail
                .or(self.hooks.find_exactly_one_or_fail),
            password_provider: hooks.password_provider.or(self.hooks.password_provider),
        };
        self
    }

    /// The user supplied value tree, before merging with defaults.
    pub fn values(&self) -> &Value {
        &self.values
    }

    pub fn value(&self, key: &str) -> Option<&Value> {
        merge::lookup(&self.values, key)
    }

    /// Whether the user supplied a non-empty value for `key`.
    pub fn is_set(&self, key: &str) -> bool {
        merge::is_provided(&self.values, key)
    }

    pub fn has_driver(&self) -> bool {
        self.driver.is_some()
    }
}

impl fmt::Debug for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut values = self.values.clone();
        if merge::lookup(&values, "password").is_some() {
            merge::insert(&mut values, "password", Value::from("[REDACTED]"));
        }
        if let Some(Value::Array(replicas)) = values.get_mut("replicas") {
            for replica in replicas.iter_mut().filter_map(Value::as_object_mut) {
                if replica.contains_key("password") {
                    replica.insert("password".into(), Value::from("[REDACTED]"));
                }
            }
        }
        let mut extensions: Vec<&String> = self.extensions.keys().collect();
        extensions.sort();
        f.debug_struct("Options")
            .field("values", &values)
            .field("driver", &self.driver)
            .field("services", &self.services)
            .field("subscribers", &self.subscribers.len())
            .field("extensions", &extensions)
            .finish_non_exhaustive()
    }
}
