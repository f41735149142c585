//! Core abstractions for service resolution.
//!
//! - [`traits`]: collaborator traits (driver, platform, pluggable services)
//! - [`catalog`]: named constructors for pluggable services
//! - [`registry`]: platform tag to driver class resolution
//! - [`service_cache`]: per-configuration singleton store

pub mod catalog;
pub mod registry;
pub mod service_cache;
pub mod traits;

pub use catalog::{CacheAdapterArgs, ServiceCatalog};
pub use registry::{
    reset_module_loader, set_module_loader, BuiltinModuleLoader, DriverModule, ModuleLoader,
    PlatformDescriptor, PlatformRegistry, PLATFORMS,
};
pub use service_cache::ServiceCache;
pub use traits::{
    CacheAdapter, Connection, Driver, DriverClass, EventSubscriber, Highlighter, Hydrator,
    LogWriter, Logger, LoggerOptions, MetadataProvider, NamingStrategy, PasswordProvider,
    Platform,
};
