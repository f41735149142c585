//! Platform registry.
//!
//! A static table maps every supported platform tag to the driver class that
//! implements it and the package that provides that class. Resolving a tag
//! asks the active [`ModuleLoader`] for the package and extracts the class.
//!
//! The set of tags is fixed and known at compile time; which packages are
//! actually available depends on the loader. The built-in loader serves the
//! drivers compiled in through Cargo features, and an application can
//! install its own loader process-wide with [`set_module_loader`].

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use tracing::debug;

use crate::error::{OrmError, Result};

use super::traits::DriverClass;

/// One supported backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformDescriptor {
    /// Value of the `type` option.
    pub tag: &'static str,
    /// Driver class exported by the package.
    pub driver_class: &'static str,
    /// Package providing the driver.
    pub package: &'static str,
}

/// Every platform the registry knows about.
pub const PLATFORMS: &[PlatformDescriptor] = &[
    PlatformDescriptor {
        tag: "mongo",
        driver_class: "MongoDriver",
        package: "ormcore-mongodb",
    },
    PlatformDescriptor {
        tag: "mysql",
        driver_class: "MySqlDriver",
        package: "ormcore-mysql",
    },
    PlatformDescriptor {
        tag: "mariadb",
        driver_class: "MariaDbDriver",
        package: "ormcore-mariadb",
    },
    PlatformDescriptor {
        tag: "postgresql",
        driver_class: "PostgreSqlDriver",
        package: "ormcore-postgresql",
    },
    PlatformDescriptor {
        tag: "mssql",
        driver_class: "MsSqlDriver",
        package: "ormcore-mssql",
    },
    PlatformDescriptor {
        tag: "sqlite",
        driver_class: "SqliteDriver",
        package: "ormcore-sqlite",
    },
    PlatformDescriptor {
        tag: "better-sqlite",
        driver_class: "BetterSqliteDriver",
        package: "ormcore-better-sqlite",
    },
    PlatformDescriptor {
        tag: "libsql",
        driver_class: "LibSqlDriver",
        package: "ormcore-libsql",
    },
];

/// A loaded package and the driver classes it exports.
#[derive(Clone, Default)]
pub struct DriverModule {
    package: String,
    exports: HashMap<String, DriverClass>,
}

impl DriverModule {
    pub fn new(package: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            exports: HashMap::new(),
        }
    }

    /// Export a driver class under its own name.
    pub fn with_export(mut self, class: DriverClass) -> Self {
        self.exports.insert(class.name().to_string(), class);
        self
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    /// Look up an exported class by name.
    pub fn export(&self, class: &str) -> Result<DriverClass> {
        self.exports
            .get(class)
            .cloned()
            .ok_or_else(|| OrmError::MissingExport {
                package: self.package.clone(),
                class: class.to_string(),
            })
    }
}

impl fmt::Debug for DriverModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut exports: Vec<&String> = self.exports.keys().collect();
        exports.sort();
        f.debug_struct("DriverModule")
            .field("package", &self.package)
            .field("exports", &exports)
            .finish()
    }
}

/// Provides driver packages by id.
pub trait ModuleLoader: Send + Sync {
    fn load(&self, package: &str) -> Result<DriverModule>;
}

/// Loader serving the drivers compiled into this crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinModuleLoader;

impl ModuleLoader for BuiltinModuleLoader {
    fn load(&self, package: &str) -> Result<DriverModule> {
        crate::drivers::builtin_module(package).ok_or_else(|| {
            let tag = PLATFORMS
                .iter()
                .find(|d| d.package == package)
                .map(|d| d.tag)
                .unwrap_or(package);
            OrmError::DriverUnavailable {
                tag: tag.to_string(),
                package: package.to_string(),
            }
        })
    }
}

static MODULE_LOADER: RwLock<Option<Arc<dyn ModuleLoader>>> = RwLock::new(None);

/// Install a process-wide module loader, replacing the built-in one.
pub fn set_module_loader(loader: Arc<dyn ModuleLoader>) {
    *MODULE_LOADER.write().unwrap_or_else(PoisonError::into_inner) = Some(loader);
}

/// Restore the built-in module loader.
pub fn reset_module_loader() {
    *MODULE_LOADER.write().unwrap_or_else(PoisonError::into_inner) = None;
}

fn current_loader() -> Arc<dyn ModuleLoader> {
    MODULE_LOADER
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
        .unwrap_or_else(|| Arc::new(BuiltinModuleLoader))
}

/// Lookup and resolution over [`PLATFORMS`].
pub struct PlatformRegistry;

impl PlatformRegistry {
    /// All registered platform tags, in registry order.
    pub fn tags() -> Vec<&'static str> {
        PLATFORMS.iter().map(|d| d.tag).collect()
    }

    pub fn descriptor(tag: &str) -> Option<&'static PlatformDescriptor> {
        PLATFORMS.iter().find(|d| d.tag == tag)
    }

    pub fn is_known(tag: &str) -> bool {
        Self::descriptor(tag).is_some()
    }

    /// Error for an unrecognized tag, listing every valid one.
    pub fn unknown(tag: &str) -> OrmError {
        OrmError::UnknownPlatform {
            tag: tag.to_string(),
            supported: Self::tags().into_iter().map(String::from).collect(),
        }
    }

    /// Resolve a platform tag to its driver class through the active loader.
    pub fn resolve(tag: &str) -> Result<DriverClass> {
        let descriptor = Self::descriptor(tag).ok_or_else(|| Self::unknown(tag))?;
        let module = current_loader().load(descriptor.package)?;
        let class = module.export(descriptor.driver_class)?;
        debug!(
            "Resolved platform '{}' to {} from {}",
            tag, descriptor.driver_class, descriptor.package
        );
        Ok(class)
    }

    /// Whether the active loader can provide the package for `tag`.
    pub fn is_available(tag: &str) -> bool {
        Self::resolve(tag).is_ok()
    }
}
