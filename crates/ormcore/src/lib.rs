//! # ormcore
//!
//! Configuration and service-resolution core for a multi-backend ORM.
//!
//! A [`Configuration`] is built once from user [`Options`]. It merges them
//! over the Option Defaults Table, validates the result, resolves the
//! database driver through the [`PlatformRegistry`], adapts migration and
//! seeder paths to the project layout, and then hands out the pluggable
//! services every other subsystem needs:
//!
//! - **Naming strategies** mapping entities and properties to tables and columns
//! - **Hydrator** and **comparator** for entity data
//! - **Metadata provider** deciding whether metadata is cached
//! - **Cache adapters** for metadata and query results
//! - **Logger** and **highlighter** for ORM level output
//!
//! Services are constructed on first request and cached per configuration.
//!
//! ## Example
//!
//! ```rust,no_run
//! use ormcore::{Configuration, Options};
//!
//! fn main() -> ormcore::Result<()> {
//!     let options = Options::new()
//!         .with_type("postgresql")
//!         .with_db_name("library")
//!         .with_entities(["./dist/entities"]);
//!     let config = Configuration::new(options, true)?;
//!     println!("Connecting to {}", config.get_client_url(true)?);
//!     let naming = config.get_naming_strategy()?;
//!     println!("Book -> {}", naming.class_to_table_name("BookTag"));
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod core;
pub mod drivers;
pub mod error;
pub mod services;

// Re-exports for convenient access
pub use config::{
    ConfigLoader, Configuration, ConfigurationOptions, LoggerNamespace, Options, OptionsHandle,
};
pub use core::{
    reset_module_loader, set_module_loader, CacheAdapter, Driver, DriverClass, DriverModule,
    ModuleLoader, Platform, PlatformRegistry, ServiceCatalog, PLATFORMS,
};
pub use error::{OrmError, Result};
