//! Built-in database drivers.
//!
//! - [`postgres`]: PostgreSQL
//! - [`mysql`]: MySQL and MariaDB
//! - [`mssql`]: Microsoft SQL Server
//! - [`sqlite`]: sqlite, better-sqlite and libsql
//! - [`mongo`]: MongoDB
//! - [`common`]: shared driver/platform/connection scaffolding
//!
//! Each backend is gated by a Cargo feature of the same name (the sqlite
//! family shares `sqlite`, MariaDB ships with `mysql`). The platform
//! registry lists every backend regardless; a disabled one surfaces as
//! [`OrmError::DriverUnavailable`](crate::error::OrmError::DriverUnavailable)
//! when it is selected.
//!
//! # Adding New Databases
//!
//! 1. Create a module declaring a `PlatformProfile` and `ConnectionProfile`
//! 2. Export the driver class from a `DriverModule`
//! 3. Add the package to [`builtin_module`] and the tag to `core::registry::PLATFORMS`
//! 4. Gate the module with a feature flag in `Cargo.toml`

pub mod common;

#[cfg(feature = "mongo")]
pub mod mongo;
#[cfg(feature = "mssql")]
pub mod mssql;
#[cfg(feature = "mysql")]
pub mod mysql;
#[cfg(feature = "postgresql")]
pub mod postgres;
#[cfg(feature = "sqlite")]
pub mod sqlite;

pub use common::{BuiltinDriver, BuiltinPlatform, ConnectionProfile, PlatformProfile, UrlConnection};

use crate::core::registry::DriverModule;

/// Package served by the built-in module loader, if compiled in.
pub(crate) fn builtin_module(package: &str) -> Option<DriverModule> {
    match package {
        #[cfg(feature = "mongo")]
        "ormcore-mongodb" => Some(mongo::module()),
        #[cfg(feature = "mysql")]
        "ormcore-mysql" => Some(mysql::mysql_module()),
        #[cfg(feature = "mysql")]
        "ormcore-mariadb" => Some(mysql::mariadb_module()),
        #[cfg(feature = "postgresql")]
        "ormcore-postgresql" => Some(postgres::module()),
        #[cfg(feature = "mssql")]
        "ormcore-mssql" => Some(mssql::module()),
        #[cfg(feature = "sqlite")]
        "ormcore-sqlite" => Some(sqlite::sqlite_module()),
        #[cfg(feature = "sqlite")]
        "ormcore-better-sqlite" => Some(sqlite::better_sqlite_module()),
        #[cfg(feature = "sqlite")]
        "ormcore-libsql" => Some(sqlite::libsql_module()),
        _ => None,
    }
}
