//! SQLite family drivers: sqlite, better-sqlite and libsql.
//!
//! File based; there is no default client URL, the database is selected
//! through `db_name`.

use crate::core::registry::DriverModule;

use super::common::{BuiltinDriver, ConnectionProfile, PlatformProfile};

pub static SQLITE_PLATFORM: PlatformProfile = PlatformProfile {
    name: "sqlite",
    default_charset: "utf8",
    implicit_transactions: true,
    naming_strategy: "underscore",
    repository_class: "SqlEntityRepository",
    quote: Some(('`', '`')),
    default_schema: None,
};

pub static LIBSQL_PLATFORM: PlatformProfile = PlatformProfile {
    name: "libsql",
    ..SQLITE_PLATFORM
};

static CONNECTION: ConnectionProfile = ConnectionProfile {
    scheme: None,
    default_user: None,
    default_host: "",
    default_port: 0,
};

pub fn sqlite_module() -> DriverModule {
    DriverModule::new("ormcore-sqlite").with_export(BuiltinDriver::class(
        "SqliteDriver",
        &SQLITE_PLATFORM,
        &CONNECTION,
    ))
}

pub fn better_sqlite_module() -> DriverModule {
    DriverModule::new("ormcore-better-sqlite").with_export(BuiltinDriver::class(
        "BetterSqliteDriver",
        &SQLITE_PLATFORM,
        &CONNECTION,
    ))
}

pub fn libsql_module() -> DriverModule {
    DriverModule::new("ormcore-libsql").with_export(BuiltinDriver::class(
        "LibSqlDriver",
        &LIBSQL_PLATFORM,
        &CONNECTION,
    ))
}
