//! PostgreSQL driver.

use crate::core::registry::DriverModule;
use crate::core::traits::DriverClass;

use super::common::{BuiltinDriver, ConnectionProfile, PlatformProfile};

pub static POSTGRESQL_PLATFORM: PlatformProfile = PlatformProfile {
    name: "postgresql",
    default_charset: "utf8",
    implicit_transactions: true,
    naming_strategy: "underscore",
    repository_class: "SqlEntityRepository",
    quote: Some(('"', '"')),
    default_schema: Some("public"),
};

static CONNECTION: ConnectionProfile = ConnectionProfile {
    scheme: Some("postgresql"),
    default_user: Some("postgres"),
    default_host: "127.0.0.1",
    default_port: 5432,
};

pub fn driver_class() -> DriverClass {
    BuiltinDriver::class("PostgreSqlDriver", &POSTGRESQL_PLATFORM, &CONNECTION)
}

pub fn module() -> DriverModule {
    DriverModule::new("ormcore-postgresql").with_export(driver_class())
}
