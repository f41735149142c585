//! Microsoft SQL Server driver.

use crate::core::registry::DriverModule;
use crate::core::traits::DriverClass;

use super::common::{BuiltinDriver, ConnectionProfile, PlatformProfile};

pub static MSSQL_PLATFORM: PlatformProfile = PlatformProfile {
    name: "mssql",
    default_charset: "UTF-8",
    implicit_transactions: true,
    naming_strategy: "underscore",
    repository_class: "SqlEntityRepository",
    quote: Some(('[', ']')),
    default_schema: Some("dbo"),
};

static CONNECTION: ConnectionProfile = ConnectionProfile {
    scheme: Some("mssql"),
    default_user: Some("sa"),
    default_host: "localhost",
    default_port: 1433,
};

pub fn driver_class() -> DriverClass {
    BuiltinDriver::class("MsSqlDriver", &MSSQL_PLATFORM, &CONNECTION)
}

pub fn module() -> DriverModule {
    DriverModule::new("ormcore-mssql").with_export(driver_class())
}
