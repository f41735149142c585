//! MySQL and MariaDB drivers.
//!
//! Both share the MySQL wire protocol and platform behaviour; they are
//! exported from separate packages so either can be selected by tag.

use crate::core::registry::DriverModule;
use crate::core::traits::DriverClass;

use super::common::{BuiltinDriver, ConnectionProfile, PlatformProfile};

pub static MYSQL_PLATFORM: PlatformProfile = PlatformProfile {
    name: "mysql",
    default_charset: "utf8mb4",
    implicit_transactions: true,
    naming_strategy: "underscore",
    repository_class: "SqlEntityRepository",
    quote: Some(('`', '`')),
    default_schema: None,
};

pub static MARIADB_PLATFORM: PlatformProfile = PlatformProfile {
    name: "mariadb",
    ..MYSQL_PLATFORM
};

static CONNECTION: ConnectionProfile = ConnectionProfile {
    scheme: Some("mysql"),
    default_user: Some("root"),
    default_host: "127.0.0.1",
    default_port: 3306,
};

pub fn mysql_driver_class() -> DriverClass {
    BuiltinDriver::class("MySqlDriver", &MYSQL_PLATFORM, &CONNECTION)
}

pub fn mariadb_driver_class() -> DriverClass {
    BuiltinDriver::class("MariaDbDriver", &MARIADB_PLATFORM, &CONNECTION)
}

pub fn mysql_module() -> DriverModule {
    DriverModule::new("ormcore-mysql").with_export(mysql_driver_class())
}

pub fn mariadb_module() -> DriverModule {
    DriverModule::new("ormcore-mariadb").with_export(mariadb_driver_class())
}
