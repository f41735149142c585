//! MongoDB driver.

use crate::core::registry::DriverModule;
use crate::core::traits::DriverClass;

use super::common::{BuiltinDriver, ConnectionProfile, PlatformProfile};

pub static MONGO_PLATFORM: PlatformProfile = PlatformProfile {
    name: "mongo",
    default_charset: "utf8",
    implicit_transactions: false,
    naming_strategy: "mongo",
    repository_class: "MongoEntityRepository",
    quote: None,
    default_schema: None,
};

static CONNECTION: ConnectionProfile = ConnectionProfile {
    scheme: Some("mongodb"),
    default_user: None,
    default_host: "127.0.0.1",
    default_port: 27017,
};

pub fn driver_class() -> DriverClass {
    BuiltinDriver::class("MongoDriver", &MONGO_PLATFORM, &CONNECTION)
}

pub fn module() -> DriverModule {
    DriverModule::new("ormcore-mongodb").with_export(driver_class())
}
