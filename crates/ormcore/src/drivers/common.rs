//! Scaffolding shared by the built-in drivers.
//!
//! A built-in driver is a [`PlatformProfile`] (what the platform answers) plus
//! a [`ConnectionProfile`] (how the default client URL is derived). The
//! backend modules only declare these profiles and export driver classes.

use std::sync::{Arc, OnceLock};

use crate::config::{ConfigurationOptions, OptionsHandle};
use crate::core::traits::{Connection, Driver, DriverClass, Platform};

/// Static capabilities of a platform.
#[derive(Debug)]
pub struct PlatformProfile {
    pub name: &'static str,
    pub default_charset: &'static str,
    pub implicit_transactions: bool,
    pub naming_strategy: &'static str,
    pub repository_class: &'static str,
    /// Opening and closing identifier quote, `None` when identifiers are not quoted.
    pub quote: Option<(char, char)>,
    pub default_schema: Option<&'static str>,
}

/// Defaults used to build the client URL when the application has none.
#[derive(Debug)]
pub struct ConnectionProfile {
    /// URL scheme; `None` for file based backends without a client URL.
    pub scheme: Option<&'static str>,
    pub default_user: Option<&'static str>,
    pub default_host: &'static str,
    pub default_port: u16,
}

/// Platform backed by a [`PlatformProfile`].
#[derive(Debug)]
pub struct BuiltinPlatform {
    profile: &'static PlatformProfile,
    config: OnceLock<OptionsHandle>,
}

impl BuiltinPlatform {
    pub fn new(profile: &'static PlatformProfile) -> Self {
        Self {
            profile,
            config: OnceLock::new(),
        }
    }
}

impl Platform for BuiltinPlatform {
    fn name(&self) -> &str {
        self.profile.name
    }

    fn set_config(&self, options: OptionsHandle) {
        let _ = self.config.set(options);
    }

    fn naming_strategy(&self) -> &str {
        self.profile.naming_strategy
    }

    fn uses_implicit_transactions(&self) -> bool {
        self.profile.implicit_transactions
    }

    fn default_charset(&self) -> &str {
        self.profile.default_charset
    }

    fn repository_class(&self) -> &str {
        self.profile.repository_class
    }

    fn quote_identifier(&self, name: &str) -> String {
        match self.profile.quote {
            // Closing quotes inside the name are escaped by doubling them
            Some((open, close)) => {
                let escaped = name.replace(close, &format!("{close}{close}"));
                format!("{open}{escaped}{close}")
            }
            None => name.to_string(),
        }
    }

    fn schema_name(&self) -> Option<String> {
        self.config
            .get()
            .and_then(|config| config.read(|options| options.schema.clone()))
            .or_else(|| self.profile.default_schema.map(String::from))
    }
}

/// Connection that only knows how to describe its default client URL.
#[derive(Debug, Clone)]
pub struct UrlConnection {
    default_client_url: String,
}

impl UrlConnection {
    /// Derive the default client URL from `host`, `port` and `user` options.
    pub fn new(profile: &ConnectionProfile, options: &ConfigurationOptions) -> Self {
        let default_client_url = match profile.scheme {
            None => String::new(),
            Some(scheme) => {
                let host = options.host.as_deref().unwrap_or(profile.default_host);
                let port = options.port.unwrap_or(profile.default_port);
                match options.user.as_deref().or(profile.default_user) {
                    Some(user) => format!("{scheme}://{user}@{host}:{port}"),
                    None => format!("{scheme}://{host}:{port}"),
                }
            }
        };
        Self { default_client_url }
    }
}

impl Connection for UrlConnection {
    fn default_client_url(&self) -> String {
        self.default_client_url.clone()
    }
}

/// Driver assembled from a platform and a connection profile.
pub struct BuiltinDriver {
    name: &'static str,
    connection: UrlConnection,
    platform: Arc<BuiltinPlatform>,
}

impl BuiltinDriver {
    pub fn new(
        name: &'static str,
        platform: &'static PlatformProfile,
        connection: &'static ConnectionProfile,
        options: &ConfigurationOptions,
    ) -> Self {
        Self {
            name,
            connection: UrlConnection::new(connection, options),
            platform: Arc::new(BuiltinPlatform::new(platform)),
        }
    }

    /// Driver class constructing this driver.
    pub fn class(
        name: &'static str,
        platform: &'static PlatformProfile,
        connection: &'static ConnectionProfile,
    ) -> DriverClass {
        DriverClass::new(name, move |options| {
            Ok(Arc::new(BuiltinDriver::new(name, platform, connection, options)))
        })
    }
}

impl Driver for BuiltinDriver {
    fn name(&self) -> &str {
        self.name
    }

    fn platform(&self) -> Arc<dyn Platform> {
        self.platform.clone()
    }

    fn connection(&self) -> &dyn Connection {
        &self.connection
    }
}
