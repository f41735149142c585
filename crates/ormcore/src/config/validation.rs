//! Validation of merged options, run before any driver is constructed.

use crate::core::registry::PlatformRegistry;
use crate::error::{OrmError, Result};

use super::types::ConfigurationOptions;

/// Check the merged options.
///
/// `has_driver` tells whether an explicit driver class was supplied.
pub fn validate(options: &ConfigurationOptions, has_driver: bool) -> Result<()> {
    validate_platform(options, has_driver)?;
    validate_database(options)?;
    validate_entities(options)?;
    Ok(())
}

fn validate_platform(options: &ConfigurationOptions, has_driver: bool) -> Result<()> {
    match (non_empty(&options.r#type), has_driver) {
        (Some(_), true) => Err(OrmError::validation(
            "You can't use `driver` and `type` at the same time",
        )),
        (None, false) => Err(OrmError::validation(format!(
            "No platform type specified, please fill in `type` or provide a custom driver class in `driver`, available platform types: {}",
            PlatformRegistry::tags().join(", ")
        ))),
        (Some(tag), false) if !PlatformRegistry::is_known(tag) => Err(PlatformRegistry::unknown(tag)),
        _ => Ok(()),
    }
}

fn validate_database(options: &ConfigurationOptions) -> Result<()> {
    if non_empty(&options.db_name).is_none() && non_empty(&options.client_url).is_none() {
        return Err(OrmError::validation(
            "No database specified, please fill in `db_name` or `client_url` option",
        ));
    }
    Ok(())
}

fn validate_entities(options: &ConfigurationOptions) -> Result<()> {
    if options.entities.is_empty()
        && options.entities_ts.is_empty()
        && options.discovery.warn_when_no_entities
    {
        return Err(OrmError::validation(
            "No entities found, please use `entities` option",
        ));
    }
    Ok(())
}

/// Validation that needs the derived values (runs after initialization).
pub fn validate_resolved(options: &ConfigurationOptions) -> Result<()> {
    if non_empty(&options.db_name).is_none() && non_empty(&options.client_url).is_some() {
        return Err(OrmError::validation(
            "No database specified, `client_url` option provided but it's missing the pathname",
        ));
    }
    Ok(())
}

/// The value without surrounding whitespace, `None` when blank.
pub(crate) fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}
