//! Loading options from a YAML file and `ORM_*` environment variables.

use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::error::{OrmError, Result};

use super::options::Options;

/// Environment variables holding plain strings, and the option they set.
const STRING_VARS: &[(&str, &str)] = &[
    ("ORM_TYPE", "type"),
    ("ORM_DB_NAME", "db_name"),
    ("ORM_CLIENT_URL", "client_url"),
    ("ORM_HOST", "host"),
    ("ORM_USER", "user"),
    ("ORM_PASSWORD", "password"),
    ("ORM_SCHEMA", "schema"),
    ("ORM_BASE_DIR", "base_dir"),
    ("ORM_MIGRATIONS_PATH", "migrations.path"),
    ("ORM_MIGRATIONS_PATH_TS", "migrations.path_ts"),
    ("ORM_SEEDER_PATH", "seeder.path"),
    ("ORM_SEEDER_PATH_TS", "seeder.path_ts"),
];

/// Comma separated lists.
const LIST_VARS: &[(&str, &str)] = &[
    ("ORM_ENTITIES", "entities"),
    ("ORM_ENTITIES_TS", "entities_ts"),
];

pub struct ConfigLoader;

impl ConfigLoader {
    /// Read options from a YAML file.
    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Options> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            OrmError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_yaml(&content)
    }

    /// Parse options from a YAML string. An empty document yields no options.
    pub fn from_yaml(yaml: &str) -> Result<Options> {
        if yaml.trim().is_empty() {
            return Ok(Options::new());
        }
        let value: Value = serde_yaml::from_str(yaml)?;
        match value {
            Value::Null => Ok(Options::new()),
            value => Options::from_value(value),
        }
    }

    /// Options from `ORM_*` variables.
    pub fn env_options<I, K, V>(vars: I) -> Result<Options>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut options = Options::new();
        for (name, raw) in vars {
            let (name, raw) = (name.as_ref(), raw.as_ref());
            if !name.starts_with("ORM_") {
                continue;
            }
            if raw.trim().is_empty() {
                debug!("Ignoring empty environment variable {}", name);
                continue;
            }
            if let Some((_, key)) = STRING_VARS.iter().find(|(var, _)| *var == name) {
                options = options.with(key, raw);
            } else if let Some((_, key)) = LIST_VARS.iter().find(|(var, _)| *var == name) {
                options = options.with(key, split_list(raw));
            } else {
                options = match name {
                    "ORM_PORT" => options.with("port", parse_number::<u16>(name, raw)?),
                    "ORM_BATCH_SIZE" => options.with("batch_size", parse_number::<u64>(name, raw)?),
                    "ORM_STRICT" => options.with("strict", parse_bool(name, raw)?),
                    "ORM_DEBUG" => options.with("debug", parse_debug(raw)),
                    _ => {
                        debug!("Ignoring unrecognized environment variable {}", name);
                        options
                    }
                };
            }
        }
        Ok(options)
    }

    /// File options (if any) with environment options merged over them.
    pub fn load<P, I, K, V>(path: Option<P>, vars: I) -> Result<Options>
    where
        P: AsRef<Path>,
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let base = match path {
            Some(path) => Self::load_file(path)?,
            None => Options::new(),
        };
        Ok(base.merge(Self::env_options(vars)?))
    }
}

fn split_list(raw: &str) -> Vec<Value> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(Value::from)
        .collect()
}

fn parse_number<T: std::str::FromStr>(name: &str, raw: &str) -> Result<T> {
    raw.trim()
        .parse::<T>()
        .map_err(|_| OrmError::Config(format!("{name} must be a number, got '{raw}'")))
}

fn parse_bool(name: &str, raw: &str) -> Result<bool> {
    match raw.trim().to_lowercase().as_str() {
        "true" | "yes" | "1" => Ok(true),
        "false" | "no" | "0" => Ok(false),
        _ => Err(OrmError::Config(format!("{name} must be true or false, got '{raw}'"))),
    }
}

/// `true`/`false`, or a comma separated list of logger namespaces.
fn parse_debug(raw: &str) -> Value {
    match parse_bool("ORM_DEBUG", raw) {
        Ok(flag) => Value::Bool(flag),
        Err(_) => Value::Array(split_list(raw)),
    }
}
