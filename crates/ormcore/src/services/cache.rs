//! Built-in cache adapters.
//!
//! - [`FileCacheAdapter`]: one JSON file per key under `<base_dir>/<cache_dir>`,
//!   named by the SHA-256 of the key
//! - [`MemoryCacheAdapter`]: in-process map with per-entry expiration
//! - [`NullCacheAdapter`]: stores nothing

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

use serde_json::Value;
use sha2::{Digest, Sha256};
use tracing::debug;

use crate::config::defaults::DEFAULT_CACHE_DIR;
use crate::core::catalog::CacheAdapterArgs;
use crate::core::traits::CacheAdapter;
use crate::error::{OrmError, Result};

/// Stores each entry as `<sha256 of key>.json` inside the cache directory.
#[derive(Debug, Clone)]
pub struct FileCacheAdapter {
    dir: PathBuf,
    pretty: bool,
}

impl FileCacheAdapter {
    pub fn new(args: &CacheAdapterArgs) -> Self {
        let cache_dir = args
            .options
            .get("cache_dir")
            .and_then(Value::as_str)
            .unwrap_or(DEFAULT_CACHE_DIR);
        let dir = match &args.base_dir {
            Some(base) => base.join(cache_dir),
            None => PathBuf::from(cache_dir),
        };
        Self {
            dir,
            pretty: args.pretty,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path(&self, key: &str) -> PathBuf {
        let digest = Sha256::digest(key.as_bytes());
        self.dir.join(format!("{digest:x}.json"))
    }
}

impl CacheAdapter for FileCacheAdapter {
    fn get(&self, key: &str) -> Result<Option<Value>> {
        let path = self.path(key);
        if !path.is_file() {
            return Ok(None);
        }
        let content = fs::read_to_string(&path)?;
        let value = serde_json::from_str(&content)
            .map_err(|e| OrmError::Cache(format!("corrupt cache file {}: {}", path.display(), e)))?;
        Ok(Some(value))
    }

    fn set(&self, key: &str, value: Value, _expiration: Option<u64>) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        let content = if self.pretty {
            serde_json::to_string_pretty(&value)?
        } else {
            serde_json::to_string(&value)?
        };
        fs::write(self.path(key), content)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = self.path(key);
        if path.is_file() {
            fs::remove_file(path)?;
        }
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        if !self.dir.is_dir() {
            return Ok(());
        }
        let mut removed = 0;
        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                fs::remove_file(&path)?;
                removed += 1;
            }
        }
        debug!("Cleared {} cache files from {}", removed, self.dir.display());
        Ok(())
    }
}

/// In-process cache. Entries expire after the per-call expiration, or the
/// adapter's default `expiration` option (milliseconds) when none is given.
#[derive(Debug, Default)]
pub struct MemoryCacheAdapter {
    default_expiration: Option<u64>,
    entries: Mutex<HashMap<String, (Value, Option<Instant>)>>,
}

impl MemoryCacheAdapter {
    pub fn new(args: &CacheAdapterArgs) -> Self {
        Self {
            default_expiration: args.options.get("expiration").and_then(Value::as_u64),
            entries: Mutex::new(HashMap::new()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, (Value, Option<Instant>)>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl CacheAdapter for MemoryCacheAdapter {
    fn get(&self, key: &str) -> Result<Option<Value>> {
        let mut entries = self.lock();
        let expired = match entries.get(key) {
            None => return Ok(None),
            Some((_, Some(deadline))) => Instant::now() >= *deadline,
            Some((_, None)) => false,
        };
        if expired {
            entries.remove(key);
            return Ok(None);
        }
        Ok(entries.get(key).map(|(value, _)| value.clone()))
    }

    fn set(&self, key: &str, value: Value, expiration: Option<u64>) -> Result<()> {
        let now = Instant::now();
        let deadline = expiration
            .or(self.default_expiration)
            .map(|ms| now + Duration::from_millis(ms));
        let mut entries = self.lock();
        entries.retain(|_, (_, expires)| expires.map_or(true, |at| at > now));
        entries.insert(key.to_string(), (value, deadline));
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.lock().remove(key);
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        self.lock().clear();
        Ok(())
    }
}

/// Cache adapter that never stores anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullCacheAdapter;

impl CacheAdapter for NullCacheAdapter {
    fn get(&self, _key: &str) -> Result<Option<Value>> {
        Ok(None)
    }

    fn set(&self, _key: &str, _value: Value, _expiration: Option<u64>) -> Result<()> {
        Ok(())
    }

    fn remove(&self, _key: &str) -> Result<()> {
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        Ok(())
    }
}
