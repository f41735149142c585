//! Object hydrator.

use std::sync::Arc;

use serde_json::{Map, Value};

use crate::core::traits::{Hydrator, Platform};

/// Assigns every provided property onto the entity.
///
/// `null` values are assigned as well; a missing key leaves the entity's
/// current value untouched.
pub struct ObjectHydrator {
    platform: Arc<dyn Platform>,
}

impl ObjectHydrator {
    pub fn new(platform: Arc<dyn Platform>) -> Self {
        Self { platform }
    }

    pub fn platform(&self) -> &Arc<dyn Platform> {
        &self.platform
    }
}

impl Hydrator for ObjectHydrator {
    fn hydrate(&self, entity: &mut Map<String, Value>, data: &Map<String, Value>) -> usize {
        for (key, value) in data {
            entity.insert(key.clone(), value.clone());
        }
        data.len()
    }
}

impl std::fmt::Debug for ObjectHydrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObjectHydrator")
            .field("platform", &self.platform.name())
            .finish()
    }
}
