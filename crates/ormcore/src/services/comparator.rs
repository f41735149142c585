//! Entity comparator producing change sets between two snapshots.

use std::sync::Arc;

use serde_json::{Map, Value};

use crate::core::traits::Platform;

pub struct EntityComparator {
    platform: Arc<dyn Platform>,
}

impl EntityComparator {
    pub fn new(platform: Arc<dyn Platform>) -> Self {
        Self { platform }
    }

    pub fn platform(&self) -> &Arc<dyn Platform> {
        &self.platform
    }

    /// Shallow diff of two snapshots.
    ///
    /// Contains every property whose value differs, with its current value.
    /// Properties removed since the original snapshot are reported as `null`.
    pub fn changeset(&self, original: &Map<String, Value>, current: &Map<String, Value>) -> Map<String, Value> {
        let mut changes: Map<String, Value> = current
            .iter()
            .filter(|(key, value)| original.get(*key) != Some(*value))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();

        for key in original.keys() {
            if !current.contains_key(key) {
                changes.insert(key.clone(), Value::Null);
            }
        }
        changes
    }

    pub fn is_changed(&self, original: &Map<String, Value>, current: &Map<String, Value>) -> bool {
        !self.changeset(original, current).is_empty()
    }
}

impl std::fmt::Debug for EntityComparator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EntityComparator")
            .field("platform", &self.platform.name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drivers::common::{BuiltinPlatform, PlatformProfile};
    use serde_json::json;

    static PROFILE: PlatformProfile = PlatformProfile {
        name: "test",
        default_charset: "utf8",
        implicit_transactions: true,
        naming_strategy: "underscore",
        repository_class: "SqlEntityRepository",
        quote: None,
        default_schema: None,
    };

    fn comparator() -> EntityComparator {
        EntityComparator::new(Arc::new(BuiltinPlatform::new(&PROFILE)))
    }

    #[test]
    fn test_changeset_reports_modified_added_and_removed() {
        let original = json!({"id": 1, "title": "a", "tags": ["x"], "note": "n"});
        let current = json!({"id": 1, "title": "b", "tags": ["x"], "rating": 5});

        let changes = comparator().changeset(
            original.as_object().unwrap(),
            current.as_object().unwrap(),
        );

        assert_eq!(Value::Object(changes), json!({"title": "b", "rating": 5, "note": null}));
    }

    #[test]
    fn test_identical_snapshots() {
        let snapshot = json!({"id": 1, "nested": {"a": 1}});
        let map = snapshot.as_object().unwrap();
        assert!(!comparator().is_changed(map, map));
    }
}
