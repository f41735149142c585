//! Deep merge of option trees and dotted-key access.
//!
//! Merge strategy, per value kind in the overlay:
//!
//! - object over object: merged key by key, recursively
//! - array: replaces the base array wholesale
//! - scalar: overrides the base value
//! - `null`: treated as "not provided", the base value is kept

use serde_json::{Map, Value};

/// Merge `overlay` into `base` in place.
pub fn deep_merge(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (_, Value::Null) => {}
        (Value::Object(base_map), Value::Object(overlay_map)) => {
            merge_maps(base_map, overlay_map);
        }
        (base, overlay) => *base = overlay,
    }
}

fn merge_maps(base: &mut Map<String, Value>, overlay: Map<String, Value>) {
    for (key, value) in overlay {
        match base.get_mut(&key) {
            Some(existing) => deep_merge(existing, value),
            None if value.is_null() => {}
            None => {
                base.insert(key, value);
            }
        }
    }
}

/// Convert a dotted key (`migrations.path`) into a JSON pointer.
pub fn pointer(key: &str) -> String {
    key.split('.')
        .filter(|segment| !segment.is_empty())
        .fold(String::new(), |mut acc, segment| {
            acc.push('/');
            acc.push_str(&segment.replace('~', "~0").replace('/', "~1"));
            acc
        })
}

/// Look up a dotted key, treating `null` as absent.
pub fn lookup<'a>(tree: &'a Value, key: &str) -> Option<&'a Value> {
    tree.pointer(&pointer(key)).filter(|value| !value.is_null())
}

/// Whether a dotted key holds a meaningful value (not `null`, not `""`).
pub fn is_provided(tree: &Value, key: &str) -> bool {
    match lookup(tree, key) {
        Some(Value::String(s)) => !s.is_empty(),
        Some(_) => true,
        None => false,
    }
}

/// Write `value` at a dotted key, creating intermediate objects.
pub fn insert(tree: &mut Value, key: &str, value: Value) {
    let mut segments = key.split('.').filter(|s| !s.is_empty()).peekable();
    let mut current = tree;
    while let Some(segment) = segments.next() {
        if !current.is_object() {
            *current = Value::Object(Map::new());
        }
        let Value::Object(map) = current else {
            return;
        };
        if segments.peek().is_none() {
            map.insert(segment.to_string(), value);
            return;
        }
        current = map
            .entry(segment.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
    }
}

/// Remove a dotted key, returning the removed value.
pub fn remove(tree: &mut Value, key: &str) -> Option<Value> {
    let (parent, last) = match key.rsplit_once('.') {
        Some((parent, last)) => (tree.pointer_mut(&pointer(parent))?, last),
        None => (tree, key),
    };
    parent.as_object_mut()?.remove(last)
}
