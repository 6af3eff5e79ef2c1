//! Layered merging of YAML configuration values.
//!
//! # Merge Rules
//!
//! - Mappings merge key by key, recursively
//! - Sequences are replaced wholesale, so a layer that sets `executables`
//!   owns the whole list
//! - A null in the overlay removes the key, restoring the built-in default
//!   once the result is deserialized
//! - Any other overlay value replaces the base value

use serde_yaml::{Mapping, Value};

/// Merge `overlay` on top of `base`, returning a new value.
pub fn deep_merge(base: &Value, overlay: &Value) -> Value {
    let (Value::Mapping(base_map), Value::Mapping(overlay_map)) = (base, overlay) else {
        return overlay.clone();
    };

    let mut merged = base_map.clone();
    for (key, value) in overlay_map {
        if value.is_null() {
            merged.remove(key);
            continue;
        }
        let next = match base_map.get(key) {
            Some(existing) => deep_merge(existing, value),
            None => value.clone(),
        };
        merged.insert(key.clone(), next);
    }
    Value::Mapping(merged)
}

/// Fold `layers` left to right; later layers take precedence.
pub fn merge_configs(layers: &[Value]) -> Value {
    layers
        .iter()
        .fold(Value::Mapping(Mapping::new()), |acc, layer| {
            deep_merge(&acc, layer)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yaml(s: &str) -> Value {
        serde_yaml::from_str(s).unwrap()
    }

    #[test]
    fn nested_keys_survive_partial_overlay() {
        let base = yaml("python:\n  python_version: \"3.11\"\n  lock_executables: true\n");
        let overlay = yaml("python:\n  python_version: \"3.12\"\n");

        let merged = deep_merge(&base, &overlay);
        assert_eq!(merged["python"]["python_version"], "3.12");
        assert_eq!(merged["python"]["lock_executables"], true);
    }

    #[test]
    fn sequences_are_replaced() {
        let base = yaml("executables: [curl, git, python3]");
        let overlay = yaml("executables: [git]");

        let merged = deep_merge(&base, &overlay);
        let list = merged["executables"].as_sequence().unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0], "git");
    }

    #[test]
    fn null_removes_key() {
        let base = yaml("base:\n  setup_description: custom\n  help_action: help\n");
        let overlay = yaml("base:\n  setup_description: ~\n");

        let merged = deep_merge(&base, &overlay);
        assert!(merged["base"].get("setup_description").is_none());
        assert_eq!(merged["base"]["help_action"], "help");
    }

    #[test]
    fn scalar_overlay_replaces_mapping() {
        let merged = deep_merge(&yaml("a:\n  b: 1\n"), &yaml("a: 2"));
        assert_eq!(merged["a"], 2);
    }

    #[test]
    fn later_layers_win() {
        let merged = merge_configs(&[
            yaml("python:\n  python_version: \"3.10\"\n"),
            yaml("python:\n  python_version: \"3.11\"\n"),
            yaml("python:\n  python_version: \"3.12\"\n"),
        ]);
        assert_eq!(merged["python"]["python_version"], "3.12");
    }

    #[test]
    fn merging_nothing_is_empty_mapping() {
        assert_eq!(merge_configs(&[]), Value::Mapping(Mapping::new()));
    }
}
