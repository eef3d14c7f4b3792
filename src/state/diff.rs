//! Field-level diff between the last acknowledged state and the current one.

use serde_json::Value;

use super::shared_state::StateFields;

/// Fields of `current` whose value differs from `previous`.
///
/// With no previous snapshot the whole state is returned. A field that
/// disappeared from `current` is reported as `null`.
pub fn compute_diff(previous: Option<&StateFields>, current: &StateFields) -> StateFields {
    let Some(previous) = previous else {
        return current.clone();
    };

    let mut diff = StateFields::new();
    for (key, value) in current {
        if previous.get(key) != Some(value) {
            diff.insert(key.clone(), value.clone());
        }
    }
    for key in previous.keys() {
        if !current.contains_key(key) {
            diff.insert(key.clone(), Value::Null);
        }
    }
    diff
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(value: Value) -> StateFields {
        match value {
            Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_first_diff_is_full_state() {
        let current = fields(json!({"caption": "A", "enabled": true}));
        assert_eq!(compute_diff(None, &current), current);
    }

    #[test]
    fn test_only_changed_fields() {
        let previous = fields(json!({"caption": "A", "enabled": true, "width": ""}));
        let current = fields(json!({"caption": "B", "enabled": true, "width": ""}));
        assert_eq!(
            compute_diff(Some(&previous), &current),
            fields(json!({"caption": "B"}))
        );
    }

    #[test]
    fn test_identical_state_is_empty() {
        let state = fields(json!({"caption": "A"}));
        assert!(compute_diff(Some(&state), &state).is_empty());
    }

    #[test]
    fn test_removed_field_becomes_null() {
        let previous = fields(json!({"caption": "A", "children": [1]}));
        let current = fields(json!({"caption": "A"}));
        assert_eq!(
            compute_diff(Some(&previous), &current),
            fields(json!({"children": null}))
        );
    }
}
