use serde_json::Value;

use crate::path::{Jpath, Segment};

use super::{ChangeKind, DiffMap};

pub(super) fn diff_recursive(
    left: Option<&Value>,
    right: Option<&Value>,
    path_pos: &mut Jpath,
    entries: &mut DiffMap,
) {
    match (left, right) {
        (None, None) => {}
        // The whole absent-side subtree is one atomic change at this path;
        // the projector expands it to its full line extent later.
        (None, Some(_)) => entries.insert(path_pos.clone(), ChangeKind::Added),
        (Some(_), None) => entries.insert(path_pos.clone(), ChangeKind::Removed),
        (Some(left), Some(right)) => diff_present(left, right, path_pos, entries),
    }
}

fn diff_present(left: &Value, right: &Value, path_pos: &mut Jpath, entries: &mut DiffMap) {
    match (left, right) {
        (Value::Object(left_map), Value::Object(right_map)) => {
            diff_object(left_map, right_map, path_pos, entries)
        }
        (Value::Array(left_array), Value::Array(right_array)) => {
            diff_array(left_array, right_array, path_pos, entries)
        }
        // Values are equal, no entry needed. Mismatched container kinds
        // (array vs object) land in the final arm as a single `modified`.
        (left, right) if left == right => {}
        (_, _) => entries.insert(path_pos.clone(), ChangeKind::Modified),
    }
}

fn diff_object(
    left_map: &serde_json::Map<String, Value>,
    right_map: &serde_json::Map<String, Value>,
    path_pos: &mut Jpath,
    entries: &mut DiffMap,
) {
    for (key, right_value) in right_map {
        path_pos.push(Segment::Field(key.clone()));
        match left_map.get(key) {
            // If the key exists in both maps, recurse into the values
            Some(left_value) => {
                diff_present(left_value, right_value, path_pos, entries);
            }
            // Otherwise, it's an addition
            None => entries.insert(path_pos.clone(), ChangeKind::Added),
        }
        path_pos.pop();
    }

    for key in left_map.keys() {
        if !right_map.contains_key(key) {
            path_pos.push(Segment::Field(key.clone()));
            entries.insert(path_pos.clone(), ChangeKind::Removed);
            path_pos.pop();
        }
    }
}

fn diff_array(
    left_array: &[Value],
    right_array: &[Value],
    path_pos: &mut Jpath,
    entries: &mut DiffMap,
) {
    // Strictly positional: element reordering is reported as modifications
    // at each affected index, never matched up by similarity.
    let max_len = left_array.len().max(right_array.len());
    for i in 0..max_len {
        path_pos.push(Segment::Index(i));
        diff_recursive(left_array.get(i), right_array.get(i), path_pos, entries);
        path_pos.pop();
    }
}

#[cfg(test)]
mod tests {
    use assert2::check;

    use super::*;
    use crate::diff::diff;

    fn path(raw: &str) -> Jpath {
        raw.try_into().unwrap()
    }

    #[test]
    fn test_diff_equal_values() {
        let left = serde_json::json!("foo");
        let right = serde_json::json!("foo");

        let entries = diff(Some(&left), Some(&right));

        // No entries should be generated for equal values
        check!(entries == DiffMap::default());
    }

    #[test]
    fn test_diff_equal_nested_trees() {
        let left = serde_json::json!({"a": {"b": [1, 2, {"c": null}]}});
        let right = left.clone();

        let entries = diff(Some(&left), Some(&right));

        check!(entries == DiffMap::default());
    }

    #[test]
    fn test_diff_non_equal_primitives_at_root() {
        let left = serde_json::json!("foo");
        let right = serde_json::json!("bar");

        let entries = diff(Some(&left), Some(&right));

        check!(entries.len() == 1);
        check!(entries.get(&Jpath::root()) == Some(&ChangeKind::Modified));
    }

    #[test]
    fn test_diff_container_kind_mismatch_is_modified_whole() {
        let left = serde_json::json!("foo");
        let right = serde_json::json!({"baz": 42});

        let entries = diff(Some(&left), Some(&right));

        check!(entries.len() == 1);
        check!(entries.get(&Jpath::root()) == Some(&ChangeKind::Modified));
    }

    #[test]
    fn test_diff_array_vs_object_does_not_descend() {
        let left = serde_json::json!({"a": [1, 2]});
        let right = serde_json::json!({"a": {"x": 1}});

        let entries = diff(Some(&left), Some(&right));

        check!(entries.len() == 1);
        check!(entries.get(&path("a")) == Some(&ChangeKind::Modified));
    }

    #[test]
    fn test_diff_objects_modified_field() {
        let left = serde_json::json!({"foo": 43});
        let right = serde_json::json!({"foo": 42});

        let entries = diff(Some(&left), Some(&right));

        check!(entries.len() == 1);
        check!(entries.get(&path("foo")) == Some(&ChangeKind::Modified));
    }

    #[test]
    fn test_diff_objects_removed_key() {
        let left = serde_json::json!({"foo": 43, "bar": 1});
        let right = serde_json::json!({"foo": 43});

        let entries = diff(Some(&left), Some(&right));

        check!(entries.len() == 1);
        check!(entries.get(&path("bar")) == Some(&ChangeKind::Removed));
    }

    #[test]
    fn test_diff_objects_added_key() {
        let left = serde_json::json!({"foo": 43});
        let right = serde_json::json!({"foo": 43, "bar": 1});

        let entries = diff(Some(&left), Some(&right));

        check!(entries.len() == 1);
        check!(entries.get(&path("bar")) == Some(&ChangeKind::Added));
    }

    #[test]
    fn test_diff_added_subtree_is_one_atomic_entry() {
        let left = serde_json::json!({"keep": 1});
        let right = serde_json::json!({"keep": 1, "address": {"street": "x", "zip": "y"}});

        let entries = diff(Some(&left), Some(&right));

        // No descent into the added subtree: its children get no entries.
        check!(entries.len() == 1);
        check!(entries.get(&path("address")) == Some(&ChangeKind::Added));
    }

    #[test]
    fn test_diff_array_positional_swap() {
        let left = serde_json::json!([1, 2]);
        let right = serde_json::json!([2, 1]);

        let entries = diff(Some(&left), Some(&right));

        check!(entries.len() == 2);
        check!(entries.get(&path("[0]")) == Some(&ChangeKind::Modified));
        check!(entries.get(&path("[1]")) == Some(&ChangeKind::Modified));
    }

    #[test]
    fn test_diff_array_length_change() {
        let left = serde_json::json!({"xs": [1, 2, 3]});
        let right = serde_json::json!({"xs": [1]});

        let entries = diff(Some(&left), Some(&right));

        check!(entries.len() == 2);
        check!(entries.get(&path("xs[1]")) == Some(&ChangeKind::Removed));
        check!(entries.get(&path("xs[2]")) == Some(&ChangeKind::Removed));
    }

    #[test]
    fn test_diff_nested_modification_path() {
        let left = serde_json::json!({"a": {"x": 1, "y": 2}});
        let right = serde_json::json!({"a": {"x": 9}});

        let entries = diff(Some(&left), Some(&right));

        check!(entries.len() == 2);
        check!(entries.get(&path("a.x")) == Some(&ChangeKind::Modified));
        check!(entries.get(&path("a.y")) == Some(&ChangeKind::Removed));
    }

    #[test]
    fn test_diff_both_absent_is_empty() {
        let entries = diff(None, None);
        check!(entries == DiffMap::default());
    }

    #[test]
    fn test_diff_one_side_absent_at_root() {
        let right = serde_json::json!({"a": 1});

        let entries = diff(None, Some(&right));

        check!(entries.len() == 1);
        check!(entries.get(&Jpath::root()) == Some(&ChangeKind::Added));
    }

    #[test]
    fn test_summary_counts() {
        let left = serde_json::json!({"a": 1, "b": 2, "c": 3});
        let right = serde_json::json!({"a": 9, "c": 3, "d": 4});

        let entries = diff(Some(&left), Some(&right));
        let summary = entries.summary();

        check!(summary.added == 1);
        check!(summary.removed == 1);
        check!(summary.modified == 1);
    }

    #[test]
    fn test_retain_under() {
        let left = serde_json::json!({"a": {"x": 1, "y": 2}, "b": 1});
        let right = serde_json::json!({"a": {"x": 9}, "b": 2});

        let mut entries = diff(Some(&left), Some(&right));
        entries.retain_under(&path("a"));

        check!(entries.len() == 2);
        check!(entries.get(&path("a.x")) == Some(&ChangeKind::Modified));
        check!(entries.get(&path("a.y")) == Some(&ChangeKind::Removed));
        check!(entries.get(&path("b")) == None);
    }
}
