//! Data inspection and sequence helpers

use serde_json::Value;
use std::collections::{BTreeMap, HashMap, HashSet, VecDeque};
use std::hash::Hash;

/// Mapping or ordered-sequence types whose entries can be counted
pub trait Collection {
    fn entry_count(&self) -> usize;
}

impl<T> Collection for [T] {
    fn entry_count(&self) -> usize {
        self.len()
    }
}

impl<T, const N: usize> Collection for [T; N] {
    fn entry_count(&self) -> usize {
        N
    }
}

impl<T> Collection for Vec<T> {
    fn entry_count(&self) -> usize {
        self.len()
    }
}

impl<T> Collection for VecDeque<T> {
    fn entry_count(&self) -> usize {
        self.len()
    }
}

impl<K, V, S> Collection for HashMap<K, V, S> {
    fn entry_count(&self) -> usize {
        self.len()
    }
}

impl<K, V> Collection for BTreeMap<K, V> {
    fn entry_count(&self) -> usize {
        self.len()
    }
}

impl Collection for serde_json::Map<String, Value> {
    fn entry_count(&self) -> usize {
        self.len()
    }
}

/// Check whether a JSON value is an empty object or array
///
/// `null` counts as an empty object. Strings, numbers and booleans are never
/// considered empty, even `""` or `0`.
///
/// # Examples
/// ```
/// use edgekit::utils::data::is_empty;
/// use serde_json::json;
/// assert!(is_empty(&json!({})));
/// assert!(is_empty(&json!(null)));
/// assert!(!is_empty(&json!("")));
/// ```
pub fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Bool(_) | Value::Number(_) | Value::String(_) => false,
    }
}

/// Check whether an optional collection is missing or holds no entries
pub fn is_empty_collection<C: Collection + ?Sized>(value: Option<&C>) -> bool {
    value.is_none_or(|collection| collection.entry_count() == 0)
}

/// Elements of `other` that do not occur in `base`
///
/// Order and duplicates of `other` are preserved.
///
/// # Examples
/// ```
/// use edgekit::utils::data::array_difference;
/// assert_eq!(array_difference(&[1, 2], &[1, 2, 3]), vec![3]);
/// ```
pub fn array_difference<T: PartialEq + Clone>(base: &[T], other: &[T]) -> Vec<T> {
    other
        .iter()
        .filter(|item| !base.contains(item))
        .cloned()
        .collect()
}

/// Deduplicated union of `first` then `second`, in first-seen order
///
/// # Examples
/// ```
/// use edgekit::utils::data::array_merge;
/// assert_eq!(array_merge(&[1, 2], &[2, 3]), vec![1, 2, 3]);
/// ```
pub fn array_merge<T: Eq + Hash + Clone>(first: &[T], second: &[T]) -> Vec<T> {
    let mut seen = HashSet::with_capacity(first.len() + second.len());
    first
        .iter()
        .chain(second)
        .filter(|item| seen.insert(*item))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_is_empty_objects_and_arrays() {
        assert!(is_empty(&json!({})));
        assert!(is_empty(&json!([])));
        assert!(!is_empty(&json!({"a": 1})));
        assert!(!is_empty(&json!([null])));
    }

    #[test]
    fn test_is_empty_nullish() {
        assert!(is_empty(&json!(null)));
        assert!(is_empty(&Value::Null));
    }

    #[test]
    fn test_is_empty_scalars_are_never_empty() {
        assert!(!is_empty(&json!("")));
        assert!(!is_empty(&json!(0)));
        assert!(!is_empty(&json!(false)));
        assert!(!is_empty(&json!("text")));
    }

    #[test]
    fn test_is_empty_collection() {
        let empty: Vec<u8> = Vec::new();
        assert!(is_empty_collection(Some(&empty)));
        assert!(!is_empty_collection(Some(&vec![1])));
        assert!(is_empty_collection::<Vec<u8>>(None));

        let mut map = HashMap::new();
        assert!(is_empty_collection(Some(&map)));
        map.insert("key", 1);
        assert!(!is_empty_collection(Some(&map)));

        let slice: &[i32] = &[];
        assert!(is_empty_collection(Some(slice)));
        assert!(!is_empty_collection(Some(&[1, 2, 3])));
        assert!(is_empty_collection(Some(&VecDeque::<u8>::new())));
    }

    #[test]
    fn test_array_difference() {
        assert_eq!(array_difference(&[1, 2], &[1, 2, 3]), vec![3]);
        assert_eq!(array_difference(&[1, 2, 3], &[1, 2]), Vec::<i32>::new());
        assert_eq!(array_difference(&[], &[4, 4, 5]), vec![4, 4, 5]);
        assert_eq!(
            array_difference(&["a"], &["c", "a", "b", "c"]),
            vec!["c", "b", "c"]
        );
    }

    #[test]
    fn test_array_merge() {
        assert_eq!(array_merge(&[1, 2], &[2, 3]), vec![1, 2, 3]);
        assert_eq!(array_merge(&[3, 3, 1], &[1, 2]), vec![3, 1, 2]);
        assert_eq!(array_merge::<u8>(&[], &[]), Vec::<u8>::new());
        assert_eq!(
            array_merge(&["b".to_string()], &["a".to_string(), "b".to_string()]),
            vec!["b".to_string(), "a".to_string()]
        );
    }
}
