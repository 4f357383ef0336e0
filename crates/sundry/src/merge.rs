//! Shallow merging of string-keyed mappings.

use indexmap::IndexMap;

/// String-keyed mapping that iterates in insertion order.
pub type Mapping<V> = IndexMap<String, V>;

/// Copies every entry of each source into `target`, left to right.
///
/// Later sources overwrite earlier ones and any value already in
/// `target`. Keys new to `target` are appended in the order they are
/// first seen.
///
/// # Example
///
/// ```
/// use sundry::{extend, Mapping};
///
/// let mut target: Mapping<i32> = [("a".to_string(), 1)].into_iter().collect();
/// let source: Mapping<i32> = [("a".to_string(), 2), ("b".to_string(), 3)].into_iter().collect();
/// extend(&mut target, &[&source]);
/// assert_eq!(target["a"], 2);
/// assert_eq!(target["b"], 3);
/// ```
pub fn extend<'t, V: Clone>(target: &'t mut Mapping<V>, sources: &[&Mapping<V>]) -> &'t mut Mapping<V> {
    for source in sources {
        for (key, value) in source.iter() {
            target.insert(key.clone(), value.clone());
        }
    }
    target
}

/// Fills keys missing from `target` from each source, left to right.
///
/// Keys already present in `target` are never overwritten, and among
/// sources the first one to supply a key wins.
pub fn defaults<'t, V: Clone>(
    target: &'t mut Mapping<V>,
    sources: &[&Mapping<V>],
) -> &'t mut Mapping<V> {
    for source in sources {
        for (key, value) in source.iter() {
            if !target.contains_key(key) {
                target.insert(key.clone(), value.clone());
            }
        }
    }
    target
}
