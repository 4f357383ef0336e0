//! Combining several sequences and flattening nested ones.

use crate::traits::Nest;

/// Groups the elements of `primary` and `others` that share an index.
///
/// The result always has `primary.len()` rows. Each row holds the
/// primary element and one entry per sequence in `others`; a sequence too
/// short to reach the index contributes `None`. The other sequences may
/// hold a different element type than `primary`.
///
/// # Example
///
/// ```
/// use sundry::zip;
///
/// let letters = ['a', 'b', 'c', 'd'];
/// let numbers = [1, 2, 3];
/// let zipped = zip(&letters, &[&numbers]);
/// assert_eq!(zipped[0], (&'a', vec![Some(&1)]));
/// assert_eq!(zipped[3], (&'d', vec![None]));
/// ```
pub fn zip<'a, T, U>(primary: &'a [T], others: &[&'a [U]]) -> Vec<(&'a T, Vec<Option<&'a U>>)> {
    primary
        .iter()
        .enumerate()
        .map(|(i, head)| (head, others.iter().map(|other| other.get(i)).collect()))
        .collect()
}

/// Expands every nested sequence in place, depth-first and left to right.
///
/// # Example
///
/// ```
/// use sundry::flatten;
/// use serde_json::json;
///
/// let nested = json!([1, [2, [3, [4]], 5]]);
/// let flat = flatten(nested.as_array().unwrap());
/// assert_eq!(flat, [&json!(1), &json!(2), &json!(3), &json!(4), &json!(5)]);
/// ```
pub fn flatten<T: Nest>(nested: &[T]) -> Vec<&T> {
    let mut result = Vec::new();
    flatten_into(nested, &mut result);
    result
}

fn flatten_into<'a, T: Nest>(nested: &'a [T], result: &mut Vec<&'a T>) {
    for item in nested {
        match item.children() {
            Some(children) => flatten_into(children, result),
            None => result.push(item),
        }
    }
}

/// Returns the elements of `primary` that appear in every sequence of
/// `others`, in `primary` order.
///
/// With no `others`, every element of `primary` is kept.
pub fn intersection<'a, T: PartialEq>(primary: &'a [T], others: &[&[T]]) -> Vec<&'a T> {
    primary
        .iter()
        .filter(|item| others.iter().all(|other| other.contains(item)))
        .collect()
}

/// Returns the elements of `primary` that appear in none of `others`, in
/// `primary` order.
pub fn difference<'a, T: PartialEq>(primary: &'a [T], others: &[&[T]]) -> Vec<&'a T> {
    primary
        .iter()
        .filter(|item| !others.iter().any(|other| other.contains(item)))
        .collect()
}
