//! Randomized permutation and criterion-based sorting.
//!
//! [`sort_by`] orders elements by a [`Criterion`]: either a field name
//! (for [`Record`] types) or a key function wrapped with [`by`].
//! [`shuffle`] permutes a sequence with a randomized riffle merge.

use std::cmp::Ordering;

use rand::Rng;

use crate::traits::Record;
use crate::value::Value;

/// Derives the sort key of an element.
pub trait Criterion<T: ?Sized> {
    /// Returns the value `item` is ordered by.
    fn key<'a>(&self, item: &'a T) -> Value<'a>;
}

/// A field name: orders [`Record`] elements by that field.
impl<T: Record + ?Sized> Criterion<T> for &str {
    fn key<'a>(&self, item: &'a T) -> Value<'a> {
        item.field(self)
    }
}

/// A key function used as a [`Criterion`]. Built with [`by`].
#[derive(Debug, Clone, Copy)]
pub struct By<F>(F);

impl<T: ?Sized, F> Criterion<T> for By<F>
where
    F: for<'a> Fn(&'a T) -> Value<'a>,
{
    fn key<'a>(&self, item: &'a T) -> Value<'a> {
        (self.0)(item)
    }
}

/// Wraps a key function as a [`Criterion`].
///
/// # Example
///
/// ```
/// use sundry::{by, sort_by, Value};
///
/// let mut words = vec!["ccc", "a", "bb"];
/// sort_by(&mut words, by(|w: &&str| Value::from(w.len())));
/// assert_eq!(words, ["a", "bb", "ccc"]);
/// ```
pub fn by<T: ?Sized, F>(key: F) -> By<F>
where
    F: for<'a> Fn(&'a T) -> Value<'a>,
{
    By(key)
}

/// Compares two values of the same type.
///
/// Returns `None` if the types don't match or comparison is not possible (NaN).
pub fn compare_values(a: &Value<'_>, b: &Value<'_>) -> Option<Ordering> {
    match (a, b) {
        (Value::String(a), Value::String(b)) => Some(a.cmp(b)),
        (Value::Number(a), Value::Number(b)) => a.compare(*b),
        (Value::Bool(a), Value::Bool(b)) => Some(a.cmp(b)),

        // None values sort last
        (Value::None, Value::None) => Some(Ordering::Equal),
        (Value::None, _) => Some(Ordering::Greater),
        (_, Value::None) => Some(Ordering::Less),

        // Type mismatch or composite JSON - cannot compare
        _ => None,
    }
}

/// Total order used by [`sort_by`].
///
/// Agrees with [`compare_values`] wherever that returns `Some`. NaN sorts
/// after every other number, and values of different types are grouped
/// by type so the sort never sees an inconsistent comparator.
fn sort_order(a: &Value<'_>, b: &Value<'_>) -> Ordering {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => match (x.is_nan(), y.is_nan()) {
            (false, false) => x.compare(*y).unwrap_or(Ordering::Equal),
            (x_nan, y_nan) => x_nan.cmp(&y_nan),
        },
        _ => compare_values(a, b).unwrap_or_else(|| type_rank(a).cmp(&type_rank(b))),
    }
}

fn type_rank(value: &Value<'_>) -> u8 {
    match value {
        Value::Number(_) => 0,
        Value::String(_) => 1,
        Value::Bool(_) => 2,
        Value::Json(_) => 3,
        Value::None => 4,
    }
}

/// Sorts `sequence` in place by ascending criterion value and returns it.
///
/// Numbers compare numerically across integer and float variants, strings
/// lexicographically, and missing values sort last. The sort is stable.
///
/// # Example
///
/// ```
/// use sundry::sort_by;
/// use serde_json::json;
///
/// let mut people = vec![
///     json!({"name": "curly", "age": 50}),
///     json!({"name": "moe", "age": 30}),
/// ];
/// sort_by(&mut people, "age");
/// assert_eq!(people[0]["name"], "moe");
/// ```
pub fn sort_by<'s, T, C>(sequence: &'s mut [T], criterion: C) -> &'s mut [T]
where
    C: Criterion<T>,
{
    sequence.sort_by(|a, b| sort_order(&criterion.key(a), &criterion.key(b)));
    sequence
}

/// Returns a randomized permutation of `sequence` using the thread-local
/// RNG. See [`shuffle_with`].
pub fn shuffle<T>(sequence: &[T]) -> Vec<&T> {
    shuffle_with(sequence, &mut rand::thread_rng())
}

/// Returns a randomized permutation of `sequence` drawn from `rng`.
///
/// The sequence is cut at a random point between 25% and 75% of its
/// length. Elements are then popped from the end of either part at random
/// until one part runs out, and whatever remains (tail part first, then
/// head part) is drained from the end. This riffle merge is not uniform
/// over all permutations.
pub fn shuffle_with<'a, T, R>(sequence: &'a [T], rng: &mut R) -> Vec<&'a T>
where
    R: Rng + ?Sized,
{
    let len = sequence.len();
    let cut = ((0.25 + rng.gen::<f64>() / 2.0) * len as f64).floor() as usize;
    let (head, tail) = sequence.split_at(cut.min(len));
    let mut head: Vec<&T> = head.iter().collect();
    let mut tail: Vec<&T> = tail.iter().collect();

    let mut result = Vec::with_capacity(len);
    while !head.is_empty() && !tail.is_empty() {
        let part = if rng.gen_bool(0.5) {
            &mut tail
        } else {
            &mut head
        };
        result.extend(part.pop());
    }
    result.extend(tail.into_iter().rev());
    result.extend(head.into_iter().rev());
    result
}
