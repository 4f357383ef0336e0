//! Predicate-based selection and per-element transformation.
//!
//! Selection operators ([`filter`], [`reject`], [`uniq`]) borrow the
//! selected elements from the input and preserve input order. Transforming
//! operators ([`map`], [`pluck`]) build new values.

use std::collections::HashSet;
use std::fmt::Display;
use std::hash::Hash;

use crate::error::Result;
use crate::traits::{Invocable, Record};
use crate::value::Value;

/// Returns the elements that satisfy `predicate`.
///
/// # Example
///
/// ```
/// use sundry::filter;
///
/// let evens = filter(&[1, 2, 3, 4, 5, 6], |n| n % 2 == 0);
/// assert_eq!(evens, [&2, &4, &6]);
/// ```
pub fn filter<'a, T, F>(sequence: &'a [T], mut predicate: F) -> Vec<&'a T>
where
    F: FnMut(&T) -> bool,
{
    sequence.iter().filter(|&item| predicate(item)).collect()
}

/// Returns the elements that do not satisfy `predicate`.
///
/// Together with [`filter`] this partitions the input.
pub fn reject<'a, T, F>(sequence: &'a [T], mut predicate: F) -> Vec<&'a T>
where
    F: FnMut(&T) -> bool,
{
    sequence.iter().filter(|&item| !predicate(item)).collect()
}

/// Applies `transform` to every element, keeping length and order.
pub fn map<T, U, F>(sequence: &[T], transform: F) -> Vec<U>
where
    F: FnMut(&T) -> U,
{
    sequence.iter().map(transform).collect()
}

/// Reads the field `name` of every element.
///
/// Elements without the field contribute [`Value::None`].
///
/// # Example
///
/// ```
/// use sundry::{pluck, Value, Number};
/// use serde_json::json;
///
/// let people = [json!({"name": "moe", "age": 30}), json!({"name": "curly", "age": 50})];
/// assert_eq!(
///     pluck(&people, "age"),
///     [Value::Number(Number::I64(30)), Value::Number(Number::I64(50))]
/// );
/// ```
pub fn pluck<'a, T: Record>(sequence: &'a [T], name: &str) -> Vec<Value<'a>> {
    sequence.iter().map(|item| item.field(name)).collect()
}

/// Keeps only the first occurrence of each distinct element.
///
/// Elements are compared by their [`Display`] string, so values that print
/// the same count as duplicates even when they differ otherwise: a boxed
/// `1` and a boxed `"1"` in a `Vec<Box<dyn Display>>` collapse to one. Use
/// [`uniq_strict`] for equality based on `Eq` and `Hash`.
pub fn uniq<T: Display>(sequence: &[T]) -> Vec<&T> {
    let mut seen = HashSet::new();
    sequence
        .iter()
        .filter(|item| seen.insert(item.to_string()))
        .collect()
}

/// Keeps only the first occurrence of each distinct element, by `Eq`.
pub fn uniq_strict<T: Eq + Hash>(sequence: &[T]) -> Vec<&T> {
    let mut seen = HashSet::new();
    sequence.iter().filter(|item| seen.insert(*item)).collect()
}

/// Calls the method `name` on every element in place, passing `args`.
///
/// Stops at the first element that rejects the call and returns its
/// error; elements before it have already been updated.
///
/// # Example
///
/// ```
/// use sundry::invoke;
///
/// let mut lists = vec![vec![5, 1, 7], vec![3, 2, 1]];
/// invoke(&mut lists, "sort", &[]).unwrap();
/// assert_eq!(lists, [[1, 5, 7], [1, 2, 3]]);
/// ```
pub fn invoke<'a, T, A>(sequence: &'a mut [T], name: &str, args: &[A]) -> Result<&'a mut [T]>
where
    T: Invocable<A>,
{
    for item in sequence.iter_mut() {
        item.invoke_method(name, args)?;
    }
    Ok(sequence)
}

/// Applies `method` to every element in place, passing `args`.
pub fn invoke_with<'a, T, A, F>(sequence: &'a mut [T], mut method: F, args: &[A]) -> &'a mut [T]
where
    F: FnMut(&mut T, &[A]),
{
    for item in sequence.iter_mut() {
        method(item, args);
    }
    sequence
}
