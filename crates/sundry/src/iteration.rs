//! Traversal, folding and membership over any [`Collection`].

use crate::traits::{Collection, Key, Truthy};

/// Calls `iterator(value, key, collection)` once per entry, in collection
/// order.
///
/// # Example
///
/// ```
/// use sundry::{each, Key};
///
/// let mut seen = Vec::new();
/// each(&["a", "b"], |value, key, _| seen.push((key, *value)));
/// assert_eq!(seen, [(Key::Index(0), "a"), (Key::Index(1), "b")]);
/// ```
pub fn each<'a, C, F>(collection: &'a C, mut iterator: F)
where
    C: Collection + ?Sized,
    F: FnMut(&'a C::Item, Key<'a>, &'a C),
{
    for (key, value) in collection.entries() {
        iterator(value, key, collection);
    }
}

/// Folds a collection into a single value of its element type.
///
/// With `initial`, every element is combined into the seed via
/// `iterator(accumulator, element)`. Without it, the first element seeds
/// the accumulator and folding starts at the second. An empty collection
/// with no seed yields `None`.
///
/// # Example
///
/// ```
/// use sundry::reduce;
///
/// assert_eq!(reduce(&[1, 2, 3], |a, b| a + b, None), Some(6));
/// assert_eq!(reduce(&[1, 2, 3], |a, b| a + b, Some(10)), Some(16));
/// assert_eq!(reduce(&[] as &[i32], |a, b| a + b, None), None);
/// ```
pub fn reduce<C, F>(collection: &C, mut iterator: F, initial: Option<C::Item>) -> Option<C::Item>
where
    C: Collection + ?Sized,
    C::Item: Clone,
    F: FnMut(C::Item, &C::Item) -> C::Item,
{
    let mut values = collection.values();
    let seed = match initial {
        Some(seed) => seed,
        None => values.next()?.clone(),
    };
    Some(values.fold(seed, |acc, value| iterator(acc, value)))
}

/// Seeded fold whose accumulator type may differ from the element type.
pub fn fold<C, A, F>(collection: &C, init: A, iterator: F) -> A
where
    C: Collection + ?Sized,
    F: FnMut(A, &C::Item) -> A,
{
    collection.values().fold(init, iterator)
}

/// Returns `true` if some element is equal to `target`.
pub fn contains<C>(collection: &C, target: &C::Item) -> bool
where
    C: Collection + ?Sized,
    C::Item: PartialEq,
{
    collection.values().any(|value| value == target)
}

/// Returns `true` if every element satisfies `predicate`.
///
/// Vacuously `true` on an empty collection.
pub fn every<C, F>(collection: &C, mut predicate: F) -> bool
where
    C: Collection + ?Sized,
    F: FnMut(&C::Item) -> bool,
{
    collection.values().all(|value| predicate(value))
}

/// [`every`] with the default truthiness test.
pub fn every_truthy<C>(collection: &C) -> bool
where
    C: Collection + ?Sized,
    C::Item: Truthy,
{
    collection.values().all(Truthy::is_truthy)
}

/// Returns `true` if at least one element satisfies `predicate`.
///
/// `false` on an empty collection.
pub fn some<C, F>(collection: &C, mut predicate: F) -> bool
where
    C: Collection + ?Sized,
    F: FnMut(&C::Item) -> bool,
{
    collection.values().any(|value| predicate(value))
}

/// [`some`] with the default truthiness test.
pub fn some_truthy<C>(collection: &C) -> bool
where
    C: Collection + ?Sized,
    C::Item: Truthy,
{
    collection.values().any(Truthy::is_truthy)
}

/// Returns the index of the first element equal to `target`.
pub fn index_of<T: PartialEq>(sequence: &[T], target: &T) -> Option<usize> {
    sequence.iter().position(|value| value == target)
}
