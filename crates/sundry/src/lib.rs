//! Sundry - generic helpers over sequences and ordered mappings.
//!
//! Sundry is a small toolkit of free functions that give a uniform
//! vocabulary for working with slices and string-keyed mappings:
//!
//! - Iteration: [`each`], [`reduce`], [`fold`], [`contains`], [`every`],
//!   [`some`], [`index_of`]
//! - Selection: [`first`], [`first_n`], [`last`], [`last_n`]
//! - Filtering and transformation: [`filter`], [`reject`], [`map`],
//!   [`pluck`], [`uniq`], [`uniq_strict`], [`invoke`], [`invoke_with`]
//! - Set and shape: [`zip`], [`flatten`], [`intersection`], [`difference`]
//! - Merging: [`extend`], [`defaults`]
//! - Function combinators: [`once`], [`memoize`], [`delay`], [`delay_on`]
//! - Ordering: [`shuffle`], [`shuffle_with`], [`sort_by`]
//!
//! # Quick Start
//!
//! ```rust
//! use sundry::{difference, filter, first_n, reduce, sort_by, uniq};
//! use serde_json::json;
//!
//! let numbers = [5, 3, 8, 3, 1];
//!
//! assert_eq!(filter(&numbers, |n| *n > 2), [&5, &3, &8, &3]);
//! assert_eq!(uniq(&numbers), [&5, &3, &8, &1]);
//! assert_eq!(first_n(&numbers, 2), [5, 3]);
//! assert_eq!(reduce(&numbers, |a, b| a + b, None), Some(20));
//! assert_eq!(difference(&numbers, &[&[3, 8]]), [&5, &1]);
//!
//! let mut people = vec![json!({"name": "moe", "age": 40}), json!({"name": "ada", "age": 36})];
//! sort_by(&mut people, "age");
//! assert_eq!(people[0]["name"], "ada");
//! ```
//!
//! # Collections
//!
//! Operators that only traverse ([`each`], [`reduce`], [`contains`],
//! [`every`], [`some`]) accept anything implementing [`Collection`]:
//! slices, vectors, arrays, [`Mapping`] and `serde_json::Map`. The rest
//! take slices.
//!
//! Selecting operators borrow from their input and return `Vec<&T>`;
//! nothing is mutated except by [`invoke`], [`invoke_with`], [`sort_by`]
//! and the merge operators, which work in place and hand the target back.
//!
//! # Identity
//!
//! [`uniq`] and [`memoize`] key their lookups by the `Display` string of a
//! value, so values that print identically are treated as the same.
//! [`uniq_strict`] uses `Eq + Hash` instead.

mod combinators;
mod error;
mod iteration;
mod merge;
mod ordering;
mod select;
mod shape;
mod traits;
mod transform;
mod value;

// Re-export public API
pub use combinators::{delay, delay_on, memoize, once, Scheduler, Task, ThreadScheduler};
pub use error::{Error, Result};
pub use iteration::{contains, each, every, every_truthy, fold, index_of, reduce, some, some_truthy};
pub use merge::{defaults, extend, Mapping};
pub use ordering::{by, compare_values, shuffle, shuffle_with, sort_by, By, Criterion};
pub use select::{first, first_n, last, last_n};
pub use shape::{difference, flatten, intersection, zip};
pub use traits::{Collection, Invocable, Key, Nest, Nested, Record, Truthy};
pub use transform::{filter, invoke, invoke_with, map, pluck, reject, uniq, uniq_strict};
pub use value::{Number, Value};
