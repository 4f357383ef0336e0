//! Traits the operators are generic over.
//!
//! - [`Collection`]: uniform keyed traversal of sequences and mappings.
//! - [`Record`]: named field access, used by [`pluck`](crate::pluck) and
//!   [`sort_by`](crate::sort_by).
//! - [`Nest`]: recursive structure, used by [`flatten`](crate::flatten).
//! - [`Invocable`]: named in-place methods, used by [`invoke`](crate::invoke).
//! - [`Truthy`]: the default test of [`every_truthy`](crate::every_truthy)
//!   and [`some_truthy`](crate::some_truthy).

use std::fmt;

use crate::error::{Error, Result};
use crate::merge::Mapping;
use crate::value::Value;

/// Position of an entry inside a [`Collection`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key<'a> {
    /// Zero-based index into a sequence.
    Index(usize),
    /// Key of a mapping entry.
    Name(&'a str),
}

impl<'a> Key<'a> {
    /// Returns the index, if this is a sequence key.
    pub fn as_index(self) -> Option<usize> {
        match self {
            Key::Index(i) => Some(i),
            Key::Name(_) => None,
        }
    }

    /// Returns the name, if this is a mapping key.
    pub fn as_name(self) -> Option<&'a str> {
        match self {
            Key::Index(_) => None,
            Key::Name(name) => Some(name),
        }
    }
}

impl fmt::Display for Key<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Index(i) => write!(f, "{i}"),
            Key::Name(name) => f.write_str(name),
        }
    }
}

/// A container whose entries can be visited in a stable order.
///
/// Sequences yield [`Key::Index`] keys in index order; mappings yield
/// [`Key::Name`] keys in insertion order. Every entry is visited exactly
/// once per traversal.
///
/// # Example
///
/// ```
/// use sundry::{Collection, Key, Mapping};
///
/// let mut ages = Mapping::new();
/// ages.insert("ada".to_string(), 36);
/// ages.insert("alan".to_string(), 41);
///
/// let keys: Vec<String> = ages.entries().map(|(key, _)| key.to_string()).collect();
/// assert_eq!(keys, ["ada", "alan"]);
///
/// let first = [10, 20].entries().next();
/// assert_eq!(first, Some((Key::Index(0), &10)));
/// ```
pub trait Collection {
    /// Element type stored in the collection.
    type Item;

    /// Iterates over `(key, value)` pairs in collection order.
    fn entries(&self) -> impl Iterator<Item = (Key<'_>, &Self::Item)>;

    /// Iterates over values in collection order.
    fn values(&self) -> impl Iterator<Item = &Self::Item> {
        self.entries().map(|(_, value)| value)
    }
}

impl<T> Collection for [T] {
    type Item = T;

    fn entries(&self) -> impl Iterator<Item = (Key<'_>, &T)> {
        self.iter().enumerate().map(|(i, value)| (Key::Index(i), value))
    }
}

impl<T> Collection for Vec<T> {
    type Item = T;

    fn entries(&self) -> impl Iterator<Item = (Key<'_>, &T)> {
        self.as_slice().entries()
    }
}

impl<T, const N: usize> Collection for [T; N] {
    type Item = T;

    fn entries(&self) -> impl Iterator<Item = (Key<'_>, &T)> {
        self.as_slice().entries()
    }
}

impl<V> Collection for Mapping<V> {
    type Item = V;

    fn entries(&self) -> impl Iterator<Item = (Key<'_>, &V)> {
        self.iter().map(|(key, value)| (Key::Name(key), value))
    }
}

impl Collection for serde_json::Map<String, serde_json::Value> {
    type Item = serde_json::Value;

    fn entries(&self) -> impl Iterator<Item = (Key<'_>, &serde_json::Value)> {
        self.iter().map(|(key, value)| (Key::Name(key), value))
    }
}

/// Types whose named fields can be read as a [`Value`].
///
/// Implement this for your own structs to use them with
/// [`pluck`](crate::pluck), and to sort them by field name with
/// [`sort_by`](crate::sort_by).
///
/// # Example
///
/// ```
/// use sundry::{Record, Value, Number};
///
/// struct Task {
///     name: String,
///     priority: u8,
/// }
///
/// impl Record for Task {
///     fn field(&self, name: &str) -> Value<'_> {
///         match name {
///             "name" => Value::String(&self.name),
///             "priority" => Value::Number(Number::U64(self.priority as u64)),
///             _ => Value::None,
///         }
///     }
/// }
/// ```
pub trait Record {
    /// Returns the value of a field, or [`Value::None`] if the field
    /// does not exist.
    fn field(&self, name: &str) -> Value<'_>;
}

impl Record for serde_json::Value {
    fn field(&self, name: &str) -> Value<'_> {
        self.get(name).map(Value::from).unwrap_or(Value::None)
    }
}

impl Record for serde_json::Map<String, serde_json::Value> {
    fn field(&self, name: &str) -> Value<'_> {
        self.get(name).map(Value::from).unwrap_or(Value::None)
    }
}

impl Record for Mapping<serde_json::Value> {
    fn field(&self, name: &str) -> Value<'_> {
        self.get(name).map(Value::from).unwrap_or(Value::None)
    }
}

impl<T: Record + ?Sized> Record for &T {
    fn field(&self, name: &str) -> Value<'_> {
        (**self).field(name)
    }
}

/// Recursive structures that [`flatten`](crate::flatten) can descend into.
pub trait Nest: Sized {
    /// Returns the nested elements if this value is itself a sequence,
    /// `None` if it is a leaf.
    fn children(&self) -> Option<&[Self]>;
}

/// An arbitrarily nested sequence of `T`.
///
/// # Example
///
/// ```
/// use sundry::{flatten, Nested};
///
/// let nested = vec![
///     Nested::leaf(1),
///     Nested::list([Nested::leaf(2), Nested::list([Nested::leaf(3)])]),
/// ];
/// assert_eq!(flatten(&nested), [&Nested::leaf(1), &Nested::leaf(2), &Nested::leaf(3)]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Nested<T> {
    /// A single element.
    Leaf(T),
    /// A nested sequence.
    List(Vec<Nested<T>>),
}

impl<T> Nested<T> {
    /// Wraps a single element.
    pub fn leaf(value: T) -> Self {
        Nested::Leaf(value)
    }

    /// Builds a nested sequence.
    pub fn list(items: impl IntoIterator<Item = Nested<T>>) -> Self {
        Nested::List(items.into_iter().collect())
    }

    /// Returns the element if this is a leaf.
    pub fn as_leaf(&self) -> Option<&T> {
        match self {
            Nested::Leaf(value) => Some(value),
            Nested::List(_) => None,
        }
    }
}

impl<T> From<T> for Nested<T> {
    fn from(value: T) -> Self {
        Nested::Leaf(value)
    }
}

impl<T> Nest for Nested<T> {
    fn children(&self) -> Option<&[Self]> {
        match self {
            Nested::Leaf(_) => None,
            Nested::List(items) => Some(items.as_slice()),
        }
    }
}

impl Nest for serde_json::Value {
    fn children(&self) -> Option<&[Self]> {
        self.as_array().map(Vec::as_slice)
    }
}

/// Types exposing named methods that mutate the value in place.
///
/// `A` is the argument type the methods accept; methods that take no
/// arguments should reject a non-empty argument group with
/// [`Error::InvalidArguments`].
pub trait Invocable<A = ()> {
    /// Calls the method named `method` with `args`.
    ///
    /// Returns [`Error::UnknownMethod`] if the type has no such method.
    fn invoke_method(&mut self, method: &str, args: &[A]) -> Result<()>;
}

/// `Vec<T>` understands `sort`, `reverse`, `dedup`, `clear` (no arguments)
/// and `push` (appends every argument).
impl<T: Ord + Clone> Invocable<T> for Vec<T> {
    fn invoke_method(&mut self, method: &str, args: &[T]) -> Result<()> {
        let no_args = |method: &'static str| {
            if args.is_empty() {
                Ok(())
            } else {
                Err(Error::InvalidArguments {
                    method,
                    reason: "takes no arguments",
                })
            }
        };

        match method {
            "sort" => {
                no_args("sort")?;
                self.sort();
            }
            "reverse" => {
                no_args("reverse")?;
                self.reverse();
            }
            "dedup" => {
                no_args("dedup")?;
                self.dedup();
            }
            "clear" => {
                no_args("clear")?;
                self.clear();
            }
            "push" if args.is_empty() => {
                return Err(Error::InvalidArguments {
                    method: "push",
                    reason: "expects at least one argument",
                })
            }
            "push" => self.extend_from_slice(args),
            other => return Err(Error::unknown_method(other)),
        }
        Ok(())
    }
}

/// Truthiness test used when no predicate is supplied.
///
/// `false`, zero, `NaN`, the empty string, `None`, and JSON `null` are
/// falsy. Everything else, including empty JSON arrays and objects, is
/// truthy.
pub trait Truthy {
    /// Returns `true` if the value counts as truthy.
    fn is_truthy(&self) -> bool;
}

impl Truthy for bool {
    fn is_truthy(&self) -> bool {
        *self
    }
}

macro_rules! truthy_int {
    ($($ty:ty),+) => {
        $(
            impl Truthy for $ty {
                fn is_truthy(&self) -> bool {
                    *self != 0
                }
            }
        )+
    };
}

truthy_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Truthy for f32 {
    fn is_truthy(&self) -> bool {
        *self != 0.0 && !self.is_nan()
    }
}

impl Truthy for f64 {
    fn is_truthy(&self) -> bool {
        *self != 0.0 && !self.is_nan()
    }
}

impl Truthy for str {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for String {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T: Truthy> Truthy for Option<T> {
    fn is_truthy(&self) -> bool {
        self.as_ref().is_some_and(Truthy::is_truthy)
    }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

impl Truthy for serde_json::Value {
    fn is_truthy(&self) -> bool {
        match self {
            serde_json::Value::Null => false,
            serde_json::Value::Bool(b) => *b,
            serde_json::Value::Number(n) => n.as_f64().is_some_and(|f| f.is_truthy()),
            serde_json::Value::String(s) => !s.is_empty(),
            serde_json::Value::Array(_) | serde_json::Value::Object(_) => true,
        }
    }
}

impl Truthy for Value<'_> {
    fn is_truthy(&self) -> bool {
        match self {
            Value::String(s) => !s.is_empty(),
            Value::Number(n) => n.to_f64().is_truthy(),
            Value::Bool(b) => *b,
            Value::Json(_) => true,
            Value::None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Number;
    use serde_json::json;

    struct TestItem {
        name: String,
        count: i32,
    }

    impl Record for TestItem {
        fn field(&self, name: &str) -> Value<'_> {
            match name {
                "name" => Value::String(&self.name),
                "count" => Value::Number(Number::I64(self.count as i64)),
                _ => Value::None,
            }
        }
    }

    #[test]
    fn record_manual_impl() {
        let item = TestItem {
            name: "test".to_string(),
            count: 42,
        };

        assert_eq!(item.field("name"), Value::String("test"));
        assert_eq!(item.field("count"), Value::Number(Number::I64(42)));
        assert_eq!(item.field("unknown"), Value::None);
        assert_eq!((&item).field("name"), Value::String("test"));
    }

    #[test]
    fn record_json_object() {
        let person = json!({"name": "moe", "age": 40});
        assert_eq!(person.field("name"), Value::String("moe"));
        assert_eq!(person.field("age"), Value::Number(Number::I64(40)));
        assert_eq!(person.field("missing"), Value::None);
        assert_eq!(json!(3).field("name"), Value::None);
    }

    #[test]
    fn sequence_entries_are_indexed() {
        let items = vec!['a', 'b'];
        let keys: Vec<Key> = items.entries().map(|(k, _)| k).collect();
        assert_eq!(keys, [Key::Index(0), Key::Index(1)]);
    }

    #[test]
    fn mapping_entries_follow_insertion_order() {
        let mut map = Mapping::new();
        map.insert("z".to_string(), 1);
        map.insert("a".to_string(), 2);
        let keys: Vec<&str> = map.entries().filter_map(|(k, _)| k.as_name()).collect();
        assert_eq!(keys, ["z", "a"]);
    }

    #[test]
    fn json_map_entries() {
        let value = json!({"one": 1, "two": 2});
        let map = value.as_object().unwrap();
        assert_eq!(map.values().count(), 2);
    }

    #[test]
    fn key_display() {
        assert_eq!(Key::Index(3).to_string(), "3");
        assert_eq!(Key::Name("id").to_string(), "id");
        assert_eq!(Key::Index(3).as_index(), Some(3));
        assert_eq!(Key::Name("id").as_index(), None);
    }

    #[test]
    fn nested_children() {
        let leaf = Nested::leaf(1);
        let list = Nested::list([Nested::leaf(2)]);
        assert!(leaf.children().is_none());
        assert_eq!(list.children().map(<[_]>::len), Some(1));
        assert_eq!(leaf.as_leaf(), Some(&1));
        assert!(json!([1]).children().is_some());
        assert!(json!({"a": 1}).children().is_none());
    }

    #[test]
    fn vec_invocable_methods() {
        let mut v = vec![3, 1, 2];
        v.invoke_method("sort", &[]).unwrap();
        assert_eq!(v, [1, 2, 3]);
        v.invoke_method("reverse", &[]).unwrap();
        assert_eq!(v, [3, 2, 1]);
        v.invoke_method("push", &[9, 9]).unwrap();
        assert_eq!(v, [3, 2, 1, 9, 9]);
        v.invoke_method("dedup", &[]).unwrap();
        assert_eq!(v, [3, 2, 1, 9]);
        v.invoke_method("clear", &[]).unwrap();
        assert!(v.is_empty());
    }

    #[test]
    fn vec_invocable_errors() {
        let mut v = vec![1];
        assert!(matches!(
            v.invoke_method("explode", &[]),
            Err(Error::UnknownMethod { method }) if method == "explode"
        ));
        assert!(matches!(
            v.invoke_method("sort", &[1]),
            Err(Error::InvalidArguments { method: "sort", .. })
        ));
        assert!(matches!(
            v.invoke_method("push", &[]),
            Err(Error::InvalidArguments { method: "push", .. })
        ));
    }

    #[test]
    fn truthiness() {
        assert!(!0i32.is_truthy());
        assert!(1u8.is_truthy());
        assert!(!f64::NAN.is_truthy());
        assert!(!"".is_truthy());
        assert!("x".is_truthy());
        assert!(!None::<i32>.is_truthy());
        assert!(!Some(0).is_truthy());
        assert!(Some(2).is_truthy());
        assert!(!json!(null).is_truthy());
        assert!(!json!(0).is_truthy());
        assert!(json!([]).is_truthy());
        assert!(json!({}).is_truthy());
        assert!(!Value::None.is_truthy());
        assert!(Value::String("a").is_truthy());
    }
}
