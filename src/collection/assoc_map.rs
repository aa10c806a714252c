//! Insertion-ordered associative container.
//!
//! [`AssocMap`] maps unique keys to values and remembers the order in which
//! keys were first inserted. It is a thin wrapper over [`IndexMap`] that fixes
//! the hasher, compares entries in order and removes without reordering.
//!
//! # Examples
//!
//! ```rust
//! use fnkit::collection::AssocMap;
//!
//! let mut map = AssocMap::new();
//! map.insert("foo", "bar");
//! map.insert("faz", "baz");
//! map.insert("foo", "qux");
//!
//! assert_eq!(map.get("foo"), Some(&"qux"));
//! assert_eq!(map.keys().copied().collect::<Vec<_>>(), vec!["foo", "faz"]);
//! ```
//!
//! # Hashing
//!
//! The index uses the standard library's `RandomState`. With the `fxhash`
//! feature it uses `rustc_hash::FxBuildHasher` instead.

use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;
use std::ops::Index;

use indexmap::IndexMap;

#[cfg(feature = "fxhash")]
type IndexHasher = rustc_hash::FxBuildHasher;

#[cfg(not(feature = "fxhash"))]
type IndexHasher = std::collections::hash_map::RandomState;

/// Borrowing iterator over the entries of an [`AssocMap`], in insertion order.
pub type Iter<'a, K, V> = indexmap::map::Iter<'a, K, V>;

/// An ordered mapping from unique keys to values.
///
/// Replacing the value of an existing key keeps the key's original position.
/// Removing a key preserves the relative order of the remaining entries.
///
/// With the `serde` feature the map serializes as a map whose entries follow
/// insertion order.
#[derive(Clone)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(
        transparent,
        bound(
            serialize = "K: serde::Serialize, V: serde::Serialize",
            deserialize = "K: serde::Deserialize<'de> + Hash + Eq, V: serde::Deserialize<'de>"
        )
    )
)]
pub struct AssocMap<K, V> {
    entries: IndexMap<K, V, IndexHasher>,
}

impl<K, V> AssocMap<K, V> {
    /// Creates an empty map.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::collection::AssocMap;
    ///
    /// let map: AssocMap<String, i32> = AssocMap::new();
    /// assert!(map.is_empty());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: IndexMap::with_hasher(IndexHasher::default()),
        }
    }

    /// Returns the number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the map has no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns an iterator over the entries in insertion order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        self.entries.iter()
    }

    /// Returns an iterator over the keys in insertion order.
    pub fn keys(&self) -> impl DoubleEndedIterator<Item = &K> + ExactSizeIterator {
        self.entries.keys()
    }

    /// Returns an iterator over the values in insertion order.
    pub fn values(&self) -> impl DoubleEndedIterator<Item = &V> + ExactSizeIterator {
        self.entries.values()
    }

    /// Returns the entry at `position` in insertion order.
    pub fn get_index(&self, position: usize) -> Option<(&K, &V)> {
        self.entries.get_index(position)
    }
}

impl<K, V> AssocMap<K, V>
where
    K: Hash + Eq,
{
    /// Returns a reference to the value stored under `key`.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.get(key)
    }

    /// Returns the stored key and value for `key`.
    pub fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.get_key_value(key)
    }

    /// Returns `true` if `key` is present.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.contains_key(key)
    }

    /// Removes `key` and returns its value.
    ///
    /// The remaining entries keep their relative order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::collection::AssocMap;
    ///
    /// let mut map: AssocMap<_, _> = [("a", 1), ("b", 2), ("c", 3)].into_iter().collect();
    ///
    /// assert_eq!(map.remove("b"), Some(2));
    /// assert_eq!(map.remove("b"), None);
    /// assert_eq!(map.keys().copied().collect::<Vec<_>>(), vec!["a", "c"]);
    /// ```
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.shift_remove(key)
    }

    /// Inserts `value` under `key`.
    ///
    /// A new key is appended at the end. An existing key keeps its position,
    /// and the replaced value is returned.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.entries.insert(key, value)
    }
}

impl<K, V> Default for AssocMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: PartialEq, V: PartialEq> PartialEq for AssocMap<K, V> {
    /// Two maps are equal when they hold equal entries in the same order.
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<K: Eq, V: Eq> Eq for AssocMap<K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for AssocMap<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.iter()).finish()
    }
}

impl<K: fmt::Display, V: fmt::Display> fmt::Display for AssocMap<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        for (position, (key, value)) in self.iter().enumerate() {
            if position > 0 {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{key}: {value}")?;
        }
        write!(formatter, "}}")
    }
}

impl<K, V, Q> Index<&Q> for AssocMap<K, V>
where
    K: Hash + Eq + Borrow<Q>,
    Q: Hash + Eq + ?Sized,
{
    type Output = V;

    /// # Panics
    ///
    /// Panics if `key` is not present. Use [`AssocMap::get`] or
    /// [`accessor`](super::accessor) for a fallible lookup.
    fn index(&self, key: &Q) -> &V {
        match self.get(key) {
            Some(value) => value,
            None => panic!("AssocMap: key not present"),
        }
    }
}

impl<K: Hash + Eq, V> FromIterator<(K, V)> for AssocMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K: Hash + Eq, V> Extend<(K, V)> for AssocMap<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}

impl<K: Hash + Eq, V, const N: usize> From<[(K, V); N]> for AssocMap<K, V> {
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl<'a, K, V> IntoIterator for &'a AssocMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V> IntoIterator for AssocMap<K, V> {
    type Item = (K, V);
    type IntoIter = indexmap::map::IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

// =============================================================================
// Tests
// =============================================================================


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_serialize_keeps_insertion_order() {
        let map: AssocMap<&str, i32> = [("zeta", 1), ("alpha", 2)].into();
        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"zeta":1,"alpha":2}"#);
    }

    #[rstest]
    fn test_deserialize_keeps_document_order() {
        let json = r#"{"zeta":1,"alpha":2,"mid":3}"#;
        let map: AssocMap<String, i32> = serde_json::from_str(json).unwrap();
        let keys: Vec<&str> = map.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }

    #[rstest]
    fn test_roundtrip_empty() {
        let map: AssocMap<String, i32> = serde_json::from_str("{}").unwrap();
        assert!(map.is_empty());
        assert_eq!(serde_json::to_string(&map).unwrap(), "{}");
    }
}
