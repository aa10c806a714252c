//! Helpers over associative containers.

use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;

use super::AssocMap;
use crate::error::FnError;
use crate::function::Function;

/// Calls `callback(value, key)` for every entry and returns the last result.
///
/// Only the final callback result survives; `None` means the map was empty.
/// Use [`transform_assoc`] to build a new map from every result.
///
/// # Examples
///
/// ```rust
/// use fnkit::collection::{AssocMap, map_assoc};
///
/// let map = AssocMap::from([("foo", 1), ("bar", 2)]);
/// let mut visited = Vec::new();
///
/// let last = map_assoc(&map, |value, key| {
///     visited.push(*key);
///     value * 10
/// });
///
/// assert_eq!(last, Some(20));
/// assert_eq!(visited, vec!["foo", "bar"]);
/// ```
pub fn map_assoc<I, K, V, F, R>(map: I, mut callback: F) -> Option<R>
where
    I: IntoIterator<Item = (K, V)>,
    F: FnMut(V, K) -> R,
{
    map.into_iter()
        .fold(None, |_, (key, value)| Some(callback(value, key)))
}

/// Builds a new map holding `callback(value, key)` under every key.
///
/// # Examples
///
/// ```rust
/// use fnkit::collection::{AssocMap, transform_assoc};
///
/// let map = AssocMap::from([("foo", 1), ("bar", 2)]);
/// let doubled = transform_assoc(&map, |value, _| value * 2);
///
/// assert_eq!(doubled, AssocMap::from([("foo", 2), ("bar", 4)]));
/// ```
pub fn transform_assoc<K, V, F, R>(map: &AssocMap<K, V>, mut callback: F) -> AssocMap<K, R>
where
    K: Hash + Eq + Clone,
    F: FnMut(&V, &K) -> R,
{
    map.iter()
        .map(|(key, value)| (key.clone(), callback(value, key)))
        .collect()
}

/// Left fold over the entries in insertion order.
///
/// # Examples
///
/// ```rust
/// use fnkit::collection::{AssocMap, reduce_assoc};
///
/// let map = AssocMap::from([("foo", "bar"), ("faz", "baz")]);
/// let joined = reduce_assoc(map, |accumulator, value, key| accumulator + key + value, String::new());
///
/// assert_eq!(joined, "foobarfazbaz");
/// ```
pub fn reduce_assoc<I, K, V, F, A>(map: I, mut callback: F, initial: A) -> A
where
    I: IntoIterator<Item = (K, V)>,
    F: FnMut(A, V, K) -> A,
{
    map.into_iter()
        .fold(initial, |accumulator, (key, value)| callback(accumulator, value, key))
}

/// Returns a new map with only `keys`, in the order given.
///
/// # Errors
///
/// Returns [`FnError::MissingKey`] for the first requested key that is
/// absent from `map`.
///
/// # Examples
///
/// ```rust
/// use fnkit::collection::{AssocMap, pick};
///
/// let map = AssocMap::from([("a", 1), ("b", 2), ("c", 3)]);
///
/// assert_eq!(pick(&map, ["c", "a"]).unwrap(), AssocMap::from([("c", 3), ("a", 1)]));
/// assert!(pick(&map, ["a", "z"]).is_err());
/// ```
pub fn pick<'q, K, V, Q, I>(map: &AssocMap<K, V>, keys: I) -> Result<AssocMap<K, V>, FnError>
where
    K: Hash + Eq + Clone + Borrow<Q>,
    V: Clone,
    Q: Hash + Eq + fmt::Debug + ?Sized + 'q,
    I: IntoIterator<Item = &'q Q>,
{
    keys.into_iter()
        .map(|key| {
            map.get_key_value(key)
                .map(|(stored_key, value)| (stored_key.clone(), value.clone()))
                .ok_or_else(|| {
                    tracing::debug!(key = ?key, "pick: key not present");
                    FnError::missing_key(key)
                })
        })
        .collect()
}

/// Collects the value under `key` from every map that has it.
///
/// Maps without `key` are skipped, so the result may be shorter than the
/// input.
///
/// # Examples
///
/// ```rust
/// use fnkit::collection::{AssocMap, pluck};
///
/// let records = [
///     AssocMap::from([("name", "moe"), ("age", "45")]),
///     AssocMap::from([("name", "larry"), ("age", "55")]),
///     AssocMap::from([("name", "curly")]),
/// ];
///
/// assert_eq!(pluck(&records, "age"), vec!["45", "55"]);
/// ```
pub fn pluck<'m, I, K, V, Q>(collection: I, key: &Q) -> Vec<V>
where
    I: IntoIterator<Item = &'m AssocMap<K, V>>,
    K: Hash + Eq + Borrow<Q> + 'm,
    V: Clone + 'm,
    Q: Hash + Eq + ?Sized,
{
    collection
        .into_iter()
        .filter_map(|map| map.get(key).cloned())
        .collect()
}

/// A function reading one key from any map it is given.
///
/// Created by [`accessor`].
pub struct Accessor<Q: ?Sized + ToOwned> {
    key: Q::Owned,
}

/// Returns a function mapping a map to the value under `key`.
///
/// # Examples
///
/// ```rust
/// use fnkit::collection::{AssocMap, accessor};
/// use fnkit::function::Function;
///
/// let name = accessor("name");
/// let moe = AssocMap::from([("name".to_string(), "moe")]);
///
/// assert_eq!(name.call((&moe,)), Ok(&"moe"));
/// assert!(name.call((&AssocMap::<String, &str>::new(),)).is_err());
/// ```
pub fn accessor<Q: ?Sized + ToOwned>(key: &Q) -> Accessor<Q> {
    Accessor {
        key: key.to_owned(),
    }
}

impl<Q: ?Sized + ToOwned> Accessor<Q> {
    /// Returns the key this accessor reads.
    pub fn key(&self) -> &Q {
        <Q::Owned as Borrow<Q>>::borrow(&self.key)
    }
}

impl<Q> Clone for Accessor<Q>
where
    Q: ?Sized + ToOwned,
    Q::Owned: Clone,
{
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
        }
    }
}

impl<Q> fmt::Debug for Accessor<Q>
where
    Q: ?Sized + ToOwned + fmt::Debug,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Accessor")
            .field("key", &self.key())
            .finish()
    }
}

impl<'m, K, V, Q> Function<(&'m AssocMap<K, V>,)> for Accessor<Q>
where
    K: Hash + Eq + Borrow<Q>,
    Q: ?Sized + ToOwned + Hash + Eq + fmt::Debug,
{
    type Output = Result<&'m V, FnError>;

    fn call(&self, (map,): (&'m AssocMap<K, V>,)) -> Self::Output {
        let key = self.key();
        map.get(key).ok_or_else(|| {
            tracing::debug!(key = ?key, "accessor: key not present");
            FnError::missing_key(key)
        })
    }
}

/// Returns `true` if `key` is present in `map`.
pub fn is_key_set<K, V, Q>(map: &AssocMap<K, V>, key: &Q) -> bool
where
    K: Hash + Eq + Borrow<Q>,
    Q: Hash + Eq + ?Sized,
{
    map.contains_key(key)
}

/// A presence check bound to one map.
///
/// Created by [`key_set_checker`].
pub struct KeySetChecker<'m, K, V> {
    map: &'m AssocMap<K, V>,
}

/// Binds `map` as the first argument of [`is_key_set`].
///
/// # Examples
///
/// ```rust
/// use fnkit::collection::{AssocMap, key_set_checker};
/// use fnkit::function::Function;
///
/// let map = AssocMap::from([("foo".to_string(), 1)]);
/// let is_set = key_set_checker(&map);
///
/// assert!(is_set.call(("foo",)));
/// assert!(!is_set.call(("bar",)));
/// ```
pub const fn key_set_checker<K, V>(map: &AssocMap<K, V>) -> KeySetChecker<'_, K, V> {
    KeySetChecker { map }
}

impl<K, V> Clone for KeySetChecker<'_, K, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, V> Copy for KeySetChecker<'_, K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for KeySetChecker<'_, K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("KeySetChecker")
            .field("map", self.map)
            .finish()
    }
}

impl<K, V, Q> Function<(&Q,)> for KeySetChecker<'_, K, V>
where
    K: Hash + Eq + Borrow<Q>,
    Q: Hash + Eq + ?Sized,
{
    type Output = bool;

    fn call(&self, (key,): (&Q,)) -> bool {
        is_key_set(self.map, key)
    }
}
