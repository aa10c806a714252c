//! Folds over sequences: existence, universality, counting and search.
//!
//! [`any`] and [`all`] evaluate their test on every element before
//! combining, so side effects in the test run once per element regardless
//! of the outcome.

use crate::function::Function;

/// Returns `true` if `test` holds for at least one element.
///
/// An empty collection yields `false`.
///
/// # Examples
///
/// ```rust
/// use fnkit::collection::any;
///
/// assert!(any([1, 2, 3], |value: i32| value > 2));
/// assert!(!any(Vec::<i32>::new(), |value: i32| value > 2));
/// ```
pub fn any<I, P>(collection: I, test: P) -> bool
where
    I: IntoIterator,
    P: Function<(I::Item,), Output = bool>,
{
    collection
        .into_iter()
        .fold(false, |found, item| test.call((item,)) || found)
}

/// Returns `true` if `test` holds for every element.
///
/// An empty collection yields `true`.
///
/// # Examples
///
/// ```rust
/// use fnkit::collection::all;
///
/// assert!(all([2, 4, 6], |value: i32| value % 2 == 0));
/// assert!(all(Vec::<i32>::new(), |value: i32| value % 2 == 0));
/// ```
pub fn all<I, P>(collection: I, test: P) -> bool
where
    I: IntoIterator,
    P: Function<(I::Item,), Output = bool>,
{
    collection
        .into_iter()
        .fold(true, |holds, item| test.call((item,)) && holds)
}

/// Returns `true` if at least one element is itself true.
pub fn any_truthy<I>(collection: I) -> bool
where
    I: IntoIterator,
    I::Item: Into<bool>,
{
    collection
        .into_iter()
        .fold(false, |found, item| item.into() || found)
}

/// Returns `true` if every element is itself true.
pub fn all_truthy<I>(collection: I) -> bool
where
    I: IntoIterator,
    I::Item: Into<bool>,
{
    collection
        .into_iter()
        .fold(true, |holds, item| item.into() && holds)
}

/// Counts the elements for which `predicate` holds.
///
/// `predicate` is resolved against each element, so a plain `bool` counts
/// every element or none.
///
/// # Examples
///
/// ```rust
/// use fnkit::collection::count_where;
///
/// let words = ["foo", "bar", "foo"];
///
/// assert_eq!(count_where(words, true), 3);
/// assert_eq!(count_where(words, false), 0);
/// assert_eq!(count_where(words, |word: &str| word == "foo"), 2);
/// ```
pub fn count_where<I, P>(collection: I, predicate: P) -> usize
where
    I: IntoIterator,
    P: Function<(I::Item,), Output = bool>,
{
    collection
        .into_iter()
        .filter_map(|item| predicate.call((item,)).then_some(()))
        .count()
}

/// Returns the first value whose `predicate(value, key)` holds.
///
/// `collection` yields `(key, value)` pairs: an [`AssocMap`](super::AssocMap)
/// by reference, or a sequence through [`Iterator::enumerate`].
///
/// # Examples
///
/// ```rust
/// use fnkit::collection::find;
///
/// let ages = [45, 55, 50];
///
/// assert_eq!(find(ages.iter().enumerate(), |age, _| **age > 50), Some(&55));
/// assert_eq!(find(ages.iter().enumerate(), |_, index| *index == 2), Some(&50));
/// assert_eq!(find(ages.iter().enumerate(), |age, _| **age > 60), None);
/// ```
pub fn find<I, K, V, P>(collection: I, predicate: P) -> Option<V>
where
    I: IntoIterator<Item = (K, V)>,
    P: Fn(&V, &K) -> bool,
{
    collection
        .into_iter()
        .find(|(key, value)| predicate(value, key))
        .map(|(_, value)| value)
}
