//! Sequence and associative-container helpers.
//!
//! # Sequences
//!
//! - [`cat`], [`concat`], [`zip`]: build new sequences, never mutating inputs
//! - [`any`], [`all`], [`any_truthy`], [`all_truthy`]: full folds to `bool`
//! - [`count_where`], [`find`]: counting and first-match search
//! - [`times`]: indexed repetition
//!
//! # Associative containers
//!
//! [`AssocMap`] is the insertion-ordered map the remaining helpers work on:
//!
//! - [`map_assoc`], [`transform_assoc`], [`reduce_assoc`]: walk entries in order
//! - [`pick`], [`pluck`], [`accessor`]: read selected keys
//! - [`is_key_set`], [`key_set_checker`]: presence checks
//!
//! # Examples
//!
//! ```rust
//! use fnkit::collection::{AssocMap, reduce_assoc};
//!
//! let map = AssocMap::from([("foo", "bar"), ("faz", "baz")]);
//! let joined = reduce_assoc(&map, |accumulator: String, value, key| format!("{accumulator}{key}{value}"), String::new());
//!
//! assert_eq!(joined, "foobarfazbaz");
//! ```

mod assoc;
mod assoc_map;
mod fold;
mod sequence;

pub use assoc::{
    Accessor, KeySetChecker, accessor, is_key_set, key_set_checker, map_assoc, pick, pluck,
    reduce_assoc, transform_assoc,
};
pub use assoc_map::{AssocMap, Iter};
pub use fold::{all, all_truthy, any, any_truthy, count_where, find};
pub use sequence::{IntoItems, cat, concat, times, zip};

static_assertions::assert_impl_all!(AssocMap<String, i32>: Send, Sync, Clone);
static_assertions::assert_impl_all!(Accessor<str>: Send, Sync);
