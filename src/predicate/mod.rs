//! Predicate builders.
//!
//! Small constructors for boolean-valued functions, plus ways to join
//! several predicates into one.
//!
//! # Examples
//!
//! ```rust
//! use fnkit::function::Function;
//! use fnkit::functions;
//! use fnkit::predicate::{even, join_and, less_than, more_than_or_equal_to};
//!
//! let in_range_and_even = join_and(functions![
//!     more_than_or_equal_to(10),
//!     less_than(20),
//!     even::<i32>(),
//! ]);
//!
//! assert!(in_range_and_even.call((12,)));
//! assert!(!in_range_and_even.call((13,)));
//! assert!(!in_range_and_even.call((22,)));
//! ```

mod comparison;
mod join;

pub use comparison::{equal_to, even, less_than, more_than_or_equal_to, not_equal_to, odd};
pub use join::{Both, Fold, JoinUsing, both, join_and, join_or, join_using};
