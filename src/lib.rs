//! # fnkit
//!
//! Higher-order combinators, predicate builders and collection helpers
//! for Rust.
//!
//! ## Overview
//!
//! The crate is a flat toolbox of small, independent functions:
//!
//! - **Combinators**: `partial`, `compose`, `identity`, `constant`, `negate`,
//!   `invoker`, `resolve`, ...
//! - **Predicates**: comparison and parity builders, `both`, `join_and`, `join_or`
//! - **Conditional execution**: `conditional`, `do_when` and the error throwers
//! - **Collections**: folds over sequences and the insertion-ordered [`AssocMap`](collection::AssocMap)
//! - **Objects**: name-based method dispatch and type construction
//!
//! Every returned combinator is a value implementing [`Function`], the
//! crate's tuple-based calling convention. Plain closures of up to six
//! arguments implement it as well, so both can be mixed freely.
//!
//! ## Feature Flags
//!
//! - `combinator`: Core combinators (partial application, composition, ...)
//! - `predicate`: Predicate builders
//! - `conditional`: Guarded execution and error throwers
//! - `collection`: Sequence and associative helpers
//! - `object`: Method dispatch and construction helpers
//! - `derive`: `#[derive(Construct)]`
//! - `serde`: Serialization for [`AssocMap`](collection::AssocMap)
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use fnkit::prelude::*;
//!
//! fn add(first: i32, second: i32, third: i32) -> i32 {
//!     first + second + third
//! }
//!
//! let add_three = partial(add, (1, 2));
//! assert_eq!(add_three.call((3,)), 6);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use fnkit::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::FnError;
    pub use crate::function::*;

    #[cfg(feature = "combinator")]
    pub use crate::combinator::*;

    #[cfg(feature = "predicate")]
    pub use crate::predicate::*;

    #[cfg(feature = "conditional")]
    pub use crate::conditional::*;

    #[cfg(feature = "collection")]
    pub use crate::collection::*;

    #[cfg(feature = "object")]
    pub use crate::object::*;
}

pub mod error;
pub mod function;

#[cfg(feature = "combinator")]
pub mod combinator;

#[cfg(feature = "predicate")]
pub mod predicate;

#[cfg(feature = "conditional")]
pub mod conditional;

#[cfg(feature = "collection")]
pub mod collection;

#[cfg(feature = "object")]
pub mod object;

pub use error::FnError;
pub use function::Function;

#[cfg(feature = "derive")]
pub use fnkit_derive::Construct;

#[doc(hidden)]
pub use paste;
