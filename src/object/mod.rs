//! Method dispatch and construction helpers.
//!
//! Rust has no reflection, so both capabilities are explicit traits:
//!
//! - [`Dispatch`]: a type's name-to-method table, used by [`caller`],
//!   [`when_set_invoker_on`]
//! - [`Construct`]: building a type from an argument tuple, used by
//!   [`factory`], [`factory_map`] and [`Registry`]
//!
//! [`when_set_invoker`] is the plain-function form of guarded invocation and
//! needs neither.
//!
//! # Examples
//!
//! ```rust
//! use fnkit::function::Function;
//! use fnkit::object::{Construct, factory, factory_map};
//!
//! #[derive(Debug, PartialEq)]
//! struct Label {
//!     parts: Vec<String>,
//! }
//!
//! impl Construct<(&str, &str)> for Label {
//!     fn construct((first, second): (&str, &str)) -> Self {
//!         Self { parts: vec![first.to_string(), second.to_string()] }
//!     }
//! }
//!
//! impl Construct<(&str,)> for Label {
//!     fn construct((only,): (&str,)) -> Self {
//!         Self { parts: vec![only.to_string()] }
//!     }
//! }
//!
//! let label = factory::<Label>().call(("a", "b"));
//! assert_eq!(label.parts, vec!["a", "b"]);
//!
//! let labels = factory_map::<Label>().call((["x", "y"],));
//! assert_eq!(labels.len(), 2);
//! assert_eq!(labels[1].parts, vec!["y"]);
//! ```

mod construct;
mod dispatch;

pub use construct::{Construct, Factory, FactoryMap, Registry, factory, factory_map};
pub use dispatch::{
    BoundWhenSetInvoker, Caller, Dispatch, WhenSetInvoker, caller, when_set_invoker,
    when_set_invoker_on,
};

static_assertions::assert_impl_all!(Caller: Send, Sync, Clone);
static_assertions::assert_impl_all!(Factory<String>: Send, Sync, Copy);
static_assertions::assert_not_impl_any!(Registry<(), String>: Send, Sync);
