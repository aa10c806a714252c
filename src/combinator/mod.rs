//! Combinator primitives.
//!
//! The leaves of the library: everything else is built from these.
//!
//! # Overview
//!
//! - [`partial`]: bind leading arguments
//! - [`compose`]: `compose(f, g)(args) = f(g(args))`
//! - [`identity`], [`constant`], [`always`], [`never`]
//! - [`negate`]: invert a predicate, or a plain boolean on the spot
//! - [`invoke`], [`invoker`], [`invoke_all`], [`try_invoke_all`]: immediate calls and fan-out
//! - [`resolve`], [`resolver`]: treat functions and plain values alike
//!
//! # Laws
//!
//! - **Partial application**: `partial(f, (a, b)).call((c, d)) == f(a, b, c, d)`
//! - **Composition**: `compose(f, g).call((x, y)) == f(g(x, y))`
//! - **Left Identity**: `compose(identity(), f) == f`
//! - **Right Identity**: `compose(f, identity()) == f`
//! - **Negation**: `negate(f).call(args) == !f.call(args)`
//!
//! # Sharing
//!
//! Combinators capture only what they were built from, so a combinator is
//! `Send`/`Sync` exactly when its captured values are.

mod compose;
mod constant;
mod invoke;
mod negate;
mod partial;
mod resolve;

pub use compose::{Compose, compose};
pub use constant::{Constant, Identity, always, constant, identity, never};
pub use invoke::{Invoker, invoke, invoke_all, invoker, try_invoke_all};
pub use negate::{Arity, Negate, Negated, Plain, Wrapped, negate};
pub use partial::{Partial, partial};
pub use resolve::{Resolver, resolve, resolver};

static_assertions::assert_impl_all!(Partial<fn(i32, i32) -> i32, (i32,)>: Send, Sync, Clone);
static_assertions::assert_impl_all!(Compose<fn(i32) -> i32, fn(i32) -> i32>: Send, Sync);
static_assertions::assert_impl_all!(Constant<String>: Send, Sync);
static_assertions::assert_impl_all!(Negated<fn(i32) -> bool>: Send, Sync);
static_assertions::assert_impl_all!(Invoker<fn(i32)>: Send, Sync);
static_assertions::assert_not_impl_any!(Constant<std::rc::Rc<String>>: Send, Sync);
