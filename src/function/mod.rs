//! The calling convention shared by every combinator.
//!
//! Rust has no variadic functions, so argument lists travel as tuples:
//! a call with no arguments passes `()`, a call with one passes `(a,)`,
//! a call with two passes `(a, b)`, and so on up to six arguments.
//!
//! # Overview
//!
//! - [`Function`]: anything that can be called with an argument tuple
//! - [`Concat`]: joins two argument tuples (used by partial application)
//! - [`BoxedFunction`]: a type-erased [`Function`] for heterogeneous lists
//! - [`functions!`]: builds a `Vec` of [`BoxedFunction`]s
//! - [`Completion`]: the outcome of a call made for its effect
//!
//! Every `Fn` closure and `fn` item taking up to six arguments implements
//! [`Function`] for the matching tuple. The combinators in this crate are
//! named structs implementing [`Function`] as well, so they nest without
//! wrapping.
//!
//! # Examples
//!
//! ```rust
//! use fnkit::function::Function;
//!
//! fn add(first: i32, second: i32) -> i32 {
//!     first + second
//! }
//!
//! assert_eq!(add.call((1, 2)), 3);
//! assert_eq!((|| "thunk").call(()), "thunk");
//! ```

mod boxed;
mod completion;
mod concat;

pub use boxed::BoxedFunction;
pub use completion::Completion;
pub use concat::Concat;

pub use crate::functions;

/// A function value callable with an argument tuple.
///
/// `Args` is the tuple of arguments; [`Function::Output`] is the result.
///
/// A single value may implement `Function` for several argument tuples:
/// constants and error throwers ignore their arguments and therefore accept
/// any tuple.
pub trait Function<Args> {
    /// The value produced by a call.
    type Output;

    /// Invokes the function with the given argument tuple.
    fn call(&self, arguments: Args) -> Self::Output;
}

macro_rules! impl_function_for_closures {
    ($($argument:ident),*) => {
        paste::paste! {
            impl<F, R, $($argument),*> Function<($($argument,)*)> for F
            where
                F: Fn($($argument),*) -> R,
            {
                type Output = R;

                #[inline]
                fn call(&self, ($([<$argument:lower>],)*): ($($argument,)*)) -> R {
                    (self)($([<$argument:lower>]),*)
                }
            }
        }
    };
}

impl_function_for_closures!();
impl_function_for_closures!(A1);
impl_function_for_closures!(A1, A2);
impl_function_for_closures!(A1, A2, A3);
impl_function_for_closures!(A1, A2, A3, A4);
impl_function_for_closures!(A1, A2, A3, A4, A5);
impl_function_for_closures!(A1, A2, A3, A4, A5, A6);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn join(first: &str, second: &str, third: &str) -> String {
        format!("{first}{second}{third}")
    }

    #[rstest]
    fn test_zero_argument_closure() {
        let thunk = || 42;
        assert_eq!(thunk.call(()), 42);
    }

    #[rstest]
    fn test_function_item_receives_arguments_in_order() {
        assert_eq!(join.call(("a", "b", "c")), "abc");
    }

    #[rstest]
    fn test_six_argument_closure() {
        let sum = |a: i32, b: i32, c: i32, d: i32, e: i32, f: i32| a + b + c + d + e + f;
        assert_eq!(sum.call((1, 2, 3, 4, 5, 6)), 21);
    }

    #[rstest]
    fn test_capturing_closure_is_reusable() {
        let offset = 10;
        let add_offset = move |value: i32| value + offset;
        assert_eq!(add_offset.call((1,)), 11);
        assert_eq!(add_offset.call((2,)), 12);
    }
}
