//! Type-erased function values.

use std::fmt;

use super::Function;

/// A heap-allocated, type-erased [`Function`].
///
/// Closures and combinators all have distinct types, so a list mixing them
/// (for [`invoker`](crate::combinator::invoker) or
/// [`join_and`](crate::predicate::join_and), say) needs a common element
/// type. `BoxedFunction` is that type; the [`functions!`](crate::functions)
/// macro boxes each element of a list.
///
/// # Examples
///
/// ```rust
/// use fnkit::function::{BoxedFunction, Function};
///
/// let double: BoxedFunction<'_, (i32,), i32> = BoxedFunction::new(|value: i32| value * 2);
/// assert_eq!(double.call((21,)), 42);
/// ```
pub struct BoxedFunction<'a, Args, R> {
    function: Box<dyn Function<Args, Output = R> + 'a>,
}

impl<'a, Args, R> BoxedFunction<'a, Args, R> {
    /// Boxes a function value.
    pub fn new<F>(function: F) -> Self
    where
        F: Function<Args, Output = R> + 'a,
    {
        Self {
            function: Box::new(function),
        }
    }
}

impl<Args, R> Function<Args> for BoxedFunction<'_, Args, R> {
    type Output = R;

    #[inline]
    fn call(&self, arguments: Args) -> R {
        (*self.function).call(arguments)
    }
}

impl<Args, R> fmt::Debug for BoxedFunction<'_, Args, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("BoxedFunction(..)")
    }
}

/// Builds a `Vec` of [`BoxedFunction`]s from a list of function values.
///
/// The element types may differ; they only have to agree on the argument
/// tuple and the output type.
///
/// # Examples
///
/// ```rust
/// use fnkit::function::Function;
/// use fnkit::functions;
///
/// let checks = functions![|value: i32| value > 0, |value: i32| value % 2 == 0];
/// let results: Vec<bool> = checks.iter().map(|check| check.call((4,))).collect();
/// assert_eq!(results, vec![true, true]);
/// ```
#[macro_export]
macro_rules! functions {
    ($($function:expr),* $(,)?) => {
        vec![$($crate::function::BoxedFunction::new($function)),*]
    };
}
