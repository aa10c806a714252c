//! Normalizing resolvables to values.
//!
//! A resolvable is either a function or a plain value. Plain values enter as
//! [`constant`](super::constant) or as a bare `bool`, both of which ignore
//! their arguments, so resolving is uniformly "call it with the arguments".

use crate::function::Function;

/// Resolves a function or plain value against `arguments`.
///
/// A function is invoked with `arguments`; a plain value (a
/// [`Constant`](super::Constant) or a `bool`) is returned unchanged and the
/// arguments are ignored.
///
/// # Examples
///
/// ```rust
/// use fnkit::combinator::{constant, resolve};
///
/// assert_eq!(resolve(&|value: i32| value + 1, (41,)), 42);
/// assert_eq!(resolve(&constant("plain"), (41,)), "plain");
/// assert!(resolve(&true, ("ignored",)));
/// ```
#[inline]
pub fn resolve<R, Args>(function_or_value: &R, arguments: Args) -> R::Output
where
    R: Function<Args> + ?Sized,
{
    function_or_value.call(arguments)
}

/// A function resolving its single argument against fixed arguments.
///
/// Created by [`resolver`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolver<Args> {
    arguments: Args,
}

/// Curries the trailing arguments of [`resolve`].
///
/// The returned function takes one resolvable and resolves it against
/// `arguments`.
///
/// # Examples
///
/// ```rust
/// use fnkit::combinator::resolver;
/// use fnkit::function::Function;
///
/// let resolve_abc = resolver(("a", "b", "c"));
///
/// assert!(resolve_abc.call((true,)));
/// assert!(!resolve_abc.call((false,)));
/// assert!(resolve_abc.call((|a: &str, b: &str, c: &str| a == "a" && b == "b" && c == "c",)));
/// ```
pub const fn resolver<Args>(arguments: Args) -> Resolver<Args> {
    Resolver { arguments }
}

impl<Args, R> Function<(R,)> for Resolver<Args>
where
    Args: Clone,
    R: Function<Args>,
{
    type Output = R::Output;

    #[inline]
    fn call(&self, (function_or_value,): (R,)) -> Self::Output {
        function_or_value.call(self.arguments.clone())
    }
}
