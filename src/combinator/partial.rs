//! Partial application.

use crate::function::{Concat, Function};

/// A function with some leading arguments already bound.
///
/// Created by [`partial`]. Calling it with `(c1, c2, ...)` calls the wrapped
/// function with the bound arguments followed by the call arguments.
#[derive(Clone, Copy)]
pub struct Partial<F, B> {
    function: F,
    bound: B,
}

/// Binds leading arguments of a function.
///
/// `partial(f, (a, b)).call((c, d))` is `f(a, b, c, d)`. Bound arguments
/// always precede call-time arguments and no arity check is made beyond
/// what the type system requires. Bound arguments are cloned on every call,
/// so the result is reusable.
///
/// # Examples
///
/// ```rust
/// use fnkit::combinator::partial;
/// use fnkit::function::Function;
///
/// fn describe(greeting: &str, name: &str, punctuation: &str) -> String {
///     format!("{greeting}, {name}{punctuation}")
/// }
///
/// let greet = partial(describe, ("Hello",));
/// assert_eq!(greet.call(("Alice", "!")), "Hello, Alice!");
///
/// let greet_bob = partial(greet, ("Bob",));
/// assert_eq!(greet_bob.call(("?",)), "Hello, Bob?");
/// ```
pub const fn partial<F, B>(function: F, bound: B) -> Partial<F, B> {
    Partial { function, bound }
}

impl<F, B, C> Function<C> for Partial<F, B>
where
    B: Clone + Concat<C>,
    F: Function<B::Output>,
{
    type Output = F::Output;

    #[inline]
    fn call(&self, arguments: C) -> Self::Output {
        self.function.call(self.bound.clone().concat(arguments))
    }
}
