//! Identity and constant functions.
//!
//! [`Constant`] is also how a plain value takes part wherever a resolvable
//! is expected: it ignores whatever arguments it is called with. `bool`
//! implements [`Function`] for every argument tuple in the same way, so a
//! bare `true`/`false` can stand in for a predicate.

use crate::function::Function;

/// The identity function, created by [`identity`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Identity;

/// Returns a function that returns its single argument unchanged.
///
/// # Examples
///
/// ```rust
/// use fnkit::combinator::identity;
/// use fnkit::function::Function;
///
/// assert_eq!(identity().call((42,)), 42);
/// assert_eq!(identity().call(("hello",)), "hello");
/// ```
pub const fn identity() -> Identity {
    Identity
}

impl<T> Function<(T,)> for Identity {
    type Output = T;

    #[inline]
    fn call(&self, (value,): (T,)) -> T {
        value
    }
}

/// A function ignoring its arguments and returning a fixed value.
///
/// Created by [`constant`], [`always`] and [`never`]. The value is captured
/// at construction time and cloned on every call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Constant<T>(T);

impl<T> Constant<T> {
    /// Returns a reference to the captured value.
    pub const fn value(&self) -> &T {
        &self.0
    }

    /// Consumes the constant and returns the captured value.
    pub fn into_value(self) -> T {
        self.0
    }
}

/// Returns a function that ignores all arguments and always returns `value`.
///
/// # Examples
///
/// ```rust
/// use fnkit::combinator::constant;
/// use fnkit::function::Function;
///
/// let always_five = constant(5);
/// assert_eq!(always_five.call(()), 5);
/// assert_eq!(always_five.call(("ignored", 1, 2.0)), 5);
/// ```
pub const fn constant<T>(value: T) -> Constant<T> {
    Constant(value)
}

/// Returns a function that ignores all arguments and returns `true`.
pub const fn always() -> Constant<bool> {
    Constant(true)
}

/// Returns a function that ignores all arguments and returns `false`.
pub const fn never() -> Constant<bool> {
    Constant(false)
}

impl<T: Clone, Args> Function<Args> for Constant<T> {
    type Output = T;

    #[inline]
    fn call(&self, _arguments: Args) -> T {
        self.0.clone()
    }
}

impl<Args> Function<Args> for bool {
    type Output = Self;

    #[inline]
    fn call(&self, _arguments: Args) -> Self {
        *self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_identity_returns_owned_value_unchanged() {
        let owned = String::from("owned");
        assert_eq!(identity().call((owned,)), "owned");
    }

    #[rstest]
    fn test_constant_captures_at_construction() {
        let mut source = String::from("before");
        let captured = constant(source.clone());
        source.push_str(" and after");
        assert_eq!(captured.call(()), "before");
    }

    #[rstest]
    fn test_always_and_never_ignore_arguments() {
        assert!(always().call(()));
        assert!(always().call((true,)));
        assert!(always().call((false,)));
        assert!(!never().call(()));
        assert!(!never().call((true,)));
        assert!(!never().call((false,)));
    }

    #[rstest]
    fn test_bool_is_a_constant_function() {
        assert!(true.call((1, 2, 3)));
        assert!(!false.call(("anything",)));
    }

    #[rstest]
    fn test_constant_accessors() {
        let captured = constant(vec![1, 2]);
        assert_eq!(captured.value(), &vec![1, 2]);
        assert_eq!(captured.into_value(), vec![1, 2]);
    }
}
