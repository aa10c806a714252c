//! Two-function composition.

use crate::function::Function;

/// The composition of two functions, created by [`compose`].
#[derive(Clone, Copy)]
pub struct Compose<A, B> {
    outer: A,
    inner: B,
}

/// Composes two functions right to left.
///
/// `compose(f, g).call(args)` is `f(g(args...))`: `g` receives every
/// argument and its single result is the sole argument of `f`.
///
/// # Examples
///
/// ```rust
/// use fnkit::combinator::compose;
/// use fnkit::function::Function;
///
/// let add = |left: i32, right: i32| left + right;
/// let describe = |sum: i32| format!("sum = {sum}");
///
/// let add_then_describe = compose(describe, add);
/// assert_eq!(add_then_describe.call((2, 3)), "sum = 5");
/// ```
pub const fn compose<A, B>(outer: A, inner: B) -> Compose<A, B> {
    Compose { outer, inner }
}

impl<A, B, Args> Function<Args> for Compose<A, B>
where
    B: Function<Args>,
    A: Function<(B::Output,)>,
{
    type Output = A::Output;

    #[inline]
    fn call(&self, arguments: Args) -> Self::Output {
        self.outer.call((self.inner.call(arguments),))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_compose_applies_inner_first() {
        let add_one = |value: i32| value + 1;
        let double = |value: i32| value * 2;
        assert_eq!(compose(add_one, double).call((5,)), 11);
        assert_eq!(compose(double, add_one).call((5,)), 12);
    }

    #[rstest]
    fn test_compose_inner_receives_every_argument() {
        let join = |first: &str, second: &str, third: &str| format!("{first}-{second}-{third}");
        let shout = |text: String| text.to_uppercase();
        assert_eq!(compose(shout, join).call(("a", "b", "c")), "A-B-C");
    }

    #[rstest]
    fn test_compose_propagates_inner_error() {
        let parse = |text: &str| text.parse::<i32>();
        let double = |parsed: Result<i32, std::num::ParseIntError>| parsed.map(|value| value * 2);
        let parse_and_double = compose(double, parse);
        assert_eq!(parse_and_double.call(("21",)), Ok(42));
        assert!(parse_and_double.call(("twenty",)).is_err());
    }
}
