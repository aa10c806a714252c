//! Predicate-guarded invocation.

use crate::function::Function;

/// A function that only runs when its predicate holds.
///
/// Created by [`conditional`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Conditional<P, F> {
    predicate: P,
    function: F,
}

/// Returns a reusable function that runs `function` only when `predicate`
/// holds for the call-time arguments.
///
/// The predicate may be a plain `bool`. The call returns `Some` with the
/// result of `function` when the predicate holds, and `None` without invoking
/// `function` otherwise.
///
/// # Examples
///
/// ```rust
/// use std::cell::Cell;
///
/// use fnkit::conditional::conditional;
/// use fnkit::function::Function;
///
/// let matches = Cell::new(0);
/// let record = conditional(
///     |first: &str, second: &str| first == "foo" && second == "bar",
///     |_: &str, _: &str| matches.set(matches.get() + 1),
/// );
///
/// record.call(("faz", "baz"));
/// record.call(("foo", "shnoz"));
/// record.call(("foo", "bar"));
///
/// assert_eq!(matches.get(), 1);
///
/// let double_positive = conditional(|value: i32| value > 0, |value: i32| value * 2);
/// assert_eq!(double_positive.call((2,)), Some(4));
/// assert_eq!(double_positive.call((-2,)), None);
/// ```
pub const fn conditional<P, F>(predicate: P, function: F) -> Conditional<P, F> {
    Conditional {
        predicate,
        function,
    }
}

impl<P, F, Args> Function<Args> for Conditional<P, F>
where
    Args: Clone,
    P: Function<Args, Output = bool>,
    F: Function<Args>,
{
    type Output = Option<F::Output>;

    fn call(&self, arguments: Args) -> Self::Output {
        self.predicate
            .call(arguments.clone())
            .then(|| self.function.call(arguments))
    }
}

/// Runs `function` immediately if `predicate` holds, returning its result.
///
/// Both are called without arguments. Returns `None` when the predicate does
/// not hold.
///
/// # Examples
///
/// ```rust
/// use fnkit::conditional::do_when;
///
/// assert_eq!(do_when(true, || "ran"), Some("ran"));
/// assert_eq!(do_when(|| 1 > 2, || "ran"), None);
/// ```
pub fn do_when<P, F>(predicate: P, function: F) -> Option<F::Output>
where
    P: Function<(), Output = bool>,
    F: Function<()>,
{
    predicate.call(()).then(|| function.call(()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn test_conditional_with_plain_predicate() {
        let calls = Cell::new(0);
        let bump = |_: i32| calls.set(calls.get() + 1);

        conditional(false, bump).call((1,));
        assert_eq!(calls.get(), 0);

        conditional(true, bump).call((1,));
        assert_eq!(calls.get(), 1);
    }

    #[rstest]
    fn test_conditional_forwards_arguments() {
        let seen = Cell::new(0);
        let store = conditional(|value: i32| value > 0, |value: i32| seen.set(value));

        store.call((-3,));
        assert_eq!(seen.get(), 0);
        store.call((7,));
        assert_eq!(seen.get(), 7);
    }

    #[rstest]
    fn test_conditional_propagates_errors_only_when_guard_passes() {
        let fallible = conditional(|value: i32| value < 0, |value: i32| Err::<(), _>(value));

        assert_eq!(fallible.call((5,)), None);
        assert_eq!(fallible.call((-5,)), Some(Err(-5)));
    }

    #[rstest]
    #[case(3, Some("3"))]
    #[case(0, None)]
    fn test_conditional_returns_any_output(#[case] value: u32, #[case] expected: Option<&str>) {
        let render = conditional(|value: u32| value > 0, |value: u32| value.to_string());
        assert_eq!(render.call((value,)).as_deref(), expected);
    }

    #[rstest]
    fn test_do_when_skips_function() {
        let calls = Cell::new(0);
        let result = do_when(false, || calls.set(calls.get() + 1));
        assert_eq!(result, None);
        assert_eq!(calls.get(), 0);
    }
}
