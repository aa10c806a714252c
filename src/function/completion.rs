//! Outcomes of side-effecting calls.

use std::ops::ControlFlow;

/// The outcome of a call made only for its effect.
///
/// Side-effecting functions either return `()` or may fail, returning
/// `Result<(), E>`. Fan-out combinators use `Completion` to stop at the first
/// failure and hand it back unchanged, and to produce the success value when
/// every call went through.
pub trait Completion: Sized {
    /// Returns the success value.
    fn completed() -> Self;

    /// Breaks with `self` when it is a failure, continues otherwise.
    fn into_flow(self) -> ControlFlow<Self>;
}

impl Completion for () {
    #[inline]
    fn completed() -> Self {}

    #[inline]
    fn into_flow(self) -> ControlFlow<Self> {
        ControlFlow::Continue(())
    }
}

impl<E> Completion for Result<(), E> {
    #[inline]
    fn completed() -> Self {
        Ok(())
    }

    #[inline]
    fn into_flow(self) -> ControlFlow<Self> {
        match self {
            Ok(()) => ControlFlow::Continue(()),
            Err(error) => ControlFlow::Break(Err(error)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_fallible_completion_is_ok() {
        assert_eq!(<Result<(), String> as Completion>::completed(), Ok(()));
    }

    #[rstest]
    fn test_failure_breaks() {
        assert_eq!(Err::<(), _>("boom").into_flow(), ControlFlow::Break(Err("boom")));
        assert_eq!(Ok::<(), &str>(()).into_flow(), ControlFlow::Continue(()));
        assert_eq!(().into_flow(), ControlFlow::Continue(()));
    }
}
