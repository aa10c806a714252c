//! Immediate invocation and fan-out.

use std::ops::ControlFlow;

use smallvec::SmallVec;

use crate::function::{Completion, Function};

/// Calls `function` immediately with `arguments` and returns its result.
///
/// # Examples
///
/// ```rust
/// use fnkit::combinator::invoke;
///
/// assert_eq!(invoke(|left: i32, right: i32| left * right, (6, 7)), 42);
/// ```
#[inline]
#[allow(clippy::needless_pass_by_value)]
pub fn invoke<F, Args>(function: F, arguments: Args) -> F::Output
where
    F: Function<Args>,
{
    function.call(arguments)
}

/// Calls every function with the same arguments, in order.
///
/// Created by [`invoker`]. The functions run for their effect: each returns
/// `()` or `Result<(), E>`. The first `Err` stops the fan-out and is returned
/// unchanged.
#[derive(Clone)]
pub struct Invoker<F> {
    functions: SmallVec<[F; 4]>,
}

/// Returns a function that invokes each of `functions`, in order, with its
/// call-time arguments.
///
/// Mix different function types with [`functions!`](crate::functions).
///
/// # Examples
///
/// ```rust
/// use std::cell::RefCell;
///
/// use fnkit::combinator::invoker;
/// use fnkit::function::Function;
/// use fnkit::functions;
///
/// let log = RefCell::new(Vec::new());
/// let notify = invoker(functions![
///     |event: &str| log.borrow_mut().push(format!("first: {event}")),
///     |event: &str| log.borrow_mut().push(format!("second: {event}")),
/// ]);
///
/// notify.call(("saved",));
/// assert_eq!(*log.borrow(), vec!["first: saved", "second: saved"]);
/// ```
///
/// Fallible members stop the fan-out:
///
/// ```rust
/// use fnkit::combinator::invoker;
/// use fnkit::function::Function;
/// use fnkit::functions;
///
/// let validate = invoker(functions![
///     |value: i32| if value < 0 { Err("negative") } else { Ok(()) },
///     |value: i32| if value > 9 { Err("too large") } else { Ok(()) },
/// ]);
///
/// assert_eq!(validate.call((5,)), Ok(()));
/// assert_eq!(validate.call((-5,)), Err("negative"));
/// ```
pub fn invoker<I>(functions: I) -> Invoker<I::Item>
where
    I: IntoIterator,
{
    Invoker {
        functions: functions.into_iter().collect(),
    }
}

impl<F> Invoker<F> {
    /// Returns the number of functions invoked per call.
    pub fn len(&self) -> usize {
        self.functions.len()
    }

    /// Returns `true` if the invoker calls nothing.
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}

impl<F, Args> Function<Args> for Invoker<F>
where
    Args: Clone,
    F: Function<Args>,
    F::Output: Completion,
{
    type Output = F::Output;

    fn call(&self, arguments: Args) -> F::Output {
        let flow = self
            .functions
            .iter()
            .try_for_each(|function| function.call(arguments.clone()).into_flow());
        match flow {
            ControlFlow::Break(failure) => failure,
            ControlFlow::Continue(()) => <F::Output as Completion>::completed(),
        }
    }
}

/// Invokes every function with no arguments, in order, and returns the
/// result of the last one.
///
/// Returns `None` when `functions` is empty. Results are not inspected, so
/// every function runs; use [`try_invoke_all`] to stop at the first `Err`.
///
/// # Examples
///
/// ```rust
/// use fnkit::combinator::invoke_all;
///
/// let steps: [fn() -> i32; 3] = [|| 1, || 2, || 3];
/// assert_eq!(invoke_all(steps), Some(3));
/// ```
pub fn invoke_all<I>(functions: I) -> Option<<I::Item as Function<()>>::Output>
where
    I: IntoIterator,
    I::Item: Function<()>,
{
    functions
        .into_iter()
        .fold(None, |_, function| Some(function.call(())))
}

/// Invokes fallible functions with no arguments, in order, and returns the
/// last success.
///
/// The first `Err` stops the run and is returned unchanged. `Ok(None)` means
/// there were no functions.
///
/// # Errors
///
/// Returns the first error produced by any function.
///
/// # Examples
///
/// ```rust
/// use fnkit::combinator::try_invoke_all;
///
/// let steps: [fn() -> Result<i32, &'static str>; 3] = [|| Ok(1), || Err("boom"), || Ok(3)];
/// assert_eq!(try_invoke_all(steps), Err("boom"));
///
/// let steps: [fn() -> Result<i32, &'static str>; 2] = [|| Ok(1), || Ok(2)];
/// assert_eq!(try_invoke_all(steps), Ok(Some(2)));
/// ```
pub fn try_invoke_all<I, T, E>(functions: I) -> Result<Option<T>, E>
where
    I: IntoIterator,
    I::Item: Function<(), Output = Result<T, E>>,
{
    functions
        .into_iter()
        .try_fold(None, |_, function| function.call(()).map(Some))
}
