//! Raising caller-defined errors.
//!
//! Errors are raised by returning `Err`. The error value comes from an
//! [`ErrorKind`]: either a zero-argument closure producing the error, or
//! [`error_type`] for an error type that can be constructed from an optional
//! message.

use std::fmt;
use std::marker::PhantomData;

use super::guard::{Conditional, conditional, do_when};
use crate::function::Function;
use crate::object::Construct;

/// A source of error values.
pub trait ErrorKind {
    /// The error produced.
    type Error;

    /// Builds an error, optionally carrying `message`.
    fn build(&self, message: Option<&str>) -> Self::Error;
}

/// Zero-argument factories ignore the message.
impl<F, E> ErrorKind for F
where
    F: Fn() -> E,
{
    type Error = E;

    fn build(&self, _message: Option<&str>) -> E {
        self()
    }
}

/// An error type constructed from an optional message.
///
/// Created by [`error_type`].
pub struct ErrorType<E>(PhantomData<fn() -> E>);

/// Returns the [`ErrorKind`] constructing `E` from the message.
///
/// `E` must implement [`Construct<(Option<String>,)>`](Construct).
///
/// # Examples
///
/// ```rust
/// use fnkit::conditional::{error_type, throw_error};
/// use fnkit::object::Construct;
///
/// #[derive(Debug, PartialEq)]
/// struct ConfigError(Option<String>);
///
/// impl Construct<(Option<String>,)> for ConfigError {
///     fn construct((message,): (Option<String>,)) -> Self {
///         Self(message)
///     }
/// }
///
/// let raised: Result<(), _> = throw_error(&error_type::<ConfigError>(), Some("no port"));
/// assert_eq!(raised, Err(ConfigError(Some("no port".to_string()))));
/// ```
pub const fn error_type<E>() -> ErrorType<E> {
    ErrorType(PhantomData)
}

impl<E> ErrorKind for ErrorType<E>
where
    E: Construct<(Option<String>,)>,
{
    type Error = E;

    fn build(&self, message: Option<&str>) -> E {
        E::construct((message.map(str::to_owned),))
    }
}

impl<E> Clone for ErrorType<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for ErrorType<E> {}

impl<E> fmt::Debug for ErrorType<E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "ErrorType<{}>", std::any::type_name::<E>())
    }
}

/// Raises an error of `kind` immediately.
///
/// # Errors
///
/// Always returns `Err` with the built error.
///
/// # Examples
///
/// ```rust
/// use fnkit::conditional::throw_error;
///
/// let raised: Result<i32, &str> = throw_error(&|| "boom", None);
/// assert_eq!(raised, Err("boom"));
/// ```
pub fn throw_error<K, T>(kind: &K, message: Option<&str>) -> Result<T, K::Error>
where
    K: ErrorKind + ?Sized,
{
    tracing::debug!(message = ?message, "raising caller error");
    Err(kind.build(message))
}

/// A function raising the same error on every call.
///
/// Created by [`error_thrower`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorThrower<K> {
    kind: K,
    message: Option<String>,
}

/// Returns a function that raises an error of `kind` when called.
///
/// The function accepts and ignores any arguments.
pub fn error_thrower<K: ErrorKind>(kind: K, message: Option<&str>) -> ErrorThrower<K> {
    ErrorThrower {
        kind,
        message: message.map(str::to_owned),
    }
}

impl<K, Args> Function<Args> for ErrorThrower<K>
where
    K: ErrorKind,
{
    type Output = Result<(), K::Error>;

    fn call(&self, _arguments: Args) -> Self::Output {
        throw_error(&self.kind, self.message.as_deref())
    }
}

/// A function raising an error whenever its predicate holds.
///
/// Created by [`conditional_thrower`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConditionalThrower<P, K> {
    guarded: Conditional<P, ErrorThrower<K>>,
}

impl<P, K, Args> Function<Args> for ConditionalThrower<P, K>
where
    Args: Clone,
    P: Function<Args, Output = bool>,
    K: ErrorKind,
{
    type Output = Result<(), K::Error>;

    fn call(&self, arguments: Args) -> Self::Output {
        self.guarded.call(arguments).unwrap_or(Ok(()))
    }
}

/// Returns a reusable function that raises an error whenever `predicate`
/// holds for its arguments.
///
/// # Examples
///
/// ```rust
/// use fnkit::conditional::conditional_thrower;
/// use fnkit::function::Function;
///
/// let reject_negative = conditional_thrower(|value: i32| value < 0, || "negative", None);
///
/// assert_eq!(reject_negative.call((3,)), Ok(()));
/// assert_eq!(reject_negative.call((-3,)), Err("negative"));
/// ```
pub fn conditional_thrower<P, K>(
    predicate: P,
    kind: K,
    message: Option<&str>,
) -> ConditionalThrower<P, K>
where
    K: ErrorKind,
{
    ConditionalThrower {
        guarded: conditional(predicate, error_thrower(kind, message)),
    }
}

/// Raises an error of `kind` now if `predicate` holds.
///
/// # Errors
///
/// Returns the built error when `predicate` holds.
///
/// # Examples
///
/// ```rust
/// use fnkit::conditional::throw_when;
///
/// assert_eq!(throw_when(false, || "unreachable", None), Ok(()));
/// assert_eq!(throw_when(|| true, || "raised", None), Err("raised"));
/// ```
pub fn throw_when<P, K>(predicate: P, kind: K, message: Option<&str>) -> Result<(), K::Error>
where
    P: Function<(), Output = bool>,
    K: ErrorKind,
{
    do_when(predicate, error_thrower(kind, message)).unwrap_or(Ok(()))
}
