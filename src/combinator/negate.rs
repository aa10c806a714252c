//! Boolean negation of functions and values.

use std::marker::PhantomData;
use std::ops::Not;

use crate::function::Function;

/// A function whose result is the negation of the wrapped function's result.
///
/// Created by [`negate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Negated<F>(F);

/// Values that [`negate`] accepts.
///
/// `Marker` tells the three shapes apart and is always inferred: [`Plain`]
/// for a `bool`, [`Arity`] for closures and function items returning `bool`,
/// and [`Wrapped`] for the crate's own function values.
pub trait Negate<Marker> {
    /// What `negate` returns.
    type Output;

    /// Negates `self`.
    fn negate(self) -> Self::Output;
}

/// Marker for plain boolean values.
#[derive(Debug, Clone, Copy)]
pub enum Plain {}

/// Marker for closures and function items taking `Args`.
#[derive(Debug, Clone, Copy)]
pub struct Arity<Args>(PhantomData<fn(Args)>);

/// Marker for function values built by this crate.
#[derive(Debug, Clone, Copy)]
pub enum Wrapped {}

/// Negates a function or a plain value.
///
/// For a function, every argument is forwarded and the result inverted.
/// A plain `bool` is negated immediately, so `negate(true)` is `false`.
///
/// # Examples
///
/// ```rust
/// use fnkit::combinator::negate;
/// use fnkit::function::Function;
///
/// let is_empty = |text: &str| text.is_empty();
/// let is_not_empty = negate(is_empty);
///
/// assert!(is_not_empty.call(("hello",)));
/// assert!(!is_not_empty.call(("",)));
///
/// assert_eq!(negate(true), false);
/// assert_eq!(negate(false), true);
/// ```
pub fn negate<M, F>(function_or_value: F) -> F::Output
where
    F: Negate<M>,
{
    function_or_value.negate()
}

impl Negate<Plain> for bool {
    type Output = Self;

    #[inline]
    fn negate(self) -> Self {
        !self
    }
}

macro_rules! impl_negate_for_closures {
    ($($argument:ident),*) => {
        impl<F, $($argument),*> Negate<Arity<($($argument,)*)>> for F
        where
            F: Fn($($argument),*) -> bool,
        {
            type Output = Negated<F>;

            #[inline]
            fn negate(self) -> Negated<F> {
                Negated(self)
            }
        }
    };
}

impl_negate_for_closures!();
impl_negate_for_closures!(A1);
impl_negate_for_closures!(A1, A2);
impl_negate_for_closures!(A1, A2, A3);
impl_negate_for_closures!(A1, A2, A3, A4);
impl_negate_for_closures!(A1, A2, A3, A4, A5);
impl_negate_for_closures!(A1, A2, A3, A4, A5, A6);

macro_rules! impl_negate_by_wrapping {
    ($([$($generics:tt)*] $target:ty),* $(,)?) => {
        $(
            impl<$($generics)*> Negate<Wrapped> for $target {
                type Output = Negated<Self>;

                #[inline]
                fn negate(self) -> Negated<Self> {
                    Negated(self)
                }
            }
        )*
    };
}

impl_negate_by_wrapping!(
    [F] Negated<F>,
    [T] super::Constant<T>,
    [] super::Identity,
    [A, B] super::Compose<A, B>,
    [F, B] super::Partial<F, B>,
    ['a, Args, R] crate::function::BoxedFunction<'a, Args, R>,
);

#[cfg(feature = "predicate")]
impl_negate_by_wrapping!(
    [A, B] crate::predicate::Both<A, B>,
    [P, J] crate::predicate::JoinUsing<P, J>,
);

#[cfg(feature = "collection")]
impl_negate_by_wrapping!(['m, K, V] crate::collection::KeySetChecker<'m, K, V>);

impl<F, Args> Function<Args> for Negated<F>
where
    F: Function<Args>,
    F::Output: Not,
{
    type Output = <F::Output as Not>::Output;

    #[inline]
    fn call(&self, arguments: Args) -> Self::Output {
        !self.0.call(arguments)
    }
}
