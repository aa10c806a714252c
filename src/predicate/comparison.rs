//! Comparison and parity predicates.

use std::ops::Rem;

use crate::combinator::{Negated, negate};

/// Returns a predicate testing `value >= minimum`.
///
/// # Examples
///
/// ```rust
/// use fnkit::predicate::more_than_or_equal_to;
///
/// let adult = more_than_or_equal_to(18);
/// assert!(adult(18));
/// assert!(!adult(17));
/// ```
pub fn more_than_or_equal_to<T: PartialOrd>(minimum: T) -> impl Fn(T) -> bool {
    move |value| value >= minimum
}

/// Returns a predicate testing `value < maximum`.
pub fn less_than<T: PartialOrd>(maximum: T) -> impl Fn(T) -> bool {
    move |value| value < maximum
}

/// Returns a predicate testing `value == target`.
///
/// Equality is strict: the argument must have the target's type, so no
/// cross-type coercion takes place.
///
/// # Examples
///
/// ```rust
/// use fnkit::predicate::equal_to;
///
/// let is_foo = equal_to("foo");
/// assert!(is_foo("foo"));
/// assert!(!is_foo("bar"));
/// ```
pub fn equal_to<T: PartialEq>(target: T) -> impl Fn(T) -> bool {
    move |value| value == target
}

/// Returns a predicate testing `value != target`.
///
/// This is [`negate`] applied to [`equal_to`].
pub fn not_equal_to<T: PartialEq>(target: T) -> Negated<impl Fn(T) -> bool> {
    negate(equal_to(target))
}

/// Returns a predicate testing whether an integer is even.
///
/// # Examples
///
/// ```rust
/// use fnkit::predicate::even;
///
/// let is_even = even();
/// assert!(is_even(4));
/// assert!(!is_even(15));
/// assert!(is_even(-2));
/// ```
pub fn even<T>() -> impl Fn(T) -> bool
where
    T: Rem<Output = T> + PartialEq + From<u8>,
{
    |value: T| value % T::from(2) == T::from(0)
}

/// Returns a predicate testing whether an integer is odd.
///
/// This is [`negate`] applied to [`even`].
pub fn odd<T>() -> Negated<impl Fn(T) -> bool>
where
    T: Rem<Output = T> + PartialEq + From<u8>,
{
    negate(even())
}
