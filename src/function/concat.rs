//! Tuple concatenation used to prepend bound arguments.
//!
//! [`Concat`] joins two argument tuples into one, preserving order:
//! `(a, b).concat((c, d)) == (a, b, c, d)`. Implementations cover every
//! split whose combined arity fits in a [`Function`](super::Function)
//! argument list (six elements).

/// Joins two argument tuples, left elements first.
///
/// # Examples
///
/// ```rust
/// use fnkit::function::Concat;
///
/// assert_eq!((1, 2).concat(("three",)), (1, 2, "three"));
/// assert_eq!(().concat((1,)), (1,));
/// ```
pub trait Concat<Rhs> {
    /// The joined tuple.
    type Output;

    /// Appends the elements of `rhs` after the elements of `self`.
    fn concat(self, rhs: Rhs) -> Self::Output;
}

macro_rules! impl_concat {
    (($($left:ident),*), ($($right:ident),*)) => {
        paste::paste! {
            impl<$($left,)* $($right,)*> Concat<($($right,)*)> for ($($left,)*) {
                type Output = ($($left,)* $($right,)*);

                #[inline]
                #[allow(clippy::unused_unit)]
                fn concat(self, ($([<$right:lower>],)*): ($($right,)*)) -> Self::Output {
                    let ($([<$left:lower>],)*) = self;
                    ($([<$left:lower>],)* $([<$right:lower>],)*)
                }
            }
        }
    };
}

impl_concat!((), ());
impl_concat!((), (R1));
impl_concat!((), (R1, R2));
impl_concat!((), (R1, R2, R3));
impl_concat!((), (R1, R2, R3, R4));
impl_concat!((), (R1, R2, R3, R4, R5));
impl_concat!((), (R1, R2, R3, R4, R5, R6));
impl_concat!((L1), ());
impl_concat!((L1), (R1));
impl_concat!((L1), (R1, R2));
impl_concat!((L1), (R1, R2, R3));
impl_concat!((L1), (R1, R2, R3, R4));
impl_concat!((L1), (R1, R2, R3, R4, R5));
impl_concat!((L1, L2), ());
impl_concat!((L1, L2), (R1));
impl_concat!((L1, L2), (R1, R2));
impl_concat!((L1, L2), (R1, R2, R3));
impl_concat!((L1, L2), (R1, R2, R3, R4));
impl_concat!((L1, L2, L3), ());
impl_concat!((L1, L2, L3), (R1));
impl_concat!((L1, L2, L3), (R1, R2));
impl_concat!((L1, L2, L3), (R1, R2, R3));
impl_concat!((L1, L2, L3, L4), ());
impl_concat!((L1, L2, L3, L4), (R1));
impl_concat!((L1, L2, L3, L4), (R1, R2));
impl_concat!((L1, L2, L3, L4, L5), ());
impl_concat!((L1, L2, L3, L4, L5), (R1));
impl_concat!((L1, L2, L3, L4, L5, L6), ());

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_concat_keeps_left_elements_first() {
        assert_eq!((1, 2).concat((3, 4)), (1, 2, 3, 4));
        assert_eq!(("a",).concat(("b", "c")), ("a", "b", "c"));
    }

    #[rstest]
    fn test_concat_with_empty_side() {
        assert_eq!((1, 2, 3).concat(()), (1, 2, 3));
        assert_eq!(().concat((1, 2, 3)), (1, 2, 3));
    }

    #[rstest]
    fn test_concat_mixed_types_up_to_six() {
        let joined = (1_u8, "two", 3.0_f64).concat(('4', 5_i64, String::from("six")));
        assert_eq!(joined, (1_u8, "two", 3.0_f64, '4', 5_i64, String::from("six")));
    }
}
