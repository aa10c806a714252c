//! Joining predicates into one.

use smallvec::SmallVec;

use crate::collection::{all, any};
use crate::function::Function;

/// The strategy [`join_and`] and [`join_or`] use to fold predicate results.
///
/// A fold receives the joined predicates and a test that evaluates one
/// predicate against the call-time arguments.
pub type Fold<P> = fn(&[P], &dyn Fn(&P) -> bool) -> bool;

/// A predicate that is true when both of two predicates hold.
///
/// Created by [`both`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Both<A, B> {
    first: A,
    second: B,
}

/// Returns a predicate testing `first(value) && second(value)`.
///
/// `second` is not evaluated when `first` fails.
///
/// # Examples
///
/// ```rust
/// use fnkit::function::Function;
/// use fnkit::predicate::{both, even, more_than_or_equal_to};
///
/// let large_and_even = both(even::<i32>(), more_than_or_equal_to(10));
///
/// assert!(large_and_even.call((12,)));
/// assert!(!large_and_even.call((11,)));
/// assert!(!large_and_even.call((8,)));
/// ```
pub const fn both<A, B>(first: A, second: B) -> Both<A, B> {
    Both { first, second }
}

impl<A, B, T> Function<(T,)> for Both<A, B>
where
    T: Clone,
    A: Function<(T,), Output = bool>,
    B: Function<(T,), Output = bool>,
{
    type Output = bool;

    #[inline]
    fn call(&self, (value,): (T,)) -> bool {
        self.first.call((value.clone(),)) && self.second.call((value,))
    }
}

/// A predicate built from a list of predicates and a fold over their results.
///
/// Created by [`join_using`], [`join_and`] and [`join_or`].
#[derive(Clone)]
pub struct JoinUsing<P, J> {
    predicates: SmallVec<[P; 4]>,
    fold: J,
}

/// Joins `predicates` with a custom `fold`.
///
/// On each call the fold receives the predicates and a test evaluating one
/// predicate against the call-time arguments. Predicates of different types
/// can be mixed with [`functions!`](crate::functions).
///
/// # Examples
///
/// ```rust
/// use fnkit::function::Function;
/// use fnkit::predicate::{join_using, less_than};
///
/// let exactly_one = join_using([less_than(5), less_than(10)], |predicates, test| {
///     predicates.iter().filter(|&predicate| test(predicate)).count() == 1
/// });
///
/// assert!(exactly_one.call((7,)));
/// assert!(!exactly_one.call((2,)));
/// ```
pub fn join_using<I, J>(predicates: I, fold: J) -> JoinUsing<I::Item, J>
where
    I: IntoIterator,
    J: Fn(&[I::Item], &dyn Fn(&I::Item) -> bool) -> bool,
{
    JoinUsing {
        predicates: predicates.into_iter().collect(),
        fold,
    }
}

/// Joins `predicates` into one that holds when any of them holds.
///
/// Every predicate is evaluated. An empty list never holds.
///
/// # Examples
///
/// ```rust
/// use fnkit::function::Function;
/// use fnkit::functions;
/// use fnkit::predicate::{equal_to, join_or};
///
/// let stooge = join_or(functions![equal_to("moe"), equal_to("larry"), equal_to("curly")]);
///
/// assert!(stooge.call(("larry",)));
/// assert!(!stooge.call(("shemp",)));
/// ```
pub fn join_or<I>(predicates: I) -> JoinUsing<I::Item, Fold<I::Item>>
where
    I: IntoIterator,
{
    join_using(predicates, fold_any::<I::Item> as Fold<I::Item>)
}

/// Joins `predicates` into one that holds when all of them hold.
///
/// Every predicate is evaluated. An empty list always holds.
pub fn join_and<I>(predicates: I) -> JoinUsing<I::Item, Fold<I::Item>>
where
    I: IntoIterator,
{
    join_using(predicates, fold_all::<I::Item> as Fold<I::Item>)
}

fn fold_any<P>(predicates: &[P], test: &dyn Fn(&P) -> bool) -> bool {
    any(predicates, test)
}

fn fold_all<P>(predicates: &[P], test: &dyn Fn(&P) -> bool) -> bool {
    all(predicates, test)
}

impl<P, J> JoinUsing<P, J> {
    /// Returns the number of joined predicates.
    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    /// Returns `true` if no predicates were joined.
    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }
}

impl<P, J, Args> Function<Args> for JoinUsing<P, J>
where
    Args: Clone,
    P: Function<Args, Output = bool>,
    J: Fn(&[P], &dyn Fn(&P) -> bool) -> bool,
{
    type Output = bool;

    fn call(&self, arguments: Args) -> bool {
        let test = |predicate: &P| predicate.call(arguments.clone());
        (self.fold)(self.predicates.as_slice(), &test)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::function::BoxedFunction;
    use crate::predicate::{equal_to, even, less_than, more_than_or_equal_to};
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn test_both_short_circuits() {
        let calls = Cell::new(0);
        let counted = |_: i32| {
            calls.set(calls.get() + 1);
            true
        };
        let predicate = both(|_: i32| false, counted);

        assert!(!predicate.call((1,)));
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    #[case(12, true)]
    #[case(11, false)]
    #[case(4, false)]
    fn test_join_and_requires_every_predicate(#[case] value: i32, #[case] expected: bool) {
        let predicate: JoinUsing<BoxedFunction<'_, (i32,), bool>, _> =
            join_and(crate::functions![even::<i32>(), more_than_or_equal_to(10)]);
        assert_eq!(predicate.call((value,)), expected);
    }

    #[rstest]
    #[case(3, true)]
    #[case(15, true)]
    #[case(7, false)]
    fn test_join_or_accepts_any_predicate(#[case] value: i32, #[case] expected: bool) {
        let predicate: JoinUsing<BoxedFunction<'_, (i32,), bool>, _> =
            join_or(crate::functions![less_than(5), more_than_or_equal_to(10)]);
        assert_eq!(predicate.call((value,)), expected);
    }

    #[rstest]
    fn test_join_evaluates_every_predicate() {
        let calls = Cell::new(0);
        let counted = |value: &str| {
            calls.set(calls.get() + 1);
            value == "moe"
        };
        let predicate = join_or([&counted, &counted, &counted]);

        assert!(predicate.call(("moe",)));
        assert_eq!(calls.get(), 3);
    }

    #[rstest]
    fn test_empty_joins() {
        let never = join_or(Vec::<fn(i32) -> bool>::new());
        let always = join_and(Vec::<fn(i32) -> bool>::new());

        assert!(never.is_empty());
        assert!(!never.call((1,)));
        assert!(always.call((1,)));
    }

    #[rstest]
    fn test_join_using_custom_fold() {
        let majority = join_using([equal_to(1), equal_to(1), equal_to(2)], |predicates, test| {
            predicates.iter().filter(|&predicate| test(predicate)).count() * 2 > predicates.len()
        });

        assert!(majority.call((1,)));
        assert!(!majority.call((2,)));
        assert_eq!(majority.len(), 3);
    }
}
