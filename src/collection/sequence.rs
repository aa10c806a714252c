//! Building and walking sequences.

use crate::error::FnError;

/// A single value or a sequence of values, flattened into items.
///
/// Lets [`concat`] accept either one element or several.
pub trait IntoItems<T> {
    /// Appends the contained items to `sequence`.
    fn append_to(self, sequence: &mut Vec<T>);
}

impl<T> IntoItems<T> for T {
    fn append_to(self, sequence: &mut Vec<T>) {
        sequence.push(self);
    }
}

impl<T> IntoItems<T> for Vec<T> {
    fn append_to(mut self, sequence: &mut Vec<T>) {
        sequence.append(&mut self);
    }
}

impl<T, const N: usize> IntoItems<T> for [T; N] {
    fn append_to(self, sequence: &mut Vec<T>) {
        sequence.extend(self);
    }
}

/// Returns a new sequence with `item` in front of `sequence`.
///
/// # Examples
///
/// ```rust
/// use fnkit::collection::cat;
///
/// let tail = vec![2, 3];
/// assert_eq!(cat(1, &tail), vec![1, 2, 3]);
/// assert_eq!(tail, vec![2, 3]);
/// ```
pub fn cat<T: Clone>(item: T, sequence: &[T]) -> Vec<T> {
    let mut joined = Vec::with_capacity(sequence.len() + 1);
    joined.push(item);
    joined.extend_from_slice(sequence);
    joined
}

/// Returns a new sequence of `sequence` followed by `value_or_sequence`.
///
/// A single value is appended as one element, a `Vec` or array is appended
/// element by element.
///
/// # Examples
///
/// ```rust
/// use fnkit::collection::concat;
///
/// assert_eq!(concat(&["a", "b"], "c"), vec!["a", "b", "c"]);
/// assert_eq!(concat(&["a", "b"], ["c", "d"]), vec!["a", "b", "c", "d"]);
/// ```
pub fn concat<T, V>(sequence: &[T], value_or_sequence: V) -> Vec<T>
where
    T: Clone,
    V: IntoItems<T>,
{
    let mut joined = sequence.to_vec();
    value_or_sequence.append_to(&mut joined);
    joined
}

/// Pairs up two sequences, padding the shorter one with `None`.
///
/// The result is as long as the longer input.
///
/// # Examples
///
/// ```rust
/// use fnkit::collection::zip;
///
/// assert_eq!(
///     zip([1, 2, 3], ["a", "b"]),
///     vec![(Some(1), Some("a")), (Some(2), Some("b")), (Some(3), None)],
/// );
/// ```
pub fn zip<A, B>(first: A, second: B) -> Vec<(Option<A::Item>, Option<B::Item>)>
where
    A: IntoIterator,
    B: IntoIterator,
{
    let mut first = first.into_iter().fuse();
    let mut second = second.into_iter().fuse();
    std::iter::from_fn(|| match (first.next(), second.next()) {
        (None, None) => None,
        pair => Some(pair),
    })
    .collect()
}

/// Calls `callback` with every index from `0` to `count - 1`, in order.
///
/// # Errors
///
/// Returns [`FnError::InvalidArgument`] if `count` is negative. The callback
/// is not invoked in that case.
///
/// # Examples
///
/// ```rust
/// use fnkit::collection::times;
///
/// let mut seen = Vec::new();
/// times(3, |index| seen.push(index)).unwrap();
/// assert_eq!(seen, vec![0, 1, 2]);
///
/// assert!(times(-1, |_| {}).is_err());
/// ```
pub fn times<F>(count: i64, callback: F) -> Result<(), FnError>
where
    F: FnMut(usize),
{
    let repetitions = usize::try_from(count).map_err(|_| {
        tracing::debug!(count, "times: rejected repetition count");
        FnError::invalid_argument("times", format!("count must be non-negative, got {count}"))
    })?;
    (0..repetitions).for_each(callback);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_cat_onto_empty() {
        assert_eq!(cat("only", &[]), vec!["only"]);
    }

    #[rstest]
    fn test_concat_leaves_input_untouched() {
        let head = vec![1, 2];
        let joined = concat(&head, vec![3, 4]);
        assert_eq!(joined, vec![1, 2, 3, 4]);
        assert_eq!(head, vec![1, 2]);
    }

    #[rstest]
    fn test_concat_single_value() {
        assert_eq!(concat(&[String::from("a")], String::from("b")), vec!["a", "b"]);
    }

    #[rstest]
    fn test_zip_pads_first_sequence() {
        assert_eq!(zip(vec!['x'], vec![1, 2]), vec![(Some('x'), Some(1)), (None, Some(2))]);
    }

    #[rstest]
    fn test_zip_empty() {
        assert!(zip(Vec::<i32>::new(), Vec::<i32>::new()).is_empty());
    }

    #[rstest]
    #[case(0, vec![])]
    #[case(1, vec![0])]
    #[case(4, vec![0, 1, 2, 3])]
    fn test_times_visits_indices_in_order(#[case] count: i64, #[case] expected: Vec<usize>) {
        let mut seen = Vec::new();
        times(count, |index| seen.push(index)).unwrap();
        assert_eq!(seen, expected);
    }

    #[rstest]
    fn test_times_rejects_negative_count() {
        let mut calls = 0;
        let error = times(-1, |_| calls += 1).unwrap_err();
        assert_eq!(calls, 0);
        assert!(matches!(error, FnError::InvalidArgument { function: "times", .. }));
    }
}
