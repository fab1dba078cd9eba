//! Merge algebra: the combine algebra under its own name
//!
//! Merging is intended for folding together independent *equally-shaped*
//! aggregates: N repositories each producing the same kind of snapshot, N
//! caches answering the same query. Behaviourally it is identical to
//! [`combine`](crate::combine): same error policies, same arity conventions,
//! same empty-input rule. It lives in a separate namespace purely so call
//! sites can say which of the two they mean when both readings apply, and the
//! two families may evolve independently.
//!
//! Every function here delegates to its combine counterpart; for identical
//! inputs the outputs are indistinguishable.
//!
//! # Examples
//!
//! ```
//! use confluence::{merge, DataResult};
//!
//! let result = merge::merge_first(
//!     vec![
//!         DataResult::<Vec<i32>, String>::success(vec![1]),
//!         DataResult::success(vec![2, 3]),
//!     ],
//!     |snapshots| snapshots.into_iter().flatten().collect::<Vec<_>>(),
//! );
//! assert_eq!(result, DataResult::Success(vec![1, 2, 3]));
//! ```

use crate::{combine, DataResult, NonEmptyVec, Semigroup};

/// Merge an ordered collection of results with result-returning transforms.
/// See [`combine::flat_combine`].
pub fn flat_merge<T, E, R, F, TE, TV>(
    results: impl IntoIterator<Item = DataResult<T, E>>,
    transform_errors: TE,
    transform_values: TV,
) -> DataResult<R, F>
where
    TE: FnOnce(NonEmptyVec<E>) -> DataResult<R, F>,
    TV: FnOnce(Vec<T>) -> DataResult<R, F>,
{
    combine::flat_combine(results, transform_errors, transform_values)
}

/// Merge an ordered collection of results with plain-value transforms.
/// See [`combine::combine`].
pub fn merge<T, E, R, F, TE, TV>(
    results: impl IntoIterator<Item = DataResult<T, E>>,
    transform_errors: TE,
    transform_values: TV,
) -> DataResult<R, F>
where
    TE: FnOnce(NonEmptyVec<E>) -> F,
    TV: FnOnce(Vec<T>) -> R,
{
    combine::combine(results, transform_errors, transform_values)
}

/// [`merge`] under the canonical first-error policy.
pub fn merge_first<T, E, R, TV>(
    results: impl IntoIterator<Item = DataResult<T, E>>,
    transform_values: TV,
) -> DataResult<R, E>
where
    TV: FnOnce(Vec<T>) -> R,
{
    combine::combine_first(results, transform_values)
}

/// [`merge`] folding all errors through their [`Semigroup`] instance.
pub fn merge_accumulated<T, E, R, TV>(
    results: impl IntoIterator<Item = DataResult<T, E>>,
    transform_values: TV,
) -> DataResult<R, E>
where
    E: Semigroup,
    TV: FnOnce(Vec<T>) -> R,
{
    combine::combine_accumulated(results, transform_values)
}

/// Merge a heterogeneous tuple of results sharing one error type.
///
/// Blanket-implemented for everything [`CombineTuple`](crate::CombineTuple)
/// covers (tuples of arity 2 through 6), with identical behaviour.
///
/// # Examples
///
/// ```
/// use confluence::{DataResult, MergeTuple};
///
/// let result = (
///     DataResult::<i32, String>::success(1),
///     DataResult::<i32, String>::success(2),
/// )
///     .merge_first(|(a, b)| a + b);
/// assert_eq!(result, DataResult::Success(3));
/// ```
pub trait MergeTuple<E>: crate::CombineTuple<E> {
    /// Merge with result-returning transforms; see
    /// [`CombineTuple::flat_combine`](crate::CombineTuple::flat_combine).
    fn flat_merge<R, F, TE, TV>(self, transform_errors: TE, transform_values: TV) -> DataResult<R, F>
    where
        TE: FnOnce(NonEmptyVec<E>) -> DataResult<R, F>,
        TV: FnOnce(Self::Values) -> DataResult<R, F>,
    {
        self.flat_combine(transform_errors, transform_values)
    }

    /// Merge with plain-value transforms.
    fn merge<R, F, TE, TV>(self, transform_errors: TE, transform_values: TV) -> DataResult<R, F>
    where
        TE: FnOnce(NonEmptyVec<E>) -> F,
        TV: FnOnce(Self::Values) -> R,
    {
        self.combine(transform_errors, transform_values)
    }

    /// Merge under the canonical first-error policy.
    fn merge_first<R, TV>(self, transform_values: TV) -> DataResult<R, E>
    where
        TV: FnOnce(Self::Values) -> R,
    {
        self.combine_first(transform_values)
    }
}

impl<E, C> MergeTuple<E> for C where C: crate::CombineTuple<E> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CombineTuple;

    #[test]
    fn test_merge_indistinguishable_from_combine() {
        let inputs = || {
            vec![
                DataResult::<i32, String>::failure("a".to_string()),
                DataResult::success(1),
                DataResult::failure("b".to_string()),
            ]
        };

        let merged: DataResult<usize, String> =
            merge(inputs(), |e| e.into_vec().join(","), |v| v.len());
        let combined: DataResult<usize, String> =
            combine::combine(inputs(), |e| e.into_vec().join(","), |v| v.len());

        assert_eq!(merged, combined);
    }

    #[test]
    fn test_merge_first_error() {
        let result = merge_first(
            vec![
                DataResult::<i32, &str>::failure("x"),
                DataResult::failure("y"),
            ],
            |values| values,
        );
        assert_eq!(result, DataResult::Failure("x"));
    }

    #[test]
    fn test_merge_accumulated() {
        let result = merge_accumulated(
            vec![
                DataResult::<i32, Vec<&str>>::failure(vec!["a"]),
                DataResult::failure(vec!["b"]),
            ],
            |values| values,
        );
        assert_eq!(result, DataResult::Failure(vec!["a", "b"]));
    }

    #[test]
    fn test_tuple_merge_matches_tuple_combine() {
        let pair = || {
            (
                DataResult::<i32, &str>::success(1),
                DataResult::<i32, &str>::failure("x"),
            )
        };

        assert_eq!(
            pair().merge_first(|(a, b)| a + b),
            pair().combine_first(|(a, b)| a + b),
        );
    }
}
