//! Combine algebra: N-ary aggregation of independent results
//!
//! Combinators here take N independent [`DataResult`]s and reduce them to one
//! under a chosen error policy:
//!
//! - **fail on first error**: every input is still scanned and the full
//!   ordered error list is collected, but the canonical reducer
//!   ([`NonEmptyVec::into_head`]) keeps only the first error in input order.
//! - **accumulate errors**: a caller-supplied reducer folds the whole list
//!   into one representative error (joining with a delimiter, building a
//!   composite error, ...), or [`combine_accumulated`] folds it through the
//!   error type's [`Semigroup`](crate::Semigroup) instance.
//!
//! Two input shapes are supported: an arbitrary-arity collection of
//! equally-typed results (the functions in this module) and heterogeneous
//! tuples of two to six results ([`CombineTuple`]). The tuple forms are pure
//! conveniences: for identical inputs in identical order they are
//! indistinguishable from the collection forms.
//!
//! # Examples
//!
//! ```
//! use confluence::{combine, DataResult, NonEmptyVec};
//!
//! // All success: the value transform sees every value in input order.
//! let result = combine::combine(
//!     vec![DataResult::<i32, String>::success(1), DataResult::success(2)],
//!     NonEmptyVec::into_head,
//!     |values| values.into_iter().sum::<i32>(),
//! );
//! assert_eq!(result, DataResult::Success(3));
//!
//! // Accumulate: join every error with a delimiter.
//! let result = combine::combine(
//!     vec![
//!         DataResult::<i32, String>::failure("a".to_string()),
//!         DataResult::success(1),
//!         DataResult::failure("b".to_string()),
//!     ],
//!     |errors| errors.into_vec().join(","),
//!     |values| values.len(),
//! );
//! assert_eq!(result, DataResult::Failure("a,b".to_string()));
//! ```

mod tuple;

pub use tuple::CombineTuple;

use crate::{DataResult, DataResultIteratorExt, NonEmptyVec, Semigroup};

/// Combine an ordered collection of results with result-returning transforms.
///
/// All inputs are scanned. If any failed, the full ordered list of errors is
/// handed to `transform_errors`; otherwise `transform_values` receives every
/// success value in input order. An empty collection is vacuously
/// all-success: `transform_values` receives an empty `Vec`.
pub fn flat_combine<T, E, R, F, TE, TV>(
    results: impl IntoIterator<Item = DataResult<T, E>>,
    transform_errors: TE,
    transform_values: TV,
) -> DataResult<R, F>
where
    TE: FnOnce(NonEmptyVec<E>) -> DataResult<R, F>,
    TV: FnOnce(Vec<T>) -> DataResult<R, F>,
{
    let (values, errors) = results.into_iter().partition_results();
    match NonEmptyVec::from_vec(errors) {
        Some(errors) => transform_errors(errors),
        None => transform_values(values),
    }
}

/// Combine an ordered collection of results with plain-value transforms.
///
/// Like [`flat_combine`] but the transforms return plain values which are
/// wrapped into `failure(..)` / `success(..)` automatically.
///
/// # Examples
///
/// ```
/// use confluence::{combine, DataResult, NonEmptyVec};
///
/// let result = combine::combine(
///     Vec::<DataResult<i32, String>>::new(),
///     NonEmptyVec::into_head,
///     |values| values.len(),
/// );
/// assert_eq!(result, DataResult::Success(0));
/// ```
pub fn combine<T, E, R, F, TE, TV>(
    results: impl IntoIterator<Item = DataResult<T, E>>,
    transform_errors: TE,
    transform_values: TV,
) -> DataResult<R, F>
where
    TE: FnOnce(NonEmptyVec<E>) -> F,
    TV: FnOnce(Vec<T>) -> R,
{
    flat_combine(
        results,
        |errors| DataResult::failure(transform_errors(errors)),
        |values| DataResult::success(transform_values(values)),
    )
}

/// [`flat_combine`] under the canonical first-error policy.
///
/// The error list is still collected in full; only its head survives,
/// widened into `F`.
pub fn flat_combine_first<T, E, R, F, TV>(
    results: impl IntoIterator<Item = DataResult<T, E>>,
    transform_values: TV,
) -> DataResult<R, F>
where
    E: Into<F>,
    TV: FnOnce(Vec<T>) -> DataResult<R, F>,
{
    flat_combine(
        results,
        |errors| DataResult::failure(errors.into_head().into()),
        transform_values,
    )
}

/// [`combine`] under the canonical first-error policy.
///
/// # Examples
///
/// ```
/// use confluence::{combine, DataResult};
///
/// let result = combine::combine_first(
///     vec![DataResult::<i32, &str>::success(1), DataResult::failure("x")],
///     |values| values.into_iter().sum::<i32>(),
/// );
/// assert_eq!(result, DataResult::Failure("x"));
/// ```
pub fn combine_first<T, E, R, TV>(
    results: impl IntoIterator<Item = DataResult<T, E>>,
    transform_values: TV,
) -> DataResult<R, E>
where
    TV: FnOnce(Vec<T>) -> R,
{
    combine(results, NonEmptyVec::into_head, transform_values)
}

/// [`combine`] folding all errors through their [`Semigroup`](crate::Semigroup)
/// instance.
///
/// # Examples
///
/// ```
/// use confluence::{combine, DataResult};
///
/// let result = combine::combine_accumulated(
///     vec![
///         DataResult::<i32, Vec<&str>>::failure(vec!["a"]),
///         DataResult::failure(vec!["b"]),
///     ],
///     |values| values.len(),
/// );
/// assert_eq!(result, DataResult::Failure(vec!["a", "b"]));
/// ```
pub fn combine_accumulated<T, E, R, TV>(
    results: impl IntoIterator<Item = DataResult<T, E>>,
    transform_values: TV,
) -> DataResult<R, E>
where
    E: Semigroup,
    TV: FnOnce(Vec<T>) -> R,
{
    combine(results, NonEmptyVec::reduce_combined, transform_values)
}
