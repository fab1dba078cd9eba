//! Extraction helpers for sequences of results
//!
//! Pure helpers that, given an iterator of [`DataResult`]s, pull out the
//! successes and failures in input order. Every N-ary combinator in
//! [`combine`](crate::combine) and [`merge`](crate::merge) is built on
//! [`partition_results`](DataResultIteratorExt::partition_results).
//!
//! # Examples
//!
//! ```
//! use confluence::{DataResult, DataResultIteratorExt};
//!
//! let results = vec![
//!     DataResult::<i32, &str>::success(1),
//!     DataResult::failure("a"),
//!     DataResult::success(2),
//!     DataResult::failure("b"),
//! ];
//!
//! let (values, errors) = results.into_iter().partition_results();
//! assert_eq!(values, vec![1, 2]);
//! assert_eq!(errors, vec!["a", "b"]);
//! ```

use crate::DataResult;

/// Iterator extensions for sequences of [`DataResult`]s.
pub trait DataResultIteratorExt<T, E>: Iterator<Item = DataResult<T, E>> + Sized {
    /// Split the sequence into its success values and its errors, each in
    /// input order.
    fn partition_results(self) -> (Vec<T>, Vec<E>) {
        let mut values = Vec::new();
        let mut errors = Vec::new();
        for result in self {
            match result {
                DataResult::Success(value) => values.push(value),
                DataResult::Failure(error) => errors.push(error),
            }
        }
        (values, errors)
    }

    /// Collect the success values, in input order, dropping failures.
    fn successes(self) -> Vec<T> {
        self.filter_map(DataResult::ok).collect()
    }

    /// Collect the errors, in input order, dropping successes.
    ///
    /// # Examples
    ///
    /// ```
    /// use confluence::{DataResult, DataResultIteratorExt};
    ///
    /// let errors = vec![
    ///     DataResult::<i32, &str>::failure("a"),
    ///     DataResult::success(1),
    ///     DataResult::failure("b"),
    /// ]
    /// .into_iter()
    /// .failures();
    ///
    /// assert_eq!(errors, vec!["a", "b"]);
    /// ```
    fn failures(self) -> Vec<E> {
        self.filter_map(DataResult::err).collect()
    }
}

impl<T, E, I> DataResultIteratorExt<T, E> for I where I: Iterator<Item = DataResult<T, E>> {}
