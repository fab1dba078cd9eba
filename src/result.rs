//! The `DataResult` type: a success-or-failure discriminated union
//!
//! This module provides `DataResult<T, E>`, a closed two-variant union that
//! encapsulates either a successful outcome with a value of type `T` or a
//! failure with an error of type `E`. Unlike `std::result::Result`, the
//! failure side is ordinary domain data, never an exception, and the rest of
//! the crate builds an N-ary combinator algebra on top of it (see the
//! [`combine`](crate::combine) and [`merge`](crate::merge) modules).
//!
//! # Examples
//!
//! ## Basic usage
//!
//! ```
//! use confluence::DataResult;
//!
//! let ok = DataResult::<_, String>::success(42);
//! let bad = DataResult::<i32, _>::failure("nope".to_string());
//!
//! assert!(ok.is_success());
//! assert!(bad.is_failure());
//! ```
//!
//! ## Transforming
//!
//! ```
//! use confluence::DataResult;
//!
//! let result = DataResult::<_, String>::success(5)
//!     .map(|x| x * 2)
//!     .and_then(|x| {
//!         if x > 0 {
//!             DataResult::success(x)
//!         } else {
//!             DataResult::failure("must be positive".to_string())
//!         }
//!     });
//!
//! assert_eq!(result, DataResult::Success(10));
//! ```

use crate::NonEmptyVec;

/// A discriminated union that encapsulates a successful outcome with a value
/// of type `T` or a failure with an error of type `E`.
///
/// A `DataResult` is a plain immutable value: which variant holds is decided
/// at construction and every transformation produces a new instance. There is
/// no default or empty state.
///
/// # Type Parameters
///
/// * `T` - The type of the success value
/// * `E` - The type of the failure error
///
/// # Examples
///
/// ```
/// use confluence::DataResult;
///
/// let result = DataResult::<_, String>::success(42);
/// assert_eq!(result.ok(), Some(42));
///
/// let result = DataResult::<i32, _>::failure("boom".to_string());
/// assert_eq!(result.err(), Some("boom".to_string()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DataResult<T, E> {
    /// Successful outcome holding exactly one value.
    Success(T),
    /// Failed outcome holding exactly one error.
    Failure(E),
}

impl<T, E> DataResult<T, E> {
    /// Create a successful result encapsulating the given value.
    ///
    /// # Examples
    ///
    /// ```
    /// use confluence::DataResult;
    ///
    /// let result = DataResult::<i32, String>::success(42);
    /// assert!(result.is_success());
    /// ```
    #[inline]
    pub fn success(value: T) -> Self {
        DataResult::Success(value)
    }

    /// Create a failed result encapsulating the given error.
    ///
    /// # Examples
    ///
    /// ```
    /// use confluence::DataResult;
    ///
    /// let result = DataResult::<i32, String>::failure("boom".to_string());
    /// assert!(result.is_failure());
    /// ```
    #[inline]
    pub fn failure(error: E) -> Self {
        DataResult::Failure(error)
    }

    /// Create a `DataResult` from a `std::result::Result`.
    #[inline]
    pub fn from_result(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => DataResult::Success(value),
            Err(error) => DataResult::Failure(error),
        }
    }

    /// Convert this result into a `std::result::Result`.
    ///
    /// # Examples
    ///
    /// ```
    /// use confluence::DataResult;
    ///
    /// let result = DataResult::<_, String>::success(42);
    /// assert_eq!(result.into_result(), Ok(42));
    /// ```
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            DataResult::Success(value) => Ok(value),
            DataResult::Failure(error) => Err(error),
        }
    }

    /// Returns `true` if this instance represents a successful outcome.
    /// In that case [`is_failure`](Self::is_failure) returns `false`.
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, DataResult::Success(_))
    }

    /// Returns `true` if this instance represents a failed outcome.
    /// In that case [`is_success`](Self::is_success) returns `false`.
    #[inline]
    pub fn is_failure(&self) -> bool {
        matches!(self, DataResult::Failure(_))
    }

    /// Returns the encapsulated value if successful, `None` otherwise.
    #[inline]
    pub fn ok(self) -> Option<T> {
        match self {
            DataResult::Success(value) => Some(value),
            DataResult::Failure(_) => None,
        }
    }

    /// Returns the encapsulated error if failed, `None` otherwise.
    #[inline]
    pub fn err(self) -> Option<E> {
        match self {
            DataResult::Success(_) => None,
            DataResult::Failure(error) => Some(error),
        }
    }

    /// Converts from `&DataResult<T, E>` to `DataResult<&T, &E>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use confluence::DataResult;
    ///
    /// let result = DataResult::<String, String>::success("hi".to_string());
    /// assert_eq!(result.as_ref().ok(), Some(&"hi".to_string()));
    /// ```
    #[inline]
    pub fn as_ref(&self) -> DataResult<&T, &E> {
        match self {
            DataResult::Success(value) => DataResult::Success(value),
            DataResult::Failure(error) => DataResult::Failure(error),
        }
    }

    /// Returns the encapsulated value if successful or `default` otherwise.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            DataResult::Success(value) => value,
            DataResult::Failure(_) => default,
        }
    }

    /// Returns the encapsulated value if successful or the result of
    /// `on_failure` applied to the encapsulated error otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use confluence::DataResult;
    ///
    /// let result = DataResult::<i32, String>::failure("boom".to_string());
    /// assert_eq!(result.unwrap_or_else(|e| e.len() as i32), 4);
    /// ```
    #[inline]
    pub fn unwrap_or_else<Op>(self, on_failure: Op) -> T
    where
        Op: FnOnce(E) -> T,
    {
        match self {
            DataResult::Success(value) => value,
            DataResult::Failure(error) => on_failure(error),
        }
    }

    /// Eliminate the union to a plain value: exactly one of the two branches
    /// runs.
    ///
    /// # Examples
    ///
    /// ```
    /// use confluence::DataResult;
    ///
    /// let result = DataResult::<i32, String>::success(2);
    /// let text = result.fold(|v| format!("ok: {v}"), |e| format!("err: {e}"));
    /// assert_eq!(text, "ok: 2");
    /// ```
    #[inline]
    pub fn fold<R, S, F>(self, on_success: S, on_failure: F) -> R
    where
        S: FnOnce(T) -> R,
        F: FnOnce(E) -> R,
    {
        match self {
            DataResult::Success(value) => on_success(value),
            DataResult::Failure(error) => on_failure(error),
        }
    }

    /// Transform the success value if present; a failure passes through with
    /// its error untouched.
    ///
    /// Panics raised by `transform` propagate to the caller; see
    /// [`map_catching`](Self::map_catching) for the intercepting variant.
    ///
    /// # Examples
    ///
    /// ```
    /// use confluence::DataResult;
    ///
    /// let result = DataResult::<_, String>::success(5).map(|x| x * 2);
    /// assert_eq!(result, DataResult::Success(10));
    /// ```
    #[inline]
    pub fn map<R, Op>(self, transform: Op) -> DataResult<R, E>
    where
        Op: FnOnce(T) -> R,
    {
        match self {
            DataResult::Success(value) => DataResult::Success(transform(value)),
            DataResult::Failure(error) => DataResult::Failure(error),
        }
    }

    /// Chain a dependent result-returning transform.
    ///
    /// If successful, returns `transform(value)` directly: the whole result
    /// is replaced, including its error type. If failed, the original error is
    /// widened into the new error type `F` via `Into`; the error value itself
    /// never changes.
    ///
    /// # Examples
    ///
    /// ```
    /// use confluence::DataResult;
    ///
    /// let result = DataResult::<_, String>::success(5)
    ///     .and_then(|x| DataResult::<_, String>::success(x + 1));
    /// assert_eq!(result, DataResult::Success(6));
    /// ```
    #[inline]
    pub fn and_then<R, F, Op>(self, transform: Op) -> DataResult<R, F>
    where
        E: Into<F>,
        Op: FnOnce(T) -> DataResult<R, F>,
    {
        match self {
            DataResult::Success(value) => transform(value),
            DataResult::Failure(error) => DataResult::Failure(error.into()),
        }
    }

    /// Transform the error into a replacement value; the outcome is always
    /// successful afterwards.
    ///
    /// # Examples
    ///
    /// ```
    /// use confluence::DataResult;
    ///
    /// let result = DataResult::<i32, String>::failure("boom".to_string());
    /// assert_eq!(result.recover(|e| e.len() as i32), DataResult::Success(4));
    /// ```
    #[inline]
    pub fn recover<Op>(self, transform: Op) -> DataResult<T, E>
    where
        Op: FnOnce(E) -> T,
    {
        match self {
            DataResult::Success(value) => DataResult::Success(value),
            DataResult::Failure(error) => DataResult::Success(transform(error)),
        }
    }

    /// Mirror image of [`and_then`](Self::and_then) operating on the failure
    /// side: a failure is replaced by `transform(error)` wholesale, a success
    /// passes through with its error type widened via `Into`.
    #[inline]
    pub fn recover_with<F, Op>(self, transform: Op) -> DataResult<T, F>
    where
        Op: FnOnce(E) -> DataResult<T, F>,
    {
        match self {
            DataResult::Success(value) => DataResult::Success(value),
            DataResult::Failure(error) => transform(error),
        }
    }

    /// Apply `transform` to the whole result, success or failure alike.
    ///
    /// The transform runs exactly once. Mostly useful when lifting whole-result
    /// rewrites onto streams (see
    /// [`transform_result`](crate::stream::DataResultStreamExt::transform_result)).
    #[inline]
    pub fn transform<R, F, Op>(self, transform: Op) -> DataResult<R, F>
    where
        Op: FnOnce(DataResult<T, E>) -> DataResult<R, F>,
    {
        transform(self)
    }

    /// Run `action` on the encapsulated value if successful, then return the
    /// original result unchanged. The action runs at most once.
    ///
    /// Intended for logging and telemetry without altering control flow.
    #[inline]
    pub fn on_success<Op>(self, action: Op) -> Self
    where
        Op: FnOnce(&T),
    {
        if let DataResult::Success(value) = &self {
            action(value);
        }
        self
    }

    /// Run `action` on the encapsulated error if failed, then return the
    /// original result unchanged. The action runs at most once.
    #[inline]
    pub fn on_failure<Op>(self, action: Op) -> Self
    where
        Op: FnOnce(&E),
    {
        if let DataResult::Failure(error) = &self {
            action(error);
        }
        self
    }
}

impl<T, E1, E2> DataResult<DataResult<T, E1>, E2> {
    /// Flatten one level of nesting, selecting whichever error is present.
    ///
    /// If both layers are successful the inner value wins. If the outer layer
    /// failed the inner result was never produced, so the outer error is
    /// taken; otherwise the inner error is. Both error types widen into `F`.
    ///
    /// # Examples
    ///
    /// ```
    /// use confluence::DataResult;
    ///
    /// let nested = DataResult::<_, String>::success(
    ///     DataResult::<i32, String>::failure("inner".to_string()),
    /// );
    /// assert_eq!(nested.flatten::<String>(), DataResult::Failure("inner".to_string()));
    ///
    /// let outer = DataResult::<DataResult<i32, String>, _>::failure("outer".to_string());
    /// assert_eq!(outer.flatten::<String>(), DataResult::Failure("outer".to_string()));
    /// ```
    pub fn flatten<F>(self) -> DataResult<T, F>
    where
        E1: Into<F>,
        E2: Into<F>,
    {
        match self {
            DataResult::Success(DataResult::Success(value)) => DataResult::Success(value),
            DataResult::Success(DataResult::Failure(inner)) => DataResult::Failure(inner.into()),
            DataResult::Failure(outer) => DataResult::Failure(outer.into()),
        }
    }

    /// Flatten with an explicit error selection rule.
    ///
    /// `select` receives the non-empty list of errors present across the two
    /// layers, already widened into `F`. The default rule used by
    /// [`flatten`](Self::flatten) is "take the first".
    pub fn flatten_with<F, Op>(self, select: Op) -> DataResult<T, F>
    where
        E1: Into<F>,
        E2: Into<F>,
        Op: FnOnce(NonEmptyVec<F>) -> F,
    {
        match self {
            DataResult::Success(DataResult::Success(value)) => DataResult::Success(value),
            DataResult::Success(DataResult::Failure(inner)) => {
                DataResult::Failure(select(NonEmptyVec::singleton(inner.into())))
            }
            DataResult::Failure(outer) => {
                DataResult::Failure(select(NonEmptyVec::singleton(outer.into())))
            }
        }
    }
}

impl<T, E> From<Result<T, E>> for DataResult<T, E> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        DataResult::from_result(result)
    }
}

impl<T, E> From<DataResult<T, E>> for Result<T, E> {
    #[inline]
    fn from(result: DataResult<T, E>) -> Self {
        result.into_result()
    }
}
