//! Catching variants: panic interception at combinator boundaries
//!
//! The non-catching operations let a panicking user callback unwind straight
//! to the caller. Every operation in this family instead runs the callback
//! inside a protected region ([`protect`]) and hands an escaping panic to a
//! caller-supplied handler, which converts it into an ordinary failed
//! [`DataResult`]. There is deliberately no second layer of protection: a
//! panic raised *inside the handler* always propagates, since a handler that
//! cannot handle its input is a programming error rather than a recoverable
//! condition.
//!
//! # Examples
//!
//! ```
//! use confluence::catching::{self, panic_message};
//! use confluence::DataResult;
//!
//! let result = DataResult::<_, String>::success(2).map_catching(
//!     |payload| DataResult::failure(format!("caught: {}", panic_message(&payload))),
//!     |_: i32| -> i32 { panic!("boom") },
//! );
//! assert_eq!(result, DataResult::Failure("caught: boom".to_string()));
//! ```

use std::any::Any;
use std::future::Future;
use std::panic::{catch_unwind, AssertUnwindSafe};

use futures::future::FutureExt;

use crate::{combine, DataResult, NonEmptyVec};

/// The payload carried by a caught panic, as produced by
/// `std::panic::catch_unwind`.
pub type PanicPayload = Box<dyn Any + Send + 'static>;

/// Extract a human-readable message from a panic payload.
///
/// Panics raised via `panic!("...")` carry a `&str` or `String`; anything
/// else yields a placeholder.
pub fn panic_message(payload: &PanicPayload) -> &str {
    if let Some(message) = payload.downcast_ref::<&'static str>() {
        message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message
    } else {
        "<opaque panic payload>"
    }
}

/// Run `block` inside a protected region.
///
/// Every catching operation in the crate is a thin composition of the
/// corresponding non-catching operation with this wrapper. If `block`
/// panics, the payload goes to `handle_panic`; a panic from `handle_panic`
/// itself propagates to the caller.
pub fn protect<R, F, H, B>(handle_panic: H, block: B) -> DataResult<R, F>
where
    H: FnOnce(PanicPayload) -> DataResult<R, F>,
    B: FnOnce() -> DataResult<R, F>,
{
    match catch_unwind(AssertUnwindSafe(block)) {
        Ok(result) => result,
        Err(payload) => handle_panic(payload),
    }
}

/// Run a plain block, encapsulating its value as a success and any panic via
/// `handle_panic`.
///
/// # Examples
///
/// ```
/// use confluence::catching;
/// use confluence::DataResult;
///
/// let result: DataResult<i32, String> = catching::run_catching(
///     |_| DataResult::failure("panicked".to_string()),
///     || 40 + 2,
/// );
/// assert_eq!(result, DataResult::Success(42));
/// ```
pub fn run_catching<R, F, H, B>(handle_panic: H, block: B) -> DataResult<R, F>
where
    H: FnOnce(PanicPayload) -> DataResult<R, F>,
    B: FnOnce() -> R,
{
    protect(handle_panic, || DataResult::success(block()))
}

/// Await a future, encapsulating its output as a success and any panic
/// raised while polling it via `handle_panic`.
///
/// The awaiting sibling of [`run_catching`].
///
/// # Examples
///
/// ```
/// # futures::executor::block_on(async {
/// use confluence::catching;
/// use confluence::DataResult;
///
/// let result: DataResult<i32, String> = catching::run_catching_async(
///     |_| DataResult::failure("panicked".to_string()),
///     async { 40 + 2 },
/// )
/// .await;
/// assert_eq!(result, DataResult::Success(42));
/// # });
/// ```
pub async fn run_catching_async<Fut, R, F, H>(handle_panic: H, future: Fut) -> DataResult<R, F>
where
    Fut: Future<Output = R>,
    H: FnOnce(PanicPayload) -> DataResult<R, F>,
{
    match AssertUnwindSafe(future).catch_unwind().await {
        Ok(value) => DataResult::success(value),
        Err(payload) => handle_panic(payload),
    }
}

/// Run a result-building block, intercepting any panic it raises.
pub fn build_catching<R, F, H, B>(handle_panic: H, builder: B) -> DataResult<R, F>
where
    H: FnOnce(PanicPayload) -> DataResult<R, F>,
    B: FnOnce() -> DataResult<R, F>,
{
    protect(handle_panic, builder)
}

/// Run `block` up to `attempts` times, strictly sequentially, returning the
/// first successful outcome.
///
/// The 0-indexed attempt number is passed to the block for retry-aware
/// behaviour. After exhausting all attempts the *last* panic payload goes to
/// `handle_final_panic`. `attempts` of zero is treated as one: the block
/// always runs at least once.
///
/// # Examples
///
/// ```
/// use confluence::catching;
/// use confluence::DataResult;
///
/// let result: DataResult<&str, String> = catching::retry_catching(
///     3,
///     |_| DataResult::failure("failed".to_string()),
///     |attempt| {
///         if attempt < 2 {
///             panic!("flaky");
///         }
///         "ok"
///     },
/// );
/// assert_eq!(result, DataResult::Success("ok"));
/// ```
pub fn retry_catching<R, F, H, B>(attempts: u32, handle_final_panic: H, mut block: B) -> DataResult<R, F>
where
    H: FnOnce(PanicPayload) -> DataResult<R, F>,
    B: FnMut(u32) -> R,
{
    let attempts = attempts.max(1);
    let mut attempt = 0;
    while attempt < attempts - 1 {
        match catch_unwind(AssertUnwindSafe(|| block(attempt))) {
            Ok(value) => return DataResult::success(value),
            Err(_payload) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(attempt, "attempt panicked, retrying");
            }
        }
        attempt += 1;
    }
    match catch_unwind(AssertUnwindSafe(|| block(attempt))) {
        Ok(value) => DataResult::success(value),
        Err(payload) => handle_final_panic(payload),
    }
}

impl<T, E> DataResult<T, E> {
    /// [`map`](Self::map) with panic interception: `transform` runs
    /// protected, and an escaping panic is converted by `handle_panic`.
    ///
    /// See [`map`](Self::map) for the variant that lets panics propagate.
    pub fn map_catching<R, F, H, Op>(self, handle_panic: H, transform: Op) -> DataResult<R, F>
    where
        E: Into<F>,
        H: FnOnce(PanicPayload) -> DataResult<R, F>,
        Op: FnOnce(T) -> R,
    {
        self.and_then_catching(handle_panic, |value| DataResult::success(transform(value)))
    }

    /// [`and_then`](Self::and_then) with panic interception.
    pub fn and_then_catching<R, F, H, Op>(self, handle_panic: H, transform: Op) -> DataResult<R, F>
    where
        E: Into<F>,
        H: FnOnce(PanicPayload) -> DataResult<R, F>,
        Op: FnOnce(T) -> DataResult<R, F>,
    {
        match self {
            DataResult::Success(value) => protect(handle_panic, || transform(value)),
            DataResult::Failure(error) => DataResult::Failure(error.into()),
        }
    }

    /// [`recover`](Self::recover) with panic interception.
    pub fn recover_catching<F, H, Op>(self, handle_panic: H, transform: Op) -> DataResult<T, F>
    where
        H: FnOnce(PanicPayload) -> DataResult<T, F>,
        Op: FnOnce(E) -> T,
    {
        self.recover_with_catching(handle_panic, |error| DataResult::success(transform(error)))
    }

    /// [`recover_with`](Self::recover_with) with panic interception.
    pub fn recover_with_catching<F, H, Op>(self, handle_panic: H, transform: Op) -> DataResult<T, F>
    where
        H: FnOnce(PanicPayload) -> DataResult<T, F>,
        Op: FnOnce(E) -> DataResult<T, F>,
    {
        match self {
            DataResult::Success(value) => DataResult::Success(value),
            DataResult::Failure(error) => protect(handle_panic, || transform(error)),
        }
    }

    /// [`transform`](Self::transform) with panic interception; the transform
    /// still runs exactly once.
    pub fn transform_catching<R, F, H, Op>(self, handle_panic: H, transform: Op) -> DataResult<R, F>
    where
        H: FnOnce(PanicPayload) -> DataResult<R, F>,
        Op: FnOnce(DataResult<T, E>) -> DataResult<R, F>,
    {
        protect(handle_panic, || transform(self))
    }
}

/// [`combine::flat_combine`] with the whole combination (both transforms)
/// inside one protected region.
pub fn flat_combine_catching<T, E, R, F, H, TE, TV>(
    results: impl IntoIterator<Item = DataResult<T, E>>,
    handle_panic: H,
    transform_errors: TE,
    transform_values: TV,
) -> DataResult<R, F>
where
    H: FnOnce(PanicPayload) -> DataResult<R, F>,
    TE: FnOnce(NonEmptyVec<E>) -> DataResult<R, F>,
    TV: FnOnce(Vec<T>) -> DataResult<R, F>,
{
    protect(handle_panic, || {
        combine::flat_combine(results, transform_errors, transform_values)
    })
}

/// [`combine::combine`] with panic interception.
pub fn combine_catching<T, E, R, F, H, TE, TV>(
    results: impl IntoIterator<Item = DataResult<T, E>>,
    handle_panic: H,
    transform_errors: TE,
    transform_values: TV,
) -> DataResult<R, F>
where
    H: FnOnce(PanicPayload) -> DataResult<R, F>,
    TE: FnOnce(NonEmptyVec<E>) -> F,
    TV: FnOnce(Vec<T>) -> R,
{
    protect(handle_panic, || {
        combine::combine(results, transform_errors, transform_values)
    })
}

/// [`crate::merge::flat_merge`] with panic interception.
pub fn flat_merge_catching<T, E, R, F, H, TE, TV>(
    results: impl IntoIterator<Item = DataResult<T, E>>,
    handle_panic: H,
    transform_errors: TE,
    transform_values: TV,
) -> DataResult<R, F>
where
    H: FnOnce(PanicPayload) -> DataResult<R, F>,
    TE: FnOnce(NonEmptyVec<E>) -> DataResult<R, F>,
    TV: FnOnce(Vec<T>) -> DataResult<R, F>,
{
    flat_combine_catching(results, handle_panic, transform_errors, transform_values)
}

/// [`crate::merge::merge`] with panic interception.
pub fn merge_catching<T, E, R, F, H, TE, TV>(
    results: impl IntoIterator<Item = DataResult<T, E>>,
    handle_panic: H,
    transform_errors: TE,
    transform_values: TV,
) -> DataResult<R, F>
where
    H: FnOnce(PanicPayload) -> DataResult<R, F>,
    TE: FnOnce(NonEmptyVec<E>) -> F,
    TV: FnOnce(Vec<T>) -> R,
{
    combine_catching(results, handle_panic, transform_errors, transform_values)
}
