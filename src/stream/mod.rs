//! Stream bridge: the result algebra lifted onto `futures::Stream`
//!
//! Three layers:
//!
//! - **Per-element lifts** ([`DataResultStreamExt`]): apply a result
//!   combinator to every element of a `Stream<Item = DataResult<T, E>>`. One
//!   output per input (filters excepted), order preserved, no buffering.
//! - **Joins** ([`combine`]): combine-latest over several result streams,
//!   re-running the synchronous combine algebra on each fresh tuple of latest
//!   values.
//! - **Switching** ([`latest`]): [`flat_map_latest_result`] derives an inner
//!   stream from each success and cancels the previous one on every new outer
//!   element.
//!
//! Bounded-wait retrieval ([`first_within`] and friends) needs a timer and
//! lives behind the `async` feature.
//!
//! # Examples
//!
//! ```
//! use confluence::stream::DataResultStreamExt;
//! use confluence::DataResult;
//! use futures::executor::block_on;
//! use futures::stream::{self, StreamExt};
//!
//! let results = stream::iter(vec![
//!     DataResult::<i32, String>::success(1),
//!     DataResult::failure("bad".to_string()),
//!     DataResult::success(2),
//! ]);
//!
//! let doubled: Vec<_> = block_on(results.map_result(|x| x * 2).collect());
//! assert_eq!(
//!     doubled,
//!     vec![
//!         DataResult::Success(2),
//!         DataResult::Failure("bad".to_string()),
//!         DataResult::Success(4),
//!     ],
//! );
//! ```

pub mod combine;
pub mod latest;

pub use latest::flat_map_latest_result;

use futures::future::ready;
use futures::stream::{Stream, StreamExt};

use crate::catching::PanicPayload;
use crate::DataResult;

/// Per-element combinators for streams of [`DataResult`]s.
///
/// Blanket-implemented for every `Stream<Item = DataResult<T, E>>`. Each
/// method is the streaming form of the synchronous combinator of the same
/// base name, applied independently to each element.
pub trait DataResultStreamExt<T, E>: Stream<Item = DataResult<T, E>> + Sized {
    /// Apply [`DataResult::map`] to every element.
    fn map_result<R, Op>(self, mut transform: Op) -> impl Stream<Item = DataResult<R, E>>
    where
        Op: FnMut(T) -> R,
    {
        self.map(move |result| result.map(&mut transform))
    }

    /// Apply [`DataResult::and_then`] to every element.
    fn and_then_result<R, F, Op>(self, mut transform: Op) -> impl Stream<Item = DataResult<R, F>>
    where
        E: Into<F>,
        Op: FnMut(T) -> DataResult<R, F>,
    {
        self.map(move |result| result.and_then(&mut transform))
    }

    /// Apply [`DataResult::recover`] to every element; the output stream
    /// carries no failures.
    fn recover_result<Op>(self, mut transform: Op) -> impl Stream<Item = DataResult<T, E>>
    where
        Op: FnMut(E) -> T,
    {
        self.map(move |result| result.recover(&mut transform))
    }

    /// Apply [`DataResult::recover_with`] to every element.
    fn recover_with_result<F, Op>(self, mut transform: Op) -> impl Stream<Item = DataResult<T, F>>
    where
        E: Into<F>,
        Op: FnMut(E) -> DataResult<T, F>,
    {
        self.map(move |result| result.recover_with(&mut transform))
    }

    /// Apply [`DataResult::transform`] to every element.
    fn transform_result<R, F, Op>(self, mut transform: Op) -> impl Stream<Item = DataResult<R, F>>
    where
        Op: FnMut(DataResult<T, E>) -> DataResult<R, F>,
    {
        self.map(move |result| result.transform(&mut transform))
    }

    /// Collapse every element to a plain value with [`DataResult::fold`].
    fn fold_result<R, S, F>(self, mut on_success: S, mut on_failure: F) -> impl Stream<Item = R>
    where
        S: FnMut(T) -> R,
        F: FnMut(E) -> R,
    {
        self.map(move |result| result.fold(&mut on_success, &mut on_failure))
    }

    /// Collapse every element to its value, substituting `default` for
    /// failures.
    fn unwrap_or_result(self, default: T) -> impl Stream<Item = T>
    where
        T: Clone,
    {
        self.map(move |result| result.unwrap_or(default.clone()))
    }

    /// Collapse every element to its value, computing a substitute from each
    /// error.
    fn unwrap_or_else_result<Op>(self, mut on_failure: Op) -> impl Stream<Item = T>
    where
        Op: FnMut(E) -> T,
    {
        self.map(move |result| result.unwrap_or_else(&mut on_failure))
    }

    /// Apply [`DataResult::map_catching`] to every element; the handler runs
    /// once per intercepted panic.
    fn map_result_catching<R, F, H, Op>(
        self,
        mut handle_panic: H,
        mut transform: Op,
    ) -> impl Stream<Item = DataResult<R, F>>
    where
        E: Into<F>,
        H: FnMut(PanicPayload) -> DataResult<R, F>,
        Op: FnMut(T) -> R,
    {
        self.map(move |result| result.map_catching(&mut handle_panic, &mut transform))
    }

    /// Apply [`DataResult::and_then_catching`] to every element.
    fn and_then_result_catching<R, F, H, Op>(
        self,
        mut handle_panic: H,
        mut transform: Op,
    ) -> impl Stream<Item = DataResult<R, F>>
    where
        E: Into<F>,
        H: FnMut(PanicPayload) -> DataResult<R, F>,
        Op: FnMut(T) -> DataResult<R, F>,
    {
        self.map(move |result| result.and_then_catching(&mut handle_panic, &mut transform))
    }

    /// Apply [`DataResult::recover_with_catching`] to every element.
    fn recover_result_catching<F, H, Op>(
        self,
        mut handle_panic: H,
        mut transform: Op,
    ) -> impl Stream<Item = DataResult<T, F>>
    where
        H: FnMut(PanicPayload) -> DataResult<T, F>,
        Op: FnMut(E) -> DataResult<T, F>,
    {
        self.map(move |result| result.recover_with_catching(&mut handle_panic, &mut transform))
    }

    /// Run `action` on every success payload; elements pass through
    /// unchanged.
    fn on_each_success<Op>(self, mut action: Op) -> impl Stream<Item = DataResult<T, E>>
    where
        Op: FnMut(&T),
    {
        self.map(move |result| {
            #[cfg(feature = "tracing")]
            if result.is_success() {
                tracing::debug!("stream element succeeded");
            }
            result.on_success(&mut action)
        })
    }

    /// Run `action` on every failure payload; elements pass through
    /// unchanged.
    fn on_each_failure<Op>(self, mut action: Op) -> impl Stream<Item = DataResult<T, E>>
    where
        Op: FnMut(&E),
    {
        self.map(move |result| {
            #[cfg(feature = "tracing")]
            if result.is_failure() {
                tracing::debug!("stream element failed");
            }
            result.on_failure(&mut action)
        })
    }

    /// Narrow to the success payloads, dropping failures.
    fn filter_success(self) -> impl Stream<Item = T> {
        self.filter_map(|result| ready(result.ok()))
    }

    /// Narrow to the failure payloads, dropping successes.
    fn filter_failure(self) -> impl Stream<Item = E> {
        self.filter_map(|result| ready(result.err()))
    }

    /// Drop successes whose payload matches `predicate`; every other element
    /// passes through in order.
    fn skip_success_if<P>(self, mut predicate: P) -> impl Stream<Item = DataResult<T, E>>
    where
        P: FnMut(&T) -> bool,
    {
        self.filter_map(move |result| {
            let keep = match &result {
                DataResult::Success(value) => !predicate(value),
                DataResult::Failure(_) => true,
            };
            ready(keep.then_some(result))
        })
    }

    /// Drop failures whose payload matches `predicate`.
    fn skip_failure_if<P>(self, mut predicate: P) -> impl Stream<Item = DataResult<T, E>>
    where
        P: FnMut(&E) -> bool,
    {
        self.filter_map(move |result| {
            let keep = match &result {
                DataResult::Success(_) => true,
                DataResult::Failure(error) => !predicate(error),
            };
            ready(keep.then_some(result))
        })
    }
}

impl<T, E, S> DataResultStreamExt<T, E> for S where S: Stream<Item = DataResult<T, E>> + Sized {}

/// Flatten a stream of nested results element-wise, selecting the first
/// present error per element. See [`DataResult::flatten`].
pub fn flatten_results<S, T, E1, E2, F>(stream: S) -> impl Stream<Item = DataResult<T, F>>
where
    S: Stream<Item = DataResult<DataResult<T, E1>, E2>>,
    E1: Into<F>,
    E2: Into<F>,
{
    stream.map(DataResult::flatten)
}

/// Await the payload of the next success, or `None` when the stream completes
/// without one.
pub async fn first_success<S, T, E>(stream: S) -> Option<T>
where
    S: Stream<Item = DataResult<T, E>>,
{
    futures::pin_mut!(stream);
    while let Some(result) = stream.next().await {
        if let DataResult::Success(value) = result {
            return Some(value);
        }
    }
    None
}

/// Await the payload of the next failure, or `None` when the stream completes
/// without one.
pub async fn first_failure<S, T, E>(stream: S) -> Option<E>
where
    S: Stream<Item = DataResult<T, E>>,
{
    futures::pin_mut!(stream);
    while let Some(result) = stream.next().await {
        if let DataResult::Failure(error) = result {
            return Some(error);
        }
    }
    None
}

/// Await the next element matching `predicate`, or `None` when the stream
/// completes without one.
pub async fn first_matching<S, T, E, P>(stream: S, mut predicate: P) -> Option<DataResult<T, E>>
where
    S: Stream<Item = DataResult<T, E>>,
    P: FnMut(&DataResult<T, E>) -> bool,
{
    futures::pin_mut!(stream);
    while let Some(result) = stream.next().await {
        if predicate(&result) {
            return Some(result);
        }
    }
    None
}

/// Await the payload of the next success matching `predicate`, or `None`
/// when the stream completes without one.
///
/// # Examples
///
/// ```
/// use confluence::stream::first_success_matching;
/// use confluence::DataResult;
/// use futures::executor::block_on;
/// use futures::stream;
///
/// let found = block_on(first_success_matching(
///     stream::iter(vec![
///         DataResult::<i32, String>::success(1),
///         DataResult::failure("e".to_string()),
///         DataResult::success(4),
///     ]),
///     |value| *value > 2,
/// ));
/// assert_eq!(found, Some(4));
/// ```
pub async fn first_success_matching<S, T, E, P>(stream: S, mut predicate: P) -> Option<T>
where
    S: Stream<Item = DataResult<T, E>>,
    P: FnMut(&T) -> bool,
{
    futures::pin_mut!(stream);
    while let Some(result) = stream.next().await {
        if let DataResult::Success(value) = result {
            if predicate(&value) {
                return Some(value);
            }
        }
    }
    None
}

/// Await the payload of the next failure matching `predicate`, or `None`
/// when the stream completes without one.
pub async fn first_failure_matching<S, T, E, P>(stream: S, mut predicate: P) -> Option<E>
where
    S: Stream<Item = DataResult<T, E>>,
    P: FnMut(&E) -> bool,
{
    futures::pin_mut!(stream);
    while let Some(result) = stream.next().await {
        if let DataResult::Failure(error) = result {
            if predicate(&error) {
                return Some(error);
            }
        }
    }
    None
}

/// Await the next element, synthesizing a fallback when `timeout` elapses
/// first.
///
/// A stream that completes without emitting also falls back to
/// `handle_timeout`; the caller always receives a result.
///
/// # Examples
///
/// ```
/// # #[cfg(feature = "async")]
/// # tokio_test::block_on(async {
/// use confluence::stream::first_within;
/// use confluence::DataResult;
/// use std::time::Duration;
///
/// let result = first_within(
///     futures::stream::pending::<DataResult<i32, String>>(),
///     Duration::from_millis(10),
///     || DataResult::failure("timed out".to_string()),
/// )
/// .await;
/// assert_eq!(result, DataResult::Failure("timed out".to_string()));
/// # });
/// ```
#[cfg(feature = "async")]
pub async fn first_within<S, T, E, H>(
    stream: S,
    timeout: std::time::Duration,
    handle_timeout: H,
) -> DataResult<T, E>
where
    S: Stream<Item = DataResult<T, E>>,
    H: FnOnce() -> DataResult<T, E>,
{
    futures::pin_mut!(stream);
    match tokio::time::timeout(timeout, stream.next()).await {
        Ok(Some(result)) => result,
        Ok(None) | Err(_) => handle_timeout(),
    }
}

/// Await the next element; when `timeout` elapses first, `handle_timeout`
/// synthesizes the outcome instead.
///
/// Unlike [`first_within`], a stream that completes without emitting yields
/// `None` rather than consulting the handler, so the two outcomes stay
/// distinguishable: `None` always means the stream ended empty, and only a
/// genuine timeout reaches `handle_timeout` (which may itself choose `None`).
#[cfg(feature = "async")]
pub async fn first_or_none_within<S, T, E, H>(
    stream: S,
    timeout: std::time::Duration,
    handle_timeout: H,
) -> Option<DataResult<T, E>>
where
    S: Stream<Item = DataResult<T, E>>,
    H: FnOnce() -> Option<DataResult<T, E>>,
{
    futures::pin_mut!(stream);
    match tokio::time::timeout(timeout, stream.next()).await {
        Ok(first) => first,
        Err(_) => handle_timeout(),
    }
}
