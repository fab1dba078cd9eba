//! Switch-latest: derive an inner stream from each success, newest wins
//!
//! [`flat_map_latest_result`] mirrors the switching join: every outer element
//! supersedes whatever inner stream is currently live. Dropping the previous
//! inner stream is the cancellation mechanism; once replaced, a stale inner
//! stream can never emit again.

use std::pin::Pin;
use std::task::{Context, Poll};

use futures::stream::Stream;

use crate::DataResult;

/// Map each outer success to an inner result stream, forwarding only the
/// most recent inner stream's elements.
///
/// An outer failure replaces the live inner stream with a single failure
/// emission (error widened via `Into`). The output completes once the outer
/// stream has completed and the last inner stream is exhausted.
///
/// # Examples
///
/// ```
/// use confluence::stream::flat_map_latest_result;
/// use confluence::DataResult;
/// use futures::executor::block_on;
/// use futures::stream::{self, StreamExt};
///
/// let outer = stream::iter(vec![
///     DataResult::<i32, String>::success(1),
///     DataResult::success(2),
/// ]);
/// let out: Vec<DataResult<i32, String>> = block_on(
///     flat_map_latest_result(outer, |n| {
///         stream::iter(vec![DataResult::success(n * 10)])
///     })
///     .collect(),
/// );
/// // Both outer elements were available up front, so the second superseded
/// // the first before its inner stream ever emitted.
/// assert_eq!(out, vec![DataResult::Success(20)]);
/// ```
pub fn flat_map_latest_result<S, T, E, R, F, InnerS, Op>(
    outer: S,
    transform: Op,
) -> impl Stream<Item = DataResult<R, F>>
where
    S: Stream<Item = DataResult<T, E>> + Unpin,
    InnerS: Stream<Item = DataResult<R, F>> + Unpin,
    E: Into<F>,
    Op: FnMut(T) -> InnerS,
{
    FlatMapLatest {
        outer,
        outer_done: false,
        transform,
        inner: Inner::Idle,
    }
}

enum Inner<InnerS, F> {
    Idle,
    Live(InnerS),
    Failed(Option<F>),
}

struct FlatMapLatest<S, InnerS, Op, F> {
    outer: S,
    outer_done: bool,
    transform: Op,
    inner: Inner<InnerS, F>,
}

impl<S: Unpin, InnerS: Unpin, Op, F> Unpin for FlatMapLatest<S, InnerS, Op, F> {}

impl<S, T, E, R, F, InnerS, Op> Stream for FlatMapLatest<S, InnerS, Op, F>
where
    S: Stream<Item = DataResult<T, E>> + Unpin,
    InnerS: Stream<Item = DataResult<R, F>> + Unpin,
    E: Into<F>,
    Op: FnMut(T) -> InnerS,
{
    type Item = DataResult<R, F>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();

        // Drain the outer stream first: the newest outer element decides
        // which inner stream is live, and assigning over the old one drops
        // (cancels) it.
        while !this.outer_done {
            match Pin::new(&mut this.outer).poll_next(cx) {
                Poll::Ready(Some(DataResult::Success(value))) => {
                    this.inner = Inner::Live((this.transform)(value));
                }
                Poll::Ready(Some(DataResult::Failure(error))) => {
                    this.inner = Inner::Failed(Some(error.into()));
                }
                Poll::Ready(None) => this.outer_done = true,
                Poll::Pending => break,
            }
        }

        match &mut this.inner {
            Inner::Idle => {
                if this.outer_done {
                    Poll::Ready(None)
                } else {
                    Poll::Pending
                }
            }
            Inner::Failed(slot) => match slot.take() {
                Some(error) => Poll::Ready(Some(DataResult::Failure(error))),
                None => {
                    this.inner = Inner::Idle;
                    if this.outer_done {
                        Poll::Ready(None)
                    } else {
                        Poll::Pending
                    }
                }
            },
            Inner::Live(inner) => match Pin::new(inner).poll_next(cx) {
                Poll::Ready(Some(item)) => Poll::Ready(Some(item)),
                Poll::Ready(None) => {
                    this.inner = Inner::Idle;
                    if this.outer_done {
                        Poll::Ready(None)
                    } else {
                        Poll::Pending
                    }
                }
                Poll::Pending => Poll::Pending,
            },
        }
    }
}
