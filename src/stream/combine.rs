//! Combine-latest joins over result streams
//!
//! [`combine_latest`] is the primitive: it pairs every emission of either
//! input with the most recent value of the other, staying silent until both
//! sides have emitted at least once. The N-ary latest joins nest it; the
//! result-level functions (`flat_combine2..6`, `combine2..6`,
//! `combine_first2..6`, `combine_all`) re-run the synchronous combine algebra
//! on each fresh tuple of latest results, so their error policies are exactly
//! those of [`crate::combine`].
//!
//! The merge aliases (`merge2..6` and friends) delegate to the combine
//! implementations, mirroring [`crate::merge`].
//!
//! # Examples
//!
//! ```
//! use confluence::stream::combine::combine_first2;
//! use confluence::DataResult;
//! use futures::executor::block_on;
//! use futures::stream::{self, StreamExt};
//!
//! let totals: Vec<_> = block_on(
//!     combine_first2(
//!         stream::iter(vec![DataResult::<i32, String>::success(1)]),
//!         stream::iter(vec![DataResult::<i32, String>::success(10)]),
//!         |(a, b)| a + b,
//!     )
//!     .collect(),
//! );
//! assert_eq!(totals, vec![DataResult::Success(11)]);
//! ```

use futures::future::{ready, Either};
use futures::stream::{select, select_all, Stream, StreamExt};

use crate::{CombineTuple, DataResult, NonEmptyVec};

/// Join two streams, emitting the latest pair on every input emission once
/// both sides have seeded.
///
/// Nothing is emitted until each input has produced at least one value; the
/// output completes when both inputs have completed.
pub fn combine_latest<A, B, SA, SB>(a: SA, b: SB) -> impl Stream<Item = (A, B)>
where
    A: Clone,
    B: Clone,
    SA: Stream<Item = A>,
    SB: Stream<Item = B>,
{
    select(a.map(Either::Left), b.map(Either::Right))
        .scan((None, None), |latest, item| {
            match item {
                Either::Left(a) => latest.0 = Some(a),
                Either::Right(b) => latest.1 = Some(b),
            }
            ready(Some(latest.0.clone().zip(latest.1.clone())))
        })
        .filter_map(ready)
}

/// Three-way [`combine_latest`].
pub fn combine_latest3<A, B, C, SA, SB, SC>(a: SA, b: SB, c: SC) -> impl Stream<Item = (A, B, C)>
where
    A: Clone,
    B: Clone,
    C: Clone,
    SA: Stream<Item = A>,
    SB: Stream<Item = B>,
    SC: Stream<Item = C>,
{
    combine_latest(combine_latest(a, b), c).map(|((a, b), c)| (a, b, c))
}

/// Four-way [`combine_latest`].
pub fn combine_latest4<A, B, C, D, SA, SB, SC, SD>(
    a: SA,
    b: SB,
    c: SC,
    d: SD,
) -> impl Stream<Item = (A, B, C, D)>
where
    A: Clone,
    B: Clone,
    C: Clone,
    D: Clone,
    SA: Stream<Item = A>,
    SB: Stream<Item = B>,
    SC: Stream<Item = C>,
    SD: Stream<Item = D>,
{
    combine_latest(combine_latest3(a, b, c), d).map(|((a, b, c), d)| (a, b, c, d))
}

/// Five-way [`combine_latest`].
pub fn combine_latest5<A, B, C, D, Ev, SA, SB, SC, SD, SE>(
    a: SA,
    b: SB,
    c: SC,
    d: SD,
    e: SE,
) -> impl Stream<Item = (A, B, C, D, Ev)>
where
    A: Clone,
    B: Clone,
    C: Clone,
    D: Clone,
    Ev: Clone,
    SA: Stream<Item = A>,
    SB: Stream<Item = B>,
    SC: Stream<Item = C>,
    SD: Stream<Item = D>,
    SE: Stream<Item = Ev>,
{
    combine_latest(combine_latest4(a, b, c, d), e).map(|((a, b, c, d), e)| (a, b, c, d, e))
}

/// Six-way [`combine_latest`].
#[allow(clippy::too_many_arguments)]
pub fn combine_latest6<A, B, C, D, Ev, Fv, SA, SB, SC, SD, SE, SF>(
    a: SA,
    b: SB,
    c: SC,
    d: SD,
    e: SE,
    f: SF,
) -> impl Stream<Item = (A, B, C, D, Ev, Fv)>
where
    A: Clone,
    B: Clone,
    C: Clone,
    D: Clone,
    Ev: Clone,
    Fv: Clone,
    SA: Stream<Item = A>,
    SB: Stream<Item = B>,
    SC: Stream<Item = C>,
    SD: Stream<Item = D>,
    SE: Stream<Item = Ev>,
    SF: Stream<Item = Fv>,
{
    combine_latest(combine_latest5(a, b, c, d, e), f)
        .map(|((a, b, c, d, e), f)| (a, b, c, d, e, f))
}

/// Homogeneous N-way [`combine_latest`] over a `Vec` of streams.
///
/// Emits the full vector of latest values, in input order, on every emission
/// once each stream has seeded. An empty input vector yields an empty output
/// stream.
pub fn combine_latest_all<S, T>(streams: Vec<S>) -> impl Stream<Item = Vec<T>>
where
    S: Stream<Item = T> + Unpin,
    T: Clone,
{
    let len = streams.len();
    let tagged = streams
        .into_iter()
        .enumerate()
        .map(|(index, stream)| stream.map(move |item| (index, item)));
    select_all(tagged)
        .scan(vec![None; len], |latest, (index, item)| {
            latest[index] = Some(item);
            ready(Some(latest.iter().cloned().collect::<Option<Vec<T>>>()))
        })
        .filter_map(ready)
}

macro_rules! impl_stream_result_combine {
    (
        $latest:ident,
        $flat_combine:ident, $combine:ident, $combine_first:ident,
        $flat_merge:ident, $merge:ident, $merge_first:ident,
        $(($S:ident, $T:ident, $arg:ident)),+
    ) => {
        /// Re-run [`CombineTuple::flat_combine`] on each fresh tuple of
        /// latest results.
        pub fn $flat_combine<$($S, $T,)+ E, R, F, TE, TV>(
            $($arg: $S,)+
            mut transform_errors: TE,
            mut transform_values: TV,
        ) -> impl Stream<Item = DataResult<R, F>>
        where
            $($S: Stream<Item = DataResult<$T, E>>,)+
            $($T: Clone,)+
            E: Clone,
            TE: FnMut(NonEmptyVec<E>) -> DataResult<R, F>,
            TV: FnMut(($($T,)+)) -> DataResult<R, F>,
        {
            $latest($($arg),+)
                .map(move |results| results.flat_combine(&mut transform_errors, &mut transform_values))
        }

        /// Re-run [`CombineTuple::combine`] on each fresh tuple of latest
        /// results.
        pub fn $combine<$($S, $T,)+ E, R, F, TE, TV>(
            $($arg: $S,)+
            mut transform_errors: TE,
            mut transform_values: TV,
        ) -> impl Stream<Item = DataResult<R, F>>
        where
            $($S: Stream<Item = DataResult<$T, E>>,)+
            $($T: Clone,)+
            E: Clone,
            TE: FnMut(NonEmptyVec<E>) -> F,
            TV: FnMut(($($T,)+)) -> R,
        {
            $latest($($arg),+)
                .map(move |results| results.combine(&mut transform_errors, &mut transform_values))
        }

        /// Re-run [`CombineTuple::combine_first`] on each fresh tuple of
        /// latest results.
        pub fn $combine_first<$($S, $T,)+ E, R, TV>(
            $($arg: $S,)+
            mut transform_values: TV,
        ) -> impl Stream<Item = DataResult<R, E>>
        where
            $($S: Stream<Item = DataResult<$T, E>>,)+
            $($T: Clone,)+
            E: Clone,
            TV: FnMut(($($T,)+)) -> R,
        {
            $latest($($arg),+)
                .map(move |results| results.combine_first(&mut transform_values))
        }

        /// Merge alias; identical to the combine form.
        pub fn $flat_merge<$($S, $T,)+ E, R, F, TE, TV>(
            $($arg: $S,)+
            transform_errors: TE,
            transform_values: TV,
        ) -> impl Stream<Item = DataResult<R, F>>
        where
            $($S: Stream<Item = DataResult<$T, E>>,)+
            $($T: Clone,)+
            E: Clone,
            TE: FnMut(NonEmptyVec<E>) -> DataResult<R, F>,
            TV: FnMut(($($T,)+)) -> DataResult<R, F>,
        {
            $flat_combine($($arg,)+ transform_errors, transform_values)
        }

        /// Merge alias; identical to the combine form.
        pub fn $merge<$($S, $T,)+ E, R, F, TE, TV>(
            $($arg: $S,)+
            transform_errors: TE,
            transform_values: TV,
        ) -> impl Stream<Item = DataResult<R, F>>
        where
            $($S: Stream<Item = DataResult<$T, E>>,)+
            $($T: Clone,)+
            E: Clone,
            TE: FnMut(NonEmptyVec<E>) -> F,
            TV: FnMut(($($T,)+)) -> R,
        {
            $combine($($arg,)+ transform_errors, transform_values)
        }

        /// Merge alias; identical to the combine form.
        pub fn $merge_first<$($S, $T,)+ E, R, TV>(
            $($arg: $S,)+
            transform_values: TV,
        ) -> impl Stream<Item = DataResult<R, E>>
        where
            $($S: Stream<Item = DataResult<$T, E>>,)+
            $($T: Clone,)+
            E: Clone,
            TV: FnMut(($($T,)+)) -> R,
        {
            $combine_first($($arg,)+ transform_values)
        }
    };
}

impl_stream_result_combine!(
    combine_latest,
    flat_combine2, combine2, combine_first2,
    flat_merge2, merge2, merge_first2,
    (S1, T1, a), (S2, T2, b)
);
impl_stream_result_combine!(
    combine_latest3,
    flat_combine3, combine3, combine_first3,
    flat_merge3, merge3, merge_first3,
    (S1, T1, a), (S2, T2, b), (S3, T3, c)
);
impl_stream_result_combine!(
    combine_latest4,
    flat_combine4, combine4, combine_first4,
    flat_merge4, merge4, merge_first4,
    (S1, T1, a), (S2, T2, b), (S3, T3, c), (S4, T4, d)
);
impl_stream_result_combine!(
    combine_latest5,
    flat_combine5, combine5, combine_first5,
    flat_merge5, merge5, merge_first5,
    (S1, T1, a), (S2, T2, b), (S3, T3, c), (S4, T4, d), (S5, T5, e)
);
impl_stream_result_combine!(
    combine_latest6,
    flat_combine6, combine6, combine_first6,
    flat_merge6, merge6, merge_first6,
    (S1, T1, a), (S2, T2, b), (S3, T3, c), (S4, T4, d), (S5, T5, e), (S6, T6, f)
);

/// Arbitrary-arity stream combine over a `Vec` of homogeneous result
/// streams: [`crate::combine::combine`] re-run on each fresh vector of
/// latest results.
pub fn combine_all<S, T, E, R, F, TE, TV>(
    streams: Vec<S>,
    mut transform_errors: TE,
    mut transform_values: TV,
) -> impl Stream<Item = DataResult<R, F>>
where
    S: Stream<Item = DataResult<T, E>> + Unpin,
    T: Clone,
    E: Clone,
    TE: FnMut(NonEmptyVec<E>) -> F,
    TV: FnMut(Vec<T>) -> R,
{
    combine_latest_all(streams).map(move |results| {
        crate::combine::combine(results, &mut transform_errors, &mut transform_values)
    })
}

/// [`combine_all`] under the canonical first-error policy.
pub fn combine_first_all<S, T, E, R, TV>(
    streams: Vec<S>,
    mut transform_values: TV,
) -> impl Stream<Item = DataResult<R, E>>
where
    S: Stream<Item = DataResult<T, E>> + Unpin,
    T: Clone,
    E: Clone,
    TV: FnMut(Vec<T>) -> R,
{
    combine_latest_all(streams)
        .map(move |results| crate::combine::combine_first(results, &mut transform_values))
}

/// Merge alias for [`combine_all`].
pub fn merge_all<S, T, E, R, F, TE, TV>(
    streams: Vec<S>,
    transform_errors: TE,
    transform_values: TV,
) -> impl Stream<Item = DataResult<R, F>>
where
    S: Stream<Item = DataResult<T, E>> + Unpin,
    T: Clone,
    E: Clone,
    TE: FnMut(NonEmptyVec<E>) -> F,
    TV: FnMut(Vec<T>) -> R,
{
    combine_all(streams, transform_errors, transform_values)
}
