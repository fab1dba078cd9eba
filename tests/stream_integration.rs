//! Integration tests for the stream bridge, driven by channels so the
//! interleaving of emissions is fully deterministic.

use confluence::stream::combine::{combine_first2, combine_latest};
use confluence::stream::{flat_map_latest_result, DataResultStreamExt};
use confluence::DataResult;
use futures::channel::mpsc;
use futures::stream::{self, StreamExt};

#[tokio::test]
async fn combine_latest_pairs_with_most_recent_value() {
    let (tx_a, rx_a) = mpsc::unbounded();
    let (tx_b, rx_b) = mpsc::unbounded();

    let combined = combine_latest(rx_a, rx_b);
    futures::pin_mut!(combined);

    // Nothing can come out before both sides have seeded.
    tx_a.unbounded_send("A1").unwrap();
    tx_b.unbounded_send("B1").unwrap();
    assert_eq!(combined.next().await, Some(("A1", "B1")));

    // A fresh left value pairs with the retained right value.
    tx_a.unbounded_send("A2").unwrap();
    assert_eq!(combined.next().await, Some(("A2", "B1")));

    // And symmetrically for the right side.
    tx_b.unbounded_send("B2").unwrap();
    assert_eq!(combined.next().await, Some(("A2", "B2")));

    drop(tx_a);
    drop(tx_b);
    assert_eq!(combined.next().await, None);
}

#[tokio::test]
async fn combine_first2_reevaluates_policy_on_each_emission() {
    let (tx_a, rx_a) = mpsc::unbounded::<DataResult<i32, String>>();
    let (tx_b, rx_b) = mpsc::unbounded::<DataResult<i32, String>>();

    let totals = combine_first2(rx_a, rx_b, |(a, b)| a + b);
    futures::pin_mut!(totals);

    tx_a.unbounded_send(DataResult::failure("a down".to_string())).unwrap();
    tx_b.unbounded_send(DataResult::success(10)).unwrap();
    assert_eq!(
        totals.next().await,
        Some(DataResult::Failure("a down".to_string())),
    );

    // Once the left side recovers, the same pair of latest values combines
    // successfully.
    tx_a.unbounded_send(DataResult::success(1)).unwrap();
    assert_eq!(totals.next().await, Some(DataResult::Success(11)));

    drop(tx_a);
    drop(tx_b);
    assert_eq!(totals.next().await, None);
}

#[tokio::test]
async fn switch_latest_cancels_superseded_inner_stream() {
    let (out_tx, out_rx) = mpsc::unbounded::<DataResult<u32, String>>();
    let (c1_tx, c1_rx) = mpsc::unbounded::<DataResult<&str, String>>();
    let (c2_tx, c2_rx) = mpsc::unbounded::<DataResult<&str, String>>();

    let mut inners = vec![c1_rx, c2_rx].into_iter();
    let switched = flat_map_latest_result(out_rx, move |_n| {
        inners.next().expect("one inner stream per outer success")
    });
    futures::pin_mut!(switched);

    c1_tx.unbounded_send(DataResult::success("one-a")).unwrap();
    out_tx.unbounded_send(DataResult::success(1)).unwrap();
    assert_eq!(switched.next().await, Some(DataResult::Success("one-a")));

    // Queue a stale element on the first inner stream, then switch. The
    // stale element must never surface.
    c1_tx.unbounded_send(DataResult::success("one-b")).unwrap();
    c2_tx.unbounded_send(DataResult::success("two-a")).unwrap();
    out_tx.unbounded_send(DataResult::success(2)).unwrap();
    assert_eq!(switched.next().await, Some(DataResult::Success("two-a")));

    drop(out_tx);
    drop(c2_tx);
    assert_eq!(switched.next().await, None);
}

#[tokio::test]
async fn switch_latest_turns_outer_failure_into_single_emission() {
    let (out_tx, out_rx) = mpsc::unbounded::<DataResult<u32, String>>();

    let switched = flat_map_latest_result(out_rx, |n| {
        stream::iter(vec![DataResult::<u32, String>::success(n * 10)])
    });
    futures::pin_mut!(switched);

    out_tx.unbounded_send(DataResult::success(1)).unwrap();
    assert_eq!(switched.next().await, Some(DataResult::Success(10)));

    out_tx
        .unbounded_send(DataResult::failure("source gone".to_string()))
        .unwrap();
    assert_eq!(
        switched.next().await,
        Some(DataResult::Failure("source gone".to_string())),
    );

    // The failure is a one-shot: a later success resumes normal switching.
    out_tx.unbounded_send(DataResult::success(2)).unwrap();
    assert_eq!(switched.next().await, Some(DataResult::Success(20)));

    drop(out_tx);
    assert_eq!(switched.next().await, None);
}

#[tokio::test]
async fn per_element_pipeline_over_live_channel() {
    let (tx, rx) = mpsc::unbounded::<DataResult<i32, String>>();

    let pipeline = rx
        .and_then_result(|x| {
            if x >= 0 {
                DataResult::success(x * 2)
            } else {
                DataResult::failure(format!("negative input: {x}"))
            }
        })
        .recover_result(|_| 0);
    futures::pin_mut!(pipeline);

    tx.unbounded_send(DataResult::success(3)).unwrap();
    assert_eq!(pipeline.next().await, Some(DataResult::Success(6)));

    tx.unbounded_send(DataResult::success(-1)).unwrap();
    assert_eq!(pipeline.next().await, Some(DataResult::Success(0)));

    tx.unbounded_send(DataResult::failure("upstream".to_string()))
        .unwrap();
    assert_eq!(pipeline.next().await, Some(DataResult::Success(0)));

    drop(tx);
    assert_eq!(pipeline.next().await, None);
}
