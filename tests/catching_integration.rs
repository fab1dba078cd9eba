//! Integration tests for panic interception and bounded retry against a
//! deliberately unreliable dependency.

use std::sync::atomic::{AtomicU32, Ordering};

use confluence::catching::{self, panic_message, PanicPayload};
use confluence::DataResult;

/// Stand-in for a third-party client that panics instead of returning errors.
struct FlakyClient {
    calls: AtomicU32,
    fail_first: u32,
}

impl FlakyClient {
    fn new(fail_first: u32) -> Self {
        Self {
            calls: AtomicU32::new(0),
            fail_first,
        }
    }

    fn fetch(&self, key: &str) -> String {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        if call < self.fail_first {
            panic!("connection reset");
        }
        format!("value-for-{key}")
    }

    fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }
}

fn as_error(payload: PanicPayload) -> DataResult<String, String> {
    DataResult::failure(panic_message(&payload).to_string())
}

#[test]
fn run_catching_converts_client_panic_into_failure() {
    let client = FlakyClient::new(1);
    let result = catching::run_catching(as_error, || client.fetch("k"));
    assert_eq!(result, DataResult::Failure("connection reset".to_string()));
}

#[test]
fn retry_recovers_when_failures_are_transient() {
    let client = FlakyClient::new(2);
    let result = catching::retry_catching(3, as_error, |_| client.fetch("k"));
    assert_eq!(result, DataResult::Success("value-for-k".to_string()));
    assert_eq!(client.calls(), 3);
}

#[test]
fn retry_exhaustion_hands_last_panic_to_handler() {
    let client = FlakyClient::new(u32::MAX);
    let result = catching::retry_catching(4, as_error, |_| client.fetch("k"));
    assert_eq!(result, DataResult::Failure("connection reset".to_string()));
    assert_eq!(client.calls(), 4);
}

#[test]
fn retry_passes_zero_indexed_attempt_numbers() {
    let mut seen = Vec::new();
    let _: DataResult<String, String> = catching::retry_catching(3, as_error, |attempt| {
        seen.push(attempt);
        panic!("nope")
    });
    assert_eq!(seen, vec![0, 1, 2]);
}

#[test]
fn catching_pipeline_composes_with_plain_combinators() {
    let client = FlakyClient::new(0);

    let result: DataResult<usize, String> = catching::run_catching(as_error, || {
        client.fetch("k")
    })
    .map(|value| value.len())
    .and_then(|len| {
        if len > 0 {
            DataResult::success(len)
        } else {
            DataResult::failure("empty response".to_string())
        }
    });

    assert_eq!(result, DataResult::Success("value-for-k".len()));
}

#[test]
fn transform_catching_protects_whole_result_transform() {
    let result: DataResult<i32, String> = DataResult::<i32, String>::success(1)
        .transform_catching(
            |payload| DataResult::failure(panic_message(&payload).to_string()),
            |_| panic!("transform exploded"),
        );
    assert_eq!(result, DataResult::Failure("transform exploded".to_string()));
}

#[test]
fn combine_catching_guards_reducers_from_untrusted_code() {
    let inputs = vec![
        DataResult::<i32, String>::failure("bad a".to_string()),
        DataResult::failure("bad b".to_string()),
    ];

    let result: DataResult<i32, String> = catching::combine_catching(
        inputs,
        |payload| DataResult::failure(panic_message(&payload).to_string()),
        |_errors| -> String { panic!("reducer exploded") },
        |values| values.into_iter().sum(),
    );

    assert_eq!(result, DataResult::Failure("reducer exploded".to_string()));
}

#[test]
#[should_panic(expected = "handler exploded")]
fn handler_panics_are_never_swallowed() {
    let _: DataResult<i32, String> = catching::run_catching(
        |_| -> DataResult<i32, String> { panic!("handler exploded") },
        || -> i32 { panic!("original") },
    );
}
