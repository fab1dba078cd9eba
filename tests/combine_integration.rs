//! End-to-end tests for the combine and merge algebras over a realistic
//! configuration-validation domain.

use confluence::{
    assert_failure_with, assert_success, combine, merge, CombineTuple, DataResult,
    DataResultIteratorExt, MergeTuple, NonEmptyVec,
};

#[derive(Clone, Debug, PartialEq)]
struct Endpoint {
    host: String,
    port: u16,
    secure: bool,
}

fn parse_host(raw: &str) -> DataResult<String, String> {
    if raw.is_empty() {
        DataResult::failure("host must not be empty".to_string())
    } else {
        DataResult::success(raw.to_string())
    }
}

fn parse_port(raw: &str) -> DataResult<u16, String> {
    match raw.parse::<u16>() {
        Ok(0) => DataResult::failure("port must not be zero".to_string()),
        Ok(port) => DataResult::success(port),
        Err(_) => DataResult::failure(format!("invalid port: {:?}", raw)),
    }
}

fn parse_scheme(raw: &str) -> DataResult<bool, String> {
    match raw {
        "https" => DataResult::success(true),
        "http" => DataResult::success(false),
        other => DataResult::failure(format!("unknown scheme: {:?}", other)),
    }
}

#[test]
fn valid_config_builds_endpoint() {
    let endpoint = (
        parse_host("example.com"),
        parse_port("8443"),
        parse_scheme("https"),
    )
        .combine_first(|(host, port, secure)| Endpoint { host, port, secure });

    assert_eq!(
        endpoint,
        DataResult::Success(Endpoint {
            host: "example.com".to_string(),
            port: 8443,
            secure: true,
        }),
    );
}

#[test]
fn first_error_policy_reports_earliest_field() {
    let endpoint = (parse_host(""), parse_port("no"), parse_scheme("ftp"))
        .combine_first(|(host, port, secure)| Endpoint { host, port, secure });

    assert_failure_with!(endpoint, "host must not be empty".to_string());
}

#[test]
fn accumulating_policy_reports_every_field() {
    let report: DataResult<Endpoint, String> =
        (parse_host(""), parse_port("no"), parse_scheme("ftp")).combine(
            |errors| errors.into_vec().join("; "),
            |(host, port, secure)| Endpoint { host, port, secure },
        );

    assert_failure_with!(
        report,
        "host must not be empty; invalid port: \"no\"; unknown scheme: \"ftp\"".to_string()
    );
}

#[test]
fn collection_combine_over_many_ports() {
    let parsed = combine::combine(
        ["80", "443", "8080"].iter().map(|raw| parse_port(raw)),
        NonEmptyVec::into_head,
        |ports| ports,
    );
    assert_eq!(parsed, DataResult::Success(vec![80, 443, 8080]));
}

#[test]
fn collection_combine_collects_errors_in_input_order() {
    let parsed: DataResult<Vec<u16>, Vec<String>> = combine::combine(
        ["80", "zero", "443", "0"].iter().map(|raw| parse_port(raw)),
        NonEmptyVec::into_vec,
        |ports| ports,
    );
    assert_eq!(
        parsed,
        DataResult::Failure(vec![
            "invalid port: \"zero\"".to_string(),
            "port must not be zero".to_string(),
        ]),
    );
}

#[test]
fn partition_splits_mixed_parse_results() {
    let (ports, errors) = ["80", "zero", "443"]
        .iter()
        .map(|raw| parse_port(raw))
        .partition_results();
    assert_eq!(ports, vec![80, 443]);
    assert_eq!(errors, vec!["invalid port: \"zero\"".to_string()]);
}

#[test]
fn merge_snapshots_from_identical_sources() {
    // Three caches answering the same query; merging flattens their hits.
    let caches = vec![
        DataResult::<Vec<&str>, String>::success(vec!["a", "b"]),
        DataResult::success(vec![]),
        DataResult::success(vec!["c"]),
    ];

    let merged = merge::merge_first(caches, |hits| {
        hits.into_iter().flatten().collect::<Vec<_>>()
    });
    assert_eq!(merged, DataResult::Success(vec!["a", "b", "c"]));
}

#[test]
fn tuple_merge_and_tuple_combine_agree() {
    let pair = || (parse_host("example.com"), parse_port("0"));

    assert_eq!(
        pair().merge_first(|(host, port)| format!("{host}:{port}")),
        pair().combine_first(|(host, port)| format!("{host}:{port}")),
    );
}

#[test]
fn flat_combine_lets_the_value_transform_reject() {
    let endpoint: DataResult<Endpoint, String> =
        (parse_host("localhost"), parse_port("80"), parse_scheme("http")).flat_combine(
            |errors| DataResult::failure(errors.into_head()),
            |(host, port, secure)| {
                if !secure && host != "localhost" {
                    DataResult::failure("plain http is only allowed locally".to_string())
                } else {
                    DataResult::success(Endpoint { host, port, secure })
                }
            },
        );
    assert_success!(endpoint);
}

#[test]
fn chained_pipeline_widens_errors() {
    #[derive(Debug, PartialEq)]
    enum AppError {
        Config(String),
    }

    impl From<String> for AppError {
        fn from(message: String) -> Self {
            AppError::Config(message)
        }
    }

    let result: DataResult<u16, AppError> =
        parse_port("8080").and_then(|port| DataResult::success(port));
    assert_eq!(result, DataResult::Success(8080));

    let result: DataResult<u16, AppError> =
        parse_port("bad").and_then(|port| DataResult::success(port));
    assert_eq!(
        result,
        DataResult::Failure(AppError::Config("invalid port: \"bad\"".to_string())),
    );
}
