//! Tests for the optional `serde` and `tracing` integrations.

#[cfg(feature = "serde")]
mod serde_support {
    use confluence::DataResult;

    #[test]
    fn variants_serialize_externally_tagged() {
        let success: DataResult<i32, String> = DataResult::success(1);
        assert_eq!(serde_json::to_string(&success).unwrap(), r#"{"Success":1}"#);

        let failure: DataResult<i32, String> = DataResult::failure("bad".to_string());
        assert_eq!(
            serde_json::to_string(&failure).unwrap(),
            r#"{"Failure":"bad"}"#
        );
    }

    #[test]
    fn deserialization_restores_the_variant() {
        let restored: DataResult<i32, String> =
            serde_json::from_str(r#"{"Failure":"bad"}"#).unwrap();
        assert_eq!(restored, DataResult::Failure("bad".to_string()));
    }
}

#[cfg(feature = "tracing")]
mod tracing_support {
    use confluence::catching;
    use confluence::DataResult;

    #[test]
    fn retry_emits_events_without_altering_behaviour() {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();

        let result: DataResult<i32, String> = catching::retry_catching(
            2,
            |_| DataResult::failure("exhausted".to_string()),
            |attempt| {
                if attempt == 0 {
                    panic!("first try fails");
                }
                7
            },
        );
        assert_eq!(result, DataResult::Success(7));
    }
}
