use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        TimelineError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        TimelineError::schedule("x")
            .to_string()
            .contains("schedule error:")
    );
    assert!(
        TimelineError::config("x")
            .to_string()
            .contains("config error:")
    );
    assert!(
        TimelineError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = TimelineError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn json_errors_map_to_serde() {
    let err: TimelineError = serde_json::from_str::<serde_json::Value>("{")
        .unwrap_err()
        .into();
    assert!(matches!(err, TimelineError::Serde(_)));
}
