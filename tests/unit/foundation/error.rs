use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        MotioError::type_mismatch("x")
            .to_string()
            .contains("type mismatch:")
    );
    assert!(MotioError::not_found("x").to_string().contains("not found:"));
    assert!(
        MotioError::malformed("x")
            .to_string()
            .contains("malformed project file:")
    );
    assert!(
        MotioError::io_failure("x")
            .to_string()
            .contains("io failure:")
    );
    assert!(
        MotioError::validation("x")
            .to_string()
            .contains("validation error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = MotioError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
