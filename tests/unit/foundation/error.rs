use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        LayersError::type_error("x")
            .to_string()
            .contains("type error:")
    );
    assert!(LayersError::shape("x").to_string().contains("shape error:"));
    assert!(
        LayersError::config("x")
            .to_string()
            .contains("config error:")
    );
    assert!(
        LayersError::duplicate_name("x")
            .to_string()
            .contains("duplicate name:")
    );
    assert!(LayersError::not_found("x").to_string().contains("not found:"));
    assert!(
        LayersError::invalid_argument("x")
            .to_string()
            .contains("invalid argument:")
    );
}

#[test]
fn kind_matches_variant() {
    assert_eq!(LayersError::shape("x").kind(), ErrorKind::Shape);
    assert_eq!(LayersError::not_found("x").kind(), ErrorKind::NotFound);
    assert_eq!(
        LayersError::duplicate_name("x").kind(),
        ErrorKind::DuplicateName
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = LayersError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
    assert_eq!(err.kind(), ErrorKind::Other);
}
