use mftf_semver_core::errors::{ExError, ExErrorKind, MalformedArtifactError};
use mftf_semver_core::model::{ActionGroup, ArtifactKind, Step, Test};
use mftf_semver_core::ClassifierConfig;

#[test]
fn test_duplicate_step_key_verifiable_by_kind() {
    let err = ActionGroup::builder("AG1")
        .action(Step::new("click1", "click"))
        .action(Step::new("click1", "doubleClick"))
        .build()
        .unwrap_err();

    assert_eq!(
        err,
        MalformedArtifactError::DuplicateKey {
            kind: ArtifactKind::ActionGroup,
            entity: "AG1".to_string(),
            collection: "Actions".to_string(),
            key: "click1".to_string(),
        }
    );

    let ex_err: ExError = err.into();
    assert_eq!(ex_err.kind(), ExErrorKind::DuplicateKey);
    assert_eq!(ex_err.code(), "ERR_DUPLICATE_KEY");
    assert_eq!(ex_err.artifact_kind(), Some(ArtifactKind::ActionGroup));
    assert_eq!(ex_err.entity(), Some("AG1"));
    assert!(ex_err.message().contains("click1"));
}

#[test]
fn test_missing_name_distinct_from_duplicate() {
    let err = Test::builder("").build().unwrap_err();

    let ex_err: ExError = err.into();
    assert_eq!(ex_err.kind(), ExErrorKind::MissingIdentifier);
    assert_eq!(ex_err.code(), "ERR_MISSING_IDENTIFIER");
    assert_ne!(ex_err.kind(), ExErrorKind::DuplicateKey);
    assert_eq!(ex_err.artifact_kind(), Some(ArtifactKind::Test));
}

#[test]
fn test_repeated_scalar_annotation_is_duplicate_key() {
    let err = Test::builder("SampleTest")
        .annotation("severity", "MAJOR")
        .annotation("severity", "MINOR")
        .build()
        .unwrap_err();

    assert_eq!(err.error_kind(), ExErrorKind::DuplicateKey);
    assert_eq!(err.artifact_kind(), ArtifactKind::Test);
}

#[test]
fn test_repeated_group_annotation_is_accepted() {
    let test = Test::builder("SampleTest")
        .annotation("group", "smoke")
        .annotation("group", "checkout")
        .build();

    assert!(test.is_ok());
}

#[test]
fn test_invalid_config_structured_fields() {
    let err = ClassifierConfig::from_toml_str("parallel = \"yes\"").unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::InvalidConfig);
    assert_eq!(err.code(), "ERR_INVALID_CONFIG");
    assert_eq!(err.op(), Some("load_config"));
    assert!(!err.message().is_empty());
    assert!(!err.kind().is_malformed_artifact());
}

#[test]
fn test_serialization_error_converts() {
    let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let ex_err: ExError = json_err.into();

    assert_eq!(ex_err.kind(), ExErrorKind::Serialization);
    assert_eq!(ex_err.code(), "ERR_SERIALIZATION");
}

#[test]
fn test_error_kind_code_mapping() {
    // Each kind has a stable, unique code
    let kinds = vec![
        (ExErrorKind::DuplicateKey, "ERR_DUPLICATE_KEY"),
        (ExErrorKind::DuplicateEntity, "ERR_DUPLICATE_ENTITY"),
        (ExErrorKind::MissingIdentifier, "ERR_MISSING_IDENTIFIER"),
        (ExErrorKind::InvalidConfig, "ERR_INVALID_CONFIG"),
        (ExErrorKind::Serialization, "ERR_SERIALIZATION"),
        (ExErrorKind::Internal, "ERR_INTERNAL"),
    ];

    for (kind, expected_code) in kinds {
        assert_eq!(kind.code(), expected_code);
    }
}

#[test]
fn test_error_display_includes_context() {
    let err = MalformedArtifactError::DuplicateEntity {
        kind: ArtifactKind::Data,
        name: "DataEntity1".to_string(),
    };
    let ex_err: ExError = err.into();

    assert_eq!(
        ex_err.to_string(),
        "[ERR_DUPLICATE_ENTITY]: duplicate Data entity 'DataEntity1' \
         (kind: Data) (entity: DataEntity1)"
    );
}
