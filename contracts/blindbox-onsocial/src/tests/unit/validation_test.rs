use crate::tests::test_utils::*;
use crate::validation::*;
use crate::*;

#[test]
fn valid_config_passes() {
    assert!(validate_config(&test_config(1, 1, 1)).is_ok());
    assert!(validate_config(&test_config(MAX_SUPPLY_CAP, 5, 10)).is_ok());
}

#[test]
fn per_buyer_cap_may_exceed_supply() {
    assert!(validate_config(&test_config(3, 10, 1)).is_ok());
}

#[test]
fn config_error_messages() {
    let err = validate_config(&test_config(10, 1, 0)).unwrap_err();
    assert_eq!(err.to_string(), "Configuration error: Unit price must be positive");
    let err = validate_config(&test_config(10, 0, 1)).unwrap_err();
    assert_eq!(err.to_string(), "Configuration error: Per-buyer cap must be positive");
}

#[test]
fn metadata_fields_required() {
    assert!(validate_metadata(&test_metadata()).is_ok());

    let mut metadata = test_metadata();
    metadata.name = String::new();
    assert!(matches!(
        validate_metadata(&metadata).unwrap_err(),
        BlindBoxError::Configuration(_)
    ));

    let mut metadata = test_metadata();
    metadata.symbol = "S".repeat(MAX_NAME_LEN + 1);
    assert!(validate_metadata(&metadata).is_err());

    let mut metadata = test_metadata();
    metadata.icon = Some("i".repeat(MAX_URI_LEN + 1));
    assert!(validate_metadata(&metadata).is_err());

    let mut metadata = test_metadata();
    metadata.icon = Some("data:image/svg+xml,<svg/>".to_string());
    assert!(validate_metadata(&metadata).is_ok());
}

#[test]
fn revealed_base_bounds() {
    assert!(validate_revealed_base("ipfs://x/").is_ok());
    assert!(validate_revealed_base(&"u".repeat(MAX_URI_LEN)).is_ok());
    assert!(matches!(
        validate_revealed_base("").unwrap_err(),
        BlindBoxError::InvalidInput(_)
    ));
    assert!(validate_revealed_base(&"u".repeat(MAX_URI_LEN + 1)).is_err());
}
