//! Edge case and boundary condition tests

use catalog_core::input::parse_number;
use catalog_core::{
    format_price, CatalogError, InputSpec, InputState, ProductType, SelectState, StoreConfig,
    DEFAULT_PLACEHOLDER,
};

// ============================================================================
// Input boundaries
// ============================================================================

/// A value exactly at max is kept as typed
#[test]
fn test_value_at_max_is_kept() {
    let spec = InputSpec::number().max(200.0);
    let mut state = InputState::default();
    state.update(&spec, "200.0");
    assert_eq!(state.value, "200.0");
}

/// A value exactly at min raises no error
#[test]
fn test_value_at_min_is_valid() {
    let spec = InputSpec::number().min(100.0).error_message("min is {min}");
    let mut state = InputState::default();
    state.update(&spec, "100");
    assert!(state.error.is_none());
}

/// Clearing a non-required number field is fine
#[test]
fn test_empty_optional_number() {
    let spec = InputSpec::number().min(1.0);
    let mut state = InputState::default();
    state.update(&spec, "5");
    state.update(&spec, "");
    state.blur(&spec);
    assert!(state.error.is_none());
    assert_eq!(state.value, "");
}

/// Whitespace-only counts as empty for required fields
#[test]
fn test_whitespace_is_empty_for_required() {
    let spec = InputSpec::text().required();
    let mut state = InputState::default();
    state.update(&spec, "   ");
    assert_eq!(state.error.as_deref(), Some("This field is required"));
}

/// The validator is not run on an empty value
#[test]
fn test_validator_skips_empty() {
    let spec = InputSpec::text().validator(|_| false);
    let mut state = InputState::default();
    state.update(&spec, "");
    state.blur(&spec);
    assert!(state.error.is_none());
}

/// Fraction digits round rather than truncate
#[test]
fn test_fraction_digits_round() {
    let spec = InputSpec::number().fraction_digits(2);
    let mut state = InputState::default();
    state.update(&spec, "1.006");
    state.blur(&spec);
    assert_eq!(state.value, "1.01");
}

/// Placeholders without a configured bound are left alone
#[test]
fn test_unknown_placeholder_untouched() {
    let spec = InputSpec::text().required().error_message("max is {max}");
    assert_eq!(spec.message(catalog_core::Failure::Required), "max is {max}");
}

#[test]
fn test_parse_number_rejects_non_finite() {
    assert_eq!(parse_number(" 42 "), Some(42.0));
    assert_eq!(parse_number("NaN"), None);
    assert_eq!(parse_number("inf"), None);
    assert_eq!(parse_number(""), None);
}

// ============================================================================
// Select boundaries
// ============================================================================

/// Empty option set shows the placeholder and ignores clicks
#[test]
fn test_select_without_options() {
    let mut select = SelectState::new(vec![], false);
    assert!(select.visible_options().is_empty());
    assert!(!select.choose(0));
    assert_eq!(select.display_label(), DEFAULT_PLACEHOLDER);
}

/// A group with no children is still a non-selectable header
#[test]
fn test_empty_group() {
    let mut select = SelectState::new(vec![ProductType::group("Empty", "empty", vec![])], false);
    assert_eq!(select.visible_options().len(), 1);
    assert!(!select.choose(0));
}

#[test]
fn test_custom_placeholder() {
    let select = SelectState::new(vec![], true).with_placeholder("Pick types");
    assert_eq!(select.display_label(), "Pick types");
}

/// Clearing resets selection and search
#[test]
fn test_select_clear() {
    let mut select = SelectState::new(vec![ProductType::leaf("Meat", "meat")], true);
    select.set_search("me");
    select.choose(0);
    select.clear();
    assert_eq!(select.display_label(), DEFAULT_PLACEHOLDER);
    assert_eq!(select.search(), "");
    assert!(!select.is_open());
}

// ============================================================================
// Formatting and config
// ============================================================================

#[test]
fn test_price_rounding_carries() {
    assert_eq!(format_price(999.999), "1,000.00");
    assert_eq!(format_price(0.005), "0.01");
}

#[test]
fn test_config_error_message() {
    let err = StoreConfig::resolve_from(None, Some("ten"), None).unwrap_err();
    assert!(matches!(err, CatalogError::InvalidConfig(_)));
    assert!(err.to_string().contains("STORE_ADD_PRODUCT_MAX_PRICE"));
}
