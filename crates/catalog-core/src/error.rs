//! Error types for the catalog

use thiserror::Error;

/// Main error type for catalog operations
///
/// Form validation messages shown next to inputs are not errors in this
/// sense; they live on [`crate::InputState`]. This type covers failures a
/// caller has to handle in code.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Configuration value was rejected
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Embedded product type taxonomy could not be decoded
    #[error("Taxonomy error: {0}")]
    Taxonomy(#[from] serde_json::Error),

    /// Required form field was empty
    #[error("Missing field: {0}")]
    MissingField(&'static str),

    /// Price text was not a usable number
    #[error("Invalid price: {0}")]
    InvalidPrice(String),

    /// Product submitted without any product type
    #[error("At least one product type is required")]
    NoProductType,
}

/// Result type alias using CatalogError
pub type CatalogResult<T> = Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CatalogError::MissingField("sku");
        assert_eq!(format!("{}", err), "Missing field: sku");

        let err = CatalogError::InvalidPrice("abc".to_string());
        assert_eq!(err.to_string(), "Invalid price: abc");
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<Vec<u8>>("not json").unwrap_err();
        let err: CatalogError = json_err.into();
        assert!(matches!(err, CatalogError::Taxonomy(_)));
    }
}
