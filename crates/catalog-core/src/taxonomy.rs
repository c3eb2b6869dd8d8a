//! Static product type taxonomy.
//!
//! The taxonomy ships inside the binary as JSON and is decoded once at
//! startup.

use crate::error::CatalogResult;
use crate::types::ProductType;

const PRODUCT_TYPES_JSON: &str = include_str!("../data/product_types.json");

/// Decode a taxonomy document
pub fn parse_product_types(json: &str) -> CatalogResult<Vec<ProductType>> {
    let types: Vec<ProductType> = serde_json::from_str(json)?;
    tracing::debug!(count = types.len(), "Loaded product types");
    Ok(types)
}

/// The built-in taxonomy
pub fn default_product_types() -> CatalogResult<Vec<ProductType>> {
    parse_product_types(PRODUCT_TYPES_JSON)
}

/// Total number of selectable rows (groups plus their children)
pub fn option_count(types: &[ProductType]) -> usize {
    types
        .iter()
        .map(|t| 1 + t.children.as_ref().map_or(0, Vec::len))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_taxonomy_decodes() {
        let types = default_product_types().unwrap();
        assert_eq!(types[0].label, "Fresh produce");
        assert!(types[0].is_group());
        assert_eq!(types[0].children.as_ref().unwrap()[0].label, "Vegetables");
        assert_eq!(types[1].label, "Meat");
        assert!(types.iter().any(|t| t.label == "Bakery"));
        assert!(types.iter().any(|t| t.label == "Pet supplies"));
    }

    #[test]
    fn option_count_includes_children() {
        let types = default_product_types().unwrap();
        assert_eq!(option_count(&types), types.len() + 1);
    }

    #[test]
    fn malformed_taxonomy_is_an_error() {
        assert!(parse_product_types("[{\"label\": 1}]").is_err());
    }
}
