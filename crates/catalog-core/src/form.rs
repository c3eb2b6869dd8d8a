//! Add-product form.
//!
//! Field constraints for the modal form and the conversion from what the
//! user entered into a [`Product`].

use crate::config::StoreConfig;
use crate::error::{CatalogError, CatalogResult};
use crate::input::{parse_number, InputSpec};
use crate::types::{Product, ProductType};

/// Input specs for every field of the add-product form
#[derive(Debug, Clone, PartialEq)]
pub struct ProductFormSpecs {
    pub name: InputSpec,
    pub sku: InputSpec,
    pub price: InputSpec,
}

/// Build the form specs; the price field is bounded by the store config.
pub fn product_form_specs(config: &StoreConfig) -> ProductFormSpecs {
    ProductFormSpecs {
        name: InputSpec::text()
            .required()
            .minlength(2)
            .maxlength(80)
            .error_message("Name must be between {minlength} and {maxlength} characters"),
        sku: InputSpec::text()
            .required()
            .maxlength(40)
            .validator(|v| !v.chars().any(char::is_whitespace))
            .error_message("SKU is required and cannot contain spaces"),
        price: InputSpec::number()
            .required()
            .min(0.01)
            .max(config.max_price)
            .fraction_digits(2)
            .currency("USD", "$")
            .error_message("Price must be between {min} and {max}"),
    }
}

/// Values collected by the add-product form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub sku: String,
    /// Price as typed
    pub price: String,
    pub types: Vec<ProductType>,
}

impl ProductDraft {
    /// Build the product, clamping the price to the configured maximum.
    pub fn into_product(self, config: &StoreConfig) -> CatalogResult<Product> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(CatalogError::MissingField("name"));
        }
        let sku = self.sku.trim();
        if sku.is_empty() {
            return Err(CatalogError::MissingField("sku"));
        }
        if self.price.trim().is_empty() {
            return Err(CatalogError::MissingField("price"));
        }
        let price = parse_number(&self.price)
            .ok_or_else(|| CatalogError::InvalidPrice(self.price.clone()))?;
        if price < 0.0 {
            return Err(CatalogError::InvalidPrice(self.price.clone()));
        }
        if self.types.is_empty() {
            return Err(CatalogError::NoProductType);
        }

        Ok(Product {
            name: name.to_string(),
            sku: sku.to_string(),
            price: price.min(config.max_price),
            types: self.types,
        })
    }
}
