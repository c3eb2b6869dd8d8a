//! Core types for the catalog

use serde::{Deserialize, Serialize};

/// A node in the product type taxonomy
///
/// A node with `children` is a group header. Groups nest one level deep;
/// their children are always leaves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductType {
    /// Human-readable label shown in the select and the table
    pub label: String,
    /// Stable value identifying the type
    pub value: String,
    /// Child types when this node is a group
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<ProductType>>,
}

impl ProductType {
    /// Create a leaf type
    pub fn leaf(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            children: None,
        }
    }

    /// Create a group of leaf types
    pub fn group(
        label: impl Into<String>,
        value: impl Into<String>,
        children: Vec<ProductType>,
    ) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            children: Some(children),
        }
    }

    /// Whether this node is a group header
    pub fn is_group(&self) -> bool {
        self.children.is_some()
    }
}

/// A catalog entry
///
/// Products are created from the add-product form and appended to the
/// store. They are never edited afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub sku: String,
    pub price: f64,
    /// Selected product types, in selection order
    #[serde(rename = "type")]
    pub types: Vec<ProductType>,
}

impl Product {
    pub fn new(
        name: impl Into<String>,
        sku: impl Into<String>,
        price: f64,
        types: Vec<ProductType>,
    ) -> Self {
        Self {
            name: name.into(),
            sku: sku.into(),
            price,
            types,
        }
    }

    /// Type labels joined for display ("Vegetables, Meat")
    pub fn type_labels(&self) -> String {
        self.types
            .iter()
            .map(|t| t.label.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
