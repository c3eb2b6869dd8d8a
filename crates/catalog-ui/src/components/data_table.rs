//! Product Table Component

use catalog_core::{product_rows, Product, PRODUCT_COLUMNS};
use dioxus::prelude::*;

#[derive(Clone, PartialEq, Props)]
pub struct ProductTableProps {
    /// Products in insertion order
    pub products: Vec<Product>,
    /// Text shown while the list is empty
    #[props(default = "No products yet".to_string())]
    pub empty_message: String,
}

/// Table of products: SKU, name, price (two decimals), types
#[component]
pub fn ProductTable(props: ProductTableProps) -> Element {
    let rows = product_rows(&props.products);
    let column_count = PRODUCT_COLUMNS.len();

    rsx! {
        table { class: "datatable", "data-testid": "datatable",
            thead {
                tr {
                    for column in PRODUCT_COLUMNS {
                        th { key: "{column}", scope: "col", "{column}" }
                    }
                }
            }
            tbody {
                if rows.is_empty() {
                    tr { class: "datatable-empty",
                        td { colspan: "{column_count}", "{props.empty_message}" }
                    }
                }
                for row in rows {
                    tr { key: "{row.key}", "data-testid": "datatable-tr",
                        for (i, cell) in row.cells.into_iter().enumerate() {
                            td {
                                key: "{i}",
                                "data-testid": "datatable-td",
                                "data-label": PRODUCT_COLUMNS[i],
                                span { "data-testid": "datatable-td-value", "{cell}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
