//! Product table columns and cell formatting.

use crate::types::Product;

/// Column headers, in display order
pub const PRODUCT_COLUMNS: [&str; 4] = ["SKU", "Name", "Price", "Type"];

/// One formatted table row
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    /// Row key for the renderer
    pub key: String,
    /// Cell texts, aligned with [`PRODUCT_COLUMNS`]
    pub cells: Vec<String>,
}

/// Rows for the product table, in insertion order.
pub fn product_rows(products: &[Product]) -> Vec<TableRow> {
    products
        .iter()
        .enumerate()
        .map(|(i, p)| TableRow {
            key: format!("{}-{}", i, p.sku),
            cells: vec![
                p.sku.clone(),
                p.name.clone(),
                format_price(p.price),
                p.type_labels(),
            ],
        })
        .collect()
}

/// Two fixed decimals with thousands separators: `15000.05` -> `15,000.05`
pub fn format_price(price: f64) -> String {
    let fixed = format!("{:.2}", price.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if price < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{}{}.{}", sign, grouped, frac_part)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ProductType;

    #[test]
    fn formats_prices() {
        assert_eq!(format_price(15000.05), "15,000.05");
        assert_eq!(format_price(9999.0), "9,999.00");
        assert_eq!(format_price(2.0), "2.00");
        assert_eq!(format_price(123.0), "123.00");
        assert_eq!(format_price(1234567.891), "1,234,567.89");
        assert_eq!(format_price(0.0), "0.00");
        assert_eq!(format_price(-1500.5), "-1,500.50");
    }

    #[test]
    fn rows_follow_column_order() {
        let products = vec![Product::new(
            "product 1",
            "product-1",
            123.0,
            vec![ProductType::leaf("Fresh produce", "fresh")],
        )];
        let rows = product_rows(&products);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].cells.len(), PRODUCT_COLUMNS.len());
        assert_eq!(rows[0].cells[0], "product-1");
        assert_eq!(rows[0].cells[2], "123.00");
        assert_eq!(rows[0].cells[3], "Fresh produce");
    }

    #[test]
    fn duplicate_skus_get_distinct_keys() {
        let products = vec![
            Product::new("a", "same", 1.0, vec![]),
            Product::new("b", "same", 1.0, vec![]),
        ];
        let rows = product_rows(&products);
        assert_ne!(rows[0].key, rows[1].key);
    }
}
