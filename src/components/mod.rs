//! App-specific components for the catalog views.

mod add_product_form;
mod input_showcase;
mod nav_header;

pub use add_product_form::AddProductForm;
pub use input_showcase::InputShowcase;
pub use nav_header::NavHeader;
