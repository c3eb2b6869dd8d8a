//! Page components for the catalog.

mod not_found;
mod products;
mod settings;
mod shell;

pub use not_found::NotFound;
pub use products::{AddProduct, InputsDemo, ProductList, ProductsView};
pub use settings::Settings;
pub use shell::Shell;
