//! Reusable UI components
//!
//! Atoms (button, input, select) and organisms (modal, product table).

mod button;
mod data_table;
mod input;
mod modal;
mod select;

pub use button::*;
pub use data_table::*;
pub use input::*;
pub use modal::*;
pub use select::*;
