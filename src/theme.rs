//! Theme for the catalog UI.

mod styles;

pub use styles::GLOBAL_STYLES;
