//! Catalog UI Components
//!
//! Dioxus components for the catalog front end. Validation, filtering and
//! formatting live in `catalog-core`; these components render that state
//! and forward user events to it.
//!
//! ## Test ids
//!
//! Every interactive element carries a stable `data-testid` so rendering
//! tests and browser automation can find it:
//! - inputs: `atom-input`, `input-label`, `input-error-message`, `input-counter`
//! - select: `atom-select`, `atom-select-container`, `atom-select-option`,
//!   `atom-select-options-list`, `atom-select-search-input`,
//!   `atom-select-selected-option`
//! - table: `datatable`, `datatable-tr`, `datatable-td`, `datatable-td-value`
//! - modal: `organism-modal-close-button`

pub mod components;

pub use components::*;
