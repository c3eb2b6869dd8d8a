//! Settings page - store configuration.
//!
//! Edits apply to the store as soon as the value is valid; there is no
//! save button.

use catalog_core::input::{format_number, parse_number};
use catalog_core::{InputSpec, InputState};
use catalog_ui::{Button, ButtonVariant, Input};
use dioxus::prelude::*;

use crate::app::Route;
use crate::context::use_store;

fn max_price_spec() -> InputSpec {
    InputSpec::number()
        .required()
        .min(1.0)
        .currency("USD", "$")
        .error_message("Max price must be at least {min}")
}

#[component]
pub fn Settings() -> Element {
    let navigator = use_navigator();
    let mut store = use_store();
    let max_price = use_signal(|| {
        InputState::new(format_number(store.peek().config().max_price))
    });

    // Push valid edits into the store
    use_effect(move || {
        let state = max_price.read();
        if !state.is_valid() {
            return;
        }
        if let Some(value) = parse_number(&state.value) {
            if value != store.peek().config().max_price {
                if let Err(e) = store.write().set_max_price(value) {
                    tracing::warn!("Max price not applied: {}", e);
                }
            }
        }
    });

    let capped = catalog_core::format_price(store.read().config().max_price);

    rsx! {
        section { class: "settings-page",
            header { class: "page-header",
                h1 { class: "page-title", "Configurations" }
            }

            div { class: "settings-card",
                h2 { class: "section-header", "Products" }
                Input {
                    name: "maxPrice".to_string(),
                    label: "Maximum product price".to_string(),
                    spec: max_price_spec(),
                    state: max_price,
                }
                p { class: "input-hint", "New products are capped at {capped}." }
            }

            Button {
                variant: ButtonVariant::Secondary,
                onclick: move |_| {
                    navigator.push(Route::ProductList {});
                },
                "Back to products"
            }
        }
    }
}
