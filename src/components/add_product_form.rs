//! Add-product form.
//!
//! Name, SKU, price and a multiple type select. On submit every field is
//! re-validated; a valid form becomes a product appended to the store.

use catalog_core::{product_form_specs, InputState, ProductDraft, SelectState};
use catalog_ui::{Button, ButtonVariant, Input, Select};
use dioxus::prelude::*;

use crate::context::use_store;

#[component]
pub fn AddProductForm(
    /// Called after the product was added
    on_saved: EventHandler<()>,
) -> Element {
    let mut store = use_store();
    let mut name = use_signal(InputState::default);
    let mut sku = use_signal(InputState::default);
    let mut price = use_signal(InputState::default);
    let mut types = use_signal(|| {
        SelectState::new(store.peek().types().to_vec(), true).with_placeholder("Select types")
    });
    let mut type_error = use_signal(|| Option::<String>::None);
    let mut form_error = use_signal(|| Option::<String>::None);

    let config = *store.read().config();
    let specs = product_form_specs(&config);

    let submit = move |e: FormEvent| {
        e.prevent_default();
        let config = *store.peek().config();
        let specs = product_form_specs(&config);

        let name_ok = name.write().commit(&specs.name);
        let sku_ok = sku.write().commit(&specs.sku);
        let price_ok = price.write().commit(&specs.price);
        let selected = types.read().selected_types().to_vec();

        if selected.is_empty() {
            type_error.set(Some("Select at least one type".to_string()));
        } else {
            type_error.set(None);
        }

        if !(name_ok && sku_ok && price_ok) || selected.is_empty() {
            tracing::debug!(name_ok, sku_ok, price_ok, "Add product form invalid");
            return;
        }

        let draft = ProductDraft {
            name: name.read().value.clone(),
            sku: sku.read().value.clone(),
            price: price.read().value.clone(),
            types: selected,
        };

        match draft.into_product(&config) {
            Ok(product) => {
                store.write().add_product(product);
                form_error.set(None);
                on_saved.call(());
            }
            Err(e) => {
                tracing::warn!("Product rejected: {}", e);
                form_error.set(Some(e.to_string()));
            }
        }
    };

    let reset = move |_: ()| {
        name.set(InputState::default());
        sku.set(InputState::default());
        price.set(InputState::default());
        types.write().clear();
        type_error.set(None);
        form_error.set(None);
    };

    rsx! {
        form { class: "product-form", novalidate: true, onsubmit: submit,
            Input {
                name: "name".to_string(),
                label: "Name".to_string(),
                placeholder: "Product name".to_string(),
                spec: specs.name,
                state: name,
                autofocus: true,
            }
            Input {
                name: "price".to_string(),
                label: "Price".to_string(),
                placeholder: "0.00".to_string(),
                spec: specs.price,
                state: price,
            }
            Input {
                name: "sku".to_string(),
                label: "SKU".to_string(),
                placeholder: "sku-001".to_string(),
                spec: specs.sku,
                state: sku,
            }
            Select {
                name: "type".to_string(),
                label: "Type".to_string(),
                state: types,
            }
            if let Some(message) = type_error() {
                p { class: "error-text", "{message}" }
            }
            if let Some(message) = form_error() {
                p { class: "error-text form-error", "{message}" }
            }
            div { class: "modal-actions",
                Button { button_type: "submit".to_string(), "Save product" }
                Button {
                    variant: ButtonVariant::Secondary,
                    onclick: reset,
                    "Reset"
                }
            }
        }
    }
}
