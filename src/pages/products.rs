//! Products page - the product table plus its modal child routes.
//!
//! `ProductsView` is the layout; `ProductList`, `AddProduct` and
//! `InputsDemo` render into its outlet, so the table stays visible
//! behind the modals.

use catalog_ui::{Button, ButtonVariant, Modal, ProductTable};
use dioxus::prelude::*;

use crate::app::Route;
use crate::components::{AddProductForm, InputShowcase};
use crate::context::use_store;

/// Layout for `/store/products` and its modal routes.
#[component]
pub fn ProductsView() -> Element {
    let navigator = use_navigator();
    let store = use_store();
    let products = store.read().products().to_vec();

    rsx! {
        section { class: "products-page",
            header { class: "page-header",
                h1 { class: "page-title", "Products" }
                div { class: "page-actions",
                    Button {
                        onclick: move |_| {
                            navigator.push(Route::AddProduct {});
                        },
                        "Add product"
                    }
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| {
                            navigator.push(Route::InputsDemo {});
                        },
                        "Inputs demo"
                    }
                }
            }

            ProductTable { products }

            Outlet::<Route> {}
        }
    }
}

/// `/store/products`: the table alone, nothing in the outlet.
#[component]
pub fn ProductList() -> Element {
    rsx! {}
}

/// `/store/products/add-product`
#[component]
pub fn AddProduct() -> Element {
    let navigator = use_navigator();

    rsx! {
        Modal {
            id: "add-product-modal".to_string(),
            title: "Add product".to_string(),
            on_close: move |_| {
                navigator.push(Route::ProductList {});
            },
            AddProductForm {
                on_saved: move |_| {
                    navigator.push(Route::ProductList {});
                },
            }
        }
    }
}

/// `/store/products/demo`
#[component]
pub fn InputsDemo() -> Element {
    let navigator = use_navigator();

    rsx! {
        Modal {
            id: "inputs-demo-modal".to_string(),
            title: "Inputs demo".to_string(),
            on_close: move |_| {
                navigator.push(Route::ProductList {});
            },
            InputShowcase {}
        }
    }
}
