//! Fallback page for unknown paths.

use catalog_ui::Button;
use dioxus::prelude::*;

use crate::app::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let navigator = use_navigator();
    let path = format!("/{}", segments.join("/"));
    tracing::warn!(%path, "Unknown route");

    rsx! {
        main { class: "not-found",
            h1 { class: "page-title", "Page not found" }
            p { class: "body-text", "Nothing lives at {path}." }
            Button {
                onclick: move |_| {
                    navigator.push(Route::ProductList {});
                },
                "Back to products"
            }
        }
    }
}
