//! Modal Component
//!
//! Overlay dialog with a title bar and a close button.

use dioxus::prelude::*;

/// Modal dialog
///
/// Clicking the overlay or the close button calls `on_close`; clicks
/// inside the dialog do not propagate to the overlay.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Modal {
///         id: "add-product".to_string(),
///         title: "Add product".to_string(),
///         on_close: move |_| navigator.push(Route::ProductList {}),
///         AddProductForm {}
///     }
/// }
/// ```
#[component]
pub fn Modal(
    /// DOM id of the dialog
    id: String,
    /// Heading text
    title: String,
    /// Called when the user dismisses the modal
    on_close: EventHandler<()>,
    children: Element,
) -> Element {
    let title_id = format!("{}-title", id);

    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| on_close.call(()),

            div {
                id: "{id}",
                class: "modal",
                role: "dialog",
                "aria-modal": "true",
                "aria-labelledby": "{title_id}",
                onclick: move |e| e.stop_propagation(),

                header { class: "modal-header",
                    h2 { id: "{title_id}", class: "modal-title", "{title}" }
                    button {
                        class: "close-btn",
                        r#type: "button",
                        "aria-label": "Close",
                        "data-testid": "organism-modal-close-button",
                        onclick: move |_| on_close.call(()),
                        "\u{00D7}"
                    }
                }

                div { class: "modal-body", {children} }
            }
        }
    }
}
