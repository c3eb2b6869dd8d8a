//! Input Field Component
//!
//! Text and number inputs backed by [`InputState`].
//! Features:
//! - Max clamping and min/required/length messages while typing
//! - Fraction digits and the custom validator applied on blur
//! - Currency symbol shown at a fixed position in the label
//! - "current/max" counter for length-bounded inputs

use catalog_core::input::format_number;
use catalog_core::{InputSpec, InputState};
use dioxus::prelude::*;

/// Properties for the Input component
#[derive(Clone, PartialEq, Props)]
pub struct InputProps {
    /// Form field name
    pub name: String,
    /// Live value and message, owned by the parent form
    pub state: Signal<InputState>,
    /// Validation and formatting rules
    #[props(default)]
    pub spec: InputSpec,
    /// Input label text
    #[props(default)]
    pub label: Option<String>,
    #[props(default)]
    pub placeholder: Option<String>,
    #[props(default = false)]
    pub autofocus: bool,
    #[props(default = false)]
    pub disabled: bool,
    /// Optional ID for label association, defaults to `input-{name}`
    #[props(default)]
    pub id: Option<String>,
}

/// Validated input field
///
/// # Example
///
/// ```rust,ignore
/// let price = use_signal(InputState::default);
///
/// rsx! {
///     Input {
///         name: "price".to_string(),
///         label: "Price".to_string(),
///         spec: InputSpec::number().max(200.0).currency("USD", "$"),
///         state: price,
///     }
/// }
/// ```
#[component]
pub fn Input(props: InputProps) -> Element {
    let mut state = props.state;
    let id = props
        .id
        .clone()
        .unwrap_or_else(|| format!("input-{}", props.name));
    let current = state.read().clone();
    let counter = current.counter(&props.spec);
    let error = current.error.clone().filter(|_| current.touched);

    let spec_for_input = props.spec.clone();
    let spec_for_blur = props.spec.clone();

    let invalid = error.is_some();
    let input_class = if invalid {
        "input-field invalid"
    } else {
        "input-field"
    };

    rsx! {
        div { class: "form-field",
            label {
                class: "input-label",
                r#for: "{id}",
                "data-testid": "input-label",
                "data-input-name": "{props.name}",
                if let Some(label) = &props.label {
                    span { class: "input-label-text", "{label}" }
                }
                if let Some(symbol) = &props.spec.currency_symbol {
                    span {
                        class: "input-currency",
                        role: "contentinfo",
                        title: props.spec.currency.clone().unwrap_or_default(),
                        "{symbol}"
                    }
                }
            }
            input {
                id: "{id}",
                class: input_class,
                name: "{props.name}",
                r#type: props.spec.kind.html_type(),
                "data-testid": "atom-input",
                value: "{current.value}",
                placeholder: props.placeholder.clone().unwrap_or_default(),
                required: props.spec.required,
                disabled: props.disabled,
                autofocus: props.autofocus,
                min: props.spec.min.map(format_number),
                max: props.spec.max.map(format_number),
                minlength: props.spec.minlength.map(|n| n.to_string()),
                maxlength: props.spec.maxlength.map(|n| n.to_string()),
                "aria-invalid": if invalid { "true" } else { "false" },
                oninput: move |e| state.write().update(&spec_for_input, &e.value()),
                onblur: move |_| state.write().blur(&spec_for_blur),
            }
            div { class: "input-footer",
                if let Some(message) = error {
                    span {
                        class: "error-text",
                        "data-testid": "input-error-message",
                        "{message}"
                    }
                }
                if let Some(counter) = counter {
                    span {
                        class: "input-counter",
                        "data-testid": "input-counter",
                        "{counter}"
                    }
                }
            }
        }
    }
}
