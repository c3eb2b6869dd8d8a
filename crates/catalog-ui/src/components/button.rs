//! Button Component
//!
//! Thin wrapper over `<button>` with the app's style variants.

use dioxus::prelude::*;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    /// Main call to action
    #[default]
    Primary,
    /// Secondary action next to a primary one
    Secondary,
    /// Borderless action
    Ghost,
}

impl ButtonVariant {
    /// Returns the CSS classes for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn btn-primary",
            ButtonVariant::Secondary => "btn btn-secondary",
            ButtonVariant::Ghost => "btn btn-ghost",
        }
    }
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Visual style variant
    #[props(default)]
    pub variant: ButtonVariant,
    /// Button content
    pub children: Element,
    /// Click handler
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    #[props(default = false)]
    pub disabled: bool,
    /// Type attribute (button, submit, reset)
    #[props(default = "button".to_string())]
    pub button_type: String,
    /// Replaces the variant classes entirely when set
    #[props(default)]
    pub class: Option<String>,
}

/// Styled button
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         onclick: move |_| navigator.push(Route::AddProduct {}),
///         "Add product"
///     }
///
///     Button { button_type: "submit".to_string(), "Save" }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let class = props
        .class
        .clone()
        .unwrap_or_else(|| props.variant.class().to_string());

    rsx! {
        button {
            class: "{class}",
            r#type: "{props.button_type}",
            disabled: props.disabled,
            onclick: move |_| {
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}
