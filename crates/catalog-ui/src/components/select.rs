//! Select Component
//!
//! Searchable dropdown over grouped options, backed by [`SelectState`].
//! Group headers render with `is-group` and ignore clicks. A transparent
//! backdrop behind the open list closes it when clicking outside.

use catalog_core::SelectState;
use dioxus::prelude::*;

#[derive(Clone, PartialEq, Props)]
pub struct SelectProps {
    /// Form field name
    pub name: String,
    /// Options, search text and selection, owned by the parent
    pub state: Signal<SelectState>,
    #[props(default)]
    pub label: Option<String>,
    #[props(default = "search...".to_string())]
    pub search_placeholder: String,
}

/// Searchable single or multiple select
///
/// # Example
///
/// ```rust,ignore
/// let types = use_signal(|| SelectState::new(store.read().types().to_vec(), true));
///
/// rsx! {
///     Select { name: "type".to_string(), label: "Type".to_string(), state: types }
/// }
/// ```
#[component]
pub fn Select(props: SelectProps) -> Element {
    let mut state = props.state;
    let current = state.read().clone();
    let is_open = current.is_open();
    let rows = current.visible_options();
    let display = current.display_label();
    let search = current.search().to_string();
    let multiple = current.is_multiple();
    let placeholder_shown = current.selected_types().is_empty();
    let hidden_value = current
        .selected_types()
        .iter()
        .map(|t| t.value.as_str())
        .collect::<Vec<_>>()
        .join(",");

    rsx! {
        div { class: "form-field",
            label {
                class: "input-label",
                "data-testid": "input-label",
                "data-input-name": "{props.name}",
                if let Some(label) = &props.label {
                    "{label}"
                }
            }
            div {
                class: "dropdown-container",
                "data-testid": "atom-select-container",

                if is_open {
                    div {
                        class: "dropdown-backdrop",
                        onclick: move |_| state.write().close(),
                    }
                }

                div {
                    class: if is_open { "dropdown-field open" } else { "dropdown-field" },
                    "data-testid": "atom-select",
                    role: "combobox",
                    tabindex: "0",
                    "aria-expanded": "{is_open}",
                    onclick: move |_| state.write().toggle(),
                    span {
                        class: if placeholder_shown { "dropdown-selected placeholder" } else { "dropdown-selected" },
                        "data-testid": "atom-select-selected-option",
                        "{display}"
                    }
                    span { class: "dropdown-caret", if is_open { "\u{25B4}" } else { "\u{25BE}" } }
                }

                div {
                    class: if is_open { "dropdown-options visible" } else { "dropdown-options" },
                    "data-testid": "atom-select-options-list",
                    role: "listbox",
                    "aria-multiselectable": "{multiple}",

                    input {
                        class: "input-field dropdown-search",
                        r#type: "search",
                        "data-testid": "atom-select-search-input",
                        placeholder: "{props.search_placeholder}",
                        value: "{search}",
                        oninput: move |e| state.write().set_search(e.value()),
                    }

                    ul { class: "dropdown-list",
                        for (index, row) in rows.into_iter().enumerate() {
                            {
                                let selected = !row.is_group && current.is_selected(&row.value);
                                let class = match (row.is_group, selected, row.depth) {
                                    (true, _, _) => "dropdown-option is-group",
                                    (false, true, 0) => "dropdown-option selected",
                                    (false, true, _) => "dropdown-option selected is-child",
                                    (false, false, 0) => "dropdown-option",
                                    (false, false, _) => "dropdown-option is-child",
                                };
                                rsx! {
                                    li {
                                        key: "{row.value}",
                                        class: class,
                                        role: "option",
                                        "aria-selected": "{selected}",
                                        "data-testid": "atom-select-option",
                                        onclick: move |e| {
                                            e.stop_propagation();
                                            state.write().choose(index);
                                        },
                                        a { "{row.label}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
            input { r#type: "hidden", name: "{props.name}", value: "{hidden_value}" }
        }
    }
}
