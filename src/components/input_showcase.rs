//! Inputs demo - one input per validation feature, plus a single select.

use catalog_core::{InputSpec, InputState, SelectState};
use catalog_ui::{Input, Select};
use dioxus::prelude::*;

use crate::context::use_store;

/// A labelled demo field
#[derive(Clone)]
struct DemoField {
    name: &'static str,
    label: &'static str,
    spec: InputSpec,
}

fn demo_fields() -> Vec<DemoField> {
    vec![
        DemoField {
            name: "decimal",
            label: "Decimal (3 digits)",
            spec: InputSpec::number().fraction_digits(3),
        },
        DemoField {
            name: "currency",
            label: "Currency",
            spec: InputSpec::text().currency("USD", "$").fraction_digits(3),
        },
        DemoField {
            name: "required",
            label: "Required",
            spec: InputSpec::text().required().error_message("need to specify a value"),
        },
        DemoField {
            name: "max",
            label: "Max 200",
            spec: InputSpec::number().max(200.0).required(),
        },
        DemoField {
            name: "min",
            label: "Min 100",
            spec: InputSpec::number().min(100.0).error_message("min is {min}"),
        },
        DemoField {
            name: "spaces",
            label: "Two spaces",
            spec: InputSpec::text()
                .validator(|v| v.contains("  "))
                .error_message("need a value with 2 spaces"),
        },
        DemoField {
            name: "length",
            label: "Between 2 and 80 characters",
            spec: InputSpec::text()
                .minlength(2)
                .maxlength(80)
                .error_message("Need a message more than {minlength} and less than {maxlength}"),
        },
    ]
}

#[component]
pub fn InputShowcase() -> Element {
    let store = use_store();
    let fields = use_hook(demo_fields);
    let single = use_signal(|| SelectState::new(store.peek().types().to_vec(), false));

    rsx! {
        div { class: "inputs-demo",
            for field in fields {
                DemoInput {
                    key: "{field.name}",
                    name: field.name.to_string(),
                    label: field.label.to_string(),
                    spec: field.spec,
                }
            }
            Select {
                name: "single".to_string(),
                label: "Single select".to_string(),
                state: single,
            }
        }
    }
}

/// One demo input with its own state
#[component]
fn DemoInput(name: String, label: String, spec: InputSpec) -> Element {
    let state = use_signal(InputState::default);

    rsx! {
        Input { name, label, spec, state }
    }
}
