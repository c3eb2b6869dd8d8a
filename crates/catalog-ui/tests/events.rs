//! Click handling tests for the UI components
//!
//! Events are dispatched straight into the `VirtualDom` runtime, the way
//! the desktop renderer does, using the element ids from the initial
//! mutations.

use std::any::Any;
use std::rc::Rc;
use std::sync::atomic::{AtomicUsize, Ordering};

use catalog_core::{default_product_types, SelectState};
use catalog_ui::{Modal, Select};
use dioxus::dioxus_core::{ElementId, Mutation, NoOpMutations};
use dioxus::prelude::*;
use dioxus_html::{SerializedHtmlEventConverter, SerializedMouseData};

/// Build the dom and return the ids of elements listening for clicks,
/// in document order
fn mount(app: fn() -> Element) -> (VirtualDom, Vec<ElementId>) {
    set_event_converter(Box::new(SerializedHtmlEventConverter));
    let mut dom = VirtualDom::new(app);
    let clicks = dom
        .rebuild_to_vec()
        .edits
        .into_iter()
        .filter_map(|edit| match edit {
            Mutation::NewEventListener { name, id } if name == "click" => Some(id),
            _ => None,
        })
        .collect();
    (dom, clicks)
}

fn click(dom: &VirtualDom, id: ElementId) {
    let event = Event::new(
        Rc::new(PlatformEventData::new(Box::<SerializedMouseData>::default())) as Rc<dyn Any>,
        true,
    );
    dom.runtime().handle_event("click", event, id);
}

/// Apply pending signal writes and re-render to HTML
fn settle(dom: &mut VirtualDom) -> String {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dioxus_ssr::render(dom)
}

// ============================================================================
// Modal
// ============================================================================

/// Listener order in the modal: overlay, dialog, close button
const OVERLAY: usize = 0;
const DIALOG: usize = 1;
const CLOSE_BUTTON: usize = 2;

#[test]
fn modal_close_button_calls_on_close() {
    static CLOSED: AtomicUsize = AtomicUsize::new(0);
    fn app() -> Element {
        rsx! {
            Modal {
                id: "test-modal".to_string(),
                title: "Testing modal".to_string(),
                on_close: move |_| {
                    CLOSED.fetch_add(1, Ordering::SeqCst);
                },
                "modal content test"
            }
        }
    }

    let (dom, clicks) = mount(app);
    assert_eq!(clicks.len(), 3);

    click(&dom, clicks[CLOSE_BUTTON]);
    // The dialog stops propagation, so the overlay does not fire a second time
    assert_eq!(CLOSED.load(Ordering::SeqCst), 1);
}

#[test]
fn modal_overlay_click_closes() {
    static CLOSED: AtomicUsize = AtomicUsize::new(0);
    fn app() -> Element {
        rsx! {
            Modal {
                id: "test-modal".to_string(),
                title: "Testing modal".to_string(),
                on_close: move |_| {
                    CLOSED.fetch_add(1, Ordering::SeqCst);
                },
                "modal content test"
            }
        }
    }

    let (dom, clicks) = mount(app);
    click(&dom, clicks[OVERLAY]);
    assert_eq!(CLOSED.load(Ordering::SeqCst), 1);
}

#[test]
fn modal_dialog_click_keeps_it_open() {
    static CLOSED: AtomicUsize = AtomicUsize::new(0);
    fn app() -> Element {
        rsx! {
            Modal {
                id: "test-modal".to_string(),
                title: "Testing modal".to_string(),
                on_close: move |_| {
                    CLOSED.fetch_add(1, Ordering::SeqCst);
                },
                "modal content test"
            }
        }
    }

    let (dom, clicks) = mount(app);
    click(&dom, clicks[DIALOG]);
    assert_eq!(CLOSED.load(Ordering::SeqCst), 0);
}

// ============================================================================
// Select
// ============================================================================

/// A closed select listens on the field, then on each option row
const FIELD: usize = 0;
const FIRST_OPTION: usize = 1;

#[test]
fn select_field_click_opens_list() {
    fn app() -> Element {
        let state = use_signal(|| SelectState::new(default_product_types().unwrap(), false));
        rsx! { Select { name: "type".to_string(), state } }
    }

    let (mut dom, clicks) = mount(app);
    click(&dom, clicks[FIELD]);
    let html = settle(&mut dom);
    assert!(html.contains("dropdown-options visible"));
    assert!(html.contains("dropdown-backdrop"));
}

#[test]
fn select_option_click_selects_it() {
    fn app() -> Element {
        let state = use_signal(|| SelectState::new(default_product_types().unwrap(), true));
        rsx! { Select { name: "type".to_string(), state } }
    }

    let (mut dom, clicks) = mount(app);
    // Rows: Fresh produce (group), Vegetables, Meat, ...
    click(&dom, clicks[FIRST_OPTION + 2]);
    let html = settle(&mut dom);
    assert!(html.contains(">Meat</span>"));
    assert!(html.contains("value=\"meat\""));
}

#[test]
fn select_group_click_is_ignored() {
    fn app() -> Element {
        let state = use_signal(|| SelectState::new(default_product_types().unwrap(), false));
        rsx! { Select { name: "type".to_string(), state } }
    }

    let (mut dom, clicks) = mount(app);
    click(&dom, clicks[FIRST_OPTION]);
    let html = settle(&mut dom);
    assert!(html.contains("Select option"));
    assert_eq!(html.matches("aria-selected=\"true\"").count(), 0);
}
