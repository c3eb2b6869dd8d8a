//! Shell layout - navigation header around every store page.

use dioxus::prelude::*;

use crate::app::Route;
use crate::components::NavHeader;

#[component]
pub fn Shell() -> Element {
    rsx! {
        div { class: "app-shell",
            NavHeader {}
            main { class: "app-main",
                Outlet::<Route> {}
            }
        }
    }
}
