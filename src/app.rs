use dioxus::prelude::*;

use crate::context::initial_store;
use crate::pages::{AddProduct, InputsDemo, NotFound, ProductList, ProductsView, Settings, Shell};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/`, `/store` - redirect to the product list
/// - `/store/config` - settings (max price)
/// - `/store/products` - product table, hosting the modal routes below
/// - `/store/products/add-product` - add-product modal
/// - `/store/products/demo` - inputs demo modal
#[derive(Clone, Routable, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Shell)]
        #[route("/store/config")]
        Settings {},
        #[layout(ProductsView)]
            #[route("/store/products")]
            ProductList {},
            #[route("/store/products/add-product")]
            AddProduct {},
            #[route("/store/products/demo")]
            InputsDemo {},
        #[end_layout]
    #[end_layout]
    #[redirect("/", || Route::ProductList {})]
    #[redirect("/store", || Route::ProductList {})]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

/// Root application component.
///
/// Provides global styles, the product store context, and routing.
#[component]
pub fn App() -> Element {
    let store = use_signal(initial_store);

    // Provide the store to all views
    use_context_provider(|| store);

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
