//! Navigation Header Component
//!
//! App title on the left, links to the store pages on the right.

use dioxus::prelude::*;

use crate::app::Route;
use crate::context::use_store;

/// Navigation location within the application
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum NavLocation {
    Products,
    Settings,
}

impl NavLocation {
    /// Get the display name for this location
    pub fn display_name(&self) -> &'static str {
        match self {
            NavLocation::Products => "Products",
            NavLocation::Settings => "Configurations",
        }
    }

    /// Get the route for this location
    pub fn route(&self) -> Route {
        match self {
            NavLocation::Products => Route::ProductList {},
            NavLocation::Settings => Route::Settings {},
        }
    }

    /// Whether `route` belongs to this location (modal routes count as Products)
    pub fn contains(&self, route: &Route) -> bool {
        match self {
            NavLocation::Products => matches!(
                route,
                Route::ProductList {} | Route::AddProduct {} | Route::InputsDemo {}
            ),
            NavLocation::Settings => matches!(route, Route::Settings {}),
        }
    }
}

#[component]
pub fn NavHeader() -> Element {
    let navigator = use_navigator();
    let current = use_route::<Route>();
    let store = use_store();
    let product_count = store.read().products().len();

    let locations = [NavLocation::Products, NavLocation::Settings];

    rsx! {
        header { class: "nav-header",
            div { class: "nav-title",
                span { class: "app-name", "Catalog" }
                span { class: "product-count", "({product_count})" }
            }
            nav { class: "nav-links",
                for location in locations {
                    {
                        let active = location.contains(&current);
                        let label = location.display_name();
                        rsx! {
                            button {
                                key: "{label}",
                                class: if active { "btn nav-link active" } else { "btn nav-link" },
                                "aria-current": if active { "page" } else { "false" },
                                onclick: move |_| {
                                    navigator.push(location.route());
                                },
                                "{label}"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modal_routes_belong_to_products() {
        assert!(NavLocation::Products.contains(&Route::AddProduct {}));
        assert!(NavLocation::Products.contains(&Route::InputsDemo {}));
        assert!(!NavLocation::Products.contains(&Route::Settings {}));
        assert!(NavLocation::Settings.contains(&Route::Settings {}));
    }

    #[test]
    fn routes_render_expected_paths() {
        assert_eq!(NavLocation::Products.route().to_string(), "/store/products");
        assert_eq!(NavLocation::Settings.route().to_string(), "/store/config");
        assert_eq!(Route::AddProduct {}.to_string(), "/store/products/add-product");
        assert_eq!(Route::InputsDemo {}.to_string(), "/store/products/demo");
    }
}
