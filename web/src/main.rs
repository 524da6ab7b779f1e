use std::sync::Arc;

use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::AppNavbar;
use ui::config::{self, AppConfig};
use ui::views::{Dashboard, Planner};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[route("/")]
    Planner {},
    #[route("/dashboard")]
    Dashboard {},
}

fn nav_planner(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Planner {},
        "{label}"
    })
}
fn nav_dashboard(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Dashboard {},
        "{label}"
    })
}

fn main() {
    // Images ship in the bundle's asset folder; the browser fetches them by URL.
    config::install(AppConfig::with_assets(Arc::new(
        config::bundled_image_urls(),
    )));
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    {
        ui::i18n::init();
        register_nav(NavBuilder {
            planner: nav_planner,
            dashboard: nav_dashboard,
        });
    }

    use_context_provider(|| config::current().clone());
    let lang_code = use_signal(|| "en-US".to_string());
    use_context_provider(|| lang_code);

    rsx! {
        document::Title { "Fitness Goal Setting Assistant" }
        document::Style { "{ui::THEME_CSS}" }

        Router::<Route> {}
    }
}

/// A web-specific Router around the shared `Navbar` component
/// which allows us to use the web-specific `Route` enum.
#[component]
fn WebNavbar() -> Element {
    rsx! {
        AppNavbar { }
        Outlet::<Route> {}
    }
}
