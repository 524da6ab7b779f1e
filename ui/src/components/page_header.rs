use dioxus::prelude::*;

use crate::t;

/// Title and welcome line shown above both pages.
#[component]
pub fn PageHeader() -> Element {
    rsx! {
        header { class: "page-header",
            h1 { {t!("app-title")} }
            p { class: "page-header__welcome", {t!("app-welcome")} }
        }
    }
}
