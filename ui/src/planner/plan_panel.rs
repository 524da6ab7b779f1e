use dioxus::prelude::*;

use crate::core::plan::FitnessPlan;
use crate::t;

const BALLOONS: usize = 8;

#[component]
pub fn PlanPanel(plan: FitnessPlan) -> Element {
    rsx! {
        section { class: "plan-panel",
            h2 { {t!("planner-result-title")} }

            div { class: "plan-panel__summary",
                for (label, value) in plan.summary.iter() {
                    p { key: "{label}",
                        strong { "{label}:" }
                        " {value}"
                    }
                }
            }

            p { class: "plan-panel__heading", strong { "Suggested Plan:" } }
            ul { class: "plan-panel__suggestions",
                for (idx, line) in plan.suggestions.iter().enumerate() {
                    li { key: "{idx}", "{line}" }
                }
            }

            div { class: "plan-panel__ready", role: "status", {t!("planner-ready")} }

            div { class: "plan-celebration", aria_hidden: "true",
                for idx in 0..BALLOONS {
                    span {
                        key: "{idx}",
                        class: "plan-celebration__balloon",
                        style: "--balloon-index: {idx}",
                    }
                }
            }
        }
    }
}
