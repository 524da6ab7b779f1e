use dioxus::prelude::*;

use super::{calories_chart, weight_chart, workouts_chart};
use crate::charts::{ChartModel, ProgressChart};
use crate::config::use_app_config;
use crate::core::progress::progress_table;
use crate::t;

#[component]
pub fn DashboardView() -> Element {
    let theme = use_app_config().chart_theme;
    let rows = progress_table();

    let weight = ChartModel::build(&weight_chart(&rows));
    let workouts = ChartModel::build(&workouts_chart(&rows));
    let calories = ChartModel::build(&calories_chart(&rows));

    rsx! {
        article { class: "dashboard",
            h2 { class: "dashboard__title", {t!("dashboard-title")} }

            div { class: "dashboard__row",
                section { class: "dashboard__panel",
                    h3 { {t!("dashboard-weight")} }
                    ProgressChart { model: weight, theme: theme.clone() }
                }
                section { class: "dashboard__panel",
                    h3 { {t!("dashboard-workouts")} }
                    ProgressChart { model: workouts, theme: theme.clone() }
                }
            }

            section { class: "dashboard__panel dashboard__panel--wide",
                h3 { {t!("dashboard-calories")} }
                ProgressChart { model: calories, theme }
            }

            hr {}
            p { class: "dashboard__footer", {t!("dashboard-footer")} }
        }
    }
}
