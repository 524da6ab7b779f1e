use dioxus::prelude::*;

use super::{
    HealthyInspirations, NutritionImage, PlanPanel, PlannerForm, UsefulResources, WorkoutGallery,
};
use crate::core::format::today;
use crate::core::plan::FitnessPlan;
use crate::core::selection::UserSelection;
use crate::t;

#[component]
pub fn PlannerView() -> Element {
    let selection = use_signal(|| UserSelection::starting(today()));
    let plan = use_signal(|| Option::<FitnessPlan>::None);

    let current = selection();

    rsx! {
        article { class: "planner",
            h2 { class: "planner__title", {t!("planner-title")} }

            PlannerForm { selection, plan }

            if let Some(generated) = plan() {
                PlanPanel { plan: generated }
            }

            hr {}
            NutritionImage { goal: current.goal }
            HealthyInspirations {}

            hr {}
            UsefulResources {}

            hr {}
            WorkoutGallery { workouts: current.preferred_workouts.clone() }
        }
    }
}
