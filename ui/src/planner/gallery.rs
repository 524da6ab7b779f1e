use dioxus::logger::tracing::warn;
use dioxus::prelude::*;

use crate::config::use_app_config;
use crate::core::assets::CatalogImage;
use crate::core::imaging::{broken_source, prepare, DisplayImage};
use crate::core::selection::{FitnessGoal, WorkoutType};
use crate::t;

/// One catalog image, loaded (and for local files, resized) once per source.
/// A URL the renderer cannot load is swapped for the placeholder with the
/// same inline message a missing local file gets.
#[component]
pub fn PlannerImage(
    image: ReadOnlySignal<CatalogImage>,
    #[props(!optional)] max_width: Option<u32>,
    #[props(default = true)] show_caption: bool,
) -> Element {
    let config = use_app_config();
    let placeholder = config.placeholder_url.clone();
    let prepared = use_memo(move || {
        let image = image.read();
        prepare(&image.source, max_width, &config.placeholder_url)
    });
    // Failed src together with its replacement; stale once `prepared` moves on.
    let mut broken = use_signal(|| None::<(String, DisplayImage)>);

    let image = image();
    let prepared = prepared();
    let shown = match broken() {
        Some((failed, replacement)) if failed == prepared.src => replacement,
        _ => prepared,
    };
    let style = max_width
        .map(|w| format!("max-width: {w}px"))
        .unwrap_or_default();

    let failed_src = shown.src.clone();
    let on_error = move |_: ImageEvent| {
        if let Some(replacement) = broken_source(&failed_src, &placeholder) {
            warn!(src = %failed_src, "image failed to load, using placeholder");
            broken.set(Some((failed_src.clone(), replacement)));
        }
    };

    rsx! {
        figure { class: "planner-image",
            if let Some(err) = shown.error.as_ref() {
                div { class: "planner-image__error", role: "alert", "⚠️ {err}" }
            }
            img {
                class: "planner-image__img",
                src: "{shown.src}",
                alt: "{image.caption}",
                style: "{style}",
                onerror: on_error,
            }
            if show_caption {
                figcaption { class: "planner-image__caption", "{image.caption}" }
            }
        }
    }
}

#[component]
pub fn NutritionImage(goal: FitnessGoal) -> Element {
    let config = use_app_config();
    let image = config.catalog().goal_image(goal);

    rsx! {
        section { class: "planner-section planner-nutrition",
            h2 { {t!("planner-eat-title")} }
            PlannerImage { image, max_width: Some(config.max_image_width) }
        }
    }
}

#[component]
pub fn HealthyInspirations() -> Element {
    let images = use_app_config().catalog().inspirations();

    rsx! {
        section { class: "planner-section planner-inspirations",
            h3 { {t!("planner-inspiration-title")} }
            div { class: "planner-gallery",
                for image in images {
                    PlannerImage {
                        key: "{image.caption}",
                        image: image.clone(),
                        max_width: None,
                        show_caption: false,
                    }
                }
            }
        }
    }
}

#[component]
pub fn WorkoutGallery(workouts: Vec<WorkoutType>) -> Element {
    let images = use_app_config().catalog().workout_images(&workouts);

    rsx! {
        section { class: "planner-section planner-workouts",
            h2 { {t!("planner-do-title")} }
            if images.is_empty() {
                p { class: "planner-section__placeholder", {t!("planner-do-empty")} }
            } else {
                div { class: "planner-gallery",
                    for image in images {
                        PlannerImage {
                            key: "{image.caption}",
                            image: image.clone(),
                            max_width: None,
                        }
                    }
                }
            }
        }
    }
}
