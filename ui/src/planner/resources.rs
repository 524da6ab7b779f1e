use dioxus::prelude::*;

use crate::t;

#[component]
pub fn UsefulResources() -> Element {
    let links = [
        (
            t!("resource-beginner"),
            "https://www.verywellfit.com/beginners-guide-to-working-out-1231143",
        ),
        (
            t!("resource-diet"),
            "https://www.eatright.org/health/wellness/healthy-eating",
        ),
        (
            t!("resource-trackers"),
            "https://www.tomsguide.com/best-picks/best-fitness-trackers",
        ),
        (
            t!("resource-yoga"),
            "https://www.yogajournal.com/poses/yoga-for/beginners/",
        ),
        (
            t!("resource-cycling"),
            "https://www.bicycling.com/training/a20044096/5-cycling-workouts-everyone-should-know/",
        ),
    ];

    rsx! {
        section { class: "planner-section planner-resources",
            h2 { {t!("planner-resources-title")} }
            ul { class: "planner-resources__list",
                for (label, href) in links {
                    li { key: "{href}",
                        a { href: "{href}", target: "_blank", rel: "noopener noreferrer", "{label}" }
                    }
                }
            }
        }
    }
}
