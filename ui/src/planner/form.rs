use dioxus::logger::tracing::info;
use dioxus::prelude::*;

use crate::core::format::{format_date_input, parse_date_input};
use crate::core::plan::{generate as generate_plan, FitnessPlan};
use crate::core::selection::{
    DietPreference, FitnessGoal, FitnessLevel, SessionDuration, UserSelection, WorkoutDays,
    WorkoutType,
};
use crate::t;

/// The six questions plus the start date. Any edit drops a previously
/// generated plan; only the button produces a new one.
#[component]
pub fn PlannerForm(
    selection: Signal<UserSelection>,
    plan: Signal<Option<FitnessPlan>>,
) -> Element {
    let mut plan = plan;
    let current = selection();
    let days = current.workout_days.get();
    let start = format_date_input(current.start_date);

    let generate = move |_: MouseEvent| {
        let snapshot = selection();
        info!(
            goal = snapshot.goal.label(),
            level = snapshot.level.label(),
            workouts = snapshot.preferred_workouts.len(),
            "generating fitness plan"
        );
        plan.set(Some(generate_plan(&snapshot)));
    };

    rsx! {
        form { class: "planner-form",
            onsubmit: move |evt| evt.prevent_default(),

            label { class: "planner-form__field",
                span { class: "planner-form__label", {t!("planner-goal-label")} }
                select {
                    onchange: move |evt: FormEvent| {
                        if let Some(goal) = FitnessGoal::from_label(&evt.value()) {
                            update(selection, plan, |s| s.goal = goal);
                        }
                    },
                    for goal in FitnessGoal::ALL {
                        option {
                            key: "{goal.label()}",
                            value: goal.label(),
                            selected: current.goal == goal,
                            "{goal.label()}"
                        }
                    }
                }
            }

            label { class: "planner-form__field",
                span { class: "planner-form__label", {t!("planner-days-label")} }
                div { class: "planner-form__slider",
                    input {
                        r#type: "range",
                        min: "{WorkoutDays::MIN}",
                        max: "{WorkoutDays::MAX}",
                        step: "1",
                        value: "{days}",
                        oninput: move |evt: FormEvent| {
                            if let Ok(days) = evt.value().parse::<u8>() {
                                update(selection, plan, |s| s.workout_days = WorkoutDays::new(days));
                            }
                        },
                    }
                    output { class: "planner-form__slider-value", "{days}" }
                }
            }

            label { class: "planner-form__field",
                span { class: "planner-form__label", {t!("planner-duration-label")} }
                select {
                    onchange: move |evt: FormEvent| {
                        if let Some(duration) = SessionDuration::from_label(&evt.value()) {
                            update(selection, plan, |s| s.duration = duration);
                        }
                    },
                    for duration in SessionDuration::ALL {
                        option {
                            key: "{duration.label()}",
                            value: duration.label(),
                            selected: current.duration == duration,
                            "{duration.label()}"
                        }
                    }
                }
            }

            label { class: "planner-form__field",
                span { class: "planner-form__label", {t!("planner-diet-label")} }
                select {
                    onchange: move |evt: FormEvent| {
                        if let Some(diet) = DietPreference::from_label(&evt.value()) {
                            update(selection, plan, |s| s.diet = diet);
                        }
                    },
                    for diet in DietPreference::ALL {
                        option {
                            key: "{diet.label()}",
                            value: diet.label(),
                            selected: current.diet == diet,
                            "{diet.label()}"
                        }
                    }
                }
            }

            fieldset { class: "planner-form__field planner-form__choices",
                legend { class: "planner-form__label", {t!("planner-level-label")} }
                for level in FitnessLevel::ALL {
                    label { key: "{level.label()}", class: "planner-form__choice",
                        input {
                            r#type: "radio",
                            name: "fitness-level",
                            value: level.label(),
                            checked: current.level == level,
                            onchange: move |_| update(selection, plan, |s| s.level = level),
                        }
                        span { "{level.label()}" }
                    }
                }
            }

            fieldset { class: "planner-form__field planner-form__choices",
                legend { class: "planner-form__label", {t!("planner-workouts-label")} }
                for workout in WorkoutType::ALL {
                    label { key: "{workout.label()}", class: "planner-form__choice",
                        input {
                            r#type: "checkbox",
                            value: workout.label(),
                            checked: current.prefers(workout),
                            onchange: move |_| {
                                let picked = !selection.read().prefers(workout);
                                update(selection, plan, |s| s.toggle_workout(workout, picked));
                            },
                        }
                        span { "{workout.label()}" }
                    }
                }
            }

            label { class: "planner-form__field",
                span { class: "planner-form__label", {t!("planner-start-label")} }
                input {
                    r#type: "date",
                    value: "{start}",
                    oninput: move |evt: FormEvent| {
                        if let Some(date) = parse_date_input(&evt.value()) {
                            update(selection, plan, |s| s.start_date = date);
                        }
                    },
                }
            }

            button {
                r#type: "button",
                class: "button button--primary planner-form__generate",
                onclick: generate,
                {t!("planner-generate")}
            }
        }
    }
}

fn update(
    mut selection: Signal<UserSelection>,
    mut plan: Signal<Option<FitnessPlan>>,
    edit: impl FnOnce(&mut UserSelection),
) {
    selection.with_mut(|s| plan.with_mut(|shown| apply_edit(s, shown, edit)));
}

/// A shown plan belongs to the press that produced it; any edit drops it.
pub(crate) fn apply_edit(
    selection: &mut UserSelection,
    shown: &mut Option<FitnessPlan>,
    edit: impl FnOnce(&mut UserSelection),
) {
    edit(selection);
    *shown = None;
}
