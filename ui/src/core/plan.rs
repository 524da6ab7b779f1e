//! Personalized plan generation.
//!
//! `generate` is a pure function of a [`UserSelection`]: the same answers
//! always yield byte-identical text. Each suggestion line branches on a single
//! answer, independently of the others.

use std::fmt::Write as _;

use super::format::format_long_date;
use super::selection::{FitnessGoal, FitnessLevel, UserSelection, WorkoutType};

pub const NO_PREFERENCE: &str = "No specific preference";

/// Suggestions every plan ends with, after the personalized ones.
const STANDING_SUGGESTIONS: [&str; 3] = [
    "Stay hydrated and track your macros with an app.",
    "Set a weekly progress checkpoint every Sunday.",
    "Optional: Sync with a fitness tracker to monitor steps, sleep, and calories.",
];

/// A rendered plan: the echoed answers followed by the suggestion bullets.
#[derive(Debug, Clone, PartialEq)]
pub struct FitnessPlan {
    pub summary: Vec<(&'static str, String)>,
    pub suggestions: Vec<String>,
}

impl FitnessPlan {
    /// Markdown rendering, one summary field per line then the bullet list.
    pub fn to_markdown(&self) -> String {
        let mut out = String::new();
        for (label, value) in &self.summary {
            let _ = writeln!(out, "**{label}:** {value}");
        }
        out.push_str("\n**Suggested Plan:**\n");
        for line in &self.suggestions {
            let _ = writeln!(out, "- {line}");
        }
        out
    }
}

pub fn generate(selection: &UserSelection) -> FitnessPlan {
    let summary = vec![
        ("Goal", selection.goal.label().to_string()),
        (
            "Workout Frequency",
            format!("{} days/week", selection.workout_days.get()),
        ),
        ("Session Duration", selection.duration.label().to_string()),
        ("Diet Preference", selection.diet.label().to_string()),
        ("Fitness Level", selection.level.label().to_string()),
        (
            "Preferred Workouts",
            join_preferences(&selection.preferred_workouts),
        ),
        ("Start Date", format_long_date(selection.start_date)),
    ];

    let mut suggestions = vec![
        opening_line(selection.level).to_string(),
        emphasis_line(selection.goal).to_string(),
        recovery_line(&selection.preferred_workouts).to_string(),
    ];
    suggestions.extend(STANDING_SUGGESTIONS.iter().map(|s| s.to_string()));

    FitnessPlan {
        summary,
        suggestions,
    }
}

pub fn opening_line(level: FitnessLevel) -> &'static str {
    match level {
        FitnessLevel::Beginner => "Begin with light cardio and stretching.",
        FitnessLevel::Intermediate | FitnessLevel::Advanced => {
            "Include strength training and HIIT sessions."
        }
    }
}

pub fn emphasis_line(goal: FitnessGoal) -> &'static str {
    match goal {
        FitnessGoal::LoseWeight => "Focus on maintaining a calorie deficit and clean eating.",
        _ => "Prioritize protein intake and resistance training.",
    }
}

pub fn recovery_line(preferred: &[WorkoutType]) -> &'static str {
    if preferred.contains(&WorkoutType::YogaPilates) {
        "Incorporate mindfulness and yoga once a week for flexibility and recovery."
    } else {
        "Ensure rest and recovery days are built-in."
    }
}

/// Comma-joined labels in pick order, or the no-preference sentinel.
pub fn join_preferences(preferred: &[WorkoutType]) -> String {
    if preferred.is_empty() {
        return NO_PREFERENCE.to_string();
    }
    preferred
        .iter()
        .map(|w| w.label())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::selection::{DietPreference, SessionDuration, WorkoutDays};
    use time::macros::date;

    fn selection() -> UserSelection {
        UserSelection::starting(date!(2024 - 06 - 01))
    }

    #[test]
    fn opening_line_depends_only_on_beginner() {
        for level in FitnessLevel::ALL {
            let mut s = selection();
            s.level = level;
            let text = generate(&s).to_markdown();
            assert_eq!(
                text.contains("light cardio and stretching"),
                level == FitnessLevel::Beginner,
                "level {level:?}"
            );
        }
    }

    #[test]
    fn calorie_deficit_only_for_weight_loss() {
        for goal in FitnessGoal::ALL {
            let mut s = selection();
            s.goal = goal;
            let text = generate(&s).to_markdown();
            assert_eq!(
                text.contains("calorie deficit"),
                goal == FitnessGoal::LoseWeight,
                "goal {goal:?}"
            );
        }
    }

    #[test]
    fn yoga_switches_recovery_line() {
        let mut s = selection();
        s.preferred_workouts = vec![WorkoutType::Cardio, WorkoutType::Cycling];
        assert!(!generate(&s).to_markdown().contains("mindfulness and yoga"));

        s.preferred_workouts.push(WorkoutType::YogaPilates);
        assert!(generate(&s).to_markdown().contains("mindfulness and yoga"));
    }

    #[test]
    fn preferences_join_in_pick_order() {
        assert_eq!(join_preferences(&[]), "No specific preference");
        assert_eq!(
            join_preferences(&[WorkoutType::Cardio, WorkoutType::Hiit]),
            "Cardio, HIIT"
        );
        assert_eq!(
            join_preferences(&[WorkoutType::Hiit, WorkoutType::Cardio]),
            "HIIT, Cardio"
        );
    }

    #[test]
    fn generation_is_repeatable() {
        let mut s = selection();
        s.preferred_workouts = vec![WorkoutType::Swimming, WorkoutType::YogaPilates];
        assert_eq!(generate(&s).to_markdown(), generate(&s).to_markdown());
    }

    #[test]
    fn intermediate_muscle_builder_scenario() {
        let s = UserSelection {
            goal: FitnessGoal::BuildMuscle,
            workout_days: WorkoutDays::new(4),
            duration: SessionDuration::Moderate,
            diet: DietPreference::HighProtein,
            level: FitnessLevel::Intermediate,
            preferred_workouts: vec![WorkoutType::StrengthTraining],
            start_date: date!(2024 - 06 - 01),
        };
        let text = generate(&s).to_markdown();

        for needle in [
            "strength training and HIIT sessions",
            "protein intake and resistance training",
            "rest and recovery days",
            "Strength Training",
            "June 01, 2024",
            "4 days/week",
            "30-45 mins",
            "High Protein",
        ] {
            assert!(text.contains(needle), "missing {needle:?} in:\n{text}");
        }
    }

    #[test]
    fn standing_suggestions_close_the_list() {
        let plan = generate(&selection());
        assert_eq!(plan.suggestions.len(), 6);
        assert_eq!(
            plan.suggestions.last().map(String::as_str),
            Some("Optional: Sync with a fitness tracker to monitor steps, sleep, and calories.")
        );
        assert!(plan
            .to_markdown()
            .starts_with("**Goal:** Lose Weight\n**Workout Frequency:** 3 days/week\n"));
    }
}
