//! Input domains for the planner form.
//!
//! Every widget on the planner is backed by one of these closed sets, so the
//! plan generator never has to deal with out-of-range answers.

use time::Date;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FitnessGoal {
    #[default]
    LoseWeight,
    BuildMuscle,
    IncreaseStamina,
    ImproveFlexibility,
    GeneralHealth,
}

impl FitnessGoal {
    pub const ALL: [FitnessGoal; 5] = [
        FitnessGoal::LoseWeight,
        FitnessGoal::BuildMuscle,
        FitnessGoal::IncreaseStamina,
        FitnessGoal::ImproveFlexibility,
        FitnessGoal::GeneralHealth,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FitnessGoal::LoseWeight => "Lose Weight",
            FitnessGoal::BuildMuscle => "Build Muscle",
            FitnessGoal::IncreaseStamina => "Increase Stamina",
            FitnessGoal::ImproveFlexibility => "Improve Flexibility",
            FitnessGoal::GeneralHealth => "General Health",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|goal| goal.label() == label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SessionDuration {
    #[default]
    Short,
    Moderate,
    Long,
    Extended,
}

impl SessionDuration {
    pub const ALL: [SessionDuration; 4] = [
        SessionDuration::Short,
        SessionDuration::Moderate,
        SessionDuration::Long,
        SessionDuration::Extended,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SessionDuration::Short => "15-30 mins",
            SessionDuration::Moderate => "30-45 mins",
            SessionDuration::Long => "45-60 mins",
            SessionDuration::Extended => "60+ mins",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.label() == label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DietPreference {
    #[default]
    NoPreference,
    Vegetarian,
    Vegan,
    Keto,
    LowCarb,
    HighProtein,
}

impl DietPreference {
    pub const ALL: [DietPreference; 6] = [
        DietPreference::NoPreference,
        DietPreference::Vegetarian,
        DietPreference::Vegan,
        DietPreference::Keto,
        DietPreference::LowCarb,
        DietPreference::HighProtein,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DietPreference::NoPreference => "No Preference",
            DietPreference::Vegetarian => "Vegetarian",
            DietPreference::Vegan => "Vegan",
            DietPreference::Keto => "Keto",
            DietPreference::LowCarb => "Low Carb",
            DietPreference::HighProtein => "High Protein",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.label() == label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FitnessLevel {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl FitnessLevel {
    pub const ALL: [FitnessLevel; 3] = [
        FitnessLevel::Beginner,
        FitnessLevel::Intermediate,
        FitnessLevel::Advanced,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FitnessLevel::Beginner => "Beginner",
            FitnessLevel::Intermediate => "Intermediate",
            FitnessLevel::Advanced => "Advanced",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.label() == label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkoutType {
    Cardio,
    StrengthTraining,
    YogaPilates,
    Hiit,
    Stretching,
    Cycling,
    Swimming,
}

impl WorkoutType {
    pub const ALL: [WorkoutType; 7] = [
        WorkoutType::Cardio,
        WorkoutType::StrengthTraining,
        WorkoutType::YogaPilates,
        WorkoutType::Hiit,
        WorkoutType::Stretching,
        WorkoutType::Cycling,
        WorkoutType::Swimming,
    ];

    pub fn label(self) -> &'static str {
        match self {
            WorkoutType::Cardio => "Cardio",
            WorkoutType::StrengthTraining => "Strength Training",
            WorkoutType::YogaPilates => "Yoga/Pilates",
            WorkoutType::Hiit => "HIIT",
            WorkoutType::Stretching => "Stretching",
            WorkoutType::Cycling => "Cycling",
            WorkoutType::Swimming => "Swimming",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|w| w.label() == label)
    }
}

/// Days per week the user commits to. Always within `1..=7`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WorkoutDays(u8);

impl WorkoutDays {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 7;

    /// Clamps into the slider range.
    pub fn new(days: u8) -> Self {
        Self(days.clamp(Self::MIN, Self::MAX))
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl Default for WorkoutDays {
    fn default() -> Self {
        Self(3)
    }
}

/// One snapshot of the planner form. Lives for a single render.
#[derive(Debug, Clone, PartialEq)]
pub struct UserSelection {
    pub goal: FitnessGoal,
    pub workout_days: WorkoutDays,
    pub duration: SessionDuration,
    pub diet: DietPreference,
    pub level: FitnessLevel,
    /// Kept in the order the user picked them.
    pub preferred_workouts: Vec<WorkoutType>,
    pub start_date: Date,
}

impl UserSelection {
    /// Form defaults, starting on `today`.
    pub fn starting(today: Date) -> Self {
        Self {
            goal: FitnessGoal::default(),
            workout_days: WorkoutDays::default(),
            duration: SessionDuration::default(),
            diet: DietPreference::default(),
            level: FitnessLevel::default(),
            preferred_workouts: Vec::new(),
            start_date: today,
        }
    }

    pub fn prefers(&self, workout: WorkoutType) -> bool {
        self.preferred_workouts.contains(&workout)
    }

    /// Adds or removes a workout, keeping pick order for the ones that stay.
    pub fn toggle_workout(&mut self, workout: WorkoutType, selected: bool) {
        let present = self.prefers(workout);
        if selected && !present {
            self.preferred_workouts.push(workout);
        } else if !selected && present {
            self.preferred_workouts.retain(|w| *w != workout);
        }
    }
}
