//! Image lookup for the planner.
//!
//! Category → file name tables are fixed. Turning a file name into something
//! loadable is delegated to an [`AssetResolver`] supplied by the platform, so
//! the same tables work against a bundled directory on desktop and a URL
//! prefix on the web.
//!
//! [`ImageCatalog`] lookups are total: a category without an entry resolves
//! to the placeholder with a "No Image Available" caption instead of handing
//! the miss back to the caller.

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use dioxus::logger::tracing::debug;

use super::selection::{FitnessGoal, WorkoutType};

pub const PLACEHOLDER_URL: &str = "https://via.placeholder.com/400x300?text=No+Image+Available";

const GOAL_IMAGES: [(FitnessGoal, &str); 5] = [
    (FitnessGoal::LoseWeight, "lose-weight.png"),
    (FitnessGoal::BuildMuscle, "build-muscle.png"),
    (FitnessGoal::IncreaseStamina, "increase-stamina.png"),
    (FitnessGoal::ImproveFlexibility, "improve-flexibility.png"),
    (FitnessGoal::GeneralHealth, "general-health.png"),
];

// Stretching has no artwork yet and falls through to the placeholder.
const WORKOUT_IMAGES: [(WorkoutType, &str); 6] = [
    (WorkoutType::Cardio, "cardio.png"),
    (WorkoutType::StrengthTraining, "strength-training.png"),
    (WorkoutType::YogaPilates, "yoga.png"),
    (WorkoutType::Hiit, "hiit.png"),
    (WorkoutType::Cycling, "cycling.png"),
    (WorkoutType::Swimming, "swimming.png"),
];

const INSPIRATION_IMAGES: [(&str, &str); 4] = [
    ("Fruits", "fruits.png"),
    ("Garden salad", "garden-salad.png"),
    ("Tropical smoothie", "tropical-smoothie.png"),
    ("Veggies", "veggies.png"),
];

/// Where an image can be loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// Local file, decoded and resized before display.
    File(PathBuf),
    /// Anything the renderer can fetch itself.
    Url(String),
}

impl ImageSource {
    pub fn placeholder() -> Self {
        ImageSource::Url(PLACEHOLDER_URL.to_string())
    }
}

/// Maps a bundled image file name to a loadable source.
pub trait AssetResolver: Send + Sync + fmt::Debug {
    fn locate(&self, file_name: &str) -> ImageSource;
}

/// Resolves against a directory on disk (desktop bundles).
#[derive(Debug, Clone)]
pub struct BundledDir {
    root: PathBuf,
}

impl BundledDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl AssetResolver for BundledDir {
    fn locate(&self, file_name: &str) -> ImageSource {
        ImageSource::File(self.root.join(file_name))
    }
}

/// Resolves to `{base}/{file_name}` URLs (web builds).
#[derive(Debug, Clone)]
pub struct UrlPrefix {
    base: String,
}

impl UrlPrefix {
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into();
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }
}

impl AssetResolver for UrlPrefix {
    fn locate(&self, file_name: &str) -> ImageSource {
        ImageSource::Url(format!("{}/{}", self.base, file_name))
    }
}

/// A looked-up image together with the caption it is shown with.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogImage {
    pub source: ImageSource,
    pub caption: String,
    /// `false` when the category had no entry and the placeholder was used.
    pub found: bool,
}

#[derive(Debug, Clone)]
pub struct ImageCatalog {
    resolver: Arc<dyn AssetResolver>,
    placeholder: String,
}

impl ImageCatalog {
    pub fn new(resolver: Arc<dyn AssetResolver>, placeholder: impl Into<String>) -> Self {
        Self {
            resolver,
            placeholder: placeholder.into(),
        }
    }

    pub fn placeholder(&self) -> ImageSource {
        ImageSource::Url(self.placeholder.clone())
    }

    pub fn goal_image(&self, goal: FitnessGoal) -> CatalogImage {
        match lookup(&GOAL_IMAGES, &goal) {
            Some(file) => CatalogImage {
                source: self.resolver.locate(file),
                caption: "Recommended Nutrition".to_string(),
                found: true,
            },
            None => {
                debug!(goal = goal.label(), "no nutrition image for goal");
                CatalogImage {
                    source: self.placeholder(),
                    caption: "No Image Available".to_string(),
                    found: false,
                }
            }
        }
    }

    pub fn workout_image(&self, workout: WorkoutType) -> CatalogImage {
        let activity = workout.label();
        match lookup(&WORKOUT_IMAGES, &workout) {
            Some(file) => CatalogImage {
                source: self.resolver.locate(file),
                caption: format!("{activity} Routine"),
                found: true,
            },
            None => {
                debug!(activity, "no routine image for workout");
                CatalogImage {
                    source: self.placeholder(),
                    caption: format!("No Image Available for {activity}"),
                    found: false,
                }
            }
        }
    }

    /// One entry per preferred workout, in the order given.
    pub fn workout_images(&self, workouts: &[WorkoutType]) -> Vec<CatalogImage> {
        workouts.iter().map(|w| self.workout_image(*w)).collect()
    }

    /// The four fixed healthy-food pictures; the caption doubles as alt text.
    pub fn inspirations(&self) -> Vec<CatalogImage> {
        INSPIRATION_IMAGES
            .iter()
            .map(|(alt, file)| CatalogImage {
                source: self.resolver.locate(file),
                caption: alt.to_string(),
                found: true,
            })
            .collect()
    }
}

fn lookup<K: PartialEq>(table: &[(K, &'static str)], key: &K) -> Option<&'static str> {
    table
        .iter()
        .find(|(candidate, _)| candidate == key)
        .map(|(_, file)| *file)
}
