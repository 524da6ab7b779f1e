//! The fitness planner: questionnaire, generated plan and the image/resource
//! sections below it.

mod form;
pub use form::PlannerForm;

mod gallery;
pub use gallery::{HealthyInspirations, NutritionImage, PlannerImage, WorkoutGallery};

mod plan_panel;
pub use plan_panel::PlanPanel;

mod resources;
pub use resources::UsefulResources;

mod view;
pub use view::PlannerView;
