//! Shared UI crate for FitBuddy Pro. All cross-platform logic and views live
//! here; the platform crates only supply routing, asset location and launch.

pub mod charts;
pub mod config;
pub mod core;
pub mod dashboard;
pub mod i18n;
pub mod planner;
pub mod views;

pub mod components {
    // Localized application navbar (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::register_nav;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;

    mod page_header;
    pub use page_header::PageHeader;
}

/// Shared theme, embedded so every platform can inline it.
pub const THEME_CSS: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/theme/main.css"));

#[cfg(test)]
mod tests;
