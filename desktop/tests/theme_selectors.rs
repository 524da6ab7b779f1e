#![cfg(test)]
//! Selectors the shared components render must stay in the theme. Add a
//! selector here when a component starts relying on it.

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

const NAVBAR_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/styling/navbar.css"
));

const REQUIRED_SELECTORS: &[&str] = &[
    // Layout
    ".page {",
    ".page-header__welcome",
    ".button--primary",
    // Planner
    ".planner-form__field",
    ".planner-form__slider-value",
    ".plan-panel__suggestions",
    ".plan-panel__ready",
    ".plan-celebration__balloon",
    ".planner-gallery",
    ".planner-image__error",
    ".planner-image__caption",
    // Dashboard
    ".dashboard__row",
    ".dashboard__panel--wide",
    ".dashboard__footer",
    ".progress-chart__svg",
];

#[test]
fn theme_contains_required_selectors() {
    let missing: Vec<_> = REQUIRED_SELECTORS
        .iter()
        .filter(|sel| !THEME_CSS.contains(*sel))
        .collect();
    assert!(missing.is_empty(), "theme is missing selectors: {missing:?}");
}

#[test]
fn navbar_styles_links_and_active_state() {
    for sel in [".navbar__link", ".navbar__link.active", ".navbar__brand-mark"] {
        assert!(NAVBAR_CSS.contains(sel), "navbar.css is missing `{sel}`");
    }
}
