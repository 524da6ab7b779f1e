//! Process-wide configuration.
//!
//! The platform entry point installs an [`AppConfig`] once before launching.
//! After that it never changes. The root component hands it to the tree with
//! `use_context_provider`, so views read it from context rather than from a
//! mutable global.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use dioxus::logger::tracing::{debug, info};
use dioxus::prelude::*;
use once_cell::sync::OnceCell;

use crate::charts::ChartTheme;
use crate::core::assets::{AssetResolver, BundledDir, ImageCatalog, UrlPrefix, PLACEHOLDER_URL};

pub const DEFAULT_MAX_IMAGE_WIDTH: u32 = 400;

/// The catalog's image folder. Bundling copies it into the app's assets with
/// the file names inside kept, so the catalog tables resolve against it.
pub const IMAGE_DIR: Asset = asset!("/assets/images", FolderAssetOptions::new());

/// Image folder as served to the browser.
pub fn bundled_image_urls() -> UrlPrefix {
    UrlPrefix::new(IMAGE_DIR.to_string())
}

/// Image folder on disk: the source tree while developing, otherwise its
/// bundled copy under `resource_dir`.
pub fn bundled_image_dir(resource_dir: &Path) -> BundledDir {
    let folder = IMAGE_DIR.bundled();
    let source = PathBuf::from(folder.absolute_source_path());
    if source.is_dir() {
        return BundledDir::new(source);
    }
    BundledDir::new(resource_dir.join(folder.bundled_path().trim_start_matches('/')))
}

#[cfg(target_arch = "wasm32")]
fn default_assets() -> Arc<dyn AssetResolver> {
    Arc::new(bundled_image_urls())
}

#[cfg(not(target_arch = "wasm32"))]
fn default_assets() -> Arc<dyn AssetResolver> {
    Arc::new(bundled_image_dir(Path::new("assets")))
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub assets: Arc<dyn AssetResolver>,
    /// Widest a nutrition image is rendered, in pixels.
    pub max_image_width: u32,
    pub placeholder_url: String,
    pub chart_theme: ChartTheme,
}

impl AppConfig {
    pub fn with_assets(assets: Arc<dyn AssetResolver>) -> Self {
        Self {
            assets,
            ..Self::default()
        }
    }

    pub fn catalog(&self) -> ImageCatalog {
        ImageCatalog::new(self.assets.clone(), self.placeholder_url.clone())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            assets: default_assets(),
            max_image_width: DEFAULT_MAX_IMAGE_WIDTH,
            placeholder_url: PLACEHOLDER_URL.to_string(),
            chart_theme: ChartTheme::default(),
        }
    }
}

static CONFIG: OnceCell<AppConfig> = OnceCell::new();

/// Installs the configuration. Only the first call has any effect.
pub fn install(config: AppConfig) {
    let summary = format!("{:?}", config.assets);
    if CONFIG.set(config).is_ok() {
        info!(assets = %summary, "configuration installed");
    } else {
        debug!("configuration already installed; ignoring");
    }
}

/// The installed configuration, or the defaults when none was installed.
pub fn current() -> &'static AppConfig {
    CONFIG.get_or_init(AppConfig::default)
}

/// Configuration provided by the root component, falling back to [`current`].
pub fn use_app_config() -> AppConfig {
    try_use_context::<AppConfig>().unwrap_or_else(|| current().clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::assets::{CatalogImage, ImageSource};
    use crate::core::imaging::prepare;
    use crate::core::selection::{FitnessGoal, WorkoutType};

    #[test]
    fn defaults_cap_images_at_400px() {
        let config = AppConfig::default();
        assert_eq!(config.max_image_width, 400);
        assert_eq!(config.placeholder_url, PLACEHOLDER_URL);
    }

    #[test]
    fn catalog_uses_configured_resolver() {
        let config = AppConfig::with_assets(Arc::new(BundledDir::new("/srv/images")));
        let image = config.catalog().workout_image(WorkoutType::Cycling);
        assert_eq!(image.source, ImageSource::File("/srv/images/cycling.png".into()));
    }

    #[test]
    fn later_install_is_ignored() {
        install(AppConfig {
            max_image_width: 320,
            ..AppConfig::default()
        });
        let installed = current().max_image_width;
        install(AppConfig {
            max_image_width: 640,
            ..AppConfig::default()
        });
        assert_eq!(current().max_image_width, installed);
        assert_ne!(current().max_image_width, 640);
    }

    #[test]
    fn bundled_images_cover_the_catalog() {
        let config = AppConfig::with_assets(Arc::new(bundled_image_dir(Path::new("unused"))));
        let catalog = config.catalog();

        let mut images: Vec<CatalogImage> =
            FitnessGoal::ALL.into_iter().map(|g| catalog.goal_image(g)).collect();
        images.extend(catalog.workout_images(&WorkoutType::ALL));
        images.extend(catalog.inspirations());

        for image in images.iter().filter(|i| i.found) {
            let shown = prepare(&image.source, Some(config.max_image_width), &config.placeholder_url);
            assert_eq!(shown.error, None, "{}", image.caption);
            assert!(shown.src.starts_with("data:image/png;base64,"));
        }
        assert_eq!(images.iter().filter(|i| !i.found).count(), 1);
    }
}
