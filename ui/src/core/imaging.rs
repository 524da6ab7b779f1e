//! Loading and downscaling local images for display.
//!
//! Local files are decoded, shrunk to a maximum width when wider, re-encoded
//! as PNG and embedded as a `data:` URL so every renderer (webview or browser)
//! can show them without serving the asset directory. Failures never escape:
//! [`prepare`] swaps in the placeholder and carries the message to show inline.

use std::io::{self, Cursor};
use std::path::Path;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use dioxus::logger::tracing::warn;
use image::{imageops::FilterType, DynamicImage, ImageFormat};

use super::assets::ImageSource;

#[derive(Debug, thiserror::Error)]
pub enum ImageError {
    #[error("Error: Image not found at {path}")]
    NotFound { path: String },

    #[error("Error processing image {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Error processing image {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: image::ImageError,
    },

    #[error("Error encoding resized image: {source}")]
    Encode {
        #[source]
        source: image::ImageError,
    },
}

/// Target size when `width` exceeds `max_width`; `None` means keep as is.
///
/// Height follows the same ratio and is rounded down.
pub fn scaled_size(width: u32, height: u32, max_width: u32) -> Option<(u32, u32)> {
    if width <= max_width || width == 0 {
        return None;
    }
    let new_height = u64::from(height) * u64::from(max_width) / u64::from(width);
    let new_height = u32::try_from(new_height).unwrap_or(u32::MAX).max(1);
    Some((max_width, new_height))
}

pub fn resize_to_max_width(image: DynamicImage, max_width: u32) -> DynamicImage {
    match scaled_size(image.width(), image.height(), max_width) {
        Some((width, height)) => image.resize_exact(width, height, FilterType::Triangle),
        None => image,
    }
}

/// Reads and decodes `path`, downscaling to `max_width` when given.
pub fn load_resized(path: &Path, max_width: Option<u32>) -> Result<DynamicImage, ImageError> {
    let display = path.display().to_string();
    let bytes = std::fs::read(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => ImageError::NotFound {
            path: display.clone(),
        },
        _ => ImageError::Io {
            path: display.clone(),
            source,
        },
    })?;

    let decoded = image::load_from_memory(&bytes).map_err(|source| ImageError::Decode {
        path: display,
        source,
    })?;

    Ok(match max_width {
        Some(max) => resize_to_max_width(decoded, max),
        None => decoded,
    })
}

pub fn to_data_url(image: &DynamicImage) -> Result<String, ImageError> {
    let mut buffer = Cursor::new(Vec::new());
    image
        .write_to(&mut buffer, ImageFormat::Png)
        .map_err(|source| ImageError::Encode { source })?;
    Ok(format!(
        "data:image/png;base64,{}",
        STANDARD.encode(buffer.into_inner())
    ))
}

/// What an image slot ends up rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayImage {
    pub src: String,
    /// Inline message shown above the placeholder when loading failed.
    pub error: Option<String>,
}

/// Replacement once the renderer reports that `src` failed to load. `None`
/// when `src` already is the placeholder, so a dead placeholder cannot loop.
pub fn broken_source(src: &str, placeholder: &str) -> Option<DisplayImage> {
    if src == placeholder {
        return None;
    }
    let err = ImageError::NotFound {
        path: src.to_string(),
    };
    Some(DisplayImage {
        src: placeholder.to_string(),
        error: Some(err.to_string()),
    })
}

/// Resolves `source` to something an `<img>` can show, falling back to
/// `placeholder` on any load failure.
pub fn prepare(source: &ImageSource, max_width: Option<u32>, placeholder: &str) -> DisplayImage {
    match source {
        ImageSource::Url(url) => DisplayImage {
            src: url.clone(),
            error: None,
        },
        ImageSource::File(path) => match load_file(path, max_width) {
            Ok(src) => DisplayImage { src, error: None },
            Err(err) => {
                warn!(path = %path.display(), error = %err, "image unavailable, using placeholder");
                DisplayImage {
                    src: placeholder.to_string(),
                    error: Some(err.to_string()),
                }
            }
        },
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn load_file(path: &Path, max_width: Option<u32>) -> Result<String, ImageError> {
    let image = load_resized(path, max_width)?;
    to_data_url(&image)
}

// No filesystem in the browser; the path is handed to the page as a URL and
// the stylesheet caps its width.
#[cfg(target_arch = "wasm32")]
fn load_file(path: &Path, _max_width: Option<u32>) -> Result<String, ImageError> {
    Ok(path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::assets::PLACEHOLDER_URL;
    use image::{Rgba, RgbaImage};
    use std::io::Write;

    fn blank(width: u32, height: u32) -> DynamicImage {
        DynamicImage::ImageRgba8(RgbaImage::from_pixel(width, height, Rgba([106, 13, 173, 255])))
    }

    #[test]
    fn wide_images_shrink_to_max_width() {
        assert_eq!(scaled_size(800, 600, 400), Some((400, 300)));
        assert_eq!(scaled_size(801, 601, 400), Some((400, 300)));

        let resized = resize_to_max_width(blank(800, 601), 400);
        assert_eq!((resized.width(), resized.height()), (400, 300));
    }

    #[test]
    fn narrow_images_are_untouched() {
        assert_eq!(scaled_size(300, 200, 400), None);
        assert_eq!(scaled_size(400, 200, 400), None);

        let original = blank(300, 200);
        let kept = resize_to_max_width(original.clone(), 400);
        assert_eq!(kept, original);
    }

    #[test]
    fn missing_file_reports_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.jpg");

        let err = load_resized(&path, Some(400)).unwrap_err();
        assert!(matches!(err, ImageError::NotFound { .. }));
        assert_eq!(
            err.to_string(),
            format!("Error: Image not found at {}", path.display())
        );
    }

    #[test]
    fn garbage_bytes_report_decode_error() {
        let mut file = tempfile::Builder::new().suffix(".png").tempfile().unwrap();
        file.write_all(b"definitely not a png").unwrap();

        let err = load_resized(file.path(), Some(400)).unwrap_err();
        assert!(matches!(err, ImageError::Decode { .. }));
        assert!(err.to_string().starts_with("Error processing image "));
    }

    #[test]
    fn prepare_embeds_resized_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wide.png");
        blank(800, 400).save(&path).unwrap();

        let shown = prepare(&ImageSource::File(path.clone()), Some(400), PLACEHOLDER_URL);
        assert!(shown.error.is_none());
        assert!(shown.src.starts_with("data:image/png;base64,"));

        let reloaded = load_resized(&path, Some(400)).unwrap();
        assert_eq!((reloaded.width(), reloaded.height()), (400, 200));
    }

    #[test]
    fn prepare_falls_back_to_placeholder() {
        let shown = prepare(
            &ImageSource::File("/definitely/missing/cardio.jpg".into()),
            None,
            PLACEHOLDER_URL,
        );
        assert_eq!(shown.src, PLACEHOLDER_URL);
        assert_eq!(
            shown.error.as_deref(),
            Some("Error: Image not found at /definitely/missing/cardio.jpg")
        );
    }

    #[test]
    fn unreachable_url_swaps_to_placeholder() {
        let shown = broken_source("/assets/images/lose-weight.png", PLACEHOLDER_URL);
        assert_eq!(
            shown,
            Some(DisplayImage {
                src: PLACEHOLDER_URL.to_string(),
                error: Some("Error: Image not found at /assets/images/lose-weight.png".into()),
            })
        );
        assert_eq!(broken_source(PLACEHOLDER_URL, PLACEHOLDER_URL), None);
    }

    #[test]
    fn urls_pass_through() {
        let shown = prepare(&ImageSource::Url("/assets/images/yoga.jpg".into()), Some(400), PLACEHOLDER_URL);
        assert_eq!(shown.src, "/assets/images/yoga.jpg");
        assert!(shown.error.is_none());
    }
}
