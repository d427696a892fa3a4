//! Image-to-PDF conversion pipeline
//!
//! decode -> measure -> transient re-encode -> compose -> write

pub mod geometry;
pub mod image_source;
pub mod page;

use std::fs;
use std::path::PathBuf;

use crate::config::ConvertSettings;
use crate::error::{PdfToolError, Result};

pub use geometry::{ImageGeometry, PageGeometry, Placement};
pub use image_source::SourceFormat;
pub use page::PageComposer;

/// A validated conversion job
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionRequest {
    pub input: PathBuf,
    pub output: PathBuf,
    pub format: SourceFormat,
}

impl ConversionRequest {
    /// Check that the input exists, then that its extension is supported
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Result<Self> {
        let input = input.into();
        if !input.exists() {
            return Err(PdfToolError::NotFound(input));
        }
        let format = SourceFormat::from_path(&input)?;

        Ok(Self {
            input,
            output: output.into(),
            format,
        })
    }
}

/// Result of a successful conversion
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConversionSummary {
    pub image: ImageGeometry,
    pub placement: Placement,
}

/// Convert one image into a single-page PDF.
///
/// The transient re-encoded image is deleted on every exit path.
pub fn convert_image(
    request: &ConversionRequest,
    settings: &ConvertSettings,
) -> Result<ConversionSummary> {
    let img = image_source::decode_image(&request.input, request.format)?;
    let geometry = ImageGeometry::new(img.width(), img.height());

    let composer = PageComposer::new(settings.clone());
    let (page_width, page_height) = composer.page_size_pt();
    let placement = geometry
        .page_geometry(settings.source_dpi, settings.max_dimension)
        .centered_on(page_width, page_height);
    log::info!(
        "Placing {}x{} px image as {:.1}x{:.1} pt at ({:.1}, {:.1})",
        geometry.width_px,
        geometry.height_px,
        placement.width,
        placement.height,
        placement.x,
        placement.y
    );

    let transient = image_source::write_transient(
        &img,
        request.format,
        settings.jpeg_quality,
        settings.temp_dir.as_deref(),
    )?;
    let embedded = image_source::read_transient(&transient, request.format)?;

    let title = request
        .input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "Image".to_string());
    let bytes = composer.compose(&title, &embedded, &placement);

    fs::write(&request.output, bytes).map_err(|e| PdfToolError::write(&request.output, e))?;
    log::info!("Wrote {}", request.output.display());

    Ok(ConversionSummary {
        image: geometry,
        placement,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_input() {
        let result = ConversionRequest::new("/nonexistent/dir/photo.png", "out.pdf");
        assert!(matches!(result, Err(PdfToolError::NotFound(_))));
    }

    #[test]
    fn test_unsupported_extension() {
        let dir = tempfile::tempdir().unwrap();
        let gif = dir.path().join("image.gif");
        fs::write(&gif, b"GIF89a").unwrap();

        let result = ConversionRequest::new(&gif, dir.path().join("out.pdf"));
        assert!(matches!(result, Err(PdfToolError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_write_failure_still_cleans_up() {
        let dir = tempfile::tempdir().unwrap();
        let scratch = tempfile::tempdir().unwrap();
        let input = dir.path().join("pixel.png");
        image::RgbImage::new(8, 8).save(&input).unwrap();

        let request =
            ConversionRequest::new(&input, dir.path().join("missing-dir").join("out.pdf")).unwrap();
        let settings = ConvertSettings {
            temp_dir: Some(scratch.path().to_path_buf()),
            ..Default::default()
        };

        let result = convert_image(&request, &settings);
        assert!(matches!(result, Err(PdfToolError::Write { .. })));
        assert_eq!(fs::read_dir(scratch.path()).unwrap().count(), 0);
    }
}
