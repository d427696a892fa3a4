use std::path::PathBuf;

use crate::cli::{Args, Command};

use super::defaults::*;

/// How strictly the lopdf fallback checks the input document
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum ValidationMode {
    /// Reject documents without a catalog or with an empty page tree
    Strict,
    /// Accept anything lopdf can load
    #[default]
    Relaxed,
}

/// Runtime settings for the compression pipeline
#[derive(Debug, Clone, Default)]
pub struct CompressSettings {
    pub validation: ValidationMode,
}

/// Runtime settings for the conversion pipeline
#[derive(Debug, Clone)]
pub struct ConvertSettings {
    // Page dimensions (in mm)
    pub page_width: f32,
    pub page_height: f32,

    /// Assumed density of the source image
    pub source_dpi: f32,
    /// Clamp for the larger image dimension (in points)
    pub max_dimension: f32,
    pub jpeg_quality: u8,
    /// Directory for the transient image; the system temp dir when `None`
    pub temp_dir: Option<PathBuf>,
}

impl Default for ConvertSettings {
    fn default() -> Self {
        Self {
            page_width: PAGE_WIDTH_MM,
            page_height: PAGE_HEIGHT_MM,
            source_dpi: SOURCE_IMAGE_DPI,
            max_dimension: MAX_IMAGE_DIMENSION_PT,
            jpeg_quality: JPEG_REENCODE_QUALITY,
            temp_dir: None,
        }
    }
}

impl CompressSettings {
    /// Create settings from CLI arguments.
    ///
    /// Relaxed unless `--strict` was given, so slightly malformed files
    /// still get optimized.
    pub fn from_args(args: &Args) -> Self {
        let strict = matches!(args.command, Command::Compress { strict: true, .. });
        Self {
            validation: if strict {
                ValidationMode::Strict
            } else {
                ValidationMode::Relaxed
            },
        }
    }
}

impl ConvertSettings {
    /// Page dimensions in points (width, height)
    pub fn page_size_pt(&self) -> (f32, f32) {
        let to_pt = |mm: f32| mm / 25.4 * POINTS_PER_INCH;
        (to_pt(self.page_width), to_pt(self.page_height))
    }
}
