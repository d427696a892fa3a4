/// Density assumed for source images when converting pixels to points
pub const SOURCE_IMAGE_DPI: f32 = 300.0;

/// PDF user-space units per inch
pub const POINTS_PER_INCH: f32 = 72.0;

/// Largest page-content dimension for a converted image, in points
pub const MAX_IMAGE_DIMENSION_PT: f32 = 500.0;

/// A4 portrait page size in mm
pub const PAGE_WIDTH_MM: f32 = 210.0;
pub const PAGE_HEIGHT_MM: f32 = 297.0;

/// JPEG quality used when re-encoding the transient image
pub const JPEG_REENCODE_QUALITY: u8 = 90;

/// PDF version requested from Ghostscript
pub const PDF_COMPATIBILITY_LEVEL: &str = "1.4";

/// Quality thresholds for the lopdf fallback.
/// Below XREF_STREAM_THRESHOLD both stream kinds are enabled,
/// below OBJECT_STREAM_THRESHOLD only object streams.
pub const XREF_STREAM_THRESHOLD: u8 = 50;
pub const OBJECT_STREAM_THRESHOLD: u8 = 80;

/// Ghostscript executable names, in probe order
#[cfg(windows)]
pub const GHOSTSCRIPT_CANDIDATES: &[&str] = &["gswin64c", "gswin32c"];
#[cfg(not(windows))]
pub const GHOSTSCRIPT_CANDIDATES: &[&str] = &["gs"];
