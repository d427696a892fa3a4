pub mod cli;
pub mod compress;
pub mod config;
pub mod convert;
pub mod error;

pub use compress::{compress_pdf, Backend, CompressionReport, CompressionRequest, Quality};
pub use config::{CompressSettings, ConvertSettings, ValidationMode};
pub use convert::{convert_image, ConversionRequest, ConversionSummary};
pub use error::PdfToolError;

use std::path::Path;

/// Compress `input` into `output` at `quality` percent.
///
/// Uses Ghostscript when it is on `PATH` and lopdf otherwise. Library
/// consumers that need to control the probe should use [`compress_pdf`].
///
/// # Example
///
/// ```no_run
/// let report = pdf_tool::compress("scan.pdf", "scan-small.pdf", 40).unwrap();
/// println!("{}", report);
/// ```
pub fn compress(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    quality: i64,
) -> Result<CompressionReport, PdfToolError> {
    let request = CompressionRequest::new(input.as_ref(), output.as_ref(), quality)?;
    compress_pdf(
        &request,
        &CompressSettings::default(),
        &compress::SearchPath,
    )
}

/// Convert a PNG or JPEG image into a single-page PDF
pub fn convert(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
) -> Result<ConversionSummary, PdfToolError> {
    let request = ConversionRequest::new(input.as_ref(), output.as_ref())?;
    convert_image(&request, &ConvertSettings::default())
}
