//! PDF compression pipeline
//!
//! Validates the request, picks a backend (Ghostscript when installed,
//! lopdf otherwise), runs it, and reports the size change.

pub mod ghostscript;
pub mod optimize;
pub mod probe;
pub mod quality;
pub mod report;

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::CompressSettings;
use crate::error::{PdfToolError, Result};

pub use optimize::FallbackOptions;
pub use probe::{Available, OptimizerProbe, SearchPath, Unavailable};
pub use quality::{Quality, QualityTier};
pub use report::CompressionReport;

/// A validated compression job
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompressionRequest {
    pub input: PathBuf,
    pub output: PathBuf,
    pub quality: Quality,
}

impl CompressionRequest {
    /// Validate quality, then distinct paths, then that the input exists
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>, quality: i64) -> Result<Self> {
        let quality = Quality::new(quality)?;
        Self::with_quality(input.into(), output.into(), quality)
    }

    pub fn with_quality(input: PathBuf, output: PathBuf, quality: Quality) -> Result<Self> {
        if same_file(&input, &output) {
            return Err(PdfToolError::InvalidArgument(
                "input and output files cannot be the same".to_string(),
            ));
        }
        if !input.exists() {
            return Err(PdfToolError::NotFound(input));
        }

        Ok(Self {
            input,
            output,
            quality,
        })
    }
}

fn same_file(a: &Path, b: &Path) -> bool {
    if a == b {
        return true;
    }
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// The compression engine chosen for one request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Backend {
    /// Full re-encode with image downsampling
    Ghostscript { executable: PathBuf },
    /// Structural optimization only
    Lopdf,
}

impl Backend {
    pub fn select(probe: &dyn OptimizerProbe) -> Self {
        match probe.locate() {
            Some(executable) => Backend::Ghostscript { executable },
            None => Backend::Lopdf,
        }
    }

    pub fn describe(&self) -> &'static str {
        match self {
            Backend::Ghostscript { .. } => "Using Ghostscript for compression...",
            Backend::Lopdf => "Ghostscript not found, using lopdf for basic optimization...",
        }
    }

    /// Run this backend, then compare input and output sizes
    pub fn compress(
        &self,
        request: &CompressionRequest,
        settings: &CompressSettings,
    ) -> Result<CompressionReport> {
        log::info!(
            "Compressing {} at {} ({:?} tier) with {:?}",
            request.input.display(),
            request.quality,
            request.quality.tier(),
            self
        );

        self.run(request, settings)?;

        let report = CompressionReport::from_paths(&request.input, &request.output)?;
        if report.not_smaller() {
            log::warn!(
                "Output {} ({} bytes) is not smaller than input ({} bytes)",
                request.output.display(),
                report.output_size,
                report.input_size
            );
        }
        Ok(report)
    }

    fn run(&self, request: &CompressionRequest, settings: &CompressSettings) -> Result<()> {
        match self {
            Backend::Ghostscript { executable } => ghostscript::compress_with_ghostscript(
                executable,
                request.quality.tier(),
                &request.input,
                &request.output,
            ),
            Backend::Lopdf => optimize::compress_with_lopdf(
                &request.input,
                &request.output,
                request.quality,
                settings.validation,
            ),
        }
    }
}

/// Compress a validated request and return the size report.
///
/// Prints which backend was chosen. The probe runs on every call so a
/// fresh Ghostscript install is picked up; the result is never cached.
pub fn compress_pdf(
    request: &CompressionRequest,
    settings: &CompressSettings,
    probe: &dyn OptimizerProbe,
) -> Result<CompressionReport> {
    let backend = Backend::select(probe);
    println!("{}", backend.describe());
    backend.compress(request, settings)
}
