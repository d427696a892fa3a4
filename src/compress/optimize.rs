//! Fallback compression backend using lopdf.
//!
//! Only structural compaction is done here: stream compression plus object
//! and cross-reference streams. Images are not downsampled.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use lopdf::xref::XrefType;
use lopdf::{Document, SaveOptions};

use crate::config::defaults::{OBJECT_STREAM_THRESHOLD, XREF_STREAM_THRESHOLD};
use crate::config::ValidationMode;
use crate::error::{PdfToolError, Result};

use super::quality::Quality;

/// Which lopdf writer features to enable
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct FallbackOptions {
    pub object_streams: bool,
    pub xref_streams: bool,
}

impl FallbackOptions {
    pub fn for_quality(quality: Quality) -> Self {
        let q = quality.percent();
        if q < XREF_STREAM_THRESHOLD {
            Self {
                object_streams: true,
                xref_streams: true,
            }
        } else if q < OBJECT_STREAM_THRESHOLD {
            Self {
                object_streams: true,
                xref_streams: false,
            }
        } else {
            Self::default()
        }
    }

    /// Compressed objects can only be indexed by an xref stream, so object
    /// streams always bring one along.
    fn save_options(self) -> SaveOptions {
        SaveOptions::builder()
            .use_object_streams(self.object_streams)
            .use_xref_streams(self.xref_streams || self.object_streams)
            .build()
    }
}

/// Optimize `input` into `output` without any external tool
pub fn compress_with_lopdf(
    input: &Path,
    output: &Path,
    quality: Quality,
    validation: ValidationMode,
) -> Result<()> {
    let mut doc = Document::load(input).map_err(|e| {
        PdfToolError::BackendExecution(format!(
            "lopdf failed to load {}: {}",
            input.display(),
            e
        ))
    })?;

    if validation == ValidationMode::Strict {
        validate_structure(&doc)?;
    }

    let options = FallbackOptions::for_quality(quality);
    log::info!(
        "lopdf optimization: {} objects, object streams {}, xref streams {}",
        doc.objects.len(),
        options.object_streams,
        options.xref_streams
    );

    doc.compress();
    if !options.object_streams && !options.xref_streams {
        // lopdf otherwise keeps whatever xref form the input had
        doc.reference_table.cross_reference_type = XrefType::CrossReferenceTable;
    }

    write_atomically(output, |writer| {
        doc.save_with_options(writer, options.save_options())
            .map_err(|e| {
                PdfToolError::BackendExecution(format!("lopdf optimization failed: {}", e))
            })
    })
}

/// Stage the output in a temporary file beside `output` and rename it into
/// place once `write` succeeds. On failure `output` is left untouched.
fn write_atomically<F>(output: &Path, write: F) -> Result<()>
where
    F: FnOnce(&mut BufWriter<&mut File>) -> Result<()>,
{
    let dir = match output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut staged = tempfile::Builder::new()
        .prefix(".pdf-tool-")
        .suffix(".pdf")
        .tempfile_in(dir)
        .map_err(|e| PdfToolError::write(output, e))?;

    {
        let mut writer = BufWriter::new(staged.as_file_mut());
        write(&mut writer)?;
        writer.flush().map_err(|e| PdfToolError::write(output, e))?;
    }

    staged
        .persist(output)
        .map_err(|e| PdfToolError::write(output, e.error))?;
    Ok(())
}

fn validate_structure(doc: &Document) -> Result<()> {
    if doc.trailer.get(b"Root").is_err() {
        return Err(PdfToolError::BackendExecution(
            "document has no catalog (/Root missing from trailer)".to_string(),
        ));
    }
    if doc.get_pages().is_empty() {
        return Err(PdfToolError::BackendExecution(
            "document page tree is empty".to_string(),
        ));
    }
    Ok(())
}
