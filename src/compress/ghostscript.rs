//! Primary compression backend: re-encode through Ghostscript's pdfwrite device.

use std::ffi::OsString;
use std::path::Path;
use std::process::{Command, Stdio};

use crate::config::defaults::PDF_COMPATIBILITY_LEVEL;
use crate::error::{PdfToolError, Result};

use super::quality::QualityTier;

/// Build the Ghostscript argument list for a tier.
///
/// The input path is always the final positional argument.
pub fn ghostscript_args(tier: QualityTier, input: &Path, output: &Path) -> Vec<OsString> {
    let (preset, dpi) = tier.settings();

    let mut args: Vec<OsString> = [
        "-q".to_string(),
        "-dNOPAUSE".to_string(),
        "-dBATCH".to_string(),
        "-dSAFER".to_string(),
        "-sDEVICE=pdfwrite".to_string(),
        format!("-dCompatibilityLevel={}", PDF_COMPATIBILITY_LEVEL),
        format!("-dPDFSETTINGS={}", preset),
        "-dEmbedAllFonts=true".to_string(),
        "-dSubsetFonts=true".to_string(),
        "-dColorImageDownsampleType=/Bicubic".to_string(),
        format!("-dColorImageResolution={}", dpi),
        "-dGrayImageDownsampleType=/Bicubic".to_string(),
        format!("-dGrayImageResolution={}", dpi),
        "-dMonoImageDownsampleType=/Bicubic".to_string(),
        format!("-dMonoImageResolution={}", dpi),
    ]
    .into_iter()
    .map(OsString::from)
    .collect();

    let mut output_arg = OsString::from("-sOutputFile=");
    output_arg.push(output.as_os_str());
    args.push(output_arg);
    args.push(input.as_os_str().to_owned());

    args
}

/// Run Ghostscript and wait for it to exit.
///
/// stderr is inherited so Ghostscript's own diagnostics reach the user.
/// There is no timeout: a hung child blocks the caller.
pub fn compress_with_ghostscript(
    executable: &Path,
    tier: QualityTier,
    input: &Path,
    output: &Path,
) -> Result<()> {
    let args = ghostscript_args(tier, input, output);
    log::debug!("Running {} {:?}", executable.display(), args);

    let status = Command::new(executable)
        .args(&args)
        .stdin(Stdio::null())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|e| {
            PdfToolError::BackendExecution(format!(
                "failed to start {}: {}",
                executable.display(),
                e
            ))
        })?;

    if !status.success() {
        return Err(PdfToolError::BackendExecution(format!(
            "ghostscript compression failed: {}",
            status
        )));
    }

    Ok(())
}
