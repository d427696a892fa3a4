//! Source image decoding and the transient re-encode used for embedding

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ImageFormat};
use tempfile::NamedTempFile;

use crate::error::{PdfToolError, Result};

/// Raster formats accepted for conversion
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SourceFormat {
    Png,
    Jpeg,
}

impl SourceFormat {
    /// Pick the format from the file extension, ignoring case
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "png" => Ok(SourceFormat::Png),
            "jpg" | "jpeg" => Ok(SourceFormat::Jpeg),
            "" => Err(PdfToolError::UnsupportedFormat("(no extension)".to_string())),
            other => Err(PdfToolError::UnsupportedFormat(format!(".{}", other))),
        }
    }

    pub fn image_format(self) -> ImageFormat {
        match self {
            SourceFormat::Png => ImageFormat::Png,
            SourceFormat::Jpeg => ImageFormat::Jpeg,
        }
    }

    fn extension(self) -> &'static str {
        match self {
            SourceFormat::Png => ".png",
            SourceFormat::Jpeg => ".jpg",
        }
    }
}

/// Decode `path` with the decoder for `format`.
///
/// The content is not sniffed, so a JPEG named `.png` fails here.
pub fn decode_image(path: &Path, format: SourceFormat) -> Result<DynamicImage> {
    let file = File::open(path).map_err(|e| PdfToolError::decode(path, e))?;
    let img = image::load(BufReader::new(file), format.image_format())
        .map_err(|e| PdfToolError::decode(path, e))?;

    log::debug!(
        "Decoded {} as {:?}: {}x{} {:?}",
        path.display(),
        format,
        img.width(),
        img.height(),
        img.color()
    );
    Ok(img)
}

/// Write `img` to a temporary file in `format` at its original pixel size.
///
/// The file is removed when the returned handle is dropped.
pub fn write_transient(
    img: &DynamicImage,
    format: SourceFormat,
    jpeg_quality: u8,
    temp_dir: Option<&Path>,
) -> Result<NamedTempFile> {
    let mut builder = tempfile::Builder::new();
    builder.prefix("pdf-tool-image-").suffix(format.extension());
    let mut tmp = match temp_dir {
        Some(dir) => builder.tempfile_in(dir),
        None => builder.tempfile(),
    }
    .map_err(|e| PdfToolError::Encode(format!("temporary image file: {}", e)))?;

    {
        let mut writer = BufWriter::new(tmp.as_file_mut());
        let encoded = match format {
            SourceFormat::Png => img.write_to(&mut writer, ImageFormat::Png),
            SourceFormat::Jpeg => {
                let encoder = JpegEncoder::new_with_quality(&mut writer, jpeg_quality);
                if img.color().has_alpha() {
                    DynamicImage::ImageRgb8(img.to_rgb8()).write_with_encoder(encoder)
                } else {
                    img.write_with_encoder(encoder)
                }
            }
        };
        encoded.map_err(|e| PdfToolError::Encode(format!("temporary image: {}", e)))?;

        writer
            .flush()
            .map_err(|e| PdfToolError::Encode(format!("temporary image: {}", e)))?;
    }

    log::debug!("Wrote transient image {}", tmp.path().display());
    Ok(tmp)
}

/// Read the transient file back for embedding
pub fn read_transient(tmp: &NamedTempFile, format: SourceFormat) -> Result<DynamicImage> {
    decode_image(tmp.path(), format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    fn sample() -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_fn(40, 20, |x, y| {
            Rgb([(x * 6) as u8, (y * 12) as u8, 128])
        }))
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(SourceFormat::from_path(Path::new("a.png")).unwrap(), SourceFormat::Png);
        assert_eq!(SourceFormat::from_path(Path::new("a.JPG")).unwrap(), SourceFormat::Jpeg);
        assert_eq!(SourceFormat::from_path(Path::new("a.Jpeg")).unwrap(), SourceFormat::Jpeg);
        assert!(matches!(
            SourceFormat::from_path(Path::new("a.gif")),
            Err(PdfToolError::UnsupportedFormat(_))
        ));
        assert!(matches!(
            SourceFormat::from_path(Path::new("noext")),
            Err(PdfToolError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_transient_keeps_dimensions_and_is_removed() {
        for format in [SourceFormat::Png, SourceFormat::Jpeg] {
            let tmp = write_transient(&sample(), format, 90, None).unwrap();
            let path = tmp.path().to_path_buf();

            let back = read_transient(&tmp, format).unwrap();
            assert_eq!((back.width(), back.height()), (40, 20));

            drop(tmp);
            assert!(!path.exists());
        }
    }

    #[test]
    fn test_extension_content_mismatch() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("photo.png");
        sample().save_with_format(&path, ImageFormat::Jpeg).unwrap();

        let result = decode_image(&path, SourceFormat::Png);
        assert!(matches!(result, Err(PdfToolError::Decode { .. })));
    }
}
