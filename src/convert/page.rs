//! Single-page document composition with printpdf

use image::DynamicImage;
use printpdf::{
    ImageCompression, ImageOptimizationOptions, Mm, Op, PdfDocument, PdfPage, PdfSaveOptions,
    PdfWarnMsg, Pt, RawImage, RawImageData, RawImageFormat, XObjectTransform,
};

use crate::config::defaults::POINTS_PER_INCH;
use crate::config::ConvertSettings;

use super::geometry::Placement;

/// Builds a one-page PDF holding a single image
pub struct PageComposer {
    settings: ConvertSettings,
}

impl PageComposer {
    pub fn new(settings: ConvertSettings) -> Self {
        Self { settings }
    }

    /// Page size in points (width, height)
    pub fn page_size_pt(&self) -> (f32, f32) {
        self.settings.page_size_pt()
    }

    /// Embed `img` at `placement` and serialize the document
    pub fn compose(&self, title: &str, img: &DynamicImage, placement: &Placement) -> Vec<u8> {
        let mut doc = PdfDocument::new(title);
        let image_id = doc.add_image(&raw_image(img));

        // At 72 DPI one pixel is one point, so the scale maps pixels
        // straight onto the placement size.
        let scale_x = placement.width / img.width() as f32;
        let scale_y = placement.height / img.height() as f32;

        let ops = vec![Op::UseXobject {
            id: image_id,
            transform: XObjectTransform {
                translate_x: Some(Pt(placement.x)),
                translate_y: Some(Pt(placement.y)),
                rotate: None,
                scale_x: Some(scale_x),
                scale_y: Some(scale_y),
                dpi: Some(POINTS_PER_INCH),
            },
        }];

        let page = PdfPage::new(
            Mm(self.settings.page_width),
            Mm(self.settings.page_height),
            ops,
        );
        doc.with_pages(vec![page]);

        let options = PdfSaveOptions {
            image_optimization: Some(lossless_embedding()),
            ..Default::default()
        };
        let mut warnings: Vec<PdfWarnMsg> = Vec::new();
        let bytes = doc.save(&options, &mut warnings);
        if !warnings.is_empty() {
            log::debug!("printpdf reported {} warnings", warnings.len());
        }
        bytes
    }
}

/// Flate at the source pixel size. printpdf's defaults would downsample
/// anything over 2MB and switch colour images to JPEG.
fn lossless_embedding() -> ImageOptimizationOptions {
    ImageOptimizationOptions {
        quality: None,
        max_image_size: None,
        dither_greyscale: None,
        convert_to_greyscale: None,
        auto_optimize: Some(false),
        format: Some(ImageCompression::Flate),
    }
}

/// Raw pixels for printpdf; alpha is kept only when the image has it
fn raw_image(img: &DynamicImage) -> RawImage {
    let (pixels, data_format) = if img.color().has_alpha() {
        (img.to_rgba8().into_raw(), RawImageFormat::RGBA8)
    } else {
        (img.to_rgb8().into_raw(), RawImageFormat::RGB8)
    };

    RawImage {
        pixels: RawImageData::U8(pixels),
        width: img.width() as usize,
        height: img.height() as usize,
        data_format,
        tag: Vec::new(),
    }
}
