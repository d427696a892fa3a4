use crate::config::defaults::POINTS_PER_INCH;

/// Pixel dimensions of a decoded source image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageGeometry {
    pub width_px: u32,
    pub height_px: u32,
}

/// Size the image occupies on the page, in points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub width_pt: f32,
    pub height_pt: f32,
}

/// Position and size of the image on the page, in points from the bottom-left
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl ImageGeometry {
    pub fn new(width_px: u32, height_px: u32) -> Self {
        Self {
            width_px,
            height_px,
        }
    }

    /// Convert to points at `dpi`, then clamp the larger side to `max_dimension`.
    ///
    /// Aspect ratio is preserved. Small images are never scaled up.
    pub fn page_geometry(&self, dpi: f32, max_dimension: f32) -> PageGeometry {
        let mut width_pt = self.width_px as f32 * POINTS_PER_INCH / dpi;
        let mut height_pt = self.height_px as f32 * POINTS_PER_INCH / dpi;

        if width_pt > max_dimension || height_pt > max_dimension {
            if width_pt > height_pt {
                height_pt = height_pt * max_dimension / width_pt;
                width_pt = max_dimension;
            } else {
                width_pt = width_pt * max_dimension / height_pt;
                height_pt = max_dimension;
            }
        }

        PageGeometry {
            width_pt,
            height_pt,
        }
    }
}

impl PageGeometry {
    /// Center this geometry on a page of the given size
    pub fn centered_on(&self, page_width: f32, page_height: f32) -> Placement {
        Placement {
            x: (page_width - self.width_pt) / 2.0,
            y: (page_height - self.height_pt) / 2.0,
            width: self.width_pt,
            height: self.height_pt,
        }
    }
}
