use std::fmt;

use crate::error::{PdfToolError, Result};

/// A validated compression quality percentage in `1..=100`
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Quality(u8);

impl Quality {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 100;

    pub fn new(percent: i64) -> Result<Self> {
        if !((Self::MIN as i64)..=(Self::MAX as i64)).contains(&percent) {
            return Err(PdfToolError::InvalidArgument(format!(
                "quality must be between {} and {}, got: {}",
                Self::MIN,
                Self::MAX,
                percent
            )));
        }
        Ok(Self(percent as u8))
    }

    /// Parse a quality percentage from command-line text
    pub fn parse(text: &str) -> Result<Self> {
        let percent: i64 = text.trim().parse().map_err(|_| {
            PdfToolError::InvalidArgument(format!(
                "invalid quality percentage: {} (must be {}-{})",
                text,
                Self::MIN,
                Self::MAX
            ))
        })?;
        Self::new(percent)
    }

    pub fn percent(self) -> u8 {
        self.0
    }

    pub fn tier(self) -> QualityTier {
        QualityTier::from_quality(self)
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Ghostscript `PDFSETTINGS` presets, from most to least compressed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum QualityTier {
    /// 1-25: maximum compression, lowest quality
    Screen,
    /// 26-50: high compression, medium-low quality
    Ebook,
    /// 51-75: medium compression, good quality
    Printer,
    /// 76-100: light compression, highest quality
    Prepress,
}

impl QualityTier {
    /// Each band includes its upper bound, so boundary values land in the
    /// more compressed tier.
    pub fn from_quality(quality: Quality) -> Self {
        match quality.percent() {
            0..=25 => QualityTier::Screen,
            26..=50 => QualityTier::Ebook,
            51..=75 => QualityTier::Printer,
            _ => QualityTier::Prepress,
        }
    }

    pub fn preset(self) -> &'static str {
        match self {
            QualityTier::Screen => "/screen",
            QualityTier::Ebook => "/ebook",
            QualityTier::Printer => "/printer",
            QualityTier::Prepress => "/prepress",
        }
    }

    /// Target resolution for downsampled images
    pub fn image_resolution(self) -> u32 {
        match self {
            QualityTier::Screen => 72,
            QualityTier::Ebook => 150,
            QualityTier::Printer | QualityTier::Prepress => 300,
        }
    }

    /// `(preset, dpi)` pair handed to Ghostscript
    pub fn settings(self) -> (&'static str, u32) {
        (self.preset(), self.image_resolution())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tier(q: i64) -> (&'static str, u32) {
        Quality::new(q).unwrap().tier().settings()
    }

    #[test]
    fn test_tier_bands() {
        for q in 1..=25 {
            assert_eq!(tier(q), ("/screen", 72), "quality {}", q);
        }
        for q in 26..=50 {
            assert_eq!(tier(q), ("/ebook", 150), "quality {}", q);
        }
        for q in 51..=75 {
            assert_eq!(tier(q), ("/printer", 300), "quality {}", q);
        }
        for q in 76..=100 {
            assert_eq!(tier(q), ("/prepress", 300), "quality {}", q);
        }
    }

    #[test]
    fn test_boundaries_resolve_to_lower_tier() {
        assert_eq!(Quality::new(25).unwrap().tier(), QualityTier::Screen);
        assert_eq!(Quality::new(50).unwrap().tier(), QualityTier::Ebook);
        assert_eq!(Quality::new(75).unwrap().tier(), QualityTier::Printer);
    }

    #[test]
    fn test_out_of_range() {
        assert!(matches!(
            Quality::new(0),
            Err(PdfToolError::InvalidArgument(_))
        ));
        assert!(matches!(
            Quality::new(101),
            Err(PdfToolError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_parse() {
        assert_eq!(Quality::parse("42").unwrap().percent(), 42);
        assert_eq!(Quality::parse(" 7 ").unwrap().percent(), 7);
        assert!(matches!(
            Quality::parse("high"),
            Err(PdfToolError::InvalidArgument(_))
        ));
        assert!(matches!(
            Quality::parse("-5"),
            Err(PdfToolError::InvalidArgument(_))
        ));
    }
}
