use std::fmt;
use std::fs;
use std::path::Path;

use crate::error::{PdfToolError, Result};

const KB: f64 = 1024.0;
const MB: f64 = 1024.0 * 1024.0;

/// Size comparison between an input PDF and its compressed output
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompressionReport {
    pub input_size: u64,
    pub output_size: u64,
    /// Output size as a percentage of the input; `None` for an empty input
    pub ratio_percent: Option<f64>,
    /// Percentage of space saved; negative when the output grew
    pub savings_percent: Option<f64>,
}

impl CompressionReport {
    pub fn new(input_size: u64, output_size: u64) -> Self {
        let (ratio_percent, savings_percent) = if input_size > 0 {
            let input = input_size as f64;
            let output = output_size as f64;
            (
                Some(output / input * 100.0),
                Some((input - output) / input * 100.0),
            )
        } else {
            (None, None)
        };

        Self {
            input_size,
            output_size,
            ratio_percent,
            savings_percent,
        }
    }

    /// Stat both files and compare their sizes
    pub fn from_paths(input: &Path, output: &Path) -> Result<Self> {
        let input_size = fs::metadata(input)
            .map_err(|e| PdfToolError::write(input, e))?
            .len();
        let output_size = fs::metadata(output)
            .map_err(|e| PdfToolError::write(output, e))?
            .len();
        Ok(Self::new(input_size, output_size))
    }

    /// True when compression did not shrink a non-empty input
    pub fn not_smaller(&self) -> bool {
        self.input_size > 0 && self.output_size >= self.input_size
    }
}

impl fmt::Display for CompressionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (Some(ratio), Some(savings)) = (self.ratio_percent, self.savings_percent) else {
            return writeln!(f, "Input file is empty; no compression statistics available");
        };

        writeln!(f, "Compression Results:")?;
        writeln!(
            f,
            "   Original size: {:.2} KB ({:.2} MB)",
            self.input_size as f64 / KB,
            self.input_size as f64 / MB
        )?;
        writeln!(
            f,
            "   Compressed size: {:.2} KB ({:.2} MB)",
            self.output_size as f64 / KB,
            self.output_size as f64 / MB
        )?;
        writeln!(f, "   Final size: {:.1}% of original", ratio)?;
        writeln!(f, "   Space saved: {:.1}%", savings)?;
        if self.not_smaller() {
            writeln!(f, "   Note: Output file is not smaller than input")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratio_and_savings() {
        let report = CompressionReport::new(2048, 512);
        assert_eq!(report.ratio_percent, Some(25.0));
        assert_eq!(report.savings_percent, Some(75.0));
        assert!(!report.not_smaller());

        let text = report.to_string();
        assert!(text.contains("Original size: 2.00 KB"));
        assert!(text.contains("Final size: 25.0% of original"));
        assert!(text.contains("Space saved: 75.0%"));
    }

    #[test]
    fn test_empty_input_skips_ratio() {
        let report = CompressionReport::new(0, 1234);
        assert_eq!(report.ratio_percent, None);
        assert_eq!(report.savings_percent, None);
        assert!(!report.not_smaller());
        assert!(report.to_string().contains("no compression statistics"));
    }

    #[test]
    fn test_growth_warns() {
        let report = CompressionReport::new(100, 150);
        assert!(report.not_smaller());
        assert_eq!(report.savings_percent, Some(-50.0));
        assert!(report.to_string().contains("not smaller than input"));
    }

    #[test]
    fn test_from_paths() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("a.pdf");
        let output = dir.path().join("b.pdf");
        fs::write(&input, vec![0u8; 400]).unwrap();
        fs::write(&output, vec![0u8; 100]).unwrap();

        let report = CompressionReport::from_paths(&input, &output).unwrap();
        assert_eq!(report.input_size, 400);
        assert_eq!(report.output_size, 100);

        let missing = CompressionReport::from_paths(&input, &dir.path().join("missing.pdf"));
        assert!(matches!(missing, Err(PdfToolError::Write { .. })));
    }
}
