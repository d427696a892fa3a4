use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "pdf-tool")]
#[command(
    author,
    version,
    about = "A CLI tool for PDF compression and image-to-PDF conversion",
    long_about = "A tool for compressing PDF files and converting images (PNG/JPEG) to PDF format.

For best compression results, install Ghostscript:
  - Linux: sudo apt install ghostscript
  - macOS: brew install ghostscript
  - Windows: Download from ghostscript.com"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Compress a PDF file
    #[command(long_about = "Compress a PDF file with specified quality percentage.

Quality levels:
  1-25:   Maximum compression, lowest quality (/screen preset)
  26-50:  High compression, medium-low quality (/ebook preset)
  51-75:  Medium compression, good quality (/printer preset)
  76-100: Light compression, highest quality (/prepress preset)")]
    Compress {
        /// Input PDF file path
        input: PathBuf,

        /// Output PDF file path
        output: PathBuf,

        /// Quality percentage (1-100)
        ///
        /// Kept as text so that out-of-range and non-numeric values are
        /// reported by the tool itself.
        quality: String,

        /// Reject structurally broken PDFs when falling back to lopdf
        #[arg(long)]
        strict: bool,
    },

    /// Convert PNG or JPEG to PDF
    Convert {
        /// Input image path (.png, .jpg, .jpeg)
        input: PathBuf,

        /// Output PDF file path
        output: PathBuf,
    },
}

impl Args {
    /// Log level selected by the number of -v flags
    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_compress() {
        let args = Args::try_parse_from(["pdf-tool", "compress", "in.pdf", "out.pdf", "40"]).unwrap();
        assert_eq!(
            args.command,
            Command::Compress {
                input: PathBuf::from("in.pdf"),
                output: PathBuf::from("out.pdf"),
                quality: "40".to_string(),
                strict: false,
            }
        );
    }

    #[test]
    fn test_parse_convert_with_verbose() {
        let args = Args::try_parse_from(["pdf-tool", "-vv", "convert", "a.png", "a.pdf"]).unwrap();
        assert_eq!(args.verbose, 2);
        assert_eq!(args.log_level(), log::LevelFilter::Debug);
        assert!(matches!(args.command, Command::Convert { .. }));
    }

    #[test]
    fn test_compress_requires_quality() {
        assert!(Args::try_parse_from(["pdf-tool", "compress", "in.pdf", "out.pdf"]).is_err());
    }

    #[test]
    fn test_default_log_level() {
        let args = Args::try_parse_from(["pdf-tool", "convert", "a.jpg", "a.pdf"]).unwrap();
        assert_eq!(args.log_level(), log::LevelFilter::Warn);
    }
}
