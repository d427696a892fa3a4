use anyhow::{Context, Result};
use clap::Parser;
use std::process::ExitCode;

use pdf_tool::cli::{Args, Command};
use pdf_tool::compress::{compress_pdf, CompressionRequest, Quality, SearchPath};
use pdf_tool::config::{CompressSettings, ConvertSettings};
use pdf_tool::convert::{convert_image, ConversionRequest};

fn main() -> ExitCode {
    let args = Args::parse();

    // Initialize logging
    env_logger::Builder::new()
        .filter_level(args.log_level())
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    match &args.command {
        Command::Compress {
            input,
            output,
            quality,
            ..
        } => {
            let quality = Quality::parse(quality)?;
            let request = CompressionRequest::with_quality(input.clone(), output.clone(), quality)?;

            println!(
                "Compressing PDF: {} -> {} (Quality: {})",
                input.display(),
                output.display(),
                quality
            );

            let report = compress_pdf(&request, &CompressSettings::from_args(args), &SearchPath)
                .with_context(|| "compression failed")?;

            println!();
            print!("{}", report);
            println!("PDF compression completed successfully!");
        }
        Command::Convert { input, output } => {
            println!("Converting image: {} -> {}", input.display(), output.display());

            let request = ConversionRequest::new(input.clone(), output.clone())?;
            convert_image(&request, &ConvertSettings::default())
                .with_context(|| "conversion failed")?;

            println!("Image to PDF conversion completed successfully!");
        }
    }

    Ok(())
}
