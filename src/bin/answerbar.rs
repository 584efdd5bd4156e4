use anyhow::{Context, Result};
use answer_barcode::tools::{decode_file, encode_file, inspect_file};
use answer_barcode::utils::binarization::Binarization;
use answer_barcode::{BarcodeGeometry, DecoderConfig};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(name = "answerbar", version, about = "Embed and read exam answer barcodes")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write the answers of a text file as a barcode at the bottom of an image
    Encode {
        source_image: PathBuf,
        answers_file: PathBuf,
        output_image: PathBuf,
        #[command(flatten)]
        geometry: GeometryArgs,
    },
    /// Read the barcode of an image back into an answer list
    Decode {
        source_image: PathBuf,
        output_file: PathBuf,
        #[command(flatten)]
        tuning: DecodeArgs,
    },
    /// Print every barcode row found in an image
    Inspect {
        source_image: PathBuf,
        #[command(flatten)]
        tuning: DecodeArgs,
    },
}

#[derive(Args)]
struct GeometryArgs {
    /// Bar and option block width in pixels
    #[arg(long, default_value_t = 5)]
    bar_width: u32,
    /// Gap between bars and between questions in pixels
    #[arg(long, default_value_t = 10)]
    gap: u32,
    /// Height of one barcode row in pixels
    #[arg(long, default_value_t = 20)]
    row_height: u32,
    #[arg(long, default_value_t = 20)]
    side_padding: u32,
    #[arg(long, default_value_t = 10)]
    bottom_padding: u32,
}

impl GeometryArgs {
    fn geometry(&self) -> BarcodeGeometry {
        BarcodeGeometry {
            bar_width: self.bar_width,
            gap: self.gap,
            row_height: self.row_height,
            side_padding: self.side_padding,
            bottom_padding: self.bottom_padding,
        }
    }
}

#[derive(Args)]
struct DecodeArgs {
    /// Pixel rows to move up between barcode rows
    #[arg(long)]
    row_step: Option<usize>,
    /// Pixel rows averaged per block
    #[arg(long)]
    sample_rows: Option<usize>,
    /// Fixed black/white cut-off (pixels at or below are black)
    #[arg(long, conflicts_with = "otsu")]
    threshold: Option<u8>,
    /// Pick the black/white cut-off with Otsu's method
    #[arg(long)]
    otsu: bool,
}

impl DecodeArgs {
    /// Environment overrides first, then command-line flags
    fn config(&self) -> DecoderConfig {
        let mut config = DecoderConfig::from_env();
        if let Some(step) = self.row_step {
            config.row_step = step.max(1);
        }
        if let Some(rows) = self.sample_rows {
            config.sample_rows = rows.max(1);
        }
        if let Some(threshold) = self.threshold {
            config.binarization = Binarization::Fixed(threshold);
        }
        if self.otsu {
            config.binarization = Binarization::Otsu;
        }
        config
    }
}

fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .try_init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging();

    match cli.command {
        Command::Encode {
            source_image,
            answers_file,
            output_image,
            geometry,
        } => {
            let layout = encode_file(
                &source_image,
                &answers_file,
                &output_image,
                &geometry.geometry(),
            )
            .with_context(|| format!("failed to encode {}", source_image.display()))?;
            println!(
                "Embedded {} rows ({} questions per row) into {}",
                layout.rows,
                layout.questions_per_row,
                output_image.display()
            );
        }
        Command::Decode {
            source_image,
            output_file,
            tuning,
        } => {
            let answers = decode_file(&source_image, &output_file, &tuning.config())
                .with_context(|| format!("failed to decode {}", source_image.display()))?;
            println!(
                "Decoded {} answered questions into {}",
                answers.answered(),
                output_file.display()
            );
        }
        Command::Inspect {
            source_image,
            tuning,
        } => {
            let rows = inspect_file(&source_image, &tuning.config())?;
            println!("Image: {}", source_image.display());
            println!("Found {} barcode rows", rows.len());
            for (i, row) in rows.iter().enumerate() {
                let a = &row.alignment;
                println!(
                    "  Row {}: y={} w={} g={} scan_start={} answers={}",
                    i,
                    a.row,
                    a.bar_width,
                    a.gap,
                    a.scan_start,
                    row.answers.len()
                );
            }
        }
    }

    Ok(())
}
