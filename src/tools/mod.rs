//! File-level helpers behind the `answerbar` binary.
//!
//! Every entry point checks its inputs exist before doing any work, and
//! output files are only written once the whole run has succeeded.

use crate::decoder::{self, DecodedRow, DecoderConfig};
use crate::encoder::{self, layout::RowLayout};
use crate::error::{BarcodeError, Result};
use crate::models::{AnswerSet, BarcodeGeometry, Permutation};
use image::{GenericImageView, GrayImage};
use std::fs;
use std::path::Path;

/// Fail with [`BarcodeError::MissingInput`] unless `path` exists
pub fn ensure_exists(path: &Path) -> Result<()> {
    if path.exists() {
        Ok(())
    } else {
        Err(BarcodeError::MissingInput(path.to_path_buf()))
    }
}

/// Load any supported raster image as 8-bit grayscale
pub fn load_gray(path: &Path) -> Result<GrayImage> {
    let img = image::open(path).map_err(|source| BarcodeError::Image {
        path: path.to_path_buf(),
        source,
    })?;
    let (width, height) = img.dimensions();
    tracing::info!(path = %path.display(), width, height, "opened image");
    Ok(img.to_luma8())
}

/// Save a grayscale image, format picked from the extension
pub fn save_gray(image: &GrayImage, path: &Path) -> Result<()> {
    image.save(path).map_err(|source| BarcodeError::Image {
        path: path.to_path_buf(),
        source,
    })
}

/// Read an answer-list text file
pub fn read_answers(path: &Path) -> Result<AnswerSet> {
    let text = fs::read_to_string(path).map_err(|source| BarcodeError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    text.parse()
}

/// Write an answer-list text file
pub fn write_answers(answers: &AnswerSet, path: &Path) -> Result<()> {
    fs::write(path, answers.to_string()).map_err(|source| BarcodeError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Embed the answers of `answers_file` into `source` and save as `output`
pub fn encode_file(
    source: &Path,
    answers_file: &Path,
    output: &Path,
    geometry: &BarcodeGeometry,
) -> Result<RowLayout> {
    ensure_exists(source)?;
    ensure_exists(answers_file)?;

    let answers = read_answers(answers_file)?;
    let mut image = load_gray(source)?;
    let layout = encoder::encode(&mut image, &answers, &Permutation::generate(), geometry)?;

    save_gray(&image, output)?;
    tracing::info!(path = %output.display(), "saved encoded image");
    Ok(layout)
}

/// Read the barcode from `source` and save the answer list as `output`
pub fn decode_file(source: &Path, output: &Path, config: &DecoderConfig) -> Result<AnswerSet> {
    ensure_exists(source)?;

    let image = load_gray(source)?;
    let answers = decoder::decode(&image, &Permutation::generate(), config);

    write_answers(&answers, output)?;
    tracing::info!(path = %output.display(), "saved answer list");
    Ok(answers)
}

/// Alignment rows found in `source`
pub fn inspect_file(source: &Path, config: &DecoderConfig) -> Result<Vec<DecodedRow>> {
    ensure_exists(source)?;
    let image = load_gray(source)?;
    Ok(decoder::inspect(&image, &Permutation::generate(), config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn ensure_exists_reports_missing_path() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope.png");
        let err = ensure_exists(&missing).unwrap_err();
        assert!(matches!(err, BarcodeError::MissingInput(ref p) if p == &missing));
        assert!(err.to_string().ends_with("nope.png - path does not exist"));
        assert!(ensure_exists(dir.path()).is_ok());
    }

    #[test]
    fn answers_file_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("answers.txt");
        let answers = AnswerSet::empty();
        write_answers(&answers, &path).unwrap();
        assert_eq!(read_answers(&path).unwrap(), answers);
    }

    #[test]
    fn encode_file_checks_inputs_first() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("out.png");
        let err = encode_file(
            &dir.path().join("missing.png"),
            &dir.path().join("missing.txt"),
            &output,
            &BarcodeGeometry::default(),
        )
        .unwrap_err();
        assert!(matches!(err, BarcodeError::MissingInput(_)));
        assert!(!output.exists());
    }
}
