//! Utility functions for image processing
//!
//! Binarization turns scanned grayscale pixels into the black/white matrix
//! the decoder scans.

pub mod binarization;
