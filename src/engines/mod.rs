//! OCR engine implementations
//!
//! Concrete backends for the OcrEngine trait. The only backend here shells
//! out to the external Tesseract binary.

pub mod tesseract;

pub use tesseract::TesseractEngine;
