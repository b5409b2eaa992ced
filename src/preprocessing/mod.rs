//! Image preprocessing for OCR enhancement
//!
//! Three independent variants of the source image are derived before
//! recognition; the pipeline picks the best textual result among them.

pub mod steps;
pub mod variant;

pub use variant::Variant;
