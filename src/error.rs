use thiserror::Error;

/// Failures the pipeline can report.
///
/// Nothing here ever crosses the process boundary as a panic or non-zero
/// exit; the top level renders each error as `Error: {message}` inside the
/// JSON result payload.
#[derive(Error, Debug)]
pub enum OcrError {
    #[error("File {0} does not exist")]
    FileNotFound(String),

    #[error("Could not read image {0}")]
    UnreadableImage(String),

    #[error("Failed to process image: {0}")]
    ProcessingError(String),

    #[error("Preprocessing failed: {0}")]
    PreprocessingError(String),

    #[error("OCR engine timed out after {0}s")]
    EngineTimeout(u64),
}
