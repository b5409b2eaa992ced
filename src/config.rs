use crate::Args;
use std::path::PathBuf;
use std::time::Duration;

/// Pipeline configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Tesseract executable; a bare name is resolved on the system PATH
    pub tesseract_cmd: PathBuf,
    pub language: String,
    /// Upper bound for a single engine call
    pub timeout: Duration,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self {
            tesseract_cmd: args.tesseract_cmd,
            language: args.lang,
            timeout: Duration::from_secs(args.timeout_secs),
        }
    }
}
