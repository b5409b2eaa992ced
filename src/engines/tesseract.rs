//! Tesseract engine implementation
//!
//! Invokes the Tesseract CLI as a short-lived subprocess. The executable
//! location comes from configuration and defaults to whatever `tesseract`
//! resolves to on the system PATH.

use crate::config::Config;
use crate::engine::{OcrEngine, Position, WordObservation};
use crate::error::OcrError;
use async_trait::async_trait;
use image::DynamicImage;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

/// Page-hierarchy level of word rows in Tesseract's TSV output
const WORD_LEVEL: &str = "5";
/// Column count of Tesseract's TSV format
const TSV_FIELDS: usize = 12;

/// OCR engine wrapping the `tesseract` CLI tool
pub struct TesseractEngine {
    program: PathBuf,
    language: String,
    timeout: Duration,
}

impl TesseractEngine {
    pub fn new(config: &Config) -> Self {
        Self {
            program: config.tesseract_cmd.clone(),
            language: config.language.clone(),
            timeout: config.timeout,
        }
    }

    /// Run a prepared command, optionally feeding `stdin_data` to the child,
    /// and return its stdout. The call is bounded by the configured timeout;
    /// `kill_on_drop` reaps a stuck child when the wait future is dropped.
    async fn run(
        &self,
        mut cmd: Command,
        stdin_data: Option<Vec<u8>>,
    ) -> Result<String, OcrError> {
        cmd.stdin(if stdin_data.is_some() {
            Stdio::piped()
        } else {
            Stdio::null()
        })
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

        let mut child = cmd.spawn().map_err(|e| {
            OcrError::ProcessingError(format!(
                "failed to start {}: {}",
                self.program.display(),
                e
            ))
        })?;

        if let Some(data) = stdin_data {
            let mut stdin = child.stdin.take().ok_or_else(|| {
                OcrError::ProcessingError("engine stdin unavailable".to_string())
            })?;
            stdin.write_all(&data).await.map_err(|e| {
                OcrError::ProcessingError(format!("failed to send image to engine: {}", e))
            })?;
            // Drop closes the pipe so the engine sees EOF
            drop(stdin);
        }

        let output = match tokio::time::timeout(self.timeout, child.wait_with_output()).await {
            Ok(result) => result.map_err(|e| {
                OcrError::ProcessingError(format!("failed to wait for engine: {}", e))
            })?,
            Err(_) => return Err(OcrError::EngineTimeout(self.timeout.as_secs())),
        };

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(OcrError::ProcessingError(format!(
                "engine exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }
}

#[async_trait]
impl OcrEngine for TesseractEngine {
    fn name(&self) -> &'static str {
        "tesseract"
    }

    async fn recognize_file(&self, path: &Path) -> Result<String, OcrError> {
        let mut cmd = Command::new(&self.program);
        cmd.arg(path).arg("stdout").arg("-l").arg(&self.language);

        tracing::debug!(engine = self.name(), path = %path.display(), "recognizing text");
        self.run(cmd, None).await
    }

    async fn recognize_words(
        &self,
        image: &DynamicImage,
    ) -> Result<Vec<WordObservation>, OcrError> {
        let mut png_data = Vec::new();
        image
            .write_to(&mut std::io::Cursor::new(&mut png_data), image::ImageFormat::Png)
            .map_err(|e| {
                OcrError::ProcessingError(format!("failed to encode image for engine: {}", e))
            })?;

        let mut cmd = Command::new(&self.program);
        cmd.arg("stdin")
            .arg("stdout")
            .arg("-l")
            .arg(&self.language)
            .arg("tsv");

        tracing::debug!(engine = self.name(), "recognizing words with layout");
        let tsv = self.run(cmd, Some(png_data)).await?;
        Ok(parse_tsv(&tsv))
    }
}

/// Parse Tesseract TSV output into word observations.
///
/// Columns: level, page_num, block_num, par_num, line_num, word_num, left,
/// top, width, height, conf, text. Only word rows (level 5) are kept, in the
/// order the engine emitted them.
fn parse_tsv(tsv: &str) -> Vec<WordObservation> {
    let mut words = Vec::new();

    for line in tsv.lines().skip(1) {
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() != TSV_FIELDS || fields[0] != WORD_LEVEL {
            continue;
        }

        let (Ok(x), Ok(y), Ok(width), Ok(height)) = (
            fields[6].parse(),
            fields[7].parse(),
            fields[8].parse(),
            fields[9].parse(),
        ) else {
            continue;
        };
        let confidence = fields[10].parse().unwrap_or(0.0);

        words.push(WordObservation {
            text: fields[11].to_string(),
            confidence,
            position: Position {
                x,
                y,
                width,
                height,
            },
        });
    }

    words
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_TSV: &str = "level\tpage_num\tblock_num\tpar_num\tline_num\tword_num\tleft\ttop\twidth\theight\tconf\ttext\n\
        1\t1\t0\t0\t0\t0\t0\t0\t640\t480\t-1\t\n\
        4\t1\t1\t1\t1\t0\t12\t10\t200\t30\t-1\t\n\
        5\t1\t1\t1\t1\t1\t12\t10\t80\t30\t96.5\tHello\n\
        5\t1\t1\t1\t1\t2\t100\t10\t90\t30\t91.2\tWorld\n";

    #[test]
    fn parse_tsv_keeps_word_rows_in_order() {
        let words = parse_tsv(SAMPLE_TSV);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text, "Hello");
        assert_eq!(words[0].confidence, 96.5);
        assert_eq!(
            words[0].position,
            Position {
                x: 12,
                y: 10,
                width: 80,
                height: 30
            }
        );
        assert_eq!(words[1].text, "World");
    }

    #[test]
    fn parse_tsv_skips_non_word_levels() {
        let words = parse_tsv(SAMPLE_TSV);
        assert!(words.iter().all(|w| w.text == "Hello" || w.text == "World"));
    }

    #[test]
    fn parse_tsv_ignores_malformed_rows() {
        let tsv = "level\tpage_num\n5\tnot-enough-fields\n5\t1\t1\t1\t1\t1\ta\tb\tc\td\t0\tjunk\n";
        assert!(parse_tsv(tsv).is_empty());
    }

    #[test]
    fn parse_tsv_keeps_whitespace_tokens_for_the_pipeline_to_filter() {
        let tsv = "level\tpage_num\tblock_num\tpar_num\tline_num\tword_num\tleft\ttop\twidth\theight\tconf\ttext\n\
            5\t1\t1\t1\t1\t1\t0\t0\t10\t10\t30.0\t \n";
        let words = parse_tsv(tsv);
        assert_eq!(words.len(), 1);
        assert_eq!(words[0].text, " ");
    }

    #[test]
    fn parse_tsv_defaults_unparseable_confidence_to_zero() {
        let tsv = "header\n5\t1\t1\t1\t1\t1\t0\t0\t10\t10\tn/a\tword\n";
        let words = parse_tsv(tsv);
        assert_eq!(words[0].confidence, 0.0);
    }
}
