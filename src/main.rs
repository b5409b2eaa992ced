use clap::Parser;
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod engine;
mod engines;
mod error;
mod ocr;
mod preprocessing;

#[derive(Parser, Debug)]
#[command(name = "ocr-extract")]
#[command(about = "Extract text from an image via Tesseract, as a one-shot subprocess")]
#[command(version)]
pub struct Args {
    /// Path to the image to recognize
    pub image_path: Option<PathBuf>,

    /// Output mode: "layout" for per-word boxes, anything else for plain text
    pub mode: Option<String>,

    /// Tesseract executable to invoke (resolved on the system PATH by default)
    #[arg(long, env = "TESSERACT_CMD", default_value = "tesseract")]
    pub tesseract_cmd: PathBuf,

    /// Recognition language passed to the engine (e.g., "eng", "deu", "fra")
    #[arg(long, env = "OCR_LANGUAGE", default_value = "eng")]
    pub lang: String,

    /// Seconds to wait for a single engine call before giving up
    #[arg(long, env = "OCR_TIMEOUT_SECS", default_value = "120")]
    pub timeout_secs: u64,

    /// Run the engine on the original image, skipping preprocessing variants
    #[arg(long)]
    pub no_preprocess: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "RUST_LOG", default_value = "warn")]
    pub log_level: String,
}

/// Basic-mode result payload
#[derive(Serialize)]
struct TextResponse {
    text: String,
}

#[derive(Serialize)]
struct MissingPathResponse {
    error: &'static str,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // stdout carries exactly one JSON document; all diagnostics go to stderr
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let Some(image_path) = args.image_path.clone() else {
        println!(
            "{}",
            serde_json::to_string(&MissingPathResponse {
                error: "No image path provided"
            })?
        );
        std::process::exit(1);
    };

    let mode = args.mode.clone().unwrap_or_else(|| "basic".to_string());
    let preprocess = !args.no_preprocess;

    let config = config::Config::from(args);
    let processor = ocr::OcrProcessor::new(&config);

    let json = match mode.as_str() {
        // On failure layout mode emits a bare JSON string, not an array;
        // callers detect the type
        "layout" => match processor.recognize_layout(&image_path).await {
            Ok(words) => serde_json::to_string(&words)?,
            Err(err) => serde_json::to_string(&format!("Error: {err}"))?,
        },
        _ => {
            let text = match processor.recognize_basic(&image_path, preprocess).await {
                Ok(text) => text,
                Err(err) => format!("Error: {err}"),
            };
            serde_json::to_string(&TextResponse { text })?
        }
    };

    println!("{json}");
    Ok(())
}
