// src/services/ocr.rs
use async_trait::async_trait;
use rusty_tesseract::{Args, Image};
use thiserror::Error;

/// Language hint handed to the engine; the tutoring widget photographs
/// English-notation math problems.
pub const OCR_LANGUAGE: &str = "eng";

/// Image-in, text-out contract of the recognition engine.
#[async_trait]
pub trait OcrEngine: Send + Sync {
    async fn recognize(&self, image: &[u8], language: &str) -> Result<String, OcrError>;
}

#[derive(Debug, Error)]
pub enum OcrError {
    #[error("invalid image payload: {0}")]
    InvalidImage(String),

    #[error("text recognition failed: {0}")]
    Recognition(String),
}

/// Runs the local `tesseract` binary. Recognition is synchronous and
/// CPU-bound, so it is pushed onto the blocking pool.
pub struct TesseractOcr;

#[async_trait]
impl OcrEngine for TesseractOcr {
    async fn recognize(&self, image: &[u8], language: &str) -> Result<String, OcrError> {
        let bytes = image.to_vec();
        let lang = language.to_string();

        let text = tokio::task::spawn_blocking(move || {
            let decoded = image::load_from_memory(&bytes)
                .map_err(|e| OcrError::InvalidImage(e.to_string()))?;
            let input = Image::from_dynamic_image(&decoded)
                .map_err(|e| OcrError::Recognition(e.to_string()))?;
            let args = Args {
                lang,
                ..Args::default()
            };
            rusty_tesseract::image_to_string(&input, &args)
                .map_err(|e| OcrError::Recognition(e.to_string()))
        })
        .await
        .map_err(|e| OcrError::Recognition(e.to_string()))??;

        tracing::info!(chars = text.len(), "OCR complete");
        Ok(text)
    }
}
