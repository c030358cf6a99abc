// src/error.rs
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

use crate::services::gemini::ModelError;

/// Fixed reply when the language model cannot be reached from `/chat`.
pub const MODEL_DOWN_REPLY: &str = "❌ Gemini से बात नहीं हो पाई";

/// Fixed reply when any step of the `/ocr-math` pipeline fails.
pub const OCR_PIPELINE_REPLY: &str = "❌ OCR या Gemini में दिक्कत आ गई";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error("image is required")]
    MissingImage,

    #[error("language model call failed: {0}")]
    ModelUnreachable(#[source] ModelError),

    #[error("ocr pipeline failed: {0}")]
    OcrPipeline(#[source] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "reply": msg }))).into_response()
            }
            AppError::MissingImage => {
                (StatusCode::BAD_REQUEST, Json(json!({ "text": "" }))).into_response()
            }
            AppError::ModelUnreachable(err) => {
                tracing::error!("Gemini error: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "reply": MODEL_DOWN_REPLY })),
                )
                    .into_response()
            }
            AppError::OcrPipeline(err) => {
                tracing::error!("OCR or Gemini error: {err:#}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "reply": OCR_PIPELINE_REPLY })),
                )
                    .into_response()
            }
        }
    }
}
