use axum::{Json, extract::State};
use base64::prelude::*;

use crate::{
    error::AppError,
    message::{ChatRequest, ChatResponse, OcrMathResponse, OcrRequest},
    services::{
        chatbot::{SYSTEM_INSTRUCTION, greeting_reply},
        ocr::OCR_LANGUAGE,
    },
    state::SharedState,
};

pub async fn chat_handler(
    State(state): State<SharedState>,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let message = payload.message.as_deref().unwrap_or("");

    if message.trim().is_empty() {
        return Err(AppError::BadRequest("❌ Message is required.".to_string()));
    }

    if let Some(reply) = greeting_reply(message) {
        return Ok(Json(ChatResponse {
            reply: reply.to_string(),
        }));
    }

    // The model gets the message as sent, untrimmed.
    let reply = state
        .model
        .generate(SYSTEM_INSTRUCTION, message)
        .await
        .map_err(AppError::ModelUnreachable)?;

    Ok(Json(ChatResponse { reply }))
}

pub async fn ocr_math_handler(
    State(state): State<SharedState>,
    Json(payload): Json<OcrRequest>,
) -> Result<Json<OcrMathResponse>, AppError> {
    let encoded = match payload.image.as_deref() {
        Some(s) if !s.is_empty() => s,
        _ => return Err(AppError::MissingImage),
    };

    let image = BASE64_STANDARD
        .decode(encoded)
        .map_err(|e| AppError::OcrPipeline(anyhow::anyhow!("invalid base64 image: {e}")))?;

    let extracted = state
        .ocr
        .recognize(&image, OCR_LANGUAGE)
        .await
        .map_err(|e| AppError::OcrPipeline(e.into()))?;

    let extracted = extracted.trim();
    if extracted.is_empty() {
        return Ok(Json(OcrMathResponse::Text {
            text: String::new(),
        }));
    }

    let reply = state
        .model
        .generate(SYSTEM_INSTRUCTION, extracted)
        .await
        .map_err(|e| AppError::OcrPipeline(e.into()))?;

    Ok(Json(OcrMathResponse::Reply { reply }))
}
