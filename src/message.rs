// src/message.rs
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct ChatRequest {
    // Option so a missing field reaches the handler's own 400 instead of a
    // serde rejection.
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Deserialize)]
pub struct OcrRequest {
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct ChatResponse {
    pub reply: String,
}

/// `/ocr-math` answers with either `{"text": ""}` (nothing recognized) or
/// `{"reply": "..."}` (model output).
#[derive(Serialize)]
#[serde(untagged)]
pub enum OcrMathResponse {
    Text { text: String },
    Reply { reply: String },
}
