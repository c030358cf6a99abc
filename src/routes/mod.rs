// src/routes/mod.rs
pub mod chat;

use crate::state::SharedState;
use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use chat::{chat_handler, ocr_math_handler};
use tower_http::trace::TraceLayer;

// Base64 images arrive inline in the JSON body; the front end sends up to
// 10 MB.
const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

pub fn create_router() -> Router<SharedState> {
    Router::new()
        .route("/", get(|| async { "✅ HC Kabdwal Bot is Running!" }))
        .route("/chat", post(chat_handler))
        .route("/ocr-math", post(ocr_math_handler))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
}
