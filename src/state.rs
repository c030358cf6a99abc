// src/state.rs
use std::sync::Arc;

use crate::config::Config;
use crate::services::gemini::LanguageModel;
use crate::services::ocr::OcrEngine;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub config: Config,
    pub model: Arc<dyn LanguageModel>,
    pub ocr: Arc<dyn OcrEngine>,
}

impl AppState {
    pub fn new(config: Config, model: Arc<dyn LanguageModel>, ocr: Arc<dyn OcrEngine>) -> Self {
        Self { config, model, ocr }
    }
}
