use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::{HeaderValue, Method, header};
use tower_http::cors::CorsLayer;
use tracing_subscriber::EnvFilter;

use tutor_backend::config::Config;
use tutor_backend::routes::create_router;
use tutor_backend::services::gemini::{GeminiClient, LanguageModel};
use tutor_backend::services::ocr::{OcrEngine, TesseractOcr};
use tutor_backend::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;

    // Only the chat widget's origin may call this service.
    let cors = CorsLayer::new()
        .allow_origin(config.allowed_origin.parse::<HeaderValue>()?)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    let model: Arc<dyn LanguageModel> = Arc::new(GeminiClient::new(&config)?);
    let ocr: Arc<dyn OcrEngine> = Arc::new(TesseractOcr);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let state = Arc::new(AppState::new(config, model, ocr));

    let app = create_router().with_state(state).layer(cors);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("🚀 math tutor bot running at http://{addr}");
    axum::serve(listener, app).await?;
    Ok(())
}
