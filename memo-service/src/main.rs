//! Memo Service — standalone binary for the memo-taking backend.
//!
//! Thin HTTP facade over a hosted memo table plus an LLM summarization
//! proxy. Default: http://127.0.0.1:9103/

mod config;
mod routes;
mod store;
mod summarize;

use routes::AppState;
use std::sync::Arc;
use std::time::Instant;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    env_logger::init();

    let cfg = match config::Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            log::error!("{} — refusing to start", e);
            std::process::exit(1);
        }
    };

    // One client shared by the store and the summarizer.
    let http = reqwest::Client::new();

    let store = Arc::new(store::RestStore::new(
        http.clone(),
        &cfg.store_url,
        &cfg.store_key,
    ));

    let summarizer: Option<Arc<dyn summarize::Summarizer>> = match &cfg.google_api_key {
        Some(key) => Some(Arc::new(summarize::GeminiClient::new(http, key))),
        None => {
            log::warn!("GOOGLE_API_KEY not set — summarization disabled");
            None
        }
    };

    let state = Arc::new(AppState {
        store,
        summarizer,
        start_time: Instant::now(),
    });

    let cors = tower_http::cors::CorsLayer::permissive();
    let app = routes::router(state).layer(cors);

    let addr = format!("127.0.0.1:{}", cfg.port);
    log::info!("Memo Service listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind");

    axum::serve(listener, app).await.expect("Server error");
}
