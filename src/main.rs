//! StoryForge Engine - Backend API for animated video planning
//!
//! The Engine turns a one-line story idea into a complete production plan:
//! - Retention strategy, three-act script, and scene breakdown
//! - Animation prompts, narration entries, and a sound-design plan
//! - Assembly settings and publishing metadata
//! - Optionally drafts the strategy, script, and metadata with an
//!   OpenAI-compatible text-generation service (Ollama by default)

mod application;
mod domain;
mod infrastructure;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::application::ports::outbound::LlmPort;
use crate::domain::value_objects::GenerationMode;
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::http;
use crate::infrastructure::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "storyforge_engine=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting StoryForge Engine");

    // Load configuration
    let config = AppConfig::from_env()?;
    tracing::info!("Configuration loaded");
    tracing::info!("  Generation mode: {}", config.generation_mode);
    tracing::info!("  LLM: {} ({})", config.llm_base_url, config.llm_model);
    if let Some(seed) = config.generation_seed {
        tracing::info!("  Fixed seed: {}", seed);
    }
    let port = config.server_port;

    // Initialize application state
    let state = Arc::new(AppState::new(config)?);
    tracing::info!("Application state initialized");

    if state.config.generation_mode == GenerationMode::Assisted {
        match state.llm_client.health_check().await {
            Ok(()) => tracing::info!("Text-generation service reachable"),
            Err(e) => tracing::warn!(
                "Text-generation service not reachable, generation requests will fail: {}",
                e
            ),
        }
    }

    // Build the router
    let app = Router::new()
        .route("/health", get(health_check))
        // Merge REST API routes
        .merge(http::create_routes())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start the server
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    let server = axum::serve(listener, app);

    // Wait for shutdown signal (Ctrl+C)
    tokio::select! {
        result = server => {
            if let Err(e) = result {
                tracing::error!("Server error: {}", e);
            }
        }
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    Ok(())
}

async fn health_check() -> &'static str {
    "OK"
}
