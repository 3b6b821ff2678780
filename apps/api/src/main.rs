mod config;
mod errors;
mod manual;
mod markup;
mod models;
mod profiles;
mod render;
mod routes;
mod state;
mod templates;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::manual::prompts::PromptLibrary;
use crate::profiles::store::ProfileStore;
use crate::render::{HttpRenderBackend, JsonTreeBackend, RenderBackend};
use crate::routes::build_router;
use crate::state::AppState;
use crate::templates::registry::TemplateRegistry;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Vitae API v{}", env!("CARGO_PKG_VERSION"));

    let templates = Arc::new(TemplateRegistry::builtin());
    info!("Template registry loaded: {} templates", templates.len());

    let renderer: Arc<dyn RenderBackend> = match &config.render_service_url {
        Some(url) => Arc::new(HttpRenderBackend::new(url.clone(), config.render_timeout)?),
        None => Arc::new(JsonTreeBackend),
    };
    info!("Render backend: {}", renderer.name());

    info!(
        "Profiles from {}, prompts from {}",
        config.profiles_dir.display(),
        config.prompts_dir.display()
    );

    let state = AppState {
        templates,
        profiles: ProfileStore::new(&config.profiles_dir),
        prompts: PromptLibrary::new(&config.prompts_dir),
        renderer,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
