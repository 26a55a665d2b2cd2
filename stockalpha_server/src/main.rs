mod config;
mod docs;
mod routes;

use std::net::SocketAddr;

use anyhow::Result;
use axum::routing::get;
use axum::Router;
use stockalpha_lib::ProviderFactory;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::routes::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(
            |_| "stockalpha=info,stockalpha_lib=info,tower_http=info".into(),
        ))
        .with_target(false)
        .init();

    let config = Config::from_env()?;

    let state = AppState {
        provider: ProviderFactory::new(config.api_token.clone()),
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/", get(routes::hello))
        .route("/return/:ticker", get(routes::daily_returns))
        .route("/alpha/:ticker", get(routes::alpha))
        .route("/api", get(routes::api_docs))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Server started on port {}...", config.port);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
