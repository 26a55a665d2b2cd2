//! Route handlers: thin translation from HTTP to the library pipelines.
//!
//! Every handler wraps its pipeline in a single recovery boundary: any
//! failure past validation is logged and collapsed to the fixed fallback
//! envelope. Validation rejections come back from the pipeline as ordinary
//! envelopes with their specific status and message.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use stockalpha_lib::alpha::AlphaEntry;
use stockalpha_lib::envelope::Envelope;
use stockalpha_lib::returns::DailyReturn;
use stockalpha_lib::service::{self, ProviderFactory};

use crate::docs;

/// Shared application state: the provider factory built once at startup.
#[derive(Clone)]
pub struct AppState {
    pub provider: ProviderFactory,
}

#[derive(Debug, Deserialize)]
pub struct RangeParams {
    pub from: Option<String>,
    pub to: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AlphaParams {
    pub benchmark: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
}

pub async fn hello() -> &'static str {
    "Hello World"
}

pub async fn daily_returns(
    State(state): State<AppState>,
    Path(ticker): Path<String>,
    Query(params): Query<RangeParams>,
) -> (StatusCode, Json<Envelope<DailyReturn>>) {
    let envelope = service::daily_returns(
        &state.provider,
        &ticker,
        params.from.as_deref(),
        params.to.as_deref(),
    )
    .await
    .unwrap_or_else(|err| {
        tracing::error!("return pipeline failed for {}: {}", ticker, err);
        Envelope::fallback()
    });
    respond(envelope)
}

pub async fn alpha(
    State(state): State<AppState>,
    Path(ticker): Path<String>,
    Query(params): Query<AlphaParams>,
) -> (StatusCode, Json<Envelope<AlphaEntry>>) {
    let envelope = service::alpha(
        &state.provider,
        &ticker,
        params.benchmark.as_deref(),
        params.from.as_deref(),
        params.to.as_deref(),
    )
    .await
    .unwrap_or_else(|err| {
        tracing::error!("alpha pipeline failed for {}: {}", ticker, err);
        Envelope::fallback()
    });
    respond(envelope)
}

pub async fn api_docs() -> Json<serde_json::Value> {
    Json(docs::openapi())
}

fn respond<T>(envelope: Envelope<T>) -> (StatusCode, Json<Envelope<T>>) {
    let status = StatusCode::from_u16(envelope.status).unwrap_or(StatusCode::OK);
    (status, Json(envelope))
}
