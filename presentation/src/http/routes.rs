//! Fan-out API route

use super::error::ApiError;
use axum::{Json, Router, extract::State, routing::post};
use fanout_application::{LlmGateway, RunFanOutUseCase};
use fanout_domain::FanOutResult;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

/// Request body for `POST /run-prompts`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptRequest {
    pub query: String,
}

pub fn fanout_routes<G: LlmGateway + 'static>() -> Router<Arc<RunFanOutUseCase<G>>> {
    Router::new().route("/run-prompts", post(run_prompts::<G>))
}

async fn run_prompts<G: LlmGateway + 'static>(
    State(use_case): State<Arc<RunFanOutUseCase<G>>>,
    Json(req): Json<PromptRequest>,
) -> Result<Json<FanOutResult>, ApiError> {
    let start = Instant::now();
    let result = use_case.execute(&req.query).await?;
    info!("  /run-prompts answered in {:?}", start.elapsed());
    Ok(Json(result))
}
