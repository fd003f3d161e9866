//! # HTTP Surface
//!
//! Routes `/agentes` and `/casos` to the orchestrators and serializes what comes back.
//! Request bodies are taken as raw bytes and decoded as JSON whatever the
//! `content-type`, so an empty or mislabelled body reaches the orchestrator's own
//! checks instead of being rejected by an extractor.

mod agents;
mod cases;

use crate::orchestrator::{AgentOrchestrator, CaseOrchestrator};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub agents: Arc<AgentOrchestrator>,
    pub cases: Arc<CaseOrchestrator>,
}

impl AppState {
    pub fn new(agents: AgentOrchestrator, cases: CaseOrchestrator) -> Self {
        Self {
            agents: Arc::new(agents),
            cases: Arc::new(cases),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(status))
        .route("/docs", get(docs))
        .merge(agents::routes())
        .merge(cases::routes())
        .fallback(not_found)
        .with_state(state)
}

async fn status() -> Json<Value> {
    Json(json!({ "message": "Servidor do Departamento de Polícia funcionando!" }))
}

async fn docs() -> Json<Value> {
    Json(json!({
        "message": "API do Departamento de Polícia",
        "endpoints": {
            "agentes": "/agentes",
            "casos": "/casos",
        },
    }))
}

async fn not_found() -> (StatusCode, Json<Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "message": "Rota não encontrada." })),
    )
}
