use super::AppState;
use crate::error::RecordError;
use crate::model::{Agent, Case};
use crate::orchestrator::decode_body;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};

pub(super) fn routes() -> Router<AppState> {
    Router::new()
        .route("/agentes", get(list).post(create))
        .route("/agentes/{id}", get(show).put(replace).patch(patch).delete(remove))
        .route("/agentes/{id}/casos", get(list_cases))
}

async fn list(State(state): State<AppState>) -> Result<Json<Vec<Agent>>, RecordError> {
    Ok(Json(state.agents.list().await?))
}

async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Agent>, RecordError> {
    Ok(Json(state.agents.get(&id).await?))
}

async fn create(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Agent>), RecordError> {
    let agent = state.agents.create(decode_body(&body)?).await?;
    Ok((StatusCode::CREATED, Json(agent)))
}

async fn replace(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<Agent>, RecordError> {
    Ok(Json(state.agents.replace(&id, decode_body(&body)?).await?))
}

async fn patch(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<Agent>, RecordError> {
    Ok(Json(state.agents.patch(&id, decode_body(&body)?).await?))
}

async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, RecordError> {
    state.agents.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn list_cases(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Case>>, RecordError> {
    Ok(Json(state.agents.list_cases(&id).await?))
}
