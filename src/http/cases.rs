use super::AppState;
use crate::error::RecordError;
use crate::model::Case;
use crate::orchestrator::decode_body;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};

pub(super) fn routes() -> Router<AppState> {
    Router::new()
        .route("/casos", get(list).post(create))
        .route("/casos/{id}", get(show).put(replace).patch(patch).delete(remove))
}

async fn list(State(state): State<AppState>) -> Result<Json<Vec<Case>>, RecordError> {
    Ok(Json(state.cases.list().await?))
}

async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Case>, RecordError> {
    Ok(Json(state.cases.get(&id).await?))
}

async fn create(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Case>), RecordError> {
    let case = state.cases.create(decode_body(&body)?).await?;
    Ok((StatusCode::CREATED, Json(case)))
}

async fn replace(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<Case>, RecordError> {
    Ok(Json(state.cases.replace(&id, decode_body(&body)?).await?))
}

async fn patch(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<Case>, RecordError> {
    Ok(Json(state.cases.patch(&id, decode_body(&body)?).await?))
}

async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, RecordError> {
    state.cases.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
