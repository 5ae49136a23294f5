use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::models::status::{StatusCheck, StatusCheckCreate};
use crate::state::AppState;
use crate::status::{list_status_checks, record_status_check};

/// POST /api/status
pub async fn handle_create_status_check(
    State(state): State<AppState>,
    Json(req): Json<StatusCheckCreate>,
) -> Result<Json<StatusCheck>, AppError> {
    let status = record_status_check(state.store.as_ref(), req.client_name).await?;
    Ok(Json(status))
}

/// GET /api/status
pub async fn handle_list_status_checks(
    State(state): State<AppState>,
) -> Result<Json<Vec<StatusCheck>>, AppError> {
    Ok(Json(list_status_checks(state.store.as_ref()).await?))
}
