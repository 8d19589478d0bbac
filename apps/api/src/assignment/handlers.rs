//! Axum route handlers for the booking API.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::assignment::seed::seed_slots;
use crate::assignment::service::SlotStats;
use crate::errors::AppError;
use crate::models::slot::Slot;
use crate::roster::table::RosterTable;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AssignRequest {
    #[serde(default)]
    pub trainee_id: String,
    #[serde(default)]
    pub slot_id: String,
}

#[derive(Debug, Serialize)]
pub struct AssignResponse {
    pub ok: bool,
    pub remaining: i64,
}

#[derive(Debug, Serialize)]
pub struct ResetResponse {
    pub ok: bool,
    pub slots: usize,
}

/// GET /api/v1/slots
pub async fn handle_list_slots(
    State(state): State<AppState>,
) -> Result<Json<Vec<Slot>>, AppError> {
    Ok(Json(state.assignments.list_slots().await?))
}

/// POST /api/v1/assign
pub async fn handle_assign(
    State(state): State<AppState>,
    payload: Result<Json<AssignRequest>, JsonRejection>,
) -> Result<Json<AssignResponse>, AppError> {
    let Json(request) = payload.map_err(|e| AppError::InvalidInput(e.body_text()))?;
    let remaining = state
        .assignments
        .assign(&request.trainee_id, &request.slot_id)
        .await?;

    Ok(Json(AssignResponse {
        ok: true,
        remaining,
    }))
}

/// GET /api/v1/admin/stats
pub async fn handle_stats(
    State(state): State<AppState>,
) -> Result<Json<Vec<SlotStats>>, AppError> {
    Ok(Json(state.assignments.stats().await?))
}

/// POST /api/v1/admin/reset
///
/// Clears every booking and rebuilds the slot list from the roster, one
/// slot per distinct value of the configured seed column.
pub async fn handle_reset(State(state): State<AppState>) -> Result<Json<ResetResponse>, AppError> {
    let roster_path = state.config.roster_path.clone();
    let column = state.config.slot_seed_column.clone();

    let slots = tokio::task::spawn_blocking(move || {
        let table = RosterTable::read(&roster_path)?;
        seed_slots(&table, &column)
    })
    .await??;

    let count = state.assignments.reset(slots).await?;

    Ok(Json(ResetResponse {
        ok: true,
        slots: count,
    }))
}
