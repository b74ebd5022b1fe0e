use axum::{extract::State, Json};
use serde::Deserialize;
use serde_json::{json, Value};

use models::available_day;

use crate::errors::ApiError;
use crate::state::AppState;

pub async fn list_available_days(
    State(state): State<AppState>,
) -> Result<Json<Vec<available_day::Model>>, ApiError> {
    let rows = available_day::list(&state.db).await?;
    Ok(Json(rows))
}

#[derive(Debug, Deserialize)]
pub struct AvailabilityPayload {
    pub day_of_week: Option<String>,
    pub is_available: Option<bool>,
}

pub async fn upsert_available_day(
    State(state): State<AppState>,
    Json(payload): Json<AvailabilityPayload>,
) -> Result<Json<Value>, ApiError> {
    let day = payload
        .day_of_week
        .filter(|d| !d.trim().is_empty())
        .ok_or_else(|| ApiError::Validation("Missing required availability fields".into()))?;
    let is_available = payload
        .is_available
        .ok_or_else(|| ApiError::Validation("Missing required availability fields".into()))?;

    available_day::upsert(&state.db, &day, is_available).await?;
    Ok(Json(json!({ "message": "Availability updated successfully" })))
}
