//! Water tracking API routes

use crate::error::ApiResult;
use crate::services::WaterService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use meal_tracker_shared::types::{
    LogWaterRequest, MessageResponse, WaterProgressResponse, WaterTotalResponse,
};

/// Create water routes
pub fn water_routes() -> Router<AppState> {
    Router::new()
        .route("/log_water", post(log_water))
        .route("/water/:user_id", get(water_total))
        .route("/water_progress/:user_id", get(water_progress))
}

/// POST /log_water - Log water intake dated today
async fn log_water(
    State(state): State<AppState>,
    Json(req): Json<LogWaterRequest>,
) -> ApiResult<Json<MessageResponse>> {
    WaterService::log_water(state.db(), req.user_id, req.water_intake).await?;
    Ok(Json(MessageResponse {
        message: "Water intake logged successfully!".to_string(),
    }))
}

/// GET /water/:user_id - Today's total intake in ml
async fn water_total(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> ApiResult<Json<WaterTotalResponse>> {
    let total_water = WaterService::total_today(state.db(), user_id).await?;
    Ok(Json(WaterTotalResponse { total_water }))
}

/// GET /water_progress/:user_id - Today's total against the user's goal
async fn water_progress(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> ApiResult<Json<WaterProgressResponse>> {
    let progress = WaterService::progress(state.db(), user_id).await?;
    Ok(Json(progress))
}
