//! Meal tracking API routes

use crate::error::ApiResult;
use crate::services::MealService;
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    routing::{get, post, put},
    Json, Router,
};
use meal_tracker_shared::types::{
    DailySummaryResponse, LogMealRequest, MealHistoryQuery, MealResponse, MessageResponse,
    UpdateMealRequest,
};

/// Create meal routes
pub fn meal_routes() -> Router<AppState> {
    Router::new()
        .route("/log_meal", post(log_meal))
        .route("/update_meal/:meal_id", put(update_meal))
        .route("/meals/:user_id", get(list_meals))
        .route("/weekly_summary/:user_id", get(weekly_summary))
}

/// POST /log_meal - Log a meal dated today
async fn log_meal(
    State(state): State<AppState>,
    Json(req): Json<LogMealRequest>,
) -> ApiResult<Json<MessageResponse>> {
    MealService::log_meal(state.db(), req).await?;
    Ok(Json(MessageResponse {
        message: "Meal logged successfully!".to_string(),
    }))
}

/// PUT /update_meal/:meal_id - Update a meal by id
///
/// Succeeds even when the id does not exist (silent no-op).
async fn update_meal(
    State(state): State<AppState>,
    Path(meal_id): Path<i64>,
    Json(req): Json<UpdateMealRequest>,
) -> ApiResult<Json<MessageResponse>> {
    MealService::update_meal(state.db(), meal_id, req).await?;
    Ok(Json(MessageResponse {
        message: "Meal updated successfully!".to_string(),
    }))
}

/// GET /meals/:user_id?date=&category= - Meal history with optional filters
async fn list_meals(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
    Query(query): Query<MealHistoryQuery>,
) -> ApiResult<Json<Vec<MealResponse>>> {
    let meals = MealService::list_meals(state.db(), user_id, &query).await?;
    Ok(Json(meals))
}

/// GET /weekly_summary/:user_id - Trailing-week per-day totals
async fn weekly_summary(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> ApiResult<Json<Vec<DailySummaryResponse>>> {
    let summary = MealService::weekly_summary(state.db(), user_id).await?;
    Ok(Json(summary))
}
