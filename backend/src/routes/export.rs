//! Data export API routes

use crate::error::ApiResult;
use crate::services::export::ExportService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use meal_tracker_shared::types::CsvExportResponse;

/// Create export routes
pub fn export_routes() -> Router<AppState> {
    Router::new().route("/download_meals/:user_id", get(download_meals))
}

/// GET /download_meals/:user_id - Meal history as CSV, wrapped in JSON
async fn download_meals(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> ApiResult<Json<CsvExportResponse>> {
    let csv = ExportService::meals_csv(state.db(), user_id).await?;
    Ok(Json(CsvExportResponse { csv }))
}
