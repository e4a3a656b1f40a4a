//! BMI classification route
//!
//! Thin wrapper over the pure classifier in the shared crate.

use crate::error::ApiResult;
use crate::state::AppState;
use axum::{extract::Query, routing::get, Json, Router};
use meal_tracker_shared::health_metrics::classify;
use meal_tracker_shared::types::{BmiQuery, BmiResponse};

/// Create BMI routes
pub fn bmi_routes() -> Router<AppState> {
    Router::new().route("/bmi", get(bmi))
}

/// GET /bmi?weight_kg=&height_cm=&age= - Classify a BMI value
async fn bmi(Query(query): Query<BmiQuery>) -> ApiResult<Json<BmiResponse>> {
    let result = classify(query.weight_kg, query.height_cm, query.age);
    Ok(Json(BmiResponse {
        bmi: result.value,
        category: result.category.label().to_string(),
    }))
}
