//! API request and response types

use crate::models::{MealCategory, User};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// API error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

/// Plain confirmation body returned by the write endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

// ============================================================================
// Accounts
// ============================================================================

/// Sign-up request
///
/// `water_goal` is optional; accounts created without one fall back to
/// the 2000ml column default.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupRequest {
    pub name: String,
    pub password: String,
    pub age: i64,
    pub weight: f64,
    pub calorie_goal: i64,
    #[serde(default = "default_water_goal")]
    pub water_goal: i64,
}

fn default_water_goal() -> i64 {
    2000
}

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub name: String,
    pub password: String,
}

/// Login response body
pub type LoginResponse = User;

// ============================================================================
// Meals
// ============================================================================

/// Meal logging request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogMealRequest {
    pub user_id: i64,
    pub meal_name: String,
    pub category: MealCategory,
    pub calories: i64,
    pub protein: Option<f64>,
    pub carbs: Option<f64>,
    pub fats: Option<f64>,
}

/// Meal update request (meal id comes from the path)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateMealRequest {
    pub meal_name: String,
    pub category: MealCategory,
    pub calories: i64,
    pub protein: Option<f64>,
    pub carbs: Option<f64>,
    pub fats: Option<f64>,
}

/// A logged meal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealResponse {
    pub id: i64,
    pub meal_name: String,
    pub category: String,
    pub calories: i64,
    pub protein: Option<f64>,
    pub carbs: Option<f64>,
    pub fats: Option<f64>,
    pub date_logged: NaiveDate,
}

/// Optional filters for the meal history endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MealHistoryQuery {
    pub date: Option<NaiveDate>,
    pub category: Option<MealCategory>,
}

/// One row of the trailing-week summary
///
/// Dates with no meals logged are omitted, not zero-filled. Row order
/// is storage-defined; sort explicitly if chronology matters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailySummaryResponse {
    pub date_logged: NaiveDate,
    pub total_calories: i64,
    pub total_protein: Option<f64>,
    pub total_carbs: Option<f64>,
    pub total_fats: Option<f64>,
}

/// CSV export wrapper
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CsvExportResponse {
    pub csv: String,
}

// ============================================================================
// Water
// ============================================================================

/// Water logging request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogWaterRequest {
    pub user_id: i64,
    pub water_intake: i64,
}

/// Today's water total
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaterTotalResponse {
    pub total_water: i64,
}

/// Today's water total against the user's goal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaterProgressResponse {
    pub total_water: i64,
    pub water_goal: i64,
    pub progress_percent: f64,
}

// ============================================================================
// BMI
// ============================================================================

/// Query parameters for the BMI endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmiQuery {
    pub weight_kg: f64,
    pub height_cm: f64,
    pub age: i32,
}

/// BMI classification response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmiResponse {
    pub bmi: f64,
    pub category: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signup_defaults_water_goal() {
        let req: SignupRequest = serde_json::from_str(
            r#"{"name":"alice","password":"pw","age":30,"weight":70.0,"calorie_goal":2200}"#,
        )
        .unwrap();
        assert_eq!(req.water_goal, 2000);
    }

    #[test]
    fn test_meal_history_query_filters_optional() {
        let q: MealHistoryQuery = serde_json::from_str("{}").unwrap();
        assert!(q.date.is_none());
        assert!(q.category.is_none());
    }
}
