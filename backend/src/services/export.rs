//! Data export service
//!
//! Renders a user's full meal history as CSV with a fixed column
//! order: Meal Name, Calories, Protein, Carbs, Fats, Date Logged.

use crate::error::ApiError;
use crate::repositories::{MealFilter, MealRepository};
use sqlx::SqlitePool;

/// CSV header, fixed order
const MEAL_CSV_HEADER: [&str; 6] = [
    "Meal Name",
    "Calories",
    "Protein",
    "Carbs",
    "Fats",
    "Date Logged",
];

/// Export service
pub struct ExportService;

impl ExportService {
    /// Export a user's meals as a CSV string
    ///
    /// Header row plus one row per meal; absent macros render as empty
    /// fields. Row order follows the unfiltered meal listing.
    pub async fn meals_csv(pool: &SqlitePool, user_id: i64) -> Result<String, ApiError> {
        let meals = MealRepository::list(pool, user_id, &MealFilter::default())
            .await
            .map_err(ApiError::Internal)?;

        let mut wtr = csv::Writer::from_writer(vec![]);
        wtr.write_record(MEAL_CSV_HEADER)
            .map_err(|e| ApiError::Internal(anyhow::anyhow!("CSV write error: {}", e)))?;

        for meal in meals {
            wtr.write_record([
                meal.meal_name.clone(),
                meal.calories.to_string(),
                meal.protein.map(|v| v.to_string()).unwrap_or_default(),
                meal.carbs.map(|v| v.to_string()).unwrap_or_default(),
                meal.fats.map(|v| v.to_string()).unwrap_or_default(),
                meal.date_logged.to_string(),
            ])
            .map_err(|e| ApiError::Internal(anyhow::anyhow!("CSV write error: {}", e)))?;
        }

        let bytes = wtr
            .into_inner()
            .map_err(|e| ApiError::Internal(anyhow::anyhow!("CSV flush error: {}", e)))?;
        String::from_utf8(bytes)
            .map_err(|e| ApiError::Internal(anyhow::anyhow!("CSV encoding error: {}", e)))
    }
}
