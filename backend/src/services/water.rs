//! Water tracking service
//!
//! Intake logging, daily totals, and goal progress.

use crate::error::ApiError;
use crate::repositories::{UserRepository, WaterLogRepository};
use meal_tracker_shared::types::WaterProgressResponse;
use sqlx::SqlitePool;

/// Water service for business logic
pub struct WaterService;

impl WaterService {
    /// Log a water intake entry dated today
    pub async fn log_water(pool: &SqlitePool, user_id: i64, amount_ml: i64) -> Result<i64, ApiError> {
        if amount_ml < 0 {
            return Err(ApiError::Validation(
                "Water intake must not be negative".to_string(),
            ));
        }

        WaterLogRepository::create(pool, user_id, amount_ml)
            .await
            .map_err(ApiError::Internal)
    }

    /// Sum of today's intake in ml; 0 when nothing is logged
    pub async fn total_today(pool: &SqlitePool, user_id: i64) -> Result<i64, ApiError> {
        WaterLogRepository::total_today(pool, user_id)
            .await
            .map_err(ApiError::Internal)
    }

    /// Today's total against the user's stored goal
    pub async fn progress(pool: &SqlitePool, user_id: i64) -> Result<WaterProgressResponse, ApiError> {
        let water_goal = UserRepository::water_goal(pool, user_id)
            .await?
            .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

        let total_water = Self::total_today(pool, user_id).await?;

        Ok(WaterProgressResponse {
            total_water,
            water_goal,
            progress_percent: Self::progress_percent(total_water, water_goal),
        })
    }

    /// Progress percentage, clamped to [0, 100]
    ///
    /// Returns 0 for a non-positive goal rather than dividing by zero.
    pub fn progress_percent(total_ml: i64, goal_ml: i64) -> f64 {
        if goal_ml <= 0 {
            return 0.0;
        }
        (total_ml as f64 / goal_ml as f64 * 100.0).clamp(0.0, 100.0)
    }
}
