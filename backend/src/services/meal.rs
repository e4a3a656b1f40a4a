//! Meal tracking service
//!
//! Logging, updating, listing, and the trailing-week nutrition summary.

use crate::error::ApiError;
use crate::repositories::{CreateMeal, MealFilter, MealRepository, UpdateMeal};
use meal_tracker_shared::types::{
    DailySummaryResponse, LogMealRequest, MealHistoryQuery, MealResponse, UpdateMealRequest,
};
use sqlx::SqlitePool;
use tracing::debug;

/// Meal service for business logic
pub struct MealService;

impl MealService {
    /// Log a meal, returning the new meal id
    pub async fn log_meal(pool: &SqlitePool, req: LogMealRequest) -> Result<i64, ApiError> {
        validate_nutrition(req.calories, req.protein, req.carbs, req.fats)?;

        let id = MealRepository::create(
            pool,
            CreateMeal {
                user_id: req.user_id,
                meal_name: req.meal_name,
                category: req.category.as_str().to_string(),
                calories: req.calories,
                protein: req.protein,
                carbs: req.carbs,
                fats: req.fats,
            },
        )
        .await
        .map_err(ApiError::Internal)?;

        Ok(id)
    }

    /// Update a meal by id
    ///
    /// An absent id is a silent no-op: the update succeeds without
    /// touching any row. Clients depend on that; the miss is logged at
    /// debug level only.
    pub async fn update_meal(
        pool: &SqlitePool,
        meal_id: i64,
        req: UpdateMealRequest,
    ) -> Result<(), ApiError> {
        validate_nutrition(req.calories, req.protein, req.carbs, req.fats)?;

        let affected = MealRepository::update(
            pool,
            meal_id,
            UpdateMeal {
                meal_name: req.meal_name,
                category: req.category.as_str().to_string(),
                calories: req.calories,
                protein: req.protein,
                carbs: req.carbs,
                fats: req.fats,
            },
        )
        .await
        .map_err(ApiError::Internal)?;

        if affected == 0 {
            debug!(meal_id, "update_meal matched no rows");
        }

        Ok(())
    }

    /// List a user's meals with optional exact-date/category filters
    pub async fn list_meals(
        pool: &SqlitePool,
        user_id: i64,
        query: &MealHistoryQuery,
    ) -> Result<Vec<MealResponse>, ApiError> {
        let filter = MealFilter {
            date: query.date,
            category: query.category.map(|c| c.as_str().to_string()),
        };

        let meals = MealRepository::list(pool, user_id, &filter)
            .await
            .map_err(ApiError::Internal)?;

        Ok(meals
            .into_iter()
            .map(|m| MealResponse {
                id: m.id,
                meal_name: m.meal_name,
                category: m.category,
                calories: m.calories,
                protein: m.protein,
                carbs: m.carbs,
                fats: m.fats,
                date_logged: m.date_logged,
            })
            .collect())
    }

    /// Per-day totals for the trailing 7 calendar days
    ///
    /// One row per date with at least one meal; zero-meal dates are
    /// omitted. Row order is storage-defined.
    pub async fn weekly_summary(
        pool: &SqlitePool,
        user_id: i64,
    ) -> Result<Vec<DailySummaryResponse>, ApiError> {
        let rows = MealRepository::weekly_summary(pool, user_id)
            .await
            .map_err(ApiError::Internal)?;

        Ok(rows
            .into_iter()
            .map(|r| DailySummaryResponse {
                date_logged: r.date_logged,
                total_calories: r.total_calories,
                total_protein: r.total_protein,
                total_carbs: r.total_carbs,
                total_fats: r.total_fats,
            })
            .collect())
    }
}

/// Reject negative calories and macros before anything reaches the
/// database.
fn validate_nutrition(
    calories: i64,
    protein: Option<f64>,
    carbs: Option<f64>,
    fats: Option<f64>,
) -> Result<(), ApiError> {
    if calories < 0 {
        return Err(ApiError::Validation(
            "Calories must not be negative".to_string(),
        ));
    }
    for (value, name) in [(protein, "Protein"), (carbs, "Carbs"), (fats, "Fats")] {
        if let Some(v) = value {
            if v < 0.0 {
                return Err(ApiError::Validation(format!(
                    "{} must not be negative",
                    name
                )));
            }
        }
    }
    Ok(())
}
