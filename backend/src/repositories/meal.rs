//! Meal repository - database operations for logged meals

use anyhow::Result;
use chrono::NaiveDate;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

/// Meal record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct MealRecord {
    pub id: i64,
    pub user_id: i64,
    pub meal_name: String,
    pub category: String,
    pub calories: i64,
    pub protein: Option<f64>,
    pub carbs: Option<f64>,
    pub fats: Option<f64>,
    pub date_logged: NaiveDate,
}

/// Input for logging a meal
#[derive(Debug, Clone)]
pub struct CreateMeal {
    pub user_id: i64,
    pub meal_name: String,
    pub category: String,
    pub calories: i64,
    pub protein: Option<f64>,
    pub carbs: Option<f64>,
    pub fats: Option<f64>,
}

/// Input for updating a meal by id
#[derive(Debug, Clone)]
pub struct UpdateMeal {
    pub meal_name: String,
    pub category: String,
    pub calories: i64,
    pub protein: Option<f64>,
    pub carbs: Option<f64>,
    pub fats: Option<f64>,
}

/// Optional exact-match filters for meal listing
#[derive(Debug, Clone, Default)]
pub struct MealFilter {
    pub date: Option<NaiveDate>,
    pub category: Option<String>,
}

/// One row of the trailing-week aggregate
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct DailySummaryRow {
    pub date_logged: NaiveDate,
    pub total_calories: i64,
    pub total_protein: Option<f64>,
    pub total_carbs: Option<f64>,
    pub total_fats: Option<f64>,
}

/// Meal repository
pub struct MealRepository;

impl MealRepository {
    /// Log a meal, returning the generated id
    ///
    /// `date_logged` comes from the column default (today).
    pub async fn create(pool: &SqlitePool, input: CreateMeal) -> Result<i64> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO meals (user_id, meal_name, category, calories, protein, carbs, fats)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(input.user_id)
        .bind(&input.meal_name)
        .bind(&input.category)
        .bind(input.calories)
        .bind(input.protein)
        .bind(input.carbs)
        .bind(input.fats)
        .fetch_one(pool)
        .await?;

        Ok(id)
    }

    /// Update a meal by id, returning the number of rows affected
    ///
    /// Zero rows means the id does not exist; the caller decides
    /// whether that matters.
    pub async fn update(pool: &SqlitePool, meal_id: i64, input: UpdateMeal) -> Result<u64> {
        let result = sqlx::query(
            r#"
            UPDATE meals
            SET meal_name = ?, category = ?, calories = ?, protein = ?, carbs = ?, fats = ?
            WHERE id = ?
            "#,
        )
        .bind(&input.meal_name)
        .bind(&input.category)
        .bind(input.calories)
        .bind(input.protein)
        .bind(input.carbs)
        .bind(input.fats)
        .bind(meal_id)
        .execute(pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// List a user's meals, optionally filtered by exact date and category
    ///
    /// No ORDER BY: row order is storage-defined and must be treated as
    /// unspecified. Callers sort explicitly when they need chronology.
    pub async fn list(
        pool: &SqlitePool,
        user_id: i64,
        filter: &MealFilter,
    ) -> Result<Vec<MealRecord>> {
        let mut query = QueryBuilder::<Sqlite>::new(
            "SELECT id, user_id, meal_name, category, calories, protein, carbs, fats, \
             date_logged FROM meals WHERE user_id = ",
        );
        query.push_bind(user_id);

        if let Some(date) = filter.date {
            query.push(" AND date_logged = ");
            query.push_bind(date);
        }
        if let Some(category) = &filter.category {
            query.push(" AND category = ");
            query.push_bind(category.clone());
        }

        let meals = query
            .build_query_as::<MealRecord>()
            .fetch_all(pool)
            .await?;

        Ok(meals)
    }

    /// Per-day nutrition totals over the trailing 7 calendar days
    ///
    /// GROUP BY semantics: one row per date that has at least one meal;
    /// zero-meal dates are omitted, never zero-filled.
    pub async fn weekly_summary(pool: &SqlitePool, user_id: i64) -> Result<Vec<DailySummaryRow>> {
        let rows = sqlx::query_as::<_, DailySummaryRow>(
            r#"
            SELECT date_logged,
                   SUM(calories) AS total_calories,
                   SUM(protein) AS total_protein,
                   SUM(carbs) AS total_carbs,
                   SUM(fats) AS total_fats
            FROM meals
            WHERE user_id = ? AND date_logged >= DATE('now', '-6 days')
            GROUP BY date_logged
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(rows)
    }
}
