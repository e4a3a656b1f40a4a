//! Water log repository for database operations

use anyhow::Result;
use sqlx::SqlitePool;

/// Water log repository
pub struct WaterLogRepository;

impl WaterLogRepository {
    /// Log a water intake entry dated today, returning the generated id
    pub async fn create(pool: &SqlitePool, user_id: i64, amount_ml: i64) -> Result<i64> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO water_logs (user_id, water_intake, date_logged)
            VALUES (?, ?, DATE('now'))
            RETURNING id
            "#,
        )
        .bind(user_id)
        .bind(amount_ml)
        .fetch_one(pool)
        .await?;

        Ok(id)
    }

    /// Sum of today's water intake in ml; 0 when nothing is logged
    pub async fn total_today(pool: &SqlitePool, user_id: i64) -> Result<i64> {
        let total = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COALESCE(SUM(water_intake), 0)
            FROM water_logs
            WHERE user_id = ? AND date_logged = DATE('now')
            "#,
        )
        .bind(user_id)
        .fetch_one(pool)
        .await?;

        Ok(total)
    }
}
