//! Schema manager
//!
//! Creates the tables if absent and applies the one additive migration
//! (the `water_goal` column on `users`). Idempotent; invoked explicitly
//! once at process start, never at module load.

use meal_tracker_shared::errors::SchemaError;
use sqlx::sqlite::SqlitePool;
use sqlx::Row;
use tracing::info;

const CREATE_USERS: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL UNIQUE,
    password TEXT NOT NULL,
    age INTEGER NOT NULL,
    weight REAL NOT NULL,
    calorie_goal INTEGER NOT NULL,
    water_goal INTEGER DEFAULT 2000
)
"#;

const CREATE_MEALS: &str = r#"
CREATE TABLE IF NOT EXISTS meals (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    user_id INTEGER NOT NULL,
    meal_name TEXT NOT NULL,
    category TEXT NOT NULL,
    calories INTEGER NOT NULL,
    protein REAL,
    carbs REAL,
    fats REAL,
    date_logged DATE DEFAULT (DATE('now')),
    FOREIGN KEY(user_id) REFERENCES users(id)
)
"#;

const CREATE_WATER_LOGS: &str = r#"
CREATE TABLE IF NOT EXISTS water_logs (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    user_id INTEGER NOT NULL,
    water_intake INTEGER NOT NULL,
    date_logged DATE DEFAULT (DATE('now')),
    FOREIGN KEY(user_id) REFERENCES users(id)
)
"#;

// No operation reads or writes reminders yet; the table is kept so the
// stored file stays compatible with the dashboard that defined it.
const CREATE_REMINDERS: &str = r#"
CREATE TABLE IF NOT EXISTS reminders (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    user_id INTEGER NOT NULL,
    type TEXT NOT NULL,
    time TEXT NOT NULL,
    FOREIGN KEY(user_id) REFERENCES users(id)
)
"#;

/// Create the tables if absent and apply additive migrations
///
/// Safe to call on every process start.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), SchemaError> {
    for stmt in [CREATE_USERS, CREATE_MEALS, CREATE_WATER_LOGS, CREATE_REMINDERS] {
        sqlx::query(stmt)
            .execute(pool)
            .await
            .map_err(|e| SchemaError::Unreachable(e.to_string()))?;
    }

    add_water_goal_if_missing(pool).await?;

    info!("Schema ensured");
    Ok(())
}

/// Additive migration: a `users` table created before water tracking
/// existed lacks the `water_goal` column. Add it with the 2000ml
/// default, preserving existing rows.
async fn add_water_goal_if_missing(pool: &SqlitePool) -> Result<(), SchemaError> {
    let columns = sqlx::query("PRAGMA table_info(users)")
        .fetch_all(pool)
        .await
        .map_err(|e| SchemaError::Unreachable(e.to_string()))?;

    let has_water_goal = columns
        .iter()
        .any(|row| row.get::<String, _>("name") == "water_goal");

    if !has_water_goal {
        sqlx::query("ALTER TABLE users ADD COLUMN water_goal INTEGER DEFAULT 2000")
            .execute(pool)
            .await
            .map_err(|e| SchemaError::Migration(e.to_string()))?;
        info!("Added water_goal column to users");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn memory_pool() -> SqlitePool {
        // One connection so every statement sees the same in-memory db.
        SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap()
    }

    async fn table_names(pool: &SqlitePool) -> Vec<String> {
        sqlx::query("SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name")
            .fetch_all(pool)
            .await
            .unwrap()
            .iter()
            .map(|row| row.get::<String, _>("name"))
            .collect()
    }

    #[tokio::test]
    async fn test_creates_all_tables() {
        let pool = memory_pool().await;
        ensure_schema(&pool).await.unwrap();

        let names = table_names(&pool).await;
        for table in ["users", "meals", "water_logs", "reminders"] {
            assert!(names.iter().any(|n| n == table), "missing table {}", table);
        }
    }

    #[tokio::test]
    async fn test_idempotent() {
        let pool = memory_pool().await;
        ensure_schema(&pool).await.unwrap();
        ensure_schema(&pool).await.unwrap();
    }

    #[tokio::test]
    async fn test_adds_water_goal_to_legacy_users_table() {
        let pool = memory_pool().await;

        // Legacy schema: users without water_goal, with an existing row.
        sqlx::query(
            r#"
            CREATE TABLE users (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL UNIQUE,
                password TEXT NOT NULL,
                age INTEGER NOT NULL,
                weight REAL NOT NULL,
                calorie_goal INTEGER NOT NULL
            )
            "#,
        )
        .execute(&pool)
        .await
        .unwrap();
        sqlx::query(
            "INSERT INTO users (name, password, age, weight, calorie_goal) \
             VALUES ('alice', 'pw', 30, 70.0, 2200)",
        )
        .execute(&pool)
        .await
        .unwrap();

        ensure_schema(&pool).await.unwrap();

        let row = sqlx::query("SELECT name, water_goal FROM users WHERE name = 'alice'")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(row.get::<String, _>("name"), "alice");
        assert_eq!(row.get::<i64, _>("water_goal"), 2000);
    }
}
