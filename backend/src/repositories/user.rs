//! User repository for database operations

use meal_tracker_shared::errors::StoreError;
use sqlx::SqlitePool;

/// User record from database, minus the password column
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserRecord {
    pub id: i64,
    pub name: String,
    pub age: i64,
    pub weight: f64,
    pub calorie_goal: i64,
    pub water_goal: i64,
}

/// Input for creating a user
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub name: String,
    pub password: String,
    pub age: i64,
    pub weight: f64,
    pub calorie_goal: i64,
    pub water_goal: i64,
}

/// User repository for database operations
pub struct UserRepository;

impl UserRepository {
    /// Create a new user, returning the generated id
    ///
    /// A unique-constraint violation on `name` surfaces as
    /// `StoreError::DuplicateName`.
    pub async fn create(pool: &SqlitePool, input: CreateUser) -> Result<i64, StoreError> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO users (name, password, age, weight, calorie_goal, water_goal)
            VALUES (?, ?, ?, ?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(&input.name)
        .bind(&input.password)
        .bind(input.age)
        .bind(input.weight)
        .bind(input.calorie_goal)
        .bind(input.water_goal)
        .fetch_one(pool)
        .await
        .map_err(map_create_error)?;

        Ok(id)
    }

    /// Find the user matching this name/password pair
    ///
    /// Passwords are stored and compared in plaintext. A salted-hash
    /// scheme can be substituted here without changing the signature.
    pub async fn authenticate(
        pool: &SqlitePool,
        name: &str,
        password: &str,
    ) -> Result<Option<UserRecord>, StoreError> {
        let user = sqlx::query_as::<_, UserRecord>(
            r#"
            SELECT id, name, age, weight, calorie_goal,
                   COALESCE(water_goal, 2000) AS water_goal
            FROM users
            WHERE name = ? AND password = ?
            "#,
        )
        .bind(name)
        .bind(password)
        .fetch_optional(pool)
        .await
        .map_err(|e| StoreError::Storage(e.to_string()))?;

        Ok(user)
    }

    /// Look up a user's daily water goal in ml
    pub async fn water_goal(pool: &SqlitePool, user_id: i64) -> Result<Option<i64>, StoreError> {
        let goal = sqlx::query_scalar::<_, i64>(
            "SELECT COALESCE(water_goal, 2000) FROM users WHERE id = ?",
        )
        .bind(user_id)
        .fetch_optional(pool)
        .await
        .map_err(|e| StoreError::Storage(e.to_string()))?;

        Ok(goal)
    }
}

fn map_create_error(err: sqlx::Error) -> StoreError {
    match &err {
        sqlx::Error::Database(db) if db.is_unique_violation() => StoreError::DuplicateName,
        _ => StoreError::Storage(err.to_string()),
    }
}
