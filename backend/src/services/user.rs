//! Account service
//!
//! Sign-up and login against the users table. Passwords are stored and
//! compared in plaintext; existing database files depend on that, see
//! DESIGN.md before changing it.

use crate::error::ApiError;
use crate::repositories::{CreateUser, UserRepository};
use meal_tracker_shared::models::User;
use meal_tracker_shared::types::SignupRequest;
use sqlx::SqlitePool;

/// Account service
pub struct UserService;

impl UserService {
    /// Create an account, returning the new user id
    ///
    /// Fails with `ApiError::DuplicateName` when the name is taken.
    pub async fn sign_up(pool: &SqlitePool, req: SignupRequest) -> Result<i64, ApiError> {
        if req.name.trim().is_empty() {
            return Err(ApiError::Validation("Name must not be empty".to_string()));
        }

        let id = UserRepository::create(
            pool,
            CreateUser {
                name: req.name,
                password: req.password,
                age: req.age,
                weight: req.weight,
                calorie_goal: req.calorie_goal,
                water_goal: req.water_goal,
            },
        )
        .await?;

        Ok(id)
    }

    /// Exact name/password match, or `ApiError::InvalidCredentials`
    pub async fn login(pool: &SqlitePool, name: &str, password: &str) -> Result<User, ApiError> {
        let record = UserRepository::authenticate(pool, name, password)
            .await?
            .ok_or(ApiError::InvalidCredentials)?;

        Ok(User {
            id: record.id,
            name: record.name,
            age: record.age,
            weight: record.weight,
            calorie_goal: record.calorie_goal,
            water_goal: record.water_goal,
        })
    }
}
