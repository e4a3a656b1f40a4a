//! Database repositories
//!
//! Provides the data access layer. All statements are parameterized;
//! dynamic filters go through `QueryBuilder::push_bind`.

pub mod meal;
pub mod user;
pub mod water;

pub use meal::{CreateMeal, DailySummaryRow, MealFilter, MealRecord, MealRepository, UpdateMeal};
pub use user::{CreateUser, UserRecord, UserRepository};
pub use water::WaterLogRepository;
