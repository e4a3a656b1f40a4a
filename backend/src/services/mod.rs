//! Business logic services
//!
//! Services encapsulate business logic and coordinate between
//! repositories and the HTTP layer.

pub mod export;
pub mod meal;
pub mod user;
pub mod water;

pub use export::ExportService;
pub use meal::MealService;
pub use user::UserService;
pub use water::WaterService;
