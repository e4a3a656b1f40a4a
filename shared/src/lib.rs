//! Meal Tracker Shared Library
//!
//! This crate contains the types shared between the backend and any
//! future clients: API request/response types, domain models, the error
//! taxonomy, and pure health calculations (BMI).

pub mod errors;
pub mod health_metrics;
pub mod models;
pub mod types;

// Re-export commonly used items
pub use errors::*;
pub use health_metrics::*;
pub use models::*;
pub use types::*;
