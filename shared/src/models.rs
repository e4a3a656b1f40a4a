//! Data models for the Meal Tracker application

use serde::{Deserialize, Serialize};

/// Meal category
///
/// Serialized with the capitalized labels used by the dashboard
/// ("Breakfast", "Lunch", "Dinner", "Snack"), which are also the values
/// stored in the `meals.category` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MealCategory {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealCategory {
    /// Stored column value
    pub fn as_str(&self) -> &'static str {
        match self {
            MealCategory::Breakfast => "Breakfast",
            MealCategory::Lunch => "Lunch",
            MealCategory::Dinner => "Dinner",
            MealCategory::Snack => "Snack",
        }
    }
}

impl std::fmt::Display for MealCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An authenticated user, as returned by login
///
/// The password column never leaves the record store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub age: i64,
    pub weight: f64,
    pub calorie_goal: i64,
    pub water_goal: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_serializes_as_label() {
        let json = serde_json::to_string(&MealCategory::Breakfast).unwrap();
        assert_eq!(json, "\"Breakfast\"");
        let back: MealCategory = serde_json::from_str("\"Snack\"").unwrap();
        assert_eq!(back, MealCategory::Snack);
    }

    #[test]
    fn test_category_as_str_round_trip() {
        for cat in [
            MealCategory::Breakfast,
            MealCategory::Lunch,
            MealCategory::Dinner,
            MealCategory::Snack,
        ] {
            assert_eq!(cat.to_string(), cat.as_str());
        }
    }
}
