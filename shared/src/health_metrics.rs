//! Health metrics calculations module
//!
//! Pure BMI calculation and classification based on user profile data.
//!
//! # Design Principles
//!
//! 1. **Pure Functions**: All calculations are pure, no side effects
//! 2. **Type Safety**: Strong typing prevents unit confusion

use serde::{Deserialize, Serialize};

/// Age band used to select the classification thresholds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgeBand {
    /// Age 18 and over
    Adult,
    /// Under 18
    Kid,
}

impl AgeBand {
    /// Band for a given age in years
    pub fn from_age(age_years: i32) -> Self {
        if age_years >= 18 {
            AgeBand::Adult
        } else {
            AgeBand::Kid
        }
    }
}

/// BMI category classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    Underweight,
    NormalWeight,
    Overweight,
    Obese,
}

impl BmiCategory {
    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::NormalWeight => "Normal weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }
}

/// BMI classification result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmiResult {
    /// BMI value
    pub value: f64,
    /// BMI category
    pub category: BmiCategory,
    /// Band the thresholds were taken from
    pub band: AgeBand,
}

/// Calculate BMI from weight and height
///
/// Formula: BMI = weight(kg) / height(m)²
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// Classify a BMI value using adult thresholds.
///
/// The thresholds are carried over as-is from the reference tables,
/// including the uncovered band [24.9, 25) which falls through to
/// `Obese`. Callers must not smooth this boundary.
pub fn classify_adult(bmi: f64) -> BmiCategory {
    if bmi < 18.5 {
        BmiCategory::Underweight
    } else if bmi < 24.9 {
        BmiCategory::NormalWeight
    } else if (25.0..29.9).contains(&bmi) {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

/// Classify a BMI value using kid (under 18) thresholds
pub fn classify_kid(bmi: f64) -> BmiCategory {
    if bmi < 14.0 {
        BmiCategory::Underweight
    } else if bmi < 18.0 {
        BmiCategory::NormalWeight
    } else if bmi < 20.0 {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

/// Calculate BMI and classify it for the given age
pub fn classify(weight_kg: f64, height_cm: f64, age_years: i32) -> BmiResult {
    let value = calculate_bmi(weight_kg, height_cm);
    let band = AgeBand::from_age(age_years);
    let category = match band {
        AgeBand::Adult => classify_adult(value),
        AgeBand::Kid => classify_kid(value),
    };
    BmiResult {
        value,
        category,
        band,
    }
}
