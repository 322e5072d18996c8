//! Workout input types and validation errors shared by the metrics core.

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use thiserror::Error;

/// Errors raised by the numeric core.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MetricsError {
    /// An input value cannot be used for the requested computation
    #[error("Invalid {field}: {reason}")]
    InvalidInput {
        /// Name of the offending input
        field: &'static str,
        /// What is wrong with it
        reason: String,
    },
}

impl MetricsError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        MetricsError::InvalidInput {
            field,
            reason: reason.into(),
        }
    }
}

/// Reject values that are NaN, infinite, or not strictly positive.
pub(crate) fn require_positive(field: &'static str, value: f64) -> Result<f64, MetricsError> {
    if !value.is_finite() {
        return Err(MetricsError::invalid(field, format!("{} is not a finite number", value)));
    }
    if value <= 0.0 {
        return Err(MetricsError::invalid(field, format!("must be greater than zero, got {}", value)));
    }
    Ok(value)
}

/// Biological sex as used by the calorie model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Gender {
    #[default]
    Male,
    Female,
}

impl Gender {
    /// All selectable values, in form order.
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    /// Numeric encoding expected by the model (Male = 1, Female = 0).
    pub fn encoded(&self) -> f64 {
        match self {
            Gender::Male => 1.0,
            Gender::Female => 0.0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// The seven physiological and workout inputs collected by the form.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorkoutInput {
    /// Biological sex
    pub gender: Gender,
    /// Age in years
    pub age: u32,
    /// Height in centimeters
    pub height_cm: f64,
    /// Weight in kilograms
    pub weight_kg: f64,
    /// Exercise duration in minutes
    pub duration_min: f64,
    /// Average heart rate in bpm
    pub heart_rate_bpm: f64,
    /// Core body temperature in degrees Celsius
    pub body_temp_c: f64,
}

impl Default for WorkoutInput {
    fn default() -> Self {
        Self {
            gender: Gender::Male,
            age: 25,
            height_cm: 170.0,
            weight_kg: 70.0,
            duration_min: 30.0,
            heart_rate_bpm: 120.0,
            body_temp_c: 37.5,
        }
    }
}

impl WorkoutInput {
    /// Check that every field is usable by the core.
    ///
    /// This does not enforce the form's slider ranges; see [`WorkoutInput::check_bounds`].
    pub fn validate(&self) -> Result<(), MetricsError> {
        if self.age == 0 {
            return Err(MetricsError::invalid("age", "must be greater than zero"));
        }
        require_positive("height", self.height_cm)?;
        require_positive("weight", self.weight_kg)?;
        require_positive("duration", self.duration_min)?;
        require_positive("heart rate", self.heart_rate_bpm)?;
        if !self.body_temp_c.is_finite() {
            return Err(MetricsError::invalid("body temperature", "is not a finite number"));
        }
        Ok(())
    }

    /// List the fields that fall outside the form's slider ranges.
    pub fn check_bounds(&self, bounds: &InputBounds) -> Vec<&'static str> {
        let mut outside = Vec::new();
        if !bounds.age.contains(&self.age) {
            outside.push("age");
        }
        if !bounds.height_cm.contains(&self.height_cm) {
            outside.push("height");
        }
        if !bounds.weight_kg.contains(&self.weight_kg) {
            outside.push("weight");
        }
        if !bounds.duration_min.contains(&self.duration_min) {
            outside.push("duration");
        }
        if !bounds.heart_rate_bpm.contains(&self.heart_rate_bpm) {
            outside.push("heart rate");
        }
        if !bounds.body_temp_c.contains(&self.body_temp_c) {
            outside.push("body temperature");
        }
        outside
    }

    /// Feature vector in the model's canonical column order.
    pub fn features(&self) -> [f64; 7] {
        [
            self.gender.encoded(),
            self.age as f64,
            self.height_cm,
            self.weight_kg,
            self.duration_min,
            self.heart_rate_bpm,
            self.body_temp_c,
        ]
    }
}

/// Slider ranges offered by the input form.
#[derive(Debug, Clone, PartialEq)]
pub struct InputBounds {
    pub age: RangeInclusive<u32>,
    pub height_cm: RangeInclusive<f64>,
    pub weight_kg: RangeInclusive<f64>,
    pub duration_min: RangeInclusive<f64>,
    pub heart_rate_bpm: RangeInclusive<f64>,
    pub body_temp_c: RangeInclusive<f64>,
    /// Slider step for body temperature
    pub body_temp_step: f64,
}

impl Default for InputBounds {
    fn default() -> Self {
        Self {
            age: 10..=100,
            height_cm: 100.0..=250.0,
            weight_kg: 30.0..=200.0,
            duration_min: 1.0..=300.0,
            heart_rate_bpm: 60.0..=220.0,
            body_temp_c: 36.0..=42.0,
            body_temp_step: 0.1,
        }
    }
}
