//! Body mass index.

use serde::{Deserialize, Serialize};

use super::types::{require_positive, MetricsError};

/// Lower bound of the normal BMI bracket (inclusive).
pub const BMI_NORMAL_MIN: f64 = 18.5;
/// Upper bound of the normal BMI bracket (inclusive).
pub const BMI_NORMAL_MAX: f64 = 24.9;

/// Weight status derived from BMI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
}

impl BmiCategory {
    /// Categorize a BMI value. Both ends of the normal bracket are inclusive;
    /// anything above 24.9 counts as overweight.
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < BMI_NORMAL_MIN {
            BmiCategory::Underweight
        } else if bmi <= BMI_NORMAL_MAX {
            BmiCategory::Normal
        } else {
            BmiCategory::Overweight
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal",
            BmiCategory::Overweight => "Overweight",
        }
    }
}

impl std::fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// BMI = weight (kg) / height (m)^2.
pub fn body_mass_index(weight_kg: f64, height_cm: f64) -> Result<f64, MetricsError> {
    let height_cm = require_positive("height", height_cm)?;
    let weight_kg = require_positive("weight", weight_kg)?;
    let height_m = height_cm / 100.0;
    Ok(weight_kg / (height_m * height_m))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_mass_index() {
        let bmi = body_mass_index(70.0, 170.0).unwrap();
        assert!((bmi - 24.221_453).abs() < 1e-5);
    }

    #[test]
    fn test_bmi_rejects_zero_height() {
        assert!(body_mass_index(70.0, 0.0).is_err());
        assert!(body_mass_index(0.0, 170.0).is_err());
    }

    #[test]
    fn test_bmi_category_brackets() {
        assert_eq!(BmiCategory::from_bmi(17.0), BmiCategory::Underweight);
        assert_eq!(BmiCategory::from_bmi(18.5), BmiCategory::Normal);
        assert_eq!(BmiCategory::from_bmi(22.0), BmiCategory::Normal);
        assert_eq!(BmiCategory::from_bmi(24.9), BmiCategory::Normal);
        assert_eq!(BmiCategory::from_bmi(24.95), BmiCategory::Overweight);
        assert_eq!(BmiCategory::from_bmi(31.0), BmiCategory::Overweight);
    }
}
