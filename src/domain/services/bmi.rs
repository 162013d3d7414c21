use crate::domain::model::BmiCategory;
use crate::utils::error::{Result, ToolError};

/// BMI = 體重(kg) / 身高(m)^2，取到小數一位
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> Result<(f64, BmiCategory)> {
    if !weight_kg.is_finite() || weight_kg <= 0.0 {
        return Err(ToolError::InvalidFieldValue {
            field: "weight_kg".to_string(),
            value: weight_kg.to_string(),
            reason: "Weight must be a positive number".to_string(),
        });
    }
    if !height_cm.is_finite() || height_cm <= 0.0 {
        return Err(ToolError::InvalidFieldValue {
            field: "height_cm".to_string(),
            value: height_cm.to_string(),
            reason: "Height must be a positive number".to_string(),
        });
    }

    let height_m = height_cm / 100.0;
    let bmi = weight_kg / (height_m * height_m);
    let rounded = (bmi * 10.0).round() / 10.0;

    Ok((rounded, categorize(rounded)))
}

fn categorize(bmi: f64) -> BmiCategory {
    if bmi < 18.5 {
        BmiCategory::Underweight
    } else if bmi < 25.0 {
        BmiCategory::Normal
    } else if bmi < 30.0 {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bmi_value_and_rounding() {
        let (bmi, category) = calculate_bmi(70.0, 175.0).unwrap();
        assert_eq!(bmi, 22.9); // 70 / 1.75^2 = 22.857...
        assert_eq!(category, BmiCategory::Normal);
    }

    #[test]
    fn test_category_bands() {
        assert_eq!(calculate_bmi(50.0, 175.0).unwrap().1, BmiCategory::Underweight);
        assert_eq!(calculate_bmi(70.0, 175.0).unwrap().1, BmiCategory::Normal);
        assert_eq!(calculate_bmi(85.0, 175.0).unwrap().1, BmiCategory::Overweight);
        assert_eq!(calculate_bmi(100.0, 175.0).unwrap().1, BmiCategory::Obese);
    }

    #[test]
    fn test_band_boundaries() {
        // 18.5 和 25.0 落在上一級的右側
        assert_eq!(categorize(18.5), BmiCategory::Normal);
        assert_eq!(categorize(25.0), BmiCategory::Overweight);
        assert_eq!(categorize(30.0), BmiCategory::Obese);
    }

    #[test]
    fn test_non_positive_inputs_are_rejected() {
        assert!(calculate_bmi(0.0, 175.0).is_err());
        assert!(calculate_bmi(-70.0, 175.0).is_err());
        assert!(calculate_bmi(70.0, 0.0).is_err());
        assert!(calculate_bmi(f64::NAN, 175.0).is_err());
    }
}
