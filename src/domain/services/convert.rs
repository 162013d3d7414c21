use crate::utils::error::{Result, ToolError};

/// 長度單位表，基準單位是公尺
const LENGTH_UNITS: &[(&str, f64)] = &[
    ("meter", 1.0),
    ("kilometer", 1000.0),
    ("centimeter", 0.01),
    ("millimeter", 0.001),
    ("mile", 1609.34),
    ("yard", 0.9144),
    ("foot", 0.3048),
    ("inch", 0.0254),
];

/// 重量單位表，基準單位是公斤
const WEIGHT_UNITS: &[(&str, f64)] = &[
    ("kilogram", 1.0),
    ("gram", 0.001),
    ("milligram", 0.000001),
    ("pound", 0.453592),
    ("ounce", 0.0283495),
];

pub fn convert(value: f64, category: &str, from_unit: &str, to_unit: &str) -> Result<f64> {
    match category {
        "length" => convert_linear(value, LENGTH_UNITS, category, from_unit, to_unit),
        "weight" => convert_linear(value, WEIGHT_UNITS, category, from_unit, to_unit),
        "temperature" => convert_temperature(value, from_unit, to_unit),
        other => Err(ToolError::UnknownCategory {
            category: other.to_string(),
        }),
    }
}

fn convert_linear(
    value: f64,
    table: &[(&str, f64)],
    category: &str,
    from_unit: &str,
    to_unit: &str,
) -> Result<f64> {
    let from_scale = scale_factor(table, category, from_unit)?;
    let to_scale = scale_factor(table, category, to_unit)?;
    // 先換算到基準單位，再換到目標單位
    Ok(value * from_scale / to_scale)
}

fn scale_factor(table: &[(&str, f64)], category: &str, unit: &str) -> Result<f64> {
    table
        .iter()
        .find(|(name, _)| *name == unit)
        .map(|(_, scale)| *scale)
        .ok_or_else(|| ToolError::UnknownUnit {
            category: category.to_string(),
            unit: unit.to_string(),
        })
}

/// 溫度不是線性刻度，一律經過攝氏做中介
fn convert_temperature(value: f64, from_unit: &str, to_unit: &str) -> Result<f64> {
    let celsius = match from_unit {
        "celsius" => value,
        "fahrenheit" => (value - 32.0) * 5.0 / 9.0,
        "kelvin" => value - 273.15,
        other => {
            return Err(ToolError::UnknownUnit {
                category: "temperature".to_string(),
                unit: other.to_string(),
            })
        }
    };

    match to_unit {
        "celsius" => Ok(celsius),
        "fahrenheit" => Ok(celsius * 9.0 / 5.0 + 32.0),
        "kelvin" => Ok(celsius + 273.15),
        other => Err(ToolError::UnknownUnit {
            category: "temperature".to_string(),
            unit: other.to_string(),
        }),
    }
}
