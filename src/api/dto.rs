use crate::utils::error::{Result, ToolError};
use serde::Deserialize;

/// 數值欄位同時接受 JSON number 和字串 (HTML form 只會送字串)
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum NumberOrText {
    Number(f64),
    Text(String),
}

impl NumberOrText {
    pub fn as_f64(&self, field: &str) -> Result<f64> {
        match self {
            Self::Number(n) => Ok(*n),
            Self::Text(s) => s.trim().parse::<f64>().map_err(|_| ToolError::InvalidNumber {
                field: field.to_string(),
                value: s.clone(),
            }),
        }
    }

    pub fn as_usize(&self, field: &str) -> Result<usize> {
        match self {
            Self::Number(n) if n.fract() == 0.0 && *n >= 0.0 => Ok(*n as usize),
            Self::Number(n) => Err(ToolError::InvalidNumber {
                field: field.to_string(),
                value: n.to_string(),
            }),
            Self::Text(s) => s.trim().parse::<usize>().map_err(|_| ToolError::InvalidNumber {
                field: field.to_string(),
                value: s.clone(),
            }),
        }
    }
}

/// 布林欄位同樣要吃 form 的字串表示
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum BoolOrText {
    Flag(bool),
    Text(String),
}

impl BoolOrText {
    pub fn as_bool(&self, field: &str) -> Result<bool> {
        match self {
            Self::Flag(b) => Ok(*b),
            Self::Text(s) => match s.trim().to_lowercase().as_str() {
                "true" | "1" | "yes" | "on" => Ok(true),
                "false" | "0" | "no" | "off" => Ok(false),
                _ => Err(ToolError::InvalidFieldValue {
                    field: field.to_string(),
                    value: s.clone(),
                    reason: "Expected a boolean".to_string(),
                }),
            },
        }
    }
}

pub fn required_number(field: &str, value: &Option<NumberOrText>) -> Result<f64> {
    value
        .as_ref()
        .ok_or_else(|| ToolError::MissingField {
            field: field.to_string(),
        })?
        .as_f64(field)
}

pub fn required_text<'a>(field: &str, value: &'a Option<String>) -> Result<&'a str> {
    match value {
        Some(s) if !s.trim().is_empty() => Ok(s.as_str()),
        _ => Err(ToolError::MissingField {
            field: field.to_string(),
        }),
    }
}

#[derive(Debug, Deserialize)]
pub struct CalculateRequest {
    pub operand1: Option<NumberOrText>,
    pub operand2: Option<NumberOrText>,
    pub operator: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ConvertRequest {
    pub value: Option<NumberOrText>,
    pub category: Option<String>,
    pub from_unit: Option<String>,
    pub to_unit: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TextProcessRequest {
    #[serde(default)]
    pub text: String,
    pub operation: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct FormatJsonRequest {
    #[serde(default)]
    pub json_string: String,
    pub indent: Option<NumberOrText>,
}

#[derive(Debug, Deserialize)]
pub struct BmiRequest {
    pub weight_kg: Option<NumberOrText>,
    pub height_cm: Option<NumberOrText>,
}

#[derive(Debug, Deserialize)]
pub struct AgeRequest {
    pub birth_date: Option<String>,
    pub as_of: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PasswordRequest {
    pub length: Option<NumberOrText>,
    pub lowercase: Option<BoolOrText>,
    pub uppercase: Option<BoolOrText>,
    pub digits: Option<BoolOrText>,
    pub symbols: Option<BoolOrText>,
}

#[derive(Debug, Deserialize)]
pub struct ContactRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
}
