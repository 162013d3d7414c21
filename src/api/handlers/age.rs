use crate::api::dto::{required_text, AgeRequest};
use crate::api::extract::JsonOrForm;
use crate::domain::services::age as age_service;
use crate::utils::error::{Result, ToolError};
use axum::Json;
use chrono::{NaiveDate, Utc};
use serde_json::{json, Value};

pub async fn age(JsonOrForm(req): JsonOrForm<AgeRequest>) -> Result<Json<Value>> {
    let birth_date = parse_date("birth_date", required_text("birth_date", &req.birth_date)?)?;

    let as_of = match &req.as_of {
        Some(s) if !s.trim().is_empty() => parse_date("as_of", s)?,
        _ => Utc::now().date_naive(),
    };

    let breakdown = age_service::calculate_age(birth_date, as_of)?;
    Ok(Json(json!({ "result": breakdown })))
}

fn parse_date(field: &str, value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| ToolError::InvalidFieldValue {
        field: field.to_string(),
        value: value.to_string(),
        reason: "Expected a date in YYYY-MM-DD format".to_string(),
    })
}
