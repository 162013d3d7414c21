use crate::api::dto::{required_number, BmiRequest};
use crate::api::extract::JsonOrForm;
use crate::domain::services::bmi as bmi_service;
use crate::utils::error::Result;
use axum::Json;
use serde_json::{json, Value};

pub async fn bmi(JsonOrForm(req): JsonOrForm<BmiRequest>) -> Result<Json<Value>> {
    let weight_kg = required_number("weight_kg", &req.weight_kg)?;
    let height_cm = required_number("height_cm", &req.height_cm)?;

    let (value, category) = bmi_service::calculate_bmi(weight_kg, height_cm)?;
    Ok(Json(json!({ "result": value, "category": category })))
}
