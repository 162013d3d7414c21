use crate::api::dto::{required_number, required_text, ConvertRequest};
use crate::api::extract::JsonOrForm;
use crate::domain::services::convert as convert_service;
use crate::utils::error::Result;
use axum::Json;
use serde_json::{json, Value};

pub async fn convert(JsonOrForm(req): JsonOrForm<ConvertRequest>) -> Result<Json<Value>> {
    let value = required_number("value", &req.value)?;
    let category = required_text("category", &req.category)?;
    let from_unit = required_text("from_unit", &req.from_unit)?;
    let to_unit = required_text("to_unit", &req.to_unit)?;

    let result = convert_service::convert(value, category, from_unit, to_unit)?;
    Ok(Json(json!({ "result": result })))
}
