use crate::api::dto::{required_number, required_text, CalculateRequest};
use crate::api::extract::JsonOrForm;
use crate::domain::services::calculator;
use crate::utils::error::Result;
use axum::Json;
use serde_json::{json, Value};

pub async fn calculate(JsonOrForm(req): JsonOrForm<CalculateRequest>) -> Result<Json<Value>> {
    let operand1 = required_number("operand1", &req.operand1)?;
    let operand2 = required_number("operand2", &req.operand2)?;
    let operator = required_text("operator", &req.operator)?;

    let result = calculator::calculate(operand1, operand2, operator)?;
    Ok(Json(json!({ "result": result })))
}
