use crate::api::dto::{required_text, TextProcessRequest};
use crate::api::extract::JsonOrForm;
use crate::domain::services::text;
use crate::utils::error::Result;
use axum::Json;
use serde_json::{json, Value};

pub async fn text_process(JsonOrForm(req): JsonOrForm<TextProcessRequest>) -> Result<Json<Value>> {
    let operation = required_text("operation", &req.operation)?;

    let outcome = text::transform(&req.text, operation)?;

    let mut body = json!({ "result": outcome.result });
    if let Some(stats) = outcome.stats {
        body["stats"] = serde_json::to_value(stats)?;
    }
    Ok(Json(body))
}
