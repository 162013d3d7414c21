use crate::api::dto::FormatJsonRequest;
use crate::api::extract::JsonOrForm;
use crate::domain::services::json_format;
use crate::utils::error::{Result, ToolError};
use crate::utils::validation::validate_range;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

pub async fn format_json(JsonOrForm(req): JsonOrForm<FormatJsonRequest>) -> Result<Response> {
    let indent = match &req.indent {
        Some(value) => value.as_usize("indent")?,
        None => 2,
    };
    validate_range("indent", indent, 0, 16)?;

    // 解析失敗時這個端點額外回 "valid": false (和其它工具的錯誤形狀不同)
    let response = match json_format::format_json(&req.json_string, indent) {
        Ok(formatted) => (
            StatusCode::OK,
            Json(json!({ "formatted": formatted, "valid": true })),
        )
            .into_response(),
        Err(err @ ToolError::InvalidJsonInput { .. }) => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": err.to_string(), "valid": false })),
        )
            .into_response(),
        Err(other) => return Err(other),
    };

    Ok(response)
}
