use crate::api::dto::{BoolOrText, PasswordRequest};
use crate::api::extract::JsonOrForm;
use crate::domain::model::PasswordPolicy;
use crate::domain::services::password as password_service;
use crate::utils::error::Result;
use axum::Json;
use serde_json::{json, Value};

pub async fn password(JsonOrForm(req): JsonOrForm<PasswordRequest>) -> Result<Json<Value>> {
    let length = match &req.length {
        Some(value) => value.as_usize("length")?,
        None => PasswordPolicy::default().length,
    };

    let policy = PasswordPolicy {
        length,
        lowercase: flag("lowercase", &req.lowercase)?,
        uppercase: flag("uppercase", &req.uppercase)?,
        digits: flag("digits", &req.digits)?,
        symbols: flag("symbols", &req.symbols)?,
    };

    let generated = password_service::generate(&policy)?;
    Ok(Json(json!({ "result": generated })))
}

// 類別旗標預設開啟
fn flag(field: &str, value: &Option<BoolOrText>) -> Result<bool> {
    match value {
        Some(v) => v.as_bool(field),
        None => Ok(true),
    }
}
