use crate::utils::error::ToolError;
use axum::extract::{FromRequest, Request};
use axum::http::header;
use axum::{Form, Json};
use serde::de::DeserializeOwned;

/// 同一個 extractor 同時吃 JSON 和 HTML form 的 body。
/// 其它 content type 一律 400，錯誤回應保持 {"error": ...} 的形狀。
pub struct JsonOrForm<T>(pub T);

impl<T, S> FromRequest<S> for JsonOrForm<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ToolError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or("")
            .to_string();

        if content_type.starts_with("application/json") {
            let Json(payload) = Json::<T>::from_request(req, state)
                .await
                .map_err(|e| ToolError::InvalidBody {
                    message: e.body_text(),
                })?;
            return Ok(Self(payload));
        }

        if content_type.starts_with("application/x-www-form-urlencoded") {
            let Form(payload) = Form::<T>::from_request(req, state)
                .await
                .map_err(|e| ToolError::InvalidBody {
                    message: e.body_text(),
                })?;
            return Ok(Self(payload));
        }

        Err(ToolError::InvalidBody {
            message: format!("unsupported content type '{}'", content_type),
        })
    }
}
