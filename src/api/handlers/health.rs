use axum::Json;
use serde_json::{json, Value};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok", "version": VERSION }))
}
