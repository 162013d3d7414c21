use crate::api::dto::{required_text, ContactRequest};
use crate::api::extract::JsonOrForm;
use crate::api::state::AppState;
use crate::domain::model::ContactRecord;
use crate::utils::error::Result;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use serde_json::{json, Value};

pub async fn contact(
    State(state): State<AppState>,
    JsonOrForm(req): JsonOrForm<ContactRequest>,
) -> Result<(StatusCode, Json<Value>)> {
    let name = required_text("name", &req.name)?.trim().to_string();
    let email = required_text("email", &req.email)?.trim().to_string();
    let message = required_text("message", &req.message)?.trim().to_string();
    let subject = req
        .subject
        .as_deref()
        .unwrap_or("")
        .trim()
        .to_string();

    let record = ContactRecord {
        name,
        email,
        subject,
        message,
        timestamp: Utc::now().format("%Y-%m-%dT%H:%M:%S%.6fZ").to_string(),
    };

    state.contact_store.append(record).await?;
    Ok((StatusCode::CREATED, Json(json!({ "result": "received" }))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::ContactStore;
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct MockContactStore {
        records: Mutex<Vec<ContactRecord>>,
    }

    #[async_trait]
    impl ContactStore for MockContactStore {
        async fn append(&self, record: ContactRecord) -> crate::utils::error::Result<()> {
            self.records.lock().unwrap().push(record);
            Ok(())
        }
    }

    fn request(name: &str, email: &str, message: &str) -> ContactRequest {
        ContactRequest {
            name: Some(name.to_string()),
            email: Some(email.to_string()),
            subject: Some("  question  ".to_string()),
            message: Some(message.to_string()),
        }
    }

    #[tokio::test]
    async fn test_valid_submission_is_stored_trimmed() {
        let store = Arc::new(MockContactStore::default());
        let state = AppState::new(store.clone());

        let (status, _) = contact(
            State(state),
            JsonOrForm(request("  Alice  ", " alice@example.com ", "  hello  ")),
        )
        .await
        .unwrap();

        assert_eq!(status, StatusCode::CREATED);
        let records = store.records.lock().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Alice");
        assert_eq!(records[0].email, "alice@example.com");
        assert_eq!(records[0].subject, "question");
        assert_eq!(records[0].message, "hello");
        assert!(records[0].timestamp.ends_with('Z'));
    }

    #[tokio::test]
    async fn test_missing_required_field_is_rejected() {
        let store = Arc::new(MockContactStore::default());
        let state = AppState::new(store.clone());

        let mut req = request("Alice", "alice@example.com", "hello");
        req.message = None;

        let err = contact(State(state), JsonOrForm(req)).await.unwrap_err();
        assert!(err.to_string().contains("message"));
        assert!(store.records.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_subject_is_optional() {
        let store = Arc::new(MockContactStore::default());
        let state = AppState::new(store.clone());

        let mut req = request("Alice", "alice@example.com", "hello");
        req.subject = None;

        let (status, _) = contact(State(state), JsonOrForm(req)).await.unwrap();
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(store.records.lock().unwrap()[0].subject, "");
    }
}
