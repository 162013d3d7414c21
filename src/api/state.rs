use crate::domain::ports::ContactStore;
use std::sync::Arc;

/// 每個 request 共用的應用狀態；除了聯絡記錄外所有工具都是無狀態的
#[derive(Clone)]
pub struct AppState {
    pub contact_store: Arc<dyn ContactStore>,
}

impl AppState {
    pub fn new(contact_store: Arc<dyn ContactStore>) -> Self {
        Self { contact_store }
    }
}
