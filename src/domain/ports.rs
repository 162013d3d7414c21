use crate::domain::model::ContactRecord;
use crate::utils::error::Result;
use async_trait::async_trait;

/// 聯絡記錄的儲存介面；實作在 adapters 層
#[async_trait]
pub trait ContactStore: Send + Sync {
    async fn append(&self, record: ContactRecord) -> Result<()>;
}
