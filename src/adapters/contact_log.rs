use crate::domain::model::ContactRecord;
use crate::domain::ports::ContactStore;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::fs;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

/// 檔案版聯絡記錄：data_dir/contacts.json 裡的一個 JSON 陣列。
/// 追加走 read-modify-write，用 Mutex 序列化並發寫入。
#[derive(Debug)]
pub struct FileContactLog {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileContactLog {
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Self {
        Self {
            path: data_dir.as_ref().join("contacts.json"),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_existing(&self) -> Vec<ContactRecord> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Vec::new(),
            Err(e) => {
                tracing::warn!("⚠️ Could not read {}: {}, starting fresh", self.path.display(), e);
                return Vec::new();
            }
        };

        match serde_json::from_str(&content) {
            Ok(records) => records,
            Err(e) => {
                // 壞檔不該讓整個表單掛掉，記 warning 後當空陣列
                tracing::warn!(
                    "⚠️ Corrupt contact log at {}: {}, starting fresh",
                    self.path.display(),
                    e
                );
                Vec::new()
            }
        }
    }
}

#[async_trait]
impl ContactStore for FileContactLog {
    async fn append(&self, record: ContactRecord) -> Result<()> {
        let _guard = self.lock.lock().await;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut records = self.read_existing();
        records.push(record);

        let serialized = serde_json::to_string_pretty(&records)?;
        fs::write(&self.path, serialized)?;

        tracing::info!("📬 Contact record saved ({} total)", records.len());
        Ok(())
    }
}
