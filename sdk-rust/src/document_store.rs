use crate::{NewRecord, StoreResult, StoredRecord};

/// Append-only persistence for generated content.
#[async_trait::async_trait]
pub trait DocumentStore: Send + Sync {
    fn name(&self) -> &'static str;
    /// Create a record and return its identifier.
    async fn create_record(&self, record: NewRecord) -> StoreResult<String>;
    /// Return up to `limit` records, most recent first.
    async fn list_recent(&self, limit: usize) -> StoreResult<Vec<StoredRecord>>;
    async fn check_connection(&self) -> StoreResult<()> {
        Ok(())
    }
}
