use std::{collections::VecDeque, sync::Mutex};

use crate::{DocumentStore, NewRecord, StoreError, StoreResult, StoredRecord};

/// A mock document store that records created records and yields queued
/// identifiers or errors.
#[derive(Default)]
pub struct MockDocumentStore {
    state: Mutex<MockDocumentStoreState>,
}

#[derive(Default)]
struct MockDocumentStoreState {
    create_results: VecDeque<StoreResult<String>>,
    created: Vec<NewRecord>,
    records: Vec<StoredRecord>,
    fail_listing: bool,
    connection_error: Option<String>,
}

impl MockDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the identifier returned by the next `create_record` call.
    pub fn enqueue_created_id(&self, id: impl Into<String>) -> &Self {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.create_results.push_back(Ok(id.into()));
        drop(state);
        self
    }

    /// Queue an error for the next `create_record` call.
    pub fn enqueue_create_error(&self, error: StoreError) -> &Self {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.create_results.push_back(Err(error));
        drop(state);
        self
    }

    /// Records returned by `list_recent`, most recent first.
    pub fn set_records(&self, records: Vec<StoredRecord>) {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.records = records;
    }

    pub fn set_fail_listing(&self, fail: bool) {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.fail_listing = fail;
    }

    pub fn set_connection_error(&self, reason: impl Into<String>) {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.connection_error = Some(reason.into());
    }

    /// Records passed to `create_record` so far.
    pub fn created_records(&self) -> Vec<NewRecord> {
        let state = self.state.lock().expect("mock state poisoned");
        state.created.clone()
    }
}

#[async_trait::async_trait]
impl DocumentStore for MockDocumentStore {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn create_record(&self, record: NewRecord) -> StoreResult<String> {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.created.push(record);
        state.create_results.pop_front().unwrap_or_else(|| {
            Err(StoreError::Invariant(
                "mock",
                "no mocked create results available".into(),
            ))
        })
    }

    async fn list_recent(&self, limit: usize) -> StoreResult<Vec<StoredRecord>> {
        let state = self.state.lock().expect("mock state poisoned");
        if state.fail_listing {
            return Err(StoreError::Invariant("mock", "listing disabled".into()));
        }
        Ok(state.records.iter().take(limit).cloned().collect())
    }

    async fn check_connection(&self) -> StoreResult<()> {
        let state = self.state.lock().expect("mock state poisoned");
        match &state.connection_error {
            Some(reason) => Err(StoreError::Invariant("mock", reason.clone())),
            None => Ok(()),
        }
    }
}
