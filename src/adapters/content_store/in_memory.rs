//! In-memory result store for tests and local development.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::result::ScreeningResult;
use crate::ports::{DocumentId, ResultStore, StoreError};

/// Keeps saved results in memory and hands out sequential ids.
#[derive(Default)]
pub struct InMemoryResultStore {
    saved: Mutex<Vec<ScreeningResult>>,
    fail_with: Option<StoreError>,
}

impl InMemoryResultStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every save fails with the given error.
    pub fn failing(error: StoreError) -> Self {
        Self {
            saved: Mutex::new(Vec::new()),
            fail_with: Some(error),
        }
    }

    pub fn saved(&self) -> Vec<ScreeningResult> {
        self.saved.lock().unwrap().clone()
    }

    pub fn len(&self) -> usize {
        self.saved.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl ResultStore for InMemoryResultStore {
    async fn save(&self, result: &ScreeningResult) -> Result<DocumentId, StoreError> {
        if let Some(error) = &self.fail_with {
            return Err(error.clone());
        }
        let mut saved = self.saved.lock().unwrap();
        saved.push(result.clone());
        Ok(DocumentId::new(format!("mem-{}", saved.len())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::contact::ContactInfo;
    use crate::domain::foundation::Timestamp;
    use crate::domain::instrument::Severity;

    fn result() -> ScreeningResult {
        ScreeningResult {
            instrument_id: "gad7".into(),
            instrument_title: "GAD-7".into(),
            answers: vec![],
            total_score: 3.0,
            interpretation: "fine".into(),
            severity: Severity::Low,
            contact: ContactInfo::new("Ayşe", "Yılmaz", "a@example.com", None).unwrap(),
            submitted_at: Timestamp::now(),
            needs_follow_up: false,
        }
    }

    #[tokio::test]
    async fn save_assigns_sequential_ids() {
        let store = InMemoryResultStore::new();
        let first = store.save(&result()).await.unwrap();
        let second = store.save(&result()).await.unwrap();
        assert_eq!(first.as_str(), "mem-1");
        assert_eq!(second.as_str(), "mem-2");
        assert_eq!(store.len(), 2);
    }

    #[tokio::test]
    async fn failing_store_saves_nothing() {
        let store = InMemoryResultStore::failing(StoreError::PermissionDenied);
        assert_eq!(
            store.save(&result()).await,
            Err(StoreError::PermissionDenied)
        );
        assert!(store.is_empty());
    }
}
