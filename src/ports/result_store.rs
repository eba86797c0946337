//! Result persistence port.
//!
//! The scoring engine knows nothing about the backing store; it hands a
//! finished [`ScreeningResult`] to this port and receives a generated
//! document id. One-shot request/response; retry policy, if any, belongs
//! to the implementing adapter.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::result::ScreeningResult;

/// Identifier generated by the content store for a created document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentId(String);

impl DocumentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DocumentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Failures of the content-store write path.
///
/// `PermissionDenied` is kept distinct so operators can be alerted to a
/// rejected write credential; the rest surface to respondents as a generic
/// "could not save" message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("content store rejected the write credential")]
    PermissionDenied,

    #[error("content store rejected the document: {0}")]
    Rejected(String),

    #[error("content store transport failure: {0}")]
    Transport(String),
}

/// Port for persisting finished screening results.
#[async_trait]
pub trait ResultStore: Send + Sync {
    /// Creates one result document, returning its generated id.
    async fn save(&self, result: &ScreeningResult) -> Result<DocumentId, StoreError>;
}
