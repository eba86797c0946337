//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! The screening core has a single outbound dependency: the content-store
//! write path, behind [`ResultStore`].

mod result_store;

pub use result_store::{DocumentId, ResultStore, StoreError};
