//! Content-store adapters for the [`ResultStore`] port.
//!
//! [`ResultStore`]: crate::ports::ResultStore

mod in_memory;
mod sanity;

pub use in_memory::InMemoryResultStore;
pub use sanity::SanityResultStore;
