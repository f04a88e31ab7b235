//! Submission persistence: one JSON snapshot file.
//!
//! The in-memory sequence is the source of truth; the snapshot is a cache
//! rewritten in full after every mutation and read once at startup. A
//! missing or corrupt snapshot degrades to an empty store, never a startup
//! failure.

mod error;
mod store;

pub use error::StorageError;
pub use store::SubmissionStore;
