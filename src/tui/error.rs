use crate::storage::StorageError;

/// Failures that end the TUI session.
///
/// Validation problems never show up here; they are ordinary values on the
/// form screen. This covers the terminal itself and opening the submission
/// store.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Terminal or event-stream I/O failed.
    #[error("terminal I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The submission store could not be opened.
    #[error("submission storage error: {0}")]
    Storage(#[from] StorageError),
}
