//! Actions returned by screen event handlers.

use super::app::Screen;

/// An action that a screen handler returns to the [`App`](super::App).
///
/// The `App` interprets these to mutate the form state, the submission
/// store, and the current screen; screens themselves never touch the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// No state change needed.
    None,
    /// Navigate to the given screen.
    Navigate(Screen),
    /// Validate the draft and, if clean, stamp and store it.
    Submit,
    /// Delete the submission at the given list index.
    Delete(usize),
    /// Quit the application.
    Quit,
}
