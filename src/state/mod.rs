//! Application state modules
//!
//! Grouped state structs owned by `JobMatcherApp`. Each one owns its related
//! fields and poll methods.

mod search;
mod ui;

pub use search::SearchState;
pub use ui::UiState;

/// Events that state poll methods can return.
/// These communicate results back to JobMatcherApp without direct mutation.
#[derive(Debug)]
pub enum StateEvent {
    /// Update the status message
    StatusMessage(String),

    /// Log an error message
    LogError(String),

    /// Log a warning message
    LogWarn(String),

    /// Log an info message
    LogInfo(String),
}
