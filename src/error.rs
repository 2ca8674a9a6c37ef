/// Error type shared by the popup, the background worker and the core logic
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SwitchError {
    /// Malformed user input or current tab URL
    #[error("Invalid URL format: {0}")]
    InvalidUrl(String),

    /// chrome.storage read or write failed
    #[error("{0}")]
    Storage(String),

    /// Shortcut or delete index beyond the end of the list
    #[error("No domain found at index {index} (list has {len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("No active tab found")]
    NoActiveTab,

    #[error("Error querying active tab: {0}")]
    TabQuery(String),

    #[error("Error updating tab: {0}")]
    TabUpdate(String),

    #[error("Please enter both a name and domain URL")]
    MissingInput,

    #[error("Unknown command: {0}")]
    UnknownCommand(String),
}

impl From<url::ParseError> for SwitchError {
    fn from(err: url::ParseError) -> Self {
        SwitchError::InvalidUrl(err.to_string())
    }
}
