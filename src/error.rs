use thiserror::Error;

pub type Result<T> = std::result::Result<T, ChatError>;

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Please enter a username and password")]
    MissingCredentials,

    #[error("Please enter a username")]
    EmptyConversationName,

    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ChatError {
    /// Validation errors are shown to the user; everything else is only logged.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ChatError::PasswordMismatch
                | ChatError::MissingCredentials
                | ChatError::EmptyConversationName
        )
    }
}
