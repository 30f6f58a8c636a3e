//! Error types for tree construction

/// Errors raised while building a property forest
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    /// Property path could not be split into usable segments
    #[error("malformed property path '{path}': {reason}")]
    MalformedPath {
        /// Raw path as it appeared in the input record
        path: String,
        /// What was wrong with it
        reason: String,
    },
}

impl TreeError {
    /// Create malformed path error
    pub fn malformed(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedPath {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for tree operations
pub type TreeResult<T> = Result<T, TreeError>;
