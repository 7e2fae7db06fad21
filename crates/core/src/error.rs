//! Error kinds surfaced by agents and tools.

/// Errors returned by [`Agent::use_tool`](crate::Agent::use_tool) and
/// [`Tool::execute`](crate::Tool::execute).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// No tool is registered under the given name.
    #[error("tool '{0}' not found")]
    NotFound(String),

    /// A tool rejected its parameters.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl Error {
    /// Shorthand for [`Error::InvalidArgument`].
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidArgument(reason.into())
    }
}

/// Result alias used across agentframe.
pub type Result<T> = std::result::Result<T, Error>;
