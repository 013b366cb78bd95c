/// Errors from the fetch pipeline.
use std::io;

use thiserror::Error;

/// Everything that can stop a profile fetch. All variants are terminal.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The arguments did not resolve to exactly one username.
    #[error("Username required")]
    InvalidArguments,

    /// The working directory could not be resolved.
    #[error("{0}")]
    Environment(#[source] io::Error),

    /// The fetch routine could not be started or exited unsuccessfully.
    #[error("Failed to execute Python script: {cause}")]
    Subprocess {
        /// OS spawn error or the child's exit status.
        cause: String,
    },

    /// The routine's stdout was not a valid profile document.
    #[error("Failed to unmarshal data: {0}")]
    Decode(#[source] serde_json::Error),

    /// The decoded profile could not be written back out as JSON.
    #[error("Failed to marshal data: {0}")]
    Encode(#[source] serde_json::Error),
}

impl FetchError {
    /// Return the CLI exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidArguments
            | Self::Environment(_)
            | Self::Subprocess { .. }
            | Self::Decode(_)
            | Self::Encode(_) => 1,
        }
    }
}
