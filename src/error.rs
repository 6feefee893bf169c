//! Error type for the sample and its exit-code mapping.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Exit status for normal completion, including the no-op path.
pub const EXIT_OK: u8 = 0;
/// Exit status for a wrong argument count or bad configuration.
pub const EXIT_USAGE: u8 = 1;
/// Exit status when the file cannot be opened under the `error` policy.
pub const EXIT_IO: u8 = 2;

#[derive(Debug, Error)]
pub enum FixtureError {
    /// The argument vector did not hold exactly program name + 2 arguments.
    #[error("expected 2 arguments, got {argc} argument vector entries")]
    Usage { argc: usize },

    #[error("invalid arguments: {0}")]
    InvalidArguments(#[from] clap::Error),

    #[error("invalid value '{value}' for {var}")]
    InvalidConfig { var: &'static str, value: String },

    #[error("failed to open {path:?}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl FixtureError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            FixtureError::Usage { .. }
            | FixtureError::InvalidArguments(_)
            | FixtureError::InvalidConfig { .. } => EXIT_USAGE,
            FixtureError::Open { .. } => EXIT_IO,
        }
    }

    /// True when the file handle could not be acquired.
    pub fn is_open_failure(&self) -> bool {
        matches!(self, FixtureError::Open { .. })
    }
}
