//! Runtime configuration for the sample.
//!
//! The sample takes no flags beyond its two positional arguments, so the only
//! knobs come from the environment:
//! - `NPD_FIXTURE_ON_OPEN_FAILURE`: what to do when the file cannot be opened
//! - `NPD_FIXTURE_LOG`: tracing filter directive (see [`crate::logging`])

use crate::error::FixtureError;
use std::env::{self, VarError};
use std::fmt;

/// Environment variable selecting the [`OpenFailurePolicy`].
pub const ON_OPEN_FAILURE_ENV: &str = "NPD_FIXTURE_ON_OPEN_FAILURE";

/// What happens when the named file cannot be opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OpenFailurePolicy {
    /// Fail fast with a non-zero exit status and no fault
    #[default]
    Error,

    /// Carry on with an empty buffer, which never faults
    Empty,

    /// Reproduce the unchecked-handle crash by faulting anyway
    Fault,
}

impl OpenFailurePolicy {
    /// Parse a policy name, case-insensitively.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "error" | "abort" => Some(OpenFailurePolicy::Error),
            "empty" | "ignore" => Some(OpenFailurePolicy::Empty),
            "fault" | "crash" => Some(OpenFailurePolicy::Fault),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OpenFailurePolicy::Error => "error",
            OpenFailurePolicy::Empty => "empty",
            OpenFailurePolicy::Fault => "fault",
        }
    }
}

impl fmt::Display for OpenFailurePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixtureConfig {
    pub on_open_failure: OpenFailurePolicy,
}

impl FixtureConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, FixtureError> {
        Self::from_lookup(|key| env::var(key))
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// A value that is not valid Unicode is rejected, never treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, FixtureError>
    where
        F: Fn(&str) -> Result<String, VarError>,
    {
        let mut config = Self::default();

        let value = match lookup(ON_OPEN_FAILURE_ENV) {
            Ok(value) => Some(value),
            Err(VarError::NotPresent) => None,
            Err(VarError::NotUnicode(raw)) => {
                return Err(FixtureError::InvalidConfig {
                    var: ON_OPEN_FAILURE_ENV,
                    value: raw.to_string_lossy().into_owned(),
                })
            }
        };

        if let Some(value) = value {
            config.on_open_failure =
                OpenFailurePolicy::parse(&value).ok_or(FixtureError::InvalidConfig {
                    var: ON_OPEN_FAILURE_ENV,
                    value,
                })?;
        }

        Ok(config)
    }
}
