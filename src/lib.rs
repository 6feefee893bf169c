//! Fault-injection sample for detection tooling.
//!
//! Reads a mode flag and a file path, reads up to [`sample::BUFFER_SIZE`] bytes
//! from the file, and writes through a null pointer when the first byte is `y`.
//! The crash is the point: it gives fuzzers and analyzers a reproducible
//! CWE-476 signature to flag.

pub mod cli;
pub mod config;
pub mod error;
pub mod fault;
pub mod logging;
pub mod metadata;
pub mod sample;

pub use cli::{parse_invocation, Invocation};
pub use config::{FixtureConfig, OpenFailurePolicy};
pub use error::FixtureError;
pub use sample::{classify, read_prefix, run, Outcome, Prefix};
