//! The sample itself: read a short prefix of the file and decide whether to fault.

use crate::cli::Invocation;
use crate::config::{FixtureConfig, OpenFailurePolicy};
use crate::error::FixtureError;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use tracing::{debug, warn};

/// Capacity of the scratch buffer the file is read into.
pub const BUFFER_SIZE: usize = 16;

/// First byte that triggers the null-pointer write.
pub const TRIGGER_BYTE: u8 = b'y';

/// Up to [`BUFFER_SIZE`] bytes from the start of a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Prefix {
    bytes: [u8; BUFFER_SIZE],
    len: usize,
}

impl Prefix {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a prefix from the first [`BUFFER_SIZE`] bytes of `data`.
    pub fn from_bytes(data: &[u8]) -> Self {
        let len = data.len().min(BUFFER_SIZE);
        let mut bytes = [0u8; BUFFER_SIZE];
        bytes[..len].copy_from_slice(&data[..len]);
        Self { bytes, len }
    }

    /// The only byte with any meaning.
    pub fn first(&self) -> Option<u8> {
        self.as_bytes().first().copied()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Result of running the sample, short of actually faulting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Normal completion
    Clean,
    /// The null-pointer write must happen
    NullWrite,
}

/// Open `path`, read at most [`BUFFER_SIZE`] bytes, and close it again.
///
/// Only acquiring the handle can fail. A read error once the file is open
/// (a directory, an I/O fault) keeps whatever bytes arrived before it, which
/// is usually none. The handle never outlives this call.
pub fn read_prefix(path: &Path) -> Result<Prefix, FixtureError> {
    let mut file = File::open(path).map_err(|source| FixtureError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let mut bytes = [0u8; BUFFER_SIZE];
    let mut len = 0;
    while len < BUFFER_SIZE {
        match file.read(&mut bytes[len..]) {
            Ok(0) => break,
            Ok(n) => len += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => {
                debug!("read from {:?} stopped after {} byte(s): {}", path, len, e);
                break;
            }
        }
    }

    debug!("read {} byte(s) from {:?}", len, path);
    Ok(Prefix { bytes, len })
}

/// Decide the outcome from the first byte alone.
pub fn classify(prefix: &Prefix) -> Outcome {
    if prefix.first() == Some(TRIGGER_BYTE) {
        Outcome::NullWrite
    } else {
        Outcome::Clean
    }
}

/// Run the sample for a parsed invocation.
///
/// Any mode other than `--file` returns [`Outcome::Clean`] without touching the
/// filesystem. A failure to open the file goes through the configured
/// [`OpenFailurePolicy`].
pub fn run(invocation: &Invocation, config: &FixtureConfig) -> Result<Outcome, FixtureError> {
    if !invocation.wants_file() {
        debug!("mode {:?} is not --file, nothing to do", invocation.mode);
        return Ok(Outcome::Clean);
    }

    let prefix = match read_prefix(invocation.path()) {
        Ok(prefix) => prefix,
        Err(e) if e.is_open_failure() => match config.on_open_failure {
            OpenFailurePolicy::Error => return Err(e),
            OpenFailurePolicy::Empty => {
                warn!("{}; continuing with an empty buffer", e);
                Prefix::empty()
            }
            OpenFailurePolicy::Fault => {
                warn!("{}; faulting as the unchecked handle would", e);
                return Ok(Outcome::NullWrite);
            }
        },
        Err(e) => return Err(e),
    };

    Ok(classify(&prefix))
}
