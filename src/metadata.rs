//! Corpus labels attached to this sample.
//!
//! The vulnerable-executables dataset indexes each sample by test suite, sample
//! name, and the CWE identifiers it exhibits. Tooling that runs the binary can
//! match a crash against these labels.

/// Labels describing one fixture in the corpus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixtureMetadata {
    /// Test suite the sample belongs to
    pub dataset: &'static str,
    /// Sample name inside the suite
    pub name: &'static str,
    /// CWE identifiers the sample exhibits
    pub cwes: &'static [u32],
    pub summary: &'static str,
}

/// CWE-476: NULL Pointer Dereference.
pub const CWE_NULL_POINTER_DEREFERENCE: u32 = 476;

pub const FIXTURE: FixtureMetadata = FixtureMetadata {
    dataset: "dummy_test_suite",
    name: "file_null_pointer_deref",
    cwes: &[CWE_NULL_POINTER_DEREFERENCE],
    summary: "null-pointer write when the first byte of the --file input is 'y'",
};

impl FixtureMetadata {
    /// Labels in `CWE-<id>` form.
    pub fn cwe_labels(&self) -> Vec<String> {
        self.cwes.iter().map(|id| format!("CWE-{}", id)).collect()
    }
}
