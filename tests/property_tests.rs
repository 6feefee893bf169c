//! Property-based tests using proptest.
//!
//! Only the first byte may decide the outcome, whatever follows it.

use file_null_pointer_deref::sample::{classify, read_prefix, Outcome, Prefix, BUFFER_SIZE};
use proptest::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Arbitrary file contents, including empty and longer-than-buffer inputs.
fn file_contents() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..64)
}

proptest! {
    #[test]
    fn prop_non_trigger_first_byte_is_clean(
        first in any::<u8>().prop_filter("must not be 'y'", |b| *b != b'y'),
        rest in file_contents(),
    ) {
        let mut data = vec![first];
        data.extend(rest);
        prop_assert_eq!(classify(&Prefix::from_bytes(&data)), Outcome::Clean);
    }

    #[test]
    fn prop_trigger_first_byte_faults(rest in file_contents()) {
        let mut data = vec![b'y'];
        data.extend(rest);
        prop_assert_eq!(classify(&Prefix::from_bytes(&data)), Outcome::NullWrite);
    }

    #[test]
    fn prop_read_prefix_is_bounded(data in file_contents()) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("input.bin");
        fs::write(&path, &data).unwrap();

        let prefix = read_prefix(&path).unwrap();
        prop_assert_eq!(prefix.len(), data.len().min(BUFFER_SIZE));
        prop_assert_eq!(prefix.first(), data.first().copied());
    }
}
