//! INTENTIONAL DEFECT: null-pointer write (CWE-476).
//!
//! This is the behavior under test. Detection tooling is expected to flag it,
//! so it must stay unguarded and must never be caught.

use crate::sample::Outcome;
use std::hint::black_box;
use tracing::debug;

/// Write through a null `*mut i32`.
///
/// The pointer goes through [`black_box`] and the store is volatile, so the
/// compiler can neither prove the address nor drop the write.
#[inline(never)]
pub fn null_pointer_write() -> ! {
    let null_pointer: *mut i32 = black_box(std::ptr::null_mut());
    // SAFETY: none. Writing to address zero is the injected fault.
    unsafe {
        null_pointer.write_volatile(0);
    }
    // Only reachable on a target that maps page zero.
    std::process::abort()
}

/// Perform the fault when the outcome calls for it.
pub fn inject(outcome: Outcome) {
    if outcome == Outcome::NullWrite {
        debug!("first byte matched, writing through null pointer");
        null_pointer_write();
    }
}

