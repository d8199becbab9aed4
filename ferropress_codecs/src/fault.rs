//! Armable fault hook for exercising the boundary's panic containment.
//!
//! Integration tests arm the hook, issue one dispatch call, and observe the
//! firewall translating the resulting unwind. The flag is process-global
//! and self-clearing: exactly one dispatch call trips per arm. Production
//! callers never arm it, leaving a single relaxed atomic load per call.

use std::sync::atomic::{AtomicBool, Ordering};

static ARMED: AtomicBool = AtomicBool::new(false);

/// Make the next compress/decompress dispatch panic.
#[doc(hidden)]
pub fn arm() {
    ARMED.store(true, Ordering::SeqCst);
}

pub(crate) fn trip() {
    if ARMED.swap(false, Ordering::SeqCst) {
        panic!("injected codec fault");
    }
}
