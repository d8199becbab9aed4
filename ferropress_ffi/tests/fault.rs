//! Panic-firewall containment, isolated in its own test binary because the
//! fault hook is process-global: nothing else may run concurrently in this
//! process while a fault is armed.

use ferropress_core::error;
use ferropress_ffi::{compress_native, decompress_native, native_ping};

/// A fault inside a codec surfaces as PANIC_CAUGHT, and the process keeps
/// serving calls afterwards as if nothing happened.
#[test]
fn contained_fault_leaves_the_boundary_alive() {
    let input = b"Hello world! ".repeat(100);
    let mut out = vec![0u8; 8192];
    let mut out_len: usize = 0;

    // Fault during compress.
    ferropress_codecs::fault::arm();
    let code = compress_native(
        1,
        -1,
        input.as_ptr(),
        input.len(),
        out.as_mut_ptr(),
        out.len(),
        &mut out_len,
    );
    assert_eq!(code, error::PANIC_CAUGHT);

    // Fault during decompress.
    ferropress_codecs::fault::arm();
    let code = decompress_native(
        1,
        input.as_ptr(),
        input.len(),
        out.as_mut_ptr(),
        out.len(),
        &mut out_len,
    );
    assert_eq!(code, error::PANIC_CAUGHT);

    // The boundary is still alive and fully functional.
    assert_eq!(native_ping(), 1);

    let code = compress_native(
        1,
        -1,
        input.as_ptr(),
        input.len(),
        out.as_mut_ptr(),
        out.len(),
        &mut out_len,
    );
    assert_eq!(code, error::SUCCESS);

    let mut decompressed = vec![0u8; input.len()];
    let mut restored: usize = 0;
    let code = decompress_native(
        1,
        out.as_ptr(),
        out_len,
        decompressed.as_mut_ptr(),
        decompressed.len(),
        &mut restored,
    );
    assert_eq!(code, error::SUCCESS);
    assert_eq!(decompressed, input);
}
