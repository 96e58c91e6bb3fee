//! Benchmark fixtures for the sliver view library.
//!
//! Provides deterministic backing regions at the sizes the benches
//! exercise, so criterion runs measure view arithmetic rather than
//! buffer construction.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

/// Build a deterministic byte region of `len` bytes.
///
/// The contents follow a fixed xorshift sequence so repeated runs
/// measure identical data.
pub fn make_region(len: usize) -> Vec<u8> {
    let mut state = 0x9E37_79B9u32;
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            state as u8
        })
        .collect()
}
