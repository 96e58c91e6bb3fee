//! Byte reinterpretation helpers for the typed layer.
//!
//! The only module permitted to contain `unsafe`: two casts from typed
//! element slices to their underlying bytes, each with a mandatory
//! `// SAFETY:` comment. Soundness rests on [`Elem`] being sealed to
//! primitives with no padding and no invalid bit patterns.

#![allow(unsafe_code)]

use std::mem::size_of;
use std::slice;

use crate::typed::Elem;

/// View a typed element slice as its raw bytes.
pub(crate) fn bytes_of<T: Elem>(elems: &[T]) -> &[u8] {
    // A slice never spans more than isize::MAX bytes, so this cannot
    // overflow.
    let len = elems.len() * size_of::<T>();
    // SAFETY: `Elem` is sealed to primitive types with no padding bytes,
    // so every byte of the slice is initialised. The pointer is valid
    // for `len` bytes, and the returned borrow inherits the input's
    // lifetime and aliasing rules.
    unsafe { slice::from_raw_parts(elems.as_ptr().cast::<u8>(), len) }
}

/// View a typed element slice as its raw bytes, mutably.
pub(crate) fn bytes_of_mut<T: Elem>(elems: &mut [T]) -> &mut [u8] {
    let len = elems.len() * size_of::<T>();
    // SAFETY: as in `bytes_of`; additionally, `Elem` types accept any
    // bit pattern, so arbitrary byte writes through the result cannot
    // construct an invalid `T`.
    unsafe { slice::from_raw_parts_mut(elems.as_mut_ptr().cast::<u8>(), len) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bytes_of_preserves_length_and_address() {
        let elems = [1u32, 2, 3];
        let bytes = bytes_of(&elems);
        assert_eq!(bytes.len(), 12);
        assert_eq!(bytes.as_ptr(), elems.as_ptr().cast::<u8>());
    }

    #[test]
    fn bytes_of_mut_roundtrips_writes() {
        let mut elems = [0u16; 2];
        bytes_of_mut(&mut elems).copy_from_slice(&0x0102_0304u32.to_ne_bytes());
        let bytes = bytes_of(&elems);
        assert_eq!(bytes, 0x0102_0304u32.to_ne_bytes());
    }
}
