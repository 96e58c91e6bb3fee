//! Read-only erased views and the textual dump path.
//!
//! A [`SliceView`] is the crate's core triple — byte region, element
//! width, element count — normalised at construction so the region
//! covers exactly `len * elem_size` bytes. Everything downstream
//! (carving, element borrows, dumping) is index arithmetic over that
//! invariant plus a bounds check.

use std::fmt;
use std::io::{self, Write};
use std::mem::size_of;

use crate::element::ElementRef;
use crate::error::{DumpError, SliceError};
use crate::raw;
use crate::typed::Elem;

/// Validate a carve range against a view length.
///
/// Order matters for error reporting: out-of-bounds endpoints are
/// reported before inversion, matching the precedence of the
/// corresponding checks in [`SliceView::slice`]'s contract.
pub(crate) fn check_range(begin: usize, end: usize, len: usize) -> Result<(), SliceError> {
    if begin > len || end > len {
        return Err(SliceError::RangeOutOfBounds { begin, end, len });
    }
    if begin > end {
        return Err(SliceError::InvertedRange { begin, end });
    }
    Ok(())
}

/// A bounded, read-only view over existing memory.
///
/// Never owns its region: the `'a` borrow ties the view to storage
/// managed entirely by the caller. Copying a view is free and any number
/// of shared views may overlap the same bytes.
#[derive(Clone, Copy)]
pub struct SliceView<'a> {
    /// Exactly `len * elem_size` bytes.
    bytes: &'a [u8],
    /// Byte width of one logical element.
    elem_size: usize,
    /// Element count, not byte count.
    len: usize,
}

impl<'a> SliceView<'a> {
    /// Pair a memory region with an element width and count.
    ///
    /// The view covers the first `len * elem_size` bytes of `region`;
    /// trailing bytes are simply not part of the view.
    ///
    /// # Errors
    ///
    /// [`SliceError::ZeroElementSize`] if `elem_size` is zero, and
    /// [`SliceError::RegionTooSmall`] if the region cannot hold `len`
    /// elements (the required size is overflow-checked).
    pub fn new(region: &'a [u8], elem_size: usize, len: usize) -> Result<Self, SliceError> {
        if elem_size == 0 {
            return Err(SliceError::ZeroElementSize);
        }
        let needed = elem_size.checked_mul(len).unwrap_or(usize::MAX);
        if needed > region.len() {
            return Err(SliceError::RegionTooSmall {
                needed,
                available: region.len(),
            });
        }
        Ok(Self {
            bytes: &region[..needed],
            elem_size,
            len,
        })
    }

    /// View a typed element slice, erasing its type to a byte width.
    pub fn of<T: Elem>(elems: &'a [T]) -> Self {
        Self {
            bytes: raw::bytes_of(elems),
            elem_size: size_of::<T>(),
            len: elems.len(),
        }
    }

    /// Build a view whose invariant the caller has already established.
    pub(crate) fn from_parts(bytes: &'a [u8], elem_size: usize, len: usize) -> Self {
        debug_assert_eq!(bytes.len(), elem_size * len);
        Self {
            bytes,
            elem_size,
            len,
        }
    }

    /// Number of elements the view may address.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the view contains no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Byte width of one element.
    pub fn elem_size(&self) -> usize {
        self.elem_size
    }

    /// The view's full byte span.
    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// Carve the sub-view covering elements `[begin, end)`.
    ///
    /// Address arithmetic only — the result shares this view's backing
    /// memory, starts at `begin * elem_size` bytes past its base, and has
    /// length `end - begin`. `slice(k, k)` is valid for any `k <= len`
    /// and yields an empty view anchored at slot `k`.
    ///
    /// # Errors
    ///
    /// [`SliceError::RangeOutOfBounds`] if either endpoint exceeds the
    /// view's length; [`SliceError::InvertedRange`] if `begin > end`.
    pub fn slice(&self, begin: usize, end: usize) -> Result<SliceView<'a>, SliceError> {
        check_range(begin, end, self.len)?;
        Ok(Self {
            bytes: &self.bytes[begin * self.elem_size..end * self.elem_size],
            elem_size: self.elem_size,
            len: end - begin,
        })
    }

    /// Borrow the element at `index` without copying its bytes.
    ///
    /// The reference starts `index * elem_size` bytes past the view's
    /// base and is exactly one element wide. Pure: identical arguments
    /// yield identical references.
    ///
    /// # Errors
    ///
    /// [`SliceError::IndexOutOfBounds`] unless `index < len`. An
    /// element reference always carries real element bytes, so there is
    /// no one-past-the-end form.
    pub fn borrow(&self, index: usize) -> Result<ElementRef<'a>, SliceError> {
        if index >= self.len {
            return Err(SliceError::IndexOutOfBounds {
                index,
                len: self.len,
            });
        }
        let start = index * self.elem_size;
        Ok(ElementRef::new(&self.bytes[start..start + self.elem_size]))
    }

    /// Render the view's elements as characters to `sink`.
    ///
    /// Writes exactly `len` bytes with no trailing separator. Only
    /// byte-width views qualify; the width check happens before any
    /// byte reaches the sink.
    ///
    /// # Errors
    ///
    /// [`DumpError::IncompatibleElementSize`] if `elem_size != 1`;
    /// [`DumpError::Io`] if the sink fails.
    pub fn write<W: Write>(&self, sink: &mut W) -> Result<(), DumpError> {
        if self.elem_size != 1 {
            return Err(DumpError::IncompatibleElementSize {
                size: self.elem_size,
            });
        }
        sink.write_all(self.bytes)?;
        Ok(())
    }

    /// Render the view to standard output.
    ///
    /// Convenience wrapper over [`write`](Self::write); failures are
    /// propagated, never swallowed.
    pub fn print(&self) -> Result<(), DumpError> {
        let stdout = io::stdout();
        let mut sink = stdout.lock();
        self.write(&mut sink)
    }
}

impl fmt::Debug for SliceView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SliceView")
            .field("elem_size", &self.elem_size)
            .field("len", &self.len)
            .finish()
    }
}
