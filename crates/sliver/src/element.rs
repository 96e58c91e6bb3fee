//! References to single elements within a view.
//!
//! An [`ElementRef`] is the unit of read access: one element's bytes,
//! borrowed from the view's backing region. Its length *is* the element
//! width, so there is no separate address/size pair to keep in sync. A
//! reference produced by a view operation therefore always matches that
//! view's declared element size, and cannot outlive the backing memory.

use std::fmt;

/// A shared reference to one element's bytes.
///
/// Produced by [`SliceView::borrow`](crate::SliceView::borrow). Purely a
/// window: holding one performs no copy and implies no ownership.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct ElementRef<'a> {
    bytes: &'a [u8],
}

impl<'a> ElementRef<'a> {
    pub(crate) fn new(bytes: &'a [u8]) -> Self {
        Self { bytes }
    }

    /// The element's bytes.
    pub fn bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// Byte width of the element.
    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    /// Address of the element's first byte.
    ///
    /// Useful for identity checks; the pointer is only valid for reads
    /// through this reference.
    pub fn as_ptr(&self) -> *const u8 {
        self.bytes.as_ptr()
    }
}

impl fmt::Debug for ElementRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ElementRef")
            .field("size", &self.size())
            .field("bytes", &self.bytes)
            .finish()
    }
}

/// An exclusive reference to one element's bytes.
///
/// Produced by [`SliceViewMut::borrow_mut`](crate::SliceViewMut::borrow_mut).
/// Writes through this reference are confined to the element's slot; for
/// copies that deliberately straddle slot boundaries, use
/// [`SliceViewMut::set`](crate::SliceViewMut::set).
pub struct ElementMut<'a> {
    bytes: &'a mut [u8],
}

impl<'a> ElementMut<'a> {
    pub(crate) fn new(bytes: &'a mut [u8]) -> Self {
        Self { bytes }
    }

    /// The element's bytes.
    pub fn bytes(&self) -> &[u8] {
        self.bytes
    }

    /// The element's bytes, mutably.
    pub fn bytes_mut(&mut self) -> &mut [u8] {
        self.bytes
    }

    /// Byte width of the element.
    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    /// Overwrite the whole element from `src`.
    ///
    /// # Panics
    ///
    /// Panics if `src.len()` differs from the element width.
    pub fn copy_from(&mut self, src: &[u8]) {
        self.bytes.copy_from_slice(src);
    }
}

impl fmt::Debug for ElementMut<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ElementMut")
            .field("size", &self.size())
            .field("bytes", &self.bytes)
            .finish()
    }
}
