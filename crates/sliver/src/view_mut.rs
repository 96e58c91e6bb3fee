//! Mutable erased views: element writes and pattern fills.
//!
//! [`SliceViewMut`] holds the exclusive borrow of its region, which is
//! the whole of this crate's concurrency story: two writers over the
//! same bytes cannot coexist, and a writer cannot coexist with the
//! shared views handed out by [`SliceViewMut::as_view`].
//!
//! Write widths follow the supplied data, not the element width. A
//! caller passing data wider than one element deliberately spills into
//! the following slots; data narrower under-writes the slot. Both are
//! primitive behaviour, bounded only by the view's byte span.

use std::fmt;
use std::io::Write;
use std::mem::size_of;

use crate::element::{ElementMut, ElementRef};
use crate::error::{DumpError, SliceError};
use crate::raw;
use crate::typed::Elem;
use crate::view::{check_range, SliceView};

/// A bounded, mutable view over existing memory.
///
/// The write-capable counterpart of [`SliceView`]: same triple, same
/// bounds contract, plus [`set`](Self::set), [`fill`](Self::fill), and
/// mutable carves and borrows.
pub struct SliceViewMut<'a> {
    /// Exactly `len * elem_size` bytes.
    bytes: &'a mut [u8],
    /// Byte width of one logical element.
    elem_size: usize,
    /// Element count, not byte count.
    len: usize,
}

impl<'a> SliceViewMut<'a> {
    /// Pair a mutable memory region with an element width and count.
    ///
    /// # Errors
    ///
    /// As [`SliceView::new`]: [`SliceError::ZeroElementSize`] or
    /// [`SliceError::RegionTooSmall`].
    pub fn new(region: &'a mut [u8], elem_size: usize, len: usize) -> Result<Self, SliceError> {
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
            bytes: &mut region[..needed],
            elem_size,
            len,
        })
    }

    /// View a typed element slice mutably, erasing its type.
    pub fn of<T: Elem>(elems: &'a mut [T]) -> Self {
        let len = elems.len();
        Self {
            bytes: raw::bytes_of_mut(elems),
            elem_size: size_of::<T>(),
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
    pub fn as_bytes(&self) -> &[u8] {
        self.bytes
    }

    /// The view's full byte span, mutably.
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        self.bytes
    }

    /// Cheap read-only reborrow of this view.
    pub fn as_view(&self) -> SliceView<'_> {
        SliceView::from_parts(self.bytes, self.elem_size, self.len)
    }

    /// Carve a read-only sub-view covering elements `[begin, end)`.
    ///
    /// # Errors
    ///
    /// As [`SliceView::slice`].
    pub fn slice(&self, begin: usize, end: usize) -> Result<SliceView<'_>, SliceError> {
        self.as_view().slice(begin, end)
    }

    /// Carve a mutable sub-view covering elements `[begin, end)`.
    ///
    /// Same geometry as [`slice`](Self::slice); the sub-view borrows
    /// this one exclusively for its lifetime.
    ///
    /// # Errors
    ///
    /// As [`SliceView::slice`].
    pub fn slice_mut(&mut self, begin: usize, end: usize) -> Result<SliceViewMut<'_>, SliceError> {
        check_range(begin, end, self.len)?;
        Ok(SliceViewMut {
            bytes: &mut self.bytes[begin * self.elem_size..end * self.elem_size],
            elem_size: self.elem_size,
            len: end - begin,
        })
    }

    /// Borrow the element at `index` without copying its bytes.
    ///
    /// # Errors
    ///
    /// As [`SliceView::borrow`].
    pub fn borrow(&self, index: usize) -> Result<ElementRef<'_>, SliceError> {
        self.as_view().borrow(index)
    }

    /// Borrow the element at `index` mutably.
    ///
    /// The reference spans exactly one element slot; writes through it
    /// cannot drift. For deliberate straddling writes use
    /// [`set`](Self::set).
    ///
    /// # Errors
    ///
    /// [`SliceError::IndexOutOfBounds`] unless `index < len`.
    pub fn borrow_mut(&mut self, index: usize) -> Result<ElementMut<'_>, SliceError> {
        if index >= self.len {
            return Err(SliceError::IndexOutOfBounds {
                index,
                len: self.len,
            });
        }
        let start = index * self.elem_size;
        Ok(ElementMut::new(&mut self.bytes[start..start + self.elem_size]))
    }

    /// Overwrite bytes starting at element `index` with `data`.
    ///
    /// Copies exactly `data.len()` bytes from the slot's first byte.
    /// The copy width is the data's, not the element's: narrower data
    /// leaves the rest of the slot untouched, wider data spills into the
    /// following elements. The copy must stay inside the view's byte
    /// span; all checks run before any byte moves.
    ///
    /// # Errors
    ///
    /// [`SliceError::IndexOutOfBounds`] unless `index < len`;
    /// [`SliceError::DataOverrun`] if the copy would escape the view.
    pub fn set(&mut self, index: usize, data: &[u8]) -> Result<(), SliceError> {
        if index >= self.len {
            return Err(SliceError::IndexOutOfBounds {
                index,
                len: self.len,
            });
        }
        let start = index * self.elem_size;
        let end = start + data.len();
        if end > self.bytes.len() {
            return Err(SliceError::DataOverrun {
                index,
                data_len: data.len(),
                span: self.bytes.len(),
            });
        }
        self.bytes[start..end].copy_from_slice(data);
        Ok(())
    }

    /// Copy `data` into every element slot, back to back.
    ///
    /// Slot bases advance by `elem_size`; the copy width per slot is
    /// `data.len()`, so a pattern wider or narrower than one element
    /// drifts relative to element boundaries exactly as [`set`](Self::set)
    /// does, with later slots overwriting earlier spill. A no-op on an
    /// empty view. The span check runs before any byte moves.
    ///
    /// # Errors
    ///
    /// [`SliceError::DataOverrun`] if the last slot's copy would escape
    /// the view's byte span.
    pub fn fill(&mut self, data: &[u8]) -> Result<(), SliceError> {
        if self.len == 0 {
            return Ok(());
        }
        let last_start = (self.len - 1) * self.elem_size;
        if last_start + data.len() > self.bytes.len() {
            return Err(SliceError::DataOverrun {
                index: self.len - 1,
                data_len: data.len(),
                span: self.bytes.len(),
            });
        }
        for i in 0..self.len {
            let start = i * self.elem_size;
            self.bytes[start..start + data.len()].copy_from_slice(data);
        }
        Ok(())
    }

    /// Render the view's elements as characters to `sink`.
    ///
    /// # Errors
    ///
    /// As [`SliceView::write`].
    pub fn write<W: Write>(&self, sink: &mut W) -> Result<(), DumpError> {
        self.as_view().write(sink)
    }

    /// Render the view to standard output, propagating failures.
    ///
    /// # Errors
    ///
    /// As [`SliceView::print`].
    pub fn print(&self) -> Result<(), DumpError> {
        self.as_view().print()
    }
}

impl fmt::Debug for SliceViewMut<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SliceViewMut")
            .field("elem_size", &self.elem_size)
            .field("len", &self.len)
            .finish()
    }
}
