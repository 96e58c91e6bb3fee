//! Parametric views for statically-known element types.
//!
//! When the element type is visible at the call site there is no reason
//! to thread a runtime byte width around: [`TypedSlice`] and
//! [`TypedSliceMut`] offer the same operation set as the erased views
//! with the width fixed at compile time, and writes that cannot straddle
//! element boundaries by construction. [`TypedSlice::erase`] and
//! [`TypedSliceMut::erase_mut`] cross into the erased representation at
//! the boundary where heterogeneous callers (or the dump path) take over.

use std::fmt;

use crate::error::SliceError;
use crate::view::SliceView;
use crate::view_mut::SliceViewMut;

mod sealed {
    pub trait Sealed {}
}

/// Element types that are plain bytes.
///
/// Sealed to the fixed-width primitives: every implementor has no
/// padding, no invalid bit patterns, and a non-zero size, which is what
/// makes the byte reinterpretation behind [`TypedSlice::erase`] sound.
pub trait Elem: Copy + sealed::Sealed {}

macro_rules! impl_elem {
    ($($t:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $t {}
            impl Elem for $t {}
        )*
    };
}

impl_elem!(u8, i8, u16, i16, u32, i32, u64, i64, usize, isize, f32, f64);

/// A bounded, read-only view over `&[T]` with the erased operation set.
pub struct TypedSlice<'a, T: Elem> {
    elems: &'a [T],
}

impl<T: Elem> Clone for TypedSlice<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Elem> Copy for TypedSlice<'_, T> {}

impl<'a, T: Elem> TypedSlice<'a, T> {
    /// Wrap an element slice.
    pub fn new(elems: &'a [T]) -> Self {
        Self { elems }
    }

    /// Number of elements in the view.
    pub fn len(&self) -> usize {
        self.elems.len()
    }

    /// Whether the view contains no elements.
    pub fn is_empty(&self) -> bool {
        self.elems.is_empty()
    }

    /// Carve the sub-view covering elements `[begin, end)`.
    pub fn slice(&self, begin: usize, end: usize) -> Result<TypedSlice<'a, T>, SliceError> {
        crate::view::check_range(begin, end, self.elems.len())?;
        Ok(Self {
            elems: &self.elems[begin..end],
        })
    }

    /// Reference to the element at `index`.
    pub fn get(&self, index: usize) -> Result<&'a T, SliceError> {
        self.elems.get(index).ok_or(SliceError::IndexOutOfBounds {
            index,
            len: self.elems.len(),
        })
    }

    /// The underlying element slice.
    pub fn as_elems(&self) -> &'a [T] {
        self.elems
    }

    /// Cross the type-erasure boundary.
    pub fn erase(self) -> SliceView<'a> {
        SliceView::of(self.elems)
    }
}

impl<T: Elem> fmt::Debug for TypedSlice<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypedSlice")
            .field("len", &self.elems.len())
            .finish()
    }
}

/// A bounded, mutable view over `&mut [T]` with the erased operation set.
pub struct TypedSliceMut<'a, T: Elem> {
    elems: &'a mut [T],
}

impl<'a, T: Elem> TypedSliceMut<'a, T> {
    /// Wrap a mutable element slice.
    pub fn new(elems: &'a mut [T]) -> Self {
        Self { elems }
    }

    /// Number of elements in the view.
    pub fn len(&self) -> usize {
        self.elems.len()
    }

    /// Whether the view contains no elements.
    pub fn is_empty(&self) -> bool {
        self.elems.is_empty()
    }

    /// Read-only reborrow of this view.
    pub fn as_slice(&self) -> TypedSlice<'_, T> {
        TypedSlice { elems: self.elems }
    }

    /// Carve a mutable sub-view covering elements `[begin, end)`.
    pub fn slice_mut(&mut self, begin: usize, end: usize) -> Result<TypedSliceMut<'_, T>, SliceError> {
        crate::view::check_range(begin, end, self.elems.len())?;
        Ok(TypedSliceMut {
            elems: &mut self.elems[begin..end],
        })
    }

    /// Reference to the element at `index`.
    pub fn get(&self, index: usize) -> Result<&T, SliceError> {
        self.elems.get(index).ok_or(SliceError::IndexOutOfBounds {
            index,
            len: self.elems.len(),
        })
    }

    /// Overwrite the element at `index`.
    ///
    /// Unlike the erased [`SliceViewMut::set`], the write is exactly one
    /// element wide and cannot drift.
    pub fn set(&mut self, index: usize, value: T) -> Result<(), SliceError> {
        let len = self.elems.len();
        *self
            .elems
            .get_mut(index)
            .ok_or(SliceError::IndexOutOfBounds { index, len })? = value;
        Ok(())
    }

    /// Write `value` into every element slot.
    pub fn fill(&mut self, value: T) {
        self.elems.fill(value);
    }

    /// Read-only view across the type-erasure boundary.
    pub fn erase(&self) -> SliceView<'_> {
        SliceView::of(self.elems)
    }

    /// Cross the type-erasure boundary, keeping write access.
    pub fn erase_mut(self) -> SliceViewMut<'a> {
        SliceViewMut::of(self.elems)
    }
}

impl<T: Elem> fmt::Debug for TypedSliceMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypedSliceMut")
            .field("len", &self.elems.len())
            .finish()
    }
}
