//! Bounds-checked, type-erased views over contiguous fixed-size elements.
//!
//! A [`SliceView`] is a non-owning window onto memory somebody else
//! allocated: a byte region, an element width, and an element count. It
//! never grows, never frees, and checks every index before touching the
//! region. The mutable counterpart [`SliceViewMut`] adds element writes
//! and pattern fills on top of the same contract.
//!
//! # Architecture
//!
//! ```text
//! TypedSlice<T> / TypedSliceMut<T>   (element width known at compile time)
//! │   erase() / erase_mut()
//! ▼
//! SliceView / SliceViewMut           (width is a runtime byte count)
//! ├── slice()       carve a sub-view, address arithmetic only
//! ├── borrow()      ElementRef: one element's bytes, no copy
//! ├── set()/fill()  byte copies into element slots (mut only)
//! └── write()       dump byte-width views to an io::Write sink
//! ```
//!
//! The typed layer is the front door when the element type is statically
//! known; the erased layer is the boundary where heterogeneous callers
//! (and the textual dump path) meet. Crossing from typed to erased is
//! free and infallible; there is deliberately no way back.
//!
//! # Non-goals
//!
//! No allocation, no capacity management, no iteration protocol, no
//! synchronisation. A view is a pure function of (region, width, count);
//! callers own the memory and its lifetime, which the borrow checker
//! enforces rather than a comment.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod element;
pub mod error;
mod raw;
pub mod typed;
pub mod view;
pub mod view_mut;

// Public re-exports for the primary API surface.
pub use element::{ElementMut, ElementRef};
pub use error::{DumpError, SliceError};
pub use typed::{Elem, TypedSlice, TypedSliceMut};
pub use view::SliceView;
pub use view_mut::SliceViewMut;
