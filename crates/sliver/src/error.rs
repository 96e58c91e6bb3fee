//! View-specific error types.
//!
//! Two families: [`SliceError`] for the pure view operations (every
//! variant is an invalid argument, deterministic and caller-correctable),
//! and [`DumpError`] for the textual dump path, which adds the
//! element-width incompatibility case and carries the sink's I/O failure.
//!
//! There are no null-view or null-data variants: views and element
//! references hold real borrows, so those states are unrepresentable.

use std::error::Error;
use std::fmt;
use std::io;

/// Errors from the bounds-checked view operations.
///
/// All variants are precondition violations: the operation performed no
/// partial mutation and the view is unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SliceError {
    /// An element index at or past the end of the view.
    IndexOutOfBounds {
        /// The offending index.
        index: usize,
        /// The view's element count.
        len: usize,
    },
    /// A carve range whose begin or end exceeds the view's length.
    RangeOutOfBounds {
        /// Requested begin index (inclusive).
        begin: usize,
        /// Requested end index (exclusive).
        end: usize,
        /// The view's element count.
        len: usize,
    },
    /// A carve range with `begin > end`.
    InvertedRange {
        /// Requested begin index.
        begin: usize,
        /// Requested end index.
        end: usize,
    },
    /// A view constructed with a zero element width.
    ZeroElementSize,
    /// The backing region is too small for the requested element count.
    RegionTooSmall {
        /// Bytes the view would need (`len * elem_size`).
        needed: usize,
        /// Bytes the region actually provides.
        available: usize,
    },
    /// A write whose data would run past the view's byte span.
    ///
    /// Writes may straddle element boundaries within the view (the copy
    /// width is the data's, not the element's), but never escape it.
    DataOverrun {
        /// Element slot the write starts at.
        index: usize,
        /// Byte width of the supplied data.
        data_len: usize,
        /// Total byte span of the view.
        span: usize,
    },
}

impl fmt::Display for SliceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfBounds { index, len } => {
                write!(f, "index {index} out of bounds for view of length {len}")
            }
            Self::RangeOutOfBounds { begin, end, len } => {
                write!(
                    f,
                    "range {begin}..{end} out of bounds for view of length {len}"
                )
            }
            Self::InvertedRange { begin, end } => {
                write!(f, "inverted range: begin {begin} is greater than end {end}")
            }
            Self::ZeroElementSize => write!(f, "element size must be non-zero"),
            Self::RegionTooSmall { needed, available } => {
                write!(
                    f,
                    "backing region too small: need {needed} bytes, have {available}"
                )
            }
            Self::DataOverrun {
                index,
                data_len,
                span,
            } => {
                write!(
                    f,
                    "writing {data_len} bytes at element {index} would run past the view's {span}-byte span"
                )
            }
        }
    }
}

impl Error for SliceError {}

/// Errors from dumping a view to an output sink.
#[derive(Debug)]
pub enum DumpError {
    /// The view's element width cannot be reinterpreted as characters.
    ///
    /// Only byte-width views (`elem_size == 1`) can be dumped as text.
    /// Checked before any byte reaches the sink.
    IncompatibleElementSize {
        /// The view's element width.
        size: usize,
    },
    /// The sink reported an I/O failure.
    Io(io::Error),
}

impl fmt::Display for DumpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IncompatibleElementSize { size } => {
                write!(
                    f,
                    "cannot dump view with element size {size} as character data"
                )
            }
            Self::Io(err) => write!(f, "dump failed: {err}"),
        }
    }
}

impl Error for DumpError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::IncompatibleElementSize { .. } => None,
            Self::Io(err) => Some(err),
        }
    }
}

impl From<io::Error> for DumpError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}
