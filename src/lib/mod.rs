#![deny(unsafe_code)]
// Clippy lint configuration for CI
// These lints are allowed because:
// - cast_*: Coordinate code intentionally casts between index and value types
// - module_name_repetitions: Buffer types are named after their module
#![allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

//! # fgranges - growable buffers and stable ordering for range arithmetic
//!
//! This library is the data-structure layer underneath interval/range
//! operations: it accumulates results of unknown final size and provides the
//! reproducible orderings that sorting, grouping and dedup are built on.
//!
//! ## Overview
//!
//! ### Buffers
//!
//! - **[`buffer`]** - Growable typed buffers ([`IntBuffer`], [`ByteBuffer`])
//! - **[`range_buffer`]** - Paired start/width buffers kept in lockstep
//! - **[`nested`]** - Buffers of owned buffers for per-group results
//! - **[`bytes`]** - String helpers for byte buffers
//!
//! ### Algorithms
//!
//! - **[`order`]** - Stable single- and two-key orderings (re-export of `fgranges_order`)
//! - **[`dedup`]** - Adjacent-duplicate compaction of sorted data
//! - **[`shift`]** - Coordinate translation between frames
//! - **[`growth`]** - Capacity doubling rule shared by every buffer
//!
//! ### Utilities
//!
//! - **[`errors`]** - Error type and `Result` alias
//! - **[`logging`]** - Formatting helpers for log output
//!
//! ## Quick Start
//!
//! ### Concatenating per-group ranges
//!
//! ```
//! use fgranges_lib::range_buffer::RangeBuffer;
//!
//! # fn main() -> fgranges_lib::errors::Result<()> {
//! let mut all = RangeBuffer::default();
//! // Group 1 occupies [1, 1000], group 2 starts at 1001 in the shared frame
//! all.append_shifted(&[1, 20], &[5, 5], 0)?;
//! all.append_shifted(&[3], &[2], 1000)?;
//! assert_eq!(all.starts().as_slice(), &[1, 20, 1003]);
//! assert_eq!(all.ends()?.as_slice(), &[5, 24, 1004]);
//! # Ok(())
//! # }
//! ```
//!
//! ### Stable ordering
//!
//! ```
//! use fgranges_lib::order::{Direction, get_order};
//!
//! let x = [3, 1, 3, 2];
//! assert_eq!(get_order(&x, Direction::Ascending, 0), vec![1, 3, 0, 2]);
//! // Ties keep ascending index order even when descending
//! assert_eq!(get_order(&x, Direction::Descending, 0), vec![0, 2, 3, 1]);
//! ```

pub mod buffer;
pub mod bytes;
pub mod dedup;
pub mod errors;
pub mod growth;
pub mod logging;
pub mod nested;
pub mod range_buffer;
pub mod shift;

pub use fgranges_order as order;

// Re-export commonly used types at the crate root
pub use buffer::{Buffer, ByteBuffer, IntBuffer};
pub use errors::{BufferError, Result};
pub use nested::{AnyNestedBuffer, ElementKind, EmptyMode, NestedBuffer, NestedByteBuffer, NestedIntBuffer};
pub use order::Direction;
pub use range_buffer::RangeBuffer;
