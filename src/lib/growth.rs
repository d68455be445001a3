//! Capacity growth rule shared by every buffer kind.
//!
//! Buffers double their capacity when exhausted, or grow straight to the needed
//! length when a single batch needs more than double. This keeps N sequential
//! appends at O(log N) reallocations.

use std::mem::size_of;

use crate::errors::{BufferError, Result};

/// Maximum number of `T` elements a buffer can address.
#[inline]
#[must_use]
pub const fn max_capacity<T>() -> usize {
    let size = size_of::<T>();
    if size == 0 { usize::MAX } else { isize::MAX as usize / size }
}

/// Capacity a buffer of `T` must have to hold `needed_length` elements.
///
/// Returns `current_capacity` unchanged if it already suffices, otherwise
/// `max(needed_length, 2 * current_capacity)`.
///
/// # Errors
///
/// Returns [`BufferError::Capacity`] if `needed_length` exceeds [`max_capacity`].
///
/// # Examples
///
/// ```
/// use fgranges_lib::growth::capacity_for;
///
/// assert_eq!(capacity_for::<i32>(8, 5).unwrap(), 8);
/// assert_eq!(capacity_for::<i32>(8, 9).unwrap(), 16);
/// assert_eq!(capacity_for::<i32>(8, 40).unwrap(), 40);
/// ```
pub fn capacity_for<T>(current_capacity: usize, needed_length: usize) -> Result<usize> {
    grow_capacity(current_capacity, needed_length, max_capacity::<T>())
}

/// [`capacity_for`] with an explicit element-count ceiling.
///
/// A doubled capacity that would pass `max` is clamped to `max`, as long as
/// `needed_length` itself fits.
pub fn grow_capacity(current_capacity: usize, needed_length: usize, max: usize) -> Result<usize> {
    if needed_length <= current_capacity {
        return Ok(current_capacity);
    }
    if needed_length > max {
        return Err(BufferError::Capacity { requested: needed_length, max });
    }
    let doubled = current_capacity.saturating_mul(2).min(max);
    Ok(needed_length.max(doubled))
}

/// Length after adding `additional` elements to `len`.
///
/// # Errors
///
/// Returns [`BufferError::Capacity`] if the sum is not representable.
#[inline]
pub(crate) fn needed_len<T>(len: usize, additional: usize) -> Result<usize> {
    len.checked_add(additional)
        .ok_or(BufferError::Capacity { requested: usize::MAX, max: max_capacity::<T>() })
}

/// Check that an `nelt`-element order numbered from `base` stays representable.
///
/// # Errors
///
/// Returns [`BufferError::Capacity`] if `base + nelt` overflows `usize`.
#[inline]
pub(crate) fn ensure_order_base(nelt: usize, base: usize) -> Result<()> {
    if fgranges_order::base_fits(nelt, base) {
        Ok(())
    } else {
        Err(BufferError::Capacity { requested: nelt, max: usize::MAX - base })
    }
}
