//! Coordinate shifting across independently numbered frames.
//!
//! Every operation here takes its offset explicitly. Concatenating ranges from
//! many groups into one buffer is then a sequence of independent calls that can
//! run in any order.
//!
//! Arithmetic wraps on overflow, so a shift by `k` followed by a shift by `-k`
//! always restores the original values.

use std::fmt::Debug;

use log::trace;

use crate::errors::{Result, ensure_same_len};

/// Element types that can be translated between coordinate frames.
pub trait Coordinate: Copy + Ord + Debug {
    /// The additive identity.
    const ZERO: Self;

    /// `self + delta`, wrapping on overflow.
    #[must_use]
    fn offset(self, delta: Self) -> Self;
}

macro_rules! impl_coordinate {
    ($($t:ty),*) => {
        $(
            impl Coordinate for $t {
                const ZERO: Self = 0;

                #[inline]
                fn offset(self, delta: Self) -> Self {
                    self.wrapping_add(delta)
                }
            }
        )*
    };
}

impl_coordinate!(i32, i64);

/// Add `delta` to every value in place.
pub fn shift_in_place<T: Coordinate>(values: &mut [T], delta: T) {
    if delta == T::ZERO {
        return;
    }
    trace!("Shifting {} values by {delta:?}", values.len());
    for value in values.iter_mut() {
        *value = value.offset(delta);
    }
}

/// Set `acc[i]` to `acc[i] + other[i] + delta` for every `i`.
///
/// # Errors
///
/// Returns [`crate::errors::BufferError::InvariantViolation`] if the slices differ
/// in length; `acc` is left untouched in that case.
pub fn sum_and_shift_in_place<T: Coordinate>(acc: &mut [T], other: &[T], delta: T) -> Result<()> {
    ensure_same_len("sum_and_shift", acc.len(), other.len())?;
    trace!("Summing {} value pairs with shift {delta:?}", acc.len());
    for (a, &b) in acc.iter_mut().zip(other) {
        *a = a.offset(b).offset(delta);
    }
    Ok(())
}

/// Iterate over `values` translated by `delta`.
pub fn shifted<T: Coordinate>(values: &[T], delta: T) -> impl Iterator<Item = T> + '_ {
    values.iter().map(move |&v| v.offset(delta))
}
