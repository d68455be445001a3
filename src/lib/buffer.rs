//! Growable typed buffers for results of unknown final size.
//!
//! A [`Buffer`] is an owned contiguous array with a logical length distinct from
//! its capacity. Capacity grows only through [`crate::growth::capacity_for`]
//! (doubling on exhaustion) and never shrinks: deletions and dedup compact in
//! place.
//!
//! Only the live elements `[0, len)` are ever observable. Conversions out of a
//! buffer ([`Buffer::as_slice`], [`Buffer::to_vec`], [`Buffer::into_vec`]) see
//! exactly the live elements and never the unused capacity tail.
//!
//! # Example
//!
//! ```
//! use fgranges_lib::buffer::IntBuffer;
//!
//! # fn main() -> fgranges_lib::errors::Result<()> {
//! let mut buf = IntBuffer::new(2, 0, 0)?;
//! buf.append(&[3, 1, 3, 2])?;
//! buf.insert_at(0, 2)?;
//! buf.qsort();
//! buf.delete_adjdups();
//! assert_eq!(buf.as_slice(), &[1, 2, 3]);
//! # Ok(())
//! # }
//! ```

use log::debug;

use fgranges_order::{Direction, get_order, get_order_two_key, sort_in_place};

use crate::dedup::compact_adjacent;
use crate::errors::{BufferError, Result, ensure_same_len};
use crate::growth::{capacity_for, ensure_order_base, needed_len};
use crate::shift::{Coordinate, shift_in_place, shifted, sum_and_shift_in_place};

/// Buffer of 32-bit integers (coordinates, widths, indices).
pub type IntBuffer = Buffer<i32>;

/// Buffer of single bytes.
pub type ByteBuffer = Buffer<u8>;

/// An owned, growable, contiguous array with explicit capacity bookkeeping.
#[derive(Debug)]
pub struct Buffer<T> {
    /// Live elements; `elts.len()` is the logical length.
    elts: Vec<T>,
    /// Capacity granted by the growth policy. Backing storage holds at least this many.
    capacity: usize,
}

impl<T> Buffer<T> {
    /// Create an empty buffer with room for `buflength` elements.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::Capacity`] if `buflength` is not addressable.
    pub fn with_capacity(buflength: usize) -> Result<Self> {
        let capacity = capacity_for::<T>(0, buflength)?;
        Ok(Self { elts: Vec::with_capacity(capacity), capacity })
    }

    /// Number of live elements.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.elts.len()
    }

    /// Whether the buffer has no live elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elts.is_empty()
    }

    /// Capacity granted by the growth policy.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The live elements.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.elts
    }

    /// The live elements, mutably. Length cannot change through this view.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.elts
    }

    /// Iterate over the live elements.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elts.iter()
    }

    /// Consume the buffer, returning its live elements.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.elts
    }

    /// Ensure capacity for at least `needed_length` elements.
    ///
    /// Grows per the doubling rule; a no-op if capacity already suffices.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::Capacity`] if the grown capacity is not addressable.
    pub fn reserve(&mut self, needed_length: usize) -> Result<()> {
        let capacity = capacity_for::<T>(self.capacity, needed_length)?;
        if capacity != self.capacity {
            debug!("Growing buffer capacity {} -> {capacity}", self.capacity);
            self.elts.reserve_exact(capacity - self.elts.len());
            self.capacity = capacity;
        }
        Ok(())
    }

    /// Drop every live element past `len`. Capacity is unchanged.
    ///
    /// A no-op if `len` is not less than the current length.
    pub fn truncate(&mut self, len: usize) {
        self.elts.truncate(len);
    }

    /// Remove the element at `at`, shifting the tail left by one.
    ///
    /// Capacity is unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::Index`] unless `at < len`.
    pub fn delete_at(&mut self, at: usize) -> Result<T> {
        if at >= self.len() {
            return Err(BufferError::index(at, self.len(), "delete_at"));
        }
        Ok(self.elts.remove(at))
    }
}

impl<T: Copy> Buffer<T> {
    /// Create a buffer with capacity `buflength` holding `nelt` copies of `val`.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::Index`] if `nelt > buflength`, or
    /// [`BufferError::Capacity`] if `buflength` is not addressable.
    pub fn new(buflength: usize, nelt: usize, val: T) -> Result<Self> {
        if nelt > buflength {
            return Err(BufferError::index(nelt, buflength, "new"));
        }
        let mut buf = Self::with_capacity(buflength)?;
        buf.elts.resize(nelt, val);
        Ok(buf)
    }

    /// Element at `i`, if live.
    #[inline]
    #[must_use]
    pub fn get(&self, i: usize) -> Option<T> {
        self.elts.get(i).copied()
    }

    /// Copy the live elements out.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.elts.clone()
    }

    /// Overwrite every live element with `val`.
    pub fn set_val(&mut self, val: T) {
        self.elts.fill(val);
    }

    /// Insert `val` at `at`, shifting `[at, len)` right by one.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::Index`] unless `at <= len`, or
    /// [`BufferError::Capacity`] if growth fails.
    pub fn insert_at(&mut self, at: usize, val: T) -> Result<()> {
        if at > self.len() {
            return Err(BufferError::index(at, self.len(), "insert_at"));
        }
        self.reserve(needed_len::<T>(self.len(), 1)?)?;
        self.elts.insert(at, val);
        Ok(())
    }

    /// Append a single value.
    pub fn push(&mut self, val: T) -> Result<()> {
        self.insert_at(self.len(), val)
    }

    /// Append `values` in order, growing capacity at most once.
    pub fn append(&mut self, values: &[T]) -> Result<()> {
        self.reserve(needed_len::<T>(self.len(), values.len())?)?;
        self.elts.extend_from_slice(values);
        Ok(())
    }

    /// Remove every element equal to its immediate predecessor.
    ///
    /// The buffer must already be sorted for the result to be duplicate-free;
    /// this is not checked. Capacity is unchanged.
    ///
    /// # Returns
    ///
    /// The number of elements removed.
    pub fn delete_adjdups(&mut self) -> usize
    where
        T: PartialEq,
    {
        let before = self.len();
        let kept = compact_adjacent(&mut self.elts);
        self.truncate(kept);
        before - kept
    }

    /// Sort the live elements ascending in place.
    ///
    /// Equal values have unspecified relative order.
    pub fn qsort(&mut self)
    where
        T: Ord,
    {
        sort_in_place(&mut self.elts, Direction::Ascending);
    }

    /// Stable order of the live elements (see [`fgranges_order::get_order`]).
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::Capacity`] if indices numbered from `base` would
    /// overflow `usize`.
    pub fn order(&self, direction: Direction, base: usize) -> Result<Vec<usize>>
    where
        T: Ord,
    {
        ensure_order_base(self.len(), base)?;
        Ok(get_order(&self.elts, direction, base))
    }

    /// Stable order of the live elements, breaking ties with the matching
    /// element of `y` and then the original index.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::InvariantViolation`] if `y` has a different length,
    /// or [`BufferError::Capacity`] if indices numbered from `base` would
    /// overflow `usize`.
    pub fn order_two_key<U: Copy + Ord>(
        &self,
        y: &Buffer<U>,
        direction: Direction,
        base: usize,
    ) -> Result<Vec<usize>>
    where
        T: Ord,
    {
        ensure_same_len("order_two_key keys", self.len(), y.len())?;
        ensure_order_base(self.len(), base)?;
        Ok(get_order_two_key(&self.elts, &y.elts, direction, base))
    }
}

impl<T: Coordinate> Buffer<T> {
    /// Add `delta` to every live element.
    pub fn shift(&mut self, delta: T) {
        shift_in_place(&mut self.elts, delta);
    }

    /// Append `v + shift` for every `v` in `values`, growing capacity at most once.
    ///
    /// Used to re-base coordinates from one frame into this buffer's frame.
    pub fn append_shifted_vals(&mut self, values: &[T], shift: T) -> Result<()> {
        self.reserve(needed_len::<T>(self.len(), values.len())?)?;
        self.elts.extend(shifted(values, shift));
        Ok(())
    }

    /// Set `self[i]` to `self[i] + other[i] + delta` for every live `i`.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::InvariantViolation`] if the lengths differ; `self` is
    /// left untouched.
    pub fn sum_and_shift(&mut self, other: &Self, delta: T) -> Result<()> {
        sum_and_shift_in_place(&mut self.elts, &other.elts, delta)
    }

    /// `a[i] + b[i] + delta` for every `i`, as a new buffer.
    pub fn summed_and_shifted(a: &Self, b: &Self, delta: T) -> Result<Self> {
        ensure_same_len("sum_and_shift", a.len(), b.len())?;
        let mut out = Self::from(a.as_slice());
        out.sum_and_shift(b, delta)?;
        Ok(out)
    }
}

impl<T> Default for Buffer<T> {
    fn default() -> Self {
        Self { elts: Vec::new(), capacity: 0 }
    }
}

impl<T: Copy> Clone for Buffer<T> {
    fn clone(&self) -> Self {
        let mut elts = Vec::with_capacity(self.capacity);
        elts.extend_from_slice(&self.elts);
        Self { elts, capacity: self.capacity }
    }
}

/// Buffers compare by live contents only; capacity is not part of equality.
impl<T: PartialEq> PartialEq for Buffer<T> {
    fn eq(&self, other: &Self) -> bool {
        self.elts == other.elts
    }
}

impl<T: Eq> Eq for Buffer<T> {}

impl<T: Copy> From<&[T]> for Buffer<T> {
    fn from(values: &[T]) -> Self {
        Self { elts: values.to_vec(), capacity: values.len() }
    }
}

impl<T> From<Vec<T>> for Buffer<T> {
    fn from(elts: Vec<T>) -> Self {
        let capacity = elts.capacity();
        Self { elts, capacity }
    }
}

impl<T> FromIterator<T> for Buffer<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<'a, T> IntoIterator for &'a Buffer<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elts.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_fills_values() {
        let buf = IntBuffer::new(10, 3, 7).unwrap();
        assert_eq!(buf.as_slice(), &[7, 7, 7]);
        assert_eq!(buf.capacity(), 10);
        assert_eq!(buf.len(), 3);
    }

    #[test]
    fn test_new_rejects_nelt_over_buflength() {
        let err = IntBuffer::new(2, 3, 0).unwrap_err();
        assert_eq!(err, BufferError::index(3, 2, "new"));
    }

    #[test]
    fn test_with_capacity_too_large() {
        let err = IntBuffer::with_capacity(usize::MAX).unwrap_err();
        assert!(matches!(err, BufferError::Capacity { .. }));
    }

    #[test]
    fn test_set_val() {
        let mut buf = IntBuffer::from(vec![1, 2, 3]);
        buf.set_val(-1);
        assert_eq!(buf.as_slice(), &[-1, -1, -1]);
    }

    #[test]
    fn test_insert_at() {
        let mut buf = IntBuffer::new(0, 0, 0).unwrap();
        buf.insert_at(0, 2).unwrap();
        buf.insert_at(0, 1).unwrap();
        buf.insert_at(2, 4).unwrap();
        buf.insert_at(2, 3).unwrap();
        assert_eq!(buf.as_slice(), &[1, 2, 3, 4]);
    }

    #[test]
    fn test_insert_at_out_of_bounds() {
        let mut buf = IntBuffer::from(vec![1, 2]);
        let err = buf.insert_at(3, 9).unwrap_err();
        assert_eq!(err, BufferError::index(3, 2, "insert_at"));
        assert_eq!(buf.as_slice(), &[1, 2]);
    }

    #[test]
    fn test_insert_doubles_capacity() {
        let mut buf = IntBuffer::new(4, 4, 0).unwrap();
        buf.insert_at(2, 1).unwrap();
        assert_eq!(buf.capacity(), 8);
        assert_eq!(buf.as_slice(), &[0, 0, 1, 0, 0]);
    }

    #[test]
    fn test_append_reads_back() {
        let mut buf = IntBuffer::from(vec![9, 8]);
        let values = [1, 2, 3, 4, 5];
        buf.append(&values).unwrap();
        assert_eq!(&buf.as_slice()[buf.len() - values.len()..], &values);
        assert_eq!(buf.len(), 7);
    }

    #[test]
    fn test_append_large_batch_grows_once() {
        let mut buf = IntBuffer::with_capacity(2).unwrap();
        buf.append(&[0; 100]).unwrap();
        assert_eq!(buf.capacity(), 100);
    }

    #[test]
    fn test_append_empty_is_noop() {
        let mut buf = IntBuffer::with_capacity(0).unwrap();
        buf.append(&[]).unwrap();
        assert!(buf.is_empty());
        assert_eq!(buf.capacity(), 0);
    }

    #[test]
    fn test_reallocations_are_logarithmic() {
        let mut buf = IntBuffer::with_capacity(1).unwrap();
        let mut reallocations = 0;
        let mut capacity = buf.capacity();
        for i in 0..100_000 {
            buf.append(&[i]).unwrap();
            if buf.capacity() != capacity {
                reallocations += 1;
                capacity = buf.capacity();
            }
        }
        assert_eq!(buf.len(), 100_000);
        // ceil(log2(100_000)) = 17
        assert!(reallocations <= 17, "got {reallocations} reallocations");
    }

    #[test]
    fn test_delete_at() {
        let mut buf = IntBuffer::from(vec![1, 2, 3, 4]);
        let capacity = buf.capacity();
        assert_eq!(buf.delete_at(1).unwrap(), 2);
        assert_eq!(buf.delete_at(2).unwrap(), 4);
        assert_eq!(buf.as_slice(), &[1, 3]);
        assert_eq!(buf.capacity(), capacity);
    }

    #[test]
    fn test_delete_at_out_of_bounds() {
        let mut buf = IntBuffer::from(vec![1]);
        assert_eq!(buf.delete_at(1).unwrap_err(), BufferError::index(1, 1, "delete_at"));
        let mut empty = IntBuffer::default();
        assert!(empty.delete_at(0).is_err());
    }

    #[test]
    fn test_shift_round_trip() {
        let mut buf = IntBuffer::from(vec![1, -5, 100]);
        buf.shift(42);
        assert_eq!(buf.as_slice(), &[43, 37, 142]);
        buf.shift(-42);
        assert_eq!(buf.as_slice(), &[1, -5, 100]);
    }

    #[test]
    fn test_append_shifted_vals() {
        // Group 2 starts at offset 1000 in the shared frame
        let mut buf = IntBuffer::from(vec![1, 50]);
        buf.append_shifted_vals(&[1, 10], 1000).unwrap();
        assert_eq!(buf.as_slice(), &[1, 50, 1001, 1010]);
    }

    #[test]
    fn test_sum_and_shift() {
        let mut starts = IntBuffer::from(vec![1, 10]);
        let widths = IntBuffer::from(vec![5, 3]);
        starts.sum_and_shift(&widths, -1).unwrap();
        assert_eq!(starts.as_slice(), &[5, 12]);
    }

    #[test]
    fn test_summed_and_shifted_leaves_operands() {
        let a = IntBuffer::from(vec![1, 2]);
        let b = IntBuffer::from(vec![10, 20]);
        let out = IntBuffer::summed_and_shifted(&a, &b, 100).unwrap();
        assert_eq!(out.as_slice(), &[111, 122]);
        assert_eq!(a.as_slice(), &[1, 2]);
    }

    #[test]
    fn test_sum_and_shift_length_mismatch() {
        let mut a = IntBuffer::from(vec![1, 2]);
        let b = IntBuffer::from(vec![1]);
        let err = a.sum_and_shift(&b, 0).unwrap_err();
        assert!(err.is_fatal());
        assert!(IntBuffer::summed_and_shifted(&a, &b, 0).is_err());
    }

    #[test]
    fn test_qsort_and_dedup() {
        let mut buf = IntBuffer::from(vec![3, 1, 2, 3, 1, 2, 2]);
        buf.qsort();
        assert_eq!(buf.as_slice(), &[1, 1, 2, 2, 2, 3, 3]);
        assert_eq!(buf.delete_adjdups(), 4);
        assert_eq!(buf.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn test_delete_adjdups_keeps_capacity() {
        let mut buf = IntBuffer::from(vec![1, 1, 2, 2, 2, 3]);
        let capacity = buf.capacity();
        buf.delete_adjdups();
        assert_eq!(buf.as_slice(), &[1, 2, 3]);
        assert_eq!(buf.len(), 3);
        assert_eq!(buf.capacity(), capacity);
    }

    #[test]
    fn test_order() {
        let buf = IntBuffer::from(vec![3, 1, 3, 2]);
        assert_eq!(buf.order(Direction::Ascending, 0).unwrap(), vec![1, 3, 0, 2]);
        assert_eq!(buf.order(Direction::Descending, 0).unwrap(), vec![0, 2, 3, 1]);
    }

    #[test]
    fn test_order_base_overflow() {
        let buf = IntBuffer::from(vec![1, 2]);
        let err = buf.order(Direction::Ascending, usize::MAX).unwrap_err();
        assert!(matches!(err, BufferError::Capacity { requested: 2, .. }));
        let highest = buf.order(Direction::Ascending, usize::MAX - 2).unwrap();
        assert_eq!(highest, vec![usize::MAX - 2, usize::MAX - 1]);
        assert!(IntBuffer::default().order(Direction::Ascending, usize::MAX).unwrap().is_empty());
    }

    #[test]
    fn test_order_two_key() {
        let x = IntBuffer::from(vec![5, 1, 5, 1]);
        let y = IntBuffer::from(vec![2, 3, 1, 3]);
        assert_eq!(x.order_two_key(&y, Direction::Ascending, 0).unwrap(), vec![1, 3, 2, 0]);
        assert_eq!(x.order_two_key(&y, Direction::Descending, 1).unwrap(), vec![1, 3, 2, 4]);
    }

    #[test]
    fn test_order_two_key_length_mismatch_is_fatal() {
        let x = IntBuffer::from(vec![1, 2]);
        let y = IntBuffer::from(vec![1]);
        let err = x.order_two_key(&y, Direction::Ascending, 0).unwrap_err();
        assert!(matches!(err, BufferError::InvariantViolation { .. }));
        assert!(err.is_fatal());
    }

    #[test]
    fn test_order_two_key_base_overflow() {
        let x = IntBuffer::from(vec![1, 2]);
        let err = x.order_two_key(&x, Direction::Ascending, usize::MAX).unwrap_err();
        assert!(matches!(err, BufferError::Capacity { .. }));
    }

    #[test]
    fn test_equality_ignores_capacity() {
        let a = IntBuffer::new(100, 2, 5).unwrap();
        let b = IntBuffer::from(vec![5, 5]);
        assert_eq!(a, b);
        assert_ne!(a.capacity(), b.capacity());
    }

    #[test]
    fn test_clone_is_independent() {
        let a = IntBuffer::from(vec![1, 2]);
        let mut b = a.clone();
        b.push(3).unwrap();
        assert_eq!(a.as_slice(), &[1, 2]);
        assert_eq!(b.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn test_conversions_see_live_elements_only() {
        let mut buf = IntBuffer::new(16, 0, 0).unwrap();
        buf.append(&[4, 5, 6]).unwrap();
        buf.delete_at(0).unwrap();
        assert_eq!(buf.to_vec(), vec![5, 6]);
        assert_eq!(buf.iter().count(), 2);
        assert_eq!(buf.get(1), Some(6));
        assert_eq!(buf.get(2), None);
        assert_eq!(buf.into_vec(), vec![5, 6]);
    }

    #[test]
    fn test_from_iterator() {
        let buf: IntBuffer = (1..=3).collect();
        assert_eq!(buf.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn test_as_mut_slice() {
        let mut buf = ByteBuffer::from(&b"abc"[..]);
        buf.as_mut_slice()[0] = b'x';
        assert_eq!(buf.as_slice(), b"xbc");
    }
}
