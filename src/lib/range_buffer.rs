//! Paired start/width buffers for building range lists.
//!
//! [`RangeBuffer`] keeps two integer buffers in lockstep. Every operation checks
//! that they are in sync before touching them and mutates both or neither.
//! Range-domain rules (non-negative widths, etc.) are left to the consumer that
//! turns the buffers into range objects.

use fgranges_order::{Direction, permute};

use crate::buffer::IntBuffer;
use crate::dedup::compact_adjacent_pairs;
use crate::errors::{BufferError, Result, ensure_same_len};
use crate::growth::needed_len;

/// Growable list of `(start, width)` ranges.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RangeBuffer {
    starts: IntBuffer,
    widths: IntBuffer,
}

impl RangeBuffer {
    /// Create `nelt` ranges with start and width 0, with room for `buflength`.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::Index`] if `nelt > buflength`, or
    /// [`BufferError::Capacity`] if `buflength` is not addressable.
    pub fn new(buflength: usize, nelt: usize) -> Result<Self> {
        let starts = IntBuffer::new(buflength, nelt, 0)?;
        let widths = IntBuffer::new(buflength, nelt, 0)?;
        Ok(Self { starts, widths })
    }

    /// Pair up existing start and width buffers.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::InvariantViolation`] if their lengths differ.
    pub fn from_parts(starts: IntBuffer, widths: IntBuffer) -> Result<Self> {
        ensure_same_len("RangeBuffer starts/widths", starts.len(), widths.len())?;
        Ok(Self { starts, widths })
    }

    /// Number of ranges.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.starts.len()
    }

    /// Whether there are no ranges.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.starts.is_empty()
    }

    /// Start coordinates.
    #[must_use]
    pub fn starts(&self) -> &IntBuffer {
        &self.starts
    }

    /// Widths.
    #[must_use]
    pub fn widths(&self) -> &IntBuffer {
        &self.widths
    }

    /// Range at `i` as `(start, width)`.
    #[must_use]
    pub fn get(&self, i: usize) -> Option<(i32, i32)> {
        Some((self.starts.get(i)?, self.widths.get(i)?))
    }

    /// Iterate over `(start, width)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.starts.iter().copied().zip(self.widths.iter().copied())
    }

    fn check_sync(&self) -> Result<()> {
        ensure_same_len("RangeBuffer starts/widths", self.starts.len(), self.widths.len())
    }

    /// Insert the range `(start, width)` at `at`.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::Index`] unless `at <= len`,
    /// [`BufferError::Capacity`] if growth fails, or
    /// [`BufferError::InvariantViolation`] if the buffers are out of sync.
    pub fn insert_at(&mut self, at: usize, start: i32, width: i32) -> Result<()> {
        self.check_sync()?;
        if at > self.len() {
            return Err(BufferError::index(at, self.len(), "insert_at"));
        }
        let needed = needed_len::<i32>(self.len(), 1)?;
        self.starts.reserve(needed)?;
        self.widths.reserve(needed)?;
        self.starts.insert_at(at, start)?;
        self.widths.insert_at(at, width)
    }

    /// Append the range `(start, width)`.
    pub fn push(&mut self, start: i32, width: i32) -> Result<()> {
        self.insert_at(self.len(), start, width)
    }

    /// Append ranges given as parallel slices.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::InvariantViolation`] if `starts` and `widths` differ
    /// in length, or [`BufferError::Capacity`] if growth fails.
    pub fn append(&mut self, starts: &[i32], widths: &[i32]) -> Result<()> {
        self.append_shifted(starts, widths, 0)
    }

    /// Append ranges with every start translated by `shift`; widths are unchanged.
    ///
    /// Used when concatenating ranges from groups numbered in their own local
    /// frames.
    pub fn append_shifted(&mut self, starts: &[i32], widths: &[i32], shift: i32) -> Result<()> {
        self.check_sync()?;
        ensure_same_len("appended starts/widths", starts.len(), widths.len())?;
        let needed = needed_len::<i32>(self.len(), starts.len())?;
        self.starts.reserve(needed)?;
        self.widths.reserve(needed)?;
        self.starts.append_shifted_vals(starts, shift)?;
        self.widths.append(widths)
    }

    /// Append every range of `other`, translated by `shift`.
    pub fn extend_shifted(&mut self, other: &Self, shift: i32) -> Result<()> {
        other.check_sync()?;
        self.append_shifted(other.starts.as_slice(), other.widths.as_slice(), shift)
    }

    /// Remove and return the range at `at`.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::Index`] unless `at < len`, or
    /// [`BufferError::InvariantViolation`] if the buffers are out of sync.
    pub fn delete_at(&mut self, at: usize) -> Result<(i32, i32)> {
        self.check_sync()?;
        if at >= self.len() {
            return Err(BufferError::index(at, self.len(), "delete_at"));
        }
        Ok((self.starts.delete_at(at)?, self.widths.delete_at(at)?))
    }

    /// Translate every start by `delta`.
    pub fn shift(&mut self, delta: i32) {
        self.starts.shift(delta);
    }

    /// End coordinates, `start + width - 1`.
    pub fn ends(&self) -> Result<IntBuffer> {
        IntBuffer::summed_and_shifted(&self.starts, &self.widths, -1)
    }

    /// Stable order of the ranges by start, then width, then original index.
    pub fn order(&self, direction: Direction, base: usize) -> Result<Vec<usize>> {
        self.check_sync()?;
        self.starts.order_two_key(&self.widths, direction, base)
    }

    /// Remove every range equal (same start and width) to its predecessor.
    ///
    /// The ranges must already be sorted (see [`RangeBuffer::order`]) for the
    /// result to be duplicate-free.
    ///
    /// # Returns
    ///
    /// The number of ranges removed.
    pub fn delete_adjdups(&mut self) -> Result<usize> {
        self.check_sync()?;
        let before = self.len();
        let kept = compact_adjacent_pairs(self.starts.as_mut_slice(), self.widths.as_mut_slice());
        self.starts.truncate(kept);
        self.widths.truncate(kept);
        Ok(before - kept)
    }

    /// Reorder the ranges in place by their stable ascending order.
    pub fn sort(&mut self) -> Result<()> {
        let order = self.order(Direction::Ascending, 0)?;
        let starts = permute(self.starts.as_slice(), &order, 0);
        let widths = permute(self.widths.as_slice(), &order, 0);
        self.starts.as_mut_slice().copy_from_slice(&starts);
        self.widths.as_mut_slice().copy_from_slice(&widths);
        Ok(())
    }

    /// Hand the start and width buffers to a range-object constructor.
    #[must_use]
    pub fn into_parts(self) -> (IntBuffer, IntBuffer) {
        (self.starts, self.widths)
    }
}
