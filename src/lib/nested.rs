//! Buffers of buffers, for per-group or per-sequence result lists.
//!
//! A [`NestedBuffer`] owns every inner [`Buffer`]: inserting copies the inner
//! contents, and [`NestedBuffer::eltwise_append`] merges pairwise in place. No two
//! nested buffers ever share inner storage.
//!
//! # Example
//!
//! ```
//! use fgranges_lib::nested::NestedIntBuffer;
//!
//! # fn main() -> fgranges_lib::errors::Result<()> {
//! let mut hits = NestedIntBuffer::from_lists(&[vec![1], vec![2, 3]]);
//! let more = NestedIntBuffer::from_lists(&[vec![4], vec![5]]);
//! hits.eltwise_append(&more)?;
//! assert_eq!(hits.to_vecs(), vec![vec![1, 4], vec![2, 3, 5]]);
//! # Ok(())
//! # }
//! ```

use std::fmt;

use log::debug;

use crate::buffer::Buffer;
use crate::errors::{BufferError, Result, ensure_same_len};
use crate::growth::{capacity_for, needed_len};
use crate::shift::Coordinate;

/// Nested buffer of integer buffers.
pub type NestedIntBuffer = NestedBuffer<i32>;

/// Nested buffer of byte buffers (e.g. a list of names).
pub type NestedByteBuffer = NestedBuffer<u8>;

/// How empty inner buffers are represented by [`NestedBuffer::to_list`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EmptyMode {
    /// Empty inner buffers become `Some(vec![])`.
    #[default]
    Empty,
    /// Empty inner buffers become `None`.
    Null,
}

/// A growable buffer whose elements are owned buffers.
#[derive(Debug)]
pub struct NestedBuffer<T> {
    elts: Vec<Buffer<T>>,
    capacity: usize,
}

impl<T> NestedBuffer<T> {
    /// Number of inner buffers.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.elts.len()
    }

    /// Whether there are no inner buffers.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elts.is_empty()
    }

    /// Outer capacity granted by the growth policy.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Inner buffer at `i`.
    #[must_use]
    pub fn get(&self, i: usize) -> Option<&Buffer<T>> {
        self.elts.get(i)
    }

    /// Inner buffer at `i`, mutably.
    pub fn get_mut(&mut self, i: usize) -> Option<&mut Buffer<T>> {
        self.elts.get_mut(i)
    }

    /// Iterate over the inner buffers.
    pub fn iter(&self) -> std::slice::Iter<'_, Buffer<T>> {
        self.elts.iter()
    }

    /// Live length of every inner buffer.
    #[must_use]
    pub fn inner_lengths(&self) -> Vec<usize> {
        self.elts.iter().map(Buffer::len).collect()
    }

    /// Total number of inner elements.
    #[must_use]
    pub fn total_len(&self) -> usize {
        self.elts.iter().map(Buffer::len).sum()
    }

    /// Remove and return the inner buffer at `at`.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::Index`] unless `at < len`.
    pub fn delete_at(&mut self, at: usize) -> Result<Buffer<T>> {
        if at >= self.len() {
            return Err(BufferError::index(at, self.len(), "delete_at"));
        }
        Ok(self.elts.remove(at))
    }

    fn reserve(&mut self, needed_length: usize) -> Result<()> {
        let capacity = capacity_for::<Buffer<T>>(self.capacity, needed_length)?;
        if capacity != self.capacity {
            debug!("Growing nested buffer capacity {} -> {capacity}", self.capacity);
            self.elts.reserve_exact(capacity - self.elts.len());
            self.capacity = capacity;
        }
        Ok(())
    }
}

impl<T: Copy> NestedBuffer<T> {
    /// Create `nelt` empty inner buffers with outer capacity `buflength`.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::Index`] if `nelt > buflength`, or
    /// [`BufferError::Capacity`] if `buflength` is not addressable.
    pub fn new(buflength: usize, nelt: usize) -> Result<Self> {
        if nelt > buflength {
            return Err(BufferError::index(nelt, buflength, "new"));
        }
        let capacity = capacity_for::<Buffer<T>>(0, buflength)?;
        let mut elts = Vec::with_capacity(capacity);
        elts.resize_with(nelt, Buffer::default);
        Ok(Self { elts, capacity })
    }

    /// Insert a copy of `inner`'s live contents at `at`.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::Index`] unless `at <= len`, or
    /// [`BufferError::Capacity`] if growth fails.
    pub fn insert_at(&mut self, at: usize, inner: &Buffer<T>) -> Result<()> {
        if at > self.len() {
            return Err(BufferError::index(at, self.len(), "insert_at"));
        }
        self.reserve(needed_len::<Buffer<T>>(self.len(), 1)?)?;
        self.elts.insert(at, Buffer::from(inner.as_slice()));
        Ok(())
    }

    /// Append a copy of `inner`'s live contents.
    pub fn push(&mut self, inner: &Buffer<T>) -> Result<()> {
        self.insert_at(self.len(), inner)
    }

    /// Append the contents of `other[i]` onto `self[i]` for every `i`.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::InvariantViolation`] if the outer lengths differ, or
    /// [`BufferError::Capacity`] if an inner buffer cannot grow. Nothing is
    /// appended unless every inner buffer can hold its merged contents.
    pub fn eltwise_append(&mut self, other: &Self) -> Result<()> {
        ensure_same_len("eltwise_append", self.len(), other.len())?;
        for (dst, src) in self.elts.iter_mut().zip(&other.elts) {
            dst.reserve(needed_len::<T>(dst.len(), src.len())?)?;
        }
        for (dst, src) in self.elts.iter_mut().zip(&other.elts) {
            dst.append(src.as_slice())?;
        }
        Ok(())
    }

    /// Copy out every inner buffer, representing empty ones per `mode`.
    #[must_use]
    pub fn to_list(&self, mode: EmptyMode) -> Vec<Option<Vec<T>>> {
        self.elts
            .iter()
            .map(|inner| match mode {
                EmptyMode::Null if inner.is_empty() => None,
                _ => Some(inner.to_vec()),
            })
            .collect()
    }

    /// Copy out every inner buffer.
    #[must_use]
    pub fn to_vecs(&self) -> Vec<Vec<T>> {
        self.elts.iter().map(Buffer::to_vec).collect()
    }

    /// Non-empty inner buffers keyed by their position plus `keyshift`.
    ///
    /// Keys are zero-padded to ten characters so that they sort lexically in
    /// numeric order (e.g. `0000000001`).
    #[must_use]
    pub fn to_named(&self, keyshift: i32) -> Vec<(String, Vec<T>)> {
        self.elts
            .iter()
            .enumerate()
            .filter(|(_, inner)| !inner.is_empty())
            .map(|(i, inner)| (format_key(i, keyshift), inner.to_vec()))
            .collect()
    }

    /// Build a nested buffer by copying an external list.
    #[must_use]
    pub fn from_lists(lists: &[Vec<T>]) -> Self {
        let elts: Vec<Buffer<T>> = lists.iter().map(|list| Buffer::from(list.as_slice())).collect();
        let capacity = elts.len();
        Self { elts, capacity }
    }
}

impl<T: Coordinate> NestedBuffer<T> {
    /// Add `delta` to every element of every inner buffer.
    pub fn shift(&mut self, delta: T) {
        for inner in &mut self.elts {
            inner.shift(delta);
        }
    }

    /// Apply [`Buffer::sum_and_shift`] to every pair of inner buffers.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::InvariantViolation`] if the outer lengths or any pair
    /// of inner lengths differ; nothing is modified in that case.
    pub fn sum_and_shift(&mut self, other: &Self, delta: T) -> Result<()> {
        ensure_same_len("sum_and_shift", self.len(), other.len())?;
        for (i, (a, b)) in self.elts.iter().zip(&other.elts).enumerate() {
            ensure_same_len(&format!("sum_and_shift inner buffer {i}"), a.len(), b.len())?;
        }
        for (a, b) in self.elts.iter_mut().zip(&other.elts) {
            a.sum_and_shift(b, delta)?;
        }
        Ok(())
    }
}

fn format_key(i: usize, keyshift: i32) -> String {
    let key = i as i64 + i64::from(keyshift);
    format!("{key:010}")
}

impl<T> Default for NestedBuffer<T> {
    fn default() -> Self {
        Self { elts: Vec::new(), capacity: 0 }
    }
}

impl<T: Copy> Clone for NestedBuffer<T> {
    fn clone(&self) -> Self {
        let mut elts = Vec::with_capacity(self.capacity);
        elts.extend(self.elts.iter().cloned());
        Self { elts, capacity: self.capacity }
    }
}

impl<T: PartialEq> PartialEq for NestedBuffer<T> {
    fn eq(&self, other: &Self) -> bool {
        self.elts == other.elts
    }
}

impl<T: Eq> Eq for NestedBuffer<T> {}

// ============================================================================
// Kind-tagged nested buffers
// ============================================================================

/// Element kind of a buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// 32-bit integers.
    Int,
    /// Single bytes.
    Byte,
}

impl ElementKind {
    /// Lowercase name of the kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Int => "int",
            Self::Byte => "byte",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A nested buffer whose element kind is only known at runtime.
///
/// Used where results of different kinds travel through the same code path.
/// Operations that combine two buffers require matching kinds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AnyNestedBuffer {
    /// Nested integer buffer.
    Int(NestedIntBuffer),
    /// Nested byte buffer.
    Byte(NestedByteBuffer),
}

impl AnyNestedBuffer {
    /// Element kind of the inner buffers.
    #[must_use]
    pub fn kind(&self) -> ElementKind {
        match self {
            Self::Int(_) => ElementKind::Int,
            Self::Byte(_) => ElementKind::Byte,
        }
    }

    /// Number of inner buffers.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Int(buf) => buf.len(),
            Self::Byte(buf) => buf.len(),
        }
    }

    /// Whether there are no inner buffers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// [`NestedBuffer::eltwise_append`] across buffers of the same kind.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::TypeMismatch`] if the kinds differ.
    pub fn eltwise_append(&mut self, other: &Self) -> Result<()> {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => a.eltwise_append(b),
            (Self::Byte(a), Self::Byte(b)) => a.eltwise_append(b),
            (this, other) => Err(mismatch(this.kind(), other.kind())),
        }
    }

    /// [`NestedBuffer::shift`], defined for integer contents only.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::TypeMismatch`] for byte contents.
    pub fn shift(&mut self, delta: i32) -> Result<()> {
        match self {
            Self::Int(buf) => {
                buf.shift(delta);
                Ok(())
            }
            Self::Byte(_) => Err(mismatch(ElementKind::Int, ElementKind::Byte)),
        }
    }

    /// [`NestedBuffer::sum_and_shift`], defined for integer contents only.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::TypeMismatch`] unless both buffers hold integers.
    pub fn sum_and_shift(&mut self, other: &Self, delta: i32) -> Result<()> {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => a.sum_and_shift(b, delta),
            _ => Err(mismatch(ElementKind::Int, ElementKind::Byte)),
        }
    }
}

impl From<NestedIntBuffer> for AnyNestedBuffer {
    fn from(buf: NestedIntBuffer) -> Self {
        Self::Int(buf)
    }
}

impl From<NestedByteBuffer> for AnyNestedBuffer {
    fn from(buf: NestedByteBuffer) -> Self {
        Self::Byte(buf)
    }
}

fn mismatch(expected: ElementKind, found: ElementKind) -> BufferError {
    BufferError::TypeMismatch { expected: expected.as_str(), found: found.as_str() }
}
