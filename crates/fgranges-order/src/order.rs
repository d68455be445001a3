//! Stable orderings over one or two key arrays.
//!
//! An *order* is a permutation of indices into a key array such that reading the
//! keys through it yields them sorted. Indices may be shifted by a caller-chosen
//! `base` (e.g. 1 for one-based consumers).
//!
//! # Tie-breaking
//!
//! Equal keys are always broken by the original index, smallest first, for both
//! [`Direction::Ascending`] and [`Direction::Descending`]. Reversing an ascending
//! order is therefore *not* the same as a descending order when keys repeat:
//!
//! ```
//! use fgranges_order::{Direction, get_order};
//!
//! let x = [3, 1, 3, 2];
//! assert_eq!(get_order(&x, Direction::Ascending, 0), vec![1, 3, 0, 2]);
//! assert_eq!(get_order(&x, Direction::Descending, 0), vec![0, 2, 3, 1]);
//! ```

use std::cmp::Ordering;

use crate::direction::Direction;

/// Compute the stable order of `x`.
///
/// # Panics
///
/// Panics if `base + x.len()` overflows (see [`base_fits`]).
///
/// # Arguments
/// * `x` - Key array
/// * `direction` - Direction of the key comparison
/// * `base` - Value added to every index in the returned order
///
/// # Returns
/// A permutation of `base..base + x.len()`.
#[must_use]
pub fn get_order<T: Ord>(x: &[T], direction: Direction, base: usize) -> Vec<usize> {
    let mut order = vec![0; x.len()];
    get_order_into(x, direction, &mut order, base);
    order
}

/// Compute the stable order of `x` into caller-provided storage.
///
/// # Panics
///
/// Panics if `out` and `x` differ in length, or if `base + x.len()` overflows.
pub fn get_order_into<T: Ord>(x: &[T], direction: Direction, out: &mut [usize], base: usize) {
    assert_eq!(out.len(), x.len(), "Order storage length must match key array length");
    fill_identity(out, base);
    out.sort_unstable_by(|&i1, &i2| {
        tie_break(direction.apply(x[i1 - base].cmp(&x[i2 - base])), i1, i2)
    });
}

/// Compute the stable order of `x`, using `y` to break ties in `x`.
///
/// Both keys are compared in `direction`; remaining ties fall back to the
/// original index, ascending.
///
/// # Panics
///
/// Panics if `x` and `y` differ in length, or if `base + x.len()` overflows.
#[must_use]
pub fn get_order_two_key<T: Ord, U: Ord>(
    x: &[T],
    y: &[U],
    direction: Direction,
    base: usize,
) -> Vec<usize> {
    let mut order = vec![0; x.len()];
    get_order_two_key_into(x, y, direction, &mut order, base);
    order
}

/// Two-key variant of [`get_order_into`].
///
/// # Panics
///
/// Panics if `x`, `y` and `out` are not all the same length, or if
/// `base + x.len()` overflows.
pub fn get_order_two_key_into<T: Ord, U: Ord>(
    x: &[T],
    y: &[U],
    direction: Direction,
    out: &mut [usize],
    base: usize,
) {
    assert_eq!(x.len(), y.len(), "Key arrays must have the same length");
    assert_eq!(out.len(), x.len(), "Order storage length must match key array length");
    fill_identity(out, base);
    out.sort_unstable_by(|&i1, &i2| {
        let (j1, j2) = (i1 - base, i2 - base);
        let keys = x[j1].cmp(&x[j2]).then_with(|| y[j1].cmp(&y[j2]));
        tie_break(direction.apply(keys), i1, i2)
    });
}

/// Sort `x` in place by value.
///
/// No index is tracked, so the relative order of equal values is unspecified.
pub fn sort_in_place<T: Ord>(x: &mut [T], direction: Direction) {
    match direction {
        Direction::Ascending => x.sort_unstable(),
        Direction::Descending => x.sort_unstable_by(|a, b| b.cmp(a)),
    }
}

/// Read `x` through `order`, producing the keys in sorted sequence.
///
/// # Panics
///
/// Panics if an entry of `order` minus `base` is out of bounds for `x`.
#[must_use]
pub fn permute<T: Clone>(x: &[T], order: &[usize], base: usize) -> Vec<T> {
    order.iter().map(|&i| x[i - base].clone()).collect()
}

/// Whether every index of an `nelt`-element order shifted by `base` is representable.
#[inline]
#[must_use]
pub const fn base_fits(nelt: usize, base: usize) -> bool {
    base.checked_add(nelt).is_some()
}

#[inline]
fn fill_identity(out: &mut [usize], base: usize) {
    assert!(base_fits(out.len(), base), "Order base {base} overflows for {} keys", out.len());
    for (i, slot) in out.iter_mut().enumerate() {
        *slot = base + i;
    }
}

/// Ultimate tie-break: smaller original index first, never reversed.
#[inline]
fn tie_break(keys: Ordering, i1: usize, i2: usize) -> Ordering {
    keys.then(i1.cmp(&i2))
}
