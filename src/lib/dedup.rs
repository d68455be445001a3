//! Adjacent-duplicate compaction.
//!
//! The input must already be sorted for the result to be free of duplicates.
//! Sortedness is not checked: on unsorted input only adjacent runs collapse.

/// Compact `values` so that no element equals its predecessor.
///
/// Kept elements are moved to the front in their original order. The tail past
/// the returned length holds leftover values and should be discarded.
///
/// # Returns
///
/// The number of elements kept.
///
/// # Examples
///
/// ```
/// use fgranges_lib::dedup::compact_adjacent;
///
/// let mut values = [1, 1, 2, 2, 2, 3];
/// let kept = compact_adjacent(&mut values);
/// assert_eq!(&values[..kept], &[1, 2, 3]);
/// ```
pub fn compact_adjacent<T: PartialEq + Copy>(values: &mut [T]) -> usize {
    if values.is_empty() {
        return 0;
    }
    let mut kept = 1;
    for read in 1..values.len() {
        if values[read] != values[kept - 1] {
            values[kept] = values[read];
            kept += 1;
        }
    }
    kept
}

/// Compact two parallel slices in lockstep, treating `(a[i], b[i])` as one element.
///
/// # Panics
///
/// Panics if the slices differ in length.
pub fn compact_adjacent_pairs<T, U>(a: &mut [T], b: &mut [U]) -> usize
where
    T: PartialEq + Copy,
    U: PartialEq + Copy,
{
    assert_eq!(a.len(), b.len(), "Paired slices must have the same length");
    if a.is_empty() {
        return 0;
    }
    let mut kept = 1;
    for read in 1..a.len() {
        if a[read] != a[kept - 1] || b[read] != b[kept - 1] {
            a[kept] = a[read];
            b[kept] = b[read];
            kept += 1;
        }
    }
    kept
}
