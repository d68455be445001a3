//! Sort direction for the ordering primitives.

use std::cmp::Ordering;

/// Direction of the primary comparison in an ordering.
///
/// Only primary keys are affected by the direction. The final tie-break on the
/// original index is always ascending.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Smallest key first.
    #[default]
    Ascending,
    /// Largest key first.
    Descending,
}

impl Direction {
    /// Build a direction from a `desc` flag.
    #[inline]
    #[must_use]
    pub const fn from_desc(desc: bool) -> Self {
        if desc { Self::Descending } else { Self::Ascending }
    }

    /// True for [`Direction::Descending`].
    #[inline]
    #[must_use]
    pub const fn is_descending(self) -> bool {
        matches!(self, Self::Descending)
    }

    /// Orient a key comparison made in ascending terms.
    #[inline]
    #[must_use]
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

impl From<bool> for Direction {
    fn from(desc: bool) -> Self {
        Self::from_desc(desc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_desc() {
        assert_eq!(Direction::from_desc(false), Direction::Ascending);
        assert_eq!(Direction::from_desc(true), Direction::Descending);
        assert_eq!(Direction::from(true), Direction::Descending);
        assert_eq!(Direction::default(), Direction::Ascending);
    }

    #[test]
    fn test_apply() {
        assert_eq!(Direction::Ascending.apply(Ordering::Less), Ordering::Less);
        assert_eq!(Direction::Descending.apply(Ordering::Less), Ordering::Greater);
        assert_eq!(Direction::Descending.apply(Ordering::Equal), Ordering::Equal);
        assert!(Direction::Descending.is_descending());
        assert!(!Direction::Ascending.is_descending());
    }
}
