//! Signed-integer comparison interface.

use std::cmp::Ordering;

/// An object that can compare itself against a value of type `Rhs`.
///
/// The result is negative, zero or positive when `self` is less than,
/// equal to or greater than `other`. Only the sign is meaningful.
pub trait Comparable<Rhs: ?Sized = Self> {
    /// Compares `self` with `other`.
    fn compare_to(&self, other: &Rhs) -> i32;
}

impl<T: Ord> Comparable<T> for T {
    fn compare_to(&self, other: &T) -> i32 {
        ordering_to_int(self.cmp(other))
    }
}

/// Maps an [`Ordering`] to -1, 0 or 1.
#[must_use]
pub const fn ordering_to_int(ordering: Ordering) -> i32 {
    match ordering {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    }
}
