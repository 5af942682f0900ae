// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

//! Ordering contract for stored items.

/// A value that can be kept in a [`SkipList`](crate::SkipList).
///
/// The item is both the sort key and the payload. `less` must be a strict
/// weak ordering: irreflexive, transitive, and with incomparability
/// transitive too. Two items where neither is less than the other are
/// treated as the same entry, so inserting one replaces the other.
///
/// Every `Ord` type is an `Item` already. Implement it by hand only for
/// types that order on part of their contents and are not `Ord`.
pub trait Item {
    /// Returns true if `self` sorts strictly before `other`.
    fn less(&self, other: &Self) -> bool;
}

impl<T: Ord> Item for T {
    #[inline]
    fn less(&self, other: &Self) -> bool {
        self < other
    }
}

/// Neither item sorts before the other.
#[inline]
pub fn equivalent<T: Item + ?Sized>(a: &T, b: &T) -> bool {
    !a.less(b) && !b.less(a)
}
