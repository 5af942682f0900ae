// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

//! Forward cursors over lane 0.
//!
//! Both types borrow the list, so it cannot change while one is live.

use std::iter::FusedIterator;

use crate::item::Item;
use crate::node::{Idx, NIL};
use crate::skiplist::SkipList;

/// Forward-only position in a [`SkipList`].
///
/// Once advanced past the last item the cursor stays invalid; only
/// [`seek`](Cursor::seek) can place it again. As an [`Iterator`] it yields
/// the current item and then advances.
pub struct Cursor<'a, T> {
    list: &'a SkipList<T>,
    current: Idx,
}

impl<'a, T> Cursor<'a, T> {
    pub(crate) fn new(list: &'a SkipList<T>, current: Idx) -> Self {
        Cursor { list, current }
    }

    /// True while the cursor is on an item.
    pub fn valid(&self) -> bool {
        self.current != NIL
    }

    /// Step to the next item. No-op once invalid.
    pub fn advance(&mut self) {
        if self.current != NIL {
            self.current = self.list.node(self.current).next(0);
        }
    }

    pub fn current(&self) -> Option<&'a T> {
        let list = self.list;
        match self.current {
            NIL => None,
            idx => Some(list.node(idx).item()),
        }
    }
}

impl<T: Item> Cursor<'_, T> {
    /// Move to the first item not less than `key`, regardless of the
    /// current position.
    pub fn seek(&mut self, key: &T) {
        self.current = self.list.lower_bound(key);
    }
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        Cursor {
            list: self.list,
            current: self.current,
        }
    }
}

impl<'a, T> Iterator for Cursor<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.current()?;
        self.advance();
        Some(item)
    }
}

impl<T> FusedIterator for Cursor<'_, T> {}

/// Items between two bounds, both inclusive. Built by
/// [`SkipList::range`].
///
/// Bounds are resolved once at construction: `start` is the first node in
/// the window and `stop` the first node past it (or `NIL`).
pub struct Range<'a, T> {
    list: &'a SkipList<T>,
    current: Idx,
    stop: Idx,
}

impl<'a, T> Range<'a, T> {
    pub(crate) fn new(list: &'a SkipList<T>, start: Idx, stop: Idx) -> Self {
        Range {
            list,
            current: start,
            stop,
        }
    }

    /// True once every item in the window has been visited.
    pub fn is_end(&self) -> bool {
        self.current == self.stop
    }

    pub fn advance(&mut self) {
        if !self.is_end() {
            self.current = self.list.node(self.current).next(0);
        }
    }

    pub fn current(&self) -> Option<&'a T> {
        if self.is_end() {
            return None;
        }
        let list = self.list;
        Some(list.node(self.current).item())
    }
}

impl<'a, T> Iterator for Range<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.current()?;
        self.advance();
        Some(item)
    }
}

impl<T> FusedIterator for Range<'_, T> {}
