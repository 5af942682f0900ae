// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

//! Skip list core.
//!
//! A classic Pugh skip list holding one item per node. Every operation
//! starts with the same top-down descent: at each lane, walk forward while
//! the next item sorts before the key, then drop a lane. The node reached
//! at each lane is that lane's predecessor; insert and delete splice
//! through those predecessors.
//!
//! ```text
//! lane 2: HEAD -----------------> 20 ------------------------> NIL
//! lane 1: HEAD --------> 10 ----> 20 --------> 40 -----------> NIL
//! lane 0: HEAD -> 5 ---> 10 ----> 20 -> 30 --> 40 -> 50 -----> NIL
//! ```
//!
//! # Invariants
//!
//! - Lane 0 holds every item, strictly ascending.
//! - Lane `i` is a subsequence of lane `i - 1`.
//! - For every lane below `level` at least one node exists (lane 0 may
//!   be empty only when the list is). Header lanes at or above `level`
//!   are `NIL`.
//! - Pooled and vacant nodes are unreachable from the header.

use std::fmt;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use smallvec::{SmallVec, smallvec};

use crate::cursor::{Cursor, Range};
use crate::error::Error;
use crate::free_list::FreeList;
use crate::item::{Item, equivalent};
use crate::node::{HEAD, Idx, NIL, Node};
use crate::options::Options;

/// Highest supported lane count. `4^32` is far beyond any in-memory list.
pub const DEFAULT_MAX_LEVEL: usize = 32;

/// Probability that a node reaching lane `i` also reaches lane `i + 1`.
pub const P: f64 = 0.25;

/// Lists longer than this skip the per-mutation debug walk.
#[cfg(debug_assertions)]
const DEBUG_CHECK_LIMIT: usize = 512;

/// Per-lane predecessors recorded during a descent.
type Path = SmallVec<[Idx; DEFAULT_MAX_LEVEL]>;

/// An ordered set backed by a skip list.
///
/// ```
/// use lanes::SkipList;
///
/// let mut list = SkipList::new();
/// for i in 0..10 {
///     list.insert(i);
/// }
/// assert_eq!(list.get(&3), Some(&3));
/// assert!(list.delete(&4));
/// assert_eq!(list.range(&2, &5).copied().collect::<Vec<_>>(), vec![2, 3, 5]);
/// ```
pub struct SkipList<T> {
    /// Arena of nodes. Slot 0 is the header.
    nodes: Vec<Node<T>>,
    /// Lanes currently in use, `1..=max_level`.
    level: usize,
    max_level: usize,
    len: usize,
    free_list: FreeList,
    rng: SmallRng,
}

impl<T> SkipList<T> {
    pub fn new() -> Self {
        Self::with_options(Options::default())
    }

    /// # Panics
    ///
    /// If `max_level` is outside `1..=DEFAULT_MAX_LEVEL`.
    pub fn with_max_level(max_level: usize) -> Self {
        Self::with_options(Options::default().with_max_level(max_level))
    }

    /// # Panics
    ///
    /// If the options fail [`Options::validate`].
    pub fn with_options(options: Options) -> Self {
        match Self::try_with_options(options) {
            Ok(list) => list,
            Err(err) => panic!("{}", err),
        }
    }

    pub fn try_with_options(options: Options) -> Result<Self, Error> {
        options.validate()?;
        let rng = match options.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        Ok(SkipList {
            nodes: vec![Node::new(options.max_level)],
            level: 1,
            max_level: options.max_level,
            len: 0,
            free_list: FreeList::new(options.free_list_capacity),
            rng,
        })
    }

    /// Number of items stored.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Lanes currently in use.
    pub fn level(&self) -> usize {
        self.level
    }

    pub fn max_level(&self) -> usize {
        self.max_level
    }

    /// Released nodes waiting in the free list.
    pub fn pooled_nodes(&self) -> usize {
        self.free_list.pooled()
    }

    pub fn free_list_capacity(&self) -> usize {
        self.free_list.capacity()
    }

    /// Remove every item. Node storage is released, not pooled.
    pub fn clear(&mut self) {
        self.nodes.truncate(1);
        self.nodes[HEAD as usize].forward.fill(NIL);
        self.free_list.reset();
        self.level = 1;
        self.len = 0;
        #[cfg(feature = "tracing")]
        tracing::debug!("skip list cleared");
    }

    /// Smallest item.
    pub fn first(&self) -> Option<&T> {
        match self.node(HEAD).next(0) {
            NIL => None,
            idx => Some(self.node(idx).item()),
        }
    }

    /// Largest item, found by running each lane to its end.
    pub fn last(&self) -> Option<&T> {
        let mut x = HEAD;
        for lane in (0..self.level).rev() {
            loop {
                let next = self.node(x).next(lane);
                if next == NIL {
                    break;
                }
                x = next;
            }
        }
        if x == HEAD {
            return None;
        }
        Some(self.node(x).item())
    }

    /// Cursor at the smallest item, invalid if the list is empty.
    pub fn cursor(&self) -> Cursor<'_, T> {
        Cursor::new(self, self.node(HEAD).next(0))
    }

    /// Iterate over all items in ascending order.
    pub fn iter(&self) -> Cursor<'_, T> {
        self.cursor()
    }

    // --- Node access helpers ---

    #[inline]
    pub(crate) fn node(&self, idx: Idx) -> &Node<T> {
        &self.nodes[idx as usize]
    }

    #[inline]
    fn node_mut(&mut self, idx: Idx) -> &mut Node<T> {
        &mut self.nodes[idx as usize]
    }

    fn random_level(&mut self) -> usize {
        let mut level = 1;
        while level < self.max_level && self.rng.gen_bool(P) {
            level += 1;
        }
        level
    }
}

impl<T: Item> SkipList<T> {
    /// Top-down descent. Returns the last lane-0 node whose item sorts
    /// before `key` (possibly the header) and, if asked, records each
    /// lane's predecessor in `path`.
    fn descend(&self, key: &T, mut path: Option<&mut Path>) -> Idx {
        let mut x = HEAD;
        for lane in (0..self.level).rev() {
            loop {
                let next = self.node(x).next(lane);
                if next == NIL || !self.node(next).item().less(key) {
                    break;
                }
                x = next;
            }
            if let Some(path) = path.as_deref_mut() {
                path[lane] = x;
            }
        }
        x
    }

    /// First node whose item does not sort before `key`, or `NIL`.
    pub(crate) fn lower_bound(&self, key: &T) -> Idx {
        let x = self.descend(key, None);
        self.node(x).next(0)
    }

    /// Node holding an item equivalent to `key`, or `NIL`.
    fn find(&self, key: &T) -> Idx {
        let idx = self.lower_bound(key);
        if idx != NIL && !key.less(self.node(idx).item()) {
            return idx;
        }
        NIL
    }

    /// The stored item equivalent to `key`.
    pub fn get(&self, key: &T) -> Option<&T> {
        match self.find(key) {
            NIL => None,
            idx => Some(self.node(idx).item()),
        }
    }

    pub fn contains(&self, key: &T) -> bool {
        self.find(key) != NIL
    }

    /// Insert `item`. If an equivalent item is already stored it is
    /// replaced in place and returned; the length does not change.
    pub fn insert(&mut self, item: T) -> Option<T> {
        let mut path: Path = smallvec![HEAD; self.max_level];
        let x = self.descend(&item, Some(&mut path));

        let next = self.node(x).next(0);
        if next != NIL && !item.less(self.node(next).item()) {
            return self.node_mut(next).item.replace(item);
        }

        let level = self.random_level();
        if level > self.level {
            // Lanes above the old level already have HEAD in `path`.
            #[cfg(feature = "tracing")]
            tracing::debug!(from = self.level, to = level, "skip list level raised");
            self.level = level;
        }

        let idx = self.free_list.acquire(&mut self.nodes, level);
        self.node_mut(idx).item = Some(item);
        for lane in 0..level {
            let pred = path[lane];
            let succ = self.node(pred).next(lane);
            self.node_mut(idx).forward[lane] = succ;
            self.node_mut(pred).forward[lane] = idx;
        }
        self.len += 1;

        self.check_invariants();
        None
    }

    /// Remove the item equivalent to `key`. Returns false if absent.
    pub fn delete(&mut self, key: &T) -> bool {
        self.remove(key).is_some()
    }

    /// Remove and return the item equivalent to `key`.
    pub fn remove(&mut self, key: &T) -> Option<T> {
        let mut path: Path = smallvec![HEAD; self.max_level];
        let x = self.descend(key, Some(&mut path));

        let target = self.node(x).next(0);
        if target == NIL || key.less(self.node(target).item()) {
            return None;
        }

        for lane in 0..self.node(target).level() {
            let pred = path[lane];
            // No higher lane can reach the target either.
            if self.node(pred).next(lane) != target {
                break;
            }
            let succ = self.node(target).next(lane);
            self.node_mut(pred).forward[lane] = succ;
        }

        while self.level > 1 && self.node(HEAD).next(self.level - 1) == NIL {
            self.level -= 1;
            #[cfg(feature = "tracing")]
            tracing::debug!(to = self.level, "skip list level lowered");
        }

        let item = self.node_mut(target).item.take();
        self.free_list.release(&mut self.nodes, target);
        self.len -= 1;

        self.check_invariants();
        item
    }

    /// Cursor at the first item not less than `key`.
    pub fn seek(&self, key: &T) -> Cursor<'_, T> {
        Cursor::new(self, self.lower_bound(key))
    }

    /// Items `x` with `begin <= x <= end`, ascending. Empty when `end`
    /// sorts before `begin`.
    pub fn range(&self, begin: &T, end: &T) -> Range<'_, T> {
        if self.is_empty() || end.less(begin) {
            return Range::new(self, NIL, NIL);
        }

        let start = self.lower_bound(begin);
        let mut stop = self.lower_bound(end);
        if stop != NIL && equivalent(end, self.node(stop).item()) {
            stop = self.node(stop).next(0);
        }
        Range::new(self, start, stop)
    }

    // --- Invariant checking ---

    #[cfg(debug_assertions)]
    fn check_invariants(&self) {
        if self.len <= DEBUG_CHECK_LIMIT {
            self.assert_invariants();
        }
    }

    #[cfg(not(debug_assertions))]
    #[inline(always)]
    fn check_invariants(&self) {}

    #[cfg(any(test, debug_assertions))]
    fn assert_invariants(&self) {
        let head = self.node(HEAD);
        assert_eq!(head.level(), self.max_level);
        assert!(
            (1..=self.max_level).contains(&self.level),
            "INVARIANT VIOLATED: level={} outside 1..={}",
            self.level,
            self.max_level
        );

        for lane in 0..self.max_level {
            let mut count = 0usize;
            let mut prev = NIL;
            let mut idx = head.next(lane);
            while idx != NIL {
                let node = self.node(idx);
                assert!(
                    lane < node.level(),
                    "INVARIANT VIOLATED: node {} of level {} linked in lane {}",
                    idx,
                    node.level(),
                    lane
                );
                if prev != NIL {
                    assert!(
                        self.node(prev).item().less(node.item()),
                        "INVARIANT VIOLATED: lane {} not ascending at node {}",
                        lane,
                        idx
                    );
                }
                prev = idx;
                count += 1;
                idx = node.next(lane);
            }

            if lane == 0 {
                assert_eq!(
                    count, self.len,
                    "INVARIANT VIOLATED: lane 0 count={} != len()={}",
                    count, self.len
                );
            } else if lane < self.level {
                assert!(count > 0, "INVARIANT VIOLATED: lane {} below level is empty", lane);
            } else {
                assert_eq!(count, 0, "INVARIANT VIOLATED: lane {} above level is in use", lane);
            }
        }
    }
}

impl<T> Default for SkipList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for SkipList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T: Item> Extend<T> for SkipList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}

impl<T: Item> FromIterator<T> for SkipList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = SkipList::new();
        list.extend(iter);
        list
    }
}

impl<'a, T> IntoIterator for &'a SkipList<T> {
    type Item = &'a T;
    type IntoIter = Cursor<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
