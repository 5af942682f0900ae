// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

//! Bounded pool of released nodes.
//!
//! A released node either goes into the pool, keeping its forward array
//! allocation for the next insert, or, when the pool is full, gives its
//! storage back and leaves only an empty arena slot behind. `acquire`
//! prefers pooled nodes, then empty slots, then grows the arena.

use crate::node::{Idx, NIL, Node};

/// Default number of nodes kept for reuse.
pub const DEFAULT_FREE_LIST_CAPACITY: usize = 32;

pub(crate) struct FreeList {
    /// Released nodes with their forward storage intact, newest last.
    pooled: Vec<Idx>,
    /// Arena slots whose storage was dropped.
    vacant: Vec<Idx>,
    capacity: usize,
}

impl FreeList {
    pub(crate) fn new(capacity: usize) -> Self {
        FreeList {
            pooled: Vec::with_capacity(capacity),
            vacant: Vec::new(),
            capacity,
        }
    }

    /// Number of nodes currently pooled.
    pub(crate) fn pooled(&self) -> usize {
        self.pooled.len()
    }

    pub(crate) fn capacity(&self) -> usize {
        self.capacity
    }

    /// Hand out a node with `level` empty lanes.
    pub(crate) fn acquire<T>(&mut self, nodes: &mut Vec<Node<T>>, level: usize) -> Idx {
        if let Some(idx) = self.pooled.pop() {
            // Reuses the allocation when it is large enough.
            let forward = &mut nodes[idx as usize].forward;
            forward.clear();
            forward.resize(level, NIL);
            return idx;
        }

        if let Some(idx) = self.vacant.pop() {
            nodes[idx as usize].forward = vec![NIL; level];
            return idx;
        }

        let idx = nodes.len() as Idx;
        assert!(idx != NIL, "skip list arena exhausted");
        nodes.push(Node::new(level));
        idx
    }

    /// Take back an unlinked node whose item has already been moved out.
    ///
    /// Returns true if the node was pooled, false if its storage was
    /// dropped because the pool is full.
    pub(crate) fn release<T>(&mut self, nodes: &mut [Node<T>], idx: Idx) -> bool {
        let node = &mut nodes[idx as usize];
        debug_assert!(node.item.is_none(), "released node still holds an item");

        if self.pooled.len() < self.capacity {
            self.pooled.push(idx);
            #[cfg(feature = "tracing")]
            tracing::trace!(idx, pooled = self.pooled.len(), "free list: pooled node");
            return true;
        }

        node.forward = Vec::new();
        self.vacant.push(idx);
        #[cfg(feature = "tracing")]
        tracing::trace!(idx, "free list: full, dropped node storage");
        false
    }

    /// Forget every slot. The arena is being truncated by the caller.
    pub(crate) fn reset(&mut self) {
        self.pooled.clear();
        self.vacant.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arena() -> Vec<Node<u32>> {
        vec![Node::new(4)]
    }

    #[test]
    fn acquire_grows_arena_when_empty() {
        let mut nodes = arena();
        let mut free = FreeList::new(2);
        let a = free.acquire(&mut nodes, 3);
        let b = free.acquire(&mut nodes, 1);
        assert_eq!((a, b), (1, 2));
        assert_eq!(nodes[1].level(), 3);
        assert_eq!(nodes[2].level(), 1);
    }

    #[test]
    fn release_pools_until_full() {
        let mut nodes = arena();
        let mut free = FreeList::new(1);
        let a = free.acquire(&mut nodes, 2);
        let b = free.acquire(&mut nodes, 2);

        assert!(free.release(&mut nodes, a));
        assert!(!free.release(&mut nodes, b));
        assert_eq!(free.pooled(), 1);
        assert_eq!(nodes[b as usize].forward.capacity(), 0);
    }

    #[test]
    fn pooled_node_is_reused_most_recent_first() {
        let mut nodes = arena();
        let mut free = FreeList::new(4);
        let a = free.acquire(&mut nodes, 2);
        let b = free.acquire(&mut nodes, 2);
        free.release(&mut nodes, a);
        free.release(&mut nodes, b);

        assert_eq!(free.acquire(&mut nodes, 1), b);
        assert_eq!(free.acquire(&mut nodes, 1), a);
        assert_eq!(nodes.len(), 3);
    }

    #[test]
    fn acquire_resizes_pooled_forward_array() {
        let mut nodes = arena();
        let mut free = FreeList::new(4);
        let a = free.acquire(&mut nodes, 5);
        nodes[a as usize].forward[0] = 0;
        free.release(&mut nodes, a);

        let again = free.acquire(&mut nodes, 2);
        assert_eq!(again, a);
        assert_eq!(nodes[a as usize].forward, vec![NIL, NIL]);
        assert!(nodes[a as usize].forward.capacity() >= 5);

        free.release(&mut nodes, a);
        let grown = free.acquire(&mut nodes, 7);
        assert_eq!(nodes[grown as usize].level(), 7);
    }

    #[test]
    fn vacant_slot_is_reused_after_pool() {
        let mut nodes = arena();
        let mut free = FreeList::new(0);
        let a = free.acquire(&mut nodes, 3);
        assert!(!free.release(&mut nodes, a));

        let again = free.acquire(&mut nodes, 2);
        assert_eq!(again, a);
        assert_eq!(nodes[a as usize].level(), 2);
        assert_eq!(nodes.len(), 2);
    }
}
