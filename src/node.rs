// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

//! Arena-resident skip list nodes.
//!
//! Nodes live in a `Vec<Node<T>>` and link to each other by index. Each
//! node owns a forward array sized to its own level, so a level-1 node
//! costs one slot rather than `max_level` slots.
//!
//! ```text
//! idx:      0 (HEAD)   1        2        3
//! lane 2:   -> 2 -------------> NIL
//! lane 1:   -> 2 -------------> 3 -----> NIL
//! lane 0:   -> 1 ----> 2 -----> 3 -----> NIL
//! ```

/// Node index type. u32 saves space vs usize on 64-bit.
pub(crate) type Idx = u32;

/// Null index marker.
pub(crate) const NIL: Idx = Idx::MAX;

/// Arena slot of the header node.
pub(crate) const HEAD: Idx = 0;

/// One stored item and its forward links.
pub(crate) struct Node<T> {
    /// `None` for the header, and for pooled or vacant slots.
    pub(crate) item: Option<T>,
    /// `forward[lane]` is the next node in that lane, or `NIL`.
    pub(crate) forward: Vec<Idx>,
}

impl<T> Node<T> {
    /// A node with `level` empty lanes.
    pub(crate) fn new(level: usize) -> Self {
        debug_assert!(level >= 1, "node level must be positive");
        Node {
            item: None,
            forward: vec![NIL; level],
        }
    }

    /// Number of lanes this node participates in.
    #[inline]
    pub(crate) fn level(&self) -> usize {
        self.forward.len()
    }

    #[inline]
    pub(crate) fn next(&self, lane: usize) -> Idx {
        self.forward[lane]
    }

    /// The stored item. Only the header (and free slots) have none.
    #[inline]
    pub(crate) fn item(&self) -> &T {
        match &self.item {
            Some(item) => item,
            None => panic!("item requested from an empty node"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_node_has_empty_lanes() {
        let node: Node<u8> = Node::new(4);
        assert_eq!(node.level(), 4);
        assert!(node.forward.iter().all(|&next| next == NIL));
        assert!(node.item.is_none());
    }

    #[test]
    #[should_panic(expected = "empty node")]
    fn header_has_no_item() {
        let node: Node<u8> = Node::new(1);
        node.item();
    }
}
