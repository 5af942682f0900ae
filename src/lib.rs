// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

//! Lanes - an ordered in-memory set built on a skip list.
//!
//! A skip list is a stack of sorted linked lists ("lanes"). Lane 0 holds
//! every item; each higher lane holds roughly a quarter of the lane below,
//! so a search skips ahead on the sparse lanes and drops down as it nears
//! the key. Search, insert and delete are expected `O(log n)` with no
//! rebalancing.
//!
//! # Quick Start
//!
//! ```
//! use lanes::SkipList;
//!
//! let mut list = SkipList::new();
//! for i in 0..10 {
//!     list.insert(i);
//! }
//!
//! assert_eq!(list.get(&3), Some(&3));
//! assert_eq!(list.get(&100), None);
//! assert!(list.delete(&4));
//! assert!(!list.delete(&100));
//!
//! list.insert(5); // already present: replaced, length unchanged
//! list.insert(100);
//! assert_eq!(list.len(), 10);
//!
//! let items: Vec<_> = list.iter().copied().collect();
//! assert_eq!(items, vec![0, 1, 2, 3, 5, 6, 7, 8, 9, 100]);
//!
//! let window: Vec<_> = list.range(&1, &3).copied().collect();
//! assert_eq!(window, vec![1, 2, 3]);
//! ```
//!
//! # Threading
//!
//! The list is single-threaded. Share it behind a lock if needed.
//!
//! # Features
//!
//! - `tracing`: emit `tracing` events for level changes and node recycling.

mod cursor;
mod error;
mod free_list;
mod item;
mod node;
mod options;
mod skiplist;

pub use cursor::{Cursor, Range};
pub use error::Error;
pub use free_list::DEFAULT_FREE_LIST_CAPACITY;
pub use item::{Item, equivalent};
pub use options::Options;
pub use skiplist::{DEFAULT_MAX_LEVEL, P, SkipList};
