// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

//! Construction-time settings for a [`SkipList`](crate::SkipList).

use crate::error::Error;
use crate::free_list::DEFAULT_FREE_LIST_CAPACITY;
use crate::skiplist::DEFAULT_MAX_LEVEL;

/// Settings fixed for the lifetime of a list.
///
/// ```
/// use lanes::{Options, SkipList};
///
/// let list: SkipList<u64> = SkipList::with_options(
///     Options::default().with_max_level(12).with_seed(7),
/// );
/// assert_eq!(list.max_level(), 12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Upper bound on lanes. Pick it so that `4^max_level` comfortably
    /// exceeds the largest expected item count.
    pub max_level: usize,
    /// Released nodes kept for reuse. Zero disables pooling.
    pub free_list_capacity: usize,
    /// Seed for level draws. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Options {
    pub fn with_max_level(mut self, max_level: usize) -> Self {
        self.max_level = max_level;
        self
    }

    pub fn with_free_list_capacity(mut self, capacity: usize) -> Self {
        self.free_list_capacity = capacity;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.max_level < 1 || self.max_level > DEFAULT_MAX_LEVEL {
            return Err(Error::MaxLevelOutOfRange {
                max_level: self.max_level,
            });
        }
        Ok(())
    }
}

impl Default for Options {
    fn default() -> Self {
        Options {
            max_level: DEFAULT_MAX_LEVEL,
            free_list_capacity: DEFAULT_FREE_LIST_CAPACITY,
            seed: None,
        }
    }
}
