// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

use std::fmt;

/// Rejected skip list configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// `max_level` must lie in `1..=DEFAULT_MAX_LEVEL`.
    MaxLevelOutOfRange { max_level: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MaxLevelOutOfRange { max_level } => write!(
                f,
                "max level {} must be between 1 and {}",
                max_level,
                crate::skiplist::DEFAULT_MAX_LEVEL
            ),
        }
    }
}

impl std::error::Error for Error {}
