//! Tab position state
//!
//! ```text
//! First   -> open group, open tab
//! Middle  -> close tab, open tab
//! Sentinel -> close tab, close group
//! ```
//!
//! The sentinel is the last member of a group. It only closes the markup and
//! never holds content of its own.

use serde::{Deserialize, Serialize};

/// Sequence number reported for the sentinel, whatever the group size
pub const SENTINEL_SEQUENCE: usize = usize::MAX;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "sequence")]
pub enum TabPosition {
    /// First member, opens the group
    First,
    /// Inner member with its zero-based sequence
    Middle(usize),
    /// Last member, closes the group
    Sentinel,
}

impl TabPosition {
    /// Position of member `index` in a group of `len` members
    pub fn for_index(index: usize, len: usize) -> Self {
        if index + 1 == len {
            TabPosition::Sentinel
        } else if index == 0 {
            TabPosition::First
        } else {
            TabPosition::Middle(index)
        }
    }

    pub fn sequence(&self) -> usize {
        match self {
            TabPosition::First => 0,
            TabPosition::Middle(sequence) => *sequence,
            TabPosition::Sentinel => SENTINEL_SEQUENCE,
        }
    }
}
