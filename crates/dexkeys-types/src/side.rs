//! Book side selector.

use serde::{Deserialize, Serialize};

/// Which side of a pair's book a key belongs to.
///
/// Long and short books (and their order counters) live under disjoint tags
/// and are never mixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Side {
    Long,
    Short,
}

impl Side {
    /// Both sides, long first.
    pub const ALL: [Side; 2] = [Side::Long, Side::Short];
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Long => write!(f, "LONG"),
            Self::Short => write!(f, "SHORT"),
        }
    }
}
