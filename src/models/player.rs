//! Player identifiers and canonical pair keys.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

/// An opaque player identifier.
///
/// Backed by a shared string so that ledger keys, teams, and search states
/// can hold the same name without reallocating it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Player(Arc<str>);

impl Player {
    /// Creates a player from a name.
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(Arc::from(name.as_ref()))
    }

    /// The player's name.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Player {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Player {
    fn from(name: String) -> Self {
        Self(Arc::from(name))
    }
}

impl Borrow<str> for Player {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Player {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Canonical unordered pair of two players.
///
/// `PairKey::new(a, b) == PairKey::new(b, a)` for every `a`, `b`.
/// The smaller name (by string order) is always stored first.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PairKey {
    first: Player,
    second: Player,
}

impl PairKey {
    /// Creates the canonical key for two players.
    pub fn new(a: &Player, b: &Player) -> Self {
        if a <= b {
            Self {
                first: a.clone(),
                second: b.clone(),
            }
        } else {
            Self {
                first: b.clone(),
                second: a.clone(),
            }
        }
    }

    /// The lexicographically smaller player.
    pub fn first(&self) -> &Player {
        &self.first
    }

    /// The lexicographically larger player.
    pub fn second(&self) -> &Player {
        &self.second
    }

    /// Whether the pair involves `player`.
    pub fn contains(&self, player: &Player) -> bool {
        &self.first == player || &self.second == player
    }
}

impl fmt::Display for PairKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}", self.first, self.second)
    }
}
