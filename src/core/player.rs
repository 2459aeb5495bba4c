//! Sides of the table and per-side data storage.
//!
//! ## Side
//!
//! A round of twenty-one always has exactly two sides: the human `Player`
//! and the rule-driven `Dealer`.
//!
//! ## SideMap
//!
//! Fixed two-slot storage indexed by `Side`, used for participants and
//! per-side tallies.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One side of the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// The human (or automated) player.
    Player,
    /// The house.
    Dealer,
}

impl Side {
    /// Both sides, in dealing order.
    pub const ALL: [Side; 2] = [Side::Player, Side::Dealer];

    /// Slot index (player first).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Side::Player => 0,
            Side::Dealer => 1,
        }
    }

    /// The other side of the table.
    #[must_use]
    pub const fn opponent(self) -> Side {
        match self {
            Side::Player => Side::Dealer,
            Side::Dealer => Side::Player,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Player => write!(f, "player"),
            Side::Dealer => write!(f, "dealer"),
        }
    }
}

/// Per-side data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use twenty_one::core::{Side, SideMap};
///
/// let mut wins: SideMap<u32> = SideMap::with_default();
/// wins[Side::Dealer] += 1;
///
/// assert_eq!(wins[Side::Player], 0);
/// assert_eq!(wins[Side::Dealer], 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideMap<T> {
    data: [T; 2],
}

impl<T> SideMap<T> {
    /// Create a new SideMap with values from a factory function.
    pub fn new(factory: impl Fn(Side) -> T) -> Self {
        Self {
            data: [factory(Side::Player), factory(Side::Dealer)],
        }
    }

    /// Create a new SideMap with default values.
    pub fn with_default() -> Self
    where
        T: Default,
    {
        Self::new(|_| T::default())
    }

    /// Iterate over (Side, &T) pairs, player first.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        Side::ALL.into_iter().zip(self.data.iter())
    }

    /// Iterate over (Side, &mut T) pairs, player first.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Side, &mut T)> {
        Side::ALL.into_iter().zip(self.data.iter_mut())
    }
}

impl<T> Index<Side> for SideMap<T> {
    type Output = T;

    fn index(&self, side: Side) -> &Self::Output {
        &self.data[side.index()]
    }
}

impl<T> IndexMut<Side> for SideMap<T> {
    fn index_mut(&mut self, side: Side) -> &mut Self::Output {
        &mut self.data[side.index()]
    }
}
