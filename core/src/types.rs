//! Shared primitive types used across every replica and engine.

use serde::{Deserialize, Serialize};

/// A game turn. Negative values mean "unknown".
pub type Turn = i32;

/// A fixture identifier. Unique within one replica, not across replicas.
pub type FixtureId = i32;

/// A tile coordinate on the world grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Point {
    pub row: i32,
    pub col: i32,
}

impl Point {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Grid dimensions of a replica's map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    pub rows:    i32,
    pub columns: i32,
}
