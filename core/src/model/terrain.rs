//! Tile fixtures that carry a size: head counts and acreage.
//!
//! `dc` is the discovery difficulty. Only the authoritative record knows
//! it, so `CopyBehavior::Zero` clears it.

use super::{CopyBehavior, Fixture, HasExtent, HasPopulation};
use crate::types::{FixtureId, Turn};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Animal {
    pub id:         FixtureId,
    pub kind:       String,
    #[serde(default)]
    pub talking:    bool,
    /// "wild", "domesticated", "semi-domesticated", ...
    pub status:     String,
    /// Turn of birth; -1 when unknown.
    #[serde(default = "unknown_turn")]
    pub born:       Turn,
    pub population: i32,
    #[serde(default)]
    pub dc:         i32,
}

fn unknown_turn() -> Turn {
    -1
}

impl Animal {
    pub fn copy(&self, behavior: CopyBehavior) -> Self {
        match behavior {
            CopyBehavior::Keep => self.clone(),
            CopyBehavior::Zero => Self {
                born: -1,
                dc:   0,
                ..self.clone()
            },
        }
    }
}

impl HasPopulation for Animal {
    fn population(&self) -> i32 {
        self.population
    }

    fn with_population(&self, population: i32, behavior: CopyBehavior) -> Fixture {
        Fixture::Animal(Self { population, ..self.copy(behavior) })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grove {
    pub id:         FixtureId,
    pub kind:       String,
    pub orchard:    bool,
    pub cultivated: bool,
    pub population: i32,
    #[serde(default)]
    pub dc:         i32,
}

impl Grove {
    pub fn copy(&self, behavior: CopyBehavior) -> Self {
        match behavior {
            CopyBehavior::Keep => self.clone(),
            CopyBehavior::Zero => Self { dc: 0, ..self.clone() },
        }
    }
}

impl HasPopulation for Grove {
    fn population(&self) -> i32 {
        self.population
    }

    fn with_population(&self, population: i32, behavior: CopyBehavior) -> Fixture {
        Fixture::Grove(Self { population, ..self.copy(behavior) })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shrub {
    pub id:         FixtureId,
    pub kind:       String,
    pub population: i32,
    #[serde(default)]
    pub dc:         i32,
}

impl Shrub {
    pub fn copy(&self, behavior: CopyBehavior) -> Self {
        match behavior {
            CopyBehavior::Keep => self.clone(),
            CopyBehavior::Zero => Self { dc: 0, ..self.clone() },
        }
    }
}

impl HasPopulation for Shrub {
    fn population(&self) -> i32 {
        self.population
    }

    fn with_population(&self, population: i32, behavior: CopyBehavior) -> Fixture {
        Fixture::Shrub(Self { population, ..self.copy(behavior) })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldStatus {
    Fallow,
    Seeding,
    Growing,
    Bearing,
}

/// A field or meadow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meadow {
    pub id:         FixtureId,
    pub kind:       String,
    /// Field (true) or meadow (false).
    pub field:      bool,
    pub cultivated: bool,
    pub status:     FieldStatus,
    pub acres:      f64,
    #[serde(default)]
    pub dc:         i32,
}

impl Meadow {
    pub fn copy(&self, behavior: CopyBehavior) -> Self {
        match behavior {
            CopyBehavior::Keep => self.clone(),
            CopyBehavior::Zero => Self { dc: 0, ..self.clone() },
        }
    }
}

impl HasExtent for Meadow {
    fn acres(&self) -> f64 {
        self.acres
    }

    fn with_acres(&self, acres: f64, behavior: CopyBehavior) -> Fixture {
        Fixture::Meadow(Self { acres, ..self.copy(behavior) })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forest {
    pub id:    FixtureId,
    pub kind:  String,
    /// Planted in rows (managed) rather than wild.
    #[serde(default)]
    pub rows:  bool,
    pub acres: f64,
    #[serde(default)]
    pub dc:    i32,
}

impl Forest {
    pub fn copy(&self, behavior: CopyBehavior) -> Self {
        match behavior {
            CopyBehavior::Keep => self.clone(),
            CopyBehavior::Zero => Self { dc: 0, ..self.clone() },
        }
    }
}

impl HasExtent for Forest {
    fn acres(&self) -> f64 {
        self.acres
    }

    fn with_acres(&self, acres: f64, behavior: CopyBehavior) -> Fixture {
        Fixture::Forest(Self { acres, ..self.copy(behavior) })
    }
}
