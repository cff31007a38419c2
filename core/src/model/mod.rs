//! The fixture model shared by every replica.
//!
//! RULE: `Fixture` is a closed set. Engines dispatch on it with `match`
//! or through the narrow capability traits below; nothing downcasts.

mod terrain;
mod unit;
mod worker;
mod resource;

pub use resource::{Implement, Quantity, ResourcePile};
pub use terrain::{Animal, FieldStatus, Forest, Grove, Meadow, Shrub};
pub use unit::{Fortress, FortressSize, Player, Unit};
pub use worker::{Job, Skill, Worker, WorkerStats};

use crate::types::FixtureId;
use serde::{Deserialize, Serialize};

/// How much of a fixture survives being duplicated into another replica.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CopyBehavior {
    /// Every field is preserved verbatim.
    Keep,
    /// Structural fields survive; privileged information is cleared.
    Zero,
}

/// A fixture whose size is a head count (animals, groves, shrubs).
pub trait HasPopulation {
    fn population(&self) -> i32;

    /// A copy of this fixture carrying `population`, redacted per `behavior`.
    fn with_population(&self, population: i32, behavior: CopyBehavior) -> Fixture;
}

/// A fixture whose size is an area in acres (meadows, forests).
pub trait HasExtent {
    fn acres(&self) -> f64;

    /// A copy of this fixture covering `acres`, redacted per `behavior`.
    fn with_acres(&self, acres: f64, behavior: CopyBehavior) -> Fixture;
}

/// A fixture that belongs to a player.
pub trait HasOwner {
    fn owner(&self) -> &Player;
}

/// Any entity placed on a tile or inside a container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Fixture {
    Animal(Animal),
    Grove(Grove),
    Shrub(Shrub),
    Meadow(Meadow),
    Forest(Forest),
    Implement(Implement),
    ResourcePile(ResourcePile),
    Worker(Worker),
    Unit(Unit),
    Fortress(Fortress),
}

impl Fixture {
    pub fn id(&self) -> FixtureId {
        match self {
            Self::Animal(a)       => a.id,
            Self::Grove(g)        => g.id,
            Self::Shrub(s)        => s.id,
            Self::Meadow(m)       => m.id,
            Self::Forest(f)       => f.id,
            Self::Implement(i)    => i.id,
            Self::ResourcePile(p) => p.id,
            Self::Worker(w)       => w.id,
            Self::Unit(u)         => u.id,
            Self::Fortress(f)     => f.id,
        }
    }

    /// Stable lower-case tag for the variant. Used in logs and errors.
    pub fn category(&self) -> &'static str {
        match self {
            Self::Animal(_)       => "animal",
            Self::Grove(_)        => "grove",
            Self::Shrub(_)        => "shrub",
            Self::Meadow(_)       => "meadow",
            Self::Forest(_)       => "forest",
            Self::Implement(_)    => "implement",
            Self::ResourcePile(_) => "resource_pile",
            Self::Worker(_)       => "worker",
            Self::Unit(_)         => "unit",
            Self::Fortress(_)     => "fortress",
        }
    }

    /// Duplicate this fixture for insertion into another replica or container.
    pub fn copy(&self, behavior: CopyBehavior) -> Fixture {
        match self {
            Self::Animal(a)       => Self::Animal(a.copy(behavior)),
            Self::Grove(g)        => Self::Grove(g.copy(behavior)),
            Self::Shrub(s)        => Self::Shrub(s.copy(behavior)),
            Self::Meadow(m)       => Self::Meadow(m.copy(behavior)),
            Self::Forest(f)       => Self::Forest(f.copy(behavior)),
            Self::Implement(i)    => Self::Implement(i.clone()),
            Self::ResourcePile(p) => Self::ResourcePile(p.clone()),
            Self::Worker(w)       => Self::Worker(w.copy(behavior)),
            Self::Unit(u)         => Self::Unit(u.copy(behavior)),
            Self::Fortress(f)     => Self::Fortress(f.copy(behavior)),
        }
    }

    /// Structural-subset comparison: does `other` describe the same
    /// real-world entity as `self`, ignoring size and any field that
    /// redaction may legitimately have cleared?
    pub fn is_counterpart(&self, other: &Fixture) -> bool {
        match (self, other) {
            (Self::Animal(a), Self::Animal(b)) => {
                a.id == b.id && a.kind == b.kind && a.talking == b.talking && a.status == b.status
            }
            (Self::Grove(a), Self::Grove(b)) => {
                a.id == b.id && a.kind == b.kind && a.orchard == b.orchard && a.cultivated == b.cultivated
            }
            (Self::Shrub(a), Self::Shrub(b)) => a.id == b.id && a.kind == b.kind,
            (Self::Meadow(a), Self::Meadow(b)) => {
                a.id == b.id && a.kind == b.kind && a.field == b.field && a.cultivated == b.cultivated
            }
            (Self::Forest(a), Self::Forest(b)) => a.id == b.id && a.kind == b.kind && a.rows == b.rows,
            (Self::Implement(a), Self::Implement(b)) => a.id == b.id && a.kind == b.kind,
            (Self::ResourcePile(a), Self::ResourcePile(b)) => crate::matching::same_pile(a, b),
            (Self::Worker(a), Self::Worker(b)) => crate::matching::same_worker(a, b),
            (Self::Unit(a), Self::Unit(b)) => crate::matching::same_unit(a, b),
            (Self::Fortress(a), Self::Fortress(b)) => {
                a.id == b.id && a.name == b.name && a.owner.id == b.owner.id
            }
            _ => false,
        }
    }

    pub fn as_population(&self) -> Option<&dyn HasPopulation> {
        match self {
            Self::Animal(a) => Some(a),
            Self::Grove(g)  => Some(g),
            Self::Shrub(s)  => Some(s),
            _ => None,
        }
    }

    pub fn as_extent(&self) -> Option<&dyn HasExtent> {
        match self {
            Self::Meadow(m) => Some(m),
            Self::Forest(f) => Some(f),
            _ => None,
        }
    }

    pub fn as_owned(&self) -> Option<&dyn HasOwner> {
        match self {
            Self::Unit(u)     => Some(u),
            Self::Fortress(f) => Some(f),
            _ => None,
        }
    }

    /// Largest ID carried by this fixture or anything nested inside it.
    pub fn max_id(&self) -> FixtureId {
        let nested = match self {
            Self::Unit(u)     => u.members.iter().map(Fixture::max_id).max(),
            Self::Fortress(f) => f.members.iter().map(Fixture::max_id).max(),
            _ => None,
        };
        nested.map_or(self.id(), |n| n.max(self.id()))
    }
}
