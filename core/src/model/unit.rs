use super::{CopyBehavior, Fixture, HasOwner};
use crate::types::{FixtureId, Turn};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id:   i32,
    pub name: String,
}

impl Player {
    pub fn new(id: i32, name: impl Into<String>) -> Self {
        Self { id, name: name.into() }
    }
}

/// A mobile group of workers, animals and equipment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    pub id:      FixtureId,
    pub owner:   Player,
    pub kind:    String,
    pub name:    String,
    /// Orders keyed by turn. Privileged: cleared on `CopyBehavior::Zero`.
    #[serde(with = "turn_map", default)]
    pub orders:  BTreeMap<Turn, String>,
    /// Results keyed by turn. Privileged: cleared on `CopyBehavior::Zero`.
    #[serde(with = "turn_map", default)]
    pub results: BTreeMap<Turn, String>,
    #[serde(default)]
    pub members: Vec<Fixture>,
}

impl Unit {
    pub fn new(id: FixtureId, owner: Player, kind: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id,
            owner,
            kind:    kind.into(),
            name:    name.into(),
            orders:  BTreeMap::new(),
            results: BTreeMap::new(),
            members: Vec::new(),
        }
    }

    pub fn copy(&self, behavior: CopyBehavior) -> Self {
        match behavior {
            CopyBehavior::Keep => self.clone(),
            CopyBehavior::Zero => Self {
                orders:  BTreeMap::new(),
                results: BTreeMap::new(),
                members: self.members.iter().map(|m| m.copy(behavior)).collect(),
                ..self.clone()
            },
        }
    }

    pub fn orders_for(&self, turn: Turn) -> Option<&str> {
        self.orders.get(&turn).map(String::as_str)
    }

    pub fn results_for(&self, turn: Turn) -> Option<&str> {
        self.results.get(&turn).map(String::as_str)
    }

    /// Replace this unit's orders for `turn`. An empty string clears them.
    pub fn set_orders(&mut self, turn: Turn, text: &str) {
        if text.is_empty() {
            self.orders.remove(&turn);
        } else {
            self.orders.insert(turn, text.to_string());
        }
    }

    /// Replace this unit's results for `turn`. An empty string clears them.
    pub fn set_results(&mut self, turn: Turn, text: &str) {
        if text.is_empty() {
            self.results.remove(&turn);
        } else {
            self.results.insert(turn, text.to_string());
        }
    }
}

impl HasOwner for Unit {
    fn owner(&self) -> &Player {
        &self.owner
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FortressSize {
    Small,
    Medium,
    Large,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fortress {
    pub id:      FixtureId,
    pub owner:   Player,
    pub name:    String,
    pub size:    FortressSize,
    /// Garrisoned units, stockpiles and equipment. What sits inside
    /// someone's fortress is privileged: cleared on `CopyBehavior::Zero`.
    #[serde(default)]
    pub members: Vec<Fixture>,
}

impl Fortress {
    pub fn new(id: FixtureId, owner: Player, name: impl Into<String>, size: FortressSize) -> Self {
        Self { id, owner, name: name.into(), size, members: Vec::new() }
    }

    pub fn copy(&self, behavior: CopyBehavior) -> Self {
        match behavior {
            CopyBehavior::Keep => self.clone(),
            CopyBehavior::Zero => Self { members: Vec::new(), ..self.clone() },
        }
    }
}

impl HasOwner for Fortress {
    fn owner(&self) -> &Player {
        &self.owner
    }
}

/// Per-turn text serializes as a list of `{ turn, text }` entries:
/// integer map keys do not survive the buffering that tagged enums
/// (`Fixture`, `TurnCommand`) go through.
mod turn_map {
    use crate::types::Turn;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::collections::BTreeMap;

    #[derive(Serialize)]
    struct EntryRef<'a> {
        turn: Turn,
        text: &'a str,
    }

    #[derive(Deserialize)]
    struct Entry {
        turn: Turn,
        text: String,
    }

    pub fn serialize<S: Serializer>(map: &BTreeMap<Turn, String>, s: S) -> Result<S::Ok, S::Error> {
        s.collect_seq(map.iter().map(|(turn, text)| EntryRef { turn: *turn, text }))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<BTreeMap<Turn, String>, D::Error> {
        let entries = Vec::<Entry>::deserialize(d)?;
        Ok(entries.into_iter().map(|e| (e.turn, e.text)).collect())
    }
}
