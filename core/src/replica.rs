//! Replicas and the replica set.
//!
//! A replica is one full copy of the world. The replica set holds the
//! authoritative main replica first, then per-player subordinate replicas
//! in the order they were added.
//!
//! RULES:
//!   - Engines walk the set in that fixed order, every operation.
//!   - Engines mark a replica modified when they change it; the caller
//!     reads the flags to decide what to write back.
//!   - Every engine operation takes `&mut ReplicaSet` and runs to
//!     completion over all replicas before returning. A concurrent host
//!     must lock the whole set, never single replicas.

use crate::{
    config::EngineConfig,
    container::{Container, ContainerPath},
    model::{Fixture, Player},
    types::{Dimensions, FixtureId, Point, Turn},
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TerrainKind {
    NotVisible,
    Tundra,
    Desert,
    Plains,
    Jungle,
    Steppe,
    Swamp,
    Ocean,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tile {
    pub terrain:  TerrainKind,
    #[serde(default)]
    pub fixtures: Vec<Fixture>,
}

impl Tile {
    pub fn new(terrain: TerrainKind) -> Self {
        Self { terrain, fixtures: Vec::new() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Replica {
    pub dimensions:     Dimensions,
    pub current_turn:   Turn,
    /// The participant this view belongs to.
    pub current_player: Player,
    #[serde(default)]
    pub players:        Vec<Player>,
    #[serde(with = "tile_map", default)]
    tiles:              BTreeMap<Point, Tile>,
    #[serde(skip)]
    modified:           bool,
}

impl Replica {
    pub fn new(dimensions: Dimensions, current_turn: Turn, current_player: Player) -> Self {
        Self {
            dimensions,
            current_turn,
            players: vec![current_player.clone()],
            current_player,
            tiles: BTreeMap::new(),
            modified: false,
        }
    }

    pub fn is_modified(&self) -> bool {
        self.modified
    }

    pub fn mark_modified(&mut self) {
        self.modified = true;
    }

    pub fn clear_modified(&mut self) {
        self.modified = false;
    }

    pub fn set_terrain(&mut self, point: Point, terrain: TerrainKind) {
        self.tiles
            .entry(point)
            .and_modify(|t| t.terrain = terrain)
            .or_insert_with(|| Tile::new(terrain));
    }

    pub fn tile(&self, point: Point) -> Option<&Tile> {
        self.tiles.get(&point)
    }

    pub fn tiles(&self) -> impl Iterator<Item = (&Point, &Tile)> {
        self.tiles.iter()
    }

    pub fn fixtures_at(&self, point: Point) -> &[Fixture] {
        self.tiles
            .get(&point)
            .map(|t| t.fixtures.as_slice())
            .unwrap_or_default()
    }

    // ── Tile-level primitives ──────────────────────────────────

    /// Append a fixture to the tile at `point`, creating an unexplored
    /// tile if the replica has never seen that location.
    pub fn add_fixture(&mut self, point: Point, fixture: Fixture) {
        self.tiles
            .entry(point)
            .or_insert_with(|| Tile::new(TerrainKind::NotVisible))
            .fixtures
            .push(fixture);
    }

    pub fn replace_fixture(&mut self, point: Point, index: usize, fixture: Fixture) -> Option<Fixture> {
        let slot = self.tiles.get_mut(&point)?.fixtures.get_mut(index)?;
        Some(std::mem::replace(slot, fixture))
    }

    pub fn remove_fixture(&mut self, point: Point, index: usize) -> Option<Fixture> {
        let fixtures = &mut self.tiles.get_mut(&point)?.fixtures;
        (index < fixtures.len()).then(|| fixtures.remove(index))
    }

    // ── Container navigation ───────────────────────────────────

    /// Every container in this replica, in iteration order: tiles by
    /// point, fixtures by position, each container before its nested ones.
    pub fn container_paths(&self) -> Vec<ContainerPath> {
        let mut paths = Vec::new();
        for (point, tile) in &self.tiles {
            for (index, fixture) in tile.fixtures.iter().enumerate() {
                if let Ok(container) = fixture.as_container() {
                    let path = ContainerPath::on_tile(*point, index);
                    collect_nested(container, &path, &mut paths);
                }
            }
        }
        paths
    }

    pub fn fixture_at_path(&self, path: &ContainerPath) -> Option<&Fixture> {
        let mut current = self.tiles.get(&path.point)?.fixtures.get(path.index)?;
        for &step in &path.nested {
            current = current.as_container().ok()?.members().get(step)?;
        }
        Some(current)
    }

    pub fn fixture_at_path_mut(&mut self, path: &ContainerPath) -> Option<&mut Fixture> {
        let mut current = self.tiles.get_mut(&path.point)?.fixtures.get_mut(path.index)?;
        for &step in &path.nested {
            current = current.as_container_mut().ok()?.members_mut().get_mut(step)?;
        }
        Some(current)
    }

    pub fn container(&self, path: &ContainerPath) -> Option<&dyn Container> {
        self.fixture_at_path(path)?.as_container().ok()
    }

    pub fn container_mut(&mut self, path: &ContainerPath) -> Option<&mut dyn Container> {
        self.fixture_at_path_mut(path)?.as_container_mut().ok()
    }

    /// Largest fixture ID anywhere in this replica.
    pub fn max_id(&self) -> Option<FixtureId> {
        self.tiles
            .values()
            .flat_map(|t| t.fixtures.iter())
            .map(Fixture::max_id)
            .max()
    }
}

fn collect_nested(container: &dyn Container, path: &ContainerPath, out: &mut Vec<ContainerPath>) {
    out.push(path.clone());
    for (index, member) in container.members().iter().enumerate() {
        if let Ok(inner) = member.as_container() {
            collect_nested(inner, &path.child(index), out);
        }
    }
}

/// Tiles serialize as a list of `{ point, tile }` entries so the map
/// round-trips through JSON, which only allows string keys.
mod tile_map {
    use super::Tile;
    use crate::types::Point;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::collections::BTreeMap;

    #[derive(Serialize)]
    struct EntryRef<'a> {
        point: Point,
        tile:  &'a Tile,
    }

    #[derive(Deserialize)]
    struct Entry {
        point: Point,
        tile:  Tile,
    }

    pub fn serialize<S: Serializer>(tiles: &BTreeMap<Point, Tile>, s: S) -> Result<S::Ok, S::Error> {
        s.collect_seq(tiles.iter().map(|(point, tile)| EntryRef { point: *point, tile }))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<BTreeMap<Point, Tile>, D::Error> {
        let entries = Vec::<Entry>::deserialize(d)?;
        Ok(entries.into_iter().map(|e| (e.point, e.tile)).collect())
    }
}

/// The main replica plus every subordinate replica, walked main first.
#[derive(Debug, Clone)]
pub struct ReplicaSet {
    main:         Replica,
    subordinates: Vec<Replica>,
    config:       EngineConfig,
}

impl ReplicaSet {
    pub fn new(main: Replica) -> Self {
        Self::with_config(main, EngineConfig::default())
    }

    pub fn with_config(main: Replica, config: EngineConfig) -> Self {
        Self { main, subordinates: Vec::new(), config }
    }

    pub fn push_subordinate(&mut self, replica: Replica) {
        self.subordinates.push(replica);
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn main(&self) -> &Replica {
        &self.main
    }

    pub fn main_mut(&mut self) -> &mut Replica {
        &mut self.main
    }

    pub fn subordinates(&self) -> &[Replica] {
        &self.subordinates
    }

    /// Replica by walk position: 0 is main, 1.. are subordinates.
    pub fn get(&self, index: usize) -> Option<&Replica> {
        match index {
            0 => Some(&self.main),
            n => self.subordinates.get(n - 1),
        }
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Replica> {
        match index {
            0 => Some(&mut self.main),
            n => self.subordinates.get_mut(n - 1),
        }
    }

    pub fn len(&self) -> usize {
        1 + self.subordinates.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn iter(&self) -> impl Iterator<Item = &Replica> {
        std::iter::once(&self.main).chain(self.subordinates.iter())
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Replica> {
        std::iter::once(&mut self.main).chain(self.subordinates.iter_mut())
    }

    /// Walk positions of every replica an operation has changed.
    pub fn modified_indices(&self) -> Vec<usize> {
        self.iter()
            .enumerate()
            .filter(|(_, r)| r.is_modified())
            .map(|(i, _)| i)
            .collect()
    }

    pub fn clear_modified(&mut self) {
        self.iter_mut().for_each(Replica::clear_modified);
    }

    /// Highest fixture ID across every replica.
    pub fn max_id(&self) -> Option<FixtureId> {
        self.iter().filter_map(Replica::max_id).max()
    }

    pub fn into_parts(self) -> (Replica, Vec<Replica>) {
        (self.main, self.subordinates)
    }
}
