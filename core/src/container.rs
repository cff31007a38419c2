//! Container mutation primitives.
//!
//! RULE: Units and fortresses are the only containers. Every engine adds,
//! replaces and removes members through this trait, so each state change
//! is an explicit container operation.

use crate::{
    error::{SyncError, SyncResult},
    model::{Fixture, Fortress, Player, Unit},
    types::{FixtureId, Point},
};

pub trait Container {
    fn id(&self) -> FixtureId;
    fn name(&self) -> &str;
    fn owner(&self) -> &Player;
    /// "unit" or "fortress".
    fn category(&self) -> &'static str;
    fn members(&self) -> &[Fixture];
    fn members_mut(&mut self) -> &mut Vec<Fixture>;

    fn add_member(&mut self, member: Fixture) {
        self.members_mut().push(member);
    }

    /// Swap the member at `index` for `member`, returning the old one.
    fn replace_member(&mut self, index: usize, member: Fixture) -> Option<Fixture> {
        let slot = self.members_mut().get_mut(index)?;
        Some(std::mem::replace(slot, member))
    }

    fn remove_member(&mut self, index: usize) -> Option<Fixture> {
        let members = self.members_mut();
        (index < members.len()).then(|| members.remove(index))
    }
}

impl Container for Unit {
    fn id(&self) -> FixtureId { self.id }
    fn name(&self) -> &str { &self.name }
    fn owner(&self) -> &Player { &self.owner }
    fn category(&self) -> &'static str { "unit" }
    fn members(&self) -> &[Fixture] { &self.members }
    fn members_mut(&mut self) -> &mut Vec<Fixture> { &mut self.members }
}

impl Container for Fortress {
    fn id(&self) -> FixtureId { self.id }
    fn name(&self) -> &str { &self.name }
    fn owner(&self) -> &Player { &self.owner }
    fn category(&self) -> &'static str { "fortress" }
    fn members(&self) -> &[Fixture] { &self.members }
    fn members_mut(&mut self) -> &mut Vec<Fixture> { &mut self.members }
}

impl Fixture {
    /// View this fixture as a container. Anything outside {unit, fortress}
    /// is a broken structural invariant and is reported as fatal.
    pub fn as_container(&self) -> SyncResult<&dyn Container> {
        match self {
            Self::Unit(u)     => Ok(u),
            Self::Fortress(f) => Ok(f),
            other => Err(SyncError::NotAContainer {
                id:   other.id(),
                kind: other.category().to_string(),
            }),
        }
    }

    pub fn as_container_mut(&mut self) -> SyncResult<&mut dyn Container> {
        match self {
            Self::Unit(u)     => Ok(u),
            Self::Fortress(f) => Ok(f),
            other => Err(SyncError::NotAContainer {
                id:   other.id(),
                kind: other.category().to_string(),
            }),
        }
    }

    pub fn is_container(&self) -> bool {
        matches!(self, Self::Unit(_) | Self::Fortress(_))
    }
}

/// Where a container lives inside one replica: the tile, the index in the
/// tile's fixture list, then member indices through any enclosing
/// containers (a unit garrisoned in a fortress has one nested step).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerPath {
    pub point:  Point,
    pub index:  usize,
    pub nested: Vec<usize>,
}

impl ContainerPath {
    pub fn on_tile(point: Point, index: usize) -> Self {
        Self { point, index, nested: Vec::new() }
    }

    pub fn child(&self, member_index: usize) -> Self {
        let mut nested = self.nested.clone();
        nested.push(member_index);
        Self { point: self.point, index: self.index, nested }
    }
}

/// A member slot inside a container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberPath {
    pub container: ContainerPath,
    pub index:     usize,
}
