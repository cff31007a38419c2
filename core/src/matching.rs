//! Identity matching across independently evolved replicas.
//!
//! IDs are unique within a replica but not across replicas, so each
//! entity kind is matched on a richer key:
//!
//!   worker                      race + name + ID
//!   unit (orders/results)       owner + kind + name + ID
//!   unit/fortress (insertion)   category + name + ID
//!   resource pile               kind + contents + created + units + ID
//!   job, skill                  name
//!
//! When several candidates match, the first in iteration order wins
//! (see `Replica::container_paths`). That is policy, not an error.

use crate::{
    container::{Container, ContainerPath, MemberPath},
    model::{Fixture, ResourcePile, Unit, Worker},
    replica::Replica,
    types::Point,
};

pub fn same_worker(candidate: &Worker, target: &Worker) -> bool {
    candidate.id == target.id && candidate.race == target.race && candidate.name == target.name
}

pub fn same_unit(candidate: &Unit, target: &Unit) -> bool {
    candidate.id == target.id
        && candidate.owner.id == target.owner.id
        && candidate.kind == target.kind
        && candidate.name == target.name
}

pub fn same_pile(candidate: &ResourcePile, target: &ResourcePile) -> bool {
    candidate.id == target.id
        && candidate.kind == target.kind
        && candidate.contents == target.contents
        && candidate.created == target.created
        && candidate.quantity.units == target.quantity.units
}

/// Key used when inserting into a container: same kind of container,
/// same name, same ID.
pub fn same_container(candidate: &dyn Container, target: &dyn Container) -> bool {
    candidate.id() == target.id()
        && candidate.category() == target.category()
        && candidate.name() == target.name()
}

/// Index of the fixture at `point` that is the same entity as `target`.
pub fn find_counterpart(replica: &Replica, point: Point, target: &Fixture) -> Option<usize> {
    replica
        .fixtures_at(point)
        .iter()
        .position(|f| f.is_counterpart(target))
}

/// First container anywhere in the replica matching `target` by
/// category, name and ID.
pub fn find_container(replica: &Replica, target: &dyn Container) -> Option<ContainerPath> {
    replica.container_paths().into_iter().find(|path| {
        replica
            .container(path)
            .is_some_and(|c| same_container(c, target))
    })
}

/// First unit anywhere in the replica matching `target` by owner, kind,
/// name and ID.
pub fn find_unit(replica: &Replica, target: &Unit) -> Option<ContainerPath> {
    replica.container_paths().into_iter().find(|path| {
        matches!(replica.fixture_at_path(path), Some(Fixture::Unit(u)) if same_unit(u, target))
    })
}

/// First worker anywhere in the replica matching `target`.
pub fn find_worker(replica: &Replica, target: &Worker) -> Option<MemberPath> {
    find_member(replica, |_, member| {
        matches!(member, Fixture::Worker(w) if same_worker(w, target))
    })
}

/// First pile matching `target` held by any container owned by `owner_id`.
pub fn find_owned_pile(replica: &Replica, owner_id: i32, target: &ResourcePile) -> Option<MemberPath> {
    find_member(replica, |container, member| {
        container.owner().id == owner_id
            && matches!(member, Fixture::ResourcePile(p) if same_pile(p, target))
    })
}

fn find_member<F>(replica: &Replica, mut predicate: F) -> Option<MemberPath>
where
    F: FnMut(&dyn Container, &Fixture) -> bool,
{
    for path in replica.container_paths() {
        let Some(container) = replica.container(&path) else { continue };
        if let Some(index) = container.members().iter().position(|m| predicate(container, m)) {
            return Some(MemberPath { container: path, index });
        }
    }
    None
}
