//! Small hand-built worlds shared by the integration tests.
#![allow(dead_code)]

use turnsync_core::{
    model::{Animal, Fixture, Job, Player, Quantity, ResourcePile, Skill, Unit, Worker},
    replica::{Replica, ReplicaSet, TerrainKind},
    types::{Dimensions, Point},
};

pub const HERE: Point = Point::new(3, 4);

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn alice() -> Player {
    Player::new(1, "Alice")
}

pub fn bob() -> Player {
    Player::new(2, "Bob")
}

pub fn replica_for(player: Player) -> Replica {
    let mut replica = Replica::new(Dimensions { rows: 10, columns: 10 }, 5, player);
    replica.set_terrain(HERE, TerrainKind::Plains);
    replica
}

/// A main replica plus one subordinate, both empty apart from terrain.
pub fn two_replicas() -> ReplicaSet {
    let mut set = ReplicaSet::new(replica_for(alice()));
    set.push_subordinate(replica_for(bob()));
    set
}

pub fn deer(population: i32) -> Animal {
    Animal {
        id: 12,
        kind: "deer".into(),
        talking: false,
        status: "wild".into(),
        born: 2,
        population,
        dc: 18,
    }
}

pub fn grain(id: i32, number: f64) -> ResourcePile {
    ResourcePile {
        id,
        kind: "food".into(),
        contents: "grain".into(),
        quantity: Quantity::new(number, "bushels"),
        created: 3,
    }
}

pub fn unit(id: i32, name: &str) -> Unit {
    Unit::new(id, alice(), "explorers", name)
}

pub fn hunter() -> Worker {
    let mut worker = Worker::new(40, "Ana", "human");
    let mut job = Job::new("Hunter", 2);
    job.skills.push(Skill::new("Tracking", 1, 0));
    worker.jobs.push(job);
    worker
}

/// All fixtures at `HERE` in replica `index`.
pub fn at_here(set: &ReplicaSet, index: usize) -> Vec<Fixture> {
    set.get(index).expect("replica").fixtures_at(HERE).to_vec()
}

/// The unit with `id` at `HERE` in replica `index`.
pub fn unit_in(set: &ReplicaSet, index: usize, id: i32) -> Unit {
    at_here(set, index)
        .into_iter()
        .find_map(|f| match f {
            Fixture::Unit(u) if u.id == id => Some(u),
            _ => None,
        })
        .expect("unit present")
}

pub fn piles_of(unit: &Unit) -> Vec<ResourcePile> {
    unit.members
        .iter()
        .filter_map(|m| match m {
            Fixture::ResourcePile(p) => Some(p.clone()),
            _ => None,
        })
        .collect()
}

pub fn worker_in(set: &ReplicaSet, index: usize, unit_id: i32, worker_id: i32) -> Option<Worker> {
    unit_in(set, index, unit_id).members.into_iter().find_map(|m| match m {
        Fixture::Worker(w) if w.id == worker_id => Some(w),
        _ => None,
    })
}
