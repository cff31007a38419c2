//! Resource transfer and container insertion tests.

mod common;

use common::*;
use std::cell::Cell;
use turnsync_core::{
    error::SyncError,
    ids::IdFactory,
    model::{Fixture, Fortress, FortressSize, Unit},
    replica::ReplicaSet,
};

const UNIT_A: i32 = 30;
const UNIT_B: i32 = 31;

/// Units A and B at (3,4) in both replicas; pile 7 (50 bushels of grain)
/// sits in unit A in both.
fn stocked(sub_amount: f64) -> ReplicaSet {
    init_logging();
    let mut set = two_replicas();
    for (index, amount) in [(0, 50.0), (1, sub_amount)] {
        let mut a = unit(UNIT_A, "Alpha");
        a.members.push(Fixture::ResourcePile(grain(7, amount)));
        let replica = set.get_mut(index).unwrap();
        replica.add_fixture(HERE, Fixture::Unit(a));
        replica.add_fixture(HERE, Fixture::Unit(unit(UNIT_B, "Bravo")));
    }
    set
}

fn destination() -> Fixture {
    Fixture::Unit(unit(UNIT_B, "Bravo"))
}

#[test]
fn full_transfer_moves_the_same_pile() {
    let mut set = stocked(50.0);
    let calls = Cell::new(0);

    let moved = set
        .transfer(&grain(7, 50.0), &destination(), 60.0, || {
            calls.set(calls.get() + 1);
            99
        })
        .unwrap();

    assert!(moved);
    assert_eq!(calls.get(), 0, "a move must not request a new ID");
    for index in 0..2 {
        assert!(piles_of(&unit_in(&set, index, UNIT_A)).is_empty());
        let piles = piles_of(&unit_in(&set, index, UNIT_B));
        assert_eq!(piles.len(), 1);
        assert_eq!(piles[0], grain(7, 50.0), "pile keeps its ID and history");
    }
    assert_eq!(set.modified_indices(), vec![0, 1]);
}

#[test]
fn split_transfer_conserves_quantity_and_shares_one_new_id() {
    let mut set = stocked(40.0);
    let mut ids = IdFactory::seeded_from(&set);
    let calls = Cell::new(0);

    let moved = set
        .transfer(&grain(7, 50.0), &destination(), 20.0, || {
            calls.set(calls.get() + 1);
            ids.create_id()
        })
        .unwrap();

    assert!(moved);
    assert_eq!(calls.get(), 1, "one fresh ID for the whole operation");

    let main_source = piles_of(&unit_in(&set, 0, UNIT_A));
    let main_split = piles_of(&unit_in(&set, 0, UNIT_B));
    assert_eq!(main_source[0].id, 7);
    assert_eq!(main_source[0].quantity.number, 30.0);
    assert_eq!(main_split[0].quantity.number, 20.0);
    assert_eq!(main_source[0].quantity.number + main_split[0].quantity.number, 50.0);
    assert_ne!(main_split[0].id, 7);
    assert_eq!(main_split[0].contents, "grain");
    assert_eq!(main_split[0].created, 3);

    let sub_source = piles_of(&unit_in(&set, 1, UNIT_A));
    let sub_split = piles_of(&unit_in(&set, 1, UNIT_B));
    assert_eq!(sub_source[0].quantity.number + sub_split[0].quantity.number, 40.0);
    assert_eq!(sub_split[0].id, main_split[0].id, "replicas must agree on the split ID");
}

#[test]
fn replica_without_destination_is_untouched() {
    let mut set = stocked(50.0);
    let mut lonely = unit(UNIT_A, "Alpha");
    lonely.members.push(Fixture::ResourcePile(grain(7, 50.0)));
    let mut third = replica_for(bob());
    third.add_fixture(HERE, Fixture::Unit(lonely));
    set.push_subordinate(third);

    assert!(set.transfer(&grain(7, 50.0), &destination(), 10.0, || 100).unwrap());
    assert_eq!(set.modified_indices(), vec![0, 1]);
    assert_eq!(piles_of(&unit_in(&set, 2, UNIT_A))[0].quantity.number, 50.0);
}

#[test]
fn piles_held_by_other_players_are_not_sources() {
    let mut set = two_replicas();
    let mut theirs = Unit::new(UNIT_A, bob(), "explorers", "Alpha");
    theirs.members.push(Fixture::ResourcePile(grain(7, 50.0)));
    set.main_mut().add_fixture(HERE, Fixture::Unit(theirs));
    set.main_mut().add_fixture(HERE, destination());

    assert!(!set.transfer(&grain(7, 50.0), &destination(), 10.0, || 100).unwrap());
    assert!(set.modified_indices().is_empty());
}

#[test]
fn mismatched_pile_key_is_not_a_source() {
    let mut set = stocked(50.0);
    let mut wrong = grain(7, 50.0);
    wrong.quantity.units = "pounds".into();
    assert!(!set.transfer(&wrong, &destination(), 10.0, || 100).unwrap());
}

#[test]
fn destination_must_be_a_container() {
    let mut set = stocked(50.0);
    let err = set
        .transfer(&grain(7, 50.0), &Fixture::Animal(deer(3)), 10.0, || 100)
        .unwrap_err();
    assert!(matches!(err, SyncError::NotAContainer { id: 12, .. }), "got {err:?}");
    assert!(set.modified_indices().is_empty());
}

#[test]
fn moving_out_of_a_fortress_into_its_garrison() {
    let mut set = two_replicas();
    let mut keep = Fortress::new(50, alice(), "Highkeep", FortressSize::Medium);
    keep.members.push(Fixture::ResourcePile(grain(7, 50.0)));
    keep.members.push(destination());
    set.main_mut().add_fixture(HERE, Fixture::Fortress(keep));

    assert!(set.transfer(&grain(7, 50.0), &destination(), 50.0, || 100).unwrap());

    let here = at_here(&set, 0);
    let Fixture::Fortress(keep) = &here[0] else { panic!("fortress expected") };
    assert_eq!(keep.members.len(), 1, "pile left the fortress");
    let Fixture::Unit(garrison) = &keep.members[0] else { panic!("garrison expected") };
    assert_eq!(piles_of(garrison), vec![grain(7, 50.0)]);
}

#[test]
fn non_positive_quantity_is_ignored() {
    let mut set = stocked(50.0);
    assert!(!set.transfer(&grain(7, 50.0), &destination(), 0.0, || 100).unwrap());
}

#[test]
fn add_resource_reaches_every_copy_of_the_container() {
    let mut set = stocked(50.0);
    let container = Fixture::Unit(unit(UNIT_B, "Bravo"));

    assert!(set.add_resource(&container, &grain(60, 5.0)).unwrap());
    for index in 0..2 {
        assert_eq!(piles_of(&unit_in(&set, index, UNIT_B)), vec![grain(60, 5.0)]);
    }
}

#[test]
fn add_resource_matches_on_name_and_id_only() {
    let mut set = stocked(50.0);
    // Same ID, renamed: not the same container.
    let renamed = Fixture::Unit(unit(UNIT_B, "Charlie"));
    assert!(!set.add_resource(&renamed, &grain(60, 5.0)).unwrap());

    // Different owner and kind do not matter for insertion.
    let other_owner = Fixture::Unit(Unit::new(UNIT_B, bob(), "traders", "Bravo"));
    assert!(set.add_resource(&other_owner, &grain(61, 5.0)).unwrap());
}

#[test]
fn add_resource_into_a_non_container_is_fatal() {
    let mut set = stocked(50.0);
    let err = set.add_resource(&Fixture::Animal(deer(2)), &grain(60, 5.0)).unwrap_err();
    assert!(matches!(err, SyncError::NotAContainer { .. }));
}

#[test]
fn add_animal_and_dismiss_member() {
    let mut set = stocked(50.0);
    let container = Fixture::Unit(unit(UNIT_A, "Alpha"));

    assert!(set.add_animal(&container, &deer(2)).unwrap());
    for index in 0..2 {
        assert!(unit_in(&set, index, UNIT_A)
            .members
            .iter()
            .any(|m| matches!(m, Fixture::Animal(a) if a.id == 12)));
    }

    set.clear_modified();
    assert!(set.dismiss_member(&container, 12).unwrap());
    assert_eq!(set.modified_indices(), vec![0, 1]);
    assert!(!set.dismiss_member(&container, 12).unwrap(), "already gone everywhere");
}
