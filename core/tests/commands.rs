//! Scenario commands: JSON decoding and dispatch through `apply`.

mod common;

use common::*;
use turnsync_core::{
    command::TurnCommand,
    ids::IdFactory,
    model::Fixture,
    replica::{Replica, ReplicaSet},
};

fn stocked() -> ReplicaSet {
    init_logging();
    let mut set = two_replicas();
    let mut camp = unit(30, "Camp");
    camp.members.push(Fixture::ResourcePile(grain(7, 50.0)));
    camp.members.push(Fixture::Worker(hunter()));
    set.main_mut().add_fixture(HERE, Fixture::Unit(camp));
    set.main_mut().add_fixture(HERE, Fixture::Unit(unit(31, "Depot")));
    set
}

const SCRIPT: &str = r#"[
    { "cmd": "transfer",
      "pile": { "id": 7, "kind": "food", "contents": "grain",
                "quantity": { "number": 50.0, "units": "bushels" }, "created": 3 },
      "destination": { "type": "unit", "id": 31, "owner": { "id": 1, "name": "Alice" },
                       "kind": "explorers", "name": "Depot" },
      "quantity": 20.0 },
    { "cmd": "add_hours",
      "worker": { "id": 40, "name": "Ana", "race": "human" },
      "job": "Hunter", "skill": "Tracking", "hours": 5, "condition": 80 },
    { "cmd": "set_orders",
      "unit": { "id": 30, "owner": { "id": 1, "name": "Alice" },
                "kind": "explorers", "name": "Camp" },
      "turn": 6, "text": "Rest" },
    { "cmd": "reduce_population", "point": { "row": 3, "col": 4 },
      "target": { "type": "animal", "id": 12, "kind": "deer", "status": "wild", "population": 10 },
      "amount": 4, "behavior": "keep" }
]"#;

#[test]
fn script_decodes_and_applies_in_order() {
    let commands: Vec<TurnCommand> = serde_json::from_str(SCRIPT).expect("script parses");
    let names: Vec<_> = commands.iter().map(TurnCommand::name).collect();
    assert_eq!(names, vec!["transfer", "add_hours", "set_orders", "reduce_population"]);

    let mut set = stocked();
    let mut ids = IdFactory::seeded_from(&set);
    let results: Vec<bool> = commands
        .iter()
        .map(|c| set.apply(c, &mut ids).expect("command runs"))
        .collect();
    assert_eq!(results, vec![true, true, true, false], "no deer at (3,4) in main");

    let depot = piles_of(&unit_in(&set, 0, 31));
    assert_eq!(depot.len(), 1);
    assert_eq!(depot[0].id, 41, "split ID comes from the seeded allocator");
    assert_eq!(depot[0].quantity.number, 20.0);

    let camp = unit_in(&set, 0, 30);
    assert_eq!(camp.orders_for(6), Some("Rest"));
    let ana = worker_in(&set, 0, 30, 40).unwrap();
    assert_eq!(ana.job("Hunter").unwrap().skill("Tracking").map(|s| s.hours), Some(5));
}

#[test]
fn fatal_command_surfaces_the_error() {
    let command: TurnCommand = serde_json::from_str(
        r#"{ "cmd": "add_resource",
             "container": { "type": "shrub", "id": 5, "kind": "gorse", "population": 3 },
             "pile": { "id": 90, "kind": "wood", "contents": "gorse",
                       "quantity": { "number": 1.0, "units": "bundles" }, "created": 2 } }"#,
    )
    .unwrap();
    let mut set = stocked();
    let mut ids = IdFactory::seeded_from(&set);
    assert!(set.apply(&command, &mut ids).is_err());
    assert!(set.modified_indices().is_empty());
}

#[test]
fn replicas_survive_a_json_round_trip() {
    let mut set = stocked();
    assert!(set.set_orders(&unit(30, "Camp"), 6, "Rest"));
    let json = serde_json::to_string(set.main()).unwrap();
    let back: Replica = serde_json::from_str(&json).unwrap();
    assert_eq!(back.fixtures_at(HERE), set.main().fixtures_at(HERE));
    assert!(!back.is_modified(), "modified flag is session state, not data");
}
