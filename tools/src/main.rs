//! turn-runner: headless turn processor.
//!
//! Usage:
//!   turn-runner --scenario turn.json
//!   turn-runner --scenario turn.json --config engine.json --out result.json

use anyhow::{Context, Result};
use std::env;
use turnsync_core::{
    command::TurnCommand,
    config::EngineConfig,
    ids::IdFactory,
    replica::{Replica, ReplicaSet},
};

#[derive(serde::Deserialize)]
struct Scenario {
    main:         Replica,
    #[serde(default)]
    subordinates: Vec<Replica>,
    #[serde(default)]
    commands:     Vec<TurnCommand>,
}

#[derive(serde::Serialize)]
struct Outcome<'a> {
    main:         &'a Replica,
    subordinates: &'a [Replica],
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let scenario_path = arg_value(&args, "--scenario")
        .context("missing --scenario <path>")?;
    let config = match arg_value(&args, "--config") {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::default(),
    };
    let out = arg_value(&args, "--out");

    let content = std::fs::read_to_string(scenario_path)
        .with_context(|| format!("Cannot read {scenario_path}"))?;
    let scenario: Scenario = serde_json::from_str(&content)
        .with_context(|| format!("Cannot parse {scenario_path}"))?;

    let mut set = ReplicaSet::with_config(scenario.main, config);
    for replica in scenario.subordinates {
        set.push_subordinate(replica);
    }
    let mut ids = IdFactory::seeded_from(&set);

    println!("turnsync: turn-runner");
    println!("  scenario:  {scenario_path}");
    println!("  replicas:  {}", set.len());
    println!("  commands:  {}", scenario.commands.len());
    println!();

    for (n, command) in scenario.commands.iter().enumerate() {
        let changed = set.apply(command, &mut ids)
            .with_context(|| format!("command #{n} ({}) aborted", command.name()))?;
        println!("  #{n:<3} {:<18} {}", command.name(), if changed { "applied" } else { "no match" });
    }

    println!();
    println!("=== MODIFIED REPLICAS ===");
    let modified = set.modified_indices();
    if modified.is_empty() {
        println!("  (none)");
    }
    for index in modified {
        let label = if index == 0 { "main".to_string() } else { format!("subordinate {index}") };
        if let Some(replica) = set.get(index) {
            println!("  {label:<16} player: {}", replica.current_player.name);
        }
    }

    if let Some(path) = out {
        let outcome = Outcome { main: set.main(), subordinates: set.subordinates() };
        std::fs::write(path, serde_json::to_string_pretty(&outcome)?)
            .with_context(|| format!("Cannot write {path}"))?;
        log::info!("wrote final replicas to {path}");
    }
    Ok(())
}

fn arg_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}
