use crate::{
    error::SyncResult,
    ids::IdFactory,
    model::{Animal, CopyBehavior, Fixture, ResourcePile, Skill, Unit, Worker},
    replica::ReplicaSet,
    types::{FixtureId, Point, Turn},
};
use serde::{Deserialize, Serialize};

/// Every turn-processing command the engine accepts.
/// Variants map one-to-one onto `ReplicaSet` operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum TurnCommand {
    // ── Reduction ─────────────────────────────────
    ReducePopulation {
        point:    Point,
        target:   Fixture,
        amount:   i32,
        behavior: CopyBehavior,
    },
    ReduceExtent {
        point:    Point,
        target:   Fixture,
        amount:   f64,
        behavior: CopyBehavior,
    },

    // ── Resources and members ─────────────────────
    Transfer {
        pile:        ResourcePile,
        destination: Fixture,
        quantity:    f64,
    },
    AddResource {
        container: Fixture,
        pile:      ResourcePile,
    },
    AddAnimal {
        container: Fixture,
        animal:    Animal,
    },
    DismissMember {
        container: Fixture,
        member_id: FixtureId,
    },

    // ── Worker progression ────────────────────────
    AddJob {
        worker: Worker,
        job:    String,
    },
    AddSkill {
        worker: Worker,
        job:    String,
        skill:  String,
    },
    AddSkillToAll {
        unit:  Unit,
        job:   String,
        skill: String,
    },
    AddHours {
        worker:    Worker,
        job:       String,
        skill:     String,
        hours:     i32,
        condition: i32,
    },
    AddHoursToAll {
        unit:  Unit,
        job:   String,
        skill: String,
        hours: i32,
        seed:  u64,
    },
    ReplaceSkill {
        worker: Worker,
        job:    String,
        old:    Skill,
        new:    Skill,
    },

    // ── Orders ────────────────────────────────────
    SetOrders {
        unit: Unit,
        turn: Turn,
        text: String,
    },
    SetResults {
        unit: Unit,
        turn: Turn,
        text: String,
    },
}

impl TurnCommand {
    /// Stable name of the command, for logs and summaries.
    pub fn name(&self) -> &'static str {
        match self {
            Self::ReducePopulation { .. } => "reduce_population",
            Self::ReduceExtent { .. }     => "reduce_extent",
            Self::Transfer { .. }         => "transfer",
            Self::AddResource { .. }      => "add_resource",
            Self::AddAnimal { .. }        => "add_animal",
            Self::DismissMember { .. }    => "dismiss_member",
            Self::AddJob { .. }           => "add_job",
            Self::AddSkill { .. }         => "add_skill",
            Self::AddSkillToAll { .. }    => "add_skill_to_all",
            Self::AddHours { .. }         => "add_hours",
            Self::AddHoursToAll { .. }    => "add_hours_to_all",
            Self::ReplaceSkill { .. }     => "replace_skill",
            Self::SetOrders { .. }        => "set_orders",
            Self::SetResults { .. }       => "set_results",
        }
    }
}

impl ReplicaSet {
    /// Run one command to completion over every replica.
    /// Returns whether any replica changed (or, for worker commands,
    /// whether any replica had the worker).
    pub fn apply(&mut self, command: &TurnCommand, ids: &mut IdFactory) -> SyncResult<bool> {
        let changed = match command {
            TurnCommand::ReducePopulation { point, target, amount, behavior } => {
                self.reduce_population(*point, target, *amount, *behavior)
            }
            TurnCommand::ReduceExtent { point, target, amount, behavior } => {
                self.reduce_extent(*point, target, *amount, *behavior)
            }
            TurnCommand::Transfer { pile, destination, quantity } => {
                self.transfer(pile, destination, *quantity, || ids.create_id())?
            }
            TurnCommand::AddResource { container, pile } => {
                ids.register(pile.id);
                self.add_resource(container, pile)?
            }
            TurnCommand::AddAnimal { container, animal } => {
                ids.register(animal.id);
                self.add_animal(container, animal)?
            }
            TurnCommand::DismissMember { container, member_id } => {
                self.dismiss_member(container, *member_id)?
            }
            TurnCommand::AddJob { worker, job } => self.add_job(worker, job),
            TurnCommand::AddSkill { worker, job, skill } => self.add_skill(worker, job, skill),
            TurnCommand::AddSkillToAll { unit, job, skill } => {
                self.add_skill_to_all(unit, job, skill)
            }
            TurnCommand::AddHours { worker, job, skill, hours, condition } => {
                self.add_hours(worker, job, skill, *hours, *condition)
            }
            TurnCommand::AddHoursToAll { unit, job, skill, hours, seed } => {
                self.add_hours_to_all(unit, job, skill, *hours, *seed)
            }
            TurnCommand::ReplaceSkill { worker, job, old, new } => {
                self.replace_skill(worker, job, old, new)
            }
            TurnCommand::SetOrders { unit, turn, text } => self.set_orders(unit, *turn, text),
            TurnCommand::SetResults { unit, turn, text } => self.set_results(unit, *turn, text),
        };
        log::debug!("apply: {} -> {changed}", command.name());
        Ok(changed)
    }
}
