//! Worker progression engine: jobs, skills and training hours.
//!
//! Every change is made on a copy of the matched worker, which then
//! replaces the original in its container.

use crate::{
    container::{Container, MemberPath},
    matching,
    model::{Fixture, Skill, Unit, Worker},
    replica::{Replica, ReplicaSet},
    rng::TrainingRng,
};

/// Outcome of applying one edit to every replica's copy of a worker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct WorkerUpdate {
    /// Some replica had a matching worker.
    matched: bool,
    /// Some replica's worker actually changed.
    changed: bool,
}

impl ReplicaSet {
    /// Give the worker a level-0 job named `job` wherever it lacks one.
    /// Returns whether any replica had the worker.
    pub fn add_job(&mut self, worker: &Worker, job: &str) -> bool {
        self.update_worker(worker, |w| {
            if w.job(job).is_some() {
                return false;
            }
            w.ensure_job(job);
            true
        })
        .matched
    }

    /// Ensure the worker has `job` and, within it, a level-0 skill named
    /// `skill`. Existing jobs and skills are left alone. Returns whether
    /// any replica had the worker.
    pub fn add_skill(&mut self, worker: &Worker, job: &str, skill: &str) -> bool {
        self.update_worker(worker, |w| {
            if w.job(job).is_some_and(|j| j.skill(skill).is_some()) {
                return false;
            }
            w.ensure_job(job).ensure_skill(skill);
            true
        })
        .matched
    }

    /// `add_skill` for every worker currently in `unit`.
    pub fn add_skill_to_all(&mut self, unit: &Unit, job: &str, skill: &str) -> bool {
        let mut any = false;
        for worker in workers_of(unit) {
            any |= self.add_skill(worker, job, skill);
        }
        any
    }

    /// Train the worker: create the job and skill if needed, then add
    /// `hours` with `condition` as the level-up roll. Returns whether any
    /// replica had the worker.
    pub fn add_hours(
        &mut self,
        worker: &Worker,
        job: &str,
        skill: &str,
        hours: i32,
        condition: i32,
    ) -> bool {
        let update = self.update_worker(worker, |w| {
            w.ensure_job(job).ensure_skill(skill).add_hours(hours, condition);
            true
        });
        if update.matched {
            log::info!("train: {} +{hours}h {job}/{skill} (roll {condition})", worker.name);
        }
        update.matched
    }

    /// `add_hours` for every worker currently in `unit`. Each worker's roll
    /// comes from one RNG seeded with `seed`, in member order, so a given
    /// seed always trains the unit the same way.
    pub fn add_hours_to_all(
        &mut self,
        unit: &Unit,
        job: &str,
        skill: &str,
        hours: i32,
        seed: u64,
    ) -> bool {
        let sides = self.config().leveling.roll_sides;
        let mut rng = TrainingRng::new(seed);
        let mut any = false;
        for worker in workers_of(unit) {
            let condition = rng.next_u32_below(sides) as i32;
            any |= self.add_hours(worker, job, skill, hours, condition);
        }
        any
    }

    /// Swap `old` for `new` in the worker's `job`. A replica whose worker
    /// does not hold exactly `old` in that job is left untouched. Returns
    /// whether any replica changed.
    pub fn replace_skill(&mut self, worker: &Worker, job: &str, old: &Skill, new: &Skill) -> bool {
        self.update_worker(worker, |w| {
            let Some(found) = w.job_mut(job) else { return false };
            let Some(position) = found.skills.iter().position(|s| s == old) else {
                return false;
            };
            found.skills.remove(position);
            found.skills.push(new.clone());
            true
        })
        .changed
    }

    /// Apply `edit` to a copy of every replica's matching worker; replace
    /// the original wherever `edit` reports a change.
    fn update_worker<F>(&mut self, worker: &Worker, mut edit: F) -> WorkerUpdate
    where
        F: FnMut(&mut Worker) -> bool,
    {
        let mut update = WorkerUpdate::default();
        for (index, replica) in self.iter_mut().enumerate() {
            let Some(path) = matching::find_worker(replica, worker) else { continue };
            let Some(mut copy) = worker_at(replica, &path) else { continue };
            update.matched = true;
            if !edit(&mut copy) {
                continue;
            }
            if let Some(container) = replica.container_mut(&path.container) {
                container.replace_member(path.index, Fixture::Worker(copy));
                replica.mark_modified();
                update.changed = true;
                log::debug!("worker: replica={index} updated {} (id={})", worker.name, worker.id);
            }
        }
        update
    }
}

fn worker_at(replica: &Replica, path: &MemberPath) -> Option<Worker> {
    match replica.container(&path.container)?.members().get(path.index)? {
        Fixture::Worker(w) => Some(w.clone()),
        _ => None,
    }
}

fn workers_of(unit: &Unit) -> impl Iterator<Item = &Worker> {
    unit.members.iter().filter_map(|m| match m {
        Fixture::Worker(w) => Some(w),
        _ => None,
    })
}
