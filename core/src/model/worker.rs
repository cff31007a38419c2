//! Workers and their job/skill trees.
//!
//! Jobs are unique by name within a worker; skills are unique by name
//! within a job. Lookups are by name only.

use super::CopyBehavior;
use crate::types::FixtureId;
use serde::{Deserialize, Serialize};

/// A single trained skill. `hours` accumulate toward the next level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name:  String,
    pub level: i32,
    pub hours: i32,
}

impl Skill {
    pub fn new(name: impl Into<String>, level: i32, hours: i32) -> Self {
        Self { name: name.into(), level, hours }
    }

    /// Add experience. `condition` is a roll in `[0, sides)`: once the
    /// accumulated hours reach it, the skill gains a level and the hours
    /// start over.
    pub fn add_hours(&mut self, hours: i32, condition: i32) {
        self.hours += hours;
        if condition <= self.hours {
            self.level += 1;
            self.hours = 0;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub name:   String,
    pub level:  i32,
    #[serde(default)]
    pub skills: Vec<Skill>,
}

impl Job {
    pub fn new(name: impl Into<String>, level: i32) -> Self {
        Self { name: name.into(), level, skills: Vec::new() }
    }

    pub fn skill(&self, name: &str) -> Option<&Skill> {
        self.skills.iter().find(|s| s.name == name)
    }

    pub fn skill_mut(&mut self, name: &str) -> Option<&mut Skill> {
        self.skills.iter_mut().find(|s| s.name == name)
    }

    /// The named skill, created at level 0 with no hours if absent.
    pub fn ensure_skill(&mut self, name: &str) -> &mut Skill {
        match self.skills.iter().position(|s| s.name == name) {
            Some(index) => &mut self.skills[index],
            None => {
                self.skills.push(Skill::new(name, 0, 0));
                let last = self.skills.len() - 1;
                &mut self.skills[last]
            }
        }
    }
}

/// Physical statistics. Only the authoritative record knows them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkerStats {
    pub hp:           i32,
    pub max_hp:       i32,
    pub strength:     i32,
    pub dexterity:    i32,
    pub constitution: i32,
    pub intelligence: i32,
    pub wisdom:       i32,
    pub charisma:     i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Worker {
    pub id:    FixtureId,
    pub name:  String,
    pub race:  String,
    #[serde(default)]
    pub stats: Option<WorkerStats>,
    #[serde(default)]
    pub jobs:  Vec<Job>,
}

impl Worker {
    pub fn new(id: FixtureId, name: impl Into<String>, race: impl Into<String>) -> Self {
        Self { id, name: name.into(), race: race.into(), stats: None, jobs: Vec::new() }
    }

    pub fn copy(&self, behavior: CopyBehavior) -> Self {
        match behavior {
            CopyBehavior::Keep => self.clone(),
            CopyBehavior::Zero => Self { stats: None, ..self.clone() },
        }
    }

    pub fn job(&self, name: &str) -> Option<&Job> {
        self.jobs.iter().find(|j| j.name == name)
    }

    pub fn job_mut(&mut self, name: &str) -> Option<&mut Job> {
        self.jobs.iter_mut().find(|j| j.name == name)
    }

    /// The named job, created at level 0 if absent.
    pub fn ensure_job(&mut self, name: &str) -> &mut Job {
        match self.jobs.iter().position(|j| j.name == name) {
            Some(index) => &mut self.jobs[index],
            None => {
                self.jobs.push(Job::new(name, 0));
                let last = self.jobs.len() - 1;
                &mut self.jobs[last]
            }
        }
    }
}
