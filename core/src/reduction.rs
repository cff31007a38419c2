//! Reduction engine: shrink a population or an acreage across replicas.
//!
//! WALK ORDER (fixed): main replica first, then subordinates in the
//! order they were added.
//!
//! RULES:
//!   - The main replica decides. No counterpart there, or a counterpart
//!     already at or below zero: nothing changes anywhere.
//!   - Main keeps `main_behavior` fidelity; every other replica gets
//!     `CopyBehavior::Zero` copies.
//!   - A size at or below zero after reduction removes the fixture.
//!     If that happens on main, the entity is gone: every subordinate
//!     copy is removed regardless of its own size.
//!   - A subordinate without a copy learns of the entity only when the
//!     main record survived (and `reduction.learn_unknown` is set).

use crate::{
    matching,
    model::{CopyBehavior, Fixture},
    replica::{Replica, ReplicaSet},
    types::Point,
};
use std::fmt::Display;
use std::ops::Sub;

/// The size dimension being reduced: head count or acreage.
trait Measure {
    type Amount: Copy + PartialOrd + Sub<Output = Self::Amount> + Default + Display;

    const LABEL: &'static str;

    fn amount(fixture: &Fixture) -> Option<Self::Amount>;
    fn resized(fixture: &Fixture, amount: Self::Amount, behavior: CopyBehavior) -> Option<Fixture>;
}

struct Population;

impl Measure for Population {
    type Amount = i32;
    const LABEL: &'static str = "population";

    fn amount(fixture: &Fixture) -> Option<i32> {
        fixture.as_population().map(|p| p.population())
    }

    fn resized(fixture: &Fixture, amount: i32, behavior: CopyBehavior) -> Option<Fixture> {
        fixture.as_population().map(|p| p.with_population(amount, behavior))
    }
}

struct Extent;

impl Measure for Extent {
    type Amount = f64;
    const LABEL: &'static str = "acres";

    fn amount(fixture: &Fixture) -> Option<f64> {
        fixture.as_extent().map(|e| e.acres())
    }

    fn resized(fixture: &Fixture, amount: f64, behavior: CopyBehavior) -> Option<Fixture> {
        fixture.as_extent().map(|e| e.with_acres(amount, behavior))
    }
}

/// What happened to the authoritative record on the main pass.
enum MainRecord {
    Survived(Fixture),
    Gone,
}

impl ReplicaSet {
    /// Reduce the population of `target` at `point` by `amount` in every
    /// replica that knows it. Returns whether any replica changed.
    pub fn reduce_population(
        &mut self,
        point: Point,
        target: &Fixture,
        amount: i32,
        main_behavior: CopyBehavior,
    ) -> bool {
        self.reduce::<Population>(point, target, amount, main_behavior)
    }

    /// Reduce the acreage of `target` at `point` by `amount` in every
    /// replica that knows it. Returns whether any replica changed.
    pub fn reduce_extent(
        &mut self,
        point: Point,
        target: &Fixture,
        amount: f64,
        main_behavior: CopyBehavior,
    ) -> bool {
        self.reduce::<Extent>(point, target, amount, main_behavior)
    }

    fn reduce<M: Measure>(
        &mut self,
        point: Point,
        target: &Fixture,
        amount: M::Amount,
        main_behavior: CopyBehavior,
    ) -> bool {
        let zero = M::Amount::default();
        if !(amount > zero) {
            log::warn!("reduce: ignoring non-positive {} delta {amount} at {point}", M::LABEL);
            return false;
        }
        if M::amount(target).is_none() {
            log::debug!("reduce: {} id={} has no {}", target.category(), target.id(), M::LABEL);
            return false;
        }
        let learn_unknown = self.config().reduction.learn_unknown;

        let mut replicas = self.iter_mut();
        let Some(main) = replicas.next() else { return false };
        let Some(record) = reduce_main::<M>(main, point, target, amount, main_behavior) else {
            return false;
        };

        for (offset, replica) in replicas.enumerate() {
            let index = offset + 1;
            match (matching::find_counterpart(replica, point, target), &record) {
                (Some(found), MainRecord::Gone) => {
                    replica.remove_fixture(point, found);
                    replica.mark_modified();
                    log::debug!("reduce: replica={index} removed id={}", target.id());
                }
                (Some(found), MainRecord::Survived(_)) => {
                    let current = &replica.fixtures_at(point)[found];
                    let Some(starting) = M::amount(current) else { continue };
                    let remaining = starting - amount;
                    if remaining > zero {
                        if let Some(reduced) = M::resized(current, remaining, CopyBehavior::Zero) {
                            replica.replace_fixture(point, found, reduced);
                            log::debug!(
                                "reduce: replica={index} id={} {}={remaining}",
                                target.id(),
                                M::LABEL
                            );
                        }
                    } else {
                        replica.remove_fixture(point, found);
                        log::debug!("reduce: replica={index} exhausted id={}", target.id());
                    }
                    replica.mark_modified();
                }
                (None, MainRecord::Survived(main_copy)) if learn_unknown => {
                    replica.add_fixture(point, main_copy.copy(CopyBehavior::Zero));
                    replica.mark_modified();
                    log::debug!("reduce: replica={index} learned of id={}", target.id());
                }
                (None, _) => {}
            }
        }
        true
    }
}

/// Apply the reduction to the main replica. `None` means the walk stops:
/// main has no record, or its record is already empty.
fn reduce_main<M: Measure>(
    main: &mut Replica,
    point: Point,
    target: &Fixture,
    amount: M::Amount,
    behavior: CopyBehavior,
) -> Option<MainRecord> {
    let zero = M::Amount::default();
    let Some(found) = matching::find_counterpart(main, point, target) else {
        log::warn!(
            "reduce: main replica has no {} id={} at {point}; nothing propagated",
            target.category(),
            target.id()
        );
        return None;
    };
    let current = &main.fixtures_at(point)[found];
    let starting = M::amount(current)?;
    if !(starting > zero) {
        log::warn!("reduce: main id={} already has {} {starting}", target.id(), M::LABEL);
        return None;
    }

    let remaining = starting - amount;
    let record = if remaining > zero {
        let reduced = M::resized(current, remaining, behavior)?;
        main.replace_fixture(point, found, reduced.clone());
        log::info!("reduce: id={} {} {starting} -> {remaining}", target.id(), M::LABEL);
        MainRecord::Survived(reduced)
    } else {
        main.remove_fixture(point, found);
        log::info!("reduce: id={} exhausted; removing from every replica", target.id());
        MainRecord::Gone
    };
    main.mark_modified();
    Some(record)
}
