//! Recording unit orders and results across replicas.

use crate::{
    matching,
    model::{Fixture, Unit},
    replica::ReplicaSet,
    types::Turn,
};

impl ReplicaSet {
    /// Set `unit`'s orders for `turn` in every replica that has the unit.
    pub fn set_orders(&mut self, unit: &Unit, turn: Turn, text: &str) -> bool {
        self.edit_unit(unit, |u| u.set_orders(turn, text))
    }

    /// Set `unit`'s results for `turn` in every replica that has the unit.
    pub fn set_results(&mut self, unit: &Unit, turn: Turn, text: &str) -> bool {
        self.edit_unit(unit, |u| u.set_results(turn, text))
    }

    fn edit_unit<F: FnMut(&mut Unit)>(&mut self, unit: &Unit, mut edit: F) -> bool {
        let mut any = false;
        for (index, replica) in self.iter_mut().enumerate() {
            let Some(path) = matching::find_unit(replica, unit) else { continue };
            if let Some(Fixture::Unit(found)) = replica.fixture_at_path_mut(&path) {
                edit(found);
                replica.mark_modified();
                any = true;
                log::debug!("orders: replica={index} updated unit {} (id={})", unit.name, unit.id);
            }
        }
        any
    }
}
