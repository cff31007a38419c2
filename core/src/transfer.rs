//! Resource transfer engine, plus the other operations that move things
//! into or out of containers across replicas.
//!
//! Each replica is handled independently: there is no pass-order
//! dependency here, only per-replica matching.

use crate::{
    container::Container,
    error::{SyncError, SyncResult},
    ids::OnceId,
    matching,
    model::{Animal, CopyBehavior, Fixture, ResourcePile},
    replica::{Replica, ReplicaSet},
    types::FixtureId,
};

impl ReplicaSet {
    /// Move `quantity` of `pile` into `destination` in every replica that
    /// has both the destination and a copy of the pile held by a container
    /// belonging to the destination's owner.
    ///
    /// Asking for at least the whole pile moves the pile itself (same ID).
    /// Asking for less splits it: the split-off pile gets an ID from
    /// `id_source`, requested at most once for the whole operation so
    /// every replica agrees on it.
    ///
    /// `destination` must be a unit or fortress.
    pub fn transfer<F>(
        &mut self,
        pile: &ResourcePile,
        destination: &Fixture,
        quantity: f64,
        id_source: F,
    ) -> SyncResult<bool>
    where
        F: FnMut() -> FixtureId,
    {
        let destination = destination.as_container()?;
        if !(quantity > 0.0) {
            log::warn!("transfer: ignoring non-positive quantity {quantity} of pile id={}", pile.id);
            return Ok(false);
        }
        let owner_id = destination.owner().id;
        let mut split_id = OnceId::new(id_source);
        let mut any = false;

        for (index, replica) in self.iter_mut().enumerate() {
            if transfer_in(replica, pile, destination, owner_id, quantity, &mut split_id)? {
                replica.mark_modified();
                any = true;
                log::debug!("transfer: replica={index} pile id={} -> {}", pile.id, destination.name());
            }
        }
        if any {
            log::info!(
                "transfer: {quantity} {} of {} (id={}) to {} id={}",
                pile.quantity.units,
                pile.contents,
                pile.id,
                destination.category(),
                destination.id()
            );
        }
        Ok(any)
    }

    /// Add a copy of `pile` to every replica's copy of `container`.
    pub fn add_resource(&mut self, container: &Fixture, pile: &ResourcePile) -> SyncResult<bool> {
        self.add_to_matching(container, &Fixture::ResourcePile(pile.clone()))
    }

    /// Add a copy of `animal` to every replica's copy of `container`.
    pub fn add_animal(&mut self, container: &Fixture, animal: &Animal) -> SyncResult<bool> {
        self.add_to_matching(container, &Fixture::Animal(animal.clone()))
    }

    /// Remove the member with ID `member_id` from every replica's copy of
    /// `container`.
    pub fn dismiss_member(&mut self, container: &Fixture, member_id: FixtureId) -> SyncResult<bool> {
        let target = container.as_container()?;
        let mut any = false;
        for (index, replica) in self.iter_mut().enumerate() {
            let Some(path) = matching::find_container(replica, target) else { continue };
            let Some(found) = replica.container_mut(&path) else { continue };
            let Some(position) = found.members().iter().position(|m| m.id() == member_id) else {
                continue;
            };
            found.remove_member(position);
            replica.mark_modified();
            any = true;
            log::debug!("dismiss: replica={index} id={member_id} from {}", target.name());
        }
        Ok(any)
    }

    fn add_to_matching(&mut self, container: &Fixture, member: &Fixture) -> SyncResult<bool> {
        let target = container.as_container()?;
        let mut any = false;
        for (index, replica) in self.iter_mut().enumerate() {
            let Some(path) = matching::find_container(replica, target) else { continue };
            let Some(found) = replica.container_mut(&path) else { continue };
            found.add_member(member.copy(CopyBehavior::Keep));
            replica.mark_modified();
            any = true;
            log::debug!(
                "add: replica={index} {} id={} into {}",
                member.category(),
                member.id(),
                target.name()
            );
        }
        Ok(any)
    }
}

/// One replica's share of a transfer. Returns whether it changed.
fn transfer_in<F>(
    replica: &mut Replica,
    pile: &ResourcePile,
    destination: &dyn Container,
    owner_id: i32,
    quantity: f64,
    split_id: &mut OnceId<F>,
) -> SyncResult<bool>
where
    F: FnMut() -> FixtureId,
{
    if matching::find_container(replica, destination).is_none() {
        return Ok(false);
    }
    let Some(source) = matching::find_owned_pile(replica, owner_id, pile) else {
        return Ok(false);
    };
    let Some(container) = replica.container_mut(&source.container) else {
        return Ok(false);
    };
    let Some(Fixture::ResourcePile(current)) = container.members().get(source.index).cloned() else {
        return Ok(false);
    };

    if quantity >= current.quantity.number {
        // Removing from an enclosing fortress shifts member indices, so
        // the destination is looked up again afterwards.
        let Some(moved) = container.remove_member(source.index) else { return Ok(false) };
        let target = relocate(replica, destination)?;
        target.add_member(moved);
    } else {
        let split = current.split_off(split_id.get(), quantity);
        let remaining = current.with_amount(current.quantity.number - quantity);
        container.replace_member(source.index, Fixture::ResourcePile(remaining));
        let target = relocate(replica, destination)?;
        target.add_member(Fixture::ResourcePile(split));
    }
    Ok(true)
}

/// Find the destination again after the source container changed.
fn relocate<'r>(replica: &'r mut Replica, destination: &dyn Container) -> SyncResult<&'r mut dyn Container> {
    let lost = || {
        SyncError::Other(anyhow::anyhow!(
            "{} id={} disappeared mid-transfer",
            destination.category(),
            destination.id()
        ))
    };
    let path = matching::find_container(replica, destination).ok_or_else(lost)?;
    replica.container_mut(&path).ok_or_else(lost)
}
