//! Gallery model: an ordered list of card configurations and the
//! independent machines created when the gallery mounts.

use std::time::Duration;

use crate::config::CardConfig;
use crate::machine::{CardMachine, ScheduledExpand, TimerTicket};

/// Ordered collection of card configurations
#[derive(Clone, PartialEq, Debug)]
pub struct Gallery<C> {
    cards: Vec<CardConfig<C>>,
}

impl<C> Default for Gallery<C> {
    fn default() -> Self {
        Self { cards: Vec::new() }
    }
}

impl<C> Gallery<C> {
    pub fn new(cards: Vec<CardConfig<C>>) -> Self {
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CardConfig<C>> {
        self.cards.iter()
    }

    /// Creates one fresh machine per card, in order.
    pub fn mount(&self, expand_delay: Duration) -> GalleryInstances {
        let machines = self
            .cards
            .iter()
            .map(|card| CardMachine::new(card.variant, expand_delay))
            .collect::<Vec<_>>();
        tracing::debug!(count = machines.len(), "mounted gallery");
        GalleryInstances { machines }
    }
}

impl<C> FromIterator<CardConfig<C>> for Gallery<C> {
    fn from_iter<I: IntoIterator<Item = CardConfig<C>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a, C> IntoIterator for &'a Gallery<C> {
    type Item = &'a CardConfig<C>;
    type IntoIter = std::slice::Iter<'a, CardConfig<C>>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

/// Machines of a mounted gallery. Events address one card by index and
/// never touch its siblings; out-of-range indices are ignored.
#[derive(Clone, PartialEq, Debug)]
pub struct GalleryInstances {
    machines: Vec<CardMachine>,
}

impl GalleryInstances {
    pub fn len(&self) -> usize {
        self.machines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.machines.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&CardMachine> {
        self.machines.get(index)
    }

    pub fn machines(&self) -> &[CardMachine] {
        &self.machines
    }

    pub fn enter(&mut self, index: usize) -> Option<ScheduledExpand> {
        self.machines.get_mut(index)?.pointer_enter()
    }

    pub fn leave(&mut self, index: usize) -> Option<TimerTicket> {
        self.machines.get_mut(index)?.pointer_leave()
    }

    pub fn fire(&mut self, index: usize, ticket: TimerTicket) -> bool {
        self.machines
            .get_mut(index)
            .is_some_and(|machine| machine.timer_fired(ticket))
    }

    /// Disposes every machine, returning the tickets that were still pending.
    pub fn unmount(&mut self) -> Vec<TimerTicket> {
        self.machines
            .iter_mut()
            .filter_map(CardMachine::dispose)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Variant;
    use crate::machine::Pose;

    #[test]
    fn empty_gallery_mounts_nothing() {
        let gallery: Gallery<String> = Gallery::default();
        assert!(gallery.is_empty());
        assert!(gallery.mount(Duration::from_millis(100)).is_empty());
    }

    #[test]
    fn out_of_range_events_are_ignored() {
        let gallery: Gallery<&str> = [CardConfig::new("a")].into_iter().collect();
        let mut instances = gallery.mount(Duration::from_millis(100));
        assert!(instances.enter(5).is_none());
        assert!(instances.leave(5).is_none());
        assert_eq!(instances.get(0).unwrap().pose(), Pose::Rest);
    }

    #[test]
    fn unmount_reports_pending_tickets() {
        let gallery: Gallery<&str> = vec![
            CardConfig::new("a").variant(Variant::Expand),
            CardConfig::new("b").variant(Variant::Flip),
            CardConfig::new("c").variant(Variant::Expand),
        ]
        .into_iter()
        .collect();
        let mut instances = gallery.mount(Duration::from_millis(100));
        let first = instances.enter(0).unwrap();
        instances.enter(1);
        let pending = instances.unmount();
        assert_eq!(pending, vec![first.ticket]);
        assert!(instances.machines().iter().all(CardMachine::is_disposed));
    }
}
