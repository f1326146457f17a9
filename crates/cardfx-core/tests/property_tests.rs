//! Property-based tests for the card state machine
//!
//! Uses proptest to drive arbitrary pointer/timer event sequences and check
//! that the pose always follows the last pointer event.

use std::time::Duration;

use cardfx_core::{CardConfig, CardMachine, Gallery, Pose, TimerTicket, Variant};
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

#[derive(Debug, Clone)]
enum Event {
    Enter,
    Leave,
    /// Fire the n-th ticket ever issued (may be stale or unknown)
    Fire(usize),
}

fn variant_strategy() -> impl Strategy<Value = Variant> {
    prop_oneof![
        Just(Variant::Flip),
        Just(Variant::Expand),
        Just(Variant::Layered),
    ]
}

fn events_strategy(max: usize) -> impl Strategy<Value = Vec<Event>> {
    prop::collection::vec(
        prop_oneof![
            3 => Just(Event::Enter),
            2 => Just(Event::Leave),
            2 => (0..8usize).prop_map(Event::Fire),
        ],
        0..max,
    )
}

/// Applies events, returning every ticket the machine issued.
fn run(machine: &mut CardMachine, events: &[Event]) -> Vec<TimerTicket> {
    let mut issued = Vec::new();
    for event in events {
        match event {
            Event::Enter => {
                if let Some(scheduled) = machine.pointer_enter() {
                    issued.push(scheduled.ticket);
                }
            }
            Event::Leave => {
                machine.pointer_leave();
            }
            Event::Fire(n) => {
                if let Some(ticket) = issued.get(*n) {
                    machine.timer_fired(*ticket);
                }
            }
        }
    }
    issued
}

fn delay() -> Duration {
    Duration::from_millis(100)
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Leaving always lands at Rest, whatever came before
    #[test]
    fn leave_always_rests(variant in variant_strategy(), events in events_strategy(40)) {
        let mut machine = CardMachine::new(variant, delay());
        run(&mut machine, &events);
        machine.pointer_leave();
        prop_assert_eq!(machine.pose(), Pose::Rest);
        prop_assert!(machine.pending().is_none());
    }

    /// Immediate variants are Active exactly when the last pointer event was an enter
    #[test]
    fn immediate_variants_follow_pointer(
        variant in prop_oneof![Just(Variant::Flip), Just(Variant::Layered)],
        events in events_strategy(40),
    ) {
        let mut machine = CardMachine::new(variant, delay());
        run(&mut machine, &events);

        let last_pointer = events.iter().rev().find(|e| !matches!(e, Event::Fire(_)));
        let expected = match last_pointer {
            Some(Event::Enter) => Pose::Active,
            _ => Pose::Rest,
        };
        prop_assert_eq!(machine.pose(), expected);
    }

    /// An expand card is only ever expanded while hovered
    #[test]
    fn expanded_implies_hovered(events in events_strategy(60)) {
        let mut machine = CardMachine::new(Variant::Expand, delay());
        for event in &events {
            run(&mut machine, std::slice::from_ref(event));
            let state = machine.state();
            prop_assert!(!state.is_expanded || state.is_hovered);
        }
    }

    /// Only the latest outstanding ticket can complete an expansion
    #[test]
    fn only_pending_ticket_expands(events in events_strategy(40)) {
        let mut machine = CardMachine::new(Variant::Expand, delay());
        let issued = run(&mut machine, &events);
        let pending = machine.pending();

        for ticket in issued.iter().filter(|t| Some(**t) != pending) {
            let before = machine.state();
            prop_assert!(!machine.timer_fired(*ticket));
            prop_assert_eq!(machine.state(), before);
        }
    }

    /// Nothing mutates a disposed machine
    #[test]
    fn disposed_machine_is_frozen(
        variant in variant_strategy(),
        before in events_strategy(20),
        after in events_strategy(20),
    ) {
        let mut machine = CardMachine::new(variant, delay());
        let mut issued = run(&mut machine, &before);
        machine.dispose();
        let frozen = machine.state();

        run(&mut machine, &after);
        for ticket in issued.drain(..) {
            machine.timer_fired(ticket);
        }
        prop_assert_eq!(machine.state(), frozen);
    }

    /// Events on one gallery card never change another card's state
    #[test]
    fn gallery_cards_are_independent(
        variants in prop::collection::vec(variant_strategy(), 1..6),
        target in 0..6usize,
        events in events_strategy(30),
    ) {
        let gallery: Gallery<()> = variants
            .iter()
            .map(|v| CardConfig::new(()).variant(*v))
            .collect();
        let mut instances = gallery.mount(delay());
        let target = target % instances.len();
        let untouched: Vec<_> = instances.machines().to_vec();

        let mut issued = Vec::new();
        for event in &events {
            match event {
                Event::Enter => {
                    if let Some(s) = instances.enter(target) {
                        issued.push(s.ticket);
                    }
                }
                Event::Leave => {
                    instances.leave(target);
                }
                Event::Fire(n) => {
                    if let Some(ticket) = issued.get(*n) {
                        instances.fire(target, *ticket);
                    }
                }
            }
        }

        for (i, machine) in instances.machines().iter().enumerate() {
            if i != target {
                prop_assert_eq!(machine, &untouched[i]);
            }
        }
    }
}
