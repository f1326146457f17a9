//! Hover state machine for a single mounted card.
//!
//! Every variant has two poses, [`Pose::Rest`] and [`Pose::Active`], driven
//! by pointer-enter and pointer-leave. Flip and Layered switch immediately.
//! Expand applies its hover styling immediately but defers the size change
//! behind a cancellable timer: the machine hands out a [`TimerTicket`] and
//! only the latest outstanding ticket may complete the expansion.
//!
//! The machine never sleeps or spawns anything itself. The host schedules
//! [`ScheduledExpand`] however it likes and reports back through
//! [`CardMachine::timer_fired`].

use std::time::Duration;

use crate::config::Variant;

/// Per-instance mutable interaction flags
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct InteractionState {
    /// Drives geometry for [`Variant::Flip`]
    pub is_flipped: bool,
    /// Drives geometry for [`Variant::Expand`]
    pub is_expanded: bool,
    /// Drives geometry for [`Variant::Layered`], styling for [`Variant::Expand`]
    pub is_hovered: bool,
}

/// Visible pose of a card
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Pose {
    #[default]
    Rest,
    Active,
}

/// Identifies one scheduled expand
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, PartialOrd, Ord)]
pub struct TimerTicket(u64);

impl TimerTicket {
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Deferred expansion the host must schedule
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ScheduledExpand {
    pub ticket: TimerTicket,
    pub delay: Duration,
    /// Earlier ticket this one replaces, if any
    pub superseded: Option<TimerTicket>,
}

/// How a variant reaches its Active pose
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TransitionPolicy {
    /// Pose follows the pointer without delay
    Immediate,
    /// Hover styling is immediate, the Active pose lags by `delay`.
    /// Leaving is always immediate.
    Deferred { delay: Duration },
}

impl TransitionPolicy {
    pub fn for_variant(variant: Variant, expand_delay: Duration) -> Self {
        match variant {
            Variant::Flip | Variant::Layered => TransitionPolicy::Immediate,
            Variant::Expand => TransitionPolicy::Deferred {
                delay: expand_delay,
            },
        }
    }
}

/// State machine owned by exactly one card instance
#[derive(Clone, PartialEq, Debug)]
pub struct CardMachine {
    variant: Variant,
    policy: TransitionPolicy,
    state: InteractionState,
    pending: Option<TimerTicket>,
    next_ticket: u64,
    disposed: bool,
}

impl CardMachine {
    pub fn new(variant: Variant, expand_delay: Duration) -> Self {
        Self {
            variant,
            policy: TransitionPolicy::for_variant(variant, expand_delay),
            state: InteractionState::default(),
            pending: None,
            next_ticket: 0,
            disposed: false,
        }
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn policy(&self) -> TransitionPolicy {
        self.policy
    }

    pub fn state(&self) -> InteractionState {
        self.state
    }

    pub fn pending(&self) -> Option<TimerTicket> {
        self.pending
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub fn pose(&self) -> Pose {
        let active = match self.variant {
            Variant::Flip => self.state.is_flipped,
            Variant::Expand => self.state.is_expanded,
            Variant::Layered => self.state.is_hovered,
        };
        if active {
            Pose::Active
        } else {
            Pose::Rest
        }
    }

    /// Handles pointer-enter on the card root.
    ///
    /// Returns a deferred expansion to schedule when the variant uses
    /// [`TransitionPolicy::Deferred`] and the card is not already expanded.
    pub fn pointer_enter(&mut self) -> Option<ScheduledExpand> {
        if self.disposed {
            return None;
        }

        match (self.variant, self.policy) {
            (_, TransitionPolicy::Deferred { delay }) => {
                self.state.is_hovered = true;
                if self.state.is_expanded {
                    return None;
                }
                let superseded = self.pending.take();
                let ticket = TimerTicket(self.next_ticket);
                self.next_ticket += 1;
                self.pending = Some(ticket);
                tracing::debug!(
                    ticket = ticket.id(),
                    superseded = ?superseded.map(|t| t.id()),
                    delay_ms = delay.as_millis() as u64,
                    "scheduling expand"
                );
                Some(ScheduledExpand {
                    ticket,
                    delay,
                    superseded,
                })
            }
            (Variant::Flip, TransitionPolicy::Immediate) => {
                self.state.is_flipped = true;
                None
            }
            (_, TransitionPolicy::Immediate) => {
                self.state.is_hovered = true;
                None
            }
        }
    }

    /// Handles pointer-leave on the card root.
    ///
    /// Collapses immediately and returns the pending ticket it cancelled.
    pub fn pointer_leave(&mut self) -> Option<TimerTicket> {
        if self.disposed {
            return None;
        }

        match self.variant {
            Variant::Flip => self.state.is_flipped = false,
            Variant::Expand => {
                self.state.is_expanded = false;
                self.state.is_hovered = false;
            }
            Variant::Layered => self.state.is_hovered = false,
        }

        let cancelled = self.pending.take();
        if let Some(ticket) = cancelled {
            tracing::debug!(ticket = ticket.id(), "cancelled pending expand");
        }
        cancelled
    }

    /// Completes a deferred expansion.
    ///
    /// Returns `false` without touching state when the ticket is stale,
    /// was cancelled, or the machine has been disposed.
    pub fn timer_fired(&mut self, ticket: TimerTicket) -> bool {
        if self.disposed || self.pending != Some(ticket) {
            tracing::debug!(ticket = ticket.id(), "ignoring stale expand timer");
            return false;
        }
        self.pending = None;
        self.state.is_expanded = true;
        true
    }

    /// Tears the machine down on unmount. All later events are ignored.
    pub fn dispose(&mut self) -> Option<TimerTicket> {
        self.disposed = true;
        self.pending.take()
    }
}
