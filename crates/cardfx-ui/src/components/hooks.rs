//! Card Machine Hook
//!
//! Owns a card's [`CardMachine`] and the timer task behind the delayed
//! expand. The task is cancelled on pointer-leave, on re-entry and when
//! the component unmounts.

use std::time::Duration;

use cardfx_core::{CardMachine, InteractionState, Pose, ScheduledExpand, Variant};
use dioxus::prelude::*;

/// Handle returned by [`use_card_machine`]
#[derive(Clone, Copy, PartialEq)]
pub struct CardHandle {
    machine: Signal<CardMachine>,
    timer: Signal<Option<Task>>,
}

impl CardHandle {
    pub fn state(&self) -> InteractionState {
        self.machine.read().state()
    }

    pub fn pose(&self) -> Pose {
        self.machine.read().pose()
    }

    /// Pointer entered the card root
    pub fn enter(&mut self) {
        let scheduled = self.machine.write().pointer_enter();
        if let Some(scheduled) = scheduled {
            self.cancel_timer();
            let task = self.schedule(scheduled);
            self.timer.set(Some(task));
        }
    }

    /// Pointer left the card root
    pub fn leave(&mut self) {
        self.cancel_timer();
        self.machine.write().pointer_leave();
    }

    fn schedule(&self, scheduled: ScheduledExpand) -> Task {
        let mut machine = self.machine;
        let mut timer = self.timer;
        spawn(async move {
            tokio::time::sleep(scheduled.delay).await;
            timer.set(None);
            if machine.write().timer_fired(scheduled.ticket) {
                tracing::debug!(ticket = scheduled.ticket.id(), "card expanded");
            }
        })
    }

    fn cancel_timer(&mut self) {
        if let Some(task) = self.timer.write().take() {
            task.cancel();
        }
    }
}

/// Creates the hover state machine for one card instance.
///
/// # Example
///
/// ```rust,ignore
/// let mut card = use_card_machine(Variant::Expand, tokens.expand_delay());
///
/// rsx! {
///     div {
///         onmouseenter: move |_| card.enter(),
///         onmouseleave: move |_| card.leave(),
///         if card.pose() == Pose::Active { "expanded" } else { "compact" }
///     }
/// }
/// ```
pub fn use_card_machine(variant: Variant, expand_delay: Duration) -> CardHandle {
    let mut machine = use_signal(|| CardMachine::new(variant, expand_delay));
    let mut timer: Signal<Option<Task>> = use_signal(|| None);

    use_drop(move || {
        if let Ok(mut machine) = machine.try_write() {
            if let Some(ticket) = machine.dispose() {
                tracing::debug!(ticket = ticket.id(), "card unmounted with pending expand");
            }
        }
        if let Ok(mut timer) = timer.try_write() {
            if let Some(task) = timer.take() {
                task.cancel();
            }
        }
    });

    CardHandle { machine, timer }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(100);

    #[allow(non_snake_case)]
    fn ExpandHarness() -> Element {
        let card = use_card_machine(Variant::Expand, DELAY);
        use_context_provider(|| card);
        rsx! { div {} }
    }

    fn mount() -> VirtualDom {
        let mut dom = VirtualDom::new(ExpandHarness);
        dom.rebuild_in_place();
        dom
    }

    /// Runs `f` against the harness card inside the app scope.
    fn with_card<R>(dom: &VirtualDom, f: impl FnOnce(&mut CardHandle) -> R) -> R {
        dom.runtime().on_scope(ScopeId::APP, || {
            let mut card = consume_context::<CardHandle>();
            f(&mut card)
        })
    }

    /// Polls spawned tasks until `window` of (paused) time has passed.
    async fn run_for(dom: &mut VirtualDom, window: Duration) {
        let _ = tokio::time::timeout(window, async {
            loop {
                dom.wait_for_work().await;
                let _ = dom.render_immediate_to_vec();
            }
        })
        .await;
    }

    #[tokio::test(start_paused = true)]
    async fn expands_after_delay() {
        let mut dom = mount();
        with_card(&dom, |card| card.enter());

        let state = with_card(&dom, |card| card.state());
        assert!(state.is_hovered);
        assert!(!state.is_expanded);

        run_for(&mut dom, DELAY * 3).await;
        assert_eq!(with_card(&dom, |card| card.pose()), Pose::Active);
    }

    #[tokio::test(start_paused = true)]
    async fn leave_before_delay_stays_at_rest() {
        let mut dom = mount();
        with_card(&dom, |card| card.enter());
        run_for(&mut dom, DELAY / 4).await;
        with_card(&dom, |card| card.leave());

        run_for(&mut dom, DELAY * 3).await;
        assert_eq!(with_card(&dom, |card| card.state()), InteractionState::default());
    }

    #[tokio::test(start_paused = true)]
    async fn reentry_keeps_single_timer() {
        let mut dom = mount();
        with_card(&dom, |card| {
            card.enter();
            card.leave();
            card.enter();
        });

        run_for(&mut dom, DELAY * 3).await;
        let state = with_card(&dom, |card| card.state());
        assert!(state.is_expanded);
        assert!(state.is_hovered);
    }

    #[tokio::test(start_paused = true)]
    async fn unmount_with_pending_expand_is_quiet() {
        let dom = mount();
        with_card(&dom, |card| card.enter());
        drop(dom);

        tokio::time::sleep(DELAY * 3).await;
    }
}
