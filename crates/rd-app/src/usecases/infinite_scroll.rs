//! Bridges scroll observations from a list view to a load callback.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::trace;

use rd_core::ports::ClockPort;
use rd_core::scroll::{ScrollDecision, ScrollPosition, ScrollTriggerPolicy};

use super::page_loader::IncrementalPageLoader;

type TriggerFn = Box<dyn Fn() + Send + Sync>;

/// Fires `on_trigger` when the viewport comes close enough to the end of
/// the content, at most once per approach.
pub struct InfiniteScrollTrigger {
    policy: Mutex<ScrollTriggerPolicy>,
    clock: Arc<dyn ClockPort>,
    on_trigger: TriggerFn,
}

impl InfiniteScrollTrigger {
    pub fn new<F>(policy: ScrollTriggerPolicy, clock: Arc<dyn ClockPort>, on_trigger: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        Self {
            policy: Mutex::new(policy),
            clock,
            on_trigger: Box::new(on_trigger),
        }
    }

    /// Feeds one scroll observation. The callback runs outside the policy
    /// lock, so it may call back into this trigger.
    pub fn on_scroll(
        &self,
        position: ScrollPosition,
        has_more: bool,
        is_loading: bool,
    ) -> ScrollDecision {
        let now_ms = self.clock.now_ms();
        let decision = self
            .policy()
            .evaluate(position, has_more, is_loading, now_ms);

        trace!(
            remaining = position.remaining(),
            has_more,
            is_loading,
            ?decision,
            "scroll observed"
        );
        if decision.should_fire() {
            (self.on_trigger)();
        }
        decision
    }

    pub fn reset(&self) {
        self.policy().reset();
    }

    fn policy(&self) -> MutexGuard<'_, ScrollTriggerPolicy> {
        self.policy.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// An [`InfiniteScrollTrigger`] wired to an [`IncrementalPageLoader`].
///
/// `has_more` and `is_loading` come from the loader itself; a fire spawns
/// `load_more` on the current tokio runtime. Once the loader is unmounted
/// the binding reports nothing more to load and never fires.
pub struct LoaderScrollBinding<T: Send> {
    loader: Arc<IncrementalPageLoader<T>>,
    trigger: InfiniteScrollTrigger,
}

impl<T> LoaderScrollBinding<T>
where
    T: Clone + Send + Sync + 'static,
{
    pub fn new(
        loader: Arc<IncrementalPageLoader<T>>,
        policy: ScrollTriggerPolicy,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        let target = Arc::clone(&loader);
        let trigger = InfiniteScrollTrigger::new(policy, clock, move || {
            drop(target.spawn_load_more());
        });
        Self { loader, trigger }
    }

    pub fn on_scroll(&self, position: ScrollPosition) -> ScrollDecision {
        if !self.loader.is_active() {
            return self.trigger.on_scroll(position, false, false);
        }
        let phase = self.loader.phase();
        self.trigger
            .on_scroll(position, !phase.is_exhausted(), phase.is_loading())
    }

    /// Resets the loader and forgets scroll history together.
    pub fn reset(&self) {
        self.loader.reset();
        self.trigger.reset();
    }

    pub fn loader(&self) -> &Arc<IncrementalPageLoader<T>> {
        &self.loader
    }
}
