//! Simulated async-action state machine.
//!
//! Every "remote" operation in the product (connect an integration, analyze
//! code, export data, delete the account, invite a member, ...) is a mock:
//! a pending state, a fixed delay, then a predetermined terminal state. This
//! module owns the state machine; actually sleeping and delivering the
//! completion is the runtime's job, via the [`ScheduledCompletion`] handoff.
//!
//! The only legal transition path is
//! `Idle -> Pending -> {Succeeded, Failed} -> Idle` (re-armable). Triggering
//! while pending is a no-op, and completions are validated against a
//! generation counter so a timer that outlives its owner mutates nothing.

use std::time::{Duration, Instant};

/// Lifecycle status of a simulated action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActionStatus {
    /// Armed and waiting for a trigger.
    #[default]
    Idle,
    /// Timer in flight; the owning button must disable/spin immediately.
    Pending,
    /// Terminal: the simulated operation reported success.
    Succeeded,
    /// Terminal: the simulated operation reported failure (retry affordance).
    Failed,
}

impl ActionStatus {
    pub fn is_pending(&self) -> bool {
        matches!(self, ActionStatus::Pending)
    }

    /// `Succeeded` or `Failed`.
    pub fn is_terminal(&self) -> bool {
        matches!(self, ActionStatus::Succeeded | ActionStatus::Failed)
    }
}

/// Predetermined outcome of a simulated operation.
///
/// The shipped mock flows hard-code `Succeeded`, but the contract carries
/// both so a real backend can map errors to `Failed` without touching the
/// state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    Succeeded,
    Failed,
}

impl ActionOutcome {
    /// The terminal status this outcome lands on.
    pub fn status(&self) -> ActionStatus {
        match self {
            ActionOutcome::Succeeded => ActionStatus::Succeeded,
            ActionOutcome::Failed => ActionStatus::Failed,
        }
    }
}

/// Timer handoff produced by a successful [`AsyncAction::trigger`].
///
/// The runtime sleeps for `delay`, then calls
/// [`AsyncAction::complete`] with the carried generation. Exactly one
/// completion is produced per trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledCompletion {
    /// Generation the completion must match to take effect.
    pub generation: u64,
    /// How long the simulated operation takes.
    pub delay: Duration,
    /// Predetermined terminal outcome.
    pub outcome: ActionOutcome,
}

/// One simulated long-running operation.
///
/// Each call site owns its own instance; there is no shared action registry.
#[derive(Debug, Clone, Default)]
pub struct AsyncAction {
    status: ActionStatus,
    started_at: Option<Instant>,
    payload: Option<String>,
    /// Bumped on every trigger and on invalidation. Completions carrying a
    /// stale generation are dropped, which is the dangling-timer guard.
    generation: u64,
}

impl AsyncAction {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> ActionStatus {
        self.status
    }

    pub fn started_at(&self) -> Option<Instant> {
        self.started_at
    }

    /// Opaque result payload from the last completion.
    pub fn payload(&self) -> Option<&str> {
        self.payload.as_deref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_pending(&self) -> bool {
        self.status.is_pending()
    }

    /// Arm the simulated operation.
    ///
    /// Synchronously moves to `Pending` (observable immediately) and returns
    /// the completion for the runtime to schedule. Returns `None` without
    /// any mutation when already pending: no duplicate timer, `started_at`
    /// untouched.
    pub fn trigger(
        &mut self,
        delay: Duration,
        outcome: ActionOutcome,
    ) -> Option<ScheduledCompletion> {
        if self.status.is_pending() {
            return None;
        }
        self.generation += 1;
        self.status = ActionStatus::Pending;
        self.started_at = Some(Instant::now());
        self.payload = None;
        Some(ScheduledCompletion {
            generation: self.generation,
            delay,
            outcome,
        })
    }

    /// Deliver a completion.
    ///
    /// Takes effect only while pending and only when `generation` matches
    /// the trigger that scheduled it; anything else is a silent no-op (the
    /// owning view may have been torn down or re-armed since).
    pub fn complete(
        &mut self,
        generation: u64,
        outcome: ActionOutcome,
        payload: Option<String>,
    ) -> bool {
        if !self.status.is_pending() || generation != self.generation {
            return false;
        }
        self.status = outcome.status();
        self.payload = payload;
        true
    }

    /// Return to `Idle`, discarding the payload.
    ///
    /// Rejected while pending: the in-flight timer must land first (or be
    /// invalidated). Returns whether the reset happened.
    pub fn reset(&mut self) -> bool {
        if self.status.is_pending() {
            return false;
        }
        self.status = ActionStatus::Idle;
        self.started_at = None;
        self.payload = None;
        true
    }

    /// Owner teardown: drop back to `Idle` and bump the generation so any
    /// in-flight completion goes stale.
    pub fn invalidate(&mut self) {
        self.generation += 1;
        self.status = ActionStatus::Idle;
        self.started_at = None;
        self.payload = None;
    }

    /// Time since the current/last trigger.
    pub fn elapsed(&self) -> Option<Duration> {
        self.started_at.map(|t| t.elapsed())
    }

    /// Fraction of `total` elapsed since trigger, clamped to `0.0..=1.0`.
    /// Drives the export progress bar.
    pub fn progress(&self, total: Duration) -> f64 {
        if total.is_zero() {
            return if self.status.is_terminal() { 1.0 } else { 0.0 };
        }
        match self.status {
            ActionStatus::Idle => 0.0,
            ActionStatus::Succeeded | ActionStatus::Failed => 1.0,
            ActionStatus::Pending => self
                .elapsed()
                .map(|e| (e.as_secs_f64() / total.as_secs_f64()).min(1.0))
                .unwrap_or(0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(2000);

    #[test]
    fn test_trigger_sets_pending_synchronously() {
        let mut action = AsyncAction::new();
        assert_eq!(action.status(), ActionStatus::Idle);

        let scheduled = action.trigger(DELAY, ActionOutcome::Succeeded);
        assert_eq!(action.status(), ActionStatus::Pending);
        assert!(action.started_at().is_some());

        let scheduled = scheduled.expect("first trigger schedules a completion");
        assert_eq!(scheduled.delay, DELAY);
        assert_eq!(scheduled.outcome, ActionOutcome::Succeeded);
    }

    #[test]
    fn test_trigger_while_pending_is_noop() {
        let mut action = AsyncAction::new();
        action.trigger(DELAY, ActionOutcome::Succeeded).unwrap();
        let started = action.started_at();
        let generation = action.generation();

        // Second trigger: no new timer, no state change.
        assert!(action.trigger(DELAY, ActionOutcome::Failed).is_none());
        assert_eq!(action.status(), ActionStatus::Pending);
        assert_eq!(action.started_at(), started);
        assert_eq!(action.generation(), generation);
    }

    #[test]
    fn test_completion_reaches_terminal_state() {
        let mut action = AsyncAction::new();
        let scheduled = action.trigger(DELAY, ActionOutcome::Succeeded).unwrap();

        assert!(action.complete(
            scheduled.generation,
            scheduled.outcome,
            Some("Connected".to_string()),
        ));
        assert_eq!(action.status(), ActionStatus::Succeeded);
        assert_eq!(action.payload(), Some("Connected"));
    }

    #[test]
    fn test_failed_outcome() {
        let mut action = AsyncAction::new();
        let scheduled = action.trigger(DELAY, ActionOutcome::Failed).unwrap();
        action.complete(scheduled.generation, scheduled.outcome, None);
        assert_eq!(action.status(), ActionStatus::Failed);
        assert!(action.status().is_terminal());
    }

    #[test]
    fn test_stale_generation_completion_is_dropped() {
        let mut action = AsyncAction::new();
        let first = action.trigger(DELAY, ActionOutcome::Succeeded).unwrap();

        // Owner torn down: timer is still in flight.
        action.invalidate();
        assert!(!action.complete(first.generation, first.outcome, Some("late".into())));
        assert_eq!(action.status(), ActionStatus::Idle);
        assert_eq!(action.payload(), None);
    }

    #[test]
    fn test_stale_completion_after_rearm_is_dropped() {
        let mut action = AsyncAction::new();
        let first = action.trigger(DELAY, ActionOutcome::Succeeded).unwrap();
        action.complete(first.generation, first.outcome, None);
        action.reset();

        let second = action.trigger(DELAY, ActionOutcome::Succeeded).unwrap();
        // A duplicate delivery of the first completion must not complete
        // the second trigger.
        assert!(!action.complete(first.generation, first.outcome, None));
        assert_eq!(action.status(), ActionStatus::Pending);
        assert!(action.complete(second.generation, second.outcome, None));
    }

    #[test]
    fn test_reset_rejected_while_pending() {
        let mut action = AsyncAction::new();
        action.trigger(DELAY, ActionOutcome::Succeeded).unwrap();
        assert!(!action.reset());
        assert_eq!(action.status(), ActionStatus::Pending);
    }

    #[test]
    fn test_reset_from_terminal_states() {
        let mut action = AsyncAction::new();
        let scheduled = action.trigger(DELAY, ActionOutcome::Succeeded).unwrap();
        action.complete(scheduled.generation, scheduled.outcome, Some("ok".into()));

        assert!(action.reset());
        assert_eq!(action.status(), ActionStatus::Idle);
        assert_eq!(action.payload(), None);
        assert_eq!(action.started_at(), None);

        let scheduled = action.trigger(DELAY, ActionOutcome::Failed).unwrap();
        action.complete(scheduled.generation, scheduled.outcome, None);
        assert!(action.reset());
        assert_eq!(action.status(), ActionStatus::Idle);
    }

    #[test]
    fn test_rearm_after_reset() {
        let mut action = AsyncAction::new();
        let first = action.trigger(DELAY, ActionOutcome::Succeeded).unwrap();
        action.complete(first.generation, first.outcome, None);
        action.reset();

        let second = action.trigger(DELAY, ActionOutcome::Succeeded).unwrap();
        assert!(second.generation > first.generation);
        assert_eq!(action.status(), ActionStatus::Pending);
    }

    #[test]
    fn test_progress_clamps() {
        let mut action = AsyncAction::new();
        assert_eq!(action.progress(Duration::from_secs(5)), 0.0);

        action.trigger(Duration::from_secs(5), ActionOutcome::Succeeded);
        let p = action.progress(Duration::from_secs(5));
        assert!((0.0..=1.0).contains(&p));

        let scheduled = ScheduledCompletion {
            generation: action.generation(),
            delay: Duration::from_secs(5),
            outcome: ActionOutcome::Succeeded,
        };
        action.complete(scheduled.generation, scheduled.outcome, None);
        assert_eq!(action.progress(Duration::from_secs(5)), 1.0);
    }
}
