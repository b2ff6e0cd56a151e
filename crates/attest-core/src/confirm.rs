//! # Confirmation Gate
//!
//! Transient state that intercepts destructive navigation and requires one
//! explicit user confirmation round-trip before the deferred action runs.
//!
//! ## Round-Trip
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Confirmation Round-Trip                              │
//! │                                                                         │
//! │  destructive intent ──► request(title, msg, action) ──► gate OPEN      │
//! │                                  (action stored,                        │
//! │                                   NOT executed)                         │
//! │                                        │                                │
//! │              ┌─────────────────────────┴──────────────────┐            │
//! │              ▼                                            ▼            │
//! │         confirm()                                    cancel()          │
//! │     takes the action out                        discards the action    │
//! │     exactly once, closes                        unrun, closes          │
//! │              │                                            │            │
//! │              └─────────────► gate CLOSED ◄────────────────┘            │
//! │                     (further confirm/cancel are no-ops)                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The gate never touches the quiz session - it is a deferred-invocation
//! wrapper, generic over the action type and reusable for any yes/no
//! confirmation regardless of which transition it guards. "Invoked exactly
//! once" falls out of move semantics: `confirm` hands the action out by
//! value and leaves nothing behind.

// =============================================================================
// Confirmation Gate
// =============================================================================

/// Holds at most one pending action awaiting user approval.
///
/// A new [`ConfirmationGate::request`] while one is already open overwrites
/// the previous request - last-request-wins, no queueing.
#[derive(Debug, Clone)]
pub struct ConfirmationGate<A> {
    title: String,
    message: String,
    pending: Option<A>,
}

impl<A> ConfirmationGate<A> {
    /// Creates a closed, empty gate.
    pub fn new() -> Self {
        ConfirmationGate {
            title: String::new(),
            message: String::new(),
            pending: None,
        }
    }

    /// Stores `action` and opens the gate. Does NOT execute the action.
    pub fn request(&mut self, title: impl Into<String>, message: impl Into<String>, action: A) {
        self.title = title.into();
        self.message = message.into();
        self.pending = Some(action);
    }

    /// Takes the pending action out exactly once and closes the gate.
    ///
    /// Returns None when the gate is already closed (idempotent close - a
    /// second `confirm` or a `confirm` after `cancel` is a no-op).
    pub fn confirm(&mut self) -> Option<A> {
        let action = self.pending.take();
        if action.is_some() {
            self.close();
        }
        action
    }

    /// Closes the gate and discards the pending action without invoking it.
    pub fn cancel(&mut self) {
        self.pending = None;
        self.close();
    }

    /// Whether a request is awaiting approval.
    #[inline]
    pub fn is_open(&self) -> bool {
        self.pending.is_some()
    }

    /// Dialog title of the open request (empty when closed).
    #[inline]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Dialog message of the open request (empty when closed).
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    fn close(&mut self) {
        self.title.clear();
        self.message.clear();
    }
}

impl<A> Default for ConfirmationGate<A> {
    fn default() -> Self {
        ConfirmationGate::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    use crate::session::PendingAction;

    #[test]
    fn test_request_opens_without_executing() {
        let calls = Rc::new(Cell::new(0u32));
        let counter = Rc::clone(&calls);

        let mut gate: ConfirmationGate<Box<dyn FnOnce()>> = ConfirmationGate::new();
        gate.request("Abort?", "Progress will be lost.", {
            Box::new(move || counter.set(counter.get() + 1))
        });

        assert!(gate.is_open());
        assert_eq!(gate.title(), "Abort?");
        assert_eq!(gate.message(), "Progress will be lost.");
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_confirm_yields_action_exactly_once() {
        let calls = Rc::new(Cell::new(0u32));
        let counter = Rc::clone(&calls);

        let mut gate: ConfirmationGate<Box<dyn FnOnce()>> = ConfirmationGate::new();
        gate.request("Abort?", "", Box::new(move || counter.set(counter.get() + 1)));

        if let Some(action) = gate.confirm() {
            action();
        }
        assert_eq!(calls.get(), 1);
        assert!(!gate.is_open());

        // Second confirm is a no-op on the closed gate
        assert!(gate.confirm().is_none());
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_cancel_discards_without_invoking() {
        let calls = Rc::new(Cell::new(0u32));
        let counter = Rc::clone(&calls);

        let mut gate: ConfirmationGate<Box<dyn FnOnce()>> = ConfirmationGate::new();
        gate.request("Abort?", "", Box::new(move || counter.set(counter.get() + 1)));

        gate.cancel();

        assert!(!gate.is_open());
        assert_eq!(calls.get(), 0);
        assert!(gate.confirm().is_none());
    }

    #[test]
    fn test_cancel_on_closed_gate_is_noop() {
        let mut gate: ConfirmationGate<PendingAction> = ConfirmationGate::new();
        gate.cancel();
        assert!(!gate.is_open());
    }

    #[test]
    fn test_second_request_overwrites_first() {
        let mut gate: ConfirmationGate<PendingAction> = ConfirmationGate::new();

        gate.request("Retry?", "Result will be reset.", PendingAction::RestartTopic);
        gate.request("Leave?", "Result will be reset.", PendingAction::ReturnToWelcome);

        // Only the second action is ever eligible to run
        assert_eq!(gate.title(), "Leave?");
        assert_eq!(gate.confirm(), Some(PendingAction::ReturnToWelcome));
        assert!(gate.confirm().is_none());
    }

    #[test]
    fn test_closed_gate_exposes_empty_strings() {
        let mut gate: ConfirmationGate<PendingAction> = ConfirmationGate::new();
        gate.request("Abort?", "Progress will be lost.", PendingAction::ResetToTopics);
        gate.confirm();

        assert_eq!(gate.title(), "");
        assert_eq!(gate.message(), "");
    }
}
