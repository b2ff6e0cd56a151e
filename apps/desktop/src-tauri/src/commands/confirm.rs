//! # Confirmation Commands
//!
//! The confirmation round-trip guarding destructive navigation.
//!
//! ## Round-Trip at the IPC Boundary
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  User clicks abort/retry/leave                                          │
//! │                    │                                                    │
//! │                    ▼                                                    │
//! │  invoke('request_confirmation', { title, message, action })             │
//! │                    │                                                    │
//! │                    ▼                                                    │
//! │  Gate opens, dialog renders from the returned GateView                  │
//! │                    │                                                    │
//! │        ┌───────────┴────────────┐                                       │
//! │        ▼                        ▼                                       │
//! │  invoke('confirm_pending')  invoke('cancel_confirmation')               │
//! │  action applied to the      action discarded unrun,                     │
//! │  session exactly once,      gate closes                                 │
//! │  gate closes                                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The gated transitions: aborting an in-progress attempt (to topics or
//! welcome), discarding a completed result (to topics or welcome), and
//! retrying a topic from its results screen. Leaving the topics screen
//! discards nothing and calls the session commands directly.

use serde::Serialize;
use tauri::State;
use tracing::debug;

use crate::state::{CatalogState, ConfigState, GateState, SessionState};

use super::session::SessionView;
use attest_core::{ConfirmationGate, PendingAction};

// =============================================================================
// Gate View
// =============================================================================

/// What the dialog renders.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GateView {
    pub is_open: bool,
    pub title: String,
    pub message: String,
}

impl From<&ConfirmationGate<PendingAction>> for GateView {
    fn from(gate: &ConfirmationGate<PendingAction>) -> Self {
        GateView {
            is_open: gate.is_open(),
            title: gate.title().to_string(),
            message: gate.message().to_string(),
        }
    }
}

// =============================================================================
// Commands
// =============================================================================

/// Opens the gate with a deferred action. Does NOT run the action.
///
/// A second request before the first resolves overwrites it:
/// last-request-wins, no queueing.
///
/// ## Arguments
/// * `title` / `message` - dialog copy, supplied by the frontend
/// * `action` - the transition to run on approval
#[tauri::command]
pub fn request_confirmation(
    gate: State<'_, GateState>,
    title: String,
    message: String,
    action: PendingAction,
) -> GateView {
    debug!(?action, "request_confirmation command");
    gate.with_gate_mut(|g| {
        g.request(title, message, action);
        GateView::from(&*g)
    })
}

/// Approves the pending action: applies it to the session exactly once and
/// closes the gate.
///
/// A no-op on an already-closed gate (stray double-click on the dialog).
#[tauri::command]
pub fn confirm_pending(
    gate: State<'_, GateState>,
    session: State<'_, SessionState>,
    catalog: State<'_, CatalogState>,
    config: State<'_, ConfigState>,
) -> SessionView {
    let action = gate.with_gate_mut(|g| g.confirm());
    match action {
        Some(action) => {
            debug!(?action, "confirm_pending command: applying");
            session.with_session_mut(|s| s.apply(action, catalog.catalog()));
        }
        None => debug!("confirm_pending command: gate already closed"),
    }

    session.with_session(|s| SessionView::project(s, catalog.catalog(), &config))
}

/// Dismisses the dialog, discarding the pending action without running it.
#[tauri::command]
pub fn cancel_confirmation(gate: State<'_, GateState>) -> GateView {
    debug!("cancel_confirmation command");
    gate.with_gate_mut(|g| {
        g.cancel();
        GateView::from(&*g)
    })
}

/// Gets the current gate state without changing anything.
#[tauri::command]
pub fn get_confirmation(gate: State<'_, GateState>) -> GateView {
    debug!("get_confirmation command");
    gate.with_gate(GateView::from)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use attest_core::{Catalog, QuizSession, Screen};

    const CATALOG: &str = include_str!("../../assets/default_catalog.json");

    #[test]
    fn test_confirmed_abort_resets_session() {
        let catalog = Catalog::from_json(CATALOG).unwrap();
        let gate = GateState::new();
        let session = SessionState::new();

        session.with_session_mut(|s| s.start(0, &catalog));
        gate.with_gate_mut(|g| {
            g.request(
                "Abort the test?",
                "Your current progress will be lost.",
                PendingAction::ResetToTopics,
            )
        });

        // The gated transition has not run yet
        assert_eq!(
            session.with_session(|s| s.current_screen),
            Screen::Quiz
        );

        if let Some(action) = gate.with_gate_mut(|g| g.confirm()) {
            session.with_session_mut(|s| s.apply(action, &catalog));
        }

        assert_eq!(
            session.with_session(|s| s.current_screen),
            Screen::Topics
        );
        assert!(!gate.with_gate(|g| g.is_open()));
    }

    #[test]
    fn test_cancelled_abort_preserves_session() {
        let catalog = Catalog::from_json(CATALOG).unwrap();
        let gate = GateState::new();
        let session = SessionState::new();

        session.with_session_mut(|s| s.start(0, &catalog));
        gate.with_gate_mut(|g| {
            g.request("Abort?", "", PendingAction::ReturnToWelcome)
        });
        gate.with_gate_mut(|g| g.cancel());

        let snapshot = session.with_session(QuizSession::clone);
        assert_eq!(snapshot.current_screen, Screen::Quiz);
        assert_eq!(snapshot.active_topic_index, Some(0));
    }

    #[test]
    fn test_gate_view_reflects_open_and_closed() {
        let gate = GateState::new();

        let closed = gate.with_gate(GateView::from);
        assert!(!closed.is_open);
        assert_eq!(closed.title, "");

        gate.with_gate_mut(|g| {
            g.request("Retry the test?", "The current result will be reset.", PendingAction::RestartTopic)
        });
        let open = gate.with_gate(GateView::from);
        assert!(open.is_open);
        assert_eq!(open.title, "Retry the test?");
    }
}
