//! # Gate State
//!
//! Manages the confirmation gate guarding destructive navigation.
//!
//! The gate instance is `ConfirmationGate<PendingAction>`: actions are data,
//! not closures, so they serialize across the IPC boundary and the command
//! layer can feed a confirmed action into the session exactly once.
//!
//! ## Thread Safety
//! Same `Arc<Mutex<T>>` discipline as the session state - one intent at a
//! time mutates the gate.

use std::sync::{Arc, Mutex};

use attest_core::{ConfirmationGate, PendingAction};

/// Tauri-managed confirmation-gate state.
#[derive(Debug)]
pub struct GateState {
    gate: Arc<Mutex<ConfirmationGate<PendingAction>>>,
}

impl GateState {
    /// Creates a closed gate.
    pub fn new() -> Self {
        GateState {
            gate: Arc::new(Mutex::new(ConfirmationGate::new())),
        }
    }

    /// Executes a function with read access to the gate.
    pub fn with_gate<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&ConfirmationGate<PendingAction>) -> R,
    {
        let gate = self.gate.lock().expect("Gate mutex poisoned");
        f(&gate)
    }

    /// Executes a function with write access to the gate.
    pub fn with_gate_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut ConfirmationGate<PendingAction>) -> R,
    {
        let mut gate = self.gate.lock().expect("Gate mutex poisoned");
        f(&mut gate)
    }
}

impl Default for GateState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_round_trip_through_wrapper() {
        let state = GateState::new();

        state.with_gate_mut(|g| {
            g.request(
                "Abort the test?",
                "Your current progress will be lost.",
                PendingAction::ResetToTopics,
            )
        });
        assert!(state.with_gate(|g| g.is_open()));

        let taken = state.with_gate_mut(|g| g.confirm());
        assert_eq!(taken, Some(PendingAction::ResetToTopics));
        assert!(!state.with_gate(|g| g.is_open()));
    }
}
