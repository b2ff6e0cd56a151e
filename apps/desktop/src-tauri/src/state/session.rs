//! # Session State
//!
//! Manages the current quiz session.
//!
//! ## Thread Safety
//! The session is wrapped in `Arc<Mutex<T>>` because:
//! 1. Multiple commands may access/modify the session
//! 2. Only one command should modify the session at a time
//! 3. Tauri commands can run concurrently
//!
//! Exclusive access per intent is what preserves the core's single-mutator
//! model: each command locks, runs one synchronous transition to
//! completion, and releases.
//!
//! ## Session Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Session State Operations                             │
//! │                                                                         │
//! │  Frontend Action          Tauri Command           Session Change        │
//! │  ───────────────          ─────────────           ──────────────        │
//! │                                                                         │
//! │  Pick Topic ─────────────► start_quiz() ────────► fresh attempt        │
//! │                                                                         │
//! │  Click Option ───────────► select_option() ─────► tentative choice     │
//! │                                                                         │
//! │  Click Submit ───────────► submit_answer() ─────► feedback + score     │
//! │                                                                         │
//! │  Click Next ─────────────► next_question() ─────► index+1 or results   │
//! │                                                                         │
//! │  View State ─────────────► get_session() ───────► (read only)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex};

use attest_core::QuizSession;

/// Tauri-managed session state.
///
/// ## Why Not RwLock?
/// Session operations are quick, and most intents modify state. A RwLock
/// would add complexity with minimal benefit.
#[derive(Debug)]
pub struct SessionState {
    session: Arc<Mutex<QuizSession>>,
}

impl SessionState {
    /// Creates the initial session state (welcome screen).
    pub fn new() -> Self {
        SessionState {
            session: Arc::new(Mutex::new(QuizSession::new())),
        }
    }

    /// Executes a function with read access to the session.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let screen = session_state.with_session(|s| s.current_screen);
    /// ```
    pub fn with_session<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&QuizSession) -> R,
    {
        let session = self.session.lock().expect("Session mutex poisoned");
        f(&session)
    }

    /// Executes a function with write access to the session.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// session_state.with_session_mut(|s| s.select_option(&option_id));
    /// ```
    pub fn with_session_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut QuizSession) -> R,
    {
        let mut session = self.session.lock().expect("Session mutex poisoned");
        f(&mut session)
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}
