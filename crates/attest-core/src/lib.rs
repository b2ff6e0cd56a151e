//! # attest-core: Pure Quiz Logic for Attest
//!
//! This crate is the **heart** of Attest. It contains the whole screen-flow
//! state machine and answer-scoring logic as pure functions with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Attest Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Frontend (WebView)                           │   │
//! │  │    Welcome ──► Topics ──► Question ──► Results                  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ Tauri IPC                              │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    Tauri Commands                               │   │
//! │  │    start_quiz, select_option, submit_answer, next_question, …   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ attest-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │  catalog  │  │  session  │  │  scoring  │  │   │
//! │  │   │   Topic   │  │  Catalog  │  │QuizSession│  │ScoreSumry │  │   │
//! │  │   │  Question │  │  lookups  │  │  screens  │  │ threshold │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO FRAMEWORK • NO NETWORK • PURE FUNCTIONS          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Topic, Question, AnswerOption)
//! - [`catalog`] - Validated, read-only topic catalog
//! - [`session`] - The quiz session state machine
//! - [`scoring`] - Pass/fail scoring with integer arithmetic (no floating point!)
//! - [`confirm`] - Deferred-action confirmation gate
//! - [`error`] - Catalog integrity error types
//! - [`validation`] - Catalog integrity rules
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every transition is deterministic - same input = same output
//! 2. **No I/O**: File system, network, framework access is FORBIDDEN here
//! 3. **Single Mutator**: Only [`session::QuizSession`] methods touch score or progress
//! 4. **Explicit Errors**: Catalog errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use attest_core::catalog::Catalog;
//! use attest_core::session::QuizSession;
//! use attest_core::types::{AnswerOption, Question, Topic};
//!
//! let catalog = Catalog::new(vec![Topic {
//!     id: "basics".to_string(),
//!     title: "Basics".to_string(),
//!     description: "Getting started".to_string(),
//!     questions: vec![Question {
//!         id: 1,
//!         text: "Pick A".to_string(),
//!         options: vec![
//!             AnswerOption { id: "A".to_string(), text: "first".to_string() },
//!             AnswerOption { id: "B".to_string(), text: "second".to_string() },
//!         ],
//!         correct_option_id: "A".to_string(),
//!     }],
//! }])
//! .unwrap();
//!
//! let mut session = QuizSession::new();
//! session.start(0, &catalog);
//! session.select_option("A");
//!
//! // Correct answer scores exactly one point
//! assert_eq!(session.submit(&catalog), Some(true));
//! assert_eq!(session.score, 1);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod confirm;
pub mod error;
pub mod scoring;
pub mod session;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use attest_core::Catalog` instead of
// `use attest_core::catalog::Catalog`

pub use catalog::Catalog;
pub use confirm::ConfirmationGate;
pub use error::{CatalogError, CatalogResult};
pub use scoring::ScoreSummary;
pub use session::{PendingAction, QuizSession, Screen};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Score percentage required to pass a topic.
///
/// ## Why a constant?
/// The cutoff is a product decision, not a per-topic property. Scoring code
/// takes the threshold as a parameter with this constant as the default, so
/// the value can change without touching the scoring logic itself.
pub const PASS_THRESHOLD_PERCENT: u8 = 80;
