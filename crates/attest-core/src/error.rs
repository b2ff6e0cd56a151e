//! # Error Types
//!
//! Domain-specific error types for attest-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  attest-core errors (this file)                                        │
//! │  └── CatalogError     - Catalog integrity/parse failures               │
//! │                                                                         │
//! │  Tauri API errors (in app)                                             │
//! │  └── ApiError         - What the frontend sees (serialized)            │
//! │                                                                         │
//! │  Flow: CatalogError → ApiError → Frontend                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! There is deliberately no error type for session operations: every
//! transition is guarded by precondition checks that degrade to no-ops,
//! and the one hard contract violation - starting
//! with an out-of-range topic index - is a caller bug that fails fast with
//! an assertion rather than a recoverable error.
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (topic id, question id, option id)
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Catalog Error
// =============================================================================

/// Catalog integrity and parse errors.
///
/// Raised exactly once, when the catalog is constructed at startup. A
/// catalog that fails any of these rules never becomes visible to the
/// session state machine.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog contains no topics at all.
    #[error("catalog contains no topics")]
    Empty,

    /// Two topics share an id.
    #[error("duplicate topic id '{id}'")]
    DuplicateTopicId { id: String },

    /// A topic has an empty question sequence.
    ///
    /// ## When This Occurs
    /// - Authoring error in the catalog file
    /// - An empty topic would make `last_question_index` meaningless and
    ///   the results percentage a division by zero
    #[error("topic '{topic_id}' has no questions")]
    NoQuestions { topic_id: String },

    /// Two questions within one topic share an id.
    ///
    /// Question ids key the answer record, so a duplicate would silently
    /// merge two answers into one entry.
    #[error("duplicate question id {question_id} in topic '{topic_id}'")]
    DuplicateQuestionId { topic_id: String, question_id: u32 },

    /// A question has no options to choose from.
    #[error("question {question_id} in topic '{topic_id}' has no options")]
    NoOptions { topic_id: String, question_id: u32 },

    /// Two options within one question share an id.
    #[error("duplicate option id '{option_id}' in question {question_id} of topic '{topic_id}'")]
    DuplicateOptionId {
        topic_id: String,
        question_id: u32,
        option_id: String,
    },

    /// `correct_option_id` names an option the question does not have.
    #[error(
        "question {question_id} in topic '{topic_id}' marks unknown option '{option_id}' as correct"
    )]
    UnknownCorrectOption {
        topic_id: String,
        question_id: u32,
        option_id: String,
    },

    /// The catalog document is not valid JSON (or not the expected shape).
    #[error("catalog is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CatalogError.
pub type CatalogResult<T> = Result<T, CatalogError>;

// =============================================================================
// Unit Tests
// =============================================================================
