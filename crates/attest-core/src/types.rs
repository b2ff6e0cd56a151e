//! # Domain Types
//!
//! Core domain types used throughout Attest.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │     Topic       │   │    Question     │   │  AnswerOption   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (string)    │1─*│  id (u32)       │1─*│  id ("A", "B"…) │       │
//! │  │  title          │   │  text           │   │  text           │       │
//! │  │  description    │   │  options        │   └─────────────────┘       │
//! │  │  questions      │   │  correct_option │                             │
//! │  └─────────────────┘   └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All three are immutable static content: they are deserialized from the
//! catalog once at startup and never mutated afterwards. Ordering is
//! significant - question progression follows the `questions` sequence.
//!
//! Field names serialize as camelCase so the wire shape matches the
//! TypeScript types generated by `ts-rs`.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Answer Option
// =============================================================================

/// One selectable answer within a question.
///
/// Named `AnswerOption` because `Option` is taken by the std prelude.
/// The `id` is a stable short code ("A", "B", …) unique within its question;
/// it is what gets recorded as the user's answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct AnswerOption {
    /// Stable short code, unique within the question.
    pub id: String,

    /// Display text shown to the user.
    pub text: String,
}

// =============================================================================
// Question
// =============================================================================

/// A multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    /// Unique identifier within the owning topic.
    pub id: u32,

    /// Question text shown to the user.
    pub text: String,

    /// Selectable answers, in display order. Non-empty, ids unique.
    pub options: Vec<AnswerOption>,

    /// Id of the single correct option. Must equal exactly one `options` id.
    pub correct_option_id: String,
}

impl Question {
    /// Looks up an option by id.
    pub fn option(&self, option_id: &str) -> Option<&AnswerOption> {
        self.options.iter().find(|o| o.id == option_id)
    }

    /// Checks whether `option_id` is the correct answer.
    #[inline]
    pub fn is_correct(&self, option_id: &str) -> bool {
        self.correct_option_id == option_id
    }
}

// =============================================================================
// Topic
// =============================================================================

/// A named module grouping an ordered set of questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Topic {
    /// Unique identifier within the catalog.
    pub id: String,

    /// Display title shown on the topic card.
    pub title: String,

    /// Short description shown on the topic card.
    pub description: String,

    /// Questions in progression order. Non-empty.
    pub questions: Vec<Question>,
}

impl Topic {
    /// Number of questions in this topic.
    #[inline]
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    /// Index of the last question (0-based).
    ///
    /// The finished/unfinished boundary is decided by strict "last index
    /// reached", not a count comparison.
    #[inline]
    pub fn last_question_index(&self) -> usize {
        self.questions.len() - 1
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn question() -> Question {
        Question {
            id: 7,
            text: "Which code is correct?".to_string(),
            options: vec![
                AnswerOption {
                    id: "A".to_string(),
                    text: "first".to_string(),
                },
                AnswerOption {
                    id: "B".to_string(),
                    text: "second".to_string(),
                },
            ],
            correct_option_id: "B".to_string(),
        }
    }

    #[test]
    fn test_option_lookup() {
        let q = question();
        assert_eq!(q.option("A").map(|o| o.text.as_str()), Some("first"));
        assert!(q.option("Z").is_none());
    }

    #[test]
    fn test_is_correct() {
        let q = question();
        assert!(q.is_correct("B"));
        assert!(!q.is_correct("A"));
    }

    #[test]
    fn test_camel_case_wire_shape() {
        let q = question();
        let json = serde_json::to_value(&q).unwrap();
        assert!(json.get("correctOptionId").is_some());
        assert!(json.get("correct_option_id").is_none());
    }
}
