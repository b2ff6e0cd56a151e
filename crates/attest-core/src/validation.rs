//! # Validation Module
//!
//! Catalog integrity rules for Attest.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Deserialization (serde)                                      │
//! │  ├── Shape and type checks (missing fields, wrong types)               │
//! │  └── Fails with CatalogError::Parse                                    │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE - integrity rules                                │
//! │  ├── Non-empty catalog / topics / option lists                         │
//! │  ├── Unique ids at every level                                         │
//! │  └── correct_option_id resolves to a real option                       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Session preconditions (session.rs)                           │
//! │  └── Invalid intents degrade to no-ops at runtime                      │
//! │                                                                         │
//! │  A catalog that passes layers 1-2 lets the state machine run without   │
//! │  any per-operation content checks.                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust,no_run
//! use attest_core::validation::validate_catalog;
//!
//! # let topics = vec![];
//! // Validate before the catalog becomes visible to the session
//! validate_catalog(&topics).unwrap();
//! ```

use std::collections::HashSet;

use crate::error::{CatalogError, CatalogResult};
use crate::types::{Question, Topic};

// =============================================================================
// Catalog Validators
// =============================================================================

/// Validates a full topic sequence.
///
/// ## Rules
/// - At least one topic
/// - Topic ids unique across the catalog
/// - Every topic passes [`validate_topic`]
pub fn validate_catalog(topics: &[Topic]) -> CatalogResult<()> {
    if topics.is_empty() {
        return Err(CatalogError::Empty);
    }

    let mut seen = HashSet::new();
    for topic in topics {
        if !seen.insert(topic.id.as_str()) {
            return Err(CatalogError::DuplicateTopicId {
                id: topic.id.clone(),
            });
        }
        validate_topic(topic)?;
    }

    Ok(())
}

/// Validates one topic.
///
/// ## Rules
/// - At least one question
/// - Question ids unique within the topic
/// - Every question passes [`validate_question`]
pub fn validate_topic(topic: &Topic) -> CatalogResult<()> {
    if topic.questions.is_empty() {
        return Err(CatalogError::NoQuestions {
            topic_id: topic.id.clone(),
        });
    }

    let mut seen = HashSet::new();
    for question in &topic.questions {
        if !seen.insert(question.id) {
            return Err(CatalogError::DuplicateQuestionId {
                topic_id: topic.id.clone(),
                question_id: question.id,
            });
        }
        validate_question(&topic.id, question)?;
    }

    Ok(())
}

/// Validates one question.
///
/// ## Rules
/// - At least one option
/// - Option ids unique within the question
/// - `correct_option_id` resolves to exactly one option
pub fn validate_question(topic_id: &str, question: &Question) -> CatalogResult<()> {
    if question.options.is_empty() {
        return Err(CatalogError::NoOptions {
            topic_id: topic_id.to_string(),
            question_id: question.id,
        });
    }

    let mut seen = HashSet::new();
    for option in &question.options {
        if !seen.insert(option.id.as_str()) {
            return Err(CatalogError::DuplicateOptionId {
                topic_id: topic_id.to_string(),
                question_id: question.id,
                option_id: option.id.clone(),
            });
        }
    }

    if question.option(&question.correct_option_id).is_none() {
        return Err(CatalogError::UnknownCorrectOption {
            topic_id: topic_id.to_string(),
            question_id: question.id,
            option_id: question.correct_option_id.clone(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AnswerOption;

    fn option(id: &str) -> AnswerOption {
        AnswerOption {
            id: id.to_string(),
            text: format!("option {}", id),
        }
    }

    fn question(id: u32, correct: &str) -> Question {
        Question {
            id,
            text: format!("question {}", id),
            options: vec![option("A"), option("B"), option("C")],
            correct_option_id: correct.to_string(),
        }
    }

    fn topic(id: &str, questions: Vec<Question>) -> Topic {
        Topic {
            id: id.to_string(),
            title: format!("Topic {}", id),
            description: String::new(),
            questions,
        }
    }

    #[test]
    fn test_valid_catalog_passes() {
        let topics = vec![
            topic("block1", vec![question(1, "A"), question(2, "B")]),
            topic("block2", vec![question(1, "C")]),
        ];
        assert!(validate_catalog(&topics).is_ok());
    }

    #[test]
    fn test_empty_catalog_rejected() {
        assert!(matches!(validate_catalog(&[]), Err(CatalogError::Empty)));
    }

    #[test]
    fn test_duplicate_topic_id_rejected() {
        let topics = vec![
            topic("block1", vec![question(1, "A")]),
            topic("block1", vec![question(1, "A")]),
        ];
        assert!(matches!(
            validate_catalog(&topics),
            Err(CatalogError::DuplicateTopicId { .. })
        ));
    }

    #[test]
    fn test_topic_without_questions_rejected() {
        let t = topic("block1", vec![]);
        assert!(matches!(
            validate_topic(&t),
            Err(CatalogError::NoQuestions { .. })
        ));
    }

    #[test]
    fn test_duplicate_question_id_rejected() {
        let t = topic("block1", vec![question(1, "A"), question(1, "B")]);
        assert!(matches!(
            validate_topic(&t),
            Err(CatalogError::DuplicateQuestionId { question_id: 1, .. })
        ));
    }

    #[test]
    fn test_question_without_options_rejected() {
        let mut q = question(1, "A");
        q.options.clear();
        assert!(matches!(
            validate_question("block1", &q),
            Err(CatalogError::NoOptions { .. })
        ));
    }

    #[test]
    fn test_duplicate_option_id_rejected() {
        let mut q = question(1, "A");
        q.options.push(option("A"));
        assert!(matches!(
            validate_question("block1", &q),
            Err(CatalogError::DuplicateOptionId { .. })
        ));
    }

    #[test]
    fn test_unknown_correct_option_rejected() {
        let q = question(1, "E");
        assert!(matches!(
            validate_question("block1", &q),
            Err(CatalogError::UnknownCorrectOption { .. })
        ));
    }
}
