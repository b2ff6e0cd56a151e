//! # Topic Catalog
//!
//! The validated, read-only catalog of topics.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Catalog Lifecycle                                  │
//! │                                                                         │
//! │  catalog.json ──► serde parse ──► integrity rules ──► Catalog          │
//! │                   (CatalogError::   (validation.rs)    (read-only      │
//! │                    Parse on fail)                       for process    │
//! │                                                         lifetime)     │
//! │                                                                         │
//! │  The session state machine only ever sees a Catalog that passed both   │
//! │  stages, so its transitions never re-check catalog content.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;

use crate::error::CatalogResult;
use crate::types::Topic;
use crate::validation::validate_catalog;

/// An ordered, validated sequence of topics.
///
/// ## Invariants (established at construction)
/// - At least one topic; ids unique
/// - Every topic has at least one question; question ids unique per topic
/// - Every question has at least one option; option ids unique per question
/// - Every `correct_option_id` resolves to a real option
///
/// The inner vector is private so the invariants cannot be broken after
/// construction.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    topics: Vec<Topic>,
}

impl Catalog {
    /// Builds a catalog from topics, enforcing the integrity rules.
    pub fn new(topics: Vec<Topic>) -> CatalogResult<Self> {
        validate_catalog(&topics)?;
        Ok(Catalog { topics })
    }

    /// Parses and validates a catalog from its JSON document form.
    ///
    /// The document is a plain JSON array of topics - the same shape the
    /// frontend types describe.
    pub fn from_json(json: &str) -> CatalogResult<Self> {
        let topics: Vec<Topic> = serde_json::from_str(json)?;
        Catalog::new(topics)
    }

    /// Number of topics.
    #[inline]
    pub fn count(&self) -> usize {
        self.topics.len()
    }

    /// Returns the topic at `index`, if in range.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Topic> {
        self.topics.get(index)
    }

    /// All topics in display order, for enumeration.
    #[inline]
    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CatalogError;

    const SAMPLE: &str = r#"
    [
      {
        "id": "block1",
        "title": "Fundamentals",
        "description": "Basic product knowledge",
        "questions": [
          {
            "id": 1,
            "text": "Pick the first option",
            "options": [
              { "id": "A", "text": "first" },
              { "id": "B", "text": "second" }
            ],
            "correctOptionId": "A"
          }
        ]
      }
    ]
    "#;

    #[test]
    fn test_from_json_parses_and_validates() {
        let catalog = Catalog::from_json(SAMPLE).unwrap();
        assert_eq!(catalog.count(), 1);

        let topic = catalog.get(0).unwrap();
        assert_eq!(topic.id, "block1");
        assert_eq!(topic.question_count(), 1);
        assert_eq!(topic.questions[0].correct_option_id, "A");
    }

    #[test]
    fn test_from_json_rejects_malformed_document() {
        let err = Catalog::from_json("{ not json").unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn test_from_json_rejects_integrity_violation() {
        // correctOptionId "Z" names no option
        let bad = SAMPLE.replace("\"correctOptionId\": \"A\"", "\"correctOptionId\": \"Z\"");
        let err = Catalog::from_json(&bad).unwrap_err();
        assert!(matches!(err, CatalogError::UnknownCorrectOption { .. }));
    }

    #[test]
    fn test_get_out_of_range_is_none() {
        let catalog = Catalog::from_json(SAMPLE).unwrap();
        assert!(catalog.get(5).is_none());
    }
}
