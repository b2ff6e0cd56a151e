//! # Topic Commands
//!
//! Catalog enumeration for the topic-selection screen.

use serde::Serialize;
use tauri::State;
use tracing::debug;

use crate::state::CatalogState;
use attest_core::Topic;

/// One card on the topic-selection grid.
///
/// Questions themselves are not included - the quiz screen gets them one at
/// a time through the session snapshot.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicSummary {
    pub id: String,
    pub title: String,
    pub description: String,
    pub question_count: usize,
}

impl From<&Topic> for TopicSummary {
    fn from(topic: &Topic) -> Self {
        TopicSummary {
            id: topic.id.clone(),
            title: topic.title.clone(),
            description: topic.description.clone(),
            question_count: topic.question_count(),
        }
    }
}

/// Lists all topics in catalog order.
///
/// ## Returns
/// Topic summaries with question counts, for the selection grid
#[tauri::command]
pub fn list_topics(catalog: State<'_, CatalogState>) -> Vec<TopicSummary> {
    debug!("list_topics command");
    catalog
        .catalog()
        .topics()
        .iter()
        .map(TopicSummary::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use attest_core::{AnswerOption, Question};

    #[test]
    fn test_summary_carries_question_count() {
        let topic = Topic {
            id: "block1".to_string(),
            title: "Fundamentals".to_string(),
            description: "Basics".to_string(),
            questions: vec![Question {
                id: 1,
                text: "?".to_string(),
                options: vec![AnswerOption {
                    id: "A".to_string(),
                    text: "first".to_string(),
                }],
                correct_option_id: "A".to_string(),
            }],
        };

        let summary = TopicSummary::from(&topic);
        assert_eq!(summary.id, "block1");
        assert_eq!(summary.question_count, 1);
    }
}
