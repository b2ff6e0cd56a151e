//! # Session Commands
//!
//! Tauri commands for the screen-flow and answer intents.
//!
//! ## Intent → Operation Mapping
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Frontend Intent           Command              Core Operation          │
//! │  ───────────────           ───────              ──────────────          │
//! │  Start button (welcome)    enter_topics         QuizSession::enter_topics
//! │  Topic card click          start_quiz           QuizSession::start      │
//! │  Option click              select_option        QuizSession::select_option
//! │  Submit button             submit_answer        QuizSession::submit     │
//! │  Next / Finish button      next_question        QuizSession::advance    │
//! │  (confirmed) to modules    reset_to_topics      QuizSession::reset_to_topics
//! │  (confirmed) full abort    return_to_welcome    QuizSession::return_to_welcome
//! │                                                                         │
//! │  The destructive rows are normally reached through confirm_pending     │
//! │  (see confirm.rs); the direct commands exist for the ungated paths     │
//! │  (e.g. leaving the topics screen, which discards nothing).             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use tauri::State;
use tracing::debug;

use crate::error::ApiError;
use crate::state::{CatalogState, ConfigState, SessionState};

use super::topic::TopicSummary;
use attest_core::{Catalog, Question, QuizSession, Screen, ScoreSummary};

// =============================================================================
// Session View
// =============================================================================

/// The current question, positioned within its topic.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionView {
    /// 0-based position in the topic's question sequence.
    pub index: usize,

    /// Number of questions in the topic (for the progress indicator).
    pub total: usize,

    /// The full question, options in display order.
    pub question: Question,
}

/// Snapshot returned by every session-touching command.
///
/// The frontend renders whichever of the four views `session.current_screen`
/// names; the optional projections carry exactly what that view needs.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    /// The full session record.
    pub session: QuizSession,

    /// Active topic summary (quiz and results screens).
    pub topic: Option<TopicSummary>,

    /// Current question (quiz screen only).
    pub question: Option<QuestionView>,

    /// Pass/fail summary (results screen only).
    pub summary: Option<ScoreSummary>,
}

impl SessionView {
    /// Projects a session against the catalog and configured threshold.
    pub fn project(session: &QuizSession, catalog: &Catalog, config: &ConfigState) -> Self {
        let topic = session.current_topic(catalog);

        let question = match session.current_screen {
            Screen::Quiz => session.current_question(catalog).map(|q| QuestionView {
                index: session.current_question_index,
                total: topic.map(|t| t.question_count()).unwrap_or(0),
                question: q.clone(),
            }),
            _ => None,
        };

        let summary = match session.current_screen {
            Screen::Results => {
                ScoreSummary::for_session(session, catalog, config.pass_threshold_percent)
            }
            _ => None,
        };

        SessionView {
            session: session.clone(),
            topic: topic.map(TopicSummary::from),
            question,
            summary,
        }
    }
}

/// Shorthand used by every command below: lock, read, project.
fn view(
    session: &SessionState,
    catalog: &CatalogState,
    config: &ConfigState,
) -> SessionView {
    session.with_session(|s| SessionView::project(s, catalog.catalog(), config))
}

// =============================================================================
// Commands
// =============================================================================

/// Gets the current session snapshot without changing anything.
#[tauri::command]
pub fn get_session(
    session: State<'_, SessionState>,
    catalog: State<'_, CatalogState>,
    config: State<'_, ConfigState>,
) -> SessionView {
    debug!("get_session command");
    view(&session, &catalog, &config)
}

/// Moves from the welcome screen to topic selection.
#[tauri::command]
pub fn enter_topics(
    session: State<'_, SessionState>,
    catalog: State<'_, CatalogState>,
    config: State<'_, ConfigState>,
) -> SessionView {
    debug!("enter_topics command");
    session.with_session_mut(|s| s.enter_topics());
    view(&session, &catalog, &config)
}

/// Starts an attempt on the topic at `topic_index`.
///
/// ## Arguments
/// * `topic_index` - 0-based index into the catalog, as enumerated by
///   `list_topics`
///
/// ## Errors
/// `NOT_FOUND` when the index is out of range. Validating here keeps the
/// core's fail-fast contract check from ever tripping on a frontend bug.
#[tauri::command]
pub fn start_quiz(
    session: State<'_, SessionState>,
    catalog: State<'_, CatalogState>,
    config: State<'_, ConfigState>,
    topic_index: usize,
) -> Result<SessionView, ApiError> {
    debug!(topic_index, "start_quiz command");

    if topic_index >= catalog.catalog().count() {
        return Err(ApiError::not_found("Topic", topic_index));
    }

    session.with_session_mut(|s| s.start(topic_index, catalog.catalog()));
    Ok(view(&session, &catalog, &config))
}

/// Records a tentative option choice for the current question.
///
/// Selection stays mutable until submit; re-selection overwrites. The core
/// silently ignores the intent once feedback is shown.
///
/// ## Errors
/// `VALIDATION_ERROR` when `option_id` does not belong to the current
/// question (the frontend only ever offers ids drawn from it).
#[tauri::command]
pub fn select_option(
    session: State<'_, SessionState>,
    catalog: State<'_, CatalogState>,
    config: State<'_, ConfigState>,
    option_id: String,
) -> Result<SessionView, ApiError> {
    debug!(option_id = %option_id, "select_option command");

    session.with_session_mut(|s| {
        if let Some(question) = s.current_question(catalog.catalog()) {
            if question.option(&option_id).is_none() {
                return Err(ApiError::validation(format!(
                    "Option '{}' does not belong to the current question",
                    option_id
                )));
            }
        }
        s.select_option(&option_id);
        Ok(())
    })?;

    Ok(view(&session, &catalog, &config))
}

/// Submits the selected option, revealing correctness and locking the answer.
///
/// No error path: submitting without a selection (or after reveal) is a
/// silent no-op per the core contract.
#[tauri::command]
pub fn submit_answer(
    session: State<'_, SessionState>,
    catalog: State<'_, CatalogState>,
    config: State<'_, ConfigState>,
) -> SessionView {
    let outcome = session.with_session_mut(|s| s.submit(catalog.catalog()));
    match outcome {
        Some(correct) => debug!(correct, "submit_answer command: answer recorded"),
        None => debug!("submit_answer command: ignored (no selection or already revealed)"),
    }

    view(&session, &catalog, &config)
}

/// Advances past the current question, or to the results screen on the last.
#[tauri::command]
pub fn next_question(
    session: State<'_, SessionState>,
    catalog: State<'_, CatalogState>,
    config: State<'_, ConfigState>,
) -> SessionView {
    debug!("next_question command");
    session.with_session_mut(|s| s.advance(catalog.catalog()));
    view(&session, &catalog, &config)
}

/// Discards the attempt and returns to topic selection.
///
/// Destructive - the frontend routes this through the confirmation gate
/// whenever an attempt or result is on screen.
#[tauri::command]
pub fn reset_to_topics(
    session: State<'_, SessionState>,
    catalog: State<'_, CatalogState>,
    config: State<'_, ConfigState>,
) -> SessionView {
    debug!("reset_to_topics command");
    session.with_session_mut(|s| s.reset_to_topics());
    view(&session, &catalog, &config)
}

/// Full abort to the welcome screen.
///
/// Destructive from quiz/results - gated there; ungated from topics, where
/// nothing is discarded.
#[tauri::command]
pub fn return_to_welcome(
    session: State<'_, SessionState>,
    catalog: State<'_, CatalogState>,
    config: State<'_, ConfigState>,
) -> SessionView {
    debug!("return_to_welcome command");
    session.with_session_mut(|s| s.return_to_welcome());
    view(&session, &catalog, &config)
}

// =============================================================================
// Unit Tests
// =============================================================================
