//! # Quiz Session State Machine
//!
//! The single source of truth for which screen is active, which
//! topic/question is current, the accumulated score, and the answer history.
//!
//! ## Screen Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Screen Transitions                                 │
//! │                                                                         │
//! │              enter_topics          start(i)                             │
//! │  ┌─────────┐ ─────────────► ┌────────┐ ───────► ┌──────┐               │
//! │  │ Welcome │                │ Topics │          │ Quiz │               │
//! │  └─────────┘ ◄───────────── └────────┘          └──┬───┘               │
//! │       ▲       return_to_        ▲                  │ advance on        │
//! │       │       welcome¹          │ reset_to_        │ last question     │
//! │       │                         │ topics¹          ▼                   │
//! │       │                         │              ┌─────────┐             │
//! │       └─────────────────────────┴───────────── │ Results │             │
//! │                restart_topic¹ (same topic,     └─────────┘             │
//! │                question 0) loops back to Quiz                          │
//! │                                                                         │
//! │  ¹ destructive edges - routed through the confirmation gate by the     │
//! │    rendering collaborator before they reach this machine               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Mutation Discipline
//! No component other than this state machine mutates score or progress.
//! Every operation runs to completion synchronously in response to one user
//! intent; invalid intents degrade to silent no-ops (see the preconditions
//! on each method). The rendering collaborator only reads snapshots and
//! submits intents.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::catalog::Catalog;
use crate::types::{Question, Topic};

// =============================================================================
// Screen
// =============================================================================

/// The four mutually exclusive views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Screen {
    /// Landing view with the single "start" affordance.
    Welcome,
    /// Topic selection grid.
    Topics,
    /// Question-and-options view for the active attempt.
    Quiz,
    /// Pass/fail summary of a finished attempt.
    Results,
}

// =============================================================================
// Pending Action
// =============================================================================

/// A destructive transition deferred behind the confirmation gate.
///
/// Expressed as data rather than a closure so it serializes across the IPC
/// boundary and can be applied exactly once after user approval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum PendingAction {
    /// Full abort: back to the welcome screen.
    ReturnToWelcome,
    /// Discard the attempt (or result) and return to topic selection.
    ResetToTopics,
    /// Re-enter the active topic at question 0, discarding the result.
    RestartTopic,
}

// =============================================================================
// Quiz Session
// =============================================================================

/// The mutable session record, immutable-by-replacement.
///
/// Carries the attempt fields plus the two per-question transient fields
/// (`selected_option`, `show_feedback`), which reset on every question
/// transition.
///
/// ## Invariants
/// - `active_topic_index` is Some iff `current_screen` is Quiz or Results
/// - `current_question_index` indexes the active topic's questions while
///   `current_screen` is Quiz
/// - `score` never exceeds the number of questions answered this attempt
///   and is monotonically non-decreasing within one attempt
/// - `answers` holds at most one entry per question id
/// - `selected_option` is None or an id among the current question's options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct QuizSession {
    /// Which of the four views is active.
    pub current_screen: Screen,

    /// Index into the topic catalog, set for the lifetime of an attempt.
    pub active_topic_index: Option<usize>,

    /// 0-based position within the active topic's question sequence.
    pub current_question_index: usize,

    /// Recorded answers: question id → chosen option id.
    pub answers: HashMap<u32, String>,

    /// Correct answers so far in this attempt.
    pub score: u32,

    /// Set when the last question has been advanced past.
    pub is_finished: bool,

    /// Tentative choice for the current question, mutable until submit.
    pub selected_option: Option<String>,

    /// Whether correctness has been revealed for the current question.
    /// Once true, the answer is locked.
    pub show_feedback: bool,
}

impl QuizSession {
    /// Creates the initial session: welcome screen, zeroed score and answers.
    pub fn new() -> Self {
        QuizSession::fresh(Screen::Welcome)
    }

    /// A wholly new session on the given screen with everything zeroed.
    fn fresh(screen: Screen) -> Self {
        QuizSession {
            current_screen: screen,
            active_topic_index: None,
            current_question_index: 0,
            answers: HashMap::new(),
            score: 0,
            is_finished: false,
            selected_option: None,
            show_feedback: false,
        }
    }

    // =========================================================================
    // Read Helpers
    // =========================================================================

    /// The active topic, while an attempt (or its result) exists.
    pub fn current_topic<'a>(&self, catalog: &'a Catalog) -> Option<&'a Topic> {
        catalog.get(self.active_topic_index?)
    }

    /// The question the attempt is positioned on.
    pub fn current_question<'a>(&self, catalog: &'a Catalog) -> Option<&'a Question> {
        self.current_topic(catalog)?
            .questions
            .get(self.current_question_index)
    }

    // =========================================================================
    // Transitions
    // =========================================================================

    /// Starts an attempt on the topic at `topic_index`.
    ///
    /// Replaces the whole session - prior answers and score are discarded,
    /// the transient fields are cleared.
    ///
    /// ## Contract
    /// `topic_index` must be valid for the catalog. Topic indices are only
    /// ever produced by enumerating the catalog, so an out-of-range index is
    /// a caller bug: this fails fast instead of clamping.
    pub fn start(&mut self, topic_index: usize, catalog: &Catalog) {
        assert!(
            topic_index < catalog.count(),
            "topic index {} out of range (catalog has {} topics)",
            topic_index,
            catalog.count()
        );

        *self = QuizSession::fresh(Screen::Quiz);
        self.active_topic_index = Some(topic_index);
    }

    /// Moves from the welcome screen to topic selection.
    ///
    /// Re-creates the session like [`QuizSession::reset_to_topics`]; from
    /// welcome there is nothing to discard, so the two are interchangeable.
    pub fn enter_topics(&mut self) {
        *self = QuizSession::fresh(Screen::Topics);
    }

    /// Records a tentative option choice for the current question.
    ///
    /// Ignored silently once feedback is shown (answers cannot change after
    /// reveal) or outside the quiz screen. Repeated selection before submit
    /// overwrites: the last choice wins.
    pub fn select_option(&mut self, option_id: &str) {
        if self.current_screen != Screen::Quiz || self.show_feedback {
            return;
        }
        self.selected_option = Some(option_id.to_string());
    }

    /// Submits the selected option for the current question.
    ///
    /// No-op unless a selection exists and feedback is not yet shown.
    /// Reveals feedback, scores one point iff correct, and records the
    /// answer under the question's id (overwrite semantics).
    ///
    /// Returns `Some(correct)` when the submission was applied, `None` when
    /// the intent was ignored - callers use this for logging only.
    pub fn submit(&mut self, catalog: &Catalog) -> Option<bool> {
        if self.show_feedback {
            return None;
        }
        let selected = self.selected_option.clone()?;
        let question = self.current_question(catalog)?;

        let question_id = question.id;
        let correct = question.is_correct(&selected);

        self.show_feedback = true;
        if correct {
            self.score += 1;
        }
        self.answers.insert(question_id, selected);

        Some(correct)
    }

    /// Advances past the current question once feedback has been shown.
    ///
    /// Clears the transient fields. Moves to the next question, or - when
    /// the strict last index (`len - 1`) is reached - to the results screen
    /// with `is_finished` set. This is the sole place the finished boundary
    /// is decided.
    ///
    /// No-op before feedback is shown or outside the quiz screen.
    pub fn advance(&mut self, catalog: &Catalog) {
        if self.current_screen != Screen::Quiz || !self.show_feedback {
            return;
        }
        let last = match self.current_topic(catalog) {
            Some(topic) => topic.last_question_index(),
            None => return,
        };

        self.selected_option = None;
        self.show_feedback = false;

        if self.current_question_index < last {
            self.current_question_index += 1;
        } else {
            self.current_screen = Screen::Results;
            self.is_finished = true;
        }
    }

    /// Discards the attempt unconditionally and returns to topic selection.
    pub fn reset_to_topics(&mut self) {
        *self = QuizSession::fresh(Screen::Topics);
    }

    /// Full abort to the welcome screen.
    ///
    /// Flips only the screen - the remaining fields are stale but irrelevant
    /// until the next [`QuizSession::start`] replaces them.
    pub fn return_to_welcome(&mut self) {
        self.current_screen = Screen::Welcome;
    }

    /// Re-enters the active topic at question 0 (the results-screen retry).
    ///
    /// No-op when no topic is active.
    pub fn restart_topic(&mut self, catalog: &Catalog) {
        if let Some(index) = self.active_topic_index {
            self.start(index, catalog);
        }
    }

    /// Dispatches a confirmed [`PendingAction`] to its transition.
    pub fn apply(&mut self, action: PendingAction, catalog: &Catalog) {
        match action {
            PendingAction::ReturnToWelcome => self.return_to_welcome(),
            PendingAction::ResetToTopics => self.reset_to_topics(),
            PendingAction::RestartTopic => self.restart_topic(catalog),
        }
    }
}

impl Default for QuizSession {
    fn default() -> Self {
        QuizSession::new()
    }
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

    /// Two topics: "block1" with 3 questions, "block2" with 5.
    fn test_catalog() -> Catalog {
        Catalog::new(vec![
            Topic {
                id: "block1".to_string(),
                title: "Fundamentals".to_string(),
                description: "Basics".to_string(),
                questions: vec![question(1, "A"), question(2, "B"), question(3, "C")],
            },
            Topic {
                id: "block2".to_string(),
                title: "Standards".to_string(),
                description: "Advanced".to_string(),
                questions: (1..=5).map(|id| question(id, "A")).collect(),
            },
        ])
        .unwrap()
    }

    /// Answers the current question with `option_id` and advances.
    fn answer_and_advance(session: &mut QuizSession, catalog: &Catalog, option_id: &str) {
        session.select_option(option_id);
        session.submit(catalog);
        session.advance(catalog);
    }

    #[test]
    fn test_initial_session_is_welcome() {
        let session = QuizSession::new();
        assert_eq!(session.current_screen, Screen::Welcome);
        assert_eq!(session.active_topic_index, None);
        assert_eq!(session.score, 0);
        assert!(session.answers.is_empty());
    }

    #[test]
    fn test_start_resets_everything() {
        let catalog = test_catalog();
        let mut session = QuizSession::new();

        session.start(1, &catalog);

        assert_eq!(session.current_screen, Screen::Quiz);
        assert_eq!(session.active_topic_index, Some(1));
        assert_eq!(session.current_question_index, 0);
        assert_eq!(session.score, 0);
        assert!(session.answers.is_empty());
        assert!(!session.is_finished);
        assert_eq!(session.selected_option, None);
        assert!(!session.show_feedback);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_start_out_of_range_panics() {
        let catalog = test_catalog();
        let mut session = QuizSession::new();
        session.start(9, &catalog);
    }

    #[test]
    fn test_submit_correct_scores_one_point() {
        let catalog = test_catalog();
        let mut session = QuizSession::new();
        session.start(0, &catalog);

        session.select_option("A");
        assert_eq!(session.submit(&catalog), Some(true));

        assert_eq!(session.score, 1);
        assert!(session.show_feedback);
        assert_eq!(session.answers.get(&1).map(String::as_str), Some("A"));
    }

    #[test]
    fn test_submit_incorrect_leaves_score() {
        let catalog = test_catalog();
        let mut session = QuizSession::new();
        session.start(0, &catalog);

        session.select_option("B");
        assert_eq!(session.submit(&catalog), Some(false));

        assert_eq!(session.score, 0);
        assert!(session.show_feedback);
        // Wrong answers are recorded too
        assert_eq!(session.answers.get(&1).map(String::as_str), Some("B"));
    }

    #[test]
    fn test_submit_without_selection_is_noop() {
        let catalog = test_catalog();
        let mut session = QuizSession::new();
        session.start(0, &catalog);

        assert_eq!(session.submit(&catalog), None);
        assert!(!session.show_feedback);
        assert!(session.answers.is_empty());
    }

    #[test]
    fn test_select_and_submit_locked_after_feedback() {
        let catalog = test_catalog();
        let mut session = QuizSession::new();
        session.start(0, &catalog);

        session.select_option("A");
        session.submit(&catalog);

        // Both intents are ignored once feedback is shown
        session.select_option("B");
        assert_eq!(session.selected_option.as_deref(), Some("A"));

        assert_eq!(session.submit(&catalog), None);
        assert_eq!(session.score, 1);
        assert_eq!(session.answers.get(&1).map(String::as_str), Some("A"));
    }

    #[test]
    fn test_last_selection_before_submit_wins() {
        let catalog = test_catalog();
        let mut session = QuizSession::new();
        session.start(0, &catalog);

        session.select_option("B");
        session.select_option("C");
        session.submit(&catalog);

        assert_eq!(session.answers.get(&1).map(String::as_str), Some("C"));
    }

    #[test]
    fn test_advance_moves_to_next_question() {
        let catalog = test_catalog();
        let mut session = QuizSession::new();
        session.start(0, &catalog);

        session.select_option("A");
        session.submit(&catalog);
        session.advance(&catalog);

        assert_eq!(session.current_screen, Screen::Quiz);
        assert_eq!(session.current_question_index, 1);
        assert_eq!(session.selected_option, None);
        assert!(!session.show_feedback);
    }

    #[test]
    fn test_advance_before_feedback_is_noop() {
        let catalog = test_catalog();
        let mut session = QuizSession::new();
        session.start(0, &catalog);

        session.select_option("A");
        session.advance(&catalog);

        assert_eq!(session.current_question_index, 0);
        assert_eq!(session.selected_option.as_deref(), Some("A"));
    }

    #[test]
    fn test_advance_on_last_question_finishes() {
        let catalog = test_catalog();
        let mut session = QuizSession::new();
        session.start(0, &catalog);

        answer_and_advance(&mut session, &catalog, "A");
        answer_and_advance(&mut session, &catalog, "B");
        answer_and_advance(&mut session, &catalog, "C");

        assert_eq!(session.current_screen, Screen::Results);
        assert!(session.is_finished);
        assert_eq!(session.score, 3);
    }

    #[test]
    fn test_reset_then_start_equals_fresh_start() {
        let catalog = test_catalog();

        // A session with attempt history behind it
        let mut used = QuizSession::new();
        used.start(0, &catalog);
        answer_and_advance(&mut used, &catalog, "A");
        answer_and_advance(&mut used, &catalog, "A");
        used.reset_to_topics();
        used.start(1, &catalog);

        // A session started fresh
        let mut fresh = QuizSession::new();
        fresh.start(1, &catalog);

        assert_eq!(used, fresh);
    }

    #[test]
    fn test_enter_topics_from_welcome() {
        let mut session = QuizSession::new();
        session.enter_topics();

        assert_eq!(session.current_screen, Screen::Topics);
        assert_eq!(session.active_topic_index, None);
    }

    #[test]
    fn test_return_to_welcome_only_flips_screen() {
        let catalog = test_catalog();
        let mut session = QuizSession::new();
        session.start(0, &catalog);
        session.select_option("A");
        session.submit(&catalog);

        session.return_to_welcome();

        assert_eq!(session.current_screen, Screen::Welcome);
        // Remaining fields are left as last computed
        assert_eq!(session.active_topic_index, Some(0));
        assert_eq!(session.score, 1);
    }

    #[test]
    fn test_restart_topic_reenters_same_topic() {
        let catalog = test_catalog();
        let mut session = QuizSession::new();
        session.start(1, &catalog);
        answer_and_advance(&mut session, &catalog, "A");

        session.restart_topic(&catalog);

        assert_eq!(session.current_screen, Screen::Quiz);
        assert_eq!(session.active_topic_index, Some(1));
        assert_eq!(session.current_question_index, 0);
        assert_eq!(session.score, 0);
        assert!(session.answers.is_empty());
    }

    #[test]
    fn test_restart_without_active_topic_is_noop() {
        let catalog = test_catalog();
        let mut session = QuizSession::new();

        session.restart_topic(&catalog);

        assert_eq!(session.current_screen, Screen::Welcome);
    }

    #[test]
    fn test_apply_dispatches_actions() {
        let catalog = test_catalog();

        let mut session = QuizSession::new();
        session.start(0, &catalog);
        session.apply(PendingAction::ResetToTopics, &catalog);
        assert_eq!(session.current_screen, Screen::Topics);

        session.start(0, &catalog);
        session.apply(PendingAction::ReturnToWelcome, &catalog);
        assert_eq!(session.current_screen, Screen::Welcome);

        session.start(1, &catalog);
        session.apply(PendingAction::RestartTopic, &catalog);
        assert_eq!(session.current_screen, Screen::Quiz);
        assert_eq!(session.active_topic_index, Some(1));
    }

    #[test]
    fn test_current_question_follows_progression() {
        let catalog = test_catalog();
        let mut session = QuizSession::new();

        assert!(session.current_question(&catalog).is_none());

        session.start(0, &catalog);
        assert_eq!(session.current_question(&catalog).map(|q| q.id), Some(1));

        answer_and_advance(&mut session, &catalog, "A");
        assert_eq!(session.current_question(&catalog).map(|q| q.id), Some(2));
    }
}
