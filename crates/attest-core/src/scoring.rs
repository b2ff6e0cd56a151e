//! # Scoring
//!
//! Pass/fail determination for a finished attempt.
//!
//! ## Why Integer Arithmetic?
//! The percentage is computed with pure integer math - `(100·score +
//! total/2) / total` - which rounds half up, the usual
//! `round(100 * score / total)` contract. No floating point means no
//! representation surprises at the pass boundary (a 4-of-5 attempt is
//! exactly 80, never 79.999…).
//!
//! The summary is computed at read time, never stored: the session record
//! keeps only the raw score, and every consumer derives the same summary
//! from it.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::catalog::Catalog;
use crate::session::QuizSession;
use crate::PASS_THRESHOLD_PERCENT;

// =============================================================================
// Percentage
// =============================================================================

/// Rounded percentage of correct answers.
///
/// ## Contract
/// `total` must be positive - catalog validation forbids empty topics, so a
/// zero total is a caller bug.
///
/// ## Example
/// ```rust
/// use attest_core::scoring::percentage;
///
/// assert_eq!(percentage(4, 5), 80);
/// assert_eq!(percentage(1, 3), 33); // round(33.33…)
/// assert_eq!(percentage(1, 8), 13); // round half up: 12.5 → 13
/// ```
pub fn percentage(score: u32, total: u32) -> u8 {
    assert!(total > 0, "cannot score an attempt with zero questions");
    ((100 * score + total / 2) / total) as u8
}

// =============================================================================
// Score Summary
// =============================================================================

/// The results-screen projection of a finished attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ScoreSummary {
    /// Correct answers.
    pub score: u32,

    /// Questions in the topic.
    pub total: u32,

    /// Rounded percentage, 0..=100.
    pub percentage: u8,

    /// Whether the attempt met the pass threshold.
    pub passed: bool,
}

impl ScoreSummary {
    /// Summarizes a score against the default threshold
    /// ([`PASS_THRESHOLD_PERCENT`]).
    pub fn new(score: u32, total: u32) -> Self {
        ScoreSummary::with_threshold(score, total, PASS_THRESHOLD_PERCENT)
    }

    /// Summarizes a score against an explicit threshold.
    pub fn with_threshold(score: u32, total: u32, threshold: u8) -> Self {
        let percentage = percentage(score, total);
        ScoreSummary {
            score,
            total,
            percentage,
            passed: percentage >= threshold,
        }
    }

    /// Summarizes the active topic of a session, if one exists.
    ///
    /// Returns None while no topic is active (welcome/topics screens).
    pub fn for_session(session: &QuizSession, catalog: &Catalog, threshold: u8) -> Option<Self> {
        let topic = session.current_topic(catalog)?;
        Some(ScoreSummary::with_threshold(
            session.score,
            topic.question_count() as u32,
            threshold,
        ))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
