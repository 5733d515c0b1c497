use serde::{Deserialize, Serialize};

/// Highest score the content API hands out.
pub const MAX_SCORE: u8 = 10;

/// Confidence band of a validation score.
///
/// The same thresholds drive the validation panel styling and the score badge
/// of each source card:
/// - `High`: score >= 8
/// - `Medium`: 5 <= score < 8
/// - `Low`: anything below 5
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreGrade {
    High,
    Medium,
    Low,
}

impl ScoreGrade {
    pub fn from_score(score: u8) -> Self {
        if score >= 8 {
            ScoreGrade::High
        } else if score >= 5 {
            ScoreGrade::Medium
        } else {
            ScoreGrade::Low
        }
    }

    /// CSS class of the score badge (`score-high`, `score-medium`, `score-low`).
    pub fn badge_class(self) -> &'static str {
        match self {
            ScoreGrade::High => "score-high",
            ScoreGrade::Medium => "score-medium",
            ScoreGrade::Low => "score-low",
        }
    }

    /// CSS class of the validation panel container.
    pub fn panel_class(self) -> &'static str {
        match self {
            ScoreGrade::High => "validation-success",
            ScoreGrade::Medium => "validation-warning",
            ScoreGrade::Low => "validation-error",
        }
    }
}

/// Renders a score the way badges show it, e.g. `7/10`.
pub fn score_label(score: u8) -> String {
    format!("{}/{}", score, MAX_SCORE)
}
