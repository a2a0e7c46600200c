//! Answer judging for typed translations.

use serde::{Deserialize, Serialize};

/// Outcome of judging a submitted answer against the current card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Correct,
    /// The submission did not match; carries the expected answer for display.
    Incorrect { expected: String },
}

impl Verdict {
    #[must_use]
    pub fn is_correct(&self) -> bool {
        matches!(self, Verdict::Correct)
    }
}

/// Normalization applied to both sides before comparison: outer-whitespace
/// trim plus Unicode lowercasing. Nothing else.
#[must_use]
pub fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

/// Exact comparison of normalized forms. No partial credit, no accent folding,
/// internal whitespace stays significant.
#[must_use]
pub fn is_match(submitted: &str, expected: &str) -> bool {
    normalize(submitted) == normalize(expected)
}
