use serde::{Deserialize, Serialize};
use thiserror::Error;

//
// ─── SCORE ─────────────────────────────────────────────────────────────────────
//

/// Running tally of correct and incorrect answers for a single card.
///
/// Both counters are monotonically non-decreasing for the lifetime of the card;
/// they are only replaced wholesale when a new set is loaded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    correct: u32,
    incorrect: u32,
}

impl Score {
    /// Creates a score with initial counters, e.g. seeded from a set payload.
    #[must_use]
    pub fn new(correct: u32, incorrect: u32) -> Self {
        Self { correct, incorrect }
    }

    #[must_use]
    pub fn correct(&self) -> u32 {
        self.correct
    }

    #[must_use]
    pub fn incorrect(&self) -> u32 {
        self.incorrect
    }

    /// Total number of judgments recorded against this card.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.correct + self.incorrect
    }

    pub(crate) fn record_correct(&mut self) {
        self.correct += 1;
    }

    pub(crate) fn record_incorrect(&mut self) {
        self.incorrect += 1;
    }
}

//
// ─── CARD TYPES ────────────────────────────────────────────────────────────────
//

/// Unvalidated card as delivered by a set source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardDraft {
    pub prompt: String,
    pub answer: String,
    pub score: Score,
}

impl CardDraft {
    /// Convenience constructor with a zeroed score.
    #[must_use]
    pub fn new(prompt: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            answer: answer.into(),
            score: Score::default(),
        }
    }

    /// Validate the draft into a `Card`.
    ///
    /// # Errors
    ///
    /// Returns `CardError::EmptyPrompt` or `CardError::EmptyAnswer` when the
    /// respective text is empty after trimming.
    pub fn validate(self) -> Result<Card, CardError> {
        if self.prompt.trim().is_empty() {
            return Err(CardError::EmptyPrompt);
        }
        if self.answer.trim().is_empty() {
            return Err(CardError::EmptyAnswer);
        }
        Ok(Card {
            prompt: self.prompt,
            answer: self.answer,
            score: self.score,
        })
    }
}

/// One prompt/answer pair with its running score.
///
/// Prompt and answer are immutable after validation; the score is mutated only
/// through `CardStore`. Identity is positional within the active set, so there
/// is no id field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    prompt: String,
    answer: String,
    score: Score,
}

impl Card {
    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn answer(&self) -> &str {
        &self.answer
    }

    #[must_use]
    pub fn score(&self) -> &Score {
        &self.score
    }

    pub(crate) fn score_mut(&mut self) -> &mut Score {
        &mut self.score
    }
}

//
// ─── CARD VALIDATION ERRORS ────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CardError {
    #[error("card prompt must not be empty")]
    EmptyPrompt,

    #[error("card answer must not be empty")]
    EmptyAnswer,
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_fails_if_prompt_empty() {
        let err = CardDraft::new("   ", "perro").validate().unwrap_err();
        assert_eq!(err, CardError::EmptyPrompt);
    }

    #[test]
    fn card_fails_if_answer_empty() {
        let err = CardDraft::new("dog", " ").validate().unwrap_err();
        assert_eq!(err, CardError::EmptyAnswer);
    }

    #[test]
    fn valid_draft_keeps_text_and_seeded_score() {
        let draft = CardDraft {
            prompt: "dog".into(),
            answer: "perro".into(),
            score: Score::new(3, 1),
        };

        let card = draft.validate().unwrap();
        assert_eq!(card.prompt(), "dog");
        assert_eq!(card.answer(), "perro");
        assert_eq!(card.score().correct(), 3);
        assert_eq!(card.score().incorrect(), 1);
        assert_eq!(card.score().total(), 4);
    }

    #[test]
    fn score_counters_increment_independently() {
        let mut score = Score::default();
        score.record_correct();
        score.record_correct();
        score.record_incorrect();
        assert_eq!(score.correct(), 2);
        assert_eq!(score.incorrect(), 1);
    }
}
