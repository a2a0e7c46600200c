//! Wire shapes for set payloads.

use drill_core::model::{CardDraft, Score};
use serde::{Deserialize, Serialize};

/// Per-card score as it appears in a set payload.
///
/// Payload scores are accepted as initial values and mutated in memory only;
/// they are never written back to the source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub correct: u32,
    pub incorrect: u32,
}

/// One card in a set payload: `{ "source": ..., "target": ..., "score": ... }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardRecord {
    pub source: String,
    pub target: String,
    #[serde(default)]
    pub score: ScoreRecord,
}

impl CardRecord {
    /// Convert the wire record into an unvalidated domain draft.
    #[must_use]
    pub fn into_draft(self) -> CardDraft {
        CardDraft {
            prompt: self.source,
            answer: self.target,
            score: Score::new(self.score.correct, self.score.incorrect),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_wire_shape() {
        let json = r#"{"source":"dog","target":"perro","score":{"correct":2,"incorrect":1}}"#;
        let record: CardRecord = serde_json::from_str(json).unwrap();

        let draft = record.into_draft();
        assert_eq!(draft.prompt, "dog");
        assert_eq!(draft.answer, "perro");
        assert_eq!(draft.score.correct(), 2);
        assert_eq!(draft.score.incorrect(), 1);
    }

    #[test]
    fn score_defaults_to_zero_when_missing() {
        let json = r#"{"source":"cat","target":"gato"}"#;
        let record: CardRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.score, ScoreRecord::default());
    }
}
