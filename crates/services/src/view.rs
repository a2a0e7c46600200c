//! Plain-data views for renderers.

use drill_core::model::Score;

/// Everything a renderer needs to draw the current drill position, decoupled
/// from the domain types. Captured via `SessionEngine::snapshot`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub set_name: String,
    /// Prompt text of the card under the cursor.
    pub prompt: String,
    /// 1-based position within the set.
    pub position: usize,
    pub total: usize,
    pub learned: u32,
    /// Running score of the card under the cursor.
    pub card_score: Score,
}
