//! Ordered in-memory store for the active set's cards.

use thiserror::Error;

use crate::model::{Card, CardDraft, CardError};

/// Errors surfaced by the card store.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("cannot load an empty set")]
    EmptySet,

    #[error("invalid card at index {index}: {source}")]
    InvalidCard {
        index: usize,
        #[source]
        source: CardError,
    },

    #[error("card index {index} out of range for {len} cards")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Ordered sequence of cards for the active set.
///
/// The store is replaced wholesale when a new set is selected; there is no
/// incremental append or removal. Card identity is the index within the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardStore {
    cards: Vec<Card>,
}

impl CardStore {
    /// Validate a full set payload into a store.
    ///
    /// All-or-nothing: a single bad draft fails the whole load and nothing is
    /// constructed.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::EmptySet` for a zero-length payload and
    /// `StoreError::InvalidCard` for the first draft that fails validation.
    pub fn from_drafts(drafts: Vec<CardDraft>) -> Result<Self, StoreError> {
        if drafts.is_empty() {
            return Err(StoreError::EmptySet);
        }

        let mut cards = Vec::with_capacity(drafts.len());
        for (index, draft) in drafts.into_iter().enumerate() {
            let card = draft
                .validate()
                .map_err(|source| StoreError::InvalidCard { index, source })?;
            cards.push(card);
        }

        Ok(Self { cards })
    }

    /// Fetch the card at `index`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::IndexOutOfRange` outside `[0, len)`. With a valid
    /// session cursor this never happens; treat it as a programmer error.
    pub fn get(&self, index: usize) -> Result<&Card, StoreError> {
        self.cards.get(index).ok_or(StoreError::IndexOutOfRange {
            index,
            len: self.cards.len(),
        })
    }

    /// Increment the correct counter of the card at `index` by exactly one.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::IndexOutOfRange` outside `[0, len)`.
    pub fn record_correct(&mut self, index: usize) -> Result<(), StoreError> {
        self.card_mut(index)?.score_mut().record_correct();
        Ok(())
    }

    /// Increment the incorrect counter of the card at `index` by exactly one.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::IndexOutOfRange` outside `[0, len)`.
    pub fn record_incorrect(&mut self, index: usize) -> Result<(), StoreError> {
        self.card_mut(index)?.score_mut().record_incorrect();
        Ok(())
    }

    /// Number of cards in the active set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Always false for a constructed store; loads reject empty sets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Read-only view of the full sequence.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    fn card_mut(&mut self, index: usize) -> Result<&mut Card, StoreError> {
        let len = self.cards.len();
        self.cards
            .get_mut(index)
            .ok_or(StoreError::IndexOutOfRange { index, len })
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
