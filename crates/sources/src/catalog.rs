//! Source contracts for set catalogs and set payloads.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use thiserror::Error;

use drill_core::model::{CardDraft, SetId};

/// Errors surfaced by set sources.
///
/// Sources never retry on their own; a failure is reported once to the caller.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SourceError {
    #[error("set not found: {0}")]
    NotFound(SetId),

    #[error("connection error: {0}")]
    Connection(String),

    #[error("malformed payload: {0}")]
    Malformed(String),
}

/// Catalog contract: the ordered list of available set names.
#[async_trait]
pub trait SetCatalog: Send + Sync {
    /// List the available sets in catalog order.
    ///
    /// # Errors
    ///
    /// Returns `SourceError` if the catalog cannot be fetched or parsed.
    async fn list_sets(&self) -> Result<Vec<SetId>, SourceError>;
}

/// Data contract: the card payload for one set.
#[async_trait]
pub trait SetSource: Send + Sync {
    /// Fetch the ordered card drafts for a set.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::NotFound` for an unknown set, or other source
    /// errors when the payload cannot be fetched or parsed.
    async fn fetch_set(&self, id: &SetId) -> Result<Vec<CardDraft>, SourceError>;
}

/// Simple in-memory source implementation for testing and prototyping.
///
/// Keeps insertion order so the catalog is stable.
#[derive(Clone, Default)]
pub struct InMemorySource {
    sets: Arc<Mutex<Vec<(SetId, Vec<CardDraft>)>>>,
}

impl InMemorySource {
    #[must_use]
    pub fn new() -> Self {
        Self {
            sets: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Insert or replace a set.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::Connection` if the backing lock is poisoned.
    pub fn insert_set(&self, id: SetId, cards: Vec<CardDraft>) -> Result<(), SourceError> {
        let mut guard = self
            .sets
            .lock()
            .map_err(|e| SourceError::Connection(e.to_string()))?;
        if let Some(entry) = guard.iter_mut().find(|(existing, _)| *existing == id) {
            entry.1 = cards;
        } else {
            guard.push((id, cards));
        }
        Ok(())
    }
}

#[async_trait]
impl SetCatalog for InMemorySource {
    async fn list_sets(&self) -> Result<Vec<SetId>, SourceError> {
        let guard = self
            .sets
            .lock()
            .map_err(|e| SourceError::Connection(e.to_string()))?;
        Ok(guard.iter().map(|(id, _)| id.clone()).collect())
    }
}

#[async_trait]
impl SetSource for InMemorySource {
    async fn fetch_set(&self, id: &SetId) -> Result<Vec<CardDraft>, SourceError> {
        let guard = self
            .sets
            .lock()
            .map_err(|e| SourceError::Connection(e.to_string()))?;
        guard
            .iter()
            .find(|(existing, _)| existing == id)
            .map(|(_, cards)| cards.clone())
            .ok_or_else(|| SourceError::NotFound(id.clone()))
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
