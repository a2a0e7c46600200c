use chrono::{DateTime, Utc};
use std::fmt;
use tracing::{debug, warn};

use drill_core::model::{Card, CardDraft, SetId};
use drill_core::store::CardStore;
use drill_core::Clock;
use sources::{SetSource, SourceError};

use crate::error::SessionError;
use crate::matching;
use crate::matching::Verdict;
use crate::view::SessionSnapshot;

//
// ─── SESSION STATE ─────────────────────────────────────────────────────────────
//

/// Tag for one in-flight set load. Completions carrying a superseded tag are
/// rejected, so overlapping `select_set` calls resolve last-write-wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct LoadGeneration(u64);

/// Aggregate counters for the active session.
///
/// `learned` counts correct-answer events, not distinct cards: answering the
/// same card correctly twice counts twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionStats {
    pub total: usize,
    pub learned: u32,
    pub missed: u32,
    pub answered: u32,
}

struct ActiveSession {
    set_id: SetId,
    cards: CardStore,
    current: usize,
    learned: u32,
    missed: u32,
    started_at: DateTime<Utc>,
}

enum EngineState {
    /// No set selected yet (or the first load failed).
    Idle,
    /// A set load is in flight. Any prior active session is stashed so a
    /// failed reload can restore it untouched.
    Loading {
        generation: u64,
        set_id: SetId,
        prior: Option<ActiveSession>,
    },
    Active(ActiveSession),
}

//
// ─── ENGINE ────────────────────────────────────────────────────────────────────
//

/// Single-learner drill session over one word set.
///
/// Owns the card store and the cycling cursor, judges typed answers, and
/// tracks per-session counters. Advancing after a correct verdict is the
/// host's job (immediately or after its display delay); the engine never
/// advances on its own.
pub struct SessionEngine {
    clock: Clock,
    generation: u64,
    state: EngineState,
}

impl SessionEngine {
    #[must_use]
    pub fn new(clock: Clock) -> Self {
        Self {
            clock,
            generation: 0,
            state: EngineState::Idle,
        }
    }

    /// Select a set: fetch its payload from `source` and activate it.
    ///
    /// On success the previous session (if any) is discarded and the cursor
    /// and counters reset. On failure the engine stays idle if this was the
    /// first load, or keeps the prior session untouched on a reload.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Load` when the source fails, `SessionError::Store`
    /// when the payload is empty or contains an invalid card, and
    /// `SessionError::StaleLoad` when a newer load superseded this one.
    pub async fn select_set(
        &mut self,
        set_id: SetId,
        source: &dyn SetSource,
    ) -> Result<(), SessionError> {
        let generation = self.begin_load(set_id.clone());
        let payload = source.fetch_set(&set_id).await;
        self.complete_load(generation, payload)
    }

    /// Start a set load, superseding any load already in flight.
    ///
    /// The returned generation must be handed back to `complete_load`. While
    /// the load is pending the engine is not active: `current_card`,
    /// `check_answer` and `advance` all fail with `NotActive`.
    pub fn begin_load(&mut self, set_id: SetId) -> LoadGeneration {
        self.generation += 1;
        let prior = match std::mem::replace(&mut self.state, EngineState::Idle) {
            EngineState::Active(session) => Some(session),
            EngineState::Loading { prior, .. } => prior,
            EngineState::Idle => None,
        };

        debug!(set = %set_id, generation = self.generation, "set load started");
        self.state = EngineState::Loading {
            generation: self.generation,
            set_id,
            prior,
        };
        LoadGeneration(self.generation)
    }

    /// Resolve a pending load with the fetched payload (or the fetch error).
    ///
    /// # Errors
    ///
    /// Returns `SessionError::StaleLoad` when `generation` does not belong to
    /// the pending load; the engine state is left untouched. Otherwise behaves
    /// like `select_set` regarding load failures.
    pub fn complete_load(
        &mut self,
        generation: LoadGeneration,
        payload: Result<Vec<CardDraft>, SourceError>,
    ) -> Result<(), SessionError> {
        let (set_id, prior) = match std::mem::replace(&mut self.state, EngineState::Idle) {
            EngineState::Loading {
                generation: pending,
                set_id,
                prior,
            } if pending == generation.0 => (set_id, prior),
            other => {
                self.state = other;
                warn!(generation = generation.0, "discarding stale set load");
                return Err(SessionError::StaleLoad);
            }
        };

        let loaded = payload
            .map_err(SessionError::Load)
            .and_then(|drafts| CardStore::from_drafts(drafts).map_err(SessionError::Store));

        match loaded {
            Ok(cards) => {
                debug!(set = %set_id, total = cards.len(), "set loaded");
                self.state = EngineState::Active(ActiveSession {
                    set_id,
                    cards,
                    current: 0,
                    learned: 0,
                    missed: 0,
                    started_at: self.clock.now(),
                });
                Ok(())
            }
            Err(err) => {
                self.state = match prior {
                    Some(session) => EngineState::Active(session),
                    None => EngineState::Idle,
                };
                Err(err)
            }
        }
    }

    /// The card the cursor points at.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotActive` outside an active session.
    pub fn current_card(&self) -> Result<&Card, SessionError> {
        let session = self.active()?;
        Ok(session.cards.get(session.current)?)
    }

    /// Judge a submitted answer against the current card.
    ///
    /// A correct answer bumps the card's correct counter and the session
    /// `learned` tally; an incorrect one bumps the incorrect counters and the
    /// verdict carries the expected answer for display. The cursor never moves
    /// here; the host calls `advance` when it is ready.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotActive` outside an active session.
    pub fn check_answer(&mut self, raw: &str) -> Result<Verdict, SessionError> {
        let session = self.active_mut()?;
        let expected = session.cards.get(session.current)?.answer().to_owned();

        if matching::is_match(raw, &expected) {
            session.cards.record_correct(session.current)?;
            session.learned += 1;
            debug!(index = session.current, "answer correct");
            Ok(Verdict::Correct)
        } else {
            session.cards.record_incorrect(session.current)?;
            session.missed += 1;
            debug!(index = session.current, "answer incorrect");
            Ok(Verdict::Incorrect { expected })
        }
    }

    /// Move the cursor to the next card, wrapping past the end silently.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotActive` outside an active session.
    pub fn advance(&mut self) -> Result<(), SessionError> {
        let session = self.active_mut()?;
        session.current = (session.current + 1) % session.cards.len();
        Ok(())
    }

    /// Aggregate counters for the active session. Pure read.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotActive` outside an active session.
    pub fn stats(&self) -> Result<SessionStats, SessionError> {
        let session = self.active()?;
        Ok(SessionStats {
            total: session.cards.len(),
            learned: session.learned,
            missed: session.missed,
            answered: session.learned + session.missed,
        })
    }

    /// Plain-data view of the current position for renderers.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotActive` outside an active session.
    pub fn snapshot(&self) -> Result<SessionSnapshot, SessionError> {
        let session = self.active()?;
        let card = session.cards.get(session.current)?;
        Ok(SessionSnapshot {
            set_name: session.set_id.as_str().to_owned(),
            prompt: card.prompt().to_owned(),
            position: session.current + 1,
            total: session.cards.len(),
            learned: session.learned,
            card_score: *card.score(),
        })
    }

    /// Name of the active set, if any.
    #[must_use]
    pub fn active_set(&self) -> Option<&SetId> {
        match &self.state {
            EngineState::Active(session) => Some(&session.set_id),
            _ => None,
        }
    }

    /// When the active session was loaded, if any.
    #[must_use]
    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        match &self.state {
            EngineState::Active(session) => Some(session.started_at),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self.state, EngineState::Active(_))
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self.state, EngineState::Loading { .. })
    }

    fn active(&self) -> Result<&ActiveSession, SessionError> {
        match &self.state {
            EngineState::Active(session) => Ok(session),
            _ => Err(SessionError::NotActive),
        }
    }

    fn active_mut(&mut self) -> Result<&mut ActiveSession, SessionError> {
        match &mut self.state {
            EngineState::Active(session) => Ok(session),
            _ => Err(SessionError::NotActive),
        }
    }
}

impl Default for SessionEngine {
    fn default() -> Self {
        Self::new(Clock::default())
    }
}

impl fmt::Debug for SessionEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match &self.state {
            EngineState::Idle => "Idle".to_owned(),
            EngineState::Loading { set_id, .. } => format!("Loading({set_id})"),
            EngineState::Active(session) => format!(
                "Active({}, {}/{})",
                session.set_id,
                session.current,
                session.cards.len()
            ),
        };
        f.debug_struct("SessionEngine")
            .field("generation", &self.generation)
            .field("state", &state)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
