//! Session persistence
//!
//! Saves the session after every action and restores it on startup. A record
//! from another day or for another puzzle starts a fresh game, and so does a
//! record that fails to parse.

mod record;
mod store;

pub use record::{RecordError, SCHEMA_VERSION, SessionRecord};
pub use store::{FileStore, KeyValueStore, MemoryStore, StoreError};

use crate::engine::PuzzleSession;
use crate::puzzles::Dataset;
use chrono::NaiveDate;

/// Key holding the serialized session
pub const SESSION_KEY: &str = "bandadle-session";

/// Key holding the date the intro was last dismissed
pub const INTRO_KEY: &str = "bandadle-intro-seen";

/// Session chosen at startup
#[derive(Debug, Clone)]
pub struct Startup {
    pub session: PuzzleSession,
    /// `true` if the session came from the store
    pub resumed: bool,
}

/// Write `session` to the store
///
/// # Errors
///
/// Returns an error if the record cannot be serialized or written.
pub fn save_session<S>(store: &mut S, session: &PuzzleSession) -> anyhow::Result<()>
where
    S: KeyValueStore + ?Sized,
{
    let json = SessionRecord::from(session).to_json()?;
    store.set(SESSION_KEY, &json)?;
    Ok(())
}

/// Save, logging rather than returning failures
///
/// The game keeps running when the store is unwritable.
pub fn persist<S>(store: &mut S, session: &PuzzleSession)
where
    S: KeyValueStore + ?Sized,
{
    if let Err(e) = save_session(store, session) {
        tracing::warn!("Failed to save session: {e:#}");
    }
}

/// Read the stored session, if there is a valid one
///
/// Unreadable or rejected records are logged and treated as absent.
#[must_use]
pub fn load_session<S>(store: &S) -> Option<PuzzleSession>
where
    S: KeyValueStore + ?Sized,
{
    let json = match store.get(SESSION_KEY) {
        Ok(Some(json)) => json,
        Ok(None) => return None,
        Err(e) => {
            tracing::warn!("Failed to read stored session: {e}");
            return None;
        }
    };

    match SessionRecord::parse(&json) {
        Ok(session) => Some(session),
        Err(e) => {
            tracing::warn!("Discarding stored session: {e}");
            None
        }
    }
}

/// Delete the stored session
///
/// # Errors
///
/// Returns an error if the store cannot delete the key.
pub fn discard_session<S>(store: &mut S) -> Result<(), StoreError>
where
    S: KeyValueStore + ?Sized,
{
    store.remove(SESSION_KEY)
}

/// Pick the session to play at startup
///
/// An explicit date always starts fresh. Otherwise the stored session is
/// resumed when it was created `today` for the puzzle that `today` selects.
#[must_use]
pub fn restore_or_initialize<S>(
    store: &S,
    dataset: &Dataset,
    today: NaiveDate,
    date_override: Option<&str>,
) -> Startup
where
    S: KeyValueStore + ?Sized,
{
    let puzzle_id = dataset.resolve_date(today, date_override);

    if date_override.is_none() {
        if let Some(session) = load_session(store) {
            if session.current_date() == today && session.puzzle_id() == puzzle_id {
                tracing::info!(puzzle = puzzle_id, "Resumed stored session");
                return Startup {
                    session,
                    resumed: true,
                };
            }
            tracing::info!(
                stored = session.puzzle_id(),
                puzzle = puzzle_id,
                "Stored session is stale, starting fresh"
            );
        }
    }

    Startup {
        session: PuzzleSession::initialize(dataset, puzzle_id, today),
        resumed: false,
    }
}

/// Whether the intro was already dismissed `today`
#[must_use]
pub fn intro_seen<S>(store: &S, today: NaiveDate) -> bool
where
    S: KeyValueStore + ?Sized,
{
    matches!(store.get(INTRO_KEY), Ok(Some(date)) if date.trim() == today.to_string())
}

/// Remember that the intro was dismissed `today`
///
/// # Errors
///
/// Returns an error if the store cannot write.
pub fn mark_intro_seen<S>(store: &mut S, today: NaiveDate) -> Result<(), StoreError>
where
    S: KeyValueStore + ?Sized,
{
    store.set(INTRO_KEY, &today.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::fixtures::{PUZZLE_ID, puzzle, solve, today};
    use chrono::{Days, Utc};
    use std::collections::BTreeMap;

    fn dataset() -> Dataset {
        let mut puzzles = BTreeMap::new();
        puzzles.insert("2026-10-16".to_string(), puzzle());
        puzzles.insert(PUZZLE_ID.to_string(), puzzle());
        Dataset::from_puzzles(puzzles).unwrap()
    }

    fn stored(session: &PuzzleSession) -> MemoryStore {
        let mut store = MemoryStore::new();
        save_session(&mut store, session).unwrap();
        store
    }

    #[test]
    fn empty_store_starts_fresh() {
        let startup = restore_or_initialize(&MemoryStore::new(), &dataset(), today(), None);
        assert!(!startup.resumed);
        assert_eq!(startup.session.puzzle_id(), PUZZLE_ID);
        assert_eq!(startup.session.current_date(), today());
    }

    #[test]
    fn same_day_session_resumes() {
        let dataset = dataset();
        let mut session = PuzzleSession::initialize(&dataset, PUZZLE_ID, today());
        session.start(Utc::now());
        solve(&mut session, 1);

        let startup = restore_or_initialize(&stored(&session), &dataset, today(), None);
        assert!(startup.resumed);
        assert_eq!(startup.session, session);
    }

    #[test]
    fn previous_day_session_is_replaced() {
        let dataset = dataset();
        let yesterday = today().checked_sub_days(Days::new(1)).unwrap();
        let mut session = PuzzleSession::initialize(&dataset, PUZZLE_ID, yesterday);
        solve(&mut session, 0);

        let startup = restore_or_initialize(&stored(&session), &dataset, today(), None);
        assert!(!startup.resumed);
        assert_eq!(startup.session.solved_count(), 0);
    }

    #[test]
    fn session_for_other_puzzle_is_replaced() {
        let dataset = dataset();
        let session = PuzzleSession::initialize(&dataset, "2026-10-16", today());

        let startup = restore_or_initialize(&stored(&session), &dataset, today(), None);
        assert!(!startup.resumed);
        assert_eq!(startup.session.puzzle_id(), PUZZLE_ID);
    }

    #[test]
    fn date_override_always_starts_fresh() {
        let dataset = dataset();
        let mut session = PuzzleSession::initialize(&dataset, PUZZLE_ID, today());
        solve(&mut session, 0);

        let startup =
            restore_or_initialize(&stored(&session), &dataset, today(), Some(PUZZLE_ID));
        assert!(!startup.resumed);
        assert_eq!(startup.session.solved_count(), 0);

        let startup =
            restore_or_initialize(&stored(&session), &dataset, today(), Some("2026-10-16"));
        assert_eq!(startup.session.puzzle_id(), "2026-10-16");
    }

    #[test]
    fn corrupt_record_starts_fresh() {
        let mut store = MemoryStore::new();
        store.set(SESSION_KEY, "{\"version\":3").unwrap();

        assert!(load_session(&store).is_none());
        let startup = restore_or_initialize(&store, &dataset(), today(), None);
        assert!(!startup.resumed);
    }

    #[test]
    fn discard_removes_record() {
        let mut store = stored(&PuzzleSession::initialize(&dataset(), PUZZLE_ID, today()));
        assert!(load_session(&store).is_some());

        discard_session(&mut store).unwrap();
        assert!(load_session(&store).is_none());
    }

    #[test]
    fn intro_flag_is_per_day() {
        let mut store = MemoryStore::new();
        assert!(!intro_seen(&store, today()));

        mark_intro_seen(&mut store, today()).unwrap();
        assert!(intro_seen(&store, today()));

        let tomorrow = today().checked_add_days(Days::new(1)).unwrap();
        assert!(!intro_seen(&store, tomorrow));
    }
}
