//! Puzzle session state and transitions

use crate::core::words::{answer_words, sentence, tokenize};
use crate::core::{Clue, ClueId, HintTable};
use crate::puzzles::{Dataset, Puzzle};
use chrono::{DateTime, NaiveDate, Utc};
use rand::Rng;
use rand::seq::SliceRandom;
use rustc_hash::FxHashSet;

/// Most red herrings drawn for a single hint
pub const MAX_RED_HERRINGS: usize = 3;

/// What a successful match did to the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solve {
    pub clue_id: ClueId,
    /// Words removed from the pool, in display order
    pub retired: Vec<String>,
    /// Whether this solve finished the puzzle
    pub completed: bool,
}

/// Complete mutable state of one day's puzzle attempt
///
/// Every player action is one method call. Calls never fail: input that
/// does not apply (a hint on a solved clue, a bad index) is ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleSession {
    pub(crate) puzzle_id: String,
    pub(crate) current_date: NaiveDate,
    pub(crate) title: String,
    pub(crate) clues: Vec<Clue>,
    pub(crate) available_words: Vec<String>,
    pub(crate) selected_words: Vec<String>,
    pub(crate) hinted_words: HintTable,
    pub(crate) game_completed: bool,
    pub(crate) start_time: Option<DateTime<Utc>>,
    pub(crate) end_time: Option<DateTime<Utc>>,
    pub(crate) forfeited: bool,
}

impl PuzzleSession {
    /// Start a fresh session for `puzzle_id`, or the latest puzzle if unknown
    #[must_use]
    pub fn initialize(dataset: &Dataset, puzzle_id: &str, today: NaiveDate) -> Self {
        let (date, puzzle) = dataset.puzzle_or_latest(puzzle_id);
        if date != puzzle_id {
            tracing::debug!("No puzzle {puzzle_id:?}, using latest puzzle {date}");
        }

        let session = Self::from_puzzle(date, puzzle, today);
        tracing::info!(
            puzzle = date,
            words = session.available_words.len(),
            "Started new puzzle session"
        );
        session
    }

    /// Start a fresh session from an already loaded puzzle
    ///
    /// # Examples
    /// ```
    /// use bandadle::engine::PuzzleSession;
    /// use bandadle::puzzles::Dataset;
    /// use chrono::NaiveDate;
    ///
    /// let dataset = Dataset::embedded().unwrap();
    /// let date = dataset.latest_date();
    /// let today = NaiveDate::from_ymd_opt(2026, 10, 17).unwrap();
    ///
    /// let session = PuzzleSession::from_puzzle(date, dataset.get(date).unwrap(), today);
    /// assert_eq!(session.clues().len(), 4);
    /// assert!(session.selected_words().is_empty());
    /// assert!(!session.is_completed());
    /// ```
    #[must_use]
    pub fn from_puzzle(puzzle_id: &str, puzzle: &Puzzle, today: NaiveDate) -> Self {
        Self {
            puzzle_id: puzzle_id.to_string(),
            current_date: today,
            title: puzzle.title.clone(),
            clues: puzzle.clues(),
            available_words: puzzle.word_pool(),
            selected_words: Vec::new(),
            hinted_words: HintTable::new(),
            game_completed: false,
            start_time: None,
            end_time: None,
            forfeited: false,
        }
    }

    /// Begin timing play; ignored once started or finished
    pub fn start(&mut self, now: DateTime<Utc>) -> bool {
        if self.start_time.is_some() || self.game_completed {
            return false;
        }
        self.start_time = Some(now);
        true
    }

    /// Append `token` to the sentence and try to match it
    ///
    /// The token is not checked against the available words.
    pub fn select_word(&mut self, token: impl Into<String>) -> Option<Solve> {
        self.selected_words.push(token.into());
        let candidate = self.selected_words.clone();
        self.try_match(&candidate)
    }

    /// Remove the word at `index` from the sentence
    ///
    /// Out-of-range indices are ignored. Matching is not re-run; callers that
    /// want it follow up with [`recheck`](Self::recheck).
    pub fn remove_word(&mut self, index: usize) -> Option<String> {
        (index < self.selected_words.len()).then(|| self.selected_words.remove(index))
    }

    /// Remove the last word of the sentence
    pub fn remove_last_word(&mut self) -> Option<String> {
        self.selected_words.pop()
    }

    pub fn clear_sentence(&mut self) {
        self.selected_words.clear();
    }

    /// Match the current sentence again, e.g. after a removal
    pub fn recheck(&mut self) -> Option<Solve> {
        if self.selected_words.is_empty() {
            return None;
        }
        let candidate = self.selected_words.clone();
        self.try_match(&candidate)
    }

    /// Compare `candidate` against every unsolved clue and apply a match
    ///
    /// Clues are scanned in id order and the first exact (case-insensitive)
    /// match wins. On a match the clue is solved, its words and any of its
    /// unneeded red herrings leave the pool, and the sentence is cleared.
    /// Without a match nothing changes.
    pub fn try_match(&mut self, candidate: &[String]) -> Option<Solve> {
        let sentence = sentence(candidate);
        let index = self
            .clues
            .iter()
            .position(|clue| !clue.solved && clue.is_answered_by(&sentence))?;

        let clue = &mut self.clues[index];
        clue.solved = true;
        let clue_id = clue.id;
        let was_hinted = clue.hinted;

        let still_required = answer_words(self.clues.iter().filter(|c| !c.solved));
        let mut retire: FxHashSet<String> = tokenize(&sentence).collect();

        // Highlighting for this clue goes away whether or not the word does
        let highlighted = self.hinted_words.release(clue_id);
        if was_hinted {
            retire.extend(
                highlighted
                    .into_iter()
                    .filter(|token| !still_required.contains(token)),
            );
        }

        let mut retired = Vec::new();
        self.available_words.retain(|word| {
            if retire.contains(&word.to_lowercase()) {
                retired.push(word.clone());
                false
            } else {
                true
            }
        });
        self.selected_words.clear();

        let completed = self.clues.iter().all(|c| c.solved);
        if completed {
            self.complete();
        }

        tracing::debug!(
            clue = clue_id,
            retired = retired.len(),
            completed,
            "Clue solved"
        );

        Some(Solve {
            clue_id,
            retired,
            completed,
        })
    }

    /// Highlight a clue's answer words among up to three red herrings
    ///
    /// Returns the red herrings drawn, or `None` if the clue is unknown or
    /// already solved. Herrings are drawn from available words that belong
    /// to no answer at all.
    pub fn request_hint<R: Rng + ?Sized>(
        &mut self,
        clue_id: ClueId,
        rng: &mut R,
    ) -> Option<Vec<String>> {
        let clue = self.clues.iter_mut().find(|c| c.id == clue_id)?;
        if clue.solved {
            return None;
        }
        clue.hinted = true;
        let answer_tokens = clue.answer_tokens();

        let all_answers = answer_words(&self.clues);
        let mut pool: Vec<String> = self
            .available_words
            .iter()
            .map(|word| word.to_lowercase())
            .filter(|word| !all_answers.contains(word))
            .collect();
        pool.shuffle(rng);
        pool.truncate(MAX_RED_HERRINGS);

        for token in answer_tokens.iter().chain(&pool) {
            self.hinted_words.assign(token, clue_id);
        }

        tracing::debug!(clue = clue_id, herrings = ?pool, "Hint requested");
        Some(pool)
    }

    /// Give up: reveal every unsolved clue as failed and finish the game
    ///
    /// Red herrings still highlighted leave the pool. Returns `false` if the
    /// game was already over.
    pub fn forfeit(&mut self) -> bool {
        if self.game_completed {
            return false;
        }

        for clue in self.clues.iter_mut().filter(|c| !c.solved) {
            clue.solved = true;
            clue.failed = true;
        }

        let all_answers = answer_words(&self.clues);
        let herrings: FxHashSet<&str> = self
            .hinted_words
            .iter()
            .map(|(token, _)| token)
            .filter(|token| !all_answers.contains(*token))
            .collect();
        self.available_words
            .retain(|word| !herrings.contains(word.to_lowercase().as_str()));
        self.hinted_words.clear();

        self.forfeited = true;
        self.complete();
        tracing::info!(puzzle = %self.puzzle_id, "Puzzle forfeited");
        true
    }

    fn complete(&mut self) {
        self.game_completed = true;
        if self.end_time.is_none() {
            self.end_time = Some(Utc::now());
        }
    }

    #[must_use]
    pub fn puzzle_id(&self) -> &str {
        &self.puzzle_id
    }

    /// Calendar date this session was created on
    #[must_use]
    pub const fn current_date(&self) -> NaiveDate {
        self.current_date
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn clues(&self) -> &[Clue] {
        &self.clues
    }

    #[must_use]
    pub fn clue(&self, clue_id: ClueId) -> Option<&Clue> {
        self.clues.iter().find(|c| c.id == clue_id)
    }

    #[must_use]
    pub fn available_words(&self) -> &[String] {
        &self.available_words
    }

    #[must_use]
    pub fn selected_words(&self) -> &[String] {
        &self.selected_words
    }

    /// The sentence built so far, as compared against answers
    #[must_use]
    pub fn sentence(&self) -> String {
        sentence(&self.selected_words)
    }

    #[must_use]
    pub const fn hinted_words(&self) -> &HintTable {
        &self.hinted_words
    }

    /// Clue whose hint currently highlights `token`
    #[must_use]
    pub fn hint_owner(&self, token: &str) -> Option<ClueId> {
        self.hinted_words.owner(token)
    }

    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.game_completed
    }

    #[must_use]
    pub const fn is_forfeited(&self) -> bool {
        self.forfeited
    }

    #[must_use]
    pub const fn start_time(&self) -> Option<DateTime<Utc>> {
        self.start_time
    }

    #[must_use]
    pub const fn end_time(&self) -> Option<DateTime<Utc>> {
        self.end_time
    }

    /// Clues solved by the player, not revealed by a forfeit
    #[must_use]
    pub fn solved_count(&self) -> usize {
        self.clues.iter().filter(|c| c.solved && !c.failed).count()
    }

    #[must_use]
    pub fn failed_count(&self) -> usize {
        self.clues.iter().filter(|c| c.failed).count()
    }

    #[must_use]
    pub fn hinted_count(&self) -> usize {
        self.clues.iter().filter(|c| c.hinted).count()
    }
}
