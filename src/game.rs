use crate::guess::{evaluate, is_solution, Verdict};
use crate::lang::{Language, Solution};
use crate::segment::{Segmenter, ThaiSegmenter};
use crate::stats::GameStats;
use crate::storage::{self, FileKvStore, KvStore, SavedGame};

/// Grid width in slots.
pub const WORD_SLOTS: usize = 5;
/// Submissions allowed per session.
pub const MAX_GUESSES: usize = 6;
/// Developer easter egg: submitting this phrase reveals the solution
/// instead of scoring a guess.
pub const REVEAL_PHRASE: &str = "รักเดฟ";

#[derive(Clone, Copy, Debug, PartialEq, Eq, strum_macros::Display)]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

/// What a submission attempt did, surfaced to the presentation layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Word accepted, session still running.
    Accepted,
    /// Word accepted and the session reached a terminal state.
    Finished(GameStatus),
    /// Not in the dictionary; input left untouched.
    NotInWordList,
    /// Input does not fill the grid row.
    WrongLength,
    /// The reveal phrase was entered.
    Reveal,
    /// Session already over; nothing happened.
    Ignored,
}

/// One day's play session: the submission history, the word being typed,
/// and the derived status. All mutation goes through [`press`],
/// [`delete`] and [`submit`]; accepted submissions are persisted and a
/// terminal transition folds the outcome into the statistics record.
///
/// [`press`]: Game::press
/// [`delete`]: Game::delete
/// [`submit`]: Game::submit
pub struct Game {
    pub solution: Solution,
    pub submitted_words: Vec<String>,
    pub current_word: String,
    pub status: GameStatus,
    pub god_mode: bool,
    /// Hydrated from an already-finished or stale save; the outcome is
    /// shown but never counted.
    excluded_from_stats: bool,
    segmenter: Box<dyn Segmenter>,
    language: Language,
    store: Option<Box<dyn KvStore>>,
}

impl Game {
    /// Production construction: Thai segmentation, embedded dictionary,
    /// file-backed persistence.
    pub fn new(solution: Solution) -> Self {
        Self::with_store(solution, Some(Box::new(FileKvStore::new())))
    }

    /// A session with an injected store, or none at all for practice
    /// games that should leave no trace.
    pub fn with_store(solution: Solution, store: Option<Box<dyn KvStore>>) -> Self {
        Self {
            solution,
            submitted_words: Vec::new(),
            current_word: String::new(),
            status: GameStatus::Playing,
            god_mode: false,
            excluded_from_stats: false,
            segmenter: Box::new(ThaiSegmenter),
            language: Language::new("thai".to_string()),
            store,
        }
    }

    /// Restore a persisted session. A matching solution identifier
    /// restores the history exactly; a mismatch discards the stale
    /// history. A discarded save that was still mid-game marks the new
    /// session as not live-played, so its eventual outcome stays out of
    /// the statistics; a discarded finished save is just an earlier
    /// day's result and leaves today's session counted.
    pub fn hydrate(&mut self, saved: SavedGame) {
        if saved.solution == self.solution.word {
            self.submitted_words = saved.submitted_words;
            self.submitted_words.truncate(MAX_GUESSES);
            self.refresh_status();
            self.excluded_from_stats = self.status != GameStatus::Playing;
        } else {
            self.excluded_from_stats = !Self::save_is_finished(&saved);
        }
    }

    /// Whether a save had already reached a terminal state against its
    /// own solution: a winning last word, or a full six-row history.
    fn save_is_finished(saved: &SavedGame) -> bool {
        saved.submitted_words.len() >= MAX_GUESSES
            || saved
                .submitted_words
                .last()
                .is_some_and(|word| *word == saved.solution)
    }

    /// Load whatever the session store holds and hydrate from it.
    pub fn hydrate_from_store(&mut self) {
        let saved = match &self.store {
            Some(store) => storage::load_saved_game(store.as_ref()),
            None => None,
        };
        if let Some(saved) = saved {
            self.hydrate(saved);
        }
    }

    /// Append one typed character. Ignored once the grid row is full or
    /// the session is over; the keystroke is silently dropped either way.
    pub fn press(&mut self, c: char) {
        if self.status != GameStatus::Playing {
            return;
        }
        let mut candidate = self.current_word.clone();
        candidate.push(c);
        if self.segmenter.slot_count(&candidate) > WORD_SLOTS {
            return;
        }
        self.current_word = candidate;
    }

    /// Drop the last slot of the word being typed, combining marks
    /// included. No-op on empty input.
    pub fn delete(&mut self) {
        if self.status != GameStatus::Playing {
            return;
        }
        let mut slots = self.segmenter.segment(&self.current_word);
        slots.pop();
        self.current_word = slots.concat();
    }

    /// Submit the word being typed.
    pub fn submit(&mut self) -> SubmitOutcome {
        if self.status != GameStatus::Playing {
            return SubmitOutcome::Ignored;
        }
        if self.current_word == REVEAL_PHRASE {
            self.god_mode = true;
            self.current_word.clear();
            return SubmitOutcome::Reveal;
        }
        if self.segmenter.slot_count(&self.current_word) != WORD_SLOTS {
            return SubmitOutcome::WrongLength;
        }
        if !self.language.contains(&self.current_word) {
            return SubmitOutcome::NotInWordList;
        }

        let word = std::mem::take(&mut self.current_word);
        self.submitted_words.push(word);
        self.refresh_status();
        self.persist();

        if self.status == GameStatus::Playing {
            SubmitOutcome::Accepted
        } else {
            self.record_outcome();
            SubmitOutcome::Finished(self.status)
        }
    }

    /// Verdicts for one submitted row, derived fresh against the
    /// solution.
    pub fn verdicts_for(&self, word: &str) -> Vec<Verdict> {
        let solution_slots = self.segmenter.segment(&self.solution.word);
        let slots = self.segmenter.segment(word);
        evaluate(&slots, &solution_slots)
    }

    /// Slots of the word currently being typed, for grid rendering.
    pub fn current_slots(&self) -> Vec<String> {
        self.segmenter.segment(&self.current_word)
    }

    pub fn attempts_used(&self) -> usize {
        self.submitted_words.len()
    }

    pub fn is_over(&self) -> bool {
        self.status != GameStatus::Playing
    }

    /// Whether this session's outcome counts toward cumulative
    /// statistics: only sessions played live against a persistent store.
    pub fn counts_toward_stats(&self) -> bool {
        self.store.is_some() && !self.excluded_from_stats
    }

    /// Statistics record as the session store currently holds it.
    pub fn stats_snapshot(&self) -> GameStats {
        match &self.store {
            Some(store) => storage::load_stats(store.as_ref()),
            None => GameStats::default(),
        }
    }

    pub fn segmenter(&self) -> &dyn Segmenter {
        self.segmenter.as_ref()
    }

    fn refresh_status(&mut self) {
        let solution_slots = self.segmenter.segment(&self.solution.word);
        let won = self
            .submitted_words
            .last()
            .map(|word| is_solution(&self.segmenter.segment(word), &solution_slots))
            .unwrap_or(false);

        self.status = if won {
            GameStatus::Won
        } else if self.submitted_words.len() >= MAX_GUESSES {
            GameStatus::Lost
        } else {
            GameStatus::Playing
        };
    }

    fn persist(&mut self) {
        let saved = SavedGame {
            solution: self.solution.word.clone(),
            submitted_words: self.submitted_words.clone(),
        };
        if let Some(store) = &mut self.store {
            // Failure to write degrades to an unsaved session.
            let _ = storage::save_game(store.as_mut(), &saved);
        }
    }

    fn record_outcome(&mut self) {
        if !self.counts_toward_stats() {
            return;
        }
        let (status, attempts) = (self.status, self.attempts_used());
        if let Some(store) = &mut self.store {
            let mut stats = storage::load_stats(store.as_ref());
            stats.record_finished(status, attempts);
            let _ = storage::save_stats(store.as_mut(), &stats);
        }
    }
}
