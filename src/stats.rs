use crate::game::{GameStatus, MAX_GUESSES};
use crate::guess::evaluate;
use crate::segment::Segmenter;
use chrono::NaiveDate;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// Cumulative play record, persisted across sessions and updated exactly
/// once per completed, live-played game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStats {
    pub total_played: u32,
    pub total_won: u32,
    pub current_streak: u32,
    pub max_streak: u32,
    /// Wins by number of guesses used; index 0 is a first-try win.
    pub guess_distribution: [u32; MAX_GUESSES],
    pub last_played: Option<NaiveDate>,
}

impl Default for GameStats {
    fn default() -> Self {
        Self {
            total_played: 0,
            total_won: 0,
            current_streak: 0,
            max_streak: 0,
            guess_distribution: [0; MAX_GUESSES],
            last_played: None,
        }
    }
}

impl GameStats {
    /// Fold one finished session into the record. `attempts_used` is the
    /// number of submissions the session consumed (1..=6). Sessions that
    /// were hydrated finished or stale never reach this method.
    pub fn record_finished(&mut self, status: GameStatus, attempts_used: usize) {
        debug_assert!(status != GameStatus::Playing);
        debug_assert!((1..=MAX_GUESSES).contains(&attempts_used));

        self.total_played += 1;
        match status {
            GameStatus::Won => {
                self.total_won += 1;
                self.current_streak += 1;
                self.max_streak = self.max_streak.max(self.current_streak);
                if let Some(bucket) = self.guess_distribution.get_mut(attempts_used - 1) {
                    *bucket += 1;
                }
            }
            _ => {
                self.current_streak = 0;
            }
        }
        self.last_played = Some(chrono::Local::now().date_naive());
    }

    pub fn win_percent(&self) -> u32 {
        if self.total_played == 0 {
            return 0;
        }
        (self.total_won * 100) / self.total_played
    }
}

/// Render the verdict grid of a finished session as share text, one
/// symbol row per submission. Verdicts are recomputed from the stored
/// words, never cached.
pub fn shareable_grid(
    submitted_words: &[String],
    solution: &str,
    segmenter: &dyn Segmenter,
) -> String {
    let solution_slots = segmenter.segment(solution);
    submitted_words
        .iter()
        .map(|word| {
            evaluate(&segmenter.segment(word), &solution_slots)
                .into_iter()
                .map(|v| v.symbol())
                .collect::<String>()
        })
        .join("\n")
}
