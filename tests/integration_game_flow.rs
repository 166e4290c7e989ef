use assert_matches::assert_matches;
use tempfile::tempdir;

use thordle::game::{Game, GameStatus, SubmitOutcome, MAX_GUESSES};
use thordle::lang::Solution;
use thordle::storage::{self, FileKvStore, KvStore, SavedGame};

const SOLUTION: &str = "กระจก";
const MISSES: [&str; 6] = ["กระทบ", "มะนาว", "อากาศ", "อาหาร", "ตำรวจ", "สะพาน"];

fn solution() -> Solution {
    Solution {
        word: SOLUTION.to_string(),
        day: 42,
    }
}

fn game_in(dir: &std::path::Path) -> Game {
    Game::with_store(solution(), Some(Box::new(FileKvStore::with_dir(dir))))
}

fn submit_word(game: &mut Game, word: &str) -> SubmitOutcome {
    for c in word.chars() {
        game.press(c);
    }
    game.submit()
}

#[test]
fn win_flow_updates_store_and_stats() {
    let dir = tempdir().unwrap();
    let mut game = game_in(dir.path());

    assert_eq!(submit_word(&mut game, MISSES[0]), SubmitOutcome::Accepted);
    assert_matches!(
        submit_word(&mut game, SOLUTION),
        SubmitOutcome::Finished(GameStatus::Won)
    );

    let store = FileKvStore::with_dir(dir.path());
    let saved = storage::load_saved_game(&store).unwrap();
    assert_eq!(saved.solution, SOLUTION);
    assert_eq!(saved.submitted_words.len(), 2);

    let stats = storage::load_stats(&store);
    assert_eq!(stats.total_played, 1);
    assert_eq!(stats.total_won, 1);
    assert_eq!(stats.current_streak, 1);
    assert_eq!(stats.guess_distribution[1], 1);
}

#[test]
fn loss_flow_takes_exactly_six_misses() {
    let dir = tempdir().unwrap();
    let mut game = game_in(dir.path());

    for miss in &MISSES[..5] {
        assert_eq!(submit_word(&mut game, miss), SubmitOutcome::Accepted);
    }
    assert_matches!(
        submit_word(&mut game, MISSES[5]),
        SubmitOutcome::Finished(GameStatus::Lost)
    );
    assert_eq!(game.attempts_used(), MAX_GUESSES);

    // A seventh word is never accepted.
    assert_eq!(submit_word(&mut game, SOLUTION), SubmitOutcome::Ignored);
    assert_eq!(game.attempts_used(), MAX_GUESSES);

    let stats = storage::load_stats(&FileKvStore::with_dir(dir.path()));
    assert_eq!(stats.total_played, 1);
    assert_eq!(stats.total_won, 0);
    assert_eq!(stats.current_streak, 0);
}

#[test]
fn reload_mid_game_restores_history() {
    let dir = tempdir().unwrap();
    {
        let mut game = game_in(dir.path());
        submit_word(&mut game, MISSES[0]);
        submit_word(&mut game, MISSES[1]);
    }

    let mut reloaded = game_in(dir.path());
    reloaded.hydrate_from_store();
    assert_eq!(
        reloaded.submitted_words,
        vec![MISSES[0].to_string(), MISSES[1].to_string()]
    );
    assert_eq!(reloaded.status, GameStatus::Playing);
    assert!(reloaded.counts_toward_stats());
}

#[test]
fn stale_save_starts_fresh_and_is_excluded() {
    let dir = tempdir().unwrap();
    {
        let mut store = FileKvStore::with_dir(dir.path());
        storage::save_game(
            &mut store,
            &SavedGame {
                solution: "มะนาว".to_string(),
                submitted_words: vec![MISSES[0].to_string()],
            },
        )
        .unwrap();
    }

    let mut game = game_in(dir.path());
    game.hydrate_from_store();
    assert!(game.submitted_words.is_empty());
    assert_eq!(game.status, GameStatus::Playing);

    // The eventual outcome is shown but kept out of the statistics.
    assert_matches!(
        submit_word(&mut game, SOLUTION),
        SubmitOutcome::Finished(GameStatus::Won)
    );
    let stats = storage::load_stats(&FileKvStore::with_dir(dir.path()));
    assert_eq!(stats.total_played, 0);
}

#[test]
fn malformed_save_reads_as_fresh_session() {
    let dir = tempdir().unwrap();
    {
        let mut store = FileKvStore::with_dir(dir.path());
        store.set(storage::GAME_KEY, "!!not json!!").unwrap();
        store.set(storage::STATS_KEY, "\"nope\"").unwrap();
    }

    let mut game = game_in(dir.path());
    game.hydrate_from_store();
    assert!(game.submitted_words.is_empty());
    assert_eq!(game.status, GameStatus::Playing);
    assert!(game.counts_toward_stats());
    assert_eq!(game.stats_snapshot().total_played, 0);
}

#[test]
fn stats_accumulate_across_sessions() {
    let dir = tempdir().unwrap();

    {
        let mut game = game_in(dir.path());
        submit_word(&mut game, SOLUTION);
    }
    {
        // A new day, a new solution, same stats record. Hydrating sees
        // yesterday's finished save and discards it.
        let mut game = Game::with_store(
            Solution {
                word: "แตงโม".to_string(),
                day: 43,
            },
            Some(Box::new(FileKvStore::with_dir(dir.path()))),
        );
        game.hydrate_from_store();
        assert!(game.counts_toward_stats());
        for miss in MISSES {
            submit_word(&mut game, miss);
        }
        assert_eq!(game.status, GameStatus::Lost);
    }

    let stats = storage::load_stats(&FileKvStore::with_dir(dir.path()));
    assert_eq!(stats.total_played, 2);
    assert_eq!(stats.total_won, 1);
    assert_eq!(stats.current_streak, 0);
    assert_eq!(stats.max_streak, 1);
    assert_eq!(stats.guess_distribution.iter().sum::<u32>(), 1);
}

#[test]
fn consecutive_daily_wins_both_count() {
    let dir = tempdir().unwrap();

    let day_two = Solution {
        word: "แตงโม".to_string(),
        day: 43,
    };
    for solution in [solution(), day_two] {
        let word = solution.word.clone();
        let mut game = Game::with_store(
            solution,
            Some(Box::new(FileKvStore::with_dir(dir.path()))),
        );
        game.hydrate_from_store();
        assert_matches!(
            submit_word(&mut game, &word),
            SubmitOutcome::Finished(GameStatus::Won)
        );
    }

    let stats = storage::load_stats(&FileKvStore::with_dir(dir.path()));
    assert_eq!(stats.total_played, 2);
    assert_eq!(stats.total_won, 2);
    assert_eq!(stats.current_streak, 2);
}

#[test]
fn finished_save_reloads_terminal_without_recounting() {
    let dir = tempdir().unwrap();
    {
        let mut game = game_in(dir.path());
        submit_word(&mut game, SOLUTION);
    }

    let mut reloaded = game_in(dir.path());
    reloaded.hydrate_from_store();
    assert_eq!(reloaded.status, GameStatus::Won);
    assert!(!reloaded.counts_toward_stats());

    // Still one recorded game, not two.
    let stats = storage::load_stats(&FileKvStore::with_dir(dir.path()));
    assert_eq!(stats.total_played, 1);
}
