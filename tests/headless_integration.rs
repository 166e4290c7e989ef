use std::sync::mpsc;
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use thordle::game::{Game, GameStatus, SubmitOutcome};
use thordle::lang::Solution;
use thordle::runtime::{FixedTicker, GameEvent, Runner, TestEventSource};

// Drives a full round through Runner/TestEventSource with no TTY attached,
// feeding keys over a channel the way the crossterm reader thread would.
#[test]
fn headless_win_flow_completes() {
    let mut game = Game::with_store(
        Solution {
            word: "กระจก".to_string(),
            day: 0,
        },
        None,
    );

    let (tx, rx) = mpsc::channel();
    let runner = Runner::new(
        TestEventSource::new(rx),
        FixedTicker::new(Duration::from_millis(5)),
    );

    // Queue the winning word followed by Enter.
    for c in "กระจก".chars() {
        tx.send(GameEvent::Key(KeyEvent::new(
            KeyCode::Char(c),
            KeyModifiers::NONE,
        )))
        .unwrap();
    }
    tx.send(GameEvent::Key(KeyEvent::new(
        KeyCode::Enter,
        KeyModifiers::NONE,
    )))
    .unwrap();

    // Pump events until the round is decided, with a hard step cap.
    let mut finished = false;
    for _ in 0..100u32 {
        match runner.step() {
            GameEvent::Tick | GameEvent::Resize => {}
            GameEvent::Key(key) => match key.code {
                KeyCode::Char(c) => game.press(c),
                KeyCode::Enter => {
                    if let SubmitOutcome::Finished(_) = game.submit() {
                        finished = true;
                        break;
                    }
                }
                _ => {}
            },
        }
    }

    assert!(finished, "game should have finished");
    assert_eq!(game.status, GameStatus::Won);
    assert_eq!(game.attempts_used(), 1);
}

#[test]
fn headless_backspace_edits_input() {
    let mut game = Game::with_store(
        Solution {
            word: "กระจก".to_string(),
            day: 0,
        },
        None,
    );

    let (tx, rx) = mpsc::channel();
    let runner = Runner::new(
        TestEventSource::new(rx),
        FixedTicker::new(Duration::from_millis(5)),
    );

    for c in "กรถ".chars() {
        tx.send(GameEvent::Key(KeyEvent::new(
            KeyCode::Char(c),
            KeyModifiers::NONE,
        )))
        .unwrap();
    }
    tx.send(GameEvent::Key(KeyEvent::new(
        KeyCode::Backspace,
        KeyModifiers::NONE,
    )))
    .unwrap();

    for _ in 0..10u32 {
        match runner.step() {
            GameEvent::Key(key) => match key.code {
                KeyCode::Char(c) => game.press(c),
                KeyCode::Backspace => game.delete(),
                _ => {}
            },
            _ => {}
        }
    }

    assert_eq!(game.current_word, "กร");
}
