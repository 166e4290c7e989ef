pub mod ui;

use chrono::Local;
use clap::{error::ErrorKind, CommandFactory, Parser};
use crossterm::{
    event::{KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::{
    error::Error,
    io::{self, stdin},
    time::Duration,
};

use thordle::game::{Game, GameStatus, SubmitOutcome, MAX_GUESSES};
use thordle::lang::Language;
use thordle::runtime::{Countdown, CrosstermEventSource, FixedTicker, GameEvent, Runner};
use thordle::stats::{shareable_grid, GameStats};
use thordle::storage::{self, FileKvStore};

const TICK_RATE_MS: u64 = 100;
/// Ticks before a transient notice dismisses itself.
const NOTICE_TICKS: u8 = 20;

/// thai word-guessing game for the terminal
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "Guess the five-cell Thai word of the day in six tries. Combining marks share a cell with their consonant; verdicts are shown per cell and on the keyboard."
)]
pub struct Cli {
    /// practice a specific solution word instead of today's word (not saved, not counted)
    #[clap(short, long)]
    word: Option<String>,

    /// practice a random word (not saved, not counted)
    #[clap(short, long)]
    random: bool,

    /// print cumulative statistics and exit
    #[clap(long)]
    stats: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AppState {
    Board,
    Summary,
}

/// Transient alert line, dismissed after a fixed number of ticks.
#[derive(Debug, Clone)]
pub struct Notice {
    pub text: String,
    pub countdown: Countdown,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Mode {
    Daily,
    Practice,
}

pub struct App {
    pub game: Game,
    pub stats: GameStats,
    pub state: AppState,
    pub notice: Option<Notice>,
    pub mode: Mode,
}

impl App {
    pub fn new(cli: &Cli) -> Result<Self, String> {
        let language = Language::new("thai".to_string());

        let (solution, mode) = if let Some(word) = &cli.word {
            let solution = language
                .solution_for_word(word)
                .ok_or_else(|| format!("'{}' is not in the word list", word))?;
            (solution, Mode::Practice)
        } else if cli.random {
            (language.random_solution(), Mode::Practice)
        } else {
            (
                language.solution_of_day(Local::now().date_naive()),
                Mode::Daily,
            )
        };

        let mut game = match mode {
            Mode::Daily => Game::new(solution),
            Mode::Practice => Game::with_store(solution, None),
        };
        game.hydrate_from_store();

        let stats = game.stats_snapshot();
        let state = if game.is_over() {
            AppState::Summary
        } else {
            AppState::Board
        };

        Ok(Self {
            game,
            stats,
            state,
            notice: None,
            mode,
        })
    }

    pub fn on_tick(&mut self) {
        if let Some(notice) = &mut self.notice {
            if notice.countdown.tick() {
                self.notice = None;
            }
        }
    }

    pub fn show_notice(&mut self, text: &str) {
        self.notice = Some(Notice {
            text: text.to_string(),
            countdown: Countdown::new(NOTICE_TICKS),
        });
    }

    pub fn on_enter(&mut self) {
        match self.game.submit() {
            SubmitOutcome::Accepted => {}
            SubmitOutcome::Finished(_) => {
                self.stats = self.game.stats_snapshot();
                self.state = AppState::Summary;
            }
            SubmitOutcome::NotInWordList => self.show_notice("ไม่พบคำนี้ในพจนานุกรม"),
            SubmitOutcome::WrongLength => self.show_notice("ต้องพิมพ์ให้ครบ 5 ช่อง"),
            SubmitOutcome::Reveal => self.show_notice("เปิดโหมดเฉลย"),
            SubmitOutcome::Ignored => {}
        }
    }

    pub fn toggle_summary(&mut self) {
        self.state = match self.state {
            AppState::Board => AppState::Summary,
            AppState::Summary => AppState::Board,
        };
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if cli.stats {
        print_stats();
        return Ok(());
    }

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    let mut app = match App::new(&cli) {
        Ok(app) => app,
        Err(msg) => {
            let mut cmd = Cli::command();
            cmd.error(ErrorKind::InvalidValue, msg).exit();
        }
    };

    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = start_tui(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    result?;

    // Share sink: a finished board is echoed to stdout for copy/paste.
    if app.game.is_over() {
        println!("{}", share_text(&app.game));
    }

    Ok(())
}

fn start_tui<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<(), Box<dyn Error>> {
    let runner = Runner::new(
        CrosstermEventSource::new(),
        FixedTicker::new(Duration::from_millis(TICK_RATE_MS)),
    );

    loop {
        terminal.draw(|f| f.render_widget(&*app, f.area()))?;

        match runner.step() {
            GameEvent::Tick => app.on_tick(),
            GameEvent::Resize => {}
            GameEvent::Key(key) => match key.code {
                KeyCode::Esc => break,
                KeyCode::Backspace => app.game.delete(),
                KeyCode::Enter => app.on_enter(),
                KeyCode::Char(c) => {
                    if key.modifiers.contains(KeyModifiers::CONTROL) && c == 'c' {
                        break;
                    }
                    if c.is_ascii() {
                        // ASCII keys steer the shell; Thai keys feed the game.
                        match c {
                            'q' => break,
                            's' => app.toggle_summary(),
                            _ => {}
                        }
                    } else {
                        app.game.press(c);
                    }
                }
                _ => {}
            },
        }
    }

    Ok(())
}

/// Wordle-style share text: a header naming the rotation day and the
/// attempt count, then one verdict row per submission.
fn share_text(game: &Game) -> String {
    let attempts = match game.status {
        GameStatus::Won => game.attempts_used().to_string(),
        _ => "X".to_string(),
    };
    let header = if game.solution.day >= 0 {
        format!("thordle {} {}/{}", game.solution.day, attempts, MAX_GUESSES)
    } else {
        format!("thordle (practice) {}/{}", attempts, MAX_GUESSES)
    };
    let grid = shareable_grid(
        &game.submitted_words,
        &game.solution.word,
        game.segmenter(),
    );
    format!("{}\n\n{}", header, grid)
}

fn print_stats() {
    let store = FileKvStore::new();
    let stats = storage::load_stats(&store);
    println!("played          {}", stats.total_played);
    println!("won             {}", stats.total_won);
    println!("win %           {}", stats.win_percent());
    println!("current streak  {}", stats.current_streak);
    println!("max streak      {}", stats.max_streak);
    for (i, count) in stats.guess_distribution.iter().enumerate() {
        println!("{} guesses       {}", i + 1, count);
    }
}
