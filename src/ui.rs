use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::{App, AppState, Mode};
use thordle::game::{GameStatus, MAX_GUESSES, WORD_SLOTS};
use thordle::guess::{keyboard_hints, Verdict};
use thordle::stats::shareable_grid;

const HORIZONTAL_MARGIN: u16 = 2;
const VERTICAL_MARGIN: u16 = 1;
/// Padded width of one grid cell; Thai slots render one column wide.
const CELL_WIDTH: usize = 3;

/// Kedmanee layout rows, unshifted plus the shifted extras the word list
/// needs. ASCII keys never reach the game, so only Thai keys are shown.
const KEYBOARD_ROWS: [&str; 5] = [
    "ภถุึคตจขช",
    "ๆไำพะัีรนยบล",
    "ฟหกดเ้่าสวง",
    "ผปแอิืทมใฝ",
    "ฎฑธณ๊๋็ษศซฉฮฯ",
];

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        match self.state {
            AppState::Board => render_board(self, area, buf),
            AppState::Summary => render_summary(self, area, buf),
        }
    }
}

fn verdict_style(verdict: Verdict) -> Style {
    match verdict {
        Verdict::Correct => Style::default().fg(Color::Black).bg(Color::Green),
        Verdict::Present => Style::default().fg(Color::Black).bg(Color::Yellow),
        Verdict::Absent => Style::default().fg(Color::White).bg(Color::DarkGray),
    }
}

/// One grid cell, padded to a fixed column width regardless of how many
/// codepoints the slot holds.
fn cell_span(text: &str, style: Style) -> Span<'static> {
    let width = UnicodeWidthStr::width(text);
    let left = (CELL_WIDTH.saturating_sub(width)) / 2;
    let right = CELL_WIDTH.saturating_sub(width + left);
    Span::styled(
        format!("{}{}{}", " ".repeat(left), text, " ".repeat(right)),
        style,
    )
}

fn grid_row(cells: Vec<Span<'static>>) -> Line<'static> {
    let mut spans = Vec::with_capacity(cells.len() * 2);
    for (i, cell) in cells.into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(cell);
    }
    Line::from(spans).alignment(Alignment::Center)
}

fn board_lines(app: &App) -> Vec<Line<'static>> {
    let game = &app.game;
    let mut lines = Vec::with_capacity(MAX_GUESSES);

    for word in &game.submitted_words {
        let slots = game.segmenter().segment(word);
        let verdicts = game.verdicts_for(word);
        let cells = slots
            .iter()
            .zip(verdicts)
            .map(|(slot, verdict)| cell_span(slot, verdict_style(verdict)))
            .collect();
        lines.push(grid_row(cells));
    }

    if !game.is_over() {
        let typed = game.current_slots();
        let typed_style = Style::default()
            .add_modifier(Modifier::BOLD)
            .add_modifier(Modifier::UNDERLINED);
        let empty_style = Style::default().fg(Color::DarkGray);
        let cells = (0..WORD_SLOTS)
            .map(|i| match typed.get(i) {
                Some(slot) => cell_span(slot, typed_style),
                None => cell_span("·", empty_style),
            })
            .collect();
        lines.push(grid_row(cells));
    }

    let empty_style = Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM);
    while lines.len() < MAX_GUESSES {
        let cells = (0..WORD_SLOTS).map(|_| cell_span("·", empty_style)).collect();
        lines.push(grid_row(cells));
    }

    lines
}

fn keyboard_lines(app: &App) -> Vec<Line<'static>> {
    let game = &app.game;
    let hints = keyboard_hints(
        &game.submitted_words,
        &game.solution.word,
        game.segmenter(),
    );

    KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let mut spans = Vec::new();
            for (i, key) in row.chars().enumerate() {
                if i > 0 {
                    spans.push(Span::raw(" "));
                }
                let style = match hints.get(&key) {
                    Some(verdict) => verdict_style(*verdict),
                    None => Style::default(),
                };
                spans.push(Span::styled(format!(" {} ", key), style));
            }
            Line::from(spans).alignment(Alignment::Center)
        })
        .collect()
}

fn render_board(app: &App, area: Rect, buf: &mut Buffer) {
    let game = &app.game;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(HORIZONTAL_MARGIN)
        .vertical_margin(VERTICAL_MARGIN)
        .constraints([
            Constraint::Length(2),                    // title
            Constraint::Length(MAX_GUESSES as u16),   // grid
            Constraint::Length(2),                    // notice
            Constraint::Length(KEYBOARD_ROWS.len() as u16 + 1), // keyboard
            Constraint::Min(1),                       // help
        ])
        .split(area);

    let title = match app.mode {
        Mode::Daily => format!("ไทยเวิร์ดเดิล — day {}", game.solution.day),
        Mode::Practice => "ไทยเวิร์ดเดิล — practice".to_string(),
    };
    let mut title_lines = vec![Line::from(Span::styled(
        title,
        Style::default().add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center)];
    if game.god_mode {
        title_lines.push(
            Line::from(Span::styled(
                format!("คำวันนี้: {}", game.solution.word),
                Style::default().fg(Color::Magenta),
            ))
            .alignment(Alignment::Center),
        );
    }
    Paragraph::new(title_lines).render(chunks[0], buf);

    Paragraph::new(board_lines(app)).render(chunks[1], buf);

    if let Some(notice) = &app.notice {
        Paragraph::new(Span::styled(
            notice.text.clone(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .render(chunks[2], buf);
    } else if game.is_over() {
        let (text, color) = match game.status {
            GameStatus::Won => ("ถูกต้อง!", Color::Green),
            _ => ("เสียใจด้วย", Color::Red),
        };
        let mut spans = vec![Span::styled(
            text.to_string(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )];
        if game.status == GameStatus::Lost {
            spans.push(Span::raw(format!("  คำวันนี้: {}", game.solution.word)));
        }
        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .render(chunks[2], buf);
    }

    Paragraph::new(keyboard_lines(app)).render(chunks[3], buf);

    Paragraph::new(Span::styled(
        "enter submit · backspace delete · (s)ummary · esc quit",
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC),
    ))
    .alignment(Alignment::Center)
    .render(chunks[4], buf);
}

fn render_summary(app: &App, area: Rect, buf: &mut Buffer) {
    let stats = &app.stats;
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let dim = Style::default().fg(Color::DarkGray);

    let mut lines = vec![
        Line::from(Span::styled("สถิติ", bold)).alignment(Alignment::Center),
        Line::default(),
        Line::from(format!(
            "played {}   win {}%   streak {}   max streak {}",
            stats.total_played,
            stats.win_percent(),
            stats.current_streak,
            stats.max_streak
        ))
        .alignment(Alignment::Center),
        Line::default(),
    ];

    let max_count = stats.guess_distribution.iter().max().copied().unwrap_or(0);
    for (i, count) in stats.guess_distribution.iter().enumerate() {
        let bar_len = if max_count == 0 {
            0
        } else {
            (*count as usize * 20) / max_count as usize
        };
        lines.push(
            Line::from(vec![
                Span::styled(format!("{} ", i + 1), dim),
                Span::styled("▇".repeat(bar_len.max(usize::from(*count > 0))), bold),
                Span::raw(format!(" {}", count)),
            ])
            .alignment(Alignment::Center),
        );
    }

    if app.game.is_over() {
        lines.push(Line::default());
        let grid = shareable_grid(
            &app.game.submitted_words,
            &app.game.solution.word,
            app.game.segmenter(),
        );
        for row in grid.lines() {
            lines.push(Line::from(row.to_string()).alignment(Alignment::Center));
        }
        if !app.game.counts_toward_stats() {
            lines.push(
                Line::from(Span::styled("(not counted)", dim)).alignment(Alignment::Center),
            );
        }
    }

    lines.push(Line::default());
    lines.push(
        Line::from(Span::styled("(s) board · esc quit", dim)).alignment(Alignment::Center),
    );

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(HORIZONTAL_MARGIN)
        .vertical_margin(VERTICAL_MARGIN)
        .constraints([Constraint::Min(1)])
        .split(area);

    Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .render(layout[0], buf);
}
