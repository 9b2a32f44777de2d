//! TUI rendering with ratatui
//!
//! Clue cards, word grid and sentence builder for the game screen.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{Clue, ClueId, ClueStatus};
use crate::output::format_time;
use crate::storage::KeyValueStore;
use chrono::{DateTime, Utc};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Suggestions listed under the input line
const MAX_SUGGESTIONS: usize = 8;

/// Highlight color for words hinted by each clue
#[must_use]
pub const fn clue_color(clue_id: ClueId) -> Color {
    match clue_id % 4 {
        0 => Color::LightBlue,
        1 => Color::LightMagenta,
        2 => Color::LightGreen,
        _ => Color::LightYellow,
    }
}

/// Main UI rendering function
pub fn ui<S: KeyValueStore>(f: &mut Frame, app: &App<S>, now: DateTime<Utc>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Main content
            Constraint::Length(5), // Sentence builder
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, now, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    render_clues(f, app, main_chunks[0]);
    render_side_panel(f, app, main_chunks[1]);
    render_sentence_builder(f, app, chunks[2]);
    render_status(f, app, chunks[3]);

    match app.input_mode {
        InputMode::Intro => render_intro(f),
        InputMode::Help => render_help(f),
        InputMode::Results => render_results(f, app, now),
        InputMode::Playing => {}
    }
}

fn render_header<S: KeyValueStore>(f: &mut Frame, app: &App<S>, now: DateTime<Utc>, area: Rect) {
    let clock_style = if app.timer.is_paused() {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::Yellow)
    };

    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            "🎭 BANDADLE",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  ·  "),
        Span::styled(
            app.session.title().to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw("  ·  ⏱ "),
        Span::styled(format_time(app.elapsed(now)), clock_style),
    ]))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(header, area);
}

fn render_clues<S: KeyValueStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let clues = app.session.clues();
    let constraints: Vec<Constraint> = clues.iter().map(|_| Constraint::Length(4)).collect();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (clue, chunk) in clues.iter().zip(chunks.iter()) {
        render_clue_card(f, clue, *chunk);
    }
}

fn render_clue_card(f: &mut Frame, clue: &Clue, area: Rect) {
    let (status, border) = match clue.status() {
        ClueStatus::Pending if clue.hinted => ("hinted", clue_color(clue.id)),
        ClueStatus::Pending => ("open", Color::White),
        ClueStatus::Solved => ("solved", Color::Green),
        ClueStatus::Hinted => ("solved with hint", Color::Yellow),
        ClueStatus::Failed => ("revealed", Color::Red),
    };

    let answer = if clue.failed {
        Span::styled(
            clue.answer.to_uppercase(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )
    } else if clue.solved {
        Span::styled(
            clue.answer.to_uppercase(),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled("· · ·", Style::default().fg(Color::DarkGray))
    };

    let card = Paragraph::new(vec![Line::from(clue.question.clone()), Line::from(answer)])
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(format!(" {}. {} ", clue.id + 1, clue.kind().label()))
                .title_bottom(Line::from(format!(" {status} ")).right_aligned())
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(border)),
        );
    f.render_widget(card, area);
}

fn render_side_panel<S: KeyValueStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(6), Constraint::Length(7)])
        .split(area);

    render_word_grid(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_word_grid<S: KeyValueStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let mut spans = Vec::new();
    for word in app.session.available_words() {
        let style = match app.session.hint_owner(word) {
            Some(owner) => Style::default()
                .fg(Color::Black)
                .bg(clue_color(owner))
                .add_modifier(Modifier::BOLD),
            None => Style::default().fg(Color::White),
        };
        spans.push(Span::styled(format!(" {word} "), style));
        spans.push(Span::raw(" "));
    }

    let grid = Paragraph::new(Line::from(spans))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(format!(" Words ({}) ", app.session.available_words().len()))
                .borders(Borders::ALL),
        );
    f.render_widget(grid, area);
}

fn render_messages<S: KeyValueStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_sentence_builder<S: KeyValueStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let sentence = if app.session.selected_words().is_empty() {
        Line::from(Span::styled(
            "Pick words to build an answer",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        let mut spans = Vec::new();
        for word in app.session.selected_words() {
            spans.push(Span::styled(
                word.to_uppercase(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw(" "));
        }
        Line::from(spans)
    };

    let input = Line::from(vec![
        Span::styled("> ", Style::default().fg(Color::Yellow)),
        Span::styled(
            app.input_buffer.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled("▏", Style::default().fg(Color::Yellow)),
    ]);

    let mut suggestion_spans = Vec::new();
    for (i, word) in app.suggestions().iter().take(MAX_SUGGESTIONS).enumerate() {
        let style = if app.selected_suggestion == Some(i) {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        suggestion_spans.push(Span::styled(format!(" {word} "), style));
    }

    let builder = Paragraph::new(vec![sentence, input, Line::from(suggestion_spans)]).block(
        Block::default()
            .title(" Sentence | Space: add word  ↑/↓ Enter: pick  Backspace: undo ")
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .style(Style::default().fg(Color::Yellow)),
    );
    f.render_widget(builder, area);
}

fn render_status<S: KeyValueStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(20),
            Constraint::Percentage(50),
        ])
        .split(area);

    let total = app.session.clues().len();
    let solved = app.session.clues().iter().filter(|c| c.solved).count();
    let percent = if total == 0 {
        0
    } else {
        u16::try_from(solved * 100 / total).unwrap_or(100)
    };
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL))
        .gauge_style(Style::default().fg(Color::Green))
        .percent(percent)
        .label(format!("{solved}/{total} solved"));
    f.render_widget(gauge, chunks[0]);

    let hints = Paragraph::new(format!("Hints: {}", app.session.hinted_count()))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(hints, chunks[1]);

    let help_text = match app.input_mode {
        InputMode::Results => "q: Quit",
        _ => "F1-F4: Hint | Ctrl-G: Give up | ?: Help | Ctrl-C: Quit",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[2]);
}

/// Rectangle of the given percentages centered in `area`
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

fn render_popup(f: &mut Frame, title: &str, lines: Vec<Line>, color: Color) {
    let area = centered_rect(70, 60, f.area());
    let popup = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(title.to_string())
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(color)),
        );
    f.render_widget(Clear, area);
    f.render_widget(popup, area);
}

fn render_intro(f: &mut Frame) {
    let lines = vec![
        Line::from(Span::styled(
            "How to play",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Each answer chains phrases that share a word:"),
        Line::from("  \"Kevin James\" + \"James Bond\" = KEVIN JAMES BOND"),
        Line::from("The fourth clue chains three phrases."),
        Line::from(""),
        Line::from("Type a word (a unique prefix is enough) and press Space."),
        Line::from("A sentence that spells an answer solves its clue."),
        Line::from("F1-F4 highlight a clue's words among a few red herrings."),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to start the clock",
            Style::default().fg(Color::Yellow),
        )),
    ];
    render_popup(f, " Welcome to Bandadle ", lines, Color::Cyan);
}

fn render_help(f: &mut Frame) {
    let lines = vec![
        Line::from("letters      type a word"),
        Line::from("Space, Tab   add the typed word"),
        Line::from("↑ / ↓        choose a suggestion, Enter to add it"),
        Line::from("Backspace    edit, or remove the last word"),
        Line::from("Esc          clear input, then the sentence"),
        Line::from("F1-F4        hint for clue 1-4"),
        Line::from("Ctrl-G       give up and reveal answers"),
        Line::from("Ctrl-C       quit (progress is saved)"),
        Line::from(""),
        Line::from(Span::styled(
            "Clock paused. Press any key to continue",
            Style::default().fg(Color::Yellow),
        )),
    ];
    render_popup(f, " Help ", lines, Color::Cyan);
}

fn render_results<S: KeyValueStore>(f: &mut Frame, app: &App<S>, now: DateTime<Utc>) {
    let (title, color) = if app.session.is_forfeited() {
        (" Better luck tomorrow ", Color::Red)
    } else {
        (" 🎉 Puzzle solved! 🎉 ", Color::Green)
    };

    let mut lines: Vec<Line> = app
        .share_text(now)
        .lines()
        .map(|line| Line::from(line.to_string()))
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press q to quit",
        Style::default().fg(Color::DarkGray),
    )));

    render_popup(f, title, lines, color);
}
