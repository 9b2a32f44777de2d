//! TUI application state and logic

use crate::core::ClueId;
use crate::engine::{Entry, PuzzleSession, Solve};
use crate::output::share_text;
use crate::storage::{KeyValueStore, mark_intro_seen, persist};
use crate::timer::GameTimer;
use anyhow::Result;
use chrono::{DateTime, Utc};
use crossterm::{
    event::{
        self, DisableFocusChange, EnableFocusChange, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;

/// Redraw interval, so the clock keeps ticking without input
const TICK: Duration = Duration::from_millis(100);

/// Messages kept in the log
const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App<S: KeyValueStore> {
    pub session: PuzzleSession,
    pub store: S,
    pub timer: GameTimer,
    pub input_mode: InputMode,
    pub input_buffer: String,
    /// Highlighted entry of the suggestion list
    pub selected_suggestion: Option<usize>,
    pub messages: Vec<Message>,
    pub should_quit: bool,
    rng: StdRng,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Intro,
    Playing,
    Help,
    Results,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<S: KeyValueStore> App<S> {
    /// Create the app; `show_intro` starts on the intro screen with the clock held
    #[must_use]
    pub fn new(session: PuzzleSession, store: S, show_intro: bool, now: DateTime<Utc>) -> Self {
        Self::with_rng(session, store, show_intro, now, StdRng::from_rng(&mut rand::rng()))
    }

    /// Create the app with a fixed hint source
    #[must_use]
    pub fn with_rng(
        session: PuzzleSession,
        store: S,
        show_intro: bool,
        now: DateTime<Utc>,
        rng: StdRng,
    ) -> Self {
        let mut app = Self {
            session,
            store,
            timer: GameTimer::new(),
            input_mode: InputMode::Playing,
            input_buffer: String::new(),
            selected_suggestion: None,
            messages: Vec::new(),
            should_quit: false,
            rng,
        };

        if app.session.is_completed() {
            app.input_mode = InputMode::Results;
        } else if show_intro {
            app.input_mode = InputMode::Intro;
            if app.session.start_time().is_some() {
                app.timer.pause(now);
            }
        } else {
            app.begin(now);
        }
        app
    }

    /// Start (or keep) the clock and enter play
    fn begin(&mut self, now: DateTime<Utc>) {
        self.timer.resume(now);
        self.input_mode = InputMode::Playing;
        if self.session.start(now) {
            self.save();
        }
        if self.session.selected_words().is_empty() && self.session.solved_count() == 0 {
            self.add_message(
                "Type a word and press Space to add it. F1-F4 for hints.",
                MessageStyle::Info,
            );
        }
    }

    fn save(&mut self) {
        persist(&mut self.store, &self.session);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    /// Clock value to show at `now`
    #[must_use]
    pub fn elapsed(&self, now: DateTime<Utc>) -> Duration {
        self.timer
            .elapsed(self.session.start_time(), self.session.end_time(), now)
    }

    /// Available words matching the current input
    #[must_use]
    pub fn suggestions(&self) -> Vec<&str> {
        self.session.suggestions(&self.input_buffer)
    }

    #[must_use]
    pub fn share_text(&self, now: DateTime<Utc>) -> String {
        share_text(&self.session, self.elapsed(now))
    }

    fn announce_solve(&mut self, solve: &Solve) {
        let answer = self
            .session
            .clue(solve.clue_id)
            .map(|clue| clue.answer.to_uppercase())
            .unwrap_or_default();
        self.add_message(
            &format!("Clue {} solved: {answer}", solve.clue_id + 1),
            MessageStyle::Success,
        );
        if solve.completed {
            self.input_mode = InputMode::Results;
            self.add_message("🎉 Puzzle complete!", MessageStyle::Success);
        }
    }

    /// Commit the highlighted suggestion, or else the typed text
    pub fn commit_input(&mut self) {
        let text = match self.selected_suggestion {
            Some(index) => self
                .suggestions()
                .get(index)
                .map_or_else(|| self.input_buffer.clone(), |word| (*word).to_string()),
            None => self.input_buffer.clone(),
        };
        if text.trim().is_empty() {
            return;
        }

        match self.session.enter_text(&text) {
            Entry::Selected { solve, .. } => {
                self.input_buffer.clear();
                self.selected_suggestion = None;
                if let Some(solve) = solve {
                    self.announce_solve(&solve);
                }
                self.save();
            }
            Entry::Unresolved => {
                let message = if self.suggestions().is_empty() {
                    format!("No word matches \"{}\"", text.trim())
                } else {
                    "Several words match, keep typing or pick one with ↑/↓".to_string()
                };
                self.add_message(&message, MessageStyle::Error);
            }
        }
    }

    /// Move the suggestion highlight by `step`, wrapping around
    pub fn move_selection(&mut self, step: isize) {
        let count = self.suggestions().len();
        if count == 0 {
            self.selected_suggestion = None;
            return;
        }

        let next = match self.selected_suggestion {
            None if step < 0 => count - 1,
            None => 0,
            Some(current) => {
                let offset = step.unsigned_abs() % count;
                if step < 0 {
                    (current + count - offset) % count
                } else {
                    (current + offset) % count
                }
            }
        };
        self.selected_suggestion = Some(next);
    }

    /// Backspace: edit the input, or drop the last sentence word when empty
    pub fn backspace(&mut self) {
        if self.input_buffer.pop().is_some() {
            self.selected_suggestion = None;
            return;
        }

        if self.session.remove_last_word().is_some() {
            if let Some(solve) = self.session.recheck() {
                self.announce_solve(&solve);
            }
            self.save();
        }
    }

    /// Escape: clear the input, or the sentence when the input is empty
    pub fn escape(&mut self) {
        if self.input_buffer.is_empty() {
            if !self.session.selected_words().is_empty() {
                self.session.clear_sentence();
                self.save();
            }
        } else {
            self.input_buffer.clear();
            self.selected_suggestion = None;
        }
    }

    pub fn request_hint(&mut self, clue_id: ClueId) {
        if self.session.request_hint(clue_id, &mut self.rng).is_some() {
            self.add_message(
                &format!("Hint: clue {}'s words are highlighted", clue_id + 1),
                MessageStyle::Info,
            );
            self.save();
        } else if self.session.clue(clue_id).is_some() {
            self.add_message(
                &format!("Clue {} is already solved", clue_id + 1),
                MessageStyle::Error,
            );
        }
    }

    pub fn forfeit(&mut self) {
        if self.session.forfeit() {
            self.input_mode = InputMode::Results;
            self.add_message("Answers revealed. Better luck tomorrow!", MessageStyle::Error);
            self.save();
        }
    }

    /// Terminal focus changes pause the clock like a hidden browser tab
    pub fn focus_changed(&mut self, focused: bool, now: DateTime<Utc>) {
        if self.input_mode != InputMode::Playing {
            return;
        }
        if focused {
            self.timer.resume(now);
        } else {
            self.timer.pause(now);
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent, now: DateTime<Utc>) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::Intro => {
                if let Err(e) = mark_intro_seen(&mut self.store, self.session.current_date()) {
                    tracing::warn!("Failed to record intro: {e}");
                }
                self.begin(now);
            }
            InputMode::Help => {
                self.timer.resume(now);
                self.input_mode = InputMode::Playing;
            }
            InputMode::Results => {
                if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc | KeyCode::Enter) {
                    self.should_quit = true;
                }
            }
            InputMode::Playing => self.handle_playing_key(key, now),
        }
    }

    fn handle_playing_key(&mut self, key: KeyEvent, now: DateTime<Utc>) {
        match key.code {
            KeyCode::Char('g') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.forfeit();
            }
            KeyCode::Char('?') => {
                self.timer.pause(now);
                self.input_mode = InputMode::Help;
            }
            KeyCode::Char(' ') | KeyCode::Tab => self.commit_input(),
            KeyCode::Char(c) if !c.is_whitespace() => {
                self.input_buffer.extend(c.to_lowercase());
                self.selected_suggestion = None;
            }
            KeyCode::Up => self.move_selection(-1),
            KeyCode::Down => self.move_selection(1),
            KeyCode::Enter => self.commit_input(),
            KeyCode::Backspace => self.backspace(),
            KeyCode::Esc => self.escape(),
            KeyCode::F(n @ 1..=4) => self.request_hint(n - 1),
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<S: KeyValueStore>(app: App<S>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableFocusChange)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableFocusChange
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B, S>(terminal: &mut Terminal<B>, mut app: App<S>) -> Result<()>
where
    B: ratatui::backend::Backend,
    S: KeyValueStore,
{
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app, Utc::now()))?;

        if event::poll(TICK)? {
            match event::read()? {
                // Only process key press events (fixes Windows double-input bug)
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    app.handle_key(key, Utc::now());
                }
                Event::FocusLost => app.focus_changed(false, Utc::now()),
                Event::FocusGained => app.focus_changed(true, Utc::now()),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
