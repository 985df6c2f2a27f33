//! TUI application state and logic

use crate::config::{COLS, DELETE_KEY, ENTER_KEY, KEY_FLASH, REVEAL_DELAY, TICK, reveal_duration};
use crate::core::KeyboardState;
use crate::game::{Cell, Event, Input, Session};
use crate::wordlists::Dictionary;
use anyhow::{Context, Result};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event as TermEvent, KeyCode, KeyEvent,
        KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Instant;

/// Staggered reveal of a freshly scored row
///
/// Purely cosmetic: the round is already updated when this starts.
#[derive(Debug, Clone)]
pub struct Reveal {
    pub row: usize,
    pub started: Instant,
    /// Keyboard as it was before the row was scored
    pub keyboard_before: KeyboardState,
}

impl Reveal {
    /// Number of cells of the row whose status is visible at `now`
    #[must_use]
    pub fn revealed_cells(&self, now: Instant) -> usize {
        let elapsed = now.saturating_duration_since(self.started);
        let steps = elapsed.as_millis() / REVEAL_DELAY.as_millis().max(1);
        (steps as usize + 1).min(COLS)
    }

    /// Whether the keyboard should show the post-guess state
    #[must_use]
    pub fn is_settled(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started) >= reveal_duration()
    }
}

/// Application state
pub struct App<'a> {
    pub session: Session<'a, StdRng>,
    pub reveal: Option<Reveal>,
    /// Last pressed on-screen key label and when
    pub pressed: Option<(String, Instant)>,
    pub should_quit: bool,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(dictionary: &'a Dictionary, rng: StdRng) -> Self {
        Self {
            session: Session::new(dictionary, rng),
            reveal: None,
            pressed: None,
            should_quit: false,
        }
    }

    /// Handle one key press
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('n') if ctrl => self.new_game(),
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char(c) if !ctrl => {
                if let Some(input) = Input::from_key(&c.to_string()) {
                    self.flash(c.to_ascii_uppercase().to_string(), now);
                    self.press(input, now);
                }
            }
            KeyCode::Backspace => {
                self.flash(DELETE_KEY.to_string(), now);
                self.press(Input::Delete, now);
            }
            KeyCode::Enter => {
                self.flash(ENTER_KEY.to_string(), now);
                self.press(Input::Submit, now);
            }
            _ => {}
        }
    }

    /// Feed an input to the session and start a reveal when a row is scored
    pub fn press(&mut self, input: Input, now: Instant) {
        let keyboard_before = self.session.round().keyboard().clone();

        match self.session.handle(input) {
            Ok(Event::Scored { row, .. } | Event::Won { row, .. } | Event::Lost { row, .. }) => {
                self.reveal = Some(Reveal {
                    row,
                    started: now,
                    keyboard_before,
                });
            }
            Ok(_) => {}
            Err(e) => log::debug!("Submission rejected: {e}"),
        }
    }

    pub fn new_game(&mut self) {
        self.session.reset();
        self.reveal = None;
    }

    fn flash(&mut self, label: String, now: Instant) {
        self.pressed = Some((label, now));
    }

    /// Drop finished animations
    pub fn tick(&mut self, now: Instant) {
        if self.reveal.as_ref().is_some_and(|r| r.is_settled(now)) {
            self.reveal = None;
        }
        if self
            .pressed
            .as_ref()
            .is_some_and(|(_, at)| now.saturating_duration_since(*at) >= KEY_FLASH)
        {
            self.pressed = None;
        }
    }

    /// Cell as it should be drawn at `now`, hiding statuses not yet revealed
    #[must_use]
    pub fn cell_view(&self, row: usize, col: usize, now: Instant) -> Cell {
        let mut cell = self.session.round().cell(row, col);
        if let Some(reveal) = &self.reveal
            && reveal.row == row
            && col >= reveal.revealed_cells(now)
        {
            cell.status = None;
        }
        cell
    }

    /// Keyboard as it should be drawn at `now`
    #[must_use]
    pub fn keyboard_view(&self, now: Instant) -> &KeyboardState {
        match &self.reveal {
            Some(reveal) if !reveal.is_settled(now) => &reveal.keyboard_before,
            _ => self.session.round().keyboard(),
        }
    }

    #[must_use]
    pub fn is_pressed(&self, label: &str, now: Instant) -> bool {
        self.pressed.as_ref().is_some_and(|(pressed, at)| {
            pressed == label && now.saturating_duration_since(*at) < KEY_FLASH
        })
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app, poll_event);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res.context("Terminal UI stopped")
}

/// Wait up to one tick for a terminal event
fn poll_event() -> Result<Option<TermEvent>> {
    if event::poll(TICK)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
    mut next_event: impl FnMut() -> Result<Option<TermEvent>>,
) -> Result<()> {
    loop {
        let now = Instant::now();
        app.tick(now);
        terminal.draw(|f| super::rendering::ui(f, &app, now))?;

        // Polling keeps animations and message timers redrawing without input
        let Some(event) = next_event()? else {
            continue;
        };

        if let TermEvent::Key(key) = event {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key, Instant::now());
        }

        if app.should_quit {
            break;
        }
    }

    log::info!(
        "Session ended after {} rounds",
        app.session.stats().played
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{KeyStatus, Word};
    use crate::game::Phase;
    use rand::SeedableRng;
    use ratatui::backend::TestBackend;
    use std::io::{Error, ErrorKind};
    use std::time::Duration;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_word(app: &mut App, word: &str, now: Instant) {
        for c in word.chars() {
            app.handle_key(key(KeyCode::Char(c)), now);
        }
        app.handle_key(key(KeyCode::Enter), now);
    }

    fn wrong_word(app: &App) -> &'static str {
        if app.session.round().secret() == Word::new("crane").unwrap() {
            "slate"
        } else {
            "crane"
        }
    }

    fn dictionary() -> Dictionary {
        Dictionary::new(["crane", "slate", "audio"].map(|w| Word::new(w).unwrap())).unwrap()
    }

    #[test]
    fn typing_fills_board_and_flashes_key() {
        let d = dictionary();
        let mut app = App::new(&d, StdRng::seed_from_u64(1));
        let now = Instant::now();

        app.handle_key(key(KeyCode::Char('q')), now);
        assert_eq!(app.session.round().cursor(), (0, 1));
        assert!(app.is_pressed("Q", now));
        assert!(!app.is_pressed("Q", now + KEY_FLASH));

        app.handle_key(key(KeyCode::Backspace), now);
        assert_eq!(app.session.round().cursor(), (0, 0));
        assert!(app.is_pressed(DELETE_KEY, now));

        app.handle_key(key(KeyCode::Char('1')), now);
        assert_eq!(app.session.round().cursor(), (0, 0));
    }

    #[test]
    fn scored_row_reveals_progressively() {
        let d = dictionary();
        let mut app = App::new(&d, StdRng::seed_from_u64(2));
        let now = Instant::now();
        let wrong = wrong_word(&app);

        type_word(&mut app, wrong, now);
        let reveal = app.reveal.clone().unwrap();
        assert_eq!(reveal.row, 0);

        assert!(app.cell_view(0, 0, now).status.is_some());
        assert!(app.cell_view(0, 1, now).status.is_none());
        assert!(app.cell_view(0, 4, now + REVEAL_DELAY * 4).status.is_some());

        // Keyboard catches up only after the reveal
        assert!(app.keyboard_view(now).iter().all(|(_, s)| s == KeyStatus::Unused));
        let later = now + reveal_duration();
        assert!(app.keyboard_view(later).iter().any(|(_, s)| s != KeyStatus::Unused));

        app.tick(later);
        assert!(app.reveal.is_none());
    }

    #[test]
    fn rejected_submit_does_not_reveal() {
        let d = dictionary();
        let mut app = App::new(&d, StdRng::seed_from_u64(3));
        let now = Instant::now();

        type_word(&mut app, "zzzzz", now);
        assert!(app.reveal.is_none());
        assert_eq!(app.session.message().text, "Not in the word list.");
    }

    #[test]
    fn ctrl_n_starts_new_round() {
        let d = dictionary();
        let mut app = App::new(&d, StdRng::seed_from_u64(4));
        let now = Instant::now();
        let secret = app.session.round().secret().to_string();

        type_word(&mut app, &secret, now);
        assert_eq!(app.session.round().phase(), Phase::Won);

        app.handle_key(ctrl('n'), now);
        assert_eq!(app.session.round().phase(), Phase::Entering);
        assert_eq!(app.session.round().attempts(), 0);
        assert!(app.reveal.is_none());
        // Ctrl-N must not type an N
        assert_eq!(app.session.round().cursor(), (0, 0));
    }

    #[test]
    fn quit_keys() {
        let d = dictionary();
        let mut app = App::new(&d, StdRng::seed_from_u64(5));
        app.handle_key(key(KeyCode::Esc), Instant::now());
        assert!(app.should_quit);

        let mut app = App::new(&d, StdRng::seed_from_u64(5));
        app.handle_key(ctrl('c'), Instant::now());
        assert!(app.should_quit);
    }

    #[test]
    fn event_loop_stops_on_escape() {
        let d = dictionary();
        let app = App::new(&d, StdRng::seed_from_u64(6));
        let mut terminal = Terminal::new(TestBackend::new(90, 32)).unwrap();

        let mut events = vec![
            Some(TermEvent::Key(key(KeyCode::Esc))),
            None,
            Some(TermEvent::Key(key(KeyCode::Char('a')))),
        ];
        let result = run_app(&mut terminal, app, || Ok(events.pop().flatten()));
        assert!(result.is_ok());
        assert!(events.is_empty());
    }

    #[test]
    fn event_loop_propagates_input_errors() {
        let d = dictionary();
        let app = App::new(&d, StdRng::seed_from_u64(7));
        let mut terminal = Terminal::new(TestBackend::new(90, 32)).unwrap();

        let result = run_app(&mut terminal, app, || {
            Err(Error::new(ErrorKind::BrokenPipe, "input closed").into())
        });
        let err = result.unwrap_err();
        assert!(err.to_string().contains("input closed"));
    }

    #[test]
    fn reveal_counts_cells() {
        let start = Instant::now();
        let reveal = Reveal {
            row: 0,
            started: start,
            keyboard_before: KeyboardState::new(),
        };
        assert_eq!(reveal.revealed_cells(start), 1);
        assert_eq!(reveal.revealed_cells(start + Duration::from_millis(129)), 1);
        assert_eq!(reveal.revealed_cells(start + Duration::from_millis(130)), 2);
        assert_eq!(reveal.revealed_cells(start + Duration::from_secs(5)), COLS);
        assert!(!reveal.is_settled(start + Duration::from_millis(729)));
        assert!(reveal.is_settled(start + Duration::from_millis(730)));
    }
}
