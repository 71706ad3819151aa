//! TUI application state and logic

use crate::game::{Session, TurnOutcome};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use rand::rngs::StdRng;
use std::io;

/// Application state
pub struct App<'a> {
    pub session: Session<'a, StdRng>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    GameOver,
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

/// Totals across games played in this process
#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub games_played: usize,
    pub best_score: u32,
    pub words_solved: usize,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(session: Session<'a, StdRng>) -> Self {
        Self {
            session,
            input_buffer: String::new(),
            messages: vec![
                Message {
                    text: "Welcome! Unscramble the letters to find the word.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Enter submits, TAB skips, ESC quits.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Guessing,
        }
    }

    /// Submit the typed guess
    pub fn submit_guess(&mut self) {
        let guess = std::mem::take(&mut self.input_buffer);
        if guess.is_empty() {
            self.add_message("Type a word first!", MessageStyle::Error);
            return;
        }

        let outcome = self.session.submit(&guess);
        if outcome == TurnOutcome::TryAgain {
            self.add_message(&format!("'{guess}' is not it. Try again!"), MessageStyle::Error);
            // Keep the guess so it can be edited
            self.input_buffer = guess;
            return;
        }
        self.handle_outcome(outcome);
    }

    /// Skip the current word
    pub fn skip_word(&mut self) {
        self.input_buffer.clear();
        let outcome = self.session.skip();
        self.handle_outcome(outcome);
    }

    fn handle_outcome(&mut self, outcome: TurnOutcome) {
        match outcome {
            TurnOutcome::Correct => {
                let score = self.session.view().score;
                self.add_message(&format!("Correct! Score: {score}"), MessageStyle::Success);
            }
            TurnOutcome::Skipped => self.add_message("Skipped.", MessageStyle::Info),
            TurnOutcome::TryAgain => self.add_message("Try again!", MessageStyle::Error),
            TurnOutcome::GameOver { final_score } => {
                self.stats.games_played += 1;
                self.stats.best_score = self.stats.best_score.max(final_score);
                self.stats.words_solved += self.session.words_solved();
                self.input_mode = InputMode::GameOver;
                self.add_message(
                    &format!("🎉 Congratulations! You scored {final_score}!"),
                    MessageStyle::Success,
                );
                self.add_message("Press 'p' to play again or 'q' to exit.", MessageStyle::Info);
            }
        }
    }

    pub fn new_game(&mut self) {
        self.session.restart();
        self.input_buffer.clear();
        self.messages.clear();
        self.input_mode = InputMode::Guessing;
        self.add_message("New game started!", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::GameOver => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('p' | 'y') | KeyCode::Enter => self.new_game(),
                _ => {
                    // Only play again or exit from the summary
                }
            },
            InputMode::Guessing => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Tab => self.skip_word(),
                KeyCode::Enter => self.submit_guess(),
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Char(c) => self.input_buffer.push(c),
                _ => {}
            },
        }
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
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind == KeyEventKind::Press {
                app.handle_key(key);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameConfig, WordCatalog};
    use rand::SeedableRng;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_word(app: &mut App, word: &str) {
        for c in word.chars() {
            press(app, KeyCode::Char(c));
        }
        press(app, KeyCode::Enter);
    }

    fn app(catalog: &WordCatalog, rounds: usize) -> App<'_> {
        let session =
            Session::new(catalog, GameConfig::new(rounds, 20), StdRng::seed_from_u64(5)).unwrap();
        App::new(session)
    }

    #[test]
    fn typing_and_correct_guess() {
        let catalog = WordCatalog::from_words(["intelligent", "android", "kotlin"]).unwrap();
        let mut app = app(&catalog, 2);
        let answer = app.session.state().current_word().text();

        type_word(&mut app, answer);
        assert_eq!(app.session.view().score, 20);
        assert_eq!(app.session.view().round, 2);
        assert!(app.input_buffer.is_empty());
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Success);
    }

    #[test]
    fn wrong_guess_keeps_input() {
        let catalog = WordCatalog::from_words(["intelligent", "android", "kotlin"]).unwrap();
        let mut app = app(&catalog, 2);

        type_word(&mut app, "nope");
        assert_eq!(app.input_buffer, "nope");
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Error);
        assert_eq!(app.session.view().round, 1);

        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.input_buffer, "nop");
    }

    #[test]
    fn skipping_to_game_over_and_replay() {
        let catalog = WordCatalog::from_words(["intelligent", "android", "kotlin"]).unwrap();
        let mut app = app(&catalog, 2);

        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(app.stats.games_played, 1);

        // Typing is ignored on the summary
        press(&mut app, KeyCode::Char('x'));
        assert!(app.input_buffer.is_empty());

        press(&mut app, KeyCode::Char('p'));
        assert_eq!(app.input_mode, InputMode::Guessing);
        assert_eq!(app.session.view().round, 1);
        assert_eq!(app.session.view().score, 0);
    }

    #[test]
    fn quit_keys() {
        let catalog = WordCatalog::from_words(["intelligent", "android", "kotlin"]).unwrap();
        let mut app = app(&catalog, 2);
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit, "'q' is a letter while guessing");

        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }

    #[test]
    fn messages_are_capped() {
        let catalog = WordCatalog::from_words(["intelligent", "android", "kotlin"]).unwrap();
        let mut app = app(&catalog, 2);
        for _ in 0..10 {
            app.add_message("hello", MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
    }
}
