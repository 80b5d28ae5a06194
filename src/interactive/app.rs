//! TUI application state and logic

use crate::config::GameConfig;
use crate::core::Coord;
use crate::game::{GameState, GuessOutcome, RevealOutcome};
use crate::wordlists::WordPools;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::info;

/// Application state
pub struct App<'a> {
    pub config: &'a GameConfig,
    pub pools: &'a WordPools,
    pub state: GameState,
    pub cursor: Coord,
    pub input_mode: InputMode,
    pub guess_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub game_index: u64,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Grid,
    Guess,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub games_played: usize,
    pub games_completed: usize,
    pub best_score: u32,
}

impl<'a> App<'a> {
    /// Create the app and generate its first puzzle
    ///
    /// # Errors
    ///
    /// Returns an error if no puzzle can be generated.
    pub fn new(config: &'a GameConfig, pools: &'a WordPools) -> Result<Self> {
        let (state, stats) = config.new_game(pools, 0)?;
        info!(seed = stats.seed, "Started first game");

        let mut app = Self {
            config,
            pools,
            state,
            cursor: Coord::new(0, 0),
            input_mode: InputMode::Grid,
            guess_buffer: String::new(),
            messages: Vec::new(),
            stats: Statistics {
                games_played: 1,
                ..Statistics::default()
            },
            game_index: 0,
            should_quit: false,
        };
        app.add_message(
            "Arrows move, Space reveals, Tab to guess.",
            MessageStyle::Info,
        );
        Ok(app)
    }

    pub fn new_game(&mut self) {
        let next_index = self.game_index + 1;
        match self.config.new_game(self.pools, next_index) {
            Ok((state, stats)) => {
                info!(seed = stats.seed, "Started new game");
                self.state = state;
                self.game_index = next_index;
                self.stats.games_played += 1;
                self.cursor = Coord::new(0, 0);
                self.guess_buffer.clear();
                self.messages.clear();
                self.input_mode = InputMode::Grid;
                self.add_message("New game started!", MessageStyle::Info);
            }
            Err(err) => self.add_message(&format!("Could not start game: {err}"), MessageStyle::Error),
        }
    }

    /// Move the cursor, staying inside the grid
    pub fn move_cursor(&mut self, d_row: isize, d_col: isize) {
        let last = self.state.grid_size().saturating_sub(1);
        let row = self.cursor.row.saturating_add_signed(d_row).min(last);
        let col = self.cursor.col.saturating_add_signed(d_col).min(last);
        self.cursor = Coord::new(row, col);
    }

    pub fn reveal_at_cursor(&mut self) {
        let outcome = self.state.reveal(self.cursor);
        let style = match outcome {
            RevealOutcome::Letter(_) | RevealOutcome::Empty => MessageStyle::Info,
            _ => MessageStyle::Error,
        };
        let text = self.state.last_action().to_string();
        self.add_message(&text, style);
    }

    /// Switch to guess entry when a guess is allowed
    pub fn start_guess(&mut self) {
        if self.state.can_guess() {
            self.input_mode = InputMode::Guess;
            self.guess_buffer.clear();
        } else {
            self.add_message("Reveal a cell before guessing.", MessageStyle::Error);
        }
    }

    pub fn submit_guess(&mut self) {
        let guess = std::mem::take(&mut self.guess_buffer);
        let outcome = self.state.guess(&guess);
        let style = if outcome.is_correct() {
            MessageStyle::Success
        } else {
            MessageStyle::Error
        };
        let text = self.state.last_action().to_string();
        self.add_message(&text, style);

        if outcome == GuessOutcome::MustRevealFirst {
            self.input_mode = InputMode::Grid;
            return;
        }

        if self.state.is_game_over() {
            self.stats.games_completed += 1;
            self.stats.best_score = self.stats.best_score.max(self.state.score());
            self.input_mode = InputMode::GameOver;
            self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
        } else {
            self.input_mode = InputMode::Grid;
        }
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
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::GameOver => match code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(),
                _ => {}
            },
            InputMode::Grid => match code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(),
                KeyCode::Up => self.move_cursor(-1, 0),
                KeyCode::Down => self.move_cursor(1, 0),
                KeyCode::Left => self.move_cursor(0, -1),
                KeyCode::Right => self.move_cursor(0, 1),
                KeyCode::Char(' ') | KeyCode::Enter => self.reveal_at_cursor(),
                KeyCode::Tab | KeyCode::Char('g') => self.start_guess(),
                _ => {}
            },
            InputMode::Guess => match code {
                KeyCode::Esc | KeyCode::Tab => {
                    self.input_mode = InputMode::Grid;
                    self.guess_buffer.clear();
                }
                KeyCode::Char(c) => {
                    if self.guess_buffer.len() < 6 && c.is_ascii_alphabetic() {
                        self.guess_buffer.push(c.to_ascii_uppercase());
                    }
                }
                KeyCode::Backspace => {
                    self.guess_buffer.pop();
                }
                KeyCode::Enter => self.submit_guess(),
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
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key.code, key.modifiers);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
