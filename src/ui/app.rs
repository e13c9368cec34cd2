//! Main TUI application state and logic

use crate::algorithm::implementations::SAMPLES;
use crate::algorithm::EXAMPLE_STRINGS;
use crate::playback::{Playback, MAX_SPEED_MS, MIN_SPEED_MS};
use crate::trace::generate_trace;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Narration,
    Pseudocode,
    Code,
    Info,
}

impl FocusedPane {
    /// Move focus to the next pane (clockwise: narration -> info -> pseudocode -> code)
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Narration => FocusedPane::Info,
            FocusedPane::Info => FocusedPane::Pseudocode,
            FocusedPane::Pseudocode => FocusedPane::Code,
            FocusedPane::Code => FocusedPane::Narration,
        }
    }

    /// Move focus to the previous pane (counter-clockwise)
    pub fn prev(self) -> Self {
        match self {
            FocusedPane::Narration => FocusedPane::Code,
            FocusedPane::Info => FocusedPane::Narration,
            FocusedPane::Pseudocode => FocusedPane::Info,
            FocusedPane::Code => FocusedPane::Pseudocode,
        }
    }
}

/// The main application state
pub struct App {
    /// The playback controller holding the current trace
    pub playback: Playback,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Per-pane scroll offsets
    pub narration_scroll: usize,
    pub pseudocode_scroll: usize,
    pub code_scroll: usize,
    pub info_scroll: usize,

    /// Which reference implementation the code pane shows
    pub language_index: usize,

    /// Whether the input prompt is open
    pub input_mode: bool,

    /// Text being typed in the input prompt
    pub input_buffer: String,

    /// Which example Tab inserts next while the prompt is open
    pub example_index: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl App {
    /// Create a new app visualizing `input`
    pub fn new(input: &str) -> Self {
        let mut playback = Playback::new();
        playback.load_trace(generate_trace(input));
        App {
            playback,
            focused_pane: FocusedPane::Narration,
            narration_scroll: 0,
            pseudocode_scroll: 0,
            code_scroll: 0,
            info_scroll: 0,
            language_index: 0,
            input_mode: false,
            input_buffer: String::new(),
            example_index: 0,
            should_quit: false,
            status_message: String::from("Ready!"),
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or_else(Instant::now),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Drive the auto-advance timer
            if self.playback.tick(Instant::now()) {
                self.status_message = if self.playback.is_playing() {
                    "Playing...".to_string()
                } else {
                    "Playback complete".to_string()
                };
                self.narration_scroll = usize::MAX;
            }

            // Use poll with timeout so the timer keeps firing while playing
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        if self.input_mode {
                            self.handle_input_key(key);
                        } else {
                            self.handle_key_event(key);
                        }
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Panes above, one-line status bar below
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let pane_area = main_chunks[0];
        let status_area = main_chunks[1];

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(pane_area);

        // Left column: Characters | Narration | Info
        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage(42),
                Constraint::Percentage(30),
                Constraint::Percentage(28),
            ])
            .split(columns[0]);

        // Right column: Pseudocode | Code
        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(columns[1]);

        let trace = self.playback.trace();
        if let Some(step) = self.playback.current_step() {
            super::panes::render_cells_pane(frame, left_rows[0], trace, step);
        }

        super::panes::render_narration_pane(
            frame,
            left_rows[1],
            trace,
            self.playback.current_index(),
            self.focused_pane == FocusedPane::Narration,
            &mut self.narration_scroll,
        );

        super::panes::render_info_pane(
            frame,
            left_rows[2],
            trace,
            self.focused_pane == FocusedPane::Info,
            &mut self.info_scroll,
        );

        super::panes::render_pseudocode_pane(
            frame,
            right_rows[0],
            self.playback.current_step(),
            self.focused_pane == FocusedPane::Pseudocode,
            &mut self.pseudocode_scroll,
        );

        super::panes::render_code_pane(
            frame,
            right_rows[1],
            self.language_index,
            self.focused_pane == FocusedPane::Code,
            &mut self.code_scroll,
        );

        if self.input_mode {
            super::panes::render_input_bar(frame, status_area, &self.input_buffer);
        } else {
            super::panes::render_status_bar(
                frame,
                status_area,
                &self.status_message,
                self.playback.current_index(),
                self.playback.total_steps(),
                self.playback.is_playing(),
                self.speed_ms(),
            );
        }
    }

    fn speed_ms(&self) -> u64 {
        self.playback.speed().as_millis() as u64
    }

    /// Handle keyboard events in normal mode
    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Char('e') | KeyCode::Char('E') => {
                self.playback.pause();
                self.input_mode = true;
                self.input_buffer = self.playback.trace().input().to_string();
                self.status_message = "Editing input".to_string();
            }
            // Number keys step forward N times directly
            KeyCode::Char(c @ '1'..='9') => {
                let n = c.to_digit(10).unwrap() as usize;
                let before = self.playback.current_index();
                for _ in 0..n {
                    self.playback.next_step();
                }
                let stepped = self.playback.current_index() - before;
                self.status_message = format!("Stepped forward {} step(s)", stepped);
                self.narration_scroll = usize::MAX;
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::BackTab => {
                self.focused_pane = self.focused_pane.prev();
            }
            KeyCode::Left => {
                self.playback.prev_step();
                self.status_message = "Stepped backward".to_string();
                self.narration_scroll = usize::MAX;
            }
            KeyCode::Right => {
                self.playback.next_step();
                self.status_message = "Stepped forward".to_string();
                self.narration_scroll = usize::MAX;
            }
            KeyCode::Up => match self.focused_pane {
                FocusedPane::Narration => {
                    self.narration_scroll = self.narration_scroll.saturating_sub(1);
                }
                FocusedPane::Pseudocode => {
                    self.pseudocode_scroll = self.pseudocode_scroll.saturating_sub(1);
                }
                FocusedPane::Code => {
                    self.code_scroll = self.code_scroll.saturating_sub(1);
                }
                FocusedPane::Info => {
                    self.info_scroll = self.info_scroll.saturating_sub(1);
                }
            },
            KeyCode::Down => match self.focused_pane {
                FocusedPane::Narration => {
                    self.narration_scroll = self.narration_scroll.saturating_add(1);
                }
                FocusedPane::Pseudocode => {
                    self.pseudocode_scroll = self.pseudocode_scroll.saturating_add(1);
                }
                FocusedPane::Code => {
                    self.code_scroll = self.code_scroll.saturating_add(1);
                }
                FocusedPane::Info => {
                    self.info_scroll = self.info_scroll.saturating_add(1);
                }
            },
            KeyCode::Char(' ') => {
                // Toggle play mode (with 200ms debounce to prevent key repeat spam)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    if self.playback.is_playing() {
                        self.playback.pause();
                        self.status_message = "Paused".to_string();
                    } else {
                        self.playback.play(Instant::now());
                        if self.playback.is_playing() {
                            self.status_message = "Playing...".to_string();
                        }
                    }
                }
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                // Faster playback means a shorter delay
                let ms = self.speed_ms().saturating_sub(100).max(MIN_SPEED_MS);
                self.playback.set_speed(ms, Instant::now());
                self.status_message =
                    format!("Speed: {} ({}ms)", super::panes::speed_label(ms), ms);
            }
            KeyCode::Char('-') | KeyCode::Char('_') => {
                let ms = (self.speed_ms() + 100).min(MAX_SPEED_MS);
                self.playback.set_speed(ms, Instant::now());
                self.status_message =
                    format!("Speed: {} ({}ms)", super::panes::speed_label(ms), ms);
            }
            KeyCode::Char('[') => {
                self.language_index =
                    (self.language_index + SAMPLES.len() - 1) % SAMPLES.len();
                self.code_scroll = 0;
            }
            KeyCode::Char(']') => {
                self.language_index = (self.language_index + 1) % SAMPLES.len();
                self.code_scroll = 0;
            }
            KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Backspace => {
                self.playback.reset();
                self.status_message = "Jumped to start".to_string();
                self.narration_scroll = 0;
            }
            KeyCode::Enter => {
                let total = self.playback.total_steps();
                if total > 0 {
                    self.playback.seek(total - 1);
                }
                self.status_message = "Jumped to end".to_string();
                self.narration_scroll = usize::MAX;
            }
            _ => {}
        }
    }

    /// Handle keyboard events while the input prompt is open
    fn handle_input_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.input_mode = false;
                self.input_buffer.clear();
                self.status_message = "Input cancelled".to_string();
            }
            KeyCode::Enter => {
                if self.input_buffer.trim().is_empty() {
                    return;
                }
                let input = std::mem::take(&mut self.input_buffer);
                self.playback.load_trace(generate_trace(&input));
                self.input_mode = false;
                self.narration_scroll = 0;
                self.status_message = format!(
                    "Visualizing \"{}\" ({} steps)",
                    input,
                    self.playback.total_steps()
                );
            }
            KeyCode::Tab => {
                // Cycle through the bundled example strings
                self.input_buffer = EXAMPLE_STRINGS[self.example_index].to_string();
                self.example_index = (self.example_index + 1) % EXAMPLE_STRINGS.len();
            }
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Char(c) => {
                self.input_buffer.push(c);
            }
            _ => {}
        }
    }
}
