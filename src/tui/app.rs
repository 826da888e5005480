use crate::history::ExpansionResult;
use crate::runtime::SessionSnapshot;
use crate::session::SessionState;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use uuid::Uuid;

const SPINNER_FRAMES: [&str; 4] = ["|", "/", "-", "\\"];

/// What the event loop should do after a key press
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    None,
    SetInput(String),
    Submit(String),
    Select(Uuid),
    Copy(String),
    Quit,
}

/// View state for the terminal front end
pub struct App {
    snapshot: SessionSnapshot,
    input: String,
    show_history: bool,
    history_cursor: usize,
    status: Option<String>,
    ticks: usize,
}

impl App {
    pub fn new(snapshot: SessionSnapshot) -> Self {
        Self {
            input: snapshot.state.input.clone(),
            snapshot,
            show_history: false,
            history_cursor: 0,
            status: None,
            ticks: 0,
        }
    }

    pub fn apply_snapshot(&mut self, snapshot: SessionSnapshot) {
        self.snapshot = snapshot;
        if self.history_cursor >= self.snapshot.history.len() {
            self.history_cursor = self.snapshot.history.len().saturating_sub(1);
        }
    }

    pub fn tick(&mut self) {
        self.ticks = self.ticks.wrapping_add(1);
    }

    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = Some(status.into());
    }

    pub fn state(&self) -> &SessionState {
        &self.snapshot.state
    }

    pub fn history(&self) -> &[ExpansionResult] {
        &self.snapshot.history
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn show_history(&self) -> bool {
        self.show_history
    }

    pub fn history_cursor(&self) -> usize {
        self.history_cursor
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn spinner(&self) -> &'static str {
        SPINNER_FRAMES[self.ticks % SPINNER_FRAMES.len()]
    }

    /// Submit is disabled while in flight or when the input is blank
    pub fn submit_enabled(&self) -> bool {
        !self.snapshot.state.is_submitting() && !self.input.trim().is_empty()
    }

    pub fn on_key(&mut self, key: KeyEvent) -> Command {
        self.status = None;

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') => Command::Quit,
                KeyCode::Char('y') => self
                    .snapshot
                    .state
                    .displayed()
                    .map_or(Command::None, |r| Command::Copy(r.expanded_prompt.clone())),
                _ => Command::None,
            };
        }

        if matches!(key.code, KeyCode::Tab | KeyCode::F(2)) {
            self.show_history = !self.show_history;
            return Command::None;
        }

        if self.show_history {
            self.on_history_key(key.code)
        } else {
            self.on_input_key(key.code)
        }
    }

    fn on_input_key(&mut self, code: KeyCode) -> Command {
        match code {
            KeyCode::Esc => Command::Quit,
            KeyCode::Enter => {
                if self.submit_enabled() {
                    Command::Submit(self.input.clone())
                } else {
                    Command::None
                }
            }
            KeyCode::Char(c) => {
                self.input.push(c);
                self.input_changed()
            }
            KeyCode::Backspace => {
                if self.input.pop().is_some() {
                    self.input_changed()
                } else {
                    Command::None
                }
            }
            _ => Command::None,
        }
    }

    fn on_history_key(&mut self, code: KeyCode) -> Command {
        let len = self.snapshot.history.len();
        match code {
            KeyCode::Esc => {
                self.show_history = false;
                Command::None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.history_cursor = self.history_cursor.saturating_sub(1);
                Command::None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.history_cursor + 1 < len {
                    self.history_cursor += 1;
                }
                Command::None
            }
            KeyCode::Enter => match self.snapshot.history.get(self.history_cursor) {
                Some(entry) if !self.snapshot.state.is_submitting() => {
                    self.show_history = false;
                    Command::Select(entry.id)
                }
                _ => Command::None,
            },
            _ => Command::None,
        }
    }

    fn input_changed(&self) -> Command {
        Command::SetInput(self.input.clone())
    }
}
