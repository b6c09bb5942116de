use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::warn;

use crate::action::Action;
use crate::config::{Config, parse_key};
use crate::system::collector::Collector;
use crate::system::counters::CounterSource;
use crate::system::kill::ProcessController;
use crate::system::snapshot::SystemSnapshot;
use crate::ui::View;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Running,
    Stopped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    KillPrompt,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        StatusMessage {
            text: text.into(),
            is_error: false,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        StatusMessage {
            text: text.into(),
            is_error: true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ResolvedKeybinds {
    pub quit: KeyCode,
    pub kill: KeyCode,
}

impl ResolvedKeybinds {
    pub fn from_config(kb: &crate::config::KeybindsConfig) -> Self {
        Self {
            quit: parse_key(&kb.quit).unwrap_or(KeyCode::Char('q')),
            kill: parse_key(&kb.kill).unwrap_or(KeyCode::Char('k')),
        }
    }
}

/// Monitor state between cycles: the latest snapshot, the run state and
/// whatever the operator is in the middle of.
pub struct App<S, C> {
    pub state: RunState,
    pub collector: Collector<S>,
    pub controller: C,
    pub snapshot: SystemSnapshot,
    pub input_mode: InputMode,
    pub prompt_text: String,
    pub status_message: Option<StatusMessage>,
    pub keybinds: ResolvedKeybinds,
}

impl<S: CounterSource, C: ProcessController> App<S, C> {
    pub fn new(config: &Config, source: S, controller: C) -> Self {
        let mut collector = Collector::new(source);
        // Without a baseline the first cycle reads 0% and becomes the baseline.
        let status_message = match collector.prime() {
            Ok(()) => None,
            Err(err) => {
                let text = format!("{err:#}");
                warn!(error = %text, "baseline sampling failed");
                Some(StatusMessage::error(text))
            }
        };

        App {
            state: RunState::Running,
            collector,
            controller,
            snapshot: SystemSnapshot::default(),
            input_mode: InputMode::Normal,
            prompt_text: String::new(),
            status_message,
            keybinds: ResolvedKeybinds::from_config(&config.keybinds),
        }
    }

    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    /// Run one sampling cycle. A failed cycle keeps the last good snapshot
    /// on screen and is retried on the next tick.
    pub fn refresh_data(&mut self) {
        match self.collector.refresh() {
            Ok(snapshot) => {
                self.status_message = snapshot.advisory.clone().map(StatusMessage::error);
                self.snapshot = snapshot;
            }
            Err(err) => {
                let text = format!("{err:#}");
                warn!(error = %text, "sampling cycle skipped");
                self.status_message = Some(StatusMessage::error(text));
            }
        }
    }

    pub fn map_key(&self, key: KeyEvent) -> Action {
        // Ctrl+C always quits; raw mode swallows SIGINT.
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Action::Quit;
        }
        if self.input_mode != InputMode::Normal {
            return Action::None;
        }

        if key.code == self.keybinds.quit {
            return Action::Quit;
        }
        if key.code == self.keybinds.kill {
            return Action::PromptKill;
        }
        Action::None
    }

    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::Quit => self.state = RunState::Stopped,
            Action::PromptKill => {
                self.input_mode = InputMode::KillPrompt;
                self.prompt_text.clear();
            }
            Action::Kill(pid) => {
                let result = self.controller.terminate(pid);
                let text = result.message();
                self.status_message = Some(if result.is_success() {
                    StatusMessage::info(text)
                } else {
                    StatusMessage::error(text)
                });
                self.input_mode = InputMode::Normal;
            }
            Action::None => {}
        }
    }

    pub fn set_prompt_text(&mut self, text: &str) {
        self.prompt_text.clear();
        self.prompt_text.push_str(text);
    }

    /// Close the PID prompt. Returns true when an outcome was reported that
    /// the operator should get a moment to read.
    pub fn submit_prompt(&mut self, line: Option<String>) -> bool {
        self.input_mode = InputMode::Normal;
        self.prompt_text.clear();
        let Some(line) = line else {
            return false;
        };
        match parse_pid(&line) {
            Some(pid) => self.dispatch(Action::Kill(pid)),
            None => {
                self.status_message = Some(StatusMessage::error(format!(
                    "Invalid PID: {}",
                    line.trim()
                )));
            }
        }
        true
    }

    pub fn view(&self) -> View<'_> {
        View {
            cpu_percent: self.snapshot.cpu_percent,
            memory_percent: self.snapshot.memory_percent,
            rows: &self.snapshot.rows,
            status: self.status_message.as_ref(),
            prompt: (self.input_mode == InputMode::KillPrompt).then_some(self.prompt_text.as_str()),
        }
    }
}

pub fn parse_pid(text: &str) -> Option<i32> {
    text.trim().parse::<i32>().ok().filter(|pid| *pid > 0)
}
