pub mod header;
pub mod process_table;
pub mod statusbar;
pub mod theme;

use color_eyre::Result;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};

use crate::app::StatusMessage;
use crate::system::table::ProcessTableEntry;
use crate::ui::theme::Theme;

/// What a single redraw shows: the ranked rows, the two system scalars and
/// the operator line.
#[derive(Debug, Clone, Copy)]
pub struct View<'a> {
    pub cpu_percent: f32,
    pub memory_percent: f32,
    pub rows: &'a [ProcessTableEntry],
    pub status: Option<&'a StatusMessage>,
    /// Text typed so far while the PID prompt is open.
    pub prompt: Option<&'a str>,
}

/// Draws a full frame; nothing is carried over from the previous one.
pub trait Presenter {
    fn render(&mut self, view: &View<'_>) -> Result<()>;
}

pub struct TerminalPresenter {
    terminal: ratatui::DefaultTerminal,
    theme: Theme,
    name_width: usize,
}

impl TerminalPresenter {
    pub fn new(terminal: ratatui::DefaultTerminal, name_width: usize) -> Self {
        TerminalPresenter {
            terminal,
            theme: Theme::dark(),
            name_width,
        }
    }
}

impl Presenter for TerminalPresenter {
    fn render(&mut self, view: &View<'_>) -> Result<()> {
        let theme = &self.theme;
        let name_width = self.name_width;
        self.terminal
            .draw(|frame| draw(frame, view, theme, name_width))?;
        Ok(())
    }
}

pub fn draw(frame: &mut Frame, view: &View<'_>, theme: &Theme, name_width: usize) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(frame.area());

    header::render(
        frame,
        chunks[0],
        view.cpu_percent,
        view.memory_percent,
        view.rows.len(),
        theme,
    );
    process_table::render(frame, chunks[1], view.rows, name_width, theme);
    statusbar::render(frame, chunks[2], view.status, view.prompt, theme);
}
