use color_eyre::Result;
use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use tokio::sync::mpsc;

/// Operator input as the scheduler consumes it.
#[allow(async_fn_in_trait)]
pub trait InputSource {
    /// Oldest pending key press, without waiting.
    fn poll_key(&mut self) -> Option<KeyEvent>;

    /// Collect a line from the operator, calling `echo` with the text typed
    /// so far after every edit. `None` when the prompt was cancelled.
    async fn read_line(
        &mut self,
        echo: &mut dyn FnMut(&str) -> Result<()>,
    ) -> Result<Option<String>>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineEdit {
    Changed,
    Submitted,
    Cancelled,
    Ignored,
}

/// Apply one key press to a line being edited.
pub fn edit_line(line: &mut String, key: KeyEvent) -> LineEdit {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => LineEdit::Cancelled,
        KeyCode::Esc => LineEdit::Cancelled,
        KeyCode::Enter => LineEdit::Submitted,
        KeyCode::Backspace => {
            line.pop();
            LineEdit::Changed
        }
        KeyCode::Char(c) if !c.is_control() => {
            line.push(c);
            LineEdit::Changed
        }
        _ => LineEdit::Ignored,
    }
}

/// Forwards terminal key presses into a channel drained by the scheduler.
pub struct EventHandler {
    rx: mpsc::UnboundedReceiver<KeyEvent>,
    _task: tokio::task::JoinHandle<()>,
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl EventHandler {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel::<KeyEvent>();

        let task = tokio::spawn(async move {
            let mut reader = event::EventStream::new();
            while let Some(maybe_event) = reader.next().await {
                match maybe_event {
                    Ok(CrosstermEvent::Key(key)) if key.kind == KeyEventKind::Press => {
                        if tx.send(key).is_err() {
                            break;
                        }
                    }
                    Ok(_) => {}
                    Err(err) => {
                        tracing::warn!(%err, "terminal event stream failed");
                        break;
                    }
                }
            }
        });

        Self { rx, _task: task }
    }
}

impl InputSource for EventHandler {
    fn poll_key(&mut self) -> Option<KeyEvent> {
        self.rx.try_recv().ok()
    }

    async fn read_line(
        &mut self,
        echo: &mut dyn FnMut(&str) -> Result<()>,
    ) -> Result<Option<String>> {
        let mut line = String::new();
        echo(&line)?;
        while let Some(key) = self.rx.recv().await {
            match edit_line(&mut line, key) {
                LineEdit::Submitted => return Ok(Some(line)),
                LineEdit::Cancelled => return Ok(None),
                LineEdit::Changed => echo(&line)?,
                LineEdit::Ignored => {}
            }
        }
        Ok(None)
    }
}
