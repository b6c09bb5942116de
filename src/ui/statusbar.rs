use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::app::StatusMessage;
use crate::ui::theme::Theme;

pub const KILL_PROMPT: &str = "Enter PID to kill: ";

pub fn render(
    frame: &mut Frame,
    area: Rect,
    status_message: Option<&StatusMessage>,
    prompt: Option<&str>,
    theme: &Theme,
) {
    let bg_style = Style::default().bg(theme.statusbar_bg);

    // The open prompt wins over any advisory text.
    if let Some(typed) = prompt {
        let mut spans = vec![
            Span::styled(
                format!(" {KILL_PROMPT}"),
                Style::default()
                    .fg(theme.pill_desc_fg)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(typed.to_string(), Style::default().fg(theme.pill_desc_fg)),
            Span::styled("\u{2588}", Style::default().fg(theme.pill_key_bg)),
        ];
        spans.extend(pill_spans("Enter", "Send SIGTERM", theme));
        spans.extend(pill_spans("Esc", "Cancel", theme));
        frame.render_widget(Paragraph::new(Line::from(spans)).style(bg_style), area);
        return;
    }

    if let Some(msg) = status_message {
        let color = if msg.is_error {
            theme.status_err
        } else {
            theme.status_ok
        };
        let line = Line::from(Span::styled(
            format!(" {}", msg.text),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(Paragraph::new(line).style(bg_style), area);
        return;
    }

    let mut spans = Vec::new();
    spans.extend(pill_spans("q", "Quit", theme));
    spans.extend(pill_spans("k", "Kill process", theme));
    frame.render_widget(Paragraph::new(Line::from(spans)).style(bg_style), area);
}

fn pill_spans<'a>(key: &'a str, desc: &'a str, theme: &Theme) -> Vec<Span<'a>> {
    vec![
        Span::raw(" "),
        Span::styled(
            format!(" {key} "),
            Style::default()
                .fg(theme.pill_key_fg)
                .bg(theme.pill_key_bg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {desc}"),
            Style::default().fg(theme.pill_desc_fg).bg(theme.surface_bg),
        ),
    ]
}
