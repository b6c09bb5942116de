use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, BorderType, Borders, Cell, Row, Table};

use crate::format::{format_percent, format_rss_mb, truncate_unicode};
use crate::system::table::ProcessTableEntry;
use crate::ui::theme::Theme;

pub const COLUMNS: [&str; 4] = ["PID", "PROCESS", "CPU(%)", "MEM(MB)"];

/// Ranked process rows. Names are cut to `name_width` columns for display only.
pub fn render(
    frame: &mut Frame,
    area: Rect,
    rows: &[ProcessTableEntry],
    name_width: usize,
    theme: &Theme,
) {
    let header = Row::new(COLUMNS.map(Cell::from)).style(
        Style::default()
            .fg(theme.text_primary)
            .add_modifier(Modifier::BOLD),
    );

    // Rows past the bottom edge are never drawn, so don't build them.
    let visible = usize::from(area.height.saturating_sub(3));
    let body = rows.iter().take(visible).map(|entry| {
        Row::new(vec![
            Cell::from(entry.pid().to_string()),
            Cell::from(truncate_unicode(&entry.sample.name, name_width)),
            Cell::from(format_percent(entry.cpu_percent))
                .style(Style::default().fg(theme.cpu_heat(entry.cpu_percent))),
            Cell::from(format_rss_mb(entry.sample.rss_kb)),
        ])
        .style(Style::default().fg(theme.text_secondary))
    });

    let name_column = u16::try_from(name_width + 1).unwrap_or(u16::MAX);
    let widths = [
        Constraint::Length(8),
        Constraint::Length(name_column),
        Constraint::Length(12),
        Constraint::Length(12),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.overlay_border))
        .title(Span::styled(
            " Processes ",
            Style::default()
                .fg(theme.text_secondary)
                .add_modifier(Modifier::BOLD),
        ));

    let table = Table::new(body, widths).header(header).block(block);
    frame.render_widget(table, area);
}
