use portfolio_core::StatEntry;
use ratatui::layout::{Constraint, Direction, Layout, Margin, Rect};
use ratatui::style::Modifier;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::ui::theme::Palette;

fn card(title: &str, palette: &Palette) -> Block<'static> {
    Block::default()
        .title(title.to_string())
        .title_style(palette.title())
        .borders(Borders::ALL)
        .border_style(palette.border(false))
}

/// Stats laid out side by side, label above value.
pub fn render_stats_row(
    title: &str,
    entries: &[StatEntry],
    palette: &Palette,
    f: &mut Frame<'_>,
    area: Rect,
) {
    f.render_widget(card(title, palette), area);
    if entries.is_empty() {
        return;
    }

    let count = u32::try_from(entries.len()).unwrap_or(u32::MAX);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(entries.iter().map(|_| Constraint::Ratio(1, count)))
        .split(area.inner(Margin::new(1, 1)));

    for (entry, column) in entries.iter().zip(columns.iter()) {
        let lines = vec![
            Line::styled(entry.label.as_str(), palette.muted()),
            Line::styled(
                entry.value.as_str(),
                palette.base().add_modifier(Modifier::BOLD),
            ),
        ];
        f.render_widget(Paragraph::new(lines), *column);
    }
}

/// Stats stacked as `label  value` rows; `placeholder` when there are none.
pub fn render_stats_list(
    title: &str,
    entries: &[StatEntry],
    placeholder: &str,
    palette: &Palette,
    f: &mut Frame<'_>,
    area: Rect,
) {
    let width = entries
        .iter()
        .map(|entry| entry.label.chars().count())
        .max()
        .unwrap_or(0);

    let lines: Vec<Line<'_>> = if entries.is_empty() {
        vec![Line::styled(placeholder.to_string(), palette.muted())]
    } else {
        entries
            .iter()
            .map(|entry| {
                Line::from(vec![
                    ratatui::text::Span::styled(
                        format!("{:width$}  ", entry.label),
                        palette.muted(),
                    ),
                    ratatui::text::Span::styled(
                        entry.value.clone(),
                        palette.base().add_modifier(Modifier::BOLD),
                    ),
                ])
            })
            .collect()
    };

    f.render_widget(Paragraph::new(lines).block(card(title, palette)), area);
}
