use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::ui::theme::Palette;

/// Rectangle of `percent_x` by `percent_y` centred in `area`.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let margin_y = (100 - percent_y) / 2;
    let margin_x = (100 - percent_x) / 2;

    let row = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(margin_y),
            Constraint::Percentage(percent_y),
            Constraint::Percentage(margin_y),
        ])
        .split(area)[1];

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(margin_x),
            Constraint::Percentage(percent_x),
            Constraint::Percentage(margin_x),
        ])
        .split(row)[1]
}

const KEYS: &[(&str, &str)] = &[
    ("Tab / Shift-Tab", "Next / previous page (focus on Projects)"),
    ("t", "Cycle colour scheme"),
    ("F1 / ?", "Toggle this help"),
    ("q / Ctrl-C", "Quit"),
    ("", ""),
    ("Projects", ""),
    ("Tab / ← / →", "Move focus: search, legend, list"),
    ("typing", "Search (when the search box has focus)"),
    ("Esc", "Clear the search"),
    ("↑ / ↓", "Move the legend cursor or scroll the list"),
    ("Enter / click", "Select or deselect a year"),
    ("", ""),
    ("Meta", ""),
    ("[ / ]", "Move the time slider by 5%"),
    ("← / →", "Move the time slider by 1%"),
    ("↑ / ↓", "Step through the visible commits"),
    ("drag", "Brush-select commits"),
    ("c / click", "Clear the brush"),
];

pub fn render_help_popup(palette: &Palette, f: &mut Frame<'_>) {
    let area = centered_rect(70, 80, f.area());

    let mut lines: Vec<Line<'_>> = KEYS
        .iter()
        .map(|(key, action)| {
            if action.is_empty() {
                Line::styled(*key, palette.title())
            } else {
                Line::from(vec![
                    Span::styled(format!("{key:>16}  "), palette.base().add_modifier(Modifier::BOLD)),
                    Span::styled(*action, palette.base()),
                ])
            }
        })
        .collect();

    lines.push(Line::default());
    lines.push(Line::styled("Command line", palette.title()));
    for text in crate::cli::CliArgs::help_text().lines() {
        lines.push(Line::styled(text.to_string(), palette.muted()));
    }

    let popup = Paragraph::new(lines)
        .block(
            Block::default()
                .title("Keys")
                .title_style(palette.title())
                .borders(Borders::ALL)
                .border_style(palette.border(true))
                .style(palette.base()),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, area);
    f.render_widget(popup, area);
}
