use portfolio_core::LegendEntry;
use ratatui::layout::{Margin, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::ui::layout::contains;
use crate::ui::theme::{rgb, Palette};

/// Label shown for the bucket of records without a year.
pub const UNKNOWN_YEAR: &str = "Unknown";

pub fn display_label(label: &str) -> &str {
    if label.is_empty() {
        UNKNOWN_YEAR
    } else {
        label
    }
}

/// First row to show so that `cursor` stays on screen.
pub const fn scroll_offset(total_rows: usize, visible_rows: usize, cursor: usize) -> usize {
    if total_rows <= visible_rows || cursor < visible_rows {
        return 0;
    }
    cursor + 1 - visible_rows
}

/// Legend index under terminal cell `(column, row)`, if any.
pub fn legend_index_at(
    entries: &[LegendEntry],
    cursor: usize,
    legend: Rect,
    column: u16,
    row: u16,
) -> Option<usize> {
    let inner = legend.inner(Margin::new(1, 1));
    if !contains(inner, column, row) {
        return None;
    }
    let offset = scroll_offset(entries.len(), usize::from(inner.height), cursor);
    let index = offset + usize::from(row - inner.y);
    (index < entries.len()).then_some(index)
}

pub fn render_legend(
    entries: &[LegendEntry],
    cursor: usize,
    focused: bool,
    palette: &Palette,
    f: &mut Frame<'_>,
    area: Rect,
) {
    let block = Block::default()
        .title("Legend")
        .title_style(palette.title())
        .borders(Borders::ALL)
        .border_style(palette.border(focused));

    let visible_rows = usize::from(area.height.saturating_sub(2));
    let offset = scroll_offset(entries.len(), visible_rows, cursor);

    let lines: Vec<Line<'_>> = entries
        .iter()
        .enumerate()
        .skip(offset)
        .take(visible_rows)
        .map(|(index, entry)| {
            let swatch = if entry.selected { palette.selected } else { rgb(entry.color) };
            let mut label_style = Style::default().fg(palette.fg);
            if entry.selected {
                label_style = label_style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
            }
            let marker = if focused && index == cursor { "> " } else { "  " };
            Line::from(vec![
                Span::styled(marker, palette.title()),
                Span::styled("■ ", Style::default().fg(swatch)),
                Span::styled(display_label(&entry.label).to_string(), label_style),
                Span::styled(format!(" ({})", entry.count), palette.muted()),
            ])
        })
        .collect();

    f.render_widget(Paragraph::new(lines).block(block), area);
}
