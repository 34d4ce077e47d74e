use portfolio_core::nav::NavLink;
use portfolio_core::ColorScheme;
use ratatui::layout::{Alignment, Margin, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::ui::theme::Palette;

const SEPARATOR: &str = "|";

fn link_text(link: &NavLink) -> String {
    if link.external {
        format!(" {} ↗ ", link.title)
    } else {
        format!(" {} ", link.title)
    }
}

/// Index of the link drawn at `column`, given the nav block area.
pub fn nav_index_at(links: &[NavLink], nav: Rect, column: u16, row: u16) -> Option<usize> {
    let inner = nav.inner(Margin::new(1, 1));
    if row != inner.y || column < inner.x {
        return None;
    }
    let mut start = usize::from(inner.x);
    let column = usize::from(column);
    for (index, link) in links.iter().enumerate() {
        let end = start + link_text(link).chars().count();
        if column >= start && column < end {
            return Some(index);
        }
        start = end + SEPARATOR.len();
    }
    None
}

pub fn render_nav(
    links: &[NavLink],
    scheme: ColorScheme,
    palette: &Palette,
    f: &mut Frame<'_>,
    area: Rect,
) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(palette.border(false));
    let inner = area.inner(Margin::new(1, 1));
    f.render_widget(block, area);

    let mut spans = Vec::new();
    for (index, link) in links.iter().enumerate() {
        if index > 0 {
            spans.push(Span::styled(SEPARATOR, palette.muted()));
        }
        let style = if link.current {
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(palette.fg)
        };
        spans.push(Span::styled(link_text(link), style));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), inner);

    let theme = Paragraph::new(Line::styled(
        format!("Theme: {}", scheme.label()),
        palette.muted(),
    ))
    .alignment(Alignment::Right);
    f.render_widget(theme, inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use portfolio_core::nav::{build_nav, default_pages};

    #[test]
    fn test_click_positions_map_to_links() {
        let links = build_nav(&default_pages("amw013"), "localhost", "localhost", "/");
        let nav = Rect::new(0, 0, 80, 3);
        // " Home " spans columns 1..7, then "|", then " Projects " from 8.
        assert_eq!(nav_index_at(&links, nav, 1, 1), Some(0));
        assert_eq!(nav_index_at(&links, nav, 6, 1), Some(0));
        assert_eq!(nav_index_at(&links, nav, 7, 1), None);
        assert_eq!(nav_index_at(&links, nav, 8, 1), Some(1));
        assert_eq!(nav_index_at(&links, nav, 8, 0), None);
    }
}
