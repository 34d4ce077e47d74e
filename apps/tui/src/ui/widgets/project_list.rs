use portfolio_core::{HeadingLevel, ProjectBlock};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::ui::theme::Palette;

/// Shown in place of an image the record does not have.
pub const BROKEN_IMAGE: &str = "[image unavailable]";

fn heading_style(level: HeadingLevel, palette: &Palette) -> Style {
    let style = Style::default().fg(palette.accent);
    match level {
        HeadingLevel::H1 => style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        HeadingLevel::H2 | HeadingLevel::H3 => style.add_modifier(Modifier::BOLD),
        HeadingLevel::H4 | HeadingLevel::H5 | HeadingLevel::H6 => style,
    }
}

/// Lines of one project article: heading, image, description and year.
pub fn block_lines<'a>(block: &'a ProjectBlock, palette: &Palette) -> Vec<Line<'a>> {
    let marker = "#".repeat(usize::from(block.heading_level.depth()));
    let image = if block.has_image() {
        Line::styled(format!("[image: {}]", block.image), palette.muted())
    } else {
        Line::styled(BROKEN_IMAGE, palette.muted())
    };

    let mut lines = vec![
        Line::from(vec![
            Span::styled(format!("{marker} "), palette.muted()),
            Span::styled(block.title.as_str(), heading_style(block.heading_level, palette)),
        ]),
        image,
        Line::styled(block.description.as_str(), Style::default().fg(palette.fg)),
    ];
    if !block.year.is_empty() {
        lines.push(Line::styled(
            format!("c. {}", block.year),
            palette.muted().add_modifier(Modifier::ITALIC),
        ));
    }
    lines.push(Line::default());
    lines
}

/// Project articles starting at `first`.
pub fn render_project_list(
    title: &str,
    blocks: &[ProjectBlock],
    first: usize,
    focused: bool,
    palette: &Palette,
    f: &mut Frame<'_>,
    area: Rect,
) {
    let block = Block::default()
        .title(title.to_string())
        .title_style(palette.title())
        .borders(Borders::ALL)
        .border_style(palette.border(focused));

    if blocks.is_empty() {
        let empty = Paragraph::new(Line::styled("No projects to show", palette.muted())).block(block);
        f.render_widget(empty, area);
        return;
    }

    let lines: Vec<Line<'_>> = blocks
        .iter()
        .skip(first)
        .flat_map(|project| block_lines(project, palette))
        .collect();

    let paragraph = Paragraph::new(Text::from(lines))
        .block(block)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use portfolio_core::{ColorScheme, ProjectRecord};

    fn text(line: &Line<'_>) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    #[test]
    fn test_heading_marker_matches_level() {
        let palette = Palette::for_scheme(ColorScheme::Automatic);
        let block = ProjectBlock::from_record(&ProjectRecord::new("Atlas", "2024"), HeadingLevel::H3);
        let lines = block_lines(&block, &palette);
        assert_eq!(text(&lines[0]), "### Atlas");
        assert_eq!(text(&lines[1]), BROKEN_IMAGE);
        assert_eq!(text(&lines[3]), "c. 2024");
    }

    #[test]
    fn test_year_line_omitted_without_year() {
        let palette = Palette::for_scheme(ColorScheme::Dark);
        let block = ProjectBlock::from_record(&ProjectRecord::default(), HeadingLevel::H2);
        let lines = block_lines(&block, &palette);
        assert_eq!(lines.len(), 4);
        assert_eq!(text(&lines[0]), "## Untitled Project");
        assert_eq!(text(&lines[2]), "No description provided.");
    }
}
