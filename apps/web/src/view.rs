use std::f64::consts::TAU;

use portfolio_core::github::GitHubStats;
use portfolio_core::nav::NavLink;
use portfolio_core::{ColorScheme, PieChart, ProjectBlock, ProjectsController};
use ratzilla::ratatui::layout::{Constraint, Direction, Layout, Margin, Rect};
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::symbols::Marker;
use ratzilla::ratatui::text::{Line as TextLine, Span, Text};
use ratzilla::ratatui::widgets::canvas::{Canvas, Line};
use ratzilla::ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratzilla::ratatui::Frame;

use crate::theme::{colors, SELECTED};

/// Everything the page shows; owned by `main` behind an `Rc<RefCell<_>>`.
pub struct PageState {
    pub controller: Option<ProjectsController>,
    pub query: String,
    pub legend_cursor: usize,
    pub scheme: ColorScheme,
    pub nav: Vec<NavLink>,
    pub github: Option<GitHubStats>,
}

impl PageState {
    pub fn legend_len(&self) -> usize {
        self.controller
            .as_ref()
            .map_or(0, |controller| controller.chart().legend().len())
    }

    /// Pushes the query into the controller and keeps the cursor in range.
    pub fn refresh(&mut self) {
        if let Some(controller) = self.controller.as_mut() {
            controller.set_query(&self.query);
        }
        self.legend_cursor = self.legend_cursor.min(self.legend_len().saturating_sub(1));
    }

    pub fn toggle_cursor(&mut self) {
        if let Some(controller) = self.controller.as_mut() {
            controller.toggle_legend_entry(self.legend_cursor);
        }
        self.legend_cursor = self.legend_cursor.min(self.legend_len().saturating_sub(1));
    }
}

const fn rgb(color: portfolio_core::Rgb) -> Color {
    Color::Rgb(color.0, color.1, color.2)
}

fn year_label(label: &str) -> &str {
    if label.is_empty() {
        "Unknown"
    } else {
        label
    }
}

pub fn render(state: &PageState, f: &mut Frame<'_>) {
    let (fg, bg, muted, accent) = colors(state.scheme);
    let base = Style::default().fg(fg).bg(bg);
    let area = f.area();
    f.render_widget(Block::default().style(base), area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(14),
            Constraint::Min(4),
            Constraint::Length(1),
        ])
        .split(area.inner(Margin::new(1, 0)));

    render_nav(state, accent, muted, f, rows[0]);

    let search = Paragraph::new(TextLine::from(vec![
        Span::styled("Search: ", Style::default().fg(muted)),
        Span::styled(state.query.as_str(), base),
        Span::styled("_", Style::default().fg(accent)),
    ]))
    .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(accent)));
    f.render_widget(search, rows[1]);

    let Some(controller) = state.controller.as_ref() else {
        let loading = Paragraph::new("Loading projects...").style(Style::default().fg(muted));
        f.render_widget(loading, rows[2]);
        return;
    };

    let chart_row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(34), Constraint::Min(16), Constraint::Length(28)])
        .split(rows[2]);
    render_pie(controller.chart(), bg, muted, f, chart_row[0]);
    render_legend(controller.chart(), state.legend_cursor, fg, muted, accent, f, chart_row[1]);
    render_github(state.github.as_ref(), fg, muted, accent, f, chart_row[2]);

    render_projects(&controller.title(), controller.blocks(), fg, muted, accent, f, rows[3]);

    let hint = Paragraph::new(
        "type to search | Esc clear | ↑/↓ legend | Enter select year | Tab theme",
    )
    .style(Style::default().fg(muted));
    f.render_widget(hint, rows[4]);
}

fn render_nav(state: &PageState, accent: Color, muted: Color, f: &mut Frame<'_>, area: Rect) {
    let mut spans = Vec::new();
    for link in &state.nav {
        let style = if link.current {
            Style::default().fg(accent).add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default()
        };
        let suffix = if link.external { " ↗" } else { "" };
        spans.push(Span::styled(format!(" {}{suffix} ", link.title), style));
    }
    spans.push(Span::styled(
        format!("  Theme: {}", state.scheme.label()),
        Style::default().fg(muted),
    ));
    f.render_widget(Paragraph::new(TextLine::from(spans)), area);
}

fn render_pie(chart: &PieChart, bg: Color, muted: Color, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(muted));
    let inner = block.inner(area);
    let ratio = f64::from(inner.width.max(1)) / (f64::from(inner.height.max(1)) * 2.0);

    let canvas = Canvas::default()
        .block(block)
        .marker(Marker::Braille)
        .background_color(bg)
        .x_bounds([-1.1 * ratio, 1.1 * ratio])
        .y_bounds([-1.1, 1.1])
        .paint(|ctx| {
            for wedge in chart.wedges() {
                let color = if wedge.selected { SELECTED } else { rgb(wedge.color) };
                let mut angle = wedge.start_angle;
                while angle < wedge.end_angle {
                    ctx.draw(&Line::new(0.0, 0.0, angle.sin(), angle.cos(), color));
                    angle += TAU / 600.0;
                }
            }
        });
    f.render_widget(canvas, area);
}

fn render_legend(
    chart: &PieChart,
    cursor: usize,
    fg: Color,
    muted: Color,
    accent: Color,
    f: &mut Frame<'_>,
    area: Rect,
) {
    let lines: Vec<TextLine<'_>> = chart
        .legend()
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let swatch = if entry.selected { SELECTED } else { rgb(entry.color) };
            let mut label = Style::default().fg(fg);
            if entry.selected {
                label = label.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
            }
            TextLine::from(vec![
                Span::styled(if index == cursor { "> " } else { "  " }, Style::default().fg(accent)),
                Span::styled("■ ", Style::default().fg(swatch)),
                Span::styled(year_label(&entry.label).to_string(), label),
                Span::styled(format!(" ({})", entry.count), Style::default().fg(muted)),
            ])
        })
        .collect();

    let legend = Paragraph::new(lines).block(
        Block::default()
            .title("Legend")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(muted)),
    );
    f.render_widget(legend, area);
}

fn render_github(
    stats: Option<&GitHubStats>,
    fg: Color,
    muted: Color,
    accent: Color,
    f: &mut Frame<'_>,
    area: Rect,
) {
    let lines: Vec<TextLine<'_>> = stats.map_or_else(
        || vec![TextLine::styled("Unavailable", Style::default().fg(muted))],
        |stats| {
            stats
                .entries()
                .into_iter()
                .map(|entry| {
                    TextLine::from(vec![
                        Span::styled(format!("{:<14}", entry.label), Style::default().fg(muted)),
                        Span::styled(entry.value, Style::default().fg(fg).add_modifier(Modifier::BOLD)),
                    ])
                })
                .collect()
        },
    );
    let card = Paragraph::new(lines).block(
        Block::default()
            .title("My GitHub Stats")
            .title_style(Style::default().fg(accent))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(muted)),
    );
    f.render_widget(card, area);
}

fn render_projects(
    title: &str,
    blocks: &[ProjectBlock],
    fg: Color,
    muted: Color,
    accent: Color,
    f: &mut Frame<'_>,
    area: Rect,
) {
    let mut lines = Vec::new();
    for block in blocks {
        let heading = "#".repeat(usize::from(block.heading_level.depth()));
        lines.push(TextLine::from(vec![
            Span::styled(format!("{heading} "), Style::default().fg(muted)),
            Span::styled(
                block.title.as_str(),
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            ),
        ]));
        let image = if block.has_image() {
            format!("[image: {}]", block.image)
        } else {
            "[image unavailable]".to_string()
        };
        lines.push(TextLine::styled(image, Style::default().fg(muted)));
        lines.push(TextLine::styled(block.description.as_str(), Style::default().fg(fg)));
        if !block.year.is_empty() {
            lines.push(TextLine::styled(format!("c. {}", block.year), Style::default().fg(muted)));
        }
        lines.push(TextLine::default());
    }

    let list = Paragraph::new(Text::from(lines))
        .block(
            Block::default()
                .title(title.to_string())
                .title_style(Style::default().fg(accent))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(muted)),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(list, area);
}
