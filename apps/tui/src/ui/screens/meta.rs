use portfolio_core::commits::{
    full_date_label, language_breakdown, selection_count_label, short_time_label, slider_label,
    Commit,
};
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, LineGauge, Paragraph};
use ratatui::Frame;

use crate::app::{App, CommitView};
use crate::ui::layout::meta_layout;
use crate::ui::theme::Palette;
use crate::ui::widgets::scatter::render_scatter;
use crate::ui::widgets::stats::render_stats_row;

fn panel(title: &str, palette: &Palette) -> Block<'static> {
    Block::default()
        .title(title.to_string())
        .title_style(palette.title())
        .borders(Borders::ALL)
        .border_style(palette.border(false))
}

fn render_slider(view: &CommitView, palette: &Palette, f: &mut Frame<'_>, area: Rect) {
    let label = view
        .slider_time()
        .map_or_else(|| "no commits".to_string(), |time| slider_label(&time));

    let gauge = LineGauge::default()
        .block(panel("Show commits until", palette))
        .filled_style(palette.title())
        .unfilled_style(palette.muted())
        .ratio(f64::from(view.progress) / 100.0)
        .label(Line::styled(label, palette.base()));
    f.render_widget(gauge, area);
}

/// Tooltip rows for a commit: link, date, time, author and size.
pub fn tooltip_lines<'a>(commit: &'a Commit, palette: &Palette) -> Vec<Line<'a>> {
    let row = |label: &'static str, value: String| {
        Line::from(vec![
            Span::styled(format!("{label:<8}"), palette.muted()),
            Span::styled(value, palette.base()),
        ])
    };
    vec![
        row("Commit", commit.id.clone()),
        Line::styled(
            commit.url.as_str(),
            palette.muted().add_modifier(Modifier::UNDERLINED),
        ),
        row("Date", full_date_label(&commit.datetime)),
        row("Time", short_time_label(&commit.datetime)),
        row("Author", commit.author.clone()),
        row("Lines", commit.total_lines.to_string()),
    ]
}

fn render_tooltip(view: &CommitView, palette: &Palette, f: &mut Frame<'_>, area: Rect) {
    let lines = view.focused_commit().map_or_else(
        || vec![Line::styled("Hover or ↑/↓ to inspect a commit", palette.muted())],
        |commit| tooltip_lines(commit, palette),
    );
    f.render_widget(Paragraph::new(lines).block(panel("Commit", palette)), area);
}

fn render_selection(view: &CommitView, palette: &Palette, f: &mut Frame<'_>, area: Rect) {
    let selected = view.selected();
    let mut lines = vec![Line::styled(
        selection_count_label(selected.len()),
        palette.base().add_modifier(Modifier::BOLD),
    )];
    for share in language_breakdown(&selected) {
        lines.push(Line::from(vec![
            Span::styled(format!("{:<6}", share.language.to_uppercase()), palette.muted()),
            Span::styled(share.summary(), palette.base()),
        ]));
    }
    f.render_widget(Paragraph::new(lines).block(panel("Selection", palette)), area);
}

pub fn render_meta(app: &App, palette: &Palette, f: &mut Frame<'_>, body: Rect) {
    let layout = meta_layout(body);
    let view = &app.commits;

    render_stats_row("Summary", &view.stats.entries(), palette, f, layout.stats);
    render_slider(view, palette, f, layout.slider);
    render_scatter(view, palette, f, layout.scatter);
    render_tooltip(view, palette, f, layout.tooltip);
    render_selection(view, palette, f, layout.selection);
}
