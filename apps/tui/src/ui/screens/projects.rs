use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::{App, Focus};
use crate::ui::layout::projects_layout;
use crate::ui::theme::Palette;
use crate::ui::widgets::legend::{display_label, render_legend};
use crate::ui::widgets::pie::render_pie;
use crate::ui::widgets::project_list::render_project_list;

fn render_search(app: &App, palette: &Palette, f: &mut Frame<'_>, area: Rect) {
    let focused = app.focus == Focus::Search;
    let mut spans = vec![Span::styled("🔍 ", palette.muted())];
    if app.search_input.is_empty() && !focused {
        spans.push(Span::styled("Search projects…", palette.muted()));
    } else {
        spans.push(Span::styled(app.search_input.as_str(), palette.base()));
    }
    if focused {
        spans.push(Span::styled(
            "_",
            palette.base().add_modifier(Modifier::SLOW_BLINK),
        ));
    }
    if let Some(selected) = &app.projects.state().selected_category {
        spans.push(Span::styled(
            format!("   year: {}", display_label(selected)),
            palette.title(),
        ));
    }

    let search = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(palette.border(focused)),
    );
    f.render_widget(search, area);
}

pub fn render_projects(app: &App, palette: &Palette, f: &mut Frame<'_>, body: Rect) {
    let layout = projects_layout(body);

    render_search(app, palette, f, layout.search);
    render_pie(app.projects.chart(), palette, f, layout.pie);
    render_legend(
        app.projects.chart().legend(),
        app.legend_index,
        app.focus == Focus::Legend,
        palette,
        f,
        layout.legend,
    );
    render_project_list(
        &app.projects.title(),
        app.projects.blocks(),
        app.list_scroll,
        app.focus == Focus::List,
        palette,
        f,
        layout.list,
    );
}
