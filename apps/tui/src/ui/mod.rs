// Terminal rendering: one screen per page inside shared chrome

pub mod layout;
pub mod screens;
pub mod theme;
pub mod widgets;

use crate::app::{App, Focus, Page};
use layout::page_layout;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use theme::Palette;

pub fn ui(app: &App, f: &mut Frame<'_>) {
    let palette = Palette::for_scheme(app.color_scheme);
    f.render_widget(Block::default().style(palette.base()), f.area());

    let layout = page_layout(f.area());
    widgets::nav::render_nav(&app.nav(), app.color_scheme, &palette, f, layout.nav);

    match app.page {
        Page::Home => screens::home::render_home(app, &palette, f, layout.body),
        Page::Projects => screens::projects::render_projects(app, &palette, f, layout.body),
        Page::Meta => screens::meta::render_meta(app, &palette, f, layout.body),
    }

    render_status(app, &palette, f, layout.status);
    render_shortcuts(app, &palette, f, layout.shortcuts);

    if app.show_help {
        widgets::popup::render_help_popup(&palette, f);
    }
}

fn render_status(app: &App, palette: &Palette, f: &mut Frame<'_>, area: Rect) {
    let status = Paragraph::new(Line::styled(app.status_message.as_str(), palette.base())).block(
        Block::default()
            .title("Status")
            .title_style(palette.muted())
            .borders(Borders::ALL)
            .border_style(palette.border(false)),
    );
    f.render_widget(status, area);
}

fn shortcut_hint(app: &App) -> &'static str {
    match (app.page, app.focus) {
        (Page::Projects, Focus::Search) => {
            "type to search | Esc clear | ←/→ focus | Tab page | F1 help | Ctrl-C quit"
        }
        (Page::Projects, _) => {
            "↑/↓ move | Enter select year | ←/→ focus | / search | t theme | Tab page | q quit"
        }
        (Page::Meta, _) => {
            "[ ] ←/→ slider | ↑/↓ commit | drag brush | c clear | t theme | Tab page | q quit"
        }
        (Page::Home, _) => "Tab next page | click a link | t theme | ? help | q quit",
    }
}

fn render_shortcuts(app: &App, palette: &Palette, f: &mut Frame<'_>, area: Rect) {
    let hint = Paragraph::new(Line::from(Span::styled(shortcut_hint(app), palette.muted())));
    f.render_widget(hint, area);
}
