use crate::app::state::{App, Focus, Page};
use crate::ui::layout::{contains, page_layout};
use crate::ui::widgets::nav::nav_index_at;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

mod help;
mod meta;
mod projects;

pub fn dispatch_key(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return;
    }

    if help::handle_help_toggle(app, key.code) {
        return;
    }

    // On the projects page Tab walks the focus ring instead of the pages.
    match (key.code, app.page) {
        (KeyCode::Tab, Page::Projects) => {
            app.focus = app.focus.next();
            return;
        }
        (KeyCode::BackTab, Page::Projects) => {
            app.focus = app.focus.previous();
            return;
        }
        (KeyCode::Tab, _) => {
            app.go_to(app.page.next());
            return;
        }
        (KeyCode::BackTab, _) => {
            app.go_to(app.page.previous());
            return;
        }
        _ => {}
    }

    // The search box takes every printable key while it has focus.
    if app.page == Page::Projects && app.focus == Focus::Search {
        projects::handle_search_input(app, key.code);
        return;
    }

    if handle_global_input(app, key.code) {
        return;
    }

    match app.page {
        Page::Home => {}
        Page::Projects => projects::handle_projects_input(app, key.code),
        Page::Meta => meta::handle_meta_input(app, key.code),
    }
}

fn handle_global_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Char('q') => app.quit(),
        KeyCode::Char('?') => app.show_help = true,
        KeyCode::Char('t') => app.cycle_color_scheme(),
        KeyCode::Char('1') => app.go_to(Page::Home),
        KeyCode::Char('2') => app.go_to(Page::Projects),
        KeyCode::Char('3') => app.go_to(Page::Meta),
        _ => return false,
    }
    true
}

pub fn dispatch_mouse(app: &mut App, mouse: MouseEvent) {
    if app.show_help {
        return;
    }

    let layout = page_layout(app.viewport);
    if mouse.kind == MouseEventKind::Down(MouseButton::Left)
        && contains(layout.nav, mouse.column, mouse.row)
    {
        if let Some(index) = nav_index_at(&app.nav(), layout.nav, mouse.column, mouse.row) {
            app.follow_nav(index);
        }
        return;
    }

    match app.page {
        Page::Home => {}
        Page::Projects => projects::handle_projects_mouse(app, layout.body, mouse),
        Page::Meta => meta::handle_meta_mouse(app, layout.body, mouse),
    }
}
