use crate::app::input::helpers::{clamped_step, wrap_decrement, wrap_increment};
use crate::app::state::{App, Focus};
use crate::ui::layout::{contains, projects_layout};
use crate::ui::widgets::legend::legend_index_at;
use crate::ui::widgets::pie::wedge_at;
use crossterm::event::{KeyCode, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

const PAGE_STEP: isize = 5;

pub fn handle_search_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Char(ch) => {
            app.search_input.push(ch);
            app.update_query();
        }
        KeyCode::Backspace => {
            if app.search_input.pop().is_some() {
                app.update_query();
            }
        }
        KeyCode::Esc => {
            if !app.search_input.is_empty() {
                app.search_input.clear();
                app.update_query();
            }
        }
        KeyCode::Enter | KeyCode::Down | KeyCode::Right => app.focus = Focus::Legend,
        KeyCode::Left => app.focus = Focus::List,
        _ => {}
    }
}

pub fn handle_projects_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Right => app.focus = app.focus.next(),
        KeyCode::Left => app.focus = app.focus.previous(),
        KeyCode::Char('/') | KeyCode::Esc => app.focus = Focus::Search,
        _ => match app.focus {
            Focus::Legend => handle_legend_input(app, key),
            Focus::List => handle_list_input(app, key),
            Focus::Search => {}
        },
    }
}

fn handle_legend_input(app: &mut App, key: KeyCode) {
    let len = app.projects.chart().legend().len();
    match key {
        KeyCode::Up => app.legend_index = wrap_decrement(app.legend_index, len),
        KeyCode::Down => app.legend_index = wrap_increment(app.legend_index, len),
        KeyCode::Enter | KeyCode::Char(' ') => app.toggle_legend_cursor(),
        _ => {}
    }
}

fn handle_list_input(app: &mut App, key: KeyCode) {
    let len = app.projects.blocks().len();
    let delta = match key {
        KeyCode::Up => -1,
        KeyCode::Down => 1,
        KeyCode::PageUp => -PAGE_STEP,
        KeyCode::PageDown => PAGE_STEP,
        KeyCode::Home => {
            app.list_scroll = 0;
            return;
        }
        KeyCode::End => {
            app.list_scroll = len.saturating_sub(1);
            return;
        }
        _ => return,
    };
    app.list_scroll = clamped_step(app.list_scroll, delta, len);
}

pub fn handle_projects_mouse(app: &mut App, body: Rect, mouse: MouseEvent) {
    let layout = projects_layout(body);
    let (column, row) = (mouse.column, mouse.row);

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if contains(layout.search, column, row) {
                app.focus = Focus::Search;
            } else if contains(layout.pie, column, row) {
                let label = wedge_at(app.projects.chart(), layout.pie, column, row)
                    .map(|wedge| wedge.label.clone());
                if let Some(label) = label {
                    app.toggle_category(&label);
                }
            } else if contains(layout.legend, column, row) {
                app.focus = Focus::Legend;
                let index = legend_index_at(
                    app.projects.chart().legend(),
                    app.legend_index,
                    layout.legend,
                    column,
                    row,
                );
                if let Some(index) = index {
                    app.toggle_legend_entry(index);
                }
            } else if contains(layout.list, column, row) {
                app.focus = Focus::List;
            }
        }
        MouseEventKind::ScrollDown if contains(layout.list, column, row) => {
            app.list_scroll = clamped_step(app.list_scroll, 1, app.projects.blocks().len());
        }
        MouseEventKind::ScrollUp if contains(layout.list, column, row) => {
            app.list_scroll = clamped_step(app.list_scroll, -1, app.projects.blocks().len());
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::{app, click, press};
    use crate::app::state::{Focus, Page};
    use crate::ui::layout::{page_layout, projects_layout};
    use crossterm::event::KeyCode;

    #[test]
    fn test_typing_filters_and_backspace_restores() {
        let mut app = app();
        app.go_to(Page::Projects);
        for ch in "BEA".chars() {
            press(&mut app, KeyCode::Char(ch));
        }
        assert_eq!(app.projects.state().query, "bea");
        assert_eq!(app.projects.blocks().len(), 1);

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.projects.blocks().len(), 3);
    }

    #[test]
    fn test_enter_on_legend_toggles_year() {
        let mut app = app();
        app.go_to(Page::Projects);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.focus, Focus::Legend);

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.projects.state().selected_category.as_deref(), Some("2024"));
        assert_eq!(app.projects.blocks().len(), 2);

        // The pie now only has the selected year, so the cursor is back on it.
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.projects.state().selected_category, None);
        assert_eq!(app.projects.blocks().len(), 3);
    }

    #[test]
    fn test_clicking_legend_row_selects_year() {
        let mut app = app();
        app.go_to(Page::Projects);
        let layout = projects_layout(page_layout(app.viewport).body);

        click(&mut app, layout.legend.x + 3, layout.legend.y + 1);
        assert_eq!(app.focus, Focus::Legend);
        assert_eq!(app.projects.state().selected_category.as_deref(), Some("2023"));
    }

    #[test]
    fn test_list_scroll_is_clamped() {
        let mut app = app();
        app.go_to(Page::Projects);
        app.focus = Focus::List;
        press(&mut app, KeyCode::PageDown);
        assert_eq!(app.list_scroll, 2);
        press(&mut app, KeyCode::Up);
        assert_eq!(app.list_scroll, 1);
    }
}
