use crate::app::input::helpers::cycle_cursor;
use crate::app::state::App;
use crate::ui::layout::{contains, meta_layout};
use crate::ui::widgets::scatter::{commit_at, data_point};
use crossterm::event::{KeyCode, MouseButton, MouseEvent, MouseEventKind};
use portfolio_core::commits::Brush;
use ratatui::layout::{Margin, Rect};

const SLIDER_STEP: i16 = 5;

pub fn handle_meta_input(app: &mut App, key: KeyCode) {
    let view = &mut app.commits;
    let progress = i16::from(view.progress);
    match key {
        KeyCode::Char('[') => view.set_progress(progress - SLIDER_STEP),
        KeyCode::Char(']') => view.set_progress(progress + SLIDER_STEP),
        KeyCode::Left => view.set_progress(progress - 1),
        KeyCode::Right => view.set_progress(progress + 1),
        KeyCode::Home => view.set_progress(0),
        KeyCode::End => view.set_progress(100),
        KeyCode::Up | KeyCode::Down => {
            let len = view.visible().len();
            view.focused = cycle_cursor(view.focused, key == KeyCode::Down, len);
        }
        KeyCode::Char('c') => view.clear_brush(),
        KeyCode::Esc => {
            view.clear_brush();
            view.focused = None;
        }
        _ => {}
    }
}

/// Slider progress for a click at `column` on the slider block.
fn progress_at(slider: Rect, column: u16) -> i16 {
    let inner = slider.inner(Margin::new(1, 1));
    if inner.width <= 1 {
        return 100;
    }
    let offset = f64::from(column.saturating_sub(inner.x));
    let ratio = offset / f64::from(inner.width - 1);
    (ratio * 100.0).round() as i16
}

pub fn handle_meta_mouse(app: &mut App, body: Rect, mouse: MouseEvent) {
    let layout = meta_layout(body);
    let (column, row) = (mouse.column, mouse.row);

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if contains(layout.slider, column, row) {
                app.commits.set_progress(progress_at(layout.slider, column));
                return;
            }
            // A fresh press starts a new brush; releasing without a drag leaves none.
            app.commits.clear_brush();
            app.commits.brush_anchor = data_point(&app.commits, layout.scatter, column, row);
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            let Some(anchor) = app.commits.brush_anchor else {
                return;
            };
            if let Some(point) = data_point(&app.commits, layout.scatter, column, row) {
                app.commits.brush = Some(Brush::from_corners(anchor, point));
            }
        }
        MouseEventKind::Up(MouseButton::Left) => {
            app.commits.brush_anchor = None;
        }
        MouseEventKind::Moved => {
            app.commits.focused = commit_at(&app.commits, layout.scatter, column, row);
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::super::dispatch_mouse;
    use super::super::tests::{app, press};
    use super::*;
    use crate::app::state::{CommitView, Page};
    use crate::ui::layout::{page_layout, scatter_plot_area};
    use crossterm::event::KeyModifiers;
    use portfolio_core::commits::{process_commits, read_lines};

    fn meta_app() -> App {
        let csv = "\
file,line,type,commit,author,date,time,timezone,datetime,depth,length
a.js,1,js,c1,Ada,2024-02-01,06:00:00,+00:00,2024-02-01T06:00:00+00:00,0,10
a.css,1,css,c2,Ada,2024-02-05,12:00:00,+00:00,2024-02-05T12:00:00+00:00,0,10
a.js,2,js,c3,Ada,2024-02-11,18:00:00,+00:00,2024-02-11T18:00:00+00:00,0,10
";
        let lines = read_lines(csv.as_bytes()).unwrap_or_default();
        let commits = process_commits(&lines, "https://github.com/amw013/portfolio");
        let mut app = app();
        app.commits = CommitView::new(lines, commits);
        app.go_to(Page::Meta);
        app
    }

    fn mouse(app: &mut App, kind: MouseEventKind, column: u16, row: u16) {
        dispatch_mouse(
            app,
            MouseEvent {
                kind,
                column,
                row,
                modifiers: KeyModifiers::NONE,
            },
        );
    }

    #[test]
    fn test_slider_keys_clamp() {
        let mut app = meta_app();
        press(&mut app, KeyCode::Char(']'));
        assert_eq!(app.commits.progress, 100);
        press(&mut app, KeyCode::Char('['));
        assert_eq!(app.commits.progress, 95);
        press(&mut app, KeyCode::Home);
        assert_eq!(app.commits.progress, 0);
        assert_eq!(app.commits.visible().len(), 1);
    }

    #[test]
    fn test_arrow_keys_step_through_commits() {
        let mut app = meta_app();
        press(&mut app, KeyCode::Down);
        assert_eq!(app.commits.focused, Some(0));
        press(&mut app, KeyCode::Up);
        assert_eq!(app.commits.focused, Some(2));
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.commits.focused, None);
    }

    #[test]
    fn test_drag_over_whole_plot_selects_everything() {
        let mut app = meta_app();
        let scatter = meta_layout(page_layout(app.viewport).body).scatter;
        let plot = scatter_plot_area(scatter);
        let (left, top) = (plot.x, plot.y);
        let (right, bottom) = (plot.x + plot.width - 1, plot.y + plot.height - 1);

        mouse(&mut app, MouseEventKind::Down(MouseButton::Left), left, top);
        mouse(&mut app, MouseEventKind::Drag(MouseButton::Left), right, bottom);
        mouse(&mut app, MouseEventKind::Up(MouseButton::Left), right, bottom);
        assert_eq!(app.commits.selected().len(), 3);

        // A click without a drag clears the brush.
        mouse(&mut app, MouseEventKind::Down(MouseButton::Left), left, top);
        mouse(&mut app, MouseEventKind::Up(MouseButton::Left), left, top);
        assert!(app.commits.brush.is_none());
        assert!(app.commits.selected().is_empty());
    }

    #[test]
    fn test_clicking_slider_start_rewinds() {
        let mut app = meta_app();
        let slider = meta_layout(page_layout(app.viewport).body).slider;
        mouse(&mut app, MouseEventKind::Down(MouseButton::Left), slider.x + 1, slider.y + 1);
        assert_eq!(app.commits.progress, 0);
    }
}
