//! Screen geometry shared by the renderers and the mouse handlers.
//!
//! Mouse hit tests re-run these functions on the last known viewport, so the
//! clicked cell maps onto exactly what was drawn.

use ratatui::layout::{Constraint, Direction, Layout, Margin, Rect};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLayout {
    pub nav: Rect,
    pub body: Rect,
    pub status: Rect,
    pub shortcuts: Rect,
}

pub fn page_layout(area: Rect) -> PageLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Nav
            Constraint::Min(5),    // Page content
            Constraint::Length(3), // Status
            Constraint::Length(1), // Shortcuts hint
        ])
        .split(area.inner(Margin::new(1, 0)));

    PageLayout {
        nav: chunks[0],
        body: chunks[1],
        status: chunks[2],
        shortcuts: chunks[3],
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HomeLayout {
    pub intro: Rect,
    pub featured: Rect,
    pub github: Rect,
}

pub fn home_layout(body: Rect) -> HomeLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(3)])
        .split(body);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(rows[1]);

    HomeLayout {
        intro: rows[0],
        featured: columns[0],
        github: columns[1],
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectsLayout {
    pub search: Rect,
    pub pie: Rect,
    pub legend: Rect,
    pub list: Rect,
}

pub fn projects_layout(body: Rect) -> ProjectsLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(14),
            Constraint::Min(3),
        ])
        .split(body);
    let chart_row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(34), Constraint::Min(16)])
        .split(rows[1]);

    ProjectsLayout {
        search: rows[0],
        pie: chart_row[0],
        legend: chart_row[1],
        list: rows[2],
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetaLayout {
    pub stats: Rect,
    pub slider: Rect,
    pub scatter: Rect,
    pub tooltip: Rect,
    pub selection: Rect,
}

pub fn meta_layout(body: Rect) -> MetaLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Length(3),
            Constraint::Min(8),
        ])
        .split(body);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(68), Constraint::Percentage(32)])
        .split(rows[2]);
    let side = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(8), Constraint::Min(3)])
        .split(columns[1]);

    MetaLayout {
        stats: rows[0],
        slider: rows[1],
        scatter: columns[0],
        tooltip: side[0],
        selection: side[1],
    }
}

/// Width of the hour labels left of the scatter plot.
pub const HOUR_GUTTER: u16 = 6;

/// Plot area of the scatter inside its bordered block: the block interior
/// minus the hour gutter on the left and the date row at the bottom.
pub fn scatter_plot_area(scatter: Rect) -> Rect {
    let inner = scatter.inner(Margin::new(1, 1));
    Rect {
        x: inner.x.saturating_add(HOUR_GUTTER),
        y: inner.y,
        width: inner.width.saturating_sub(HOUR_GUTTER),
        height: inner.height.saturating_sub(1),
    }
}

pub fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x
        && column < area.x.saturating_add(area.width)
        && row >= area.y
        && row < area.y.saturating_add(area.height)
}

/// Centre of cell `(column, row)` in canvas coordinates of `area`.
pub fn canvas_point(
    area: Rect,
    x_bounds: [f64; 2],
    y_bounds: [f64; 2],
    column: u16,
    row: u16,
) -> Option<(f64, f64)> {
    if !contains(area, column, row) {
        return None;
    }
    let fx = (f64::from(column - area.x) + 0.5) / f64::from(area.width);
    let fy = (f64::from(row - area.y) + 0.5) / f64::from(area.height);
    let x = (x_bounds[1] - x_bounds[0]).mul_add(fx, x_bounds[0]);
    let y = (y_bounds[1] - y_bounds[0]).mul_add(-fy, y_bounds[1]);
    Some((x, y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_layout_fills_viewport() {
        let layout = page_layout(Rect::new(0, 0, 100, 40));
        assert_eq!(layout.nav.height, 3);
        assert_eq!(layout.shortcuts.y, 39);
        assert_eq!(layout.body.y, 3);
        assert_eq!(layout.nav.x, 1);
    }

    fn close(actual: Option<(f64, f64)>, expected: (f64, f64)) -> bool {
        actual.is_some_and(|(x, y)| (x - expected.0).abs() < 1e-9 && (y - expected.1).abs() < 1e-9)
    }

    #[test]
    fn test_canvas_point_maps_corners() {
        let area = Rect::new(10, 5, 10, 10);
        let top_left = canvas_point(area, [0.0, 10.0], [0.0, 10.0], 10, 5);
        assert!(close(top_left, (0.5, 9.5)));
        let bottom_right = canvas_point(area, [0.0, 10.0], [0.0, 10.0], 19, 14);
        assert!(close(bottom_right, (9.5, 0.5)));
        assert_eq!(canvas_point(area, [0.0, 1.0], [0.0, 1.0], 20, 5), None);
    }

    #[test]
    fn test_scatter_plot_area_leaves_room_for_axes() {
        let plot = scatter_plot_area(Rect::new(0, 0, 40, 20));
        assert_eq!(plot, Rect::new(7, 1, 32, 17));
    }
}
