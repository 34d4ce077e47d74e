use std::f64::consts::TAU;

use portfolio_core::{PieChart, Wedge};
use ratatui::layout::{Margin, Rect};
use ratatui::style::Color;
use ratatui::symbols::Marker;
use ratatui::text::Line as TextLine;
use ratatui::widgets::canvas::{Canvas, Context, Line};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::ui::layout::canvas_point;
use crate::ui::theme::{rgb, Palette};

const RADIUS: f64 = 1.0;
/// Angular step between the radial strokes that fill a wedge.
const FILL_STEP: f64 = 0.01;

/// Drawing area of the pie inside its bordered block.
pub fn pie_canvas_area(pie: Rect) -> Rect {
    pie.inner(Margin::new(1, 1))
}

/// Canvas bounds that keep the pie round; terminal cells are about twice as
/// tall as they are wide.
pub fn pie_bounds(area: Rect) -> ([f64; 2], [f64; 2]) {
    let width = f64::from(area.width.max(1));
    let height = f64::from(area.height.max(1)) * 2.0;
    let padded = RADIUS * 1.1;
    if width >= height {
        let half = padded * width / height;
        ([-half, half], [-padded, padded])
    } else {
        let half = padded * height / width;
        ([-padded, padded], [-half, half])
    }
}

/// Angle of a canvas point, radians clockwise from 12 o'clock.
pub fn angle_of(x: f64, y: f64) -> f64 {
    x.atan2(y).rem_euclid(TAU)
}

/// The wedge drawn under terminal cell `(column, row)`, if any.
pub fn wedge_at(chart: &PieChart, pie: Rect, column: u16, row: u16) -> Option<&Wedge> {
    let area = pie_canvas_area(pie);
    let (x_bounds, y_bounds) = pie_bounds(area);
    let (x, y) = canvas_point(area, x_bounds, y_bounds, column, row)?;
    if x.hypot(y) > RADIUS {
        return None;
    }
    chart.hit_test(angle_of(x, y))
}

fn fill_wedge(ctx: &mut Context<'_>, wedge: &Wedge, color: Color) {
    let mut angle = wedge.start_angle;
    while angle < wedge.end_angle {
        ctx.draw(&Line::new(0.0, 0.0, RADIUS * angle.sin(), RADIUS * angle.cos(), color));
        angle += FILL_STEP;
    }
    let end = wedge.end_angle;
    ctx.draw(&Line::new(0.0, 0.0, RADIUS * end.sin(), RADIUS * end.cos(), color));
}

pub fn render_pie(chart: &PieChart, palette: &Palette, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title("Projects by year")
        .title_style(palette.title())
        .borders(Borders::ALL)
        .border_style(palette.border(false));

    if chart.is_empty() {
        let empty = Paragraph::new(TextLine::styled("No projects", palette.muted()))
            .block(block)
            .alignment(ratatui::layout::Alignment::Center);
        f.render_widget(empty, area);
        return;
    }

    let (x_bounds, y_bounds) = pie_bounds(pie_canvas_area(area));
    let selected = palette.selected;
    let canvas = Canvas::default()
        .block(block)
        .marker(Marker::Braille)
        .background_color(palette.bg)
        .x_bounds(x_bounds)
        .y_bounds(y_bounds)
        .paint(|ctx| {
            for wedge in chart.wedges() {
                let color = if wedge.selected { selected } else { rgb(wedge.color) };
                fill_wedge(ctx, wedge, color);
            }
        });

    f.render_widget(canvas, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use portfolio_core::{aggregate, draw_pie, ProjectRecord};

    #[test]
    fn test_bounds_keep_aspect() {
        let (x, y) = pie_bounds(Rect::new(0, 0, 32, 12));
        let width_ratio = (x[1] - x[0]) / 32.0;
        let height_ratio = (y[1] - y[0]) / 24.0;
        assert!((width_ratio - height_ratio).abs() < 1e-9);
    }

    #[test]
    fn test_angle_is_clockwise_from_top() {
        assert!(angle_of(0.0, 1.0).abs() < 1e-9);
        assert!((angle_of(1.0, 0.0) - TAU / 4.0).abs() < 1e-9);
        assert!((angle_of(-1.0, 0.0) - TAU * 0.75).abs() < 1e-9);
    }

    #[test]
    fn test_click_on_right_half_hits_first_of_two_equal_wedges() {
        let records = [ProjectRecord::new("A", "2023"), ProjectRecord::new("B", "2024")];
        let mut chart = PieChart::default();
        draw_pie(&aggregate(&records), None, &mut chart);

        let pie = Rect::new(0, 0, 34, 14);
        let inner = pie_canvas_area(pie);
        let right = inner.x + inner.width / 2 + 4;
        let left = inner.x + inner.width / 2 - 5;
        let middle_row = inner.y + inner.height / 2;

        assert_eq!(wedge_at(&chart, pie, right, middle_row).map(|w| w.label.as_str()), Some("2023"));
        assert_eq!(wedge_at(&chart, pie, left, middle_row).map(|w| w.label.as_str()), Some("2024"));
        assert!(wedge_at(&chart, pie, inner.x, inner.y).is_none());
    }
}
