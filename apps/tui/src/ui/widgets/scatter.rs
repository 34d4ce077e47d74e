use chrono::{DateTime, FixedOffset};
use portfolio_core::commits::{
    axis_date_label, hour_tick_label, is_commit_selected, Commit, SqrtScale,
};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Color;
use ratatui::symbols::Marker;
use ratatui::text::Line as TextLine;
use ratatui::widgets::canvas::{Canvas, Context, Line, Rectangle};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::CommitView;
use crate::ui::layout::{canvas_point, scatter_plot_area, HOUR_GUTTER};
use crate::ui::theme::Palette;

pub const Y_BOUNDS: [f64; 2] = [0.0, 24.0];

const DOT_COLOR: Color = Color::Rgb(0x46, 0x82, 0xb4);
const SELECTED_DOT_COLOR: Color = Color::Rgb(0xff, 0x6b, 0x6b);

/// Pixel height the 2..30 radius range was designed against.
const REFERENCE_HEIGHT: f64 = 600.0;
const DISC_ROWS: u32 = 8;
const HALF_DAY_SECS: f64 = 43_200.0;

/// x range in seconds: every commit, padded so edge dots are not clipped.
pub fn x_bounds(commits: &[Commit]) -> [f64; 2] {
    let mut xs = commits.iter().map(Commit::x);
    let Some(first) = xs.next() else {
        return [0.0, 1.0];
    };
    let (min, max) = xs.fold((first, first), |(min, max), x| (min.min(x), max.max(x)));
    if (max - min).abs() < f64::EPSILON {
        return [min - HALF_DAY_SECS, max + HALF_DAY_SECS];
    }
    let pad = (max - min) * 0.02;
    [min - pad, max + pad]
}

/// Dot radius in cell widths for a plot `plot_height` rows tall.
fn visual_radius(scale: &SqrtScale, commit: &Commit, plot_height: u16) -> f64 {
    let fraction = scale.apply(commit.total_lines as f64) / REFERENCE_HEIGHT;
    fraction * f64::from(plot_height) * 2.0
}

/// Scatter coordinates `(seconds, hours)` under a terminal cell.
pub fn data_point(view: &CommitView, scatter: Rect, column: u16, row: u16) -> Option<(f64, f64)> {
    let plot = scatter_plot_area(scatter);
    canvas_point(plot, x_bounds(&view.commits), Y_BOUNDS, column, row)
}

/// Index into `view.visible()` of the dot nearest to the cell, if one is
/// close enough to count as hovered.
pub fn commit_at(view: &CommitView, scatter: Rect, column: u16, row: u16) -> Option<usize> {
    let plot = scatter_plot_area(scatter);
    if plot.width == 0 || plot.height == 0 {
        return None;
    }
    let [x0, x1] = x_bounds(&view.commits);
    let scale = SqrtScale::for_commits(&view.commits);
    let width = f64::from(plot.width);
    let height = f64::from(plot.height);
    let mouse = (
        f64::from(column.saturating_sub(plot.x)) + 0.5,
        f64::from(row.saturating_sub(plot.y)) + 0.5,
    );

    view.visible()
        .iter()
        .enumerate()
        .filter_map(|(index, commit)| {
            let cx = (commit.x() - x0) / (x1 - x0) * width;
            let cy = (1.0 - commit.hour_frac / Y_BOUNDS[1]) * height;
            let distance = (mouse.0 - cx).hypot((mouse.1 - cy) * 2.0);
            let reach = visual_radius(&scale, commit, plot.height).max(1.5);
            (distance <= reach).then_some((index, distance))
        })
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(index, _)| index)
}

fn fill_disc(ctx: &mut Context<'_>, center: (f64, f64), radii: (f64, f64), color: Color) {
    let (cx, cy) = center;
    let (rx, ry) = radii;
    for step in 0..=DISC_ROWS {
        let t = f64::from(step) / f64::from(DISC_ROWS) * 2.0 - 1.0;
        let half = rx * t.mul_add(-t, 1.0).max(0.0).sqrt();
        let y = ry.mul_add(t, cy);
        ctx.draw(&Line::new(cx - half, y, cx + half, y, color));
    }
}

fn time_at(seconds: f64, offset: FixedOffset) -> Option<DateTime<FixedOffset>> {
    DateTime::from_timestamp(seconds.round() as i64, 0).map(|utc| utc.with_timezone(&offset))
}

fn render_axes(view: &CommitView, palette: &Palette, f: &mut Frame<'_>, plot: Rect) {
    if plot.height == 0 {
        return;
    }
    let gutter_x = plot.x.saturating_sub(HOUR_GUTTER);
    for hour in (0..=24).step_by(6) {
        let position = 1.0 - f64::from(hour) / Y_BOUNDS[1];
        let row = plot.y + (position * f64::from(plot.height - 1)).round() as u16;
        let label = Paragraph::new(TextLine::styled(hour_tick_label(hour), palette.muted()));
        f.render_widget(label, Rect::new(gutter_x, row, HOUR_GUTTER, 1));
    }

    let Some(offset) = view.commits.first().map(|commit| *commit.datetime.offset()) else {
        return;
    };
    let [x0, x1] = x_bounds(&view.commits);
    let axis_row = Rect::new(plot.x, plot.y + plot.height, plot.width, 1);
    let ticks = [
        (x0, Alignment::Left),
        ((x0 + x1) / 2.0, Alignment::Center),
        (x1, Alignment::Right),
    ];
    for (seconds, alignment) in ticks {
        if let Some(time) = time_at(seconds, offset) {
            let label = Paragraph::new(TextLine::styled(axis_date_label(&time), palette.muted()))
                .alignment(alignment);
            f.render_widget(label, axis_row);
        }
    }
}

pub fn render_scatter(view: &CommitView, palette: &Palette, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title("Commits by time of day")
        .title_style(palette.title())
        .borders(Borders::ALL)
        .border_style(palette.border(view.brush_anchor.is_some()));

    if view.is_empty() {
        let empty = Paragraph::new(TextLine::styled("No commit data", palette.muted()))
            .block(block)
            .alignment(Alignment::Center);
        f.render_widget(empty, area);
        return;
    }
    f.render_widget(block, area);

    let plot = scatter_plot_area(area);
    render_axes(view, palette, f, plot);

    let bounds = x_bounds(&view.commits);
    let scale = SqrtScale::for_commits(&view.commits);
    let seconds_per_cell = (bounds[1] - bounds[0]) / f64::from(plot.width.max(1));
    let hours_per_unit = Y_BOUNDS[1] / (f64::from(plot.height.max(1)) * 2.0);
    let visible = view.visible();
    let focused = view.focused;
    let brush = view.brush;
    let accent = palette.accent;

    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .background_color(palette.bg)
        .x_bounds(bounds)
        .y_bounds(Y_BOUNDS)
        .paint(move |ctx| {
            for (index, commit) in visible.iter().enumerate() {
                let radius = visual_radius(&scale, commit, plot.height);
                let color = if focused == Some(index) {
                    accent
                } else if is_commit_selected(brush.as_ref(), commit) {
                    SELECTED_DOT_COLOR
                } else {
                    DOT_COLOR
                };
                fill_disc(
                    ctx,
                    (commit.x(), commit.hour_frac),
                    (radius * seconds_per_cell, radius * hours_per_unit),
                    color,
                );
            }
            if let Some(brush) = brush {
                ctx.draw(&Rectangle {
                    x: brush.x0,
                    y: brush.y0,
                    width: brush.x1 - brush.x0,
                    height: brush.y1 - brush.y0,
                    color: accent,
                });
            }
        });

    f.render_widget(canvas, plot);
}
