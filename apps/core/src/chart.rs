use std::f64::consts::TAU;

use serde::Serialize;

use crate::aggregate::CategoryBucket;

pub type Rgb = (u8, u8, u8);

/// Tableau 10, indexed cyclically by bucket position.
pub const PALETTE: [Rgb; 10] = [
    (0x4e, 0x79, 0xa7),
    (0xf2, 0x8e, 0x2c),
    (0xe1, 0x57, 0x59),
    (0x76, 0xb7, 0xb2),
    (0x59, 0xa1, 0x4f),
    (0xed, 0xc9, 0x49),
    (0xaf, 0x7a, 0xa1),
    (0xff, 0x9d, 0xa7),
    (0x9c, 0x75, 0x5f),
    (0xba, 0xb0, 0xab),
];

pub const fn palette_color(index: usize) -> Rgb {
    PALETTE[index % PALETTE.len()]
}

pub fn hex(color: Rgb) -> String {
    format!("#{:02x}{:02x}{:02x}", color.0, color.1, color.2)
}

/// One pie slice. Angles are radians, clockwise from 12 o'clock.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Wedge {
    pub label: String,
    pub count: usize,
    pub start_angle: f64,
    pub end_angle: f64,
    pub color: Rgb,
    pub selected: bool,
}

impl Wedge {
    pub fn mid_angle(&self) -> f64 {
        (self.start_angle + self.end_angle) / 2.0
    }

    pub fn contains(&self, angle: f64) -> bool {
        let angle = angle.rem_euclid(TAU);
        self.start_angle <= angle && angle < self.end_angle
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendEntry {
    pub label: String,
    pub count: usize,
    pub color: Rgb,
    pub selected: bool,
}

/// Anything able to show a pie and its legend.
///
/// Clicks on a wedge or legend entry are reported back by the frontend as a
/// label, which it passes to `ProjectsController::toggle_category`.
pub trait PieSurface {
    fn clear(&mut self);
    fn draw_wedge(&mut self, wedge: &Wedge);
    fn draw_legend_entry(&mut self, entry: &LegendEntry);
}

/// Computes wedges (input order, colours by position) and the parallel legend.
///
/// Angles are handed out largest count first, ties in input order, which is
/// how the browser charting layer laid the pie out.
pub fn pie_layout(
    buckets: &[CategoryBucket],
    selected: Option<&str>,
) -> (Vec<Wedge>, Vec<LegendEntry>) {
    let total: usize = buckets.iter().map(|bucket| bucket.count).sum();

    let mut order: Vec<usize> = (0..buckets.len()).collect();
    order.sort_by(|a, b| buckets[*b].count.cmp(&buckets[*a].count));

    let mut spans = vec![(0.0, 0.0); buckets.len()];
    let mut cursor = 0.0;
    for index in order {
        let span = if total == 0 {
            0.0
        } else {
            buckets[index].count as f64 / total as f64 * TAU
        };
        spans[index] = (cursor, cursor + span);
        cursor += span;
    }

    let is_selected = |label: &str| selected == Some(label);

    let wedges = buckets
        .iter()
        .zip(spans)
        .enumerate()
        .map(|(index, (bucket, (start_angle, end_angle)))| Wedge {
            label: bucket.label.clone(),
            count: bucket.count,
            start_angle,
            end_angle,
            color: palette_color(index),
            selected: is_selected(&bucket.label),
        })
        .collect();

    let legend = buckets
        .iter()
        .enumerate()
        .map(|(index, bucket)| LegendEntry {
            label: bucket.label.clone(),
            count: bucket.count,
            color: palette_color(index),
            selected: is_selected(&bucket.label),
        })
        .collect();

    (wedges, legend)
}

/// Clears `surface` and draws every wedge followed by every legend entry.
pub fn draw_pie(buckets: &[CategoryBucket], selected: Option<&str>, surface: &mut dyn PieSurface) {
    surface.clear();
    let (wedges, legend) = pie_layout(buckets, selected);
    for wedge in &wedges {
        surface.draw_wedge(wedge);
    }
    for entry in &legend {
        surface.draw_legend_entry(entry);
    }
}

/// Retained pie: what was last drawn, kept around for painting and hit tests.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PieChart {
    wedges: Vec<Wedge>,
    legend: Vec<LegendEntry>,
}

impl PieChart {
    pub fn wedges(&self) -> &[Wedge] {
        &self.wedges
    }

    pub fn legend(&self) -> &[LegendEntry] {
        &self.legend
    }

    pub fn is_empty(&self) -> bool {
        self.wedges.is_empty()
    }

    /// Wedge under `angle` (radians, clockwise from 12 o'clock).
    pub fn hit_test(&self, angle: f64) -> Option<&Wedge> {
        self.wedges
            .iter()
            .filter(|wedge| wedge.end_angle > wedge.start_angle)
            .find(|wedge| wedge.contains(angle))
    }

    pub fn legend_label(&self, index: usize) -> Option<&str> {
        self.legend.get(index).map(|entry| entry.label.as_str())
    }
}

impl PieSurface for PieChart {
    fn clear(&mut self) {
        self.wedges.clear();
        self.legend.clear();
    }

    fn draw_wedge(&mut self, wedge: &Wedge) {
        self.wedges.push(wedge.clone());
    }

    fn draw_legend_entry(&mut self, entry: &LegendEntry) {
        self.legend.push(entry.clone());
    }
}
