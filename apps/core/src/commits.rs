//! Commit history analytics for the `meta` page.
//!
//! Input is the per-line CSV produced by the site's build (one row per line
//! of code, tagged with the commit that last touched it). Rows are grouped
//! into commits, summarised into a stats card and plotted by time of day.

use std::collections::{HashMap, HashSet};
use std::io::Read;

use chrono::{DateTime, FixedOffset, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::stats::StatEntry;

#[derive(Debug, Deserialize)]
struct CsvRow {
    file: String,
    line: u32,
    #[serde(rename = "type")]
    language: String,
    commit: String,
    author: String,
    date: String,
    time: String,
    timezone: String,
    datetime: String,
    depth: u32,
    length: u32,
}

/// One line of code as recorded in the CSV.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineOfCode {
    pub file: String,
    pub line: u32,
    pub language: String,
    pub commit: String,
    pub author: String,
    /// Midnight of the commit day in the commit's own offset.
    pub date: Option<DateTime<FixedOffset>>,
    pub time: String,
    pub timezone: String,
    pub datetime: DateTime<FixedOffset>,
    pub depth: u32,
    pub length: u32,
}

impl TryFrom<CsvRow> for LineOfCode {
    type Error = chrono::ParseError;

    fn try_from(row: CsvRow) -> std::result::Result<Self, Self::Error> {
        let datetime = DateTime::parse_from_rfc3339(&row.datetime)?;
        let date = DateTime::parse_from_str(
            &format!("{}T00:00{}", row.date, row.timezone),
            "%Y-%m-%dT%H:%M%:z",
        )
        .ok();

        Ok(Self {
            file: row.file,
            line: row.line,
            language: row.language,
            commit: row.commit,
            author: row.author,
            date,
            time: row.time,
            timezone: row.timezone,
            datetime,
            depth: row.depth,
            length: row.length,
        })
    }
}

/// Reads the line CSV; rows that do not parse are skipped with a warning.
pub fn read_lines<R: Read>(reader: R) -> Result<Vec<LineOfCode>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    csv_reader.headers()?;

    let mut lines = Vec::new();
    for (index, row) in csv_reader.deserialize::<CsvRow>().enumerate() {
        let row = match row {
            Ok(row) => row,
            Err(error) => {
                tracing::warn!("skipping CSV row {}: {error}", index + 1);
                continue;
            }
        };
        match LineOfCode::try_from(row) {
            Ok(line) => lines.push(line),
            Err(error) => tracing::warn!("skipping CSV row {}: bad datetime: {error}", index + 1),
        }
    }

    Ok(lines)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Commit {
    pub id: String,
    pub url: String,
    pub author: String,
    pub date: Option<DateTime<FixedOffset>>,
    pub time: String,
    pub timezone: String,
    pub datetime: DateTime<FixedOffset>,
    /// Hour of day plus minutes as a fraction, in the commit's offset.
    pub hour_frac: f64,
    pub total_lines: usize,
    #[serde(skip)]
    pub lines: Vec<LineOfCode>,
}

impl Commit {
    /// Timestamp in seconds, used as the scatter x coordinate.
    pub fn x(&self) -> f64 {
        self.datetime.timestamp() as f64
    }
}

pub fn hour_fraction(datetime: &DateTime<FixedOffset>) -> f64 {
    f64::from(datetime.hour()) + f64::from(datetime.minute()) / 60.0
}

/// Groups lines by commit id, in order of first appearance.
///
/// Commit metadata comes from the first line of each group.
pub fn process_commits(lines: &[LineOfCode], repo_url: &str) -> Vec<Commit> {
    let mut groups: Vec<Vec<LineOfCode>> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();

    for line in lines {
        if let Some(&index) = positions.get(line.commit.as_str()) {
            groups[index].push(line.clone());
        } else {
            positions.insert(line.commit.as_str(), groups.len());
            groups.push(vec![line.clone()]);
        }
    }

    let repo_url = repo_url.trim_end_matches('/');
    groups
        .into_iter()
        .filter_map(|group| {
            let first = group.first()?.clone();
            Some(Commit {
                url: format!("{repo_url}/commit/{}", first.commit),
                id: first.commit,
                author: first.author,
                date: first.date,
                time: first.time,
                timezone: first.timezone,
                hour_frac: hour_fraction(&first.datetime),
                datetime: first.datetime,
                total_lines: group.len(),
                lines: group,
            })
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DayPeriod {
    Morning,
    Noon,
    Afternoon,
    Evening,
    Night,
}

impl DayPeriod {
    pub const fn from_time(hour: u32, minute: u32) -> Self {
        match hour {
            12 if minute == 0 => Self::Noon,
            6..=11 => Self::Morning,
            12..=17 => Self::Afternoon,
            18..=20 => Self::Evening,
            _ => Self::Night,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Morning => "in the morning",
            Self::Noon => "noon",
            Self::Afternoon => "in the afternoon",
            Self::Evening => "in the evening",
            Self::Night => "at night",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommitStats {
    pub total_lines: usize,
    pub total_commits: usize,
    pub file_count: usize,
    pub longest_file: Option<String>,
    pub average_line_length: Option<f64>,
    pub most_active_period: Option<DayPeriod>,
}

impl CommitStats {
    pub fn compute(lines: &[LineOfCode], commits: &[Commit]) -> Self {
        let files: HashSet<&str> = lines.iter().map(|line| line.file.as_str()).collect();

        // Largest line number per file, first file wins ties.
        let mut file_lengths: Vec<(&str, u32)> = Vec::new();
        for line in lines {
            match file_lengths.iter_mut().find(|(file, _)| *file == line.file) {
                Some((_, longest)) => *longest = (*longest).max(line.line),
                None => file_lengths.push((line.file.as_str(), line.line)),
            }
        }
        let longest_file = greatest(&file_lengths).map(|file| (*file).to_string());

        let average_line_length = if lines.is_empty() {
            None
        } else {
            let total: f64 = lines.iter().map(|line| f64::from(line.length)).sum();
            Some(total / lines.len() as f64)
        };

        let mut periods: Vec<(DayPeriod, usize)> = Vec::new();
        for line in lines {
            let period = DayPeriod::from_time(line.datetime.hour(), line.datetime.minute());
            match periods.iter_mut().find(|(known, _)| *known == period) {
                Some((_, count)) => *count += 1,
                None => periods.push((period, 1)),
            }
        }

        Self {
            total_lines: lines.len(),
            total_commits: commits.len(),
            file_count: files.len(),
            longest_file,
            average_line_length,
            most_active_period: greatest(&periods).copied(),
        }
    }

    pub fn entries(&self) -> Vec<StatEntry> {
        vec![
            StatEntry::new("Total Lines of Code", self.total_lines),
            StatEntry::new("Total commits", self.total_commits),
            StatEntry::new("Number of files", self.file_count),
            StatEntry::new(
                "Longest file",
                self.longest_file.clone().unwrap_or_default(),
            ),
            StatEntry::new(
                "Average line length (chars)",
                self.average_line_length
                    .map_or_else(String::new, |average| format!("{average:.1}")),
            ),
            StatEntry::new(
                "Most active time of day",
                self.most_active_period
                    .map_or("", DayPeriod::label),
            ),
        ]
    }
}

/// Key of the first entry holding the largest value.
fn greatest<K, V: PartialOrd>(entries: &[(K, V)]) -> Option<&K> {
    let mut best: Option<&(K, V)> = None;
    for entry in entries {
        if best.map_or(true, |current| entry.1 > current.1) {
            best = Some(entry);
        }
    }
    best.map(|(key, _)| key)
}

/// Square-root scale, used for dot radii.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SqrtScale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl SqrtScale {
    pub const fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Radius scale for the scatter: total-lines extent onto 2..30.
    pub fn for_commits(commits: &[Commit]) -> Self {
        let min = commits.iter().map(|commit| commit.total_lines).min().unwrap_or(0);
        let max = commits.iter().map(|commit| commit.total_lines).max().unwrap_or(0);
        Self::new((min as f64, max as f64), (2.0, 30.0))
    }

    pub fn apply(&self, value: f64) -> f64 {
        let low = self.domain.0.sqrt();
        let high = self.domain.1.sqrt();
        let t = if (high - low).abs() < f64::EPSILON {
            0.5
        } else {
            (value.sqrt() - low) / (high - low)
        };
        (self.range.1 - self.range.0).mul_add(t, self.range.0)
    }
}

/// Commits sorted largest first, so small dots are painted on top.
pub fn draw_order(commits: &[Commit]) -> Vec<&Commit> {
    let mut sorted: Vec<&Commit> = commits.iter().collect();
    sorted.sort_by(|a, b| b.total_lines.cmp(&a.total_lines));
    sorted
}

/// Earliest and latest commit time.
pub fn time_extent(
    commits: &[Commit],
) -> Option<(DateTime<FixedOffset>, DateTime<FixedOffset>)> {
    let min = commits.iter().map(|commit| commit.datetime).min()?;
    let max = commits.iter().map(|commit| commit.datetime).max()?;
    Some((min, max))
}

/// Maps slider progress (0..=100) linearly onto the commit time range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSlider {
    pub start: DateTime<FixedOffset>,
    pub end: DateTime<FixedOffset>,
}

impl TimeSlider {
    pub fn for_commits(commits: &[Commit]) -> Option<Self> {
        time_extent(commits).map(|(start, end)| Self { start, end })
    }

    #[allow(clippy::cast_possible_truncation)]
    pub fn time_at(&self, progress: f64) -> DateTime<FixedOffset> {
        let progress = progress.clamp(0.0, 100.0);
        let start = self.start.timestamp_millis() as f64;
        let end = self.end.timestamp_millis() as f64;
        let millis = (end - start).mul_add(progress / 100.0, start).round() as i64;
        DateTime::from_timestamp_millis(millis)
            .map_or(self.end, |utc| utc.with_timezone(self.end.offset()))
    }
}

/// `February 5, 2024 at 2:23 PM`
pub fn slider_label(time: &DateTime<FixedOffset>) -> String {
    time.format("%B %-d, %Y at %-I:%M %p").to_string()
}

/// `Monday, February 5, 2024`
pub fn full_date_label(time: &DateTime<FixedOffset>) -> String {
    time.format("%A, %B %-d, %Y").to_string()
}

/// `02:23 PM`
pub fn short_time_label(time: &DateTime<FixedOffset>) -> String {
    time.format("%I:%M %p").to_string()
}

/// `Feb 05`, the x-axis tick format.
pub fn axis_date_label(time: &DateTime<FixedOffset>) -> String {
    time.format("%b %d").to_string()
}

/// y-axis tick: `HH:00`, with 24 wrapping to `00:00`.
pub fn hour_tick_label(hour: u32) -> String {
    format!("{:02}:00", hour % 24)
}

/// Rectangular brush in data space: x in seconds, y in fractional hours.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Brush {
    pub x0: f64,
    pub x1: f64,
    pub y0: f64,
    pub y1: f64,
}

impl Brush {
    /// Brush spanning two corners given in any order.
    pub fn from_corners(a: (f64, f64), b: (f64, f64)) -> Self {
        Self {
            x0: a.0.min(b.0),
            x1: a.0.max(b.0),
            y0: a.1.min(b.1),
            y1: a.1.max(b.1),
        }
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        self.x0 <= x && x <= self.x1 && self.y0 <= y && y <= self.y1
    }
}

pub fn is_commit_selected(brush: Option<&Brush>, commit: &Commit) -> bool {
    brush.is_some_and(|brush| brush.contains(commit.x(), commit.hour_frac))
}

pub fn selected_commits<'a>(brush: Option<&Brush>, commits: &[&'a Commit]) -> Vec<&'a Commit> {
    commits
        .iter()
        .copied()
        .filter(|commit| is_commit_selected(brush, commit))
        .collect()
}

pub fn selection_count_label(count: usize) -> String {
    if count == 0 {
        "No commits selected".to_string()
    } else {
        format!("{count} commits selected")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LanguageShare {
    pub language: String,
    pub count: usize,
    pub proportion: f64,
}

impl LanguageShare {
    /// `12 lines (33.3%)`
    pub fn summary(&self) -> String {
        format!("{} lines ({})", self.count, format_percent(self.proportion))
    }
}

/// Line counts per language across the selected commits, first occurrence first.
pub fn language_breakdown(selected: &[&Commit]) -> Vec<LanguageShare> {
    let mut shares: Vec<LanguageShare> = Vec::new();
    let mut total = 0_usize;

    for line in selected.iter().flat_map(|commit| &commit.lines) {
        total += 1;
        match shares.iter_mut().find(|share| share.language == line.language) {
            Some(share) => share.count += 1,
            None => shares.push(LanguageShare {
                language: line.language.clone(),
                count: 1,
                proportion: 0.0,
            }),
        }
    }

    for share in &mut shares {
        share.proportion = share.count as f64 / total as f64;
    }

    shares
}

/// Percentage with at most one decimal, trailing zeros trimmed.
pub fn format_percent(proportion: f64) -> String {
    // Ties round away from zero.
    let rounded = (proportion * 1000.0).round() / 10.0;
    let fixed = format!("{rounded:.1}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    format!("{trimmed}%")
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV: &str = "\
file,line,type,commit,author,date,time,timezone,datetime,depth,length
index.html,1,html,abc123,Ada,2024-02-05,09:15:00,-08:00,2024-02-05T09:15:00-08:00,0,15
index.html,2,html,abc123,Ada,2024-02-05,09:15:00,-08:00,2024-02-05T09:15:00-08:00,1,40
global.js,1,js,abc123,Ada,2024-02-05,09:15:00,-08:00,2024-02-05T09:15:00-08:00,0,20
global.js,7,js,def456,Ada,2024-02-07,22:40:00,-08:00,2024-02-07T22:40:00-08:00,2,25
style.css,3,css,def456,Ada,2024-02-07,22:40:00,-08:00,2024-02-07T22:40:00-08:00,1,10
";

    fn fixture() -> Result<(Vec<LineOfCode>, Vec<Commit>)> {
        let lines = read_lines(CSV.as_bytes())?;
        let commits = process_commits(&lines, "https://github.com/amw013/portfolio/");
        Ok((lines, commits))
    }

    #[test]
    fn test_lines_are_grouped_into_commits() -> Result<()> {
        let (lines, commits) = fixture()?;
        assert_eq!(lines.len(), 5);
        assert_eq!(commits.len(), 2);
        assert_eq!(commits[0].id, "abc123");
        assert_eq!(commits[0].total_lines, 3);
        assert_eq!(
            commits[0].url,
            "https://github.com/amw013/portfolio/commit/abc123"
        );
        assert!((commits[0].hour_frac - 9.25).abs() < 1e-9);
        assert!(commits[0].date.is_some());
        Ok(())
    }

    #[test]
    fn test_bad_rows_are_skipped() -> Result<()> {
        let csv = format!("{CSV}broken.js,x,js,zzz,Ada,2024-02-05,09:15:00,-08:00,nope,0,1\n");
        let lines = read_lines(csv.as_bytes())?;
        assert_eq!(lines.len(), 5);
        Ok(())
    }

    #[test]
    fn test_stats_card() -> Result<()> {
        let (lines, commits) = fixture()?;
        let stats = CommitStats::compute(&lines, &commits);
        assert_eq!(stats.total_lines, 5);
        assert_eq!(stats.total_commits, 2);
        assert_eq!(stats.file_count, 3);
        assert_eq!(stats.longest_file.as_deref(), Some("global.js"));
        assert_eq!(stats.most_active_period, Some(DayPeriod::Morning));

        let entries = stats.entries();
        assert_eq!(entries[4].label, "Average line length (chars)");
        assert_eq!(entries[4].value, "22.0");
        assert_eq!(entries[5].value, "in the morning");
        Ok(())
    }

    #[test]
    fn test_empty_stats() {
        let stats = CommitStats::compute(&[], &[]);
        assert_eq!(stats.longest_file, None);
        assert_eq!(stats.average_line_length, None);
        assert_eq!(stats.entries()[5].value, "");
    }

    #[test]
    fn test_day_periods() {
        assert_eq!(DayPeriod::from_time(6, 0), DayPeriod::Morning);
        assert_eq!(DayPeriod::from_time(12, 0), DayPeriod::Noon);
        assert_eq!(DayPeriod::from_time(12, 1), DayPeriod::Afternoon);
        assert_eq!(DayPeriod::from_time(18, 30), DayPeriod::Evening);
        assert_eq!(DayPeriod::from_time(21, 0), DayPeriod::Night);
        assert_eq!(DayPeriod::from_time(3, 0), DayPeriod::Night);
    }

    #[test]
    fn test_sqrt_scale() {
        let scale = SqrtScale::new((1.0, 100.0), (2.0, 30.0));
        assert!((scale.apply(1.0) - 2.0).abs() < 1e-9);
        assert!((scale.apply(100.0) - 30.0).abs() < 1e-9);

        let flat = SqrtScale::new((4.0, 4.0), (2.0, 30.0));
        assert!((flat.apply(4.0) - 16.0).abs() < 1e-9);
    }

    #[test]
    fn test_draw_order_is_largest_first() -> Result<()> {
        let (_, commits) = fixture()?;
        let order: Vec<usize> = draw_order(&commits)
            .iter()
            .map(|commit| commit.total_lines)
            .collect();
        assert_eq!(order, [3, 2]);
        Ok(())
    }

    #[test]
    fn test_slider_endpoints() -> Result<()> {
        let (_, commits) = fixture()?;
        let Some(slider) = TimeSlider::for_commits(&commits) else {
            panic!("expected a time range");
        };
        assert_eq!(slider.time_at(0.0), commits[0].datetime);
        assert_eq!(slider.time_at(100.0), commits[1].datetime);
        assert_eq!(
            slider_label(&slider.time_at(100.0)),
            "February 7, 2024 at 10:40 PM"
        );
        Ok(())
    }

    #[test]
    fn test_labels() -> Result<()> {
        let (_, commits) = fixture()?;
        assert_eq!(full_date_label(&commits[0].datetime), "Monday, February 5, 2024");
        assert_eq!(short_time_label(&commits[0].datetime), "09:15 AM");
        assert_eq!(axis_date_label(&commits[0].datetime), "Feb 05");
        assert_eq!(hour_tick_label(24), "00:00");
        assert_eq!(hour_tick_label(8), "08:00");
        Ok(())
    }

    #[test]
    fn test_brush_includes_edges() -> Result<()> {
        let (_, commits) = fixture()?;
        let first = &commits[0];
        let brush = Brush::from_corners((first.x(), 10.0), (first.x() - 10.0, first.hour_frac));
        assert!(is_commit_selected(Some(&brush), first));
        assert!(!is_commit_selected(Some(&brush), &commits[1]));
        assert!(!is_commit_selected(None, first));
        Ok(())
    }

    #[test]
    fn test_selection_and_breakdown() -> Result<()> {
        let (_, commits) = fixture()?;
        let all: Vec<&Commit> = commits.iter().collect();
        let brush = Brush::from_corners((0.0, 0.0), (f64::MAX, 24.0));
        let selected = selected_commits(Some(&brush), &all);
        assert_eq!(selection_count_label(selected.len()), "2 commits selected");
        assert_eq!(selection_count_label(0), "No commits selected");

        let breakdown = language_breakdown(&selected);
        let languages: Vec<&str> = breakdown.iter().map(|s| s.language.as_str()).collect();
        assert_eq!(languages, ["html", "js", "css"]);
        assert_eq!(breakdown[0].summary(), "2 lines (40%)");
        Ok(())
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(1.0 / 3.0), "33.3%");
        assert_eq!(format_percent(0.5), "50%");
        assert_eq!(format_percent(1.0), "100%");
        assert_eq!(format_percent(0.0), "0%");
        assert_eq!(format_percent(0.125), "12.5%");
    }

    #[test]
    fn test_format_percent_rounds_ties_up() {
        assert_eq!(format_percent(1.0 / 16.0), "6.3%");
        assert_eq!(format_percent(5.0 / 16.0), "31.3%");
        assert_eq!(format_percent(3.0 / 16.0), "18.8%");
    }
}
