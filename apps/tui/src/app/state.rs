use portfolio_core::commits::{
    draw_order, selected_commits, Brush, Commit, CommitStats, LineOfCode, TimeSlider,
};
use portfolio_core::github::GitHubStats;
use portfolio_core::nav::{build_nav, default_pages, NavLink};
use portfolio_core::render::{build_blocks, ProjectBlock};
use portfolio_core::{ColorScheme, ProjectRecord, ProjectsController};
use ratatui::layout::Rect;

use crate::config::AppConfig;
use crate::settings::SettingsStore;

/// Number of projects featured on the home page.
pub const HOME_PROJECT_COUNT: usize = 3;

/// Host the terminal app pretends to be served from when resolving nav links.
pub const LOCAL_HOST: &str = "localhost";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Projects,
    Meta,
}

impl Page {
    pub const ALL: [Self; 3] = [Self::Home, Self::Projects, Self::Meta];

    /// Path the page lives at on the site, used to mark the current nav link.
    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Projects => "/projects/",
            Self::Meta => "/meta/",
        }
    }

    pub fn from_title(title: &str) -> Option<Self> {
        match title {
            "Home" => Some(Self::Home),
            "Projects" => Some(Self::Projects),
            "Meta" => Some(Self::Meta),
            _ => None,
        }
    }

    pub const fn next(self) -> Self {
        match self {
            Self::Home => Self::Projects,
            Self::Projects => Self::Meta,
            Self::Meta => Self::Home,
        }
    }

    pub const fn previous(self) -> Self {
        match self {
            Self::Home => Self::Meta,
            Self::Projects => Self::Home,
            Self::Meta => Self::Projects,
        }
    }
}

/// Which part of the projects page receives keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Search,
    Legend,
    List,
}

impl Focus {
    pub const fn next(self) -> Self {
        match self {
            Self::Search => Self::Legend,
            Self::Legend => Self::List,
            Self::List => Self::Search,
        }
    }

    pub const fn previous(self) -> Self {
        match self {
            Self::Search => Self::List,
            Self::Legend => Self::Search,
            Self::List => Self::Legend,
        }
    }
}

/// Commit history and the interactive state of the meta page.
#[derive(Debug, Clone)]
pub struct CommitView {
    pub lines: Vec<LineOfCode>,
    pub commits: Vec<Commit>,
    pub stats: CommitStats,
    pub slider: Option<TimeSlider>,
    /// Slider position, 0..=100.
    pub progress: u8,
    pub brush: Option<Brush>,
    /// Data-space corner where the current drag started.
    pub brush_anchor: Option<(f64, f64)>,
    /// Index into `visible()` of the commit shown in the tooltip.
    pub focused: Option<usize>,
}

impl Default for CommitView {
    fn default() -> Self {
        Self::new(Vec::new(), Vec::new())
    }
}

impl CommitView {
    pub fn new(lines: Vec<LineOfCode>, commits: Vec<Commit>) -> Self {
        let stats = CommitStats::compute(&lines, &commits);
        let slider = TimeSlider::for_commits(&commits);
        Self {
            lines,
            commits,
            stats,
            slider,
            progress: 100,
            brush: None,
            brush_anchor: None,
            focused: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.commits.is_empty()
    }

    pub fn slider_time(&self) -> Option<chrono::DateTime<chrono::FixedOffset>> {
        self.slider
            .map(|slider| slider.time_at(f64::from(self.progress)))
    }

    /// Commits up to the slider time, largest first.
    pub fn visible(&self) -> Vec<&Commit> {
        let cutoff = self.slider_time();
        draw_order(&self.commits)
            .into_iter()
            .filter(|commit| cutoff.map_or(true, |cutoff| commit.datetime <= cutoff))
            .collect()
    }

    pub fn selected(&self) -> Vec<&Commit> {
        selected_commits(self.brush.as_ref(), &self.visible())
    }

    pub fn focused_commit(&self) -> Option<&Commit> {
        self.focused
            .and_then(|index| self.visible().get(index).copied())
    }

    pub fn set_progress(&mut self, progress: i16) {
        self.progress = progress.clamp(0, 100) as u8;
        let visible = self.visible().len();
        if self.focused.is_some_and(|index| index >= visible) {
            self.focused = None;
        }
    }

    pub fn clear_brush(&mut self) {
        self.brush = None;
        self.brush_anchor = None;
    }
}

#[derive(Debug)]
pub struct App {
    pub running: bool,
    pub page: Page,
    pub config: AppConfig,
    pub projects: ProjectsController,
    pub github: Option<GitHubStats>,
    pub commits: CommitView,
    pub focus: Focus,
    pub search_input: String,
    pub legend_index: usize,
    pub list_scroll: usize,
    pub color_scheme: ColorScheme,
    pub settings: SettingsStore,
    pub status_message: String,
    pub show_help: bool,
    /// Last known terminal area; mouse hit tests re-derive layouts from it.
    pub viewport: Rect,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        let settings = SettingsStore::open(&config.settings_path);
        let color_scheme = settings.color_scheme().unwrap_or_default();
        let projects = ProjectsController::new(Vec::new(), &config.heading_level);

        Self {
            running: true,
            page: Page::Home,
            config,
            projects,
            github: None,
            commits: CommitView::default(),
            focus: Focus::Search,
            search_input: String::new(),
            legend_index: 0,
            list_scroll: 0,
            color_scheme,
            settings,
            status_message: String::new(),
            show_help: false,
            viewport: Rect::default(),
        }
    }

    pub fn set_projects(&mut self, records: Vec<ProjectRecord>) {
        self.projects = ProjectsController::new(records, &self.config.heading_level);
        self.projects.set_query(&self.search_input);
        self.legend_index = 0;
        self.list_scroll = 0;
    }

    /// The first few projects, rendered with the configured heading level.
    pub fn home_blocks(&self) -> Vec<ProjectBlock> {
        let featured = self.projects.records().iter().take(HOME_PROJECT_COUNT);
        build_blocks(featured, self.projects.heading_level())
    }

    pub fn nav(&self) -> Vec<NavLink> {
        build_nav(
            &default_pages(&self.config.github_user),
            LOCAL_HOST,
            LOCAL_HOST,
            self.page.path(),
        )
    }

    pub fn go_to(&mut self, page: Page) {
        tracing::debug!("switching to {page:?}");
        self.page = page;
    }

    /// Follows the nav link at `index`. Links without a terminal page are
    /// only announced in the status bar.
    pub fn follow_nav(&mut self, index: usize) {
        let Some(link) = self.nav().into_iter().nth(index) else {
            return;
        };
        match Page::from_title(&link.title) {
            Some(page) if !link.external => self.go_to(page),
            _ => self.status_message = format!("Open in your browser: {}", link.url),
        }
    }

    pub fn update_query(&mut self) {
        self.projects.set_query(&self.search_input);
        self.clamp_cursors();
    }

    /// Toggles the legend entry under the cursor.
    pub fn toggle_legend_cursor(&mut self) {
        if self.projects.toggle_legend_entry(self.legend_index) {
            self.clamp_cursors();
        }
    }

    pub fn toggle_legend_entry(&mut self, index: usize) {
        if self.projects.toggle_legend_entry(index) {
            self.legend_index = index;
            self.clamp_cursors();
        }
    }

    pub fn toggle_category(&mut self, label: &str) {
        self.projects.toggle_category(label);
        self.clamp_cursors();
    }

    fn clamp_cursors(&mut self) {
        let legend_len = self.projects.chart().legend().len();
        if self.legend_index >= legend_len {
            self.legend_index = legend_len.saturating_sub(1);
        }
        let list_len = self.projects.blocks().len();
        if self.list_scroll >= list_len {
            self.list_scroll = list_len.saturating_sub(1);
        }
    }

    /// Applies the next colour scheme and persists it.
    pub fn cycle_color_scheme(&mut self) {
        self.color_scheme = self.color_scheme.next();
        match self.settings.set_color_scheme(self.color_scheme) {
            Ok(()) => {
                tracing::debug!("saved color scheme to {}", self.settings.path().display());
                self.status_message = format!("Theme: {}", self.color_scheme.label());
            }
            Err(error) => {
                tracing::error!("failed to save color scheme: {error}");
                self.status_message = format!("Theme not saved: {error}");
            }
        }
    }

    pub fn quit(&mut self) {
        self.running = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portfolio_core::commits::process_commits;
    use portfolio_core::commits::read_lines;

    fn app() -> App {
        let dir = std::env::temp_dir().join("portfolio-state-tests");
        let config = AppConfig::from_lookup(|key| match key {
            "PORTFOLIO_SETTINGS" => Some(dir.join("missing.json").display().to_string()),
            _ => None,
        });
        App::new(config)
    }

    fn records() -> Vec<ProjectRecord> {
        vec![
            ProjectRecord::new("Atlas", "2023"),
            ProjectRecord::new("Beacon", "2024"),
            ProjectRecord::new("Comet", "2024"),
            ProjectRecord::new("Delta", "2022"),
        ]
    }

    #[test]
    fn test_home_shows_first_three_projects() {
        let mut app = app();
        app.set_projects(records());
        let titles: Vec<String> = app.home_blocks().into_iter().map(|b| b.title).collect();
        assert_eq!(titles, ["Atlas", "Beacon", "Comet"]);
    }

    #[test]
    fn test_nav_marks_current_page_and_external_github() {
        let mut app = app();
        app.go_to(Page::Projects);
        let nav = app.nav();
        assert_eq!(nav.len(), 6);
        assert!(nav[1].current);
        assert!(!nav[0].current);
        assert!(!nav[3].external);
        assert!(nav[5].external);
    }

    #[test]
    fn test_follow_external_nav_keeps_page() {
        let mut app = app();
        app.follow_nav(5);
        assert_eq!(app.page, Page::Home);
        assert!(app.status_message.contains("github.com/amw013"));
        app.follow_nav(2);
        assert_eq!(app.page, Page::Meta);
    }

    #[test]
    fn test_site_only_pages_are_announced() {
        let mut app = app();
        app.follow_nav(3);
        assert_eq!(app.page, Page::Home);
        assert_eq!(app.status_message, "Open in your browser: /contact/");
        app.follow_nav(4);
        assert_eq!(app.status_message, "Open in your browser: /resume/");
    }

    #[test]
    fn test_legend_cursor_clamped_after_filtering() {
        let mut app = app();
        app.set_projects(records());
        app.legend_index = 2;
        app.search_input = "beacon".to_string();
        app.update_query();
        assert_eq!(app.projects.chart().legend().len(), 1);
        assert_eq!(app.legend_index, 0);
    }

    #[test]
    fn test_startup_reads_settings_without_writing() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("settings.json");
        let config = AppConfig::from_lookup(|key| match key {
            "PORTFOLIO_SETTINGS" => Some(path.display().to_string()),
            _ => None,
        });

        let mut app = App::new(config);
        assert_eq!(app.color_scheme, ColorScheme::Automatic);
        assert!(!path.exists());

        app.cycle_color_scheme();
        assert!(path.exists());
        Ok(())
    }

    #[test]
    fn test_slider_hides_later_commits() -> portfolio_core::Result<()> {
        let csv = "\
file,line,type,commit,author,date,time,timezone,datetime,depth,length
a.js,1,js,c1,Ada,2024-02-01,10:00:00,+00:00,2024-02-01T10:00:00+00:00,0,10
a.js,2,js,c2,Ada,2024-02-03,11:00:00,+00:00,2024-02-03T11:00:00+00:00,0,10
";
        let lines = read_lines(csv.as_bytes())?;
        let commits = process_commits(&lines, "https://github.com/amw013/portfolio");
        let mut view = CommitView::new(lines, commits);
        assert_eq!(view.visible().len(), 2);

        view.focused = Some(1);
        view.set_progress(0);
        assert_eq!(view.visible().len(), 1);
        assert_eq!(view.focused, None);

        view.set_progress(500);
        assert_eq!(view.progress, 100);
        Ok(())
    }
}
