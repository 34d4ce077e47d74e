use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use portfolio_core::nav::NavLink;
use portfolio_core::{CategoryBucket, ProjectBlock, StatEntry};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;
use serde::Serialize;
use std::io::Stdout;
use std::time::Duration;

use crate::app::{handle_key, handle_mouse, App};
use crate::ui;
use crate::ui::widgets::legend::display_label;

/// Everything the pages show, flattened for printing.
#[derive(Debug, Serialize)]
pub struct HeadlessReport {
    pub nav: Vec<NavLink>,
    pub title: String,
    pub projects: Vec<ProjectBlock>,
    pub years: Vec<CategoryBucket>,
    pub github: Option<Vec<StatEntry>>,
    pub commit_stats: Vec<StatEntry>,
}

impl HeadlessReport {
    pub fn build(app: &App) -> Self {
        Self {
            nav: app.nav(),
            title: app.projects.title(),
            projects: app.projects.blocks().to_vec(),
            years: app.projects.buckets().to_vec(),
            github: app.github.as_ref().map(portfolio_core::github::GitHubStats::entries),
            commit_stats: app.commits.stats.entries(),
        }
    }

    pub fn to_text(&self) -> String {
        let mut out = String::new();
        let mut line = |text: String| {
            out.push_str(&text);
            out.push('\n');
        };

        line(self.title.clone());
        line("=".repeat(self.title.chars().count()));
        for project in &self.projects {
            let year = if project.year.is_empty() {
                String::new()
            } else {
                format!(" ({})", project.year)
            };
            line(format!("- {}{year}: {}", project.title, project.description));
        }

        line(String::new());
        line("Projects by year:".to_string());
        for bucket in &self.years {
            line(format!("- {}: {}", display_label(&bucket.label), bucket.count));
        }

        line(String::new());
        line("GitHub:".to_string());
        match &self.github {
            Some(entries) => {
                for entry in entries {
                    line(format!("- {}: {}", entry.label, entry.value));
                }
            }
            None => line("- unavailable".to_string()),
        }

        line(String::new());
        line("Commits:".to_string());
        for entry in &self.commit_stats {
            line(format!("- {}: {}", entry.label, entry.value));
        }

        out
    }
}

/// Run the application in headless mode (no UI)
pub fn run_headless(app: &App, json: bool) -> Result<()> {
    let report = HeadlessReport::build(app);
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report.to_text());
    }
    Ok(())
}

/// Run the main application event loop
pub fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    // Configure event poll timeout (ms)
    const EVENT_POLL_TIMEOUT: u64 = 50;

    while app.running {
        let size = terminal.size()?;
        app.viewport = Rect::new(0, 0, size.width, size.height);

        if let Err(e) = terminal.draw(|f| ui::ui(app, f)) {
            return Err(color_eyre::eyre::eyre!("Terminal draw error: {e}"));
        }

        if !matches!(
            event::poll(Duration::from_millis(EVENT_POLL_TIMEOUT)),
            Ok(true)
        ) {
            continue;
        }

        match event::read() {
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => handle_key(app, key),
            Ok(Event::Mouse(mouse)) => handle_mouse(app, mouse),
            Ok(Event::Resize(width, height)) => {
                tracing::debug!("terminal resized to {width}x{height}");
                app.viewport = Rect::new(0, 0, width, height);
            }
            Ok(_) => {}
            Err(e) => tracing::warn!("failed to read terminal event: {e}"),
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use portfolio_core::ProjectRecord;
    use ratatui::backend::TestBackend;

    fn app() -> App {
        let config = AppConfig::from_lookup(|key| match key {
            "PORTFOLIO_SETTINGS" => Some("target/portfolio-loop-tests/none.json".to_string()),
            _ => None,
        });
        let mut app = App::new(config);
        let mut untitled = ProjectRecord::default();
        untitled.description = Some("Scratch work".to_string());
        app.set_projects(vec![ProjectRecord::new("Atlas", "2024"), untitled]);
        app
    }

    #[test]
    fn test_text_report_lists_projects_and_years() {
        let text = HeadlessReport::build(&app()).to_text();
        assert!(text.starts_with("2 Projects\n==========\n"));
        assert!(text.contains("- Atlas (2024): No description provided."));
        assert!(text.contains("- Untitled Project: Scratch work"));
        assert!(text.contains("- Unknown: 1"));
        assert!(text.contains("- unavailable"));
        assert!(text.contains("- Total commits: 0"));
    }

    #[test]
    fn test_json_report_shape() -> Result<()> {
        let report = HeadlessReport::build(&app());
        let value = serde_json::to_value(&report)?;
        assert_eq!(value["title"], "2 Projects");
        assert_eq!(value["years"][0]["label"], "2024");
        assert_eq!(value["nav"][0]["current"], true);
        assert!(value["github"].is_null());
        Ok(())
    }

    #[test]
    fn test_every_page_renders() -> Result<()> {
        let mut app = app();
        let mut terminal = Terminal::new(TestBackend::new(100, 40))?;
        for page in crate::app::Page::ALL {
            app.go_to(page);
            terminal.draw(|f| ui::ui(&app, f))?;
        }
        app.show_help = true;
        terminal.draw(|f| ui::ui(&app, f))?;
        Ok(())
    }
}
