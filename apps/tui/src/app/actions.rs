use crate::app::state::{App, CommitView};
use crate::loader::{fetch_github_stats, load_commits, load_projects};

impl App {
    /// Loads every data source the pages need.
    ///
    /// Each source degrades on its own: a failed load is logged and leaves
    /// that part of the UI empty.
    pub async fn load_data(&mut self) {
        let records = load_projects(&self.config.projects_source).await;
        self.set_projects(records);

        if self.config.offline {
            tracing::info!("offline, skipping GitHub stats");
        } else {
            self.github = fetch_github_stats(&self.config.github_user).await.ok();
        }

        match load_commits(&self.config.commits_path, &self.config.repo_url).await {
            Ok((lines, commits)) => self.commits = CommitView::new(lines, commits),
            Err(error) => {
                tracing::error!(
                    "error loading commits from {}: {error}",
                    self.config.commits_path.display()
                );
                self.commits = CommitView::default();
            }
        }

        self.status_message = format!(
            "{} projects, {} commits",
            self.projects.records().len(),
            self.commits.commits.len()
        );
    }
}
