use dotenv::dotenv;
use std::env;
use std::path::PathBuf;

pub const DEFAULT_GITHUB_USER: &str = "amw013";

/// Everything the app reads from the environment (after `.env` and CLI overrides).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// URL or local path of `projects.json`
    pub projects_source: String,
    /// Path of the commit history CSV
    pub commits_path: PathBuf,
    pub github_user: String,
    /// Repository commits link to
    pub repo_url: String,
    pub heading_level: String,
    pub settings_path: PathBuf,
    pub log_file: PathBuf,
    pub offline: bool,
    pub debug: bool,
}

impl AppConfig {
    /// Loads `.env` and reads configuration from environment variables
    pub fn from_env() -> Self {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());
        let flag = |key: &str| {
            lookup(key).is_some_and(|value| matches!(value.as_str(), "1" | "true" | "yes"))
        };

        let github_user = var("PORTFOLIO_GITHUB_USER", DEFAULT_GITHUB_USER);
        let repo_url = lookup("PORTFOLIO_REPO_URL")
            .unwrap_or_else(|| format!("https://github.com/{github_user}/portfolio"));

        Self {
            projects_source: var("PORTFOLIO_PROJECTS", "lib/projects.json"),
            commits_path: PathBuf::from(var("PORTFOLIO_COMMITS", "meta/loc.csv")),
            github_user,
            repo_url,
            heading_level: var("PORTFOLIO_HEADING", "h2"),
            settings_path: PathBuf::from(var("PORTFOLIO_SETTINGS", ".portfolio/settings.json")),
            log_file: PathBuf::from(var("PORTFOLIO_LOG_FILE", "portfolio.log")),
            offline: flag("PORTFOLIO_OFFLINE"),
            debug: flag("DEBUG"),
        }
    }
}
