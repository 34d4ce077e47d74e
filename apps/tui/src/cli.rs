use clap::{CommandFactory, Parser};

#[derive(Debug, Parser)]
#[command(name = "portfolio", version, about = "Portfolio in the terminal")]
pub struct CliArgs {
    /// Print a text report and exit
    #[arg(long)]
    pub headless: bool,

    /// Print the headless report as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Skip the GitHub API request
    #[arg(long)]
    pub offline: bool,

    /// Project list: URL or path to projects.json
    #[arg(long, value_name = "URL|PATH")]
    pub projects: Option<String>,

    /// Commit history CSV for the meta page
    #[arg(long, value_name = "PATH")]
    pub commits: Option<String>,

    /// GitHub user whose profile stats are shown
    #[arg(long = "github-user", value_name = "NAME")]
    pub github_user: Option<String>,

    /// Heading level for project titles (h1..h6)
    #[arg(long, value_name = "LEVEL")]
    pub heading: Option<String>,

    /// Override settings file path
    #[arg(long, value_name = "PATH")]
    pub settings: Option<String>,

    /// Override log file path
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<String>,
}

impl CliArgs {
    pub fn apply_env_overrides(&self) {
        let overrides = [
            ("PORTFOLIO_PROJECTS", &self.projects),
            ("PORTFOLIO_COMMITS", &self.commits),
            ("PORTFOLIO_GITHUB_USER", &self.github_user),
            ("PORTFOLIO_HEADING", &self.heading),
            ("PORTFOLIO_SETTINGS", &self.settings),
            ("PORTFOLIO_LOG_FILE", &self.log_file),
        ];
        for (key, value) in overrides {
            if let Some(value) = value {
                std::env::set_var(key, value);
            }
        }
        if self.offline {
            std::env::set_var("PORTFOLIO_OFFLINE", "1");
        }
        if self.debug {
            std::env::set_var("DEBUG", "1");
        }
    }

    pub fn help_text() -> String {
        let mut command = Self::command();
        let mut buffer = Vec::new();
        command.write_help(&mut buffer).ok();
        String::from_utf8_lossy(&buffer).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_flags() {
        let args = CliArgs::parse_from([
            "portfolio",
            "--headless",
            "--json",
            "--projects",
            "lib/projects.json",
            "--heading",
            "h3",
        ]);
        assert!(args.headless);
        assert!(args.json);
        assert_eq!(args.projects.as_deref(), Some("lib/projects.json"));
        assert_eq!(args.heading.as_deref(), Some("h3"));
        assert!(!args.offline);
    }

    #[test]
    fn test_help_mentions_flags() {
        let help = CliArgs::help_text();
        assert!(help.contains("--github-user"));
        assert!(help.contains("--offline"));
    }
}
