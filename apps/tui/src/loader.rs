use std::path::Path;

use portfolio_core::commits::{process_commits, read_lines, Commit, LineOfCode};
use portfolio_core::github::{profile_api_url, GitHubStats};
use portfolio_core::loader::{check_status, decode_json, settle_projects};
use portfolio_core::{Error, ProjectRecord, Result};
use serde::de::DeserializeOwned;

const USER_AGENT: &str = concat!("portfolio/", env!("CARGO_PKG_VERSION"));

fn is_remote(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

/// Fetches `source` and decodes it as JSON.
///
/// `source` is either an http(s) URL or a local path; a missing file is
/// reported like a 404.
pub async fn fetch_json<T: DeserializeOwned>(source: &str) -> Result<T> {
    let body = if is_remote(source) {
        fetch_remote(source).await?
    } else {
        read_local(Path::new(source)).await?
    };
    decode_json(&body)
}

async fn fetch_remote(url: &str) -> Result<String> {
    let client = reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| Error::Network(e.to_string()))?;

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| Error::Network(e.to_string()))?;

    let status = response.status();
    check_status(status.is_success(), &status.to_string())?;

    response
        .text()
        .await
        .map_err(|e| Error::Network(e.to_string()))
}

async fn read_local(path: &Path) -> Result<String> {
    match tokio::fs::read_to_string(path).await {
        Ok(body) => Ok(body),
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => Err(Error::Fetch {
            status: "404 Not Found".to_string(),
        }),
        Err(error) => Err(error.into()),
    }
}

/// Loads the project list; failures are logged and yield an empty list.
pub async fn load_projects(source: &str) -> Vec<ProjectRecord> {
    settle_projects(source, fetch_json(source).await)
}

/// Fetches the public profile stats of `user`.
pub async fn fetch_github_stats(user: &str) -> Result<GitHubStats> {
    let url = profile_api_url(user);
    let stats = fetch_json(&url).await;
    match &stats {
        Ok(_) => tracing::info!("loaded GitHub stats for {user}"),
        Err(error) => tracing::error!("error fetching GitHub stats for {user}: {error}"),
    }
    stats
}

/// Reads the commit CSV and groups it into commits.
pub async fn load_commits(path: &Path, repo_url: &str) -> Result<(Vec<LineOfCode>, Vec<Commit>)> {
    let content = tokio::fs::read(path).await?;
    let lines = read_lines(content.as_slice())?;
    let commits = process_commits(&lines, repo_url);
    tracing::info!(
        "loaded {} lines across {} commits from {}",
        lines.len(),
        commits.len(),
        path.display()
    );
    Ok((lines, commits))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_loads_local_projects() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("projects.json");
        std::fs::write(
            &path,
            r#"[{"title": "A", "year": "2023"}, {"title": "B", "year": 2024}]"#,
        )?;

        let records = load_projects(path.to_str().unwrap_or_default()).await;
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].year_label(), "2024");
        Ok(())
    }

    #[tokio::test]
    async fn test_missing_file_is_fetch_error() {
        let result = fetch_json::<Vec<ProjectRecord>>("does/not/exist.json").await;
        assert!(matches!(result, Err(Error::Fetch { status }) if status.contains("404")));
    }

    #[tokio::test]
    async fn test_malformed_json_yields_no_data() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("projects.json");
        std::fs::write(&path, "[{\"title\": ")?;

        let source = path.to_str().unwrap_or_default();
        assert!(matches!(
            fetch_json::<Vec<ProjectRecord>>(source).await,
            Err(Error::Parse(_))
        ));
        assert!(load_projects(source).await.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_loads_commit_csv() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("loc.csv");
        std::fs::write(
            &path,
            "file,line,type,commit,author,date,time,timezone,datetime,depth,length\n\
             a.js,1,js,c1,Ada,2024-03-01,10:00:00,+00:00,2024-03-01T10:00:00+00:00,0,12\n\
             a.js,2,js,c1,Ada,2024-03-01,10:00:00,+00:00,2024-03-01T10:00:00+00:00,1,8\n",
        )?;

        let (lines, commits) = load_commits(&path, "https://github.com/amw013/portfolio").await?;
        assert_eq!(lines.len(), 2);
        assert_eq!(commits.len(), 1);
        assert_eq!(commits[0].total_lines, 2);
        Ok(())
    }

    #[test]
    fn test_remote_detection() {
        assert!(is_remote("https://api.github.com/users/amw013"));
        assert!(!is_remote("lib/projects.json"));
    }
}
