use serde::{Deserialize, Serialize};

use crate::stats::StatEntry;

pub const API_BASE: &str = "https://api.github.com";

pub fn profile_api_url(user: &str) -> String {
    format!("{API_BASE}/users/{user}")
}

pub fn profile_page_url(user: &str) -> String {
    format!("https://github.com/{user}")
}

/// The part of a GitHub user profile shown on the home page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GitHubStats {
    #[serde(default, alias = "public_repos")]
    pub public_repos: u64,
    #[serde(default, alias = "public_gists")]
    pub public_gists: u64,
    #[serde(default)]
    pub followers: u64,
    #[serde(default)]
    pub following: u64,
}

impl GitHubStats {
    /// One card row per field, labels derived from the camelCase key.
    pub fn entries(&self) -> Vec<StatEntry> {
        vec![
            StatEntry::from_key("publicRepos", self.public_repos),
            StatEntry::from_key("publicGists", self.public_gists),
            StatEntry::from_key("followers", self.followers),
            StatEntry::from_key("following", self.following),
        ]
    }
}
