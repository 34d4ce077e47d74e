use serde::Serialize;

/// A navigation target; `url` is either relative to the site root or absolute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavPage {
    pub url: String,
    pub title: String,
}

impl NavPage {
    pub fn new(url: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: title.into(),
        }
    }
}

/// A resolved nav link, as shown in the nav bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub title: String,
    pub url: String,
    pub current: bool,
    /// Points at another host; opened in a new tab.
    pub external: bool,
}

pub fn default_pages(github_user: &str) -> Vec<NavPage> {
    vec![
        NavPage::new("", "Home"),
        NavPage::new("projects/", "Projects"),
        NavPage::new("meta/", "Meta"),
        NavPage::new("contact/", "Contact"),
        NavPage::new("resume/", "Resume"),
        NavPage::new(crate::github::profile_page_url(github_user), "GitHub"),
    ]
}

/// Local development serves from `/`, the published site from `/portfolio/`.
pub fn base_path_for_host(hostname: &str) -> &'static str {
    if hostname == "localhost" || hostname == "127.0.0.1" {
        "/"
    } else {
        "/portfolio/"
    }
}

pub fn resolve_url(page_url: &str, base_path: &str) -> String {
    if page_url.starts_with("http") {
        page_url.to_string()
    } else {
        format!("{base_path}{page_url}")
    }
}

/// Splits an absolute URL into `(host, path)`; relative URLs have no host.
fn split_url(url: &str) -> (Option<&str>, &str) {
    let Some((_, rest)) = url.split_once("://") else {
        return (None, url);
    };
    match rest.find('/') {
        Some(index) => (Some(&rest[..index]), &rest[index..]),
        None => (Some(rest), "/"),
    }
}

/// Resolves every page against the current location.
///
/// `host` is the current `host[:port]`, `hostname` the bare name used to pick
/// the base path, and `current_path` the current pathname.
pub fn build_nav(pages: &[NavPage], host: &str, hostname: &str, current_path: &str) -> Vec<NavLink> {
    let base_path = base_path_for_host(hostname);
    pages
        .iter()
        .map(|page| {
            let url = resolve_url(&page.url, base_path);
            let (link_host, link_path) = split_url(&url);
            let same_host = link_host.map_or(true, |link_host| link_host == host);
            NavLink {
                title: page.title.clone(),
                current: same_host && link_path == current_path,
                external: !same_host,
                url,
            }
        })
        .collect()
}
