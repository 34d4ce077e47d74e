mod config;

pub use config::{AppConfig, DEFAULT_GITHUB_USER};
