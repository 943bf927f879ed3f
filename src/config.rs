use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::{Error, Result};

pub const DEFAULT_API_URL: &str = "https://api.github.com";
pub const DEFAULT_OUTPUT_PATH: &str = "_data/github-stats.json";
pub const DEFAULT_CACHE_TTL_SECS: u64 = 60 * 60;
pub const DEFAULT_FEATURED_COUNT: usize = 6;

#[derive(Debug, Clone)]
pub struct Config {
    pub github_username: String,
    pub github_token: Option<String>,
    pub api_base_url: String,
    pub output_path: PathBuf,
    pub cache_ttl: Duration,
    pub featured_count: usize,
}

impl Config {
    pub fn from_env(username: Option<String>) -> Result<Self> {
        let github_username = match username {
            Some(name) => name,
            None => env::var("GITHUB_USERNAME").map_err(|_| {
                Error::Config(
                    "GITHUB_USERNAME environment variable not set and no --username given"
                        .to_string(),
                )
            })?,
        };

        let github_token = env::var("GITHUB_TOKEN").ok().filter(|t| !t.trim().is_empty());

        let api_base_url = env::var("GITHUB_API_URL")
            .unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        let output_path = env::var("STATS_OUTPUT")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_OUTPUT_PATH));

        let cache_ttl_secs = env::var("STATS_CACHE_TTL_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_CACHE_TTL_SECS);

        let featured_count = env::var("FEATURED_COUNT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_FEATURED_COUNT);

        Ok(Self::new(github_username)
            .with_token(github_token)
            .with_api_base_url(api_base_url)
            .with_output_path(output_path)
            .with_cache_ttl(Duration::from_secs(cache_ttl_secs))
            .with_featured_count(featured_count))
    }

    pub fn new(github_username: impl Into<String>) -> Self {
        Self {
            github_username: github_username.into(),
            github_token: None,
            api_base_url: DEFAULT_API_URL.to_string(),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            cache_ttl: Duration::from_secs(DEFAULT_CACHE_TTL_SECS),
            featured_count: DEFAULT_FEATURED_COUNT,
        }
    }

    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.github_token = token;
        self
    }

    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = ttl;
        self
    }

    pub fn with_featured_count(mut self, count: usize) -> Self {
        self.featured_count = count;
        self
    }
}

#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub username: String,
    pub featured_count: usize,
    pub contribution_events: u32,
    pub activity_events: u32,
    pub activity_limit: usize,
}

impl From<&Config> for PipelineConfig {
    fn from(config: &Config) -> Self {
        Self {
            username: config.github_username.clone(),
            featured_count: config.featured_count,
            contribution_events: 100,
            activity_events: 10,
            activity_limit: 5,
        }
    }
}
