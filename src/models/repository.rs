use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Repository {
    pub name: String,
    pub description: Option<String>,
    pub html_url: String,
    #[serde(default)]
    pub stargazers_count: u64,
    #[serde(default)]
    pub forks_count: u64,
    // Kilobytes.
    #[serde(default)]
    pub size: u64,
    pub language: Option<String>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub fork: bool,
    #[serde(default)]
    pub topics: Vec<String>,
}

impl Repository {
    pub fn primary_language(&self) -> Option<&str> {
        self.language.as_deref().filter(|l| !l.is_empty())
    }
}
