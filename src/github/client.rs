use async_trait::async_trait;
use reqwest::{header, Client};
use serde::de::DeserializeOwned;

use crate::config::DEFAULT_API_URL;
use crate::error::{Error, Result};
use crate::github::paginator::Paginator;
use crate::github::rate_limiter::RateLimitTracker;
use crate::github::source::GitHubSource;
use crate::models::{Event, GitHubUser, Repository};

pub const USER_AGENT: &str = "GitHub-Stats-Updater";

pub struct GitHubClient {
    client: Client,
    rate_limiter: RateLimitTracker,
    base_url: String,
}

impl GitHubClient {
    pub fn new(token: Option<&str>) -> Result<Self> {
        Self::with_base_url(DEFAULT_API_URL, token)
    }

    pub fn with_base_url(base_url: &str, token: Option<&str>) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        if let Some(token) = token {
            headers.insert(
                header::AUTHORIZATION,
                header::HeaderValue::from_str(&format!("token {}", token))?,
            );
        }
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/vnd.github.v3+json"),
        );
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_static(USER_AGENT),
        );

        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            client,
            rate_limiter: RateLimitTracker::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub async fn get_json<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, endpoint);
        tracing::debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        self.rate_limiter.update_from_headers(response.headers());

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Upstream {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        Ok(response.json().await?)
    }

    pub fn rate_limiter(&self) -> &RateLimitTracker {
        &self.rate_limiter
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl GitHubSource for GitHubClient {
    async fn get_user(&self, username: &str) -> Result<GitHubUser> {
        tracing::info!("Fetching user: {}", username);
        self.get_json(&format!("/users/{}", username)).await
    }

    async fn get_user_repos(&self, username: &str) -> Result<Vec<Repository>> {
        tracing::info!("Fetching repositories for: {}", username);
        let paginator = Paginator::new(100);
        let per_page = paginator.per_page();
        paginator
            .fetch_all(|page| {
                let endpoint = format!(
                    "/users/{}/repos?per_page={}&page={}&sort=updated",
                    username, per_page, page
                );
                async move { self.get_json::<Vec<Repository>>(&endpoint).await }
            })
            .await
    }

    async fn get_public_events(&self, username: &str, per_page: u32) -> Result<Vec<Event>> {
        tracing::info!("Fetching public events for: {} (per_page={})", username, per_page);
        self.get_json(&format!("/users/{}/events/public?per_page={}", username, per_page))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_is_normalized() {
        let client = GitHubClient::with_base_url("http://localhost:9000/", None).unwrap();
        assert_eq!(client.base_url(), "http://localhost:9000");
        assert_eq!(client.rate_limiter().remaining(), None);
    }

    #[test]
    fn test_rejects_token_with_newline() {
        let result = GitHubClient::new(Some("abc\ndef"));
        assert!(matches!(result, Err(Error::InvalidHeader(_))));
    }

    #[tokio::test]
    async fn test_transport_failure_is_network_error() {
        // Port 9 (discard) on localhost is not served in test environments.
        let client = GitHubClient::with_base_url("http://127.0.0.1:9", None).unwrap();
        let result = client.get_user("octocat").await;
        assert!(matches!(result, Err(Error::Network(_))));
    }
}
