use async_trait::async_trait;

use crate::error::Result;
use crate::models::{Event, GitHubUser, Repository};

#[async_trait]
pub trait GitHubSource: Send + Sync {
    async fn get_user(&self, username: &str) -> Result<GitHubUser>;

    async fn get_user_repos(&self, username: &str) -> Result<Vec<Repository>>;

    async fn get_public_events(&self, username: &str, per_page: u32) -> Result<Vec<Event>>;
}
