use std::sync::Arc;

use crate::github::GitHubSource;
use crate::live::cache::LiveCache;
use crate::models::{GitHubUser, Repository};

pub struct LiveData {
    github: Arc<dyn GitHubSource>,
    username: String,
    cache: LiveCache,
}

impl LiveData {
    pub fn new(github: Arc<dyn GitHubSource>, username: impl Into<String>, cache: LiveCache) -> Self {
        Self {
            github,
            username: username.into(),
            cache,
        }
    }

    pub async fn user(&self) -> Option<Arc<GitHubUser>> {
        self.cache
            .get_or_refresh(|| async {
                match self.github.get_user(&self.username).await {
                    Ok(user) => Some(Arc::new(user)),
                    Err(e) => {
                        tracing::error!("GitHub API error: {}", e);
                        None
                    }
                }
            })
            .await
    }

    pub async fn repos(&self) -> Option<Arc<Vec<Repository>>> {
        self.cache
            .get_or_refresh(|| async {
                match self.github.get_user_repos(&self.username).await {
                    Ok(repos) => Some(Arc::new(repos)),
                    Err(e) => {
                        tracing::error!("GitHub API error: {}", e);
                        None
                    }
                }
            })
            .await
    }
}
