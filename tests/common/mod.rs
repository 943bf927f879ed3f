#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};

use anyhow::Result as AnyResult;
use async_trait::async_trait;
use ghstats::models::{Event, GitHubUser, Repository};
use ghstats::{Error, GitHubSource, Result};
use serde_json::json;

#[derive(Default)]
pub struct Calls {
    pub user: AtomicUsize,
    pub repos: AtomicUsize,
    pub events: AtomicUsize,
}

impl Calls {
    pub fn get(counter: &AtomicUsize) -> usize {
        counter.load(Ordering::SeqCst)
    }
}

pub struct FakeGitHub {
    pub user: Option<GitHubUser>,
    pub repos: Option<Vec<Repository>>,
    pub events: Option<Vec<Event>>,
    pub hang_user: bool,
    pub calls: Calls,
}

impl FakeGitHub {
    pub fn new() -> AnyResult<Self> {
        Ok(Self {
            user: Some(user()?),
            repos: Some(repos()?),
            events: Some(events()?),
            hang_user: false,
            calls: Calls::default(),
        })
    }
}

fn upstream(status: u16, text: &str) -> Error {
    Error::Upstream {
        status,
        status_text: text.to_string(),
    }
}

#[async_trait]
impl GitHubSource for FakeGitHub {
    async fn get_user(&self, _username: &str) -> Result<GitHubUser> {
        self.calls.user.fetch_add(1, Ordering::SeqCst);
        if self.hang_user {
            std::future::pending::<()>().await;
        }
        self.user.clone().ok_or_else(|| upstream(404, "Not Found"))
    }

    async fn get_user_repos(&self, _username: &str) -> Result<Vec<Repository>> {
        self.calls.repos.fetch_add(1, Ordering::SeqCst);
        self.repos.clone().ok_or_else(|| upstream(500, "Internal Server Error"))
    }

    async fn get_public_events(&self, _username: &str, per_page: u32) -> Result<Vec<Event>> {
        self.calls.events.fetch_add(1, Ordering::SeqCst);
        let events = self.events.clone().ok_or_else(|| upstream(403, "Forbidden"))?;
        Ok(events.into_iter().take(per_page as usize).collect())
    }
}

pub fn user() -> AnyResult<GitHubUser> {
    Ok(serde_json::from_value(json!({
        "login": "octocat",
        "id": 583231,
        "name": "The Octocat",
        "bio": null,
        "location": "San Francisco",
        "followers": 42,
        "following": 9,
        "public_repos": 4,
        "public_gists": 8,
        "avatar_url": "https://avatars.githubusercontent.com/u/583231?v=4",
        "html_url": "https://github.com/octocat",
        "created_at": "2011-01-25T18:44:36Z"
    }))?)
}

pub fn repos() -> AnyResult<Vec<Repository>> {
    Ok(serde_json::from_value(json!([
        {
            "name": "a",
            "description": "first",
            "html_url": "https://github.com/octocat/a",
            "stargazers_count": 5,
            "forks_count": 1,
            "size": 120,
            "language": "Rust",
            "updated_at": "2024-01-01T00:00:00Z",
            "fork": false,
            "topics": ["cli"]
        },
        {
            "name": "b",
            "description": null,
            "html_url": "https://github.com/octocat/b",
            "stargazers_count": 5,
            "forks_count": 0,
            "size": 30,
            "language": "Go",
            "updated_at": "2024-06-01T00:00:00Z",
            "fork": false
        },
        {
            "name": "c",
            "description": "a fork",
            "html_url": "https://github.com/octocat/c",
            "stargazers_count": 100,
            "forks_count": 4,
            "size": 10,
            "language": "Rust",
            "updated_at": "2024-01-01T00:00:00Z",
            "fork": true
        },
        {
            "name": "d",
            "description": "",
            "html_url": "https://github.com/octocat/d",
            "stargazers_count": 0,
            "forks_count": 0,
            "size": 0,
            "language": null,
            "updated_at": "2020-01-01T00:00:00Z",
            "fork": false
        }
    ]))?)
}

pub fn repo_updated_now() -> AnyResult<Repository> {
    Ok(serde_json::from_value(json!({
        "name": "e",
        "description": "touched today",
        "html_url": "https://github.com/octocat/e",
        "stargazers_count": 0,
        "forks_count": 0,
        "size": 1,
        "language": null,
        "updated_at": chrono::Utc::now().to_rfc3339(),
        "fork": false
    }))?)
}

pub fn events() -> AnyResult<Vec<Event>> {
    Ok(serde_json::from_value(json!([
        {
            "type": "PushEvent",
            "repo": { "name": "octocat/a" },
            "created_at": "2024-06-02T10:00:00Z",
            "payload": { "size": 2 }
        },
        {
            "type": "CreateEvent",
            "repo": { "name": "octocat/b" },
            "created_at": "2024-06-01T10:00:00Z",
            "payload": { "ref_type": "tag" }
        },
        {
            "type": "MemberEvent",
            "repo": { "name": "octocat/b" },
            "created_at": "2024-05-01T10:00:00Z",
            "payload": {}
        }
    ]))?)
}
