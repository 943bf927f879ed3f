use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    #[serde(rename = "type")]
    pub event_type: String,
    pub repo: EventRepo,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub payload: serde_json::Value,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventRepo {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventKind {
    Push,
    Create,
    Watch,
    Fork,
    Issues,
    PullRequest,
    IssueComment,
    PullRequestReview,
    Unknown(String),
}

impl From<&str> for EventKind {
    fn from(s: &str) -> Self {
        match s {
            "PushEvent" => EventKind::Push,
            "CreateEvent" => EventKind::Create,
            "WatchEvent" => EventKind::Watch,
            "ForkEvent" => EventKind::Fork,
            "IssuesEvent" => EventKind::Issues,
            "PullRequestEvent" => EventKind::PullRequest,
            "IssueCommentEvent" => EventKind::IssueComment,
            "PullRequestReviewEvent" => EventKind::PullRequestReview,
            other => EventKind::Unknown(other.to_string()),
        }
    }
}

impl Event {
    pub fn kind(&self) -> EventKind {
        EventKind::from(self.event_type.as_str())
    }

    // Newer payloads omit `size`; fall back to the commit count.
    pub fn push_size(&self) -> u64 {
        self.payload
            .get("size")
            .and_then(|v| v.as_u64())
            .or_else(|| {
                self.payload
                    .get("commits")
                    .and_then(|v| v.as_array())
                    .map(|c| c.len() as u64)
            })
            .unwrap_or(0)
    }

    pub fn payload_str(&self, key: &str) -> Option<&str> {
        self.payload.get(key).and_then(|v| v.as_str())
    }
}
