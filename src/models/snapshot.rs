use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::stats::{ActivityItem, ContributionEstimate, FeaturedRepository, LanguageStat};
use super::user::GitHubUser;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub last_updated: String,
    pub user: SnapshotUser,
    pub repos: SnapshotRepos,
    pub contributions: ContributionEstimate,
    pub recent_activity: Vec<ActivityItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotUser {
    pub login: String,
    pub name: Option<String>,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub followers: u64,
    pub following: u64,
    pub public_repos: u64,
    pub public_gists: u64,
    pub avatar_url: String,
    pub profile_url: String,
    pub created_at: DateTime<Utc>,
}

impl From<&GitHubUser> for SnapshotUser {
    fn from(user: &GitHubUser) -> Self {
        Self {
            login: user.login.clone(),
            name: user.name.clone(),
            bio: user.bio.clone(),
            location: user.location.clone(),
            followers: user.followers,
            following: user.following,
            public_repos: user.public_repos,
            public_gists: user.public_gists,
            avatar_url: user.avatar_url.clone(),
            profile_url: user.html_url.clone(),
            created_at: user.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotRepos {
    pub total: u64,
    pub total_stars: u64,
    pub total_forks: u64,
    pub total_size: u64,
    pub top_languages: Vec<LanguageStat>,
    pub featured: Vec<FeaturedRepository>,
}
