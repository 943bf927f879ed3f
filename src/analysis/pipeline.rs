use std::sync::Arc;

use chrono::{DateTime, SecondsFormat, Utc};
use indicatif::{ProgressBar, ProgressStyle};

use crate::analysis::{activity, contributions, ranking, repo_stats};
use crate::config::PipelineConfig;
use crate::error::Result;
use crate::github::GitHubSource;
use crate::models::{
    ActivityItem, ContributionEstimate, GitHubUser, Repository, Snapshot, SnapshotRepos,
    SnapshotUser,
};
use crate::storage::SnapshotWriter;

pub struct SnapshotPipeline {
    github: Arc<dyn GitHubSource>,
    config: PipelineConfig,
}

impl SnapshotPipeline {
    pub fn new(github: Arc<dyn GitHubSource>, config: PipelineConfig) -> Self {
        Self { github, config }
    }

    pub async fn run(&self, writer: &SnapshotWriter) -> Result<Snapshot> {
        let snapshot = self.build_snapshot().await?;
        writer.write(&snapshot)?;
        Ok(snapshot)
    }

    pub async fn build_snapshot(&self) -> Result<Snapshot> {
        let username = self.config.username.as_str();
        tracing::info!("Starting GitHub stats update for: {}", username);

        let pb = ProgressBar::new(4);
        pb.set_style(
            ProgressStyle::with_template("{spinner:.green} [{elapsed_precise}] {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message("fetching");

        let tick = |label: &'static str| {
            let pb = pb.clone();
            move || {
                pb.inc(1);
                pb.set_message(label);
            }
        };

        let user_done = tick("profile");
        let repos_done = tick("repositories");
        let contributions_done = tick("contributions");
        let activity_done = tick("activity");

        let (user, repos, contributions, activity) = tokio::join!(
            async {
                let r = self.github.get_user(username).await;
                user_done();
                r
            },
            async {
                let r = self.github.get_user_repos(username).await;
                repos_done();
                r
            },
            async {
                let r = self.fetch_contributions(Utc::now()).await;
                contributions_done();
                r
            },
            async {
                let r = self.fetch_recent_activity().await;
                activity_done();
                r
            },
        );
        pb.finish_and_clear();

        let user = user.inspect_err(|e| tracing::error!("Failed to fetch user profile: {}", e))?;
        let repos =
            repos.inspect_err(|e| tracing::error!("Failed to fetch repositories: {}", e))?;

        tracing::info!("Fetched {} repositories", repos.len());

        Ok(self.assemble(&user, &repos, contributions, activity, Utc::now()))
    }

    async fn fetch_contributions(&self, now: DateTime<Utc>) -> ContributionEstimate {
        match self
            .github
            .get_public_events(&self.config.username, self.config.contribution_events)
            .await
        {
            Ok(events) => contributions::estimate_from_events(&events, now),
            Err(e) => {
                tracing::warn!("Error fetching contributions: {}", e);
                ContributionEstimate::default()
            }
        }
    }

    async fn fetch_recent_activity(&self) -> Vec<ActivityItem> {
        match self
            .github
            .get_public_events(&self.config.username, self.config.activity_events)
            .await
        {
            Ok(events) => activity::recent_activity(&events, self.config.activity_limit),
            Err(e) => {
                tracing::warn!("Error fetching activity: {}", e);
                Vec::new()
            }
        }
    }

    pub fn assemble(
        &self,
        user: &GitHubUser,
        repos: &[Repository],
        contributions: ContributionEstimate,
        recent_activity: Vec<ActivityItem>,
        now: DateTime<Utc>,
    ) -> Snapshot {
        let stats = repo_stats::calculate_repo_stats(repos);
        let featured = ranking::top_repositories(repos, self.config.featured_count);

        Snapshot {
            last_updated: now.to_rfc3339_opts(SecondsFormat::Millis, true),
            user: SnapshotUser::from(user),
            repos: SnapshotRepos {
                total: repos.len() as u64,
                total_stars: stats.total_stars,
                total_forks: stats.total_forks,
                total_size: stats.total_size,
                top_languages: stats.top_languages,
                featured,
            },
            contributions,
            recent_activity,
        }
    }
}
