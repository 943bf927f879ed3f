use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;

use crate::analysis::{contributions, ranking, repo_stats};
use crate::live::animate::{animate_value, ANIMATION_DURATION};
use crate::live::data::LiveData;
use crate::live::format;
use crate::live::page::{
    Presentation, LANGUAGE_BARS, REPOS_GRID, TOTAL_CONTRIBUTIONS, TOTAL_FOLLOWERS, TOTAL_REPOS,
    TOTAL_STARS,
};

pub struct LiveRenderer {
    data: LiveData,
    page: Arc<dyn Presentation>,
    featured_count: usize,
    animation: Duration,
}

impl LiveRenderer {
    pub fn new(data: LiveData, page: Arc<dyn Presentation>) -> Self {
        Self {
            data,
            page,
            featured_count: ranking::DEFAULT_FEATURED,
            animation: ANIMATION_DURATION,
        }
    }

    pub fn with_featured_count(mut self, count: usize) -> Self {
        self.featured_count = count;
        self
    }

    pub fn with_animation(mut self, duration: Duration) -> Self {
        self.animation = duration;
        self
    }

    pub async fn init(&self) -> bool {
        if !self.page.has_slot(TOTAL_REPOS) {
            tracing::debug!("No {} slot on page, skipping live stats", TOTAL_REPOS);
            return false;
        }

        futures::join!(
            self.update_basic_stats(),
            self.update_stars_count(),
            self.update_language_stats(),
            self.update_recent_repos(),
            self.update_contributions(),
        );
        true
    }

    pub async fn update_basic_stats(&self) {
        let Some(user) = self.data.user().await else {
            return;
        };

        futures::join!(
            self.animate(TOTAL_REPOS, user.public_repos),
            self.animate(TOTAL_FOLLOWERS, user.followers),
        );
    }

    pub async fn update_stars_count(&self) {
        let Some(repos) = self.data.repos().await else {
            return;
        };

        let total_stars = repos.iter().map(|r| r.stargazers_count).sum();
        self.animate(TOTAL_STARS, total_stars).await;
    }

    pub async fn update_language_stats(&self) {
        let Some(repos) = self.data.repos().await else {
            return;
        };

        let stats = repo_stats::calculate_repo_stats(&repos);
        let html = format::language_bars_html(&stats.top_languages, repos.len() as u64);
        self.page.set_html(LANGUAGE_BARS, &html);
    }

    pub async fn update_recent_repos(&self) {
        let Some(repos) = self.data.repos().await else {
            return;
        };

        let featured = ranking::top_repositories(&repos, self.featured_count);
        let html = format::repo_grid_html(&featured, Utc::now());
        self.page.set_html(REPOS_GRID, &html);
    }

    pub async fn update_contributions(&self) {
        let Some(repos) = self.data.repos().await else {
            return;
        };

        let estimate = contributions::estimate_from_repos(&repos, Utc::now());
        self.animate(TOTAL_CONTRIBUTIONS, estimate).await;
    }

    async fn animate(&self, id: &str, target: u64) {
        let target = i64::try_from(target).unwrap_or(i64::MAX);
        animate_value(self.page.as_ref(), id, 0, target, self.animation).await;
    }
}
