use crate::models::{FeaturedRepository, Repository};

pub const DEFAULT_FEATURED: usize = 6;

// The recency term moves by about 3.2 per year.
pub fn repository_score(repo: &Repository) -> f64 {
    repo.stargazers_count as f64 * 10.0 + repo.updated_at.timestamp_millis() as f64 / 1_000_000_000.0
}

pub fn rank_repositories(repos: &[Repository]) -> Vec<&Repository> {
    let mut ranked: Vec<(&Repository, f64)> = repos
        .iter()
        .filter(|r| !r.fork)
        .map(|r| (r, repository_score(r)))
        .collect();

    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    ranked.into_iter().map(|(r, _)| r).collect()
}

pub fn top_repositories(repos: &[Repository], count: usize) -> Vec<FeaturedRepository> {
    rank_repositories(repos)
        .into_iter()
        .take(count)
        .map(FeaturedRepository::from)
        .collect()
}

impl From<&Repository> for FeaturedRepository {
    fn from(repo: &Repository) -> Self {
        Self {
            name: repo.name.clone(),
            description: repo.description.clone(),
            url: repo.html_url.clone(),
            stars: repo.stargazers_count,
            forks: repo.forks_count,
            language: repo.language.clone(),
            updated: repo.updated_at,
            topics: repo.topics.clone(),
        }
    }
}
