use std::collections::HashMap;

use crate::models::{LanguageStat, RepoStats, Repository};

pub const TOP_LANGUAGES: usize = 5;

// Ties keep first-seen order; repositories without a language still count
// in the denominator.
pub fn calculate_repo_stats(repos: &[Repository]) -> RepoStats {
    let total_stars = repos.iter().map(|r| r.stargazers_count).sum();
    let total_forks = repos.iter().map(|r| r.forks_count).sum();
    let total_size = repos.iter().map(|r| r.size).sum();

    RepoStats {
        total_stars,
        total_forks,
        total_size,
        top_languages: top_languages(repos, TOP_LANGUAGES),
    }
}

pub fn top_languages(repos: &[Repository], limit: usize) -> Vec<LanguageStat> {
    let mut counts: Vec<(&str, u64)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for language in repos.iter().filter_map(|r| r.primary_language()) {
        match index.get(language) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(language, counts.len());
                counts.push((language, 1));
            }
        }
    }

    // Stable sort keeps first-seen order among equal counts.
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(limit);

    counts
        .into_iter()
        .map(|(name, count)| LanguageStat {
            name: name.to_string(),
            count,
            percentage: percentage(count, repos.len() as u64),
        })
        .collect()
}

// `part / whole * 100` to one decimal, rounding the exact binary value and
// taking the upper neighbour on an exact tie (JavaScript `toFixed(1)`).
pub fn percentage(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    let x = part as f64 / whole as f64 * 100.0;
    // Only values ending in .25 or .75 sit exactly between two tenths.
    let quarters = x * 4.0;
    if quarters.fract() == 0.0 && quarters % 2.0 == 1.0 {
        return (x * 10.0).ceil() / 10.0;
    }
    format!("{:.1}", x).parse().unwrap_or(x)
}

#[cfg(test)]
pub(crate) mod fixtures {
    use chrono::{DateTime, Utc};

    use crate::models::Repository;

    pub fn repo(name: &str, stars: u64, fork: bool, updated: &str) -> Repository {
        Repository {
            name: name.to_string(),
            description: None,
            html_url: format!("https://github.com/octocat/{}", name),
            stargazers_count: stars,
            forks_count: 0,
            size: 0,
            language: None,
            updated_at: parse_date(updated),
            fork,
            topics: Vec::new(),
        }
    }

    pub fn with_language(mut repo: Repository, language: &str) -> Repository {
        repo.language = Some(language.to_string());
        repo
    }

    pub fn parse_date(s: &str) -> DateTime<Utc> {
        let full = if s.len() == 10 {
            format!("{}T00:00:00Z", s)
        } else {
            s.to_string()
        };
        full.parse().unwrap()
    }
}
