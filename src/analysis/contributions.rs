// Placeholder activity estimates, not GitHub's contribution graph.

use chrono::{DateTime, Datelike, Utc};

use crate::models::{ContributionEstimate, Event, Repository};

pub const EVENTS_THIS_YEAR_MULTIPLIER: u64 = 2;
pub const EVENTS_TOTAL_MULTIPLIER: u64 = 10;
pub const REPOS_THIS_YEAR_MULTIPLIER: u64 = 15;

pub fn estimate_from_events(events: &[Event], now: DateTime<Utc>) -> ContributionEstimate {
    let year = now.year();
    let this_year = events
        .iter()
        .filter(|e| e.created_at.year() == year)
        .count() as u64;

    ContributionEstimate {
        this_year: this_year * EVENTS_THIS_YEAR_MULTIPLIER,
        total: events.len() as u64 * EVENTS_TOTAL_MULTIPLIER,
    }
}

pub fn estimate_from_repos(repos: &[Repository], now: DateTime<Utc>) -> u64 {
    let year = now.year();
    repos
        .iter()
        .filter(|r| r.updated_at.year() == year)
        .count() as u64
        * REPOS_THIS_YEAR_MULTIPLIER
}
