use std::sync::atomic::{AtomicU64, Ordering};

use reqwest::header::HeaderMap;

const UNKNOWN: u64 = u64::MAX;
const LOW_QUOTA: u64 = 10;

pub struct RateLimitTracker {
    remaining: AtomicU64,
    reset_at: AtomicU64,
}

impl RateLimitTracker {
    pub fn new() -> Self {
        Self {
            remaining: AtomicU64::new(UNKNOWN),
            reset_at: AtomicU64::new(UNKNOWN),
        }
    }

    pub fn update_from_headers(&self, headers: &HeaderMap) {
        let remaining = headers
            .get("x-ratelimit-remaining")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<u64>().ok());

        let Some(remaining) = remaining else {
            return;
        };

        self.remaining.store(remaining, Ordering::Relaxed);

        if let Some(reset) = headers
            .get("x-ratelimit-reset")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<u64>().ok())
        {
            self.reset_at.store(reset, Ordering::Relaxed);
        }

        if remaining < LOW_QUOTA {
            tracing::warn!(
                "GitHub rate limit nearly exhausted: {} requests left (resets at {})",
                remaining,
                self.reset_at().unwrap_or_default()
            );
        }
    }

    pub fn remaining(&self) -> Option<u64> {
        match self.remaining.load(Ordering::Relaxed) {
            UNKNOWN => None,
            n => Some(n),
        }
    }

    pub fn reset_at(&self) -> Option<u64> {
        match self.reset_at.load(Ordering::Relaxed) {
            UNKNOWN => None,
            n => Some(n),
        }
    }
}

impl Default for RateLimitTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;

    #[test]
    fn test_records_quota_headers() {
        let tracker = RateLimitTracker::new();
        assert_eq!(tracker.remaining(), None);

        let mut headers = HeaderMap::new();
        headers.insert("x-ratelimit-remaining", HeaderValue::from_static("4999"));
        headers.insert("x-ratelimit-reset", HeaderValue::from_static("1700000000"));
        tracker.update_from_headers(&headers);

        assert_eq!(tracker.remaining(), Some(4999));
        assert_eq!(tracker.reset_at(), Some(1_700_000_000));
    }

    #[test]
    fn test_ignores_missing_headers() {
        let tracker = RateLimitTracker::new();
        tracker.update_from_headers(&HeaderMap::new());
        assert_eq!(tracker.remaining(), None);
        assert_eq!(tracker.reset_at(), None);
    }
}
