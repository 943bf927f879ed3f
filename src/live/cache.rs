use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::Instant;

use crate::models::{GitHubUser, Repository};

// Profile and repository list share one freshness window: a successful
// fetch of either extends it, and once it lapses both slots are stale.
// Each slot has its own lock, so only callers of the same slot wait on
// each other's in-flight fetch.
pub struct LiveCache {
    user: Mutex<Option<Stamped<Arc<GitHubUser>>>>,
    repos: Mutex<Option<Stamped<Arc<Vec<Repository>>>>>,
    window: std::sync::Mutex<Option<Window>>,
    ttl: Duration,
}

pub struct Stamped<T> {
    value: T,
    stored_at: Instant,
}

#[derive(Clone, Copy)]
struct Window {
    started: Instant,
    last_fetch: Instant,
}

pub trait CacheEntry: Clone + Send {
    fn slot(cache: &LiveCache) -> &Mutex<Option<Stamped<Self>>>;
}

impl CacheEntry for Arc<GitHubUser> {
    fn slot(cache: &LiveCache) -> &Mutex<Option<Stamped<Self>>> {
        &cache.user
    }
}

impl CacheEntry for Arc<Vec<Repository>> {
    fn slot(cache: &LiveCache) -> &Mutex<Option<Stamped<Self>>> {
        &cache.repos
    }
}

impl LiveCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            user: Mutex::new(None),
            repos: Mutex::new(None),
            window: std::sync::Mutex::new(None),
            ttl,
        }
    }

    // A `None` from `fetch` leaves the cache untouched.
    pub async fn get_or_refresh<T, F, Fut>(&self, fetch: F) -> Option<T>
    where
        T: CacheEntry,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Option<T>>,
    {
        let mut slot = T::slot(self).lock().await;

        if let Some(entry) = slot.as_ref() {
            if self.is_valid(entry.stored_at) {
                return Some(entry.value.clone());
            }
            tracing::debug!("Live cache expired");
        }

        let value = fetch().await?;
        *slot = Some(Stamped {
            value: value.clone(),
            stored_at: self.touch(),
        });
        Some(value)
    }

    fn is_valid(&self, stored_at: Instant) -> bool {
        match *self.window.lock().unwrap_or_else(|e| e.into_inner()) {
            Some(w) => w.last_fetch.elapsed() < self.ttl && stored_at >= w.started,
            None => false,
        }
    }

    // Records a successful fetch; opens a new window if the old one lapsed.
    fn touch(&self) -> Instant {
        let now = Instant::now();
        let mut window = self.window.lock().unwrap_or_else(|e| e.into_inner());
        let started = match *window {
            Some(w) if w.last_fetch.elapsed() < self.ttl => w.started,
            _ => now,
        };
        *window = Some(Window {
            started,
            last_fetch: now,
        });
        now
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::repo_stats::fixtures::repo;
    use std::sync::atomic::{AtomicUsize, Ordering};

    const HOUR: Duration = Duration::from_secs(3600);

    async fn repos(cache: &LiveCache, calls: &AtomicUsize) -> Option<Arc<Vec<Repository>>> {
        cache
            .get_or_refresh(|| async {
                calls.fetch_add(1, Ordering::SeqCst);
                Some(Arc::new(vec![repo("a", 1, false, "2024-01-01")]))
            })
            .await
    }

    async fn user(cache: &LiveCache, calls: &AtomicUsize) -> Option<Arc<GitHubUser>> {
        cache
            .get_or_refresh(|| async {
                calls.fetch_add(1, Ordering::SeqCst);
                Some(Arc::new(GitHubUser {
                    login: "octocat".to_string(),
                    name: None,
                    bio: None,
                    location: None,
                    followers: 1,
                    following: 0,
                    public_repos: 1,
                    public_gists: 0,
                    avatar_url: String::new(),
                    html_url: String::new(),
                    created_at: "2011-01-25T18:44:36Z".parse().unwrap(),
                }))
            })
            .await
    }

    #[tokio::test(start_paused = true)]
    async fn test_fetches_once_within_ttl_and_again_after() {
        let cache = LiveCache::new(HOUR);
        let calls = AtomicUsize::new(0);

        assert!(repos(&cache, &calls).await.is_some());
        tokio::time::advance(Duration::from_secs(59 * 60)).await;
        assert!(repos(&cache, &calls).await.is_some());
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        tokio::time::advance(Duration::from_secs(2 * 60)).await;
        assert!(repos(&cache, &calls).await.is_some());
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_fetch_is_not_cached() {
        let cache = LiveCache::new(HOUR);
        let calls = AtomicUsize::new(0);

        let first: Option<Arc<Vec<Repository>>> = cache
            .get_or_refresh(|| async {
                calls.fetch_add(1, Ordering::SeqCst);
                None
            })
            .await;
        assert!(first.is_none());

        assert!(repos(&cache, &calls).await.is_some());
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_either_fetch_extends_the_window() {
        let cache = LiveCache::new(HOUR);
        let user_calls = AtomicUsize::new(0);
        let repo_calls = AtomicUsize::new(0);

        repos(&cache, &repo_calls).await;
        tokio::time::advance(Duration::from_secs(50 * 60)).await;
        user(&cache, &user_calls).await;
        tokio::time::advance(Duration::from_secs(50 * 60)).await;

        // 100 minutes after the repository fetch, 50 after the profile fetch.
        repos(&cache, &repo_calls).await;
        user(&cache, &user_calls).await;
        assert_eq!(repo_calls.load(Ordering::SeqCst), 1);
        assert_eq!(user_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_expiry_drops_both_slots() {
        let cache = LiveCache::new(HOUR);
        let user_calls = AtomicUsize::new(0);
        let repo_calls = AtomicUsize::new(0);

        repos(&cache, &repo_calls).await;
        user(&cache, &user_calls).await;
        tokio::time::advance(HOUR).await;

        // The repository refetch opens a new window; the old profile must
        // not become fresh again with it.
        repos(&cache, &repo_calls).await;
        user(&cache, &user_calls).await;
        assert_eq!(repo_calls.load(Ordering::SeqCst), 2);
        assert_eq!(user_calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_pending_profile_does_not_block_repos() {
        let cache = LiveCache::new(HOUR);
        let calls = AtomicUsize::new(0);

        let hung = cache.get_or_refresh::<Arc<GitHubUser>, _, _>(|| std::future::pending());
        let result = tokio::time::timeout(Duration::from_secs(60), async {
            tokio::select! {
                _ = hung => None,
                r = repos(&cache, &calls) => r,
            }
        })
        .await;

        assert!(matches!(result, Ok(Some(_))));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
