pub mod repo_stats;
pub mod ranking;
pub mod contributions;
pub mod activity;
pub mod pipeline;

pub use repo_stats::calculate_repo_stats;
pub use ranking::top_repositories;
pub use contributions::{estimate_from_events, estimate_from_repos};
pub use activity::{format_event_action, recent_activity};
pub use pipeline::SnapshotPipeline;
