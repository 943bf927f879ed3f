pub mod config;
pub mod error;
pub mod models;
pub mod github;
pub mod analysis;
pub mod storage;
pub mod live;

pub use config::{Config, PipelineConfig};
pub use error::{Error, Result};
pub use github::{GitHubClient, GitHubSource};
pub use analysis::SnapshotPipeline;
pub use storage::SnapshotWriter;
pub use live::{LiveCache, LiveData, LiveRenderer, MemoryPage, Presentation};
