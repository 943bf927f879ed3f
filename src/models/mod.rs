pub mod user;
pub mod repository;
pub mod event;
pub mod stats;
pub mod snapshot;

pub use user::*;
pub use repository::*;
pub use event::*;
pub use stats::*;
pub use snapshot::*;
