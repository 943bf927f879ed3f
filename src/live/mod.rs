pub mod cache;
pub mod data;
pub mod page;
pub mod animate;
pub mod format;
pub mod renderer;

pub use cache::LiveCache;
pub use data::LiveData;
pub use page::{MemoryPage, Presentation};
pub use renderer::LiveRenderer;
