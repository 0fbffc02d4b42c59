pub mod model;
pub mod service;

pub use model::{SearchResult, SearchSource, UNTITLED_PLACEHOLDER};
pub use service::SearchService;
