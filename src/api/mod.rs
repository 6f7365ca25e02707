pub mod client;
pub mod types;

pub use client::{HttpSearchClient, SearchClient};
pub use types::{Match, MatchKind, SearchRequest, SearchResponse};
