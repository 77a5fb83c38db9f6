pub mod cache;
pub mod fetch;

pub use cache::{OfflineCache, Request};
pub use fetch::{Fetch, FetchError, HttpFetcher, Response};
