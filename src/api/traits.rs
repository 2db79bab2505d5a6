use crate::api::types::ListingQuery;
use crate::error::FetchResult;
use crate::models::{Listing, Statistics};
use async_trait::async_trait;

/// Read side of the listings backend.
/// The controller only talks to this trait, so tests can swap in an in-memory source.
#[async_trait]
pub trait ListingApi: Send + Sync {
    async fn statistics(&self) -> FetchResult<Statistics>;

    async fn listings(&self, query: &ListingQuery) -> FetchResult<Vec<Listing>>;
}
