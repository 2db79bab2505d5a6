use crate::models::{Listing, Statistics};
use serde::Deserialize;

/// Which listings endpoint to call and with what parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingQuery {
    /// `GET /api/listings/top[?limit=N]`
    Top { limit: Option<u32> },
    /// `GET /api/listings?country=<code>&limit=N`
    Country { code: String, limit: u32 },
}

impl ListingQuery {
    /// Path and query string relative to the API base URL
    pub fn path(&self) -> String {
        match self {
            ListingQuery::Top { limit: None } => "/api/listings/top".to_string(),
            ListingQuery::Top { limit: Some(n) } => format!("/api/listings/top?limit={}", n),
            ListingQuery::Country { code, limit } => {
                format!("/api/listings?country={}&limit={}", code, limit)
            }
        }
    }
}

/// Body of `/api/listings` and `/api/listings/top`
#[derive(Debug, Clone, Deserialize)]
pub struct ListingsEnvelope {
    pub success: bool,
    #[serde(default)]
    pub listings: Vec<Listing>,
}

/// Body of `/api/statistics`
#[derive(Debug, Clone, Deserialize)]
pub struct StatisticsEnvelope {
    pub success: bool,
    #[serde(default)]
    pub statistics: Statistics,
}
