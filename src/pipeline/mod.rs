//! Pure listing transformations: classify, filter, sort.

pub mod classify;
pub mod filter;
pub mod sort;
pub mod vocabulary;

pub use classify::{classify, CarType};
pub use filter::Filter;
pub use sort::{sort_by_column, sort_listings, SortColumn, SortDirection, SortOrder};
