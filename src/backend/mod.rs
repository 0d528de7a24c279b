//! Backend access: HTTP client, response models and error types.

pub mod client;
pub mod error;
pub mod models;

pub use client::{BackendClient, SearchBackend};
pub use error::SearchError;
pub use models::{parse_search_body, Product, ScraperStatus, SearchResult, UnitType};
