//! supermarkt-scanner - Compare supermarket product prices from the terminal
//!
//! Queries a price-comparison backend that aggregates Belgian and Dutch
//! supermarkets, orders the package sizes it finds and renders the matching
//! products as comparable cards.

pub mod backend;
pub mod card;
pub mod commands;
pub mod config;
pub mod filters;
pub mod format;
pub mod session;
pub mod sizes;

pub use backend::{Product, ScraperStatus, SearchError, SearchResult, UnitType};
pub use config::Config;
pub use filters::SizeSelection;
pub use session::SearchSession;
