//! Search session: the state behind one interactive search screen.
//!
//! A session owns the last result set, the busy flag, the derived size list
//! and the current size selection. Every search replaces the previous result
//! wholesale; a failed search leaves an empty result and a notice for the user.

use crate::backend::{Product, ScraperStatus, SearchBackend, SearchResult};
use crate::filters::{filter_by_size, SizeSelection};
use crate::sizes::compute_size_order;
use tracing::{debug, error, info};

/// Message shown to the user when a search fails for any reason.
pub const SEARCH_FAILED_NOTICE: &str = "Error: Kan geen verbinding maken met backend.";

pub struct SearchSession<B> {
    backend: B,
    query: String,
    result: SearchResult,
    loading: bool,
    selected_size: SizeSelection,
    available_sizes: Vec<String>,
    notice: Option<String>,
}

impl<B: SearchBackend> SearchSession<B> {
    /// Creates an empty session on top of a backend.
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            query: String::new(),
            result: SearchResult::default(),
            loading: false,
            selected_size: SizeSelection::All,
            available_sizes: Vec::new(),
            notice: None,
        }
    }

    /// Runs a search and replaces the session's results.
    ///
    /// Blank queries are ignored. Backend, connectivity and decoding failures
    /// are logged and turned into [`SEARCH_FAILED_NOTICE`]; they never escape.
    pub async fn search(&mut self, query: &str) {
        let query = query.trim();
        if query.is_empty() {
            debug!("Ignoring empty query");
            return;
        }

        self.query = query.to_string();
        self.loading = true;
        self.notice = None;
        self.result = SearchResult::default();
        self.available_sizes.clear();

        match self.backend.search(query).await {
            Ok(result) => {
                info!(
                    "Received {} products ({}/{} sources succeeded)",
                    result.count(),
                    result.successful_sources(),
                    result.scraper_statuses.len()
                );
                self.available_sizes = compute_size_order(&result.products);
                self.result = result;
            }
            Err(err) => {
                error!("Search for '{}' failed: {}", query, err);
                self.notice = Some(SEARCH_FAILED_NOTICE.to_string());
            }
        }

        self.loading = false;
    }

    /// Changes the size selection. Results are not refetched.
    pub fn select_size(&mut self, selection: SizeSelection) {
        debug!("Selecting size: {}", selection);
        self.selected_size = selection;
    }

    /// Products visible under the current size selection.
    pub fn filtered(&self) -> Vec<&Product> {
        filter_by_size(&self.result.products, &self.selected_size)
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Last query that reached the backend.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// All products from the last search.
    pub fn products(&self) -> &[Product] {
        &self.result.products
    }

    pub fn scraper_statuses(&self) -> &[ScraperStatus] {
        &self.result.scraper_statuses
    }

    pub fn result(&self) -> &SearchResult {
        &self.result
    }

    /// Distinct sizes in display order.
    pub fn available_sizes(&self) -> &[String] {
        &self.available_sizes
    }

    pub fn selected_size(&self) -> &SizeSelection {
        &self.selected_size
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// User-facing notice left by the last failed search.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }
}
