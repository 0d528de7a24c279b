//! Search command implementation.

use super::CommandOutput;
use crate::backend::{BackendClient, SearchBackend};
use crate::config::Config;
use crate::format::Formatter;
use crate::session::SearchSession;
use anyhow::{Context, Result};
use tracing::{debug, info};

/// Executes a product search and renders the cards.
pub struct SearchCommand {
    config: Config,
}

impl SearchCommand {
    /// Creates a new search command.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Executes the search and returns formatted output.
    pub async fn execute(&self, query: &str) -> Result<CommandOutput> {
        let client = BackendClient::new(&self.config).context("Failed to create HTTP client")?;

        Ok(self.execute_with_backend(client, query).await)
    }

    /// Executes the search with a provided backend (for testing).
    pub async fn execute_with_backend<B: SearchBackend>(
        &self,
        backend: B,
        query: &str,
    ) -> CommandOutput {
        info!("Searching for: {}", query);

        let mut session = SearchSession::new(backend);
        session.search(query).await;

        session.select_size(self.config.size.clone());

        let visible = session.filtered();
        debug!(
            "Showing {} of {} products (sizes: {})",
            visible.len(),
            session.products().len(),
            session.available_sizes().join(", ")
        );

        let formatter = Formatter::new(self.config.format);
        let mut body = formatter.format_products(&visible);

        if self.config.show_status && !session.scraper_statuses().is_empty() {
            body.push_str("\n\n");
            body.push_str(&formatter.format_statuses(session.result()));
        }

        CommandOutput { body, notice: session.notice().map(str::to_string) }
    }
}
