//! Sizes command: lists the package sizes found for a query.

use super::CommandOutput;
use crate::backend::{BackendClient, SearchBackend};
use crate::config::Config;
use crate::format::Formatter;
use crate::session::SearchSession;
use anyhow::{Context, Result};
use tracing::info;

/// Runs a search and prints the distinct sizes, smallest first.
pub struct SizesCommand {
    config: Config,
}

impl SizesCommand {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub async fn execute(&self, query: &str) -> Result<CommandOutput> {
        let client = BackendClient::new(&self.config).context("Failed to create HTTP client")?;

        Ok(self.execute_with_backend(client, query).await)
    }

    /// Executes with a provided backend (for testing).
    pub async fn execute_with_backend<B: SearchBackend>(
        &self,
        backend: B,
        query: &str,
    ) -> CommandOutput {
        let mut session = SearchSession::new(backend);
        session.search(query).await;

        info!("Found {} distinct sizes", session.available_sizes().len());

        let body = Formatter::new(self.config.format).format_sizes(session.available_sizes());
        CommandOutput { body, notice: session.notice().map(str::to_string) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{parse_search_body, SearchError, SearchResult};
    use crate::config::OutputFormat;
    use async_trait::async_trait;

    struct MockBackend(&'static str);

    #[async_trait]
    impl SearchBackend for MockBackend {
        async fn search(&self, _query: &str) -> Result<SearchResult, SearchError> {
            Ok(parse_search_body(self.0)?)
        }
    }

    struct UnreachableBackend;

    #[async_trait]
    impl SearchBackend for UnreachableBackend {
        async fn search(&self, _query: &str) -> Result<SearchResult, SearchError> {
            Err(SearchError::Backend { status: 504 })
        }
    }

    const RESPONSE: &str = r#"[
        {"store": "Colruyt", "name": "Spa 1.5L", "price": 0.99, "volume": "1.5L", "liter_value": 1.5},
        {"store": "Aldi", "name": "Spa 33cl", "price": 0.49, "volume": "33CL", "liter_value": 0.33},
        {"store": "Lidl", "name": "Spa 50cl", "price": 0.59, "volume": "500ML", "liter_value": 0.5},
        {"store": "Jumbo", "name": "Spa giftbox", "price": 9.99, "volume": "giftbox", "liter_value": 0}
    ]"#;

    #[tokio::test]
    async fn test_sizes_ordered() {
        let cmd = SizesCommand::new(Config::default());
        let output = cmd.execute_with_backend(MockBackend(RESPONSE), "spa").await;

        assert_eq!(output.body, "33CL\n500ML\n1.5L");
        assert!(output.notice.is_none());
    }

    #[tokio::test]
    async fn test_sizes_json() {
        let config = Config { format: OutputFormat::Json, ..Config::default() };
        let cmd = SizesCommand::new(config);
        let output = cmd.execute_with_backend(MockBackend(RESPONSE), "spa").await;

        let sizes: Vec<String> = serde_json::from_str(&output.body).unwrap();
        assert_eq!(sizes, vec!["33CL", "500ML", "1.5L"]);
    }

    #[tokio::test]
    async fn test_sizes_backend_failure() {
        let cmd = SizesCommand::new(Config::default());
        let output = cmd.execute_with_backend(UnreachableBackend, "spa").await;

        assert!(output.body.is_empty());
        assert!(output.notice.is_some());
    }
}
