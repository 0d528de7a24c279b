//! Output formatting for product cards (table, JSON, markdown, CSV).

use crate::backend::{Product, SearchResult};
use crate::card::ProductCard;
use crate::config::OutputFormat;

/// Formats products and source statuses for output.
pub struct Formatter {
    format: OutputFormat,
}

impl Formatter {
    /// Creates a new formatter.
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Formats one card per product.
    pub fn format_products(&self, products: &[&Product]) -> String {
        if products.is_empty() {
            return match self.format {
                OutputFormat::Json => "[]".to_string(),
                OutputFormat::Csv => self.csv_header(),
                _ => "No products found.".to_string(),
            };
        }

        let cards: Vec<ProductCard> = products.iter().map(|p| ProductCard::new(p)).collect();

        match self.format {
            OutputFormat::Json => self.json_products(products),
            OutputFormat::Table => self.table_products(&cards),
            OutputFormat::Markdown => self.markdown_products(&cards),
            OutputFormat::Csv => self.csv_products(&cards),
        }
    }

    /// Formats the per-source outcome of a search.
    pub fn format_statuses(&self, result: &SearchResult) -> String {
        let statuses = &result.scraper_statuses;

        match self.format {
            OutputFormat::Json => {
                serde_json::to_string_pretty(statuses).unwrap_or_else(|_| "[]".to_string())
            }
            OutputFormat::Csv => {
                let mut lines = vec!["source,success,count,elapsed_time,error".to_string()];
                for status in statuses {
                    lines.push(format!(
                        "{},{},{},{},{}",
                        csv_escape(&status.name),
                        status.success,
                        status.count,
                        status.elapsed_time,
                        status.error.as_deref().map(csv_escape).unwrap_or_default()
                    ));
                }
                lines.join("\n")
            }
            OutputFormat::Table | OutputFormat::Markdown => {
                let mut lines = Vec::new();
                for status in statuses {
                    let mark = if status.success { "✓" } else { "✗" };
                    let mut line = format!(
                        "{} {:<14} {:>4} products  {:>6.2}s",
                        mark, status.name, status.count, status.elapsed_time
                    );
                    if let Some(error) = &status.error {
                        line.push_str(&format!("  ({})", error));
                    }
                    lines.push(line);
                }

                let mut summary =
                    format!("{}/{} sources succeeded", result.successful_sources(), statuses.len());
                if let Some(total) = result.total_elapsed_time {
                    summary.push_str(&format!(" in {:.2}s", total));
                }
                if result.debug_mode {
                    summary.push_str(" (backend in debug mode)");
                }
                lines.push(summary);
                lines.join("\n")
            }
        }
    }

    /// Formats the ordered size labels.
    pub fn format_sizes(&self, sizes: &[String]) -> String {
        match self.format {
            OutputFormat::Json => {
                serde_json::to_string_pretty(sizes).unwrap_or_else(|_| "[]".to_string())
            }
            OutputFormat::Markdown => {
                sizes.iter().map(|s| format!("- {}", s)).collect::<Vec<_>>().join("\n")
            }
            OutputFormat::Table | OutputFormat::Csv => sizes.join("\n"),
        }
    }

    // JSON formatting

    fn json_products(&self, products: &[&Product]) -> String {
        serde_json::to_string_pretty(products).unwrap_or_else(|_| "[]".to_string())
    }

    // Table formatting

    fn table_products(&self, cards: &[ProductCard]) -> String {
        let store_width = 14;
        let size_width = 12;
        let price_width = 9;
        let unit_width = 18;
        let pack_width = 16;
        let name_width = 50;

        let mut lines = Vec::new();

        lines.push(format!(
            "{:<store_width$}  {:<size_width$}  {:>price_width$}  {:>unit_width$}  {:<pack_width$}  {}",
            "Store", "Size", "Price", "Unit price", "Pack", "Name"
        ));
        lines.push(format!(
            "{:-<store_width$}  {:-<size_width$}  {:-<price_width$}  {:-<unit_width$}  {:-<pack_width$}  {:-<name_width$}",
            "", "", "", "", "", ""
        ));

        for card in cards {
            let pack = card.pack_price_text().unwrap_or_default();

            lines.push(format!(
                "{:<store_width$}  {:<size_width$}  {:>price_width$}  {:>unit_width$}  {:<pack_width$}  {}",
                truncate(&card.product.store, store_width),
                truncate(card.volume(), size_width),
                card.price(),
                card.unit_price_text(),
                pack,
                truncate(card.name(), name_width)
            ));
        }

        lines.push(String::new());
        lines.push(format!("Total: {} products", cards.len()));

        lines.join("\n")
    }

    // Markdown formatting

    fn markdown_products(&self, cards: &[ProductCard]) -> String {
        let mut lines = Vec::new();

        lines.push("| Store | Size | Price | Unit price | Pack | Product |".to_string());
        lines.push("|-------|------|-------|------------|------|---------|".to_string());

        for card in cards {
            let name = truncate(card.name(), 40);
            let product = if card.product.link.is_empty() {
                name
            } else {
                format!("[{}]({})", name, card.product.link)
            };

            lines.push(format!(
                "| {} | {} | {} | {} | {} | {} |",
                card.product.store,
                card.volume(),
                card.price(),
                card.unit_price_text(),
                card.pack_price_text().unwrap_or_default(),
                product
            ));
        }

        lines.push(String::new());
        lines.push(format!("*{} products found*", cards.len()));

        lines.join("\n")
    }

    // CSV formatting

    fn csv_header(&self) -> String {
        "store,name,volume,liter_value,price,price_per_liter,unit_count,unit_type,price_per_unit,image,link"
            .to_string()
    }

    fn csv_products(&self, cards: &[ProductCard]) -> String {
        let mut lines = Vec::new();
        lines.push(self.csv_header());

        for card in cards {
            let p = card.product;
            lines.push(format!(
                "{},{},{},{},{},{},{},{},{},{},{}",
                csv_escape(&p.store),
                csv_escape(&p.name),
                csv_escape(&p.volume),
                p.liter_value,
                p.price,
                p.price_per_liter.map(|v| v.to_string()).unwrap_or_default(),
                p.unit_count.map(|v| v.to_string()).unwrap_or_default(),
                p.unit_type.map(|v| v.to_string()).unwrap_or_default(),
                p.price_per_unit.map(|v| v.to_string()).unwrap_or_default(),
                card.image.unwrap_or_default(),
                p.link
            ));
        }

        lines.join("\n")
    }
}

fn csv_escape(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

/// Shortens text to `width` characters, ending in "..." when cut.
fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() > width {
        let kept: String = s.chars().take(width.saturating_sub(3)).collect();
        format!("{}...", kept)
    } else {
        s.to_string()
    }
}
