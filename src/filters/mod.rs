//! Product filtering system with composable filters.

pub mod size;

use crate::backend::Product;

pub use size::{filter_by_size, SizeFilter, SizeSelection};

/// Trait for filtering products.
pub trait Filter: Send + Sync {
    /// Returns true if the product passes the filter.
    fn matches(&self, product: &Product) -> bool;

    /// Returns a description of this filter.
    fn description(&self) -> String;
}

/// A chain of filters that must all pass.
pub struct FilterChain {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterChain {
    /// Creates an empty filter chain.
    pub fn new() -> Self {
        Self { filters: Vec::new() }
    }

    /// Adds a filter to the chain.
    pub fn add(&mut self, filter: impl Filter + 'static) -> &mut Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Checks if a product passes all filters.
    pub fn matches(&self, product: &Product) -> bool {
        self.filters.iter().all(|f| f.matches(product))
    }

    /// Returns the products that pass, borrowed and in their original order.
    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        products.iter().filter(|p| self.matches(p)).collect()
    }

    /// Returns true if no filters are configured.
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Returns the number of filters.
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// Returns descriptions of all filters.
    pub fn descriptions(&self) -> Vec<String> {
        self.filters.iter().map(|f| f.description()).collect()
    }
}

impl Default for FilterChain {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for constructing a FilterChain from configuration.
pub struct FilterChainBuilder {
    chain: FilterChain,
}

impl FilterChainBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self { chain: FilterChain::new() }
    }

    /// Adds a size filter unless every size is selected.
    pub fn size(mut self, selection: &SizeSelection) -> Self {
        if *selection != SizeSelection::All {
            self.chain.add(SizeFilter::new(selection.clone()));
        }
        self
    }

    /// Builds the filter chain.
    pub fn build(self) -> FilterChain {
        self.chain
    }
}

impl Default for FilterChainBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_product(volume: &str) -> Product {
        Product {
            name: format!("Water {}", volume),
            store: "Lidl".to_string(),
            logo: String::new(),
            image: String::new(),
            link: String::new(),
            volume: volume.to_string(),
            liter_value: 1.0,
            price: 0.5,
            price_per_liter: None,
            unit_count: None,
            unit_size: None,
            unit_type: None,
            price_per_unit: None,
        }
    }

    #[test]
    fn test_filter_chain_new() {
        let chain = FilterChain::new();
        assert!(chain.is_empty());
        assert_eq!(chain.len(), 0);
    }

    #[test]
    fn test_filter_chain_empty_matches_all() {
        let chain = FilterChain::default();
        assert!(chain.matches(&make_product("1L")));
        assert!(chain.matches(&make_product("")));
    }

    #[test]
    fn test_filter_chain_apply() {
        let mut chain = FilterChain::new();
        chain.add(SizeFilter::exact("1L"));

        let products = vec![make_product("1L"), make_product("50CL"), make_product("1L")];
        let filtered = chain.apply(&products);

        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|p| p.volume == "1L"));
    }

    #[test]
    fn test_filter_chain_all_must_pass() {
        let mut chain = FilterChain::new();
        chain.add(SizeFilter::exact("1L"));
        chain.add(SizeFilter::exact("50CL"));

        assert_eq!(chain.len(), 2);
        assert!(!chain.matches(&make_product("1L")));
        assert!(!chain.matches(&make_product("50CL")));
    }

    #[test]
    fn test_filter_chain_descriptions() {
        let mut chain = FilterChain::new();
        chain.add(SizeFilter::exact("33CL"));

        assert_eq!(chain.descriptions(), vec!["Size: 33CL".to_string()]);
    }

    #[test]
    fn test_builder_skips_all() {
        let chain = FilterChainBuilder::new().size(&SizeSelection::All).build();
        assert!(chain.is_empty());
    }

    #[test]
    fn test_builder_exact_size() {
        let chain = FilterChainBuilder::default()
            .size(&SizeSelection::Exact("50CL".to_string()))
            .build();

        assert_eq!(chain.len(), 1);
        assert!(chain.matches(&make_product("50CL")));
        assert!(!chain.matches(&make_product("1L")));
    }
}
