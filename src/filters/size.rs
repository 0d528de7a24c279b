//! Package size filter.

use super::{Filter, FilterChainBuilder};
use crate::backend::Product;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::debug;

/// Which package size the user wants to see.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SizeSelection {
    /// Every product, regardless of size
    #[default]
    All,
    /// Only products whose volume label is exactly this
    Exact(String),
}

impl SizeSelection {
    /// Returns true if the selection lets a product with this volume label through.
    pub fn accepts(&self, volume: &str) -> bool {
        match self {
            SizeSelection::All => true,
            SizeSelection::Exact(label) => label == volume,
        }
    }
}

impl std::str::FromStr for SizeSelection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            Ok(SizeSelection::All)
        } else {
            Ok(SizeSelection::Exact(s.to_string()))
        }
    }
}

impl std::fmt::Display for SizeSelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SizeSelection::All => write!(f, "all"),
            SizeSelection::Exact(label) => write!(f, "{}", label),
        }
    }
}

impl Serialize for SizeSelection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SizeSelection {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Keeps products whose volume label matches the selection.
pub struct SizeFilter {
    selection: SizeSelection,
}

impl SizeFilter {
    pub fn new(selection: SizeSelection) -> Self {
        Self { selection }
    }

    /// Creates a filter for one exact size label.
    pub fn exact(label: impl Into<String>) -> Self {
        Self::new(SizeSelection::Exact(label.into()))
    }
}

impl Filter for SizeFilter {
    fn matches(&self, product: &Product) -> bool {
        self.selection.accepts(&product.volume)
    }

    fn description(&self) -> String {
        format!("Size: {}", self.selection)
    }
}

/// Returns the products visible under a size selection, in their original order.
pub fn filter_by_size<'a>(products: &'a [Product], selection: &SizeSelection) -> Vec<&'a Product> {
    let filters = FilterChainBuilder::new().size(selection).build();
    if !filters.is_empty() {
        debug!("Active filters: {}", filters.descriptions().join(", "));
    }

    filters.apply(products)
}
