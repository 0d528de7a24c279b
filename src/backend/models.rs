//! Data models for search responses returned by the price-comparison backend.

use serde::{Deserialize, Deserializer, Serialize};

/// Unit in which a single item of a pack is measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum UnitType {
    Ml,
    Cl,
    L,
}

impl std::str::FromStr for UnitType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ml" => Ok(UnitType::Ml),
            "cl" => Ok(UnitType::Cl),
            "l" => Ok(UnitType::L),
            _ => Err(format!("Unknown unit type: {}", s)),
        }
    }
}

impl std::fmt::Display for UnitType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnitType::Ml => write!(f, "ML"),
            UnitType::Cl => write!(f, "CL"),
            UnitType::L => write!(f, "L"),
        }
    }
}

/// A product listing from one store, already normalized by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    /// Store display name (e.g. "Colruyt")
    #[serde(default, deserialize_with = "null_as_empty")]
    pub store: String,
    /// Store logo URL
    #[serde(default, deserialize_with = "null_as_empty")]
    pub logo: String,
    /// Product image URL
    #[serde(default, deserialize_with = "null_as_empty")]
    pub image: String,
    /// Product detail page
    #[serde(default, deserialize_with = "null_as_empty")]
    pub link: String,
    /// Free-text size label ("1.5L", "33CL", "6 x 33 cl")
    #[serde(default, deserialize_with = "null_as_empty")]
    pub volume: String,
    /// Total volume in liters, 0 when unknown
    #[serde(default, deserialize_with = "null_as_zero")]
    pub liter_value: f64,
    /// Price of the listing as sold
    pub price: f64,
    #[serde(default, deserialize_with = "positive")]
    pub price_per_liter: Option<f64>,
    /// Items in the pack
    #[serde(default, deserialize_with = "positive_count")]
    pub unit_count: Option<u32>,
    /// Size of one item, measured in `unit_type`
    #[serde(default, deserialize_with = "positive")]
    pub unit_size: Option<f64>,
    #[serde(default, deserialize_with = "lenient_unit_type")]
    pub unit_type: Option<UnitType>,
    #[serde(default, deserialize_with = "positive")]
    pub price_per_unit: Option<f64>,
}

impl Product {
    /// Returns true if the backend could resolve a volume for this listing.
    pub fn has_volume(&self) -> bool {
        self.liter_value > 0.0
    }

    /// Returns true if the listing is a multi-pack.
    pub fn is_multipack(&self) -> bool {
        self.unit_count.is_some_and(|n| n > 1)
    }
}

/// Outcome of one backend data source for the current query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScraperStatus {
    pub name: String,
    pub success: bool,
    /// Number of products this source contributed
    #[serde(default)]
    pub count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Seconds the source took to answer
    #[serde(default)]
    pub elapsed_time: f64,
}

/// Results of one query execution. Replaced wholesale by the next search.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub products: Vec<Product>,
    #[serde(default)]
    pub scraper_statuses: Vec<ScraperStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_elapsed_time: Option<f64>,
    #[serde(default)]
    pub debug_mode: bool,
}

impl SearchResult {
    /// Returns number of products.
    pub fn count(&self) -> usize {
        self.products.len()
    }

    /// Returns true if no products were found.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Number of sources that answered successfully.
    pub fn successful_sources(&self) -> usize {
        self.scraper_statuses.iter().filter(|s| s.success).count()
    }
}

/// Parses a search response body in either the envelope or bare-array shape.
///
/// An object carrying a `products` key is the envelope; anything else must be
/// a bare product list, as older backends answered.
pub fn parse_search_body(body: &str) -> serde_json::Result<SearchResult> {
    let value: serde_json::Value = serde_json::from_str(body)?;

    if value.get("products").is_some() {
        serde_json::from_value(value)
    } else {
        let products: Vec<Product> = serde_json::from_value(value)?;
        Ok(SearchResult { products, ..Default::default() })
    }
}

// The backend encodes "unknown" as 0, "" or null instead of omitting the field.

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_as_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or_default())
}

fn positive<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<f64>::deserialize(deserializer)?;
    Ok(value.filter(|v| *v > 0.0))
}

fn positive_count<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<u32>::deserialize(deserializer)?;
    Ok(value.filter(|v| *v > 0))
}

fn lenient_unit_type<'de, D>(deserializer: D) -> Result<Option<UnitType>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.and_then(|s| s.parse().ok()))
}
