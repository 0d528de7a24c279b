//! Display derivations for a single product card.

use crate::backend::{Product, UnitType};

/// Shown instead of a product image that is missing or unusable.
pub const IMAGE_PLACEHOLDER: &str = "🥤";

/// Shown when a product has no volume label.
pub const NO_VOLUME: &str = "—";

/// Unit the per-liter price column is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitLabel {
    PerLiter,
    PerKg,
}

impl UnitLabel {
    /// Guesses the unit from a volume label: liquids per liter, weights per kg.
    pub fn from_volume(volume: &str) -> Option<Self> {
        let v = volume.to_lowercase();

        if v.contains('l') {
            Some(UnitLabel::PerLiter)
        } else if v.contains("kg") || v.contains('g') {
            Some(UnitLabel::PerKg)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UnitLabel::PerLiter => "per liter",
            UnitLabel::PerKg => "per kg",
        }
    }
}

impl std::fmt::Display for UnitLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Noun for one item of a multi-pack (Dutch, as printed on the shelf).
pub fn pack_noun(unit_type: Option<UnitType>) -> &'static str {
    match unit_type {
        Some(UnitType::Cl) | Some(UnitType::Ml) => "blik",
        Some(UnitType::L) => "fles",
        None => "stuk",
    }
}

/// Formats a euro amount with two decimals.
pub fn euro(amount: f64) -> String {
    format!("€{:.2}", amount)
}

/// Everything a renderer needs to draw one product, derived once.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductCard<'a> {
    pub product: &'a Product,
    pub unit_label: Option<UnitLabel>,
    /// Image URL, or `None` when the placeholder glyph should be shown
    pub image: Option<&'a str>,
    /// Logo URL, or `None` when the store name should be shown instead
    pub logo: Option<&'a str>,
}

impl<'a> ProductCard<'a> {
    pub fn new(product: &'a Product) -> Self {
        let image = Some(product.image.as_str()).filter(|url| url.starts_with("http"));
        let logo = Some(product.logo.as_str()).filter(|url| !url.is_empty());

        Self { product, unit_label: UnitLabel::from_volume(&product.volume), image, logo }
    }

    pub fn name(&self) -> &str {
        &self.product.name
    }

    /// Store badge text used when no logo is available.
    pub fn store_badge(&self) -> String {
        self.product.store.to_uppercase()
    }

    /// Image URL or the placeholder glyph.
    pub fn image_or_placeholder(&self) -> &str {
        self.image.unwrap_or(IMAGE_PLACEHOLDER)
    }

    /// Logo URL or the store badge.
    pub fn logo_or_badge(&self) -> String {
        match self.logo {
            Some(url) => url.to_string(),
            None => self.store_badge(),
        }
    }

    /// Volume label, or a dash when the product has none.
    pub fn volume(&self) -> &str {
        if self.product.volume.is_empty() {
            NO_VOLUME
        } else {
            &self.product.volume
        }
    }

    pub fn price(&self) -> String {
        euro(self.product.price)
    }

    /// Price per liter/kg with its unit, when both are known.
    pub fn unit_price(&self) -> Option<(String, UnitLabel)> {
        let per_liter = self.product.price_per_liter?;
        let label = self.unit_label?;
        Some((euro(per_liter), label))
    }

    /// Unit price text, "N/A" when unavailable.
    pub fn unit_price_text(&self) -> String {
        match self.unit_price() {
            Some((price, label)) => format!("{} {}", price, label),
            None => "N/A".to_string(),
        }
    }

    /// Per-item price for multi-packs, e.g. "€0.99 per blik".
    pub fn pack_price_text(&self) -> Option<String> {
        if !self.product.is_multipack() {
            return None;
        }

        let count = self.product.unit_count?;
        let per_item = self.product.price_per_unit.unwrap_or(self.product.price / f64::from(count));

        Some(format!("{} per {}", euro(per_item), pack_noun(self.product.unit_type)))
    }
}
