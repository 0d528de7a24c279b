//! Package size labels: parsing to liters and display ordering.

use crate::backend::Product;
use std::collections::HashSet;
use std::sync::LazyLock;

static SIZE_PATTERN: LazyLock<regex_lite::Regex> =
    LazyLock::new(|| regex_lite::Regex::new(r"(?i)(\d+(?:[.,]\d+)?)\s?(ml|cl|l)").unwrap());

/// Parses the first `<number> <l|cl|ml>` occurrence of a label into liters.
///
/// Accepts a decimal comma ("1,5L") as well as a decimal point.
pub fn parse_liters(label: &str) -> Option<f64> {
    let caps = SIZE_PATTERN.captures(label)?;
    let amount: f64 = caps[1].replace(',', ".").parse().ok()?;

    let liters = match caps[2].to_lowercase().as_str() {
        "ml" => amount / 1000.0,
        "cl" => amount / 100.0,
        _ => amount,
    };

    Some(liters)
}

/// Sort key for a size label. Labels without a recognizable size sort as zero.
pub fn size_key(label: &str) -> f64 {
    parse_liters(label).unwrap_or(0.0)
}

/// Sorts labels by liter-equivalent, keeping the relative order of equal keys.
pub fn sort_size_labels(labels: &mut [String]) {
    labels.sort_by(|a, b| size_key(a).total_cmp(&size_key(b)));
}

/// Distinct volume labels of products with a known volume, smallest first.
pub fn compute_size_order(products: &[Product]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut labels: Vec<String> = products
        .iter()
        .filter(|p| p.has_volume())
        .filter(|p| seen.insert(p.volume.as_str()))
        .map(|p| p.volume.clone())
        .collect();

    sort_size_labels(&mut labels);
    labels
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_product(volume: &str, liter_value: f64) -> Product {
        Product {
            name: format!("Cola {}", volume),
            store: "Colruyt".to_string(),
            logo: String::new(),
            image: String::new(),
            link: String::new(),
            volume: volume.to_string(),
            liter_value,
            price: 1.0,
            price_per_liter: None,
            unit_count: None,
            unit_size: None,
            unit_type: None,
            price_per_unit: None,
        }
    }

    fn labels(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_liters_units() {
        assert_eq!(parse_liters("1.5L"), Some(1.5));
        assert_eq!(parse_liters("33CL"), Some(0.33));
        assert_eq!(parse_liters("500ML"), Some(0.5));
        assert_eq!(parse_liters("500 ml"), Some(0.5));
        assert_eq!(parse_liters("2 l"), Some(2.0));
    }

    #[test]
    fn test_parse_liters_case_insensitive() {
        assert_eq!(parse_liters("33cl"), Some(0.33));
        assert_eq!(parse_liters("33Cl"), Some(0.33));
        assert_eq!(parse_liters("1l"), Some(1.0));
    }

    #[test]
    fn test_parse_liters_decimal_comma() {
        assert_eq!(parse_liters("1,5L"), Some(1.5));
        assert_eq!(parse_liters("0,75 l"), Some(0.75));
    }

    #[test]
    fn test_parse_liters_multipack_uses_item_size() {
        assert_eq!(parse_liters("6 x 33 cl"), Some(0.33));
        assert_eq!(parse_liters("24x25cl"), Some(0.25));
    }

    #[test]
    fn test_parse_liters_unmatched() {
        assert_eq!(parse_liters(""), None);
        assert_eq!(parse_liters("500g"), None);
        assert_eq!(parse_liters("1 kg"), None);
        assert_eq!(parse_liters("family pack"), None);
        assert_eq!(size_key("family pack"), 0.0);
    }

    #[test]
    fn test_parse_liters_only_one_space() {
        assert_eq!(parse_liters("33  cl"), None);
    }

    #[test]
    fn test_sort_by_liter_value_not_lexical() {
        let mut sizes = labels(&["1.5L", "33CL", "500ML"]);
        sort_size_labels(&mut sizes);
        assert_eq!(sizes, labels(&["33CL", "500ML", "1.5L"]));
    }

    #[test]
    fn test_sort_unmatched_first() {
        let mut sizes = labels(&["1L", "pack", "25CL"]);
        sort_size_labels(&mut sizes);
        assert_eq!(sizes, labels(&["pack", "25CL", "1L"]));
    }

    #[test]
    fn test_sort_is_stable_for_equal_values() {
        let mut sizes = labels(&["1L", "100CL", "1000ML", "50CL"]);
        sort_size_labels(&mut sizes);
        assert_eq!(sizes, labels(&["50CL", "1L", "100CL", "1000ML"]));

        let mut sizes = labels(&["1000ML", "1L", "100CL"]);
        sort_size_labels(&mut sizes);
        assert_eq!(sizes, labels(&["1000ML", "1L", "100CL"]));
    }

    #[test]
    fn test_sort_is_idempotent() {
        let mut once = labels(&["2L", "33CL", "pack", "1,5L", "25 cl", "500ML"]);
        sort_size_labels(&mut once);

        let mut twice = once.clone();
        sort_size_labels(&mut twice);

        assert_eq!(once, twice);
    }

    #[test]
    fn test_compute_size_order() {
        let products = vec![
            make_product("1.5L", 1.5),
            make_product("33CL", 0.33),
            make_product("500ML", 0.5),
        ];

        assert_eq!(compute_size_order(&products), labels(&["33CL", "500ML", "1.5L"]));
    }

    #[test]
    fn test_compute_size_order_distinct() {
        let products = vec![
            make_product("33CL", 0.33),
            make_product("1.5L", 1.5),
            make_product("33CL", 0.33),
            make_product("1.5L", 1.5),
        ];

        assert_eq!(compute_size_order(&products), labels(&["33CL", "1.5L"]));
    }

    #[test]
    fn test_compute_size_order_skips_unknown_volume() {
        let products = vec![
            make_product("1L", 1.0),
            make_product("500g", 0.0),
            make_product("", 0.0),
        ];

        assert_eq!(compute_size_order(&products), labels(&["1L"]));
    }

    #[test]
    fn test_compute_size_order_empty() {
        assert!(compute_size_order(&[]).is_empty());
    }
}
