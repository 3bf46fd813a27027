//! Parsing of URL fragments and in-page anchor targets.

use crate::catalog::{find_product, ProductRecord};

/// Element ids of product sections end with this suffix, e.g. `payroll-section`.
pub const SECTION_SUFFIX: &str = "-section";

/// Element id of the contact block that "Learn More" scrolls to.
pub const CONTACT_ANCHOR: &str = "contact";

pub fn section_element_id(product_id: &str) -> String {
    format!("{}{}", product_id, SECTION_SUFFIX)
}

pub fn hash_for(product_id: &str) -> String {
    format!("#{}", product_id)
}

/// Strips the leading `#` and surrounding whitespace. An empty fragment is `None`.
pub fn fragment_id(hash: &str) -> Option<&str> {
    let id = hash.trim();
    let id = id.strip_prefix('#').unwrap_or(id).trim();
    if id.is_empty() {
        None
    } else {
        Some(id)
    }
}

/// Resolves a fragment id to a product, accepting both `payroll` and `payroll-section`.
pub fn product_for_target(catalog: &'static [ProductRecord], target: &str) -> Option<&'static ProductRecord> {
    find_product(catalog, target).or_else(|| {
        target
            .strip_suffix(SECTION_SUFFIX)
            .and_then(|id| find_product(catalog, id))
    })
}

#[derive(Debug, Clone, PartialEq)]
pub enum AnchorRoute {
    /// `#` alone, or an empty href.
    Ignore,
    /// Target names a product; select it, then scroll to `target`.
    Product {
        product_id: &'static str,
        target: String,
    },
    /// Any other in-page anchor; just scroll.
    Scroll(String),
}

pub fn route_anchor(catalog: &'static [ProductRecord], href: &str) -> AnchorRoute {
    let Some(target) = fragment_id(href) else {
        return AnchorRoute::Ignore;
    };

    match product_for_target(catalog, target) {
        Some(product) if target == product.id => AnchorRoute::Product {
            product_id: product.id,
            target: section_element_id(product.id),
        },
        Some(product) => AnchorRoute::Product {
            product_id: product.id,
            target: target.to_string(),
        },
        None => AnchorRoute::Scroll(target.to_string()),
    }
}

/// Product shown on page load: the one named by the hash, otherwise the first catalog entry.
pub fn initial_product(catalog: &'static [ProductRecord], hash: &str) -> Option<&'static ProductRecord> {
    fragment_id(hash)
        .and_then(|target| product_for_target(catalog, target))
        .or_else(|| catalog.first())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CATALOG;

    #[test]
    fn fragment_id_strips_hash_and_whitespace() {
        assert_eq!(fragment_id("#payroll"), Some("payroll"));
        assert_eq!(fragment_id("  #lgu "), Some("lgu"));
        assert_eq!(fragment_id("accounting"), Some("accounting"));
        assert_eq!(fragment_id("#"), None);
        assert_eq!(fragment_id(""), None);
        assert_eq!(fragment_id("#   "), None);
    }

    #[test]
    fn section_suffix_is_stripped_for_products() {
        assert_eq!(
            route_anchor(CATALOG, "#payroll-section"),
            AnchorRoute::Product {
                product_id: "payroll",
                target: "payroll-section".to_string(),
            }
        );
    }

    #[test]
    fn bare_product_anchor_scrolls_to_its_section() {
        assert_eq!(
            route_anchor(CATALOG, "#lgu"),
            AnchorRoute::Product {
                product_id: "lgu",
                target: "lgu-section".to_string(),
            }
        );
    }

    #[test]
    fn other_anchors_only_scroll() {
        assert_eq!(route_anchor(CATALOG, "#contact"), AnchorRoute::Scroll("contact".to_string()));
        assert_eq!(
            route_anchor(CATALOG, "#unknown-section"),
            AnchorRoute::Scroll("unknown-section".to_string())
        );
        assert_eq!(route_anchor(CATALOG, "#"), AnchorRoute::Ignore);
    }

    #[test]
    fn initial_product_prefers_known_hash() {
        assert_eq!(initial_product(CATALOG, "#accounting").map(|p| p.id), Some("accounting"));
        assert_eq!(initial_product(CATALOG, "#payroll-section").map(|p| p.id), Some("payroll"));
    }

    #[test]
    fn initial_product_falls_back_to_first_entry() {
        assert_eq!(initial_product(CATALOG, "").map(|p| p.id), Some("lgu"));
        assert_eq!(initial_product(CATALOG, "#").map(|p| p.id), Some("lgu"));
        assert_eq!(initial_product(CATALOG, "#nonsense").map(|p| p.id), Some("lgu"));
        assert_eq!(initial_product(&[], "#lgu"), None);
    }
}
