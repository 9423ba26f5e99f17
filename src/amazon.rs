//! Amazon affiliate URL handling: ASIN extraction, marketplace URL
//! detection, affiliate tag rewriting, and product form validation.

use std::sync::OnceLock;

use regex::Regex;
use url::Url;

use crate::models::Product;

/// Marketplace hosts recognized as Amazon links
const AMAZON_DOMAINS: [&str; 11] = [
    "amazon.com",
    "amazon.co.uk",
    "amazon.ca",
    "amazon.de",
    "amazon.fr",
    "amazon.it",
    "amazon.es",
    "amazon.in",
    "amazon.co.jp",
    "amzn.to",
    "amzn.eu",
];

fn asin_patterns() -> &'static [Regex; 5] {
    static PATTERNS: OnceLock<[Regex; 5]> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        [
            Regex::new(r"/dp/([A-Z0-9]{10})").expect("Invalid regex"),
            Regex::new(r"/product/([A-Z0-9]{10})").expect("Invalid regex"),
            Regex::new(r"/gp/product/([A-Z0-9]{10})").expect("Invalid regex"),
            Regex::new(r"/exec/obidos/ASIN/([A-Z0-9]{10})").expect("Invalid regex"),
            Regex::new(r"amazon\.com/([A-Z0-9]{10})").expect("Invalid regex"),
        ]
    })
}

/// Extract the 10-character ASIN from an Amazon product URL.
pub fn extract_asin(url: &str) -> Option<String> {
    if url.is_empty() {
        return None;
    }
    asin_patterns()
        .iter()
        .find_map(|pattern| pattern.captures(url))
        .map(|caps| caps[1].to_string())
}

/// Whether the URL points at a recognized Amazon marketplace.
pub fn is_amazon_url(url: &str) -> bool {
    let Ok(parsed) = Url::parse(url) else {
        return false;
    };
    let Some(host) = parsed.host_str() else {
        return false;
    };
    AMAZON_DOMAINS
        .iter()
        .any(|domain| host == *domain || host.ends_with(&format!(".{}", domain)))
}

/// Rewrite an Amazon URL to carry the given affiliate tag, replacing any
/// existing tag. Non-Amazon or unparseable input passes through.
pub fn format_affiliate_url(url: &str, affiliate_tag: &str) -> String {
    if !is_amazon_url(url) {
        return url.to_string();
    }
    let Ok(mut parsed) = Url::parse(url) else {
        return url.to_string();
    };

    let kept: Vec<(String, String)> = parsed
        .query_pairs()
        .filter(|(k, _)| k != "tag")
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();

    parsed.set_query(None);
    if !kept.is_empty() || !affiliate_tag.is_empty() {
        let mut pairs = parsed.query_pairs_mut();
        for (k, v) in &kept {
            pairs.append_pair(k, v);
        }
        if !affiliate_tag.is_empty() {
            pairs.append_pair("tag", affiliate_tag);
        }
    }
    parsed.to_string()
}

/// Validate a product form the way the admin panel reports it: a list of
/// human-readable problems, empty when the product is acceptable.
pub fn validate_product(product: &Product) -> Vec<String> {
    let mut errors = Vec::new();

    if product.title.trim().is_empty() {
        errors.push("Title is required".to_string());
    }

    if product.affiliate_url.trim().is_empty() {
        errors.push("Affiliate URL is required".to_string());
    } else if !is_amazon_url(&product.affiliate_url) {
        errors.push("URL must be a valid Amazon link".to_string());
    }

    if !product.image_url.trim().is_empty() && Url::parse(&product.image_url).is_err() {
        errors.push("Image URL must be a valid URL".to_string());
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_asin_from_each_pattern() {
        for url in [
            "https://www.amazon.com/dp/B0ABCDEFGH",
            "https://www.amazon.com/some-product/product/B0ABCDEFGH",
            "https://www.amazon.com/gp/product/B0ABCDEFGH?ref=nav",
            "https://www.amazon.com/exec/obidos/ASIN/B0ABCDEFGH",
            "https://amazon.com/B0ABCDEFGH",
        ] {
            assert_eq!(extract_asin(url).as_deref(), Some("B0ABCDEFGH"), "{}", url);
        }
    }

    #[test]
    fn test_extract_asin_rejects_non_product_urls() {
        assert!(extract_asin("https://www.amazon.com/gp/cart").is_none());
        assert!(extract_asin("https://example.com/dp/B0ABCDEFGH-ish").is_some());
        assert!(extract_asin("").is_none());
    }

    #[test]
    fn test_is_amazon_url_matches_marketplaces() {
        assert!(is_amazon_url("https://www.amazon.com/dp/B0ABCDEFGH"));
        assert!(is_amazon_url("https://amzn.to/3xyz"));
        assert!(is_amazon_url("https://www.amazon.co.uk/dp/B0ABCDEFGH"));
        assert!(!is_amazon_url("https://example.com/amazon.com"));
        assert!(!is_amazon_url("not a url"));
    }

    #[test]
    fn test_format_affiliate_url_replaces_tag() {
        let url = "https://www.amazon.com/dp/B0ABCDEFGH?tag=oldtag-20&ref=nav";
        let formatted = format_affiliate_url(url, "mytag-20");
        assert!(formatted.contains("tag=mytag-20"));
        assert!(!formatted.contains("oldtag"));
        assert!(formatted.contains("ref=nav"));
    }

    #[test]
    fn test_format_affiliate_url_passes_through_non_amazon() {
        assert_eq!(
            format_affiliate_url("https://example.com/x", "mytag-20"),
            "https://example.com/x"
        );
    }

    #[test]
    fn test_format_affiliate_url_with_empty_tag_strips_existing() {
        let formatted =
            format_affiliate_url("https://www.amazon.com/dp/B0ABCDEFGH?tag=oldtag-20", "");
        assert!(!formatted.contains("tag="));
    }

    #[test]
    fn test_validate_product_reports_each_problem() {
        let mut product = Product::new("", "");
        product.image_url = "not a url".to_string();
        let errors = validate_product(&product);
        assert_eq!(
            errors,
            vec![
                "Title is required",
                "Affiliate URL is required",
                "Image URL must be a valid URL",
            ]
        );

        product.title = "Widget".to_string();
        product.affiliate_url = "https://example.com/widget".to_string();
        product.image_url = String::new();
        assert_eq!(validate_product(&product), vec!["URL must be a valid Amazon link"]);

        product.affiliate_url = "https://www.amazon.com/dp/B0ABCDEFGH".to_string();
        assert!(validate_product(&product).is_empty());
    }
}
