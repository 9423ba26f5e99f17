use serde::{Deserialize, Serialize};

fn default_true() -> bool {
    true
}

fn default_product_category() -> String {
    "General".to_string()
}

/// An Amazon affiliate product card.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(default)]
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_url: String,
    pub affiliate_url: String,
    /// Display price as entered by the admin, e.g. "$24.99"
    #[serde(default)]
    pub price: String,
    #[serde(default = "default_product_category")]
    pub category: String,
    #[serde(default)]
    pub featured: bool,
    #[serde(default = "default_true")]
    pub visible: bool,
    /// Extracted from the affiliate URL when recognizable
    #[serde(default)]
    pub asin: Option<String>,
}

impl Product {
    pub fn new(title: impl Into<String>, affiliate_url: impl Into<String>) -> Self {
        Self {
            id: 0,
            title: title.into(),
            description: String::new(),
            image_url: String::new(),
            affiliate_url: affiliate_url.into(),
            price: String::new(),
            category: default_product_category(),
            featured: false,
            visible: true,
            asin: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_serializes_with_camel_case_keys() {
        let product = Product::new("Widget", "https://www.amazon.com/dp/B000123456");
        let json = serde_json::to_string(&product).unwrap();
        assert!(json.contains("\"affiliateUrl\":"));
        assert!(json.contains("\"imageUrl\":"));
    }

    #[test]
    fn test_product_defaults_on_deserialize() {
        let product: Product = serde_json::from_str(
            r#"{"id":1,"title":"Widget","affiliateUrl":"https://amzn.to/abc"}"#,
        )
        .unwrap();
        assert_eq!(product.category, "General");
        assert!(product.visible);
        assert!(!product.featured);
    }
}
