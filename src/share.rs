//! Share link building for the product share sheet.
//!
//! Pure URL builders; the rendering shell decides whether to open a
//! popup, a new tab, or the mail client.

use crate::models::Product;

/// Canonical public URL for a product page.
pub fn product_url(base_url: &str, product_id: u64) -> String {
    format!("{}/product/{}", base_url.trim_end_matches('/'), product_id)
}

/// Tweet intent with the text and link in the tweet body.
pub fn twitter_share_url(text: &str, url: &str) -> String {
    format!(
        "https://twitter.com/intent/tweet?text={}",
        urlencoding::encode(&format!("{} {}", text, url))
    )
}

pub fn facebook_share_url(url: &str) -> String {
    format!(
        "https://www.facebook.com/sharer/sharer.php?u={}",
        urlencoding::encode(url)
    )
}

pub fn whatsapp_share_url(text: &str) -> String {
    format!("https://wa.me/?text={}", urlencoding::encode(text))
}

pub fn email_share_url(subject: &str, body: &str) -> String {
    format!(
        "mailto:?subject={}&body={}",
        urlencoding::encode(subject),
        urlencoding::encode(body)
    )
}

/// Everything the share sheet needs for one product.
#[derive(Debug, Clone)]
pub struct ShareData {
    pub url: String,
    pub text: String,
    pub email_subject: String,
    pub email_body: String,
}

impl ShareData {
    pub fn for_product(product: &Product, base_url: &str) -> Self {
        let url = product_url(base_url, product.id);
        Self {
            text: format!("Check out this great product: {}", product.title),
            email_subject: format!("Great Product: {}", product.title),
            email_body: format!(
                "I found this amazing product you might like:\n\n{}\n{}\n\nView it here: {}",
                product.title, product.description, url
            ),
            url,
        }
    }
}
