use serde::{Deserialize, Serialize};

use crate::models::{
    AdSettings, AnalyticsSettings, Announcement, Category, Link, Product, Profile, SocialLink,
};

/// Everything the page renders, stored under a single key.
///
/// `Default` reproduces the original starter page: a placeholder profile
/// with two example links, ads and analytics off.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteData {
    #[serde(default)]
    pub profile: Profile,
    #[serde(default)]
    pub links: Vec<Link>,
    #[serde(default)]
    pub social_links: Vec<SocialLink>,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub announcement: Announcement,
    #[serde(default)]
    pub ads: AdSettings,
    #[serde(default)]
    pub analytics: AnalyticsSettings,
}

impl Default for SiteData {
    fn default() -> Self {
        let mut website = Link::new("My Website", "https://example.com");
        website.id = 1;
        website.description = "Check out my main website".to_string();
        website.icon = "globe".to_string();

        let mut instagram = Link::new("Instagram", "https://instagram.com/username");
        instagram.id = 2;
        instagram.description = "Follow me on Instagram".to_string();
        instagram.icon = "instagram".to_string();

        Self {
            profile: Profile::default(),
            links: vec![website, instagram],
            social_links: Vec::new(),
            categories: Vec::new(),
            products: Vec::new(),
            announcement: Announcement::default(),
            ads: AdSettings::default(),
            analytics: AnalyticsSettings::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_site_has_starter_links() {
        let data = SiteData::default();
        assert_eq!(data.links.len(), 2);
        assert_eq!(data.links[0].title, "My Website");
        assert!(!data.ads.enabled);
        assert!(!data.analytics.enabled);
    }

    #[test]
    fn test_round_trips_through_json() {
        let data = SiteData::default();
        let json = serde_json::to_string(&data).unwrap();
        assert!(json.contains("\"socialLinks\":"));
        assert!(json.contains("\"backgroundColor\":"));

        let back: SiteData = serde_json::from_str(&json).unwrap();
        assert_eq!(back.links.len(), 2);
    }

    #[test]
    fn test_deserializes_minimal_legacy_payload() {
        // An older deployment may have stored only profile and links
        let data: SiteData = serde_json::from_str(
            r#"{"profile":{"name":"A","bio":"B"},"links":[]}"#,
        )
        .unwrap();
        assert_eq!(data.profile.name, "A");
        assert!(data.categories.is_empty());
        assert!(!data.announcement.enabled);
    }
}
