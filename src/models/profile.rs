use serde::{Deserialize, Serialize};

/// Page identity: name, bio, avatar, and page styling.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    pub bio: String,
    #[serde(default)]
    pub avatar: String,
    /// "gradient", "solid", or "image"
    #[serde(default = "default_background_type")]
    pub background_type: String,
    #[serde(default = "default_background_color")]
    pub background_color: String,
    #[serde(default)]
    pub background_image: String,
    #[serde(default = "default_theme")]
    pub theme: String,
}

fn default_background_type() -> String {
    "gradient".to_string()
}

fn default_background_color() -> String {
    "#667eea".to_string()
}

fn default_theme() -> String {
    "modern".to_string()
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "Your Name".to_string(),
            bio: "Welcome to my link in bio!".to_string(),
            avatar: String::new(),
            background_type: default_background_type(),
            background_color: default_background_color(),
            background_image: String::new(),
            theme: default_theme(),
        }
    }
}

/// A social platform icon link shown under the profile header.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLink {
    /// Platform identifier, e.g. "instagram", "twitter", "youtube"
    pub platform: String,
    pub url: String,
}
