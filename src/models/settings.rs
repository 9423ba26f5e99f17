use serde::{Deserialize, Serialize};

/// Sticky announcement bar shown at the top of the page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Announcement {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub text: String,
    /// Optional click-through link for the bar
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default = "default_announcement_background")]
    pub background_color: String,
    #[serde(default = "default_announcement_color")]
    pub color: String,
}

fn default_announcement_background() -> String {
    "#fbbf24".to_string()
}

fn default_announcement_color() -> String {
    "#000000".to_string()
}

impl Default for Announcement {
    fn default() -> Self {
        Self {
            enabled: false,
            text: String::new(),
            link: None,
            background_color: default_announcement_background(),
            color: default_announcement_color(),
        }
    }
}

/// A single ad slot on the page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdUnit {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub name: String,
    /// Raw ad network embed code
    #[serde(default)]
    pub code: String,
    /// "top", "middle", or "bottom"
    #[serde(default = "default_ad_position")]
    pub position: String,
    #[serde(default)]
    pub enabled: bool,
}

fn default_ad_position() -> String {
    "bottom".to_string()
}

/// Page-level ad configuration: a master switch plus the unit list.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AdSettings {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub units: Vec<AdUnit>,
}

/// Google Analytics settings. Only the configuration lives here; firing
/// the beacon is the rendering shell's job.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSettings {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub google_analytics_id: String,
}
