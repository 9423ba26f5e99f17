use serde::{Deserialize, Serialize};

fn default_true() -> bool {
    true
}

/// A single entry in the visitor-facing link list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    #[serde(default)]
    pub id: u64,
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_true")]
    pub visible: bool,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub category_id: Option<u64>,
    /// Promoted into the "Top Finds" section of the page
    #[serde(default)]
    pub is_top_find: bool,
    #[serde(default)]
    pub image_url: String,
}

impl Link {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: 0,
            title: title.into(),
            url: url.into(),
            description: String::new(),
            visible: true,
            icon: "external".to_string(),
            category_id: None,
            is_top_find: false,
            image_url: String::new(),
        }
    }
}

/// A named grouping for links, with a display color.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    #[serde(default)]
    pub id: u64,
    pub name: String,
    #[serde(default = "default_category_color")]
    pub color: String,
    #[serde(default = "default_true")]
    pub visible: bool,
    /// The special category rendered as the "Top Finds" rail
    #[serde(default)]
    pub is_top_finds: bool,
}

fn default_category_color() -> String {
    "#3b82f6".to_string()
}

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: 0,
            name: name.into(),
            color: default_category_color(),
            visible: true,
            is_top_finds: false,
        }
    }
}
