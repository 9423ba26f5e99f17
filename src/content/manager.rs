use std::collections::{BTreeSet, HashMap};

use anyhow::{Context, Result};
use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::amazon;
use crate::models::{
    AdSettings, AdUnit, AnalyticsSettings, Announcement, Category, Link, Product, Profile,
    SiteData,
};
use crate::store::KeyValueStore;

/// Store key holding the whole site document
const SITE_DATA_KEY: &str = "linkInBioData";

/// Store keys holding click counts, JSON objects of id -> count
const LINK_CLICKS_KEY: &str = "linkClickCounts";
const PRODUCT_CLICKS_KEY: &str = "productClickCounts";

/// Store key recording a visitor's announcement dismissal
const ANNOUNCEMENT_DISMISSED_KEY: &str = "announcement_dismissed";

/// A dismissed announcement stays hidden for 7 days, then re-shows
const DISMISSAL_WINDOW_DAYS: i64 = 7;

/// Categories always offered in the product form, before any in use
const BUILTIN_PRODUCT_CATEGORIES: [&str; 6] =
    ["General", "Electronics", "Home", "Fashion", "Books", "Sports"];

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DismissalRecord {
    dismissed_at: i64,
    text: String,
}

/// Site content CRUD over a key-value store.
///
/// Every operation is load-mutate-save on the single stored document.
/// Ids are assigned as one past the highest id in the relevant list.
/// Operations addressing an id return whether it was found.
pub struct ContentManager<S: KeyValueStore> {
    store: S,
}

fn next_id(ids: impl Iterator<Item = u64>) -> u64 {
    ids.max().map_or(1, |max| max + 1)
}

impl<S: KeyValueStore> ContentManager<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Load the site document; a missing key yields the starter page.
    ///
    /// A stored document that fails to parse is an error rather than
    /// silently replaced - overwriting it with defaults would destroy
    /// the admin's data on the next save.
    pub fn load(&self) -> Result<SiteData> {
        match self.store.get(SITE_DATA_KEY)? {
            Some(raw) => serde_json::from_str(&raw).context("Failed to parse stored site data"),
            None => Ok(SiteData::default()),
        }
    }

    pub fn save(&self, data: &SiteData) -> Result<()> {
        let raw = serde_json::to_string(data).context("Failed to serialize site data")?;
        self.store.set(SITE_DATA_KEY, &raw)?;
        Ok(())
    }

    /// Load, apply `f`, save, and return the updated document.
    pub fn update<F: FnOnce(&mut SiteData)>(&self, f: F) -> Result<SiteData> {
        let mut data = self.load()?;
        f(&mut data);
        self.save(&data)?;
        Ok(data)
    }

    // ===== Links =====

    /// Add a link, assigning its id. The given id is ignored.
    pub fn add_link(&self, mut link: Link) -> Result<Link> {
        let mut data = self.load()?;
        link.id = next_id(data.links.iter().map(|l| l.id));
        data.links.push(link.clone());
        self.save(&data)?;
        Ok(link)
    }

    /// Replace the link with the same id. Returns false if not found.
    pub fn update_link(&self, updated: Link) -> Result<bool> {
        let mut data = self.load()?;
        let Some(slot) = data.links.iter_mut().find(|l| l.id == updated.id) else {
            return Ok(false);
        };
        *slot = updated;
        self.save(&data)?;
        Ok(true)
    }

    pub fn remove_link(&self, id: u64) -> Result<bool> {
        let mut data = self.load()?;
        let before = data.links.len();
        data.links.retain(|l| l.id != id);
        if data.links.len() == before {
            return Ok(false);
        }
        self.save(&data)?;
        Ok(true)
    }

    pub fn toggle_link_visibility(&self, id: u64) -> Result<bool> {
        let mut data = self.load()?;
        let Some(link) = data.links.iter_mut().find(|l| l.id == id) else {
            return Ok(false);
        };
        link.visible = !link.visible;
        self.save(&data)?;
        Ok(true)
    }

    /// Move a link by `offset` positions in the list, clamped to the
    /// ends. Returns false if the id is not found.
    pub fn move_link(&self, id: u64, offset: isize) -> Result<bool> {
        let mut data = self.load()?;
        let Some(from) = data.links.iter().position(|l| l.id == id) else {
            return Ok(false);
        };
        let to = (from as isize + offset).clamp(0, data.links.len() as isize - 1) as usize;
        let link = data.links.remove(from);
        data.links.insert(to, link);
        self.save(&data)?;
        Ok(true)
    }

    // ===== Categories =====

    pub fn add_category(&self, mut category: Category) -> Result<Category> {
        let mut data = self.load()?;
        category.id = next_id(data.categories.iter().map(|c| c.id));
        data.categories.push(category.clone());
        self.save(&data)?;
        Ok(category)
    }

    pub fn update_category(&self, updated: Category) -> Result<bool> {
        let mut data = self.load()?;
        let Some(slot) = data.categories.iter_mut().find(|c| c.id == updated.id) else {
            return Ok(false);
        };
        *slot = updated;
        self.save(&data)?;
        Ok(true)
    }

    /// Remove a category and detach it from any links referencing it.
    pub fn remove_category(&self, id: u64) -> Result<bool> {
        let mut data = self.load()?;
        let before = data.categories.len();
        data.categories.retain(|c| c.id != id);
        if data.categories.len() == before {
            return Ok(false);
        }
        for link in data.links.iter_mut().filter(|l| l.category_id == Some(id)) {
            link.category_id = None;
        }
        self.save(&data)?;
        Ok(true)
    }

    // ===== Products =====

    /// Add a product, assigning its id and extracting the ASIN from the
    /// affiliate URL when recognizable.
    pub fn add_product(&self, mut product: Product) -> Result<Product> {
        let mut data = self.load()?;
        product.id = next_id(data.products.iter().map(|p| p.id));
        if product.asin.is_none() {
            product.asin = amazon::extract_asin(&product.affiliate_url);
        }
        data.products.push(product.clone());
        self.save(&data)?;
        Ok(product)
    }

    pub fn update_product(&self, updated: Product) -> Result<bool> {
        let mut data = self.load()?;
        let Some(slot) = data.products.iter_mut().find(|p| p.id == updated.id) else {
            return Ok(false);
        };
        *slot = updated;
        self.save(&data)?;
        Ok(true)
    }

    pub fn remove_product(&self, id: u64) -> Result<bool> {
        let mut data = self.load()?;
        let before = data.products.len();
        data.products.retain(|p| p.id != id);
        if data.products.len() == before {
            return Ok(false);
        }
        self.save(&data)?;
        Ok(true)
    }

    pub fn toggle_product_visibility(&self, id: u64) -> Result<bool> {
        let mut data = self.load()?;
        let Some(product) = data.products.iter_mut().find(|p| p.id == id) else {
            return Ok(false);
        };
        product.visible = !product.visible;
        self.save(&data)?;
        Ok(true)
    }

    pub fn toggle_product_featured(&self, id: u64) -> Result<bool> {
        let mut data = self.load()?;
        let Some(product) = data.products.iter_mut().find(|p| p.id == id) else {
            return Ok(false);
        };
        product.featured = !product.featured;
        self.save(&data)?;
        Ok(true)
    }

    /// The built-in product categories plus any in use, sorted.
    pub fn product_categories(&self) -> Result<Vec<String>> {
        let data = self.load()?;
        let mut categories: BTreeSet<String> = BUILTIN_PRODUCT_CATEGORIES
            .iter()
            .map(|c| c.to_string())
            .collect();
        for product in &data.products {
            if !product.category.is_empty() {
                categories.insert(product.category.clone());
            }
        }
        Ok(categories.into_iter().collect())
    }

    // ===== Settings =====

    pub fn set_profile(&self, profile: Profile) -> Result<()> {
        self.update(|data| data.profile = profile)?;
        Ok(())
    }

    pub fn set_announcement(&self, announcement: Announcement) -> Result<()> {
        self.update(|data| data.announcement = announcement)?;
        Ok(())
    }

    pub fn set_analytics(&self, analytics: AnalyticsSettings) -> Result<()> {
        self.update(|data| data.analytics = analytics)?;
        Ok(())
    }

    pub fn set_ads(&self, ads: AdSettings) -> Result<()> {
        self.update(|data| data.ads = ads)?;
        Ok(())
    }

    /// Replace the ad unit with the same id. Returns false if not found.
    pub fn update_ad_unit(&self, updated: AdUnit) -> Result<bool> {
        let mut data = self.load()?;
        let Some(slot) = data.ads.units.iter_mut().find(|u| u.id == updated.id) else {
            return Ok(false);
        };
        *slot = updated;
        self.save(&data)?;
        Ok(true)
    }

    // ===== Click tracking =====

    pub fn record_link_click(&self, id: u64) -> Result<u64> {
        self.record_click(LINK_CLICKS_KEY, id)
    }

    pub fn record_product_click(&self, id: u64) -> Result<u64> {
        self.record_click(PRODUCT_CLICKS_KEY, id)
    }

    pub fn link_clicks(&self) -> Result<HashMap<u64, u64>> {
        self.load_counts(LINK_CLICKS_KEY)
    }

    pub fn product_clicks(&self) -> Result<HashMap<u64, u64>> {
        self.load_counts(PRODUCT_CLICKS_KEY)
    }

    fn record_click(&self, key: &str, id: u64) -> Result<u64> {
        let mut counts = self.load_counts(key)?;
        let count = counts.entry(id).or_insert(0);
        *count += 1;
        let count = *count;
        let raw = serde_json::to_string(&counts).context("Failed to serialize click counts")?;
        self.store.set(key, &raw)?;
        Ok(count)
    }

    /// Click counts are best-effort analytics; a malformed map starts
    /// over rather than erroring.
    fn load_counts(&self, key: &str) -> Result<HashMap<u64, u64>> {
        let Some(raw) = self.store.get(key)? else {
            return Ok(HashMap::new());
        };
        match serde_json::from_str(&raw) {
            Ok(counts) => Ok(counts),
            Err(e) => {
                debug!(key, error = %e, "Stored click counts did not parse, starting over");
                Ok(HashMap::new())
            }
        }
    }

    // ===== Announcement dismissal (visitor side) =====

    /// Record that the visitor dismissed the announcement with `text`.
    pub fn dismiss_announcement(&self, text: &str) -> Result<()> {
        let record = DismissalRecord {
            dismissed_at: Utc::now().timestamp_millis(),
            text: text.to_string(),
        };
        let raw = serde_json::to_string(&record).context("Failed to serialize dismissal")?;
        self.store.set(ANNOUNCEMENT_DISMISSED_KEY, &raw)?;
        Ok(())
    }

    /// Whether the announcement with `text` was dismissed within the
    /// last 7 days. A changed announcement text re-shows immediately,
    /// and malformed dismissal data is cleared.
    pub fn is_announcement_dismissed(&self, text: &str) -> bool {
        let raw = match self.store.get(ANNOUNCEMENT_DISMISSED_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return false,
            Err(e) => {
                warn!(error = %e, "Failed to read announcement dismissal");
                return false;
            }
        };

        let record: DismissalRecord = match serde_json::from_str(&raw) {
            Ok(record) => record,
            Err(e) => {
                debug!(error = %e, "Stored dismissal did not parse, clearing");
                let _ = self.store.remove(ANNOUNCEMENT_DISMISSED_KEY);
                return false;
            }
        };

        let cutoff = Utc::now() - Duration::days(DISMISSAL_WINDOW_DAYS);
        record.text == text && record.dismissed_at > cutoff.timestamp_millis()
    }
}
