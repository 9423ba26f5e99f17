//! Data models for the link-in-bio page.
//!
//! This module contains all the structures persisted as site data:
//!
//! - `Profile`, `SocialLink`: page identity and social icons
//! - `Link`, `Category`: the link list and its grouping
//! - `Product`: Amazon affiliate product cards
//! - `Announcement`, `AdSettings`, `AnalyticsSettings`: page-level extras
//! - `SiteData`: the aggregate stored under a single key
//!
//! Everything serializes with camelCase keys so the stored JSON matches
//! data written by the original browser deployment.

pub mod link;
pub mod product;
pub mod profile;
pub mod settings;
pub mod site;

pub use link::{Category, Link};
pub use product::Product;
pub use profile::{Profile, SocialLink};
pub use settings::{AdSettings, AdUnit, AnalyticsSettings, Announcement};
pub use site::SiteData;
