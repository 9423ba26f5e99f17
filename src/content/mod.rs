//! Site content persistence and editing.
//!
//! This module provides the `ContentManager`, which owns the stored
//! `SiteData` document plus the click-count maps, and exposes the CRUD
//! operations the admin panel performs:
//!
//! - Link, category, and product management
//! - Profile, announcement, ad, and analytics settings
//! - Link and product click counting
//! - Visitor-side announcement dismissal

pub mod manager;

pub use manager::ContentManager;
