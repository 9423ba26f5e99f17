//! Linkdeck - core library for a link-in-bio page builder.
//!
//! A link-in-bio site is a single public page of links, product cards,
//! and ads, edited through a password-gated admin panel. This crate is
//! the headless core behind both faces of that page:
//!
//! - `store`: durable string-keyed persistence (file-backed, with an
//!   in-memory double for tests)
//! - `auth`: the admin session authenticator - password hashing, login,
//!   lazy session expiry, activity-based extension
//! - `models` / `content`: the site data model and the CRUD the admin
//!   panel performs on it
//! - `share`: share sheet URL builders
//! - `amazon`: affiliate URL parsing and product validation
//!
//! The authenticator is pull-based by design: a UI shell polls
//! `remaining_session_time` (typically once per second) to drive expiry
//! warnings and forced logout. Nothing in this crate runs in the
//! background.

pub mod amazon;
pub mod auth;
pub mod content;
pub mod models;
pub mod share;
pub mod store;

pub use auth::Authenticator;
pub use content::ContentManager;
pub use models::SiteData;
pub use store::{FileStore, KeyValueStore, MemoryStore};
