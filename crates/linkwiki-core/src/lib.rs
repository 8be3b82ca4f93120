//! # linkwiki Core
//!
//! Core data models, error types, configuration and page lookup for the
//! link resolver. This crate defines the canonical types the resolver crate
//! depends on.
//!
//! ## Core Modules
//!
//! - [`models`] - `LinkTag`, `CssClass`, pages and slug derivation
//! - [`error`] - Error type and Result alias
//! - [`config`] - Resolver settings with builder and YAML persistence
//! - [`index`] - The `PageLookup` seam and the in-memory `PageIndex`
//!
//! ## Usage Examples
//!
//! ```
//! use linkwiki_core::prelude::*;
//!
//! let index = PageIndex::from_pages([Page::new(1, "foo page")]);
//! let page = index.find_by_slug("foo-page").unwrap();
//! assert_eq!(page.map(|p| p.id), Some(PageId(1)));
//!
//! let settings = ResolverSettings::builder()
//!     .wiki_base_path("/wiki")
//!     .build()
//!     .unwrap();
//! assert_eq!(settings.attachments_base_path, "/Attachments");
//! ```

pub mod config;
pub mod error;
pub mod index;
pub mod models;

pub use config::{DEFAULT_EXTERNAL_PREFIXES, ResolverSettings, ResolverSettingsBuilder};
pub use error::{Error, Result};
pub use index::{PageIndex, PageLookup};
pub use models::{CssClass, LinkTag, Page, PageId, PageRef, title_to_slug};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::ResolverSettings;
    pub use crate::error::{Error, Result};
    pub use crate::index::{PageIndex, PageLookup};
    pub use crate::models::{CssClass, LinkTag, Page, PageId, PageRef};
}
