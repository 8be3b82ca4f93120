//! # linkwiki Resolver
//!
//! Classifies hyperlinks extracted from rendered wiki markup and rewrites
//! them into routable URLs.
//!
//! The resolver sits between the markup parser and the renderer. For each
//! [`LinkTag`] it decides, in a fixed order, whether the link is:
//!
//! 1. an anchor on the same page (`#section`), left alone
//! 2. a script-bearing scheme (`javascript:`), neutralized to `#`
//! 3. external (`http://`, `www.`, `mailto:`, `tag:`, any `scheme://`), marked `external-link`
//! 4. an attachment (`~/` or `attachment:`), mounted under the attachments path
//! 5. a special page (`Special:Name`), mounted under the wiki path
//! 6. an internal page slug, looked up and rewritten to `{wiki}/{id}/{slug}`,
//!    or marked `missing-page-link` when no page exists
//!
//! Query strings and fragments on internal links are carried over verbatim.
//! External hrefs are never modified.
//!
//! ## Quick Start
//!
//! ```
//! use linkwiki_resolver::LinkResolver;
//! use linkwiki_core::{CssClass, LinkTag, Page, PageIndex, ResolverSettings};
//!
//! let pages = PageIndex::from_pages([Page::new(1, "foo page")]);
//! let resolver = LinkResolver::new(pages, ResolverSettings::default()).unwrap();
//!
//! let tag = resolver
//!     .parse(&LinkTag::from_href("foo-page?blah=xyz#myanchor", "Foo"))
//!     .unwrap();
//! assert_eq!(tag.href(), "/wiki/1/foo-page?blah=xyz#myanchor");
//!
//! let tag = resolver.parse(&LinkTag::from_href("doesnt-exist", "?")).unwrap();
//! assert_eq!(tag.css_class(), CssClass::MissingPageLink);
//! ```
//!
//! ## Special pages
//!
//! ```
//! use linkwiki_resolver::LinkResolver;
//! use linkwiki_core::{LinkTag, PageIndex};
//!
//! let resolver = LinkResolver::builder(PageIndex::new())
//!     .special_pages(|name: &str| format!("special/{}", name.to_lowercase()))
//!     .build()
//!     .unwrap();
//!
//! let tag = resolver.parse(&LinkTag::from_href("Special:AllPages", "All")).unwrap();
//! assert_eq!(tag.href(), "/wiki/special/allpages");
//! ```

mod href;
mod resolver;
pub mod rules;
mod special;

pub use href::SplitHref;
pub use resolver::{LinkResolver, LinkResolverBuilder, NEUTRALIZED_HREF};
pub use rules::{LinkKind, classify};
pub use special::{LiteralSpecialPages, SpecialPageResolver};

// Re-export core types for consumers
pub use linkwiki_core::{CssClass, Error, LinkTag, PageLookup, ResolverSettings, Result};
