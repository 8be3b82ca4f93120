//! Link tag resolution.

use crate::href::{SplitHref, join_path};
use crate::rules::{self, LinkKind, SPECIAL_PREFIX};
use crate::special::{LiteralSpecialPages, SpecialPageResolver};
use linkwiki_core::{CssClass, Error, LinkTag, PageLookup, ResolverSettings, Result};
use std::sync::Arc;

/// Href given to links with a script-bearing scheme
pub const NEUTRALIZED_HREF: &str = "#";

/// Rewrites link tags extracted from wiki markup into routable URLs.
///
/// The resolver holds no per-call state. It is `Send + Sync` and can be
/// shared across threads as long as its page lookup is.
pub struct LinkResolver {
    settings: ResolverSettings,
    pages: Arc<dyn PageLookup>,
    special_pages: Arc<dyn SpecialPageResolver>,
}

impl LinkResolver {
    /// Create a resolver with literal `Special:` routing.
    ///
    /// # Errors
    ///
    /// Returns `Error::ConfigError` if the settings are invalid
    pub fn new(pages: impl PageLookup + 'static, settings: ResolverSettings) -> Result<Self> {
        Self::builder(pages).settings(settings).build()
    }

    /// Start building a resolver over a page lookup
    pub fn builder(pages: impl PageLookup + 'static) -> LinkResolverBuilder {
        LinkResolverBuilder::new(Arc::new(pages))
    }

    /// Settings the resolver was built with
    pub fn settings(&self) -> &ResolverSettings {
        &self.settings
    }

    /// Classify an href without rewriting it
    pub fn classify(&self, href: &str) -> LinkKind {
        rules::classify(href, &self.settings)
    }

    /// Resolve one link tag.
    ///
    /// Returns a new tag; `original_href`, `text` and `target` are copied
    /// unchanged. Every href resolves to some output: unknown forms fall
    /// through to the internal page rule.
    ///
    /// # Errors
    ///
    /// Returns `Error::LookupError` if the page lookup fails. A page that
    /// does not exist is not an error: it yields `missing-page-link`.
    pub fn parse(&self, tag: &LinkTag) -> Result<LinkTag> {
        let href = tag.original_href();
        let kind = self.classify(href);
        log::trace!("Classified '{}' as {}", href, kind);

        let resolved = match kind {
            LinkKind::Anchor => tag.clone().with_css_class(CssClass::None),
            LinkKind::UnsafeScheme => {
                log::warn!("Neutralized link with unsafe scheme: '{}'", href);
                tag.clone()
                    .with_href(NEUTRALIZED_HREF)
                    .with_css_class(CssClass::None)
            }
            LinkKind::External => tag
                .clone()
                .with_href(href)
                .with_css_class(CssClass::ExternalLink),
            LinkKind::Attachment => self.resolve_attachment(tag),
            LinkKind::SpecialPage => self.resolve_special_page(tag),
            LinkKind::InternalPage => self.resolve_internal_page(tag)?,
        };

        if resolved.is_rewritten() {
            log::debug!("Rewrote '{}' -> '{}'", href, resolved.href());
        }
        Ok(resolved)
    }

    /// Resolve a batch of tags in order, stopping at the first lookup failure
    pub fn parse_all<'a, I>(&self, tags: I) -> Result<Vec<LinkTag>>
    where
        I: IntoIterator<Item = &'a LinkTag>,
    {
        tags.into_iter().map(|tag| self.parse(tag)).collect()
    }

    fn resolve_attachment(&self, tag: &LinkTag) -> LinkTag {
        let href = tag.original_href();
        let path = rules::strip_attachment_prefix(href).unwrap_or(href);
        tag.clone()
            .with_href(join_path(&self.settings.attachments_base_path, path))
            .with_css_class(CssClass::None)
    }

    fn resolve_special_page(&self, tag: &LinkTag) -> LinkTag {
        let href = tag.original_href();
        let name = href.strip_prefix(SPECIAL_PREFIX).unwrap_or(href);
        let suffix = self.special_pages.resolve_special_page(name);
        tag.clone()
            .with_href(join_path(&self.settings.wiki_base_path, &suffix))
            .with_css_class(CssClass::None)
    }

    fn resolve_internal_page(&self, tag: &LinkTag) -> Result<LinkTag> {
        let parts = SplitHref::parse(tag.original_href());
        let missing = || {
            tag.clone()
                .with_href(tag.original_href())
                .with_css_class(CssClass::MissingPageLink)
        };

        if parts.path.is_empty() {
            log::debug!("Link '{}' has no page path", tag.original_href());
            return Ok(missing());
        }

        let slug = parts.path.to_lowercase();
        let page = self.pages.find_by_slug(&slug).map_err(|e| {
            log::warn!("Page lookup failed for '{}': {}", slug, e);
            match e {
                err @ Error::LookupError { .. } => err,
                other => Error::lookup_error(slug.as_str(), other),
            }
        })?;

        match page {
            Some(page) => {
                let page_path = format!("{}/{}", page.id, parts.path);
                let href = format!(
                    "{}{}",
                    join_path(&self.settings.wiki_base_path, &page_path),
                    parts.suffix()
                );
                Ok(tag.clone().with_href(href).with_css_class(CssClass::None))
            }
            None => {
                log::debug!("No page for slug '{}'", slug);
                Ok(missing())
            }
        }
    }
}

impl std::fmt::Debug for LinkResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LinkResolver")
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

/// Builder for LinkResolver
pub struct LinkResolverBuilder {
    pages: Arc<dyn PageLookup>,
    settings: ResolverSettings,
    special_pages: Arc<dyn SpecialPageResolver>,
}

impl LinkResolverBuilder {
    /// Create a new builder with default settings
    pub fn new(pages: Arc<dyn PageLookup>) -> Self {
        Self {
            pages,
            settings: ResolverSettings::default(),
            special_pages: Arc::new(LiteralSpecialPages),
        }
    }

    /// Use these settings
    pub fn settings(mut self, settings: ResolverSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Route `Special:` links through a custom resolver
    pub fn special_pages(mut self, resolver: impl SpecialPageResolver + 'static) -> Self {
        self.special_pages = Arc::new(resolver);
        self
    }

    /// Build and validate
    pub fn build(self) -> Result<LinkResolver> {
        self.settings.validate()?;
        log::debug!(
            "Link resolver ready (wiki: {}, attachments: {})",
            self.settings.wiki_base_path,
            self.settings.attachments_base_path
        );
        Ok(LinkResolver {
            settings: self.settings,
            pages: self.pages,
            special_pages: self.special_pages,
        })
    }
}
