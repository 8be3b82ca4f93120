//! Core data models for link resolution.
//!
//! These types are designed to be:
//! - **Serializable**: All types derive Serialize/Deserialize
//! - **Immutable in flight**: a [`LinkTag`] is rewritten by returning a new value
//! - **Type-Safe**: [`CssClass`] replaces magic strings

use serde::{Deserialize, Serialize};
use std::fmt;

/// Presentation marker assigned to a resolved link
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CssClass {
    /// No class: internal link to an existing page, anchor, attachment or special page
    #[default]
    #[serde(rename = "")]
    None,
    /// Link leaving the wiki
    #[serde(rename = "external-link")]
    ExternalLink,
    /// Internal link whose page does not exist yet
    #[serde(rename = "missing-page-link")]
    MissingPageLink,
}

impl CssClass {
    /// The class attribute value as rendered in HTML
    pub fn as_str(&self) -> &'static str {
        match self {
            CssClass::None => "",
            CssClass::ExternalLink => "external-link",
            CssClass::MissingPageLink => "missing-page-link",
        }
    }

    /// True for the empty marker, which renders as `""`
    pub fn is_empty(&self) -> bool {
        matches!(self, CssClass::None)
    }
}

impl fmt::Display for CssClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An anchor extracted from rendered wiki markup.
///
/// `original_href` is fixed at construction. The resolver produces a new
/// `LinkTag` through [`LinkTag::with_href`] and [`LinkTag::with_css_class`],
/// leaving the input untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkTag {
    href: String,
    original_href: String,
    text: String,
    target: String,
    #[serde(default)]
    css_class: CssClass,
}

impl LinkTag {
    /// Create a tag in the shape the markup parser emits
    pub fn new(
        href: impl Into<String>,
        original_href: impl Into<String>,
        text: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        Self {
            href: href.into(),
            original_href: original_href.into(),
            text: text.into(),
            target: target.into(),
            css_class: CssClass::None,
        }
    }

    /// Create a tag whose href and original href are the same, with no target
    pub fn from_href(href: impl Into<String>, text: impl Into<String>) -> Self {
        let href = href.into();
        Self::new(href.clone(), href, text, "")
    }

    pub fn href(&self) -> &str {
        &self.href
    }

    pub fn original_href(&self) -> &str {
        &self.original_href
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn css_class(&self) -> CssClass {
        self.css_class
    }

    /// Return a copy pointing at a new destination
    pub fn with_href(mut self, href: impl Into<String>) -> Self {
        self.href = href.into();
        self
    }

    /// Return a copy carrying the given presentation marker
    pub fn with_css_class(mut self, css_class: CssClass) -> Self {
        self.css_class = css_class;
        self
    }

    /// True if the destination differs from what the markup contained
    pub fn is_rewritten(&self) -> bool {
        self.href != self.original_href
    }
}

/// Opaque, stable page identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageId(pub u64);

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for PageId {
    fn from(id: u64) -> Self {
        PageId(id)
    }
}

/// A stored wiki page as seen by the index
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub id: PageId,
    pub title: String,
}

impl Page {
    /// Create a new page record
    pub fn new(id: u64, title: impl Into<String>) -> Self {
        Self {
            id: PageId(id),
            title: title.into(),
        }
    }

    /// Lookup key derived from the title
    pub fn slug(&self) -> String {
        title_to_slug(&self.title)
    }

    /// Read-only reference handed back by lookups
    pub fn to_ref(&self) -> PageRef {
        PageRef {
            id: self.id,
            title: self.title.clone(),
        }
    }
}

/// Result of a successful page lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRef {
    pub id: PageId,
    pub title: String,
}

/// Derive the slug for a page title: lowercase, spaces replaced by dashes.
///
/// ```
/// use linkwiki_core::title_to_slug;
///
/// assert_eq!(title_to_slug("My Page on Engineering"), "my-page-on-engineering");
/// assert_eq!(title_to_slug("foo"), "foo");
/// ```
pub fn title_to_slug(title: &str) -> String {
    title.to_lowercase().replace(' ', "-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_tag_from_href() {
        let tag = LinkTag::from_href("foo-page", "Foo");
        assert_eq!(tag.href(), "foo-page");
        assert_eq!(tag.original_href(), "foo-page");
        assert_eq!(tag.target(), "");
        assert_eq!(tag.css_class(), CssClass::None);
        assert!(!tag.is_rewritten());
    }

    #[test]
    fn test_with_href_keeps_original() {
        let tag = LinkTag::new("foo", "foo", "text", "_blank");
        let rewritten = tag.clone().with_href("/wiki/1/foo");

        assert_eq!(rewritten.href(), "/wiki/1/foo");
        assert_eq!(rewritten.original_href(), "foo");
        assert_eq!(rewritten.target(), "_blank");
        assert!(rewritten.is_rewritten());
        assert_eq!(tag.href(), "foo");
    }

    #[test]
    fn test_css_class_strings() {
        assert_eq!(CssClass::None.as_str(), "");
        assert_eq!(CssClass::ExternalLink.to_string(), "external-link");
        assert_eq!(CssClass::MissingPageLink.to_string(), "missing-page-link");
        assert!(CssClass::default().is_empty());
        assert!(!CssClass::MissingPageLink.is_empty());
    }

    #[test]
    fn test_link_tag_serializes_camel_case() {
        let tag = LinkTag::from_href("http://example.com", "ex")
            .with_css_class(CssClass::ExternalLink);
        let json = serde_json::to_value(&tag).unwrap();

        assert_eq!(json["originalHref"], "http://example.com");
        assert_eq!(json["cssClass"], "external-link");
    }

    #[test]
    fn test_css_class_deserializes_empty() {
        let class: CssClass = serde_json::from_str("\"\"").unwrap();
        assert_eq!(class, CssClass::None);
    }

    #[test]
    fn test_page_slug() {
        let page = Page::new(1, "my page on engineering");
        assert_eq!(page.slug(), "my-page-on-engineering");
        assert_eq!(page.to_ref().id, PageId(1));
    }

    #[test]
    fn test_slug_keeps_existing_dashes() {
        assert_eq!(title_to_slug("Release-Notes 2024"), "release-notes-2024");
    }

    #[test]
    fn test_page_id_display() {
        assert_eq!(PageId(42).to_string(), "42");
    }
}
