//! Ordered link classification.
//!
//! [`RULES`] is evaluated top to bottom and the first matching predicate
//! wins. Later rules rely on earlier ones having excluded their cases: the
//! internal-page fallback only sees hrefs that are not anchors, script
//! schemes, external, attachments or special pages.

use crate::href::{has_authority_scheme, starts_with_ignore_case};
use linkwiki_core::ResolverSettings;
use std::fmt;

/// Prefixes that point into the attachments folder
pub const ATTACHMENT_PREFIXES: &[&str] = &["~/", "attachment:"];

/// Prefix addressing a special (system) page
pub const SPECIAL_PREFIX: &str = "Special:";

/// Schemes that execute code in the browser. Only matched at position 0.
pub const UNSAFE_SCHEMES: &[&str] = &["javascript:", "vbscript:", "data:"];

/// Kind of link, decided from the original href
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkKind {
    /// Same-page anchor: `#section`
    Anchor,
    /// Script-bearing scheme: `javascript:...`
    UnsafeScheme,
    /// Leaves the wiki: `http://`, `www.`, `mailto:`, `tag:`, ...
    External,
    /// File under the attachments path: `~/x.png`, `attachment:/x.png`
    Attachment,
    /// System page: `Special:RecentChanges`
    SpecialPage,
    /// Anything else: a slug naming a wiki page
    InternalPage,
}

impl LinkKind {
    /// Short kebab-case label used in log lines
    pub fn name(&self) -> &'static str {
        match self {
            LinkKind::Anchor => "anchor",
            LinkKind::UnsafeScheme => "unsafe-scheme",
            LinkKind::External => "external",
            LinkKind::Attachment => "attachment",
            LinkKind::SpecialPage => "special-page",
            LinkKind::InternalPage => "internal-page",
        }
    }
}

impl fmt::Display for LinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Test applied to the original href
pub type Predicate = fn(&str, &ResolverSettings) -> bool;

/// Classification table, first match wins. Hrefs matching none are internal pages.
pub const RULES: &[(LinkKind, Predicate)] = &[
    (LinkKind::Anchor, is_anchor),
    (LinkKind::UnsafeScheme, is_unsafe_scheme),
    (LinkKind::External, is_external),
    (LinkKind::Attachment, is_attachment),
    (LinkKind::SpecialPage, is_special_page),
];

/// Classify an href against the rule table
pub fn classify(href: &str, settings: &ResolverSettings) -> LinkKind {
    RULES
        .iter()
        .find(|(_, matches)| matches(href, settings))
        .map(|(kind, _)| *kind)
        .unwrap_or(LinkKind::InternalPage)
}

fn is_anchor(href: &str, _: &ResolverSettings) -> bool {
    href.starts_with('#')
}

fn is_unsafe_scheme(href: &str, _: &ResolverSettings) -> bool {
    let href = href.trim_start_matches(|c: char| c.is_ascii_whitespace() || c.is_ascii_control());
    UNSAFE_SCHEMES
        .iter()
        .any(|scheme| starts_with_ignore_case(href, scheme))
}

fn is_external(href: &str, settings: &ResolverSettings) -> bool {
    settings
        .external_prefixes
        .iter()
        .any(|prefix| starts_with_ignore_case(href, prefix))
        || has_authority_scheme(href)
}

fn is_attachment(href: &str, _: &ResolverSettings) -> bool {
    ATTACHMENT_PREFIXES
        .iter()
        .any(|prefix| href.starts_with(prefix))
}

fn is_special_page(href: &str, _: &ResolverSettings) -> bool {
    href.starts_with(SPECIAL_PREFIX)
}

/// Strip whichever attachment prefix the href carries
pub(crate) fn strip_attachment_prefix(href: &str) -> Option<&str> {
    ATTACHMENT_PREFIXES
        .iter()
        .find_map(|prefix| href.strip_prefix(prefix))
}
