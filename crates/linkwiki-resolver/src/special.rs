//! Special page routing.
//!
//! Links such as `Special:RecentChanges` address system pages rather than
//! content. The resolver hands the name after `Special:` to a
//! [`SpecialPageResolver`] and mounts the returned suffix under the wiki base path.

/// Maps a special page name to a path suffix relative to the wiki base path
pub trait SpecialPageResolver: Send + Sync {
    fn resolve_special_page(&self, name: &str) -> String;
}

/// Default routing: keeps the literal `Special:{name}` form
#[derive(Debug, Clone, Copy, Default)]
pub struct LiteralSpecialPages;

impl SpecialPageResolver for LiteralSpecialPages {
    fn resolve_special_page(&self, name: &str) -> String {
        format!("Special:{}", name)
    }
}

impl<F> SpecialPageResolver for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn resolve_special_page(&self, name: &str) -> String {
        self(name)
    }
}
