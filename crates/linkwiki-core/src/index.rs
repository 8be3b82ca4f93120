//! Page lookup by slug.
//!
//! [`PageLookup`] is the read-only seam the resolver queries. [`PageIndex`]
//! is an in-memory implementation keyed by the slug derived from each title.

use crate::error::Result;
use crate::models::{Page, PageRef, title_to_slug};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

/// Read-only access to stored pages.
///
/// Implementations must be safe for concurrent reads. A backend failure is
/// reported as `Err` (see [`crate::Error::lookup_error`]); `Ok(None)` means
/// the page legitimately does not exist.
pub trait PageLookup: Send + Sync {
    /// Find a page by slug, case-insensitively
    fn find_by_slug(&self, slug: &str) -> Result<Option<PageRef>>;
}

impl<T: PageLookup + ?Sized> PageLookup for Arc<T> {
    fn find_by_slug(&self, slug: &str) -> Result<Option<PageRef>> {
        (**self).find_by_slug(slug)
    }
}

impl<T: PageLookup + ?Sized> PageLookup for &T {
    fn find_by_slug(&self, slug: &str) -> Result<Option<PageRef>> {
        (**self).find_by_slug(slug)
    }
}

/// In-memory page index keyed by lowercase slug
#[derive(Debug, Default)]
pub struct PageIndex {
    pages: RwLock<HashMap<String, PageRef>>,
}

impl PageIndex {
    /// Create an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an index from existing pages
    pub fn from_pages(pages: impl IntoIterator<Item = Page>) -> Self {
        let index = Self::new();
        for page in pages {
            index.insert(page);
        }
        index
    }

    /// Add or replace a page. Returns the entry previously stored under the same slug.
    pub fn insert(&self, page: Page) -> Option<PageRef> {
        let slug = page.slug();
        let previous = self.pages.write().insert(slug.clone(), page.to_ref());
        if let Some(prev) = &previous {
            log::debug!(
                "Page {} replaced page {} under slug '{}'",
                page.id,
                prev.id,
                slug
            );
        }
        previous
    }

    /// Remove the page stored under a title
    pub fn remove(&self, title: &str) -> Option<PageRef> {
        self.pages.write().remove(&title_to_slug(title))
    }

    /// Find a page by its title
    pub fn get_by_title(&self, title: &str) -> Option<PageRef> {
        self.pages.read().get(&title_to_slug(title)).cloned()
    }

    /// Number of indexed pages
    pub fn len(&self) -> usize {
        self.pages.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.read().is_empty()
    }
}

impl PageLookup for PageIndex {
    fn find_by_slug(&self, slug: &str) -> Result<Option<PageRef>> {
        Ok(self.pages.read().get(&slug.to_lowercase()).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PageId;

    #[test]
    fn test_find_by_slug() {
        let index = PageIndex::from_pages([Page::new(1, "my page on engineering")]);

        let found = index.find_by_slug("my-page-on-engineering").unwrap();
        assert_eq!(found.map(|p| p.id), Some(PageId(1)));
    }

    #[test]
    fn test_find_by_slug_case_insensitive() {
        let index = PageIndex::from_pages([Page::new(7, "Foo Page")]);

        assert!(index.find_by_slug("FOO-PAGE").unwrap().is_some());
        assert!(index.find_by_slug("foo-page").unwrap().is_some());
    }

    #[test]
    fn test_missing_slug() {
        let index = PageIndex::new();
        assert!(index.find_by_slug("doesnt-exist").unwrap().is_none());
        assert!(index.is_empty());
    }

    #[test]
    fn test_insert_replaces_same_slug() {
        let index = PageIndex::new();
        assert!(index.insert(Page::new(1, "foo page")).is_none());

        let previous = index.insert(Page::new(2, "Foo Page"));
        assert_eq!(previous.map(|p| p.id), Some(PageId(1)));
        assert_eq!(index.len(), 1);
        assert_eq!(index.get_by_title("foo page").unwrap().id, PageId(2));
    }

    #[test]
    fn test_remove() {
        let index = PageIndex::from_pages([Page::new(1, "foo"), Page::new(2, "bar")]);

        assert!(index.remove("foo").is_some());
        assert!(index.find_by_slug("foo").unwrap().is_none());
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn test_lookup_through_arc() {
        let index: Arc<dyn PageLookup> = Arc::new(PageIndex::from_pages([Page::new(3, "baz")]));
        assert!(index.find_by_slug("baz").unwrap().is_some());
    }

    #[test]
    fn test_concurrent_reads() {
        let index = Arc::new(PageIndex::from_pages(
            (0..50).map(|i| Page::new(i, format!("page {}", i))),
        ));

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let index = Arc::clone(&index);
                std::thread::spawn(move || {
                    (0..50)
                        .filter(|i| {
                            index
                                .find_by_slug(&format!("page-{}", i))
                                .unwrap()
                                .is_some()
                        })
                        .count()
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), 50);
        }
    }
}
