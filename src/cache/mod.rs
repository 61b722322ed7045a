//! Rendered-page cache
//!
//! Public pages are rendered from the reconciled content document and the
//! result is cached in-process. A successful admin save invalidates every
//! cached render so the next request sees the new content. The content
//! document itself is never cached; reconciliation runs on every read.

use std::collections::HashMap;
use std::sync::RwLock;

/// In-process cache of rendered HTML, keyed by page name
#[derive(Debug, Default)]
pub struct PageCache {
    pages: RwLock<HashMap<String, String>>,
}

impl PageCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch a cached render
    pub fn get(&self, page: &str) -> Option<String> {
        self.pages.read().ok()?.get(page).cloned()
    }

    /// Store a render
    pub fn put(&self, page: &str, html: String) {
        if let Ok(mut pages) = self.pages.write() {
            pages.insert(page.to_string(), html);
        }
    }

    /// Drop every cached render (content changed)
    pub fn invalidate(&self) {
        if let Ok(mut pages) = self.pages.write() {
            pages.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_get_invalidate() {
        let cache = PageCache::new();
        assert_eq!(cache.get("index"), None);

        cache.put("index", "<html></html>".to_string());
        assert_eq!(cache.get("index"), Some("<html></html>".to_string()));

        cache.invalidate();
        assert_eq!(cache.get("index"), None);
    }
}
