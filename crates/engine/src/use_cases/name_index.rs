//! The full list of creature names, for search and autocomplete.

use std::collections::HashSet;
use std::sync::Arc;

use tokio::sync::OnceCell;

use crate::infrastructure::ports::{ResourceRef, SourceError};
use crate::infrastructure::resources::Resources;

pub const DEFAULT_LIST_PAGE_SIZE: u32 = 1000;

/// Loaded once per process by walking the paginated listing.
pub struct NameIndex {
    resources: Arc<Resources>,
    page_size: u32,
    names: OnceCell<Arc<Vec<String>>>,
}

impl NameIndex {
    pub fn new(resources: Arc<Resources>, page_size: u32) -> Self {
        Self {
            resources,
            page_size: page_size.max(1),
            names: OnceCell::new(),
        }
    }

    /// A failed load is not remembered; the next call retries.
    pub async fn execute(&self) -> Result<Arc<Vec<String>>, SourceError> {
        self.names
            .get_or_try_init(|| async { self.load().await.map(Arc::new) })
            .await
            .cloned()
    }

    async fn load(&self) -> Result<Vec<String>, SourceError> {
        let mut names = Vec::new();
        let mut page = ResourceRef::listing(0, self.page_size);
        let mut visited = HashSet::new();
        while visited.insert(page.path()) {
            let listing = self.resources.listing_page(&page).await?;
            names.extend(listing.results.into_iter().map(|r| r.name));
            let Some(next) = listing.next else {
                break;
            };
            page = ResourceRef::from_url(&next)?;
        }
        tracing::info!(count = names.len(), "Loaded creature name index");
        Ok(names)
    }
}
