//! Turns inline query text into an ordered candidate list.

use std::sync::Arc;

use anyhow::Result;
use tracing::{debug, warn};

use super::SearchQuery;
use crate::cache::ResultCache;
use crate::database::{CatalogStore, Character, UserCollection};

/// Candidates for one inline query.
#[derive(Debug, Clone, Default)]
pub struct SearchResults {
    pub characters: Arc<Vec<Character>>,
    /// Set for scoped searches whose user exists.
    pub owner: Option<Arc<UserCollection>>,
}

impl SearchResults {
    fn empty() -> Self {
        Self::default()
    }
}

/// Resolves queries against the result cache, falling back to the store.
#[derive(Clone)]
pub struct QueryResolver {
    store: Arc<dyn CatalogStore>,
    cache: ResultCache,
}

impl QueryResolver {
    pub fn new(store: Arc<dyn CatalogStore>, cache: ResultCache) -> Self {
        Self { store, cache }
    }

    /// Resolve raw query text. Never fails: store errors yield no results.
    pub async fn resolve(&self, raw: &str) -> SearchResults {
        let query = SearchQuery::parse(raw);

        let resolved = match query {
            SearchQuery::Global { text } if text.is_empty() => self.catalog().await,
            SearchQuery::Global { text } => self.search(text).await,
            SearchQuery::Scoped { user_id, terms } => self.scoped(user_id, terms).await,
            SearchQuery::InvalidScope => {
                debug!("Ignoring scoped query with invalid user segment: {:?}", raw);
                Ok(SearchResults::empty())
            }
        };

        resolved.unwrap_or_else(|e| {
            warn!("Inline search for {:?} failed: {}", raw, e);
            SearchResults::empty()
        })
    }

    async fn catalog(&self) -> Result<SearchResults> {
        let characters = match self.cache.catalog() {
            Some(cached) => cached,
            None => self.cache.store_catalog(self.store.all_characters().await?),
        };

        Ok(SearchResults {
            characters,
            owner: None,
        })
    }

    async fn search(&self, text: &str) -> Result<SearchResults> {
        let characters = self.store.search_characters(text).await?;
        Ok(SearchResults {
            characters: Arc::new(characters),
            owner: None,
        })
    }

    async fn scoped(&self, user_id: i64, terms: Option<&str>) -> Result<SearchResults> {
        let Some(owner) = self.collection(user_id).await? else {
            debug!("No collection for user {}", user_id);
            return Ok(SearchResults::empty());
        };

        let mut characters = owner.unique_characters();
        if let Some(terms) = terms {
            let needle = terms.to_lowercase();
            characters.retain(|c| c.matches(&needle));
        }

        Ok(SearchResults {
            characters: Arc::new(characters),
            owner: Some(owner),
        })
    }

    async fn collection(&self, user_id: i64) -> Result<Option<Arc<UserCollection>>> {
        if let Some(cached) = self.cache.collection(user_id) {
            return Ok(Some(cached));
        }

        let found = self.store.find_collection(user_id).await?;
        Ok(found.map(|collection| self.cache.store_collection(collection)))
    }
}
