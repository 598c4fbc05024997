//! In-memory catalog store used by handler tests.

use std::sync::atomic::{AtomicUsize, Ordering};

use anyhow::{bail, Result};
use async_trait::async_trait;

use super::models::{Character, Grabber, UserCollection};
use super::CatalogStore;

/// Per-operation call counters.
#[derive(Debug, Default)]
pub struct StoreCalls {
    pub all: AtomicUsize,
    pub search: AtomicUsize,
    pub count: AtomicUsize,
    pub collection: AtomicUsize,
    pub grabbers: AtomicUsize,
}

impl StoreCalls {
    pub fn total(&self) -> usize {
        [&self.all, &self.search, &self.count, &self.collection, &self.grabbers]
            .iter()
            .map(|c| c.load(Ordering::SeqCst))
            .sum()
    }
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    pub characters: Vec<Character>,
    pub collections: Vec<UserCollection>,
    /// Make every operation fail with a storage error.
    pub fail: bool,
    pub calls: StoreCalls,
}

impl MemoryStore {
    pub fn new(characters: Vec<Character>, collections: Vec<UserCollection>) -> Self {
        Self {
            characters,
            collections,
            ..Default::default()
        }
    }

    fn check(&self, counter: &AtomicUsize) -> Result<()> {
        counter.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            bail!("connection reset by peer");
        }
        Ok(())
    }
}

#[async_trait]
impl CatalogStore for MemoryStore {
    async fn all_characters(&self) -> Result<Vec<Character>> {
        self.check(&self.calls.all)?;
        Ok(self.characters.clone())
    }

    async fn search_characters(&self, text: &str) -> Result<Vec<Character>> {
        self.check(&self.calls.search)?;
        let needle = text.to_lowercase();
        Ok(self
            .characters
            .iter()
            .filter(|c| c.matches(&needle))
            .cloned()
            .collect())
    }

    async fn count_in_series(&self, anime: &str) -> Result<u64> {
        self.check(&self.calls.count)?;
        Ok(self.characters.iter().filter(|c| c.anime == anime).count() as u64)
    }

    async fn find_collection(&self, user_id: i64) -> Result<Option<UserCollection>> {
        self.check(&self.calls.collection)?;
        Ok(self.collections.iter().find(|u| u.id == user_id).cloned())
    }

    async fn top_grabbers(&self, character_id: &str, limit: i64) -> Result<Vec<Grabber>> {
        self.check(&self.calls.grabbers)?;

        let mut grabbers: Vec<Grabber> = self
            .collections
            .iter()
            .filter_map(|user| {
                let count = user.copies_of(character_id);
                (count > 0).then(|| Grabber {
                    user_id: user.id,
                    username: user.username.clone(),
                    first_name: user.first_name.clone(),
                    character_count: count as i64,
                })
            })
            .collect();

        grabbers.sort_by(|a, b| {
            b.character_count
                .cmp(&a.character_count)
                .then(a.user_id.cmp(&b.user_id))
        });
        grabbers.truncate(limit.max(0) as usize);

        Ok(grabbers)
    }
}
