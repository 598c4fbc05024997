//! Read-side boundary over the catalog database.
//!
//! Everything the inline search and the leaderboard need from storage goes
//! through [`CatalogStore`], so handlers can be exercised without MongoDB.

use anyhow::Result;
use async_trait::async_trait;

use super::models::{Character, Grabber, UserCollection};

/// Read operations over the character catalog and user collections.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Every character in the catalog, in storage order.
    async fn all_characters(&self) -> Result<Vec<Character>>;

    /// Characters whose name, rarity, id or anime contains `text`,
    /// ignoring case. `text` is matched literally.
    async fn search_characters(&self, text: &str) -> Result<Vec<Character>>;

    /// Number of catalog entries belonging to `anime`.
    async fn count_in_series(&self, anime: &str) -> Result<u64>;

    /// A user's collection, if the user has ever grabbed anything.
    async fn find_collection(&self, user_id: i64) -> Result<Option<UserCollection>>;

    /// Owners of `character_id`, most copies first, at most `limit` rows.
    async fn top_grabbers(&self, character_id: &str, limit: i64) -> Result<Vec<Grabber>>;
}
