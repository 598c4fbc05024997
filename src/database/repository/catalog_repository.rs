//! MongoDB-backed catalog store.
//!
//! Caching is layered on top by the search resolver; this repository
//! always talks to the database.

use anyhow::Result;
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, Document};
use mongodb::{Collection, IndexModel};
use tracing::{debug, info};

use crate::database::models::{Character, Grabber, UserCollection};
use crate::database::{CatalogStore, Database};

/// Repository over the characters and user collection collections.
#[derive(Debug, Clone)]
pub struct CatalogRepository {
    characters: Collection<Character>,
    users: Collection<UserCollection>,
}

impl CatalogRepository {
    pub fn new(db: &Database, characters: &str, users: &str) -> Self {
        Self {
            characters: db.collection(characters),
            users: db.collection(users),
        }
    }

    /// Create the indexes the inline search and leaderboard rely on.
    pub async fn ensure_indexes(&self) -> Result<()> {
        let character_indexes = ["id", "anime", "img_url"]
            .into_iter()
            .map(|field| IndexModel::builder().keys(doc! { field: 1 }).build());
        self.characters.create_indexes(character_indexes).await?;

        let user_indexes = ["characters.id", "characters.name", "characters.img_url"]
            .into_iter()
            .map(|field| IndexModel::builder().keys(doc! { field: 1 }).build());
        self.users.create_indexes(user_indexes).await?;

        info!("Catalog indexes ensured");
        Ok(())
    }
}

#[async_trait]
impl CatalogStore for CatalogRepository {
    async fn all_characters(&self) -> Result<Vec<Character>> {
        let cursor = self.characters.find(doc! {}).await?;
        let characters: Vec<Character> = cursor.try_collect().await?;
        debug!("Loaded {} catalog characters", characters.len());
        Ok(characters)
    }

    async fn search_characters(&self, text: &str) -> Result<Vec<Character>> {
        let cursor = self.characters.find(search_filter(text)).await?;
        let characters: Vec<Character> = cursor.try_collect().await?;
        debug!("Search '{}' matched {} characters", text, characters.len());
        Ok(characters)
    }

    async fn count_in_series(&self, anime: &str) -> Result<u64> {
        let count = self
            .characters
            .count_documents(doc! { "anime": anime })
            .await?;
        Ok(count)
    }

    async fn find_collection(&self, user_id: i64) -> Result<Option<UserCollection>> {
        let result = self.users.find_one(doc! { "id": user_id }).await?;
        debug!("DB get collection for {}: {:?}", user_id, result.is_some());
        Ok(result)
    }

    async fn top_grabbers(&self, character_id: &str, limit: i64) -> Result<Vec<Grabber>> {
        let cursor = self
            .users
            .aggregate(top_grabbers_pipeline(character_id, limit))
            .await?;
        let rows: Vec<Document> = cursor.try_collect().await?;

        let grabbers = rows
            .into_iter()
            .map(mongodb::bson::from_document::<Grabber>)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(grabbers)
    }
}

/// Case-insensitive literal substring match on the searchable fields.
pub fn search_filter(text: &str) -> Document {
    let pattern = regex::escape(text);
    let clauses: Vec<Document> = ["name", "rarity", "id", "anime"]
        .into_iter()
        .map(|field| doc! { field: { "$regex": &pattern, "$options": "i" } })
        .collect();

    doc! { "$or": clauses }
}

/// Owners of one character grouped by user, most copies first.
///
/// Ties are broken by user id so the ranking is stable between clicks.
pub fn top_grabbers_pipeline(character_id: &str, limit: i64) -> Vec<Document> {
    vec![
        doc! { "$match": { "characters.id": character_id } },
        doc! { "$unwind": "$characters" },
        doc! { "$match": { "characters.id": character_id } },
        doc! {
            "$group": {
                "_id": "$id",
                "username": { "$first": "$username" },
                "first_name": { "$first": "$first_name" },
                "character_count": { "$sum": 1 },
            }
        },
        doc! { "$sort": { "character_count": -1, "_id": 1 } },
        doc! { "$limit": limit },
    ]
}
