//! Leaderboard aggregation row.

use serde::{Deserialize, Serialize};

/// One owner of a character and how many copies they hold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grabber {
    /// Telegram user ID (the `$group` key).
    #[serde(rename = "_id")]
    pub user_id: i64,

    #[serde(default)]
    pub username: Option<String>,

    #[serde(default)]
    pub first_name: Option<String>,

    #[serde(default)]
    pub character_count: i64,
}
