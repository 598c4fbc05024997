//! Configuration module for the inline search bot.
//!
//! Loads configuration from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use serde::Deserialize;

/// Bot running mode
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BotMode {
    #[default]
    Polling,
    Webhook,
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    // Telegram
    pub bot_token: String,
    pub bot_mode: BotMode,
    pub webhook_url: Option<String>,
    pub webhook_port: u16,
    pub webhook_secret: Option<String>,

    // MongoDB
    pub mongodb_uri: String,
    pub mongodb_database: String,
    /// Catalog of every uploaded character.
    pub characters_collection: String,
    /// Per-user harems (owned character copies).
    pub user_collection: String,

    /// How long the full catalog snapshot stays fresh.
    pub catalog_cache_ttl: Duration,
    /// How long a user's collection snapshot stays fresh.
    pub collection_cache_ttl: Duration,

    /// Client-side cache time sent with every inline answer, in seconds.
    pub inline_cache_time: u32,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Panics
    /// Panics if required environment variables are not set.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let bot_mode = env::var("BOT_MODE")
            .unwrap_or_else(|_| "polling".to_string())
            .to_lowercase();

        let bot_mode = match bot_mode.as_str() {
            "webhook" => BotMode::Webhook,
            _ => BotMode::Polling,
        };

        let webhook_url = env::var("WEBHOOK_URL").ok().filter(|s| !s.is_empty());

        if bot_mode == BotMode::Webhook && webhook_url.is_none() {
            panic!("WEBHOOK_URL must be set when BOT_MODE is webhook");
        }

        let webhook_secret = env::var("WEBHOOK_SECRET").ok().filter(|s| !s.is_empty());

        Self {
            bot_token: env::var("BOT_TOKEN").expect("BOT_TOKEN must be set"),
            bot_mode,
            webhook_url,
            webhook_port: parse_or("WEBHOOK_PORT", 8080),
            webhook_secret,
            mongodb_uri: env::var("MONGODB_URI").expect("MONGODB_URI must be set"),
            mongodb_database: env::var("MONGODB_DATABASE")
                .unwrap_or_else(|_| "waifu".to_string()),
            characters_collection: env::var("CHARACTERS_COLLECTION")
                .unwrap_or_else(|_| "anime_characters".to_string()),
            user_collection: env::var("USER_COLLECTION")
                .unwrap_or_else(|_| "user_collection".to_string()),
            catalog_cache_ttl: Duration::from_secs(parse_or("CATALOG_CACHE_TTL_SECS", 36_000)),
            collection_cache_ttl: Duration::from_secs(parse_or("COLLECTION_CACHE_TTL_SECS", 60)),
            inline_cache_time: parse_or("INLINE_CACHE_TIME_SECS", 5),
        }
    }
}

/// Read a numeric variable, falling back to `default` when unset or unparsable.
fn parse_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(default)
}
