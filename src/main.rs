//! Waifu inline search bot.
//!
//! Lets users browse the character catalog (or one user's collection)
//! from any chat with `@bot <query>`, and shows the top grabbers of a
//! character from a button on each card.
//!
//! ## Architecture
//!
//! - `config` - Environment configuration
//! - `database` - MongoDB models, repository and the `CatalogStore` boundary
//! - `cache` - Moka-backed caches and the inline result snapshots
//! - `search` - Query parsing, resolution and paging
//! - `render` - Card captions, tags and the leaderboard text
//! - `bot` - Dispatcher and runtime (with Throttle for API rate limiting)
//! - `plugins` - Inline query and callback handlers
//! - `utils` - Text helpers

mod bot;
mod cache;
mod config;
mod database;
mod plugins;
mod render;
mod search;
mod utils;

use std::sync::Arc;

use teloxide::adaptors::throttle::Limits;
use teloxide::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

use bot::AppState;
use cache::{CacheRegistry, ResultCache, SystemClock};
use config::Config;
use database::{CatalogRepository, Database};

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file first (before anything else)
    dotenvy::dotenv().ok();

    // If RUST_LOG is not set, default to "info" level for our crate
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("waifu_inline=info,teloxide=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .init();

    info!("Starting waifu inline bot...");

    let config = Config::from_env();
    info!("Configuration loaded successfully");
    info!("Bot mode: {:?}", config.bot_mode);

    info!("Connecting to MongoDB...");
    let db = Database::connect(&config.mongodb_uri, &config.mongodb_database).await?;
    let catalog = CatalogRepository::new(
        &db,
        &config.characters_collection,
        &config.user_collection,
    );
    catalog.ensure_indexes().await?;
    info!("Database connected");

    let registry = CacheRegistry::new();
    let results = ResultCache::new(
        &registry,
        Arc::new(SystemClock),
        config.catalog_cache_ttl,
        config.collection_cache_ttl,
    );
    info!("Result cache ready: {:?}", registry);

    let state = AppState::new(Arc::new(catalog), results, config.inline_cache_time);

    // Throttle respects Telegram's global and per-chat rate limits
    let bot = Bot::new(&config.bot_token).throttle(Limits::default());
    info!("Bot initialized with rate limiting (Throttle)");

    let me = bot.get_me().await?;
    info!("Bot username: @{}", me.username());

    let dispatcher = bot::build_dispatcher(bot.clone(), state);

    bot::run(&config, bot, dispatcher).await
}
