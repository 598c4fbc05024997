//! Update dispatcher setup.
//!
//! Builds the dispatcher with the inline query and callback handlers.

use std::sync::Arc;

use teloxide::adaptors::Throttle;
use teloxide::dispatching::UpdateHandler;
use teloxide::prelude::*;

use crate::cache::ResultCache;
use crate::database::CatalogStore;
use crate::plugins;
use crate::search::QueryResolver;

/// Bot type with Throttle adaptor for automatic rate limiting.
pub type ThrottledBot = Throttle<Bot>;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Catalog and collection reads.
    pub store: Arc<dyn CatalogStore>,

    /// Query resolver sharing the result cache.
    pub resolver: QueryResolver,

    /// Client-side cache time for inline answers, in seconds.
    pub inline_cache_time: u32,
}

impl AppState {
    /// Create a new application state.
    pub fn new(store: Arc<dyn CatalogStore>, cache: ResultCache, inline_cache_time: u32) -> Self {
        let resolver = QueryResolver::new(Arc::clone(&store), cache);

        Self {
            store,
            resolver,
            inline_cache_time,
        }
    }
}

/// Build the dispatcher with all handlers.
pub fn build_dispatcher(
    bot: ThrottledBot,
    state: AppState,
) -> Dispatcher<ThrottledBot, anyhow::Error, teloxide::dispatching::DefaultKey> {
    Dispatcher::builder(bot, schema())
        .dependencies(dptree::deps![state])
        .enable_ctrlc_handler()
        .build()
}

/// Build the handler schema.
fn schema() -> UpdateHandler<anyhow::Error> {
    dptree::entry()
        .branch(plugins::inline_handler())
        .branch(plugins::callback_handler())
}
