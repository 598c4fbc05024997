//! Inline query handler: `@bot <query>` browsing of the catalog.

use std::collections::HashMap;

use teloxide::prelude::*;
use teloxide::types::InlineQueryResult;
use tracing::{debug, warn};

use crate::bot::dispatcher::{AppState, ThrottledBot};
use crate::database::CatalogStore;
use crate::render::Card;
use crate::search::{paginate, parse_offset};

/// Cards for one page plus the continuation token.
#[derive(Debug)]
pub struct InlineAnswer {
    pub cards: Vec<Card>,
    /// Empty when this is the last page.
    pub next_offset: String,
}

/// Handle an inline query.
pub async fn inline_query_handler(
    bot: ThrottledBot,
    q: InlineQuery,
    state: AppState,
) -> anyhow::Result<()> {
    debug!("Inline query from {}: {:?} (offset {:?})", q.from.id, q.query, q.offset);

    let answer = build_answer(&state, &q.query, &q.offset).await;
    let results: Vec<InlineQueryResult> = answer
        .cards
        .into_iter()
        .map(Card::into_inline_result)
        .collect();

    bot.answer_inline_query(&q.id, results)
        .next_offset(answer.next_offset)
        .cache_time(state.inline_cache_time)
        .await?;

    Ok(())
}

/// Resolve, page and render one inline query.
pub async fn build_answer(state: &AppState, query: &str, offset_token: &str) -> InlineAnswer {
    let results = state.resolver.resolve(query).await;
    let page = paginate(results.characters.as_slice(), parse_offset(offset_token));
    let owner = results.owner.as_deref();

    // Result ids must differ across repeated queries.
    let stamp = chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default();

    let mut series_totals: HashMap<&str, u64> = HashMap::new();
    let mut cards = Vec::with_capacity(page.items.len());

    for (index, character) in page.items.iter().enumerate() {
        let total = match series_totals.get(character.anime.as_str()) {
            Some(&total) => total,
            None => {
                let total = series_total(state.store.as_ref(), &character.anime).await;
                series_totals.insert(&character.anime, total);
                total
            }
        };

        let result_id = format!("{}_{}_{}", character.id, stamp, index);
        if let Some(card) = Card::build(character, total, owner, result_id) {
            cards.push(card);
        }
    }

    InlineAnswer {
        cards,
        next_offset: page.next_offset,
    }
}

async fn series_total(store: &dyn CatalogStore, anime: &str) -> u64 {
    store.count_in_series(anime).await.unwrap_or_else(|e| {
        warn!("Failed to count series {:?}: {}", anime, e);
        0
    })
}
