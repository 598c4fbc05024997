//! "Top 10 grabbers" button handler.

use teloxide::prelude::*;
use teloxide::types::ParseMode;
use tracing::{debug, warn};

use crate::bot::dispatcher::{AppState, ThrottledBot};
use crate::database::CatalogStore;
use crate::render::{
    parse_grabbers_payload, render_failure, render_leaderboard, INVALID_PAYLOAD_TEXT,
    LEADERBOARD_SIZE,
};

/// Handle a leaderboard button press.
pub async fn grabbers_callback_handler(
    bot: ThrottledBot,
    q: CallbackQuery,
    state: AppState,
) -> anyhow::Result<()> {
    // Clear the client's loading spinner before doing any work.
    bot.answer_callback_query(&q.id).await?;

    let data = q.data.as_deref().unwrap_or_default();
    let text = leaderboard_text(state.store.as_ref(), data).await;

    if let Some(inline_message_id) = &q.inline_message_id {
        bot.edit_message_caption_inline(inline_message_id)
            .caption(text)
            .parse_mode(ParseMode::Html)
            .await?;
    } else if let Some(msg) = &q.message {
        bot.edit_message_caption(msg.chat().id, msg.id())
            .caption(text)
            .parse_mode(ParseMode::Html)
            .await?;
    } else {
        debug!("Leaderboard callback {} has no message to edit", q.id);
    }

    Ok(())
}

/// Text that replaces the card for the given callback data.
///
/// Never fails: bad payloads and store errors become notices.
pub async fn leaderboard_text(store: &dyn CatalogStore, data: &str) -> String {
    let character_id = match parse_grabbers_payload(data) {
        Ok(id) => id,
        Err(e) => {
            debug!("Rejecting leaderboard callback {:?}: {}", data, e);
            return INVALID_PAYLOAD_TEXT.to_string();
        }
    };

    match store.top_grabbers(character_id, LEADERBOARD_SIZE).await {
        Ok(grabbers) => render_leaderboard(&grabbers),
        Err(e) => {
            warn!("Failed to load grabbers of {}: {}", character_id, e);
            render_failure(&e)
        }
    }
}
