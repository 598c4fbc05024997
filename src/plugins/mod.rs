//! Update handlers.
//!
//! - `inline` - `@bot <query>` catalog browsing
//! - `grabbers` - "top 10 grabbers" button on every card

pub mod grabbers;
pub mod inline;

use teloxide::dispatching::UpdateHandler;
use teloxide::prelude::*;

use crate::render::GRABBERS_PREFIX;

/// Build the inline query handler.
pub fn inline_handler() -> UpdateHandler<anyhow::Error> {
    Update::filter_inline_query().endpoint(inline::inline_query_handler)
}

/// Build the callback query handler.
pub fn callback_handler() -> UpdateHandler<anyhow::Error> {
    Update::filter_callback_query().branch(
        dptree::filter(|q: CallbackQuery| {
            q.data
                .as_ref()
                .map(|d| d.starts_with(GRABBERS_PREFIX))
                .unwrap_or(false)
        })
        .endpoint(grabbers::grabbers_callback_handler),
    )
}
