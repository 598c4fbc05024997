//! Top grabbers leaderboard text and its callback payload.

use thiserror::Error;

use crate::database::Grabber;
use crate::utils::{html_escape, truncate_chars};

/// Callback data prefix of the leaderboard button.
pub const GRABBERS_PREFIX: &str = "top10_grabbers_";

/// How many owners the leaderboard lists.
pub const LEADERBOARD_SIZE: i64 = 10;

/// Display names longer than this are cut.
const NAME_LIMIT: usize = 10;

pub const INVALID_PAYLOAD_TEXT: &str = "Invalid callback data format.";
pub const NO_GRABBERS_TEXT: &str = "<b>ɴᴏ ɢʀᴀʙʙᴇʀs ғᴏᴜɴᴅ ғᴏʀ ᴛʜɪs ᴄʜᴀʀᴀᴄᴛᴇʀ..⁉️</b>";
const HEADER: &str = "<b>🥇 ᴛᴏᴘ 𝟷𝟶 ɢʀᴀʙʙᴇʀs ᴏғ ᴛʜɪs ᴡᴀɪғᴜ: 🍃</b>\n\n";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PayloadError {
    #[error("callback data does not start with {GRABBERS_PREFIX}")]
    WrongPrefix,
    #[error("callback data carries no character id")]
    MissingId,
}

/// Callback data for the leaderboard of `character_id`.
pub fn grabbers_payload(character_id: &str) -> String {
    format!("{GRABBERS_PREFIX}{character_id}")
}

/// Extract the character id from leaderboard callback data.
///
/// Everything after the prefix is the id, so ids containing
/// underscores survive the round trip.
pub fn parse_grabbers_payload(data: &str) -> Result<&str, PayloadError> {
    let id = data
        .strip_prefix(GRABBERS_PREFIX)
        .ok_or(PayloadError::WrongPrefix)?;

    if id.is_empty() {
        return Err(PayloadError::MissingId);
    }

    Ok(id)
}

/// Ranked list of owners, or the "nobody" notice.
pub fn render_leaderboard(grabbers: &[Grabber]) -> String {
    if grabbers.is_empty() {
        return NO_GRABBERS_TEXT.to_string();
    }

    let mut text = String::from(HEADER);
    for (rank, grabber) in grabbers.iter().enumerate() {
        text.push_str(&format!(
            "{}. {} ➾ <b>{}</b>\n",
            rank + 1,
            grabber_label(grabber),
            grabber.character_count
        ));
    }
    text
}

/// Notice shown when the leaderboard could not be computed.
pub fn render_failure(error: &anyhow::Error) -> String {
    format!(
        "An error occurred while fetching top grabbers: {}",
        html_escape(&error.to_string())
    )
}

fn grabber_label(grabber: &Grabber) -> String {
    let first_name = grabber
        .first_name
        .as_deref()
        .filter(|name| !name.is_empty())
        .unwrap_or("Unknown");
    let name = html_escape(&truncate_chars(first_name, NAME_LIMIT));

    match grabber.username.as_deref().filter(|u| !u.is_empty()) {
        Some(username) => format!(
            "<a href=\"https://t.me/{}\"><b>{}</b></a>",
            html_escape(username),
            name
        ),
        None => format!("<b>{name}</b>"),
    }
}
