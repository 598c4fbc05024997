//! Text and markup rendering for inline cards and the leaderboard.

mod card;
mod leaderboard;
mod tags;

pub use card::Card;
pub use leaderboard::{
    parse_grabbers_payload, render_failure, render_leaderboard, GRABBERS_PREFIX,
    INVALID_PAYLOAD_TEXT, LEADERBOARD_SIZE,
};
