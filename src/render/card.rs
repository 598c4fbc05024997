//! Inline result cards for catalog characters.

use teloxide::types::{
    InlineKeyboardButton, InlineKeyboardMarkup, InlineQueryResult, InlineQueryResultCachedPhoto,
    InlineQueryResultPhoto, ParseMode,
};
use tracing::warn;
use url::Url;

use super::leaderboard::grabbers_payload;
use super::tags::tag_for;
use crate::database::{Character, UserCollection};
use crate::utils::html_escape;

const LEADERBOARD_BUTTON: &str = "ᴛᴏᴘ 𝟷𝟶 ɢʀᴀʙʙᴇʀs";

/// Where the card's picture comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Photo {
    Remote(Url),
    /// Telegram file id of an already uploaded photo.
    Cached(String),
}

/// A rendered character, ready to become an inline result.
#[derive(Debug, Clone)]
pub struct Card {
    pub result_id: String,
    pub caption: String,
    pub payload: String,
    pub photo: Photo,
}

impl Card {
    /// Build the card for `character`.
    ///
    /// `series_total` is the catalog count for the character's anime;
    /// `owner` is set when browsing someone's collection.
    /// Returns `None` when the image reference is an unusable URL.
    pub fn build(
        character: &Character,
        series_total: u64,
        owner: Option<&UserCollection>,
        result_id: String,
    ) -> Option<Self> {
        let photo = if character.has_remote_image() {
            match Url::parse(&character.img_url) {
                Ok(url) => Photo::Remote(url),
                Err(e) => {
                    warn!("Skipping character {}: invalid image URL: {}", character.id, e);
                    return None;
                }
            }
        } else {
            Photo::Cached(character.img_url.clone())
        };

        Some(Self {
            result_id,
            caption: caption(character, series_total, owner),
            payload: grabbers_payload(&character.id),
            photo,
        })
    }

    /// Convert into the Telegram inline result type.
    pub fn into_inline_result(self) -> InlineQueryResult {
        let keyboard = InlineKeyboardMarkup::new(vec![vec![InlineKeyboardButton::callback(
            LEADERBOARD_BUTTON,
            self.payload,
        )]]);

        match self.photo {
            Photo::Remote(url) => {
                let mut result = InlineQueryResultPhoto::new(self.result_id, url.clone(), url);
                result.caption = Some(self.caption);
                result.parse_mode = Some(ParseMode::Html);
                result.reply_markup = Some(keyboard);
                InlineQueryResult::Photo(result)
            }
            Photo::Cached(file_id) => {
                let mut result = InlineQueryResultCachedPhoto::new(self.result_id, file_id);
                result.caption = Some(self.caption);
                result.parse_mode = Some(ParseMode::Html);
                result.reply_markup = Some(keyboard);
                InlineQueryResult::CachedPhoto(result)
            }
        }
    }
}

/// HTML caption for a character card.
pub fn caption(character: &Character, series_total: u64, owner: Option<&UserCollection>) -> String {
    let rarity = character.rarity();
    let id = html_escape(&character.id);
    let name = html_escape(&character.name);
    let anime = html_escape(&character.anime);

    let mut text = match owner {
        Some(owner) => format!(
            "<b>Lᴏᴏᴋ Aᴛ <a href='tg://user?id={}'>{}</a>'s Waifu....!!</b>\n\n\
             <b>{}:</b> {} x{}\n\
             <b>{}</b> {}/{}\n",
            owner.id,
            html_escape(&owner.display_name()),
            id,
            name,
            owner.copies_of(&character.id),
            anime,
            owner.owned_in_series(&character.anime),
            series_total,
        ),
        None => format!(
            "<b>Lᴏᴏᴋ Aᴛ Tʜɪs Waifu....!!</b>\n\n\
             <b>{}:</b> {}\n\
             <b>{}</b>\n",
            id, name, anime,
        ),
    };

    text.push_str(&format!(
        "﹙<b>{} 𝙍𝘼𝙍𝙄𝙏𝙔:</b> {}﹚\n",
        html_escape(rarity.symbol),
        html_escape(rarity.label)
    ));

    if let Some(tag) = tag_for(&character.name) {
        text.push_str("\n\n");
        text.push_str(tag);
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::models::character::character;

    fn owner() -> UserCollection {
        UserCollection {
            id: 42,
            first_name: Some("<Alice>".to_string()),
            username: None,
            characters: vec![
                character("1", "Rem", "Re:Zero"),
                character("1", "Rem", "Re:Zero"),
                character("2", "Emilia", "Re:Zero"),
                character("3", "Naruto Uzumaki", "Naruto"),
            ],
        }
    }

    #[test]
    fn test_global_caption() {
        let text = caption(&character("C042", "Naruto Uzumaki", "Naruto"), 12, None);
        assert_eq!(
            text,
            "<b>Lᴏᴏᴋ Aᴛ Tʜɪs Waifu....!!</b>\n\n\
             <b>C042:</b> Naruto Uzumaki\n\
             <b>Naruto</b>\n\
             ﹙<b>🟡 𝙍𝘼𝙍𝙄𝙏𝙔:</b> Legendary﹚\n"
        );
    }

    #[test]
    fn test_scoped_caption_counts_copies_and_series() {
        let text = caption(&character("1", "Rem", "Re:Zero"), 5, Some(&owner()));
        assert!(text.starts_with(
            "<b>Lᴏᴏᴋ Aᴛ <a href='tg://user?id=42'>&lt;Alice&gt;</a>'s Waifu....!!</b>"
        ));
        assert!(text.contains("<b>1:</b> Rem x2\n"));
        assert!(text.contains("<b>Re:Zero</b> 3/5\n"));
    }

    #[test]
    fn test_caption_appends_first_tag_only() {
        let text = caption(&character("9", "Rem 👑🎃", "Re:Zero"), 1, None);
        assert!(text.ends_with("\n\n🎃𝑯𝒆𝒍𝒍𝒐𝒘𝒆𝒆𝒏🎃"));
        assert!(!text.contains("𝑳𝒐𝒓𝒅"));
    }

    #[test]
    fn test_caption_escapes_names() {
        let text = caption(&character("1", "A & <B>", "X"), 1, None);
        assert!(text.contains("A &amp; &lt;B&gt;"));
    }

    #[test]
    fn test_remote_and_cached_photos() {
        let remote = Card::build(&character("1", "Rem", "Re:Zero"), 1, None, "r1".into()).unwrap();
        assert!(matches!(remote.photo, Photo::Remote(ref url) if url.as_str() == "https://files.example/1.jpg"));
        assert_eq!(remote.payload, "top10_grabbers_1");

        let mut cached = character("2", "Emilia", "Re:Zero");
        cached.img_url = "AgACAgUAAxkBAAIB".to_string();
        let card = Card::build(&cached, 1, None, "r2".into()).unwrap();
        assert_eq!(card.photo, Photo::Cached("AgACAgUAAxkBAAIB".to_string()));

        assert!(matches!(card.into_inline_result(), InlineQueryResult::CachedPhoto(_)));
        assert!(matches!(remote.into_inline_result(), InlineQueryResult::Photo(_)));
    }

    #[test]
    fn test_unparsable_http_url_is_skipped() {
        let mut broken = character("1", "Rem", "Re:Zero");
        broken.img_url = "http://".to_string();
        assert!(Card::build(&broken, 1, None, "r".into()).is_none());
    }

    #[test]
    fn test_inline_result_carries_caption_and_button() {
        let card = Card::build(&character("1", "Rem", "Re:Zero"), 1, None, "r1".into()).unwrap();
        let InlineQueryResult::Photo(photo) = card.into_inline_result() else {
            panic!("expected a photo result");
        };

        assert_eq!(photo.id, "r1");
        assert_eq!(photo.parse_mode, Some(ParseMode::Html));
        assert!(photo.caption.unwrap().contains("<b>1:</b> Rem"));
        let markup = photo.reply_markup.unwrap();
        assert_eq!(markup.inline_keyboard.len(), 1);
        assert_eq!(markup.inline_keyboard[0][0].text, LEADERBOARD_BUTTON);
    }
}
