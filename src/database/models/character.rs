//! Catalog character model.

use serde::{Deserialize, Serialize};

/// A collectible character as stored in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    /// Catalog identifier (e.g. "042").
    pub id: String,

    #[serde(default)]
    pub name: String,

    /// Series the character comes from.
    #[serde(default)]
    pub anime: String,

    /// Stored as "<symbol> <label>", e.g. "🟡 Legendary".
    #[serde(default)]
    pub rarity: String,

    /// Either an absolute http(s) URL or a Telegram file id.
    #[serde(default)]
    pub img_url: String,
}

/// Borrowed two-part view over a stored rarity string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rarity<'a> {
    pub symbol: &'a str,
    pub label: &'a str,
}

impl Character {
    /// Split the stored rarity into its symbol and label.
    pub fn rarity(&self) -> Rarity<'_> {
        let raw = self.rarity.trim();

        if let Some((symbol, label)) = raw.split_once(char::is_whitespace) {
            return Rarity {
                symbol,
                label: label.trim_start(),
            };
        }

        // No separator: first scalar is the symbol, the rest is the label.
        let split = raw.chars().next().map(char::len_utf8).unwrap_or(0);
        Rarity {
            symbol: &raw[..split],
            label: &raw[split..],
        }
    }

    /// Whether the image reference is a remote URL rather than a file id.
    pub fn has_remote_image(&self) -> bool {
        self.img_url.starts_with("http")
    }

    /// Case-insensitive substring match over name, rarity, id and anime.
    ///
    /// `needle` must already be lowercase.
    pub fn matches(&self, needle: &str) -> bool {
        [&self.name, &self.rarity, &self.id, &self.anime]
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}

#[cfg(test)]
pub(crate) fn character(id: &str, name: &str, anime: &str) -> Character {
    Character {
        id: id.to_string(),
        name: name.to_string(),
        anime: anime.to_string(),
        rarity: "🟡 Legendary".to_string(),
        img_url: format!("https://files.example/{id}.jpg"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rarity_split_on_space() {
        let c = character("1", "Rem", "Re:Zero");
        let rarity = c.rarity();
        assert_eq!(rarity.symbol, "🟡");
        assert_eq!(rarity.label, "Legendary");
    }

    #[test]
    fn test_rarity_without_separator() {
        let mut c = character("1", "Rem", "Re:Zero");
        c.rarity = "⚪Common".to_string();
        let rarity = c.rarity();
        assert_eq!(rarity.symbol, "⚪");
        assert_eq!(rarity.label, "Common");

        c.rarity.clear();
        assert_eq!(c.rarity(), Rarity { symbol: "", label: "" });
    }

    #[test]
    fn test_matches_is_case_insensitive_across_fields() {
        let c = character("C042", "Naruto Uzumaki", "Naruto");
        assert!(c.matches("naruto"));
        assert!(c.matches("c042"));
        assert!(c.matches("legend"));
        assert!(!c.matches("sasuke"));
    }

    #[test]
    fn test_remote_image_detection() {
        let mut c = character("1", "Rem", "Re:Zero");
        assert!(c.has_remote_image());

        c.img_url = "AgACAgUAAxkBAAIB".to_string();
        assert!(!c.has_remote_image());
    }
}
