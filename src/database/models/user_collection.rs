//! Per-user collection model.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::Character;

/// A user's owned characters. Duplicates are separate copies.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserCollection {
    /// Telegram user ID.
    pub id: i64,

    #[serde(default)]
    pub first_name: Option<String>,

    #[serde(default)]
    pub username: Option<String>,

    #[serde(default)]
    pub characters: Vec<Character>,
}

impl UserCollection {
    /// First name, or the numeric id when the user never set one.
    pub fn display_name(&self) -> String {
        match self.first_name.as_deref() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => self.id.to_string(),
        }
    }

    /// One entry per distinct character id.
    ///
    /// Keeps the position of the first copy but the data of the last one,
    /// so a re-grabbed character shows its most recent record.
    pub fn unique_characters(&self) -> Vec<Character> {
        let mut positions: HashMap<&str, usize> = HashMap::with_capacity(self.characters.len());
        let mut unique: Vec<Character> = Vec::with_capacity(self.characters.len());

        for character in &self.characters {
            match positions.get(character.id.as_str()) {
                Some(&pos) => unique[pos] = character.clone(),
                None => {
                    positions.insert(character.id.as_str(), unique.len());
                    unique.push(character.clone());
                }
            }
        }

        unique
    }

    /// Number of copies of `character_id` in the collection.
    pub fn copies_of(&self, character_id: &str) -> usize {
        self.characters
            .iter()
            .filter(|c| c.id == character_id)
            .count()
    }

    /// Number of owned copies belonging to `anime`.
    pub fn owned_in_series(&self, anime: &str) -> usize {
        self.characters.iter().filter(|c| c.anime == anime).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::models::character::character;

    fn collection() -> UserCollection {
        let mut old_rem = character("1", "Rem", "Re:Zero");
        old_rem.img_url = "old".to_string();
        let mut new_rem = character("1", "Rem", "Re:Zero");
        new_rem.img_url = "new".to_string();

        UserCollection {
            id: 42,
            first_name: Some("Alice".to_string()),
            username: None,
            characters: vec![
                old_rem,
                character("2", "Emilia", "Re:Zero"),
                character("3", "Naruto Uzumaki", "Naruto"),
                new_rem,
            ],
        }
    }

    #[test]
    fn test_unique_characters_prefers_last_occurrence() {
        let unique = collection().unique_characters();

        let ids: Vec<&str> = unique.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
        assert_eq!(unique[0].img_url, "new");
    }

    #[test]
    fn test_counts() {
        let c = collection();
        assert_eq!(c.copies_of("1"), 2);
        assert_eq!(c.copies_of("9"), 0);
        assert_eq!(c.owned_in_series("Re:Zero"), 3);
        assert_eq!(c.owned_in_series("Naruto"), 1);
    }

    #[test]
    fn test_display_name_falls_back_to_id() {
        let mut c = collection();
        assert_eq!(c.display_name(), "Alice");

        c.first_name = None;
        assert_eq!(c.display_name(), "42");

        c.first_name = Some(String::new());
        assert_eq!(c.display_name(), "42");
    }
}
