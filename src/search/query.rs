//! Inline query text parsing.

/// Prefix that scopes a search to one user's collection.
pub const COLLECTION_PREFIX: &str = "collection.";

/// What the user typed, classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchQuery<'a> {
    /// Search the whole catalog. Empty text means "everything".
    Global { text: &'a str },

    /// Search inside one user's collection, optionally filtered.
    Scoped { user_id: i64, terms: Option<&'a str> },

    /// Scoped prefix with a user segment that is not a number.
    InvalidScope,
}

impl<'a> SearchQuery<'a> {
    /// Classify raw inline query text.
    ///
    /// `collection.<digits>[ <terms>]` is scoped; anything else is global.
    pub fn parse(raw: &'a str) -> Self {
        let Some(rest) = raw.strip_prefix(COLLECTION_PREFIX) else {
            return Self::Global { text: raw };
        };

        let (user_segment, terms) = match rest.split_once(' ') {
            Some((user, terms)) => (user, Some(terms.trim())),
            None => (rest, None),
        };

        if user_segment.is_empty() || !user_segment.bytes().all(|b| b.is_ascii_digit()) {
            return Self::InvalidScope;
        }

        match user_segment.parse::<i64>() {
            Ok(user_id) => Self::Scoped {
                user_id,
                terms: terms.filter(|t| !t.is_empty()),
            },
            Err(_) => Self::InvalidScope,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_global() {
        assert_eq!(SearchQuery::parse("naruto"), SearchQuery::Global { text: "naruto" });
        assert_eq!(SearchQuery::parse(""), SearchQuery::Global { text: "" });
    }

    #[test]
    fn test_scoped_with_and_without_terms() {
        assert_eq!(
            SearchQuery::parse("collection.12345"),
            SearchQuery::Scoped { user_id: 12345, terms: None }
        );
        assert_eq!(
            SearchQuery::parse("collection.12345 rem  "),
            SearchQuery::Scoped { user_id: 12345, terms: Some("rem") }
        );
        assert_eq!(
            SearchQuery::parse("collection.12345 re zero"),
            SearchQuery::Scoped { user_id: 12345, terms: Some("re zero") }
        );
        assert_eq!(
            SearchQuery::parse("collection.12345 "),
            SearchQuery::Scoped { user_id: 12345, terms: None }
        );
    }

    #[test]
    fn test_non_numeric_user_is_invalid() {
        assert_eq!(SearchQuery::parse("collection.abc"), SearchQuery::InvalidScope);
        assert_eq!(SearchQuery::parse("collection."), SearchQuery::InvalidScope);
        assert_eq!(SearchQuery::parse("collection.-5 rem"), SearchQuery::InvalidScope);
        assert_eq!(
            SearchQuery::parse("collection.99999999999999999999"),
            SearchQuery::InvalidScope
        );
    }

    #[test]
    fn test_prefix_is_case_sensitive() {
        assert_eq!(SearchQuery::parse("Collection.1"), SearchQuery::Global { text: "Collection.1" });
        assert!(matches!(SearchQuery::parse("collection.1"), SearchQuery::Scoped { user_id: 1, .. }));
    }
}
