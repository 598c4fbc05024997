//! Offset-based paging over inline results.

/// Results per inline answer.
pub const PAGE_SIZE: usize = 50;

/// One page of candidates and the token for the next one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    /// Empty when there is nothing after this page.
    pub next_offset: String,
}

/// Parse the platform's continuation token. Empty or garbage means 0.
pub fn parse_offset(token: &str) -> usize {
    token.trim().parse().unwrap_or(0)
}

/// Slice `[offset, offset + PAGE_SIZE)` out of `items`.
pub fn paginate<T>(items: &[T], offset: usize) -> Page<'_, T> {
    let start = offset.min(items.len());
    let end = offset.saturating_add(PAGE_SIZE).min(items.len());

    let next_offset = if items.len() > offset.saturating_add(PAGE_SIZE) {
        (offset + PAGE_SIZE).to_string()
    } else {
        String::new()
    };

    Page {
        items: &items[start..end],
        next_offset,
    }
}
