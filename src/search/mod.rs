//! Inline search: query parsing, resolution and paging.

mod pagination;
mod query;
mod resolver;

use query::SearchQuery;

pub use pagination::{paginate, parse_offset};
pub use resolver::QueryResolver;
