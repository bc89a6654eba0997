use anyhow::Context as _;

use crate::ratings::{MovieId, RatingsError};

/// Add context to parse errors
pub fn parse_context(data_type: &str) -> String {
    format!("Failed to parse {}", data_type)
}

/// Wrap result with parse context
pub fn with_parse_context<T>(result: anyhow::Result<T>, data_type: &str) -> anyhow::Result<T> {
    result.with_context(|| parse_context(data_type))
}

/// Add context to list update errors
pub fn update_context(operation: &str, movie_id: MovieId) -> String {
    format!("Failed to {} rating of movie {}", operation, movie_id)
}

/// Wrap a list operation result with update context
pub fn with_update_context<T>(
    result: Result<T, RatingsError>,
    operation: &str,
    movie_id: MovieId,
) -> anyhow::Result<T> {
    result.context(update_context(operation, movie_id))
}
