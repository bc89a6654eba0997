use thiserror::Error;

use super::types::MovieId;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum RatingsError {
    #[error("No rating for movie {0}")]
    NotFound(MovieId),

    #[error("Correlation is undefined over {shared} shared movies")]
    DegenerateCorrelation { shared: usize },
}

pub type Result<T> = std::result::Result<T, RatingsError>;
