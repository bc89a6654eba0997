mod correlation;
mod derived;
pub mod error;
pub mod iter;
mod list;
mod node;
pub mod types;

pub use error::RatingsError;
pub use iter::{IntoIter, Iter};
pub use list::RatingsList;
pub use node::RatingNode;
pub use types::{MovieId, Rating, RatingEntry};
