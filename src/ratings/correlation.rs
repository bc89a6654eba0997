use std::collections::HashMap;

use log::{debug, warn};

use super::error::{RatingsError, Result};
use super::list::RatingsList;
use super::types::{MovieId, Rating};

/// Running sums of the Pearson formula over movies rated in both lists.
#[derive(Debug, Default, Clone, Copy)]
struct PearsonSums {
    n: usize,
    sum_xy: f64,
    sum_x: f64,
    sum_y: f64,
    sum_x2: f64,
    sum_y2: f64,
    x_range: Option<(Rating, Rating)>,
    y_range: Option<(Rating, Rating)>,
}

impl PearsonSums {
    fn add(&mut self, x: Rating, y: Rating) {
        self.n += 1;
        self.sum_xy += x * y;
        self.sum_x += x;
        self.sum_y += y;
        self.sum_x2 += x * x;
        self.sum_y2 += y * y;
        self.x_range = Some(widen(self.x_range, x));
        self.y_range = Some(widen(self.y_range, y));
    }

    /// No shared movies, or every shared rating equal on one side.
    fn is_degenerate(&self) -> bool {
        self.n == 0
            || is_constant(self.x_range)
            || is_constant(self.y_range)
            || self.spread_term(self.sum_x, self.sum_x2) <= 0.0
            || self.spread_term(self.sum_y, self.sum_y2) <= 0.0
    }

    fn spread_term(&self, sum: f64, sum_sq: f64) -> f64 {
        self.n as f64 * sum_sq - sum * sum
    }

    fn coefficient(&self) -> f64 {
        let n = self.n as f64;
        let numerator = n * self.sum_xy - self.sum_x * self.sum_y;
        let spread_x = self.spread_term(self.sum_x, self.sum_x2).sqrt();
        let spread_y = self.spread_term(self.sum_y, self.sum_y2).sqrt();
        numerator / (spread_x * spread_y)
    }
}

fn widen(range: Option<(Rating, Rating)>, value: Rating) -> (Rating, Rating) {
    match range {
        Some((low, high)) => (low.min(value), high.max(value)),
        None => (value, value),
    }
}

fn is_constant(range: Option<(Rating, Rating)>) -> bool {
    range.is_some_and(|(low, high)| low == high)
}

impl RatingsList {
    /// Pearson correlation between this list and `other`, over the movies
    /// rated in both.
    ///
    /// No shared movies, or a constant rating on either side, gives a
    /// non-finite value. Use [`RatingsList::similarity`] to get that case as
    /// an error.
    pub fn compute_correlation(&self, other: &RatingsList) -> f64 {
        let sums = self.shared_sums(other);
        debug!("Correlation over {} shared movies", sums.n);
        sums.coefficient()
    }

    /// Like `compute_correlation`, but no shared movies or a constant rating
    /// on either side is reported as `RatingsError::DegenerateCorrelation`,
    /// even when rounding leaves the raw formula finite.
    pub fn similarity(&self, other: &RatingsList) -> Result<f64> {
        let sums = self.shared_sums(other);
        let coefficient = sums.coefficient();

        if !sums.is_degenerate() && coefficient.is_finite() {
            Ok(coefficient)
        } else {
            warn!(
                "No meaningful correlation over {} shared movies",
                sums.n
            );
            Err(RatingsError::DegenerateCorrelation { shared: sums.n })
        }
    }

    fn shared_sums(&self, other: &RatingsList) -> PearsonSums {
        let own = self.rating_map();
        let mut sums = PearsonSums::default();

        for node in other.iter() {
            if let Some(&y) = own.get(&node.movie_id()) {
                sums.add(node.rating(), y);
            }
        }
        sums
    }

    fn rating_map(&self) -> HashMap<MovieId, Rating> {
        self.iter()
            .map(|node| (node.movie_id(), node.rating()))
            .collect()
    }
}
