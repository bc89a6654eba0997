use anyhow::{Context, Result, bail};
use log::debug;
use regex::Regex;

use crate::errors::with_parse_context;
use crate::ratings::{MovieId, Rating, RatingEntry, RatingsList};

/// Parser for `id:rating` tokens separated by commas and/or whitespace
pub struct PairParser {
    pair_regex: Regex,
}

impl PairParser {
    pub fn new() -> Result<Self> {
        Ok(Self {
            pair_regex: Self::compile_regex()?,
        })
    }

    /// Parse pairs in input order
    pub fn parse_pairs(&self, input: &str) -> Result<Vec<RatingEntry>> {
        let entries = tokens(input)
            .map(|token| self.parse_token(token))
            .collect::<Result<Vec<_>>>()?;
        debug!("Parsed {} rating pairs", entries.len());
        Ok(entries)
    }

    /// Parse pairs and insert them by rating into a new list
    pub fn parse_list(&self, input: &str) -> Result<RatingsList> {
        let entries = with_parse_context(self.parse_pairs(input), "ratings list")?;
        Ok(entries.into_iter().collect())
    }

    fn parse_token(&self, token: &str) -> Result<RatingEntry> {
        let Some(captures) = self.pair_regex.captures(token) else {
            bail!("Expected id:rating, got '{}'", token);
        };

        let movie_id: MovieId = captures[1]
            .parse()
            .with_context(|| format!("Invalid movie id in '{}'", token))?;
        let rating: Rating = captures[2]
            .parse()
            .with_context(|| format!("Invalid rating in '{}'", token))?;

        Ok(RatingEntry::new(movie_id, rating))
    }

    fn compile_regex() -> Result<Regex> {
        Regex::new(r"^(-?\d+):(-?\d+(?:\.\d+)?)$").context("Failed to compile rating pair regex")
    }
}

fn tokens(input: &str) -> impl Iterator<Item = &str> {
    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
}
