use anyhow::Result;
use log::info;

use crate::config::AppConfig;
use crate::errors::with_update_context;
use crate::input::PairParser;
use crate::ratings::{MovieId, Rating, RatingsList};

use super::render::ListRenderer;

/// Answers one-shot questions about ratings lists given on the command line
pub struct QueryService {
    config: AppConfig,
    parser: PairParser,
    renderer: ListRenderer,
}

impl QueryService {
    pub fn new(config: AppConfig) -> Result<Self> {
        let renderer = ListRenderer::new(&config.display);
        Ok(Self {
            config,
            parser: PairParser::new()?,
            renderer,
        })
    }

    pub fn show(&self, ratings: &str, json: bool) -> Result<String> {
        let list = self.load(ratings)?;
        if json {
            self.renderer.render_json(&list)
        } else {
            Ok(self.renderer.render("Ratings", &list))
        }
    }

    pub fn top(&self, ratings: &str, n: Option<usize>) -> Result<String> {
        let list = self.load(ratings)?;
        let n = n.unwrap_or(self.config.selection.top_n);
        let best = list.n_best_ranked(n);
        Ok(self.renderer.render(&format!("Top {}", n), &best))
    }

    pub fn range(&self, ratings: &str, low: Option<Rating>, high: Option<Rating>) -> Result<String> {
        let list = self.load(ratings)?;
        let low = low.unwrap_or(self.config.selection.range_low);
        let high = high.unwrap_or(self.config.selection.range_high);
        let sub = list.sublist(low, high);
        Ok(self.renderer.render(&format!("Ratings in [{}, {}]", low, high), &sub))
    }

    pub fn reverse(&self, ratings: &str) -> Result<String> {
        let list = self.load(ratings)?;
        Ok(self.renderer.render("Reversed", &list.reverse()))
    }

    pub fn ids(&self, ratings: &str) -> Result<String> {
        let list = self.load(ratings)?;
        let ids = list
            .movie_ids()
            .iter()
            .map(MovieId::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        Ok(ids)
    }

    pub fn set(&self, ratings: &str, movie_id: MovieId, rating: Rating) -> Result<String> {
        let mut list = self.load(ratings)?;
        with_update_context(list.set_rating(movie_id, rating), "change", movie_id)?;
        Ok(self.renderer.render("Ratings", &list))
    }

    pub fn correlate(&self, left: &str, right: &str) -> Result<String> {
        let left = self.load(left)?;
        let right = self.load(right)?;
        let similarity = left.similarity(&right).ok();
        Ok(self.renderer.render_correlation(similarity))
    }

    fn load(&self, ratings: &str) -> Result<RatingsList> {
        let list = self.parser.parse_list(ratings)?;
        info!("Loaded {} ratings", list.len());
        Ok(list)
    }
}
