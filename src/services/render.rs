use anyhow::{Context, Result};
use colored::Colorize;

use crate::config::settings::DisplaySettings;
use crate::ratings::{RatingNode, RatingsList};

/// Formats ratings lists for the terminal
pub struct ListRenderer {
    precision: usize,
    color: bool,
}

impl ListRenderer {
    pub fn new(settings: &DisplaySettings) -> Self {
        Self {
            precision: settings.precision,
            color: settings.color,
        }
    }

    pub fn render(&self, title: &str, list: &RatingsList) -> String {
        let mut output = self.heading(title);
        output.push('\n');

        if list.is_empty() {
            output.push_str("  (empty)\n");
        }
        for node in list {
            output.push_str(&format!("  {}\n", self.render_node(node)));
        }
        output
    }

    pub fn render_json(&self, list: &RatingsList) -> Result<String> {
        serde_json::to_string_pretty(list).context("Failed to serialize ratings list")
    }

    pub fn render_correlation(&self, value: Option<f64>) -> String {
        match value {
            Some(value) => format!("{} {:.4}", self.heading("Similarity:"), value),
            None => format!(
                "{} no meaningful correlation",
                self.heading("Similarity:")
            ),
        }
    }

    fn render_node(&self, node: &RatingNode) -> String {
        let id = node.movie_id().to_string();
        let rating = format!("{:.*}", self.precision, node.rating());
        if self.color {
            format!("{}:{}", id.cyan(), rating.yellow())
        } else {
            format!("{}:{}", id, rating)
        }
    }

    fn heading(&self, title: &str) -> String {
        if self.color {
            title.bold().to_string()
        } else {
            title.to_string()
        }
    }
}
