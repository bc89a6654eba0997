use anyhow::Result;
use log::info;

use crate::config::AppConfig;
use crate::errors::with_update_context;
use crate::ratings::RatingsList;

use super::render::ListRenderer;

/// Walks through every list operation on a small fixed example
pub struct DemoService {
    config: AppConfig,
    renderer: ListRenderer,
}

impl DemoService {
    pub fn new(config: AppConfig) -> Self {
        let renderer = ListRenderer::new(&config.display);
        Self { config, renderer }
    }

    pub fn run(&self) -> Result<String> {
        info!("=== Running ratings list demo ===");

        let list = self.build_sample()?;
        let selection = &self.config.selection;

        let sections = [
            self.renderer.render("Ratings", &list),
            self.renderer.render(
                &format!("Top {}", selection.top_n),
                &list.n_best_ranked(selection.top_n),
            ),
            self.renderer.render(
                &format!("Ratings in [{}, {}]", selection.range_low, selection.range_high),
                &list.sublist(selection.range_low, selection.range_high),
            ),
            self.renderer.render("Reversed", &list.reverse()),
        ];

        Ok(sections.join("\n"))
    }

    /// The appends deliberately break the ordering to show the difference
    /// from sorted insertion.
    fn build_sample(&self) -> Result<RatingsList> {
        let mut list = RatingsList::new();
        list.append(1, 5.0);
        list.insert_by_rating(3, 2.0);
        list.insert_by_rating(6, 2.0);
        list.append(7, 3.0);
        with_update_context(list.set_rating(3, 1.0), "change", 3)?;
        Ok(list)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_output() {
        let mut config = AppConfig::new();
        config.display.color = false;

        let output = DemoService::new(config).run().unwrap();

        let expected = "Ratings\n  1:5.0\n  6:2.0\n  7:3.0\n  3:1.0\n\
                        \n\
                        Top 3\n  1:5.0\n  6:2.0\n  7:3.0\n\
                        \n\
                        Ratings in [1, 2]\n  6:2.0\n  3:1.0\n\
                        \n\
                        Reversed\n  3:1.0\n  7:3.0\n  6:2.0\n  1:5.0\n";
        assert_eq!(output, expected);
    }
}
