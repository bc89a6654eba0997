use log::warn;

const TOP_N_ENV: &str = "MOVIE_RATINGS_TOP_N";

pub struct SelectionSettings {
    pub top_n: usize,
    pub range_low: f64,
    pub range_high: f64,
}

impl Default for SelectionSettings {
    fn default() -> Self {
        Self {
            top_n: 3,
            range_low: 1.0,
            range_high: 2.0,
        }
    }
}

pub struct DisplaySettings {
    pub precision: usize,
    pub color: bool,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            precision: 1,
            color: true,
        }
    }
}

pub struct AppConfig {
    pub selection: SelectionSettings,
    pub display: DisplaySettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            selection: SelectionSettings::default(),
            display: DisplaySettings::default(),
        }
    }

    /// Defaults, with the top-N size taken from the environment when set
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults, with overrides read through `lookup`
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::new();
        if let Some(value) = lookup(TOP_N_ENV) {
            config.apply_top_n(&value);
        }
        config
    }

    fn apply_top_n(&mut self, value: &str) {
        match value.trim().parse() {
            Ok(top_n) => self.selection.top_n = top_n,
            Err(_) => warn!("Ignoring {}={}: not a count", TOP_N_ENV, value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();

        assert_eq!(config.selection.top_n, 3);
        assert_eq!(config.selection.range_low, 1.0);
        assert_eq!(config.selection.range_high, 2.0);
        assert_eq!(config.display.precision, 1);
    }

    #[test]
    fn test_top_n_from_lookup() {
        let config = AppConfig::from_lookup(|key| {
            (key == "MOVIE_RATINGS_TOP_N").then(|| "5".to_string())
        });
        assert_eq!(config.selection.top_n, 5);

        let config = AppConfig::from_lookup(|_| None);
        assert_eq!(config.selection.top_n, 3);

        let config = AppConfig::from_lookup(|_| Some("-2".to_string()));
        assert_eq!(config.selection.top_n, 3);
    }

    #[test]
    fn test_top_n_override() {
        let mut config = AppConfig::new();

        config.apply_top_n(" 7 ");
        assert_eq!(config.selection.top_n, 7);

        config.apply_top_n("many");
        assert_eq!(config.selection.top_n, 7);
    }
}
