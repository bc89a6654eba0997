pub mod cli;
pub mod config;
pub mod errors;
pub mod input;
pub mod ratings;
pub mod services;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use cli::Cli;

use crate::config::AppConfig;
use crate::services::{DemoService, QueryService};

pub fn interpret() -> Cli {
    Cli::parse()
}

pub fn load_config(no_color: bool) -> AppConfig {
    apply_flags(AppConfig::from_env(), no_color)
}

fn apply_flags(mut config: AppConfig, no_color: bool) -> AppConfig {
    if no_color {
        config.display.color = false;
    }
    config
}

pub fn handle_demo(config: AppConfig) -> Result<()> {
    let service = DemoService::new(config);
    println!("{}", service.run()?);
    Ok(())
}

pub fn handle_query<F>(config: AppConfig, query: F) -> Result<()>
where
    F: FnOnce(&QueryService) -> Result<String>,
{
    let service = QueryService::new(config)?;
    println!("{}", query(&service)?);
    Ok(())
}

pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_top_n(top_n: &str) -> AppConfig {
        let top_n = top_n.to_string();
        AppConfig::from_lookup(move |_| Some(top_n.clone()))
    }

    #[test]
    fn test_no_color_flag() {
        assert!(!apply_flags(AppConfig::new(), true).display.color);
        assert!(apply_flags(AppConfig::new(), false).display.color);
    }

    #[test]
    fn test_configured_top_n_drives_query_default() {
        let config = apply_flags(config_with_top_n("1"), true);
        let service = QueryService::new(config).unwrap();

        assert_eq!(service.top("1:5,2:4", None).unwrap(), "Top 1\n  1:5.0\n");
    }

    #[test]
    fn test_cli_n_overrides_configured_top_n() {
        let config = apply_flags(config_with_top_n("1"), true);
        let service = QueryService::new(config).unwrap();

        assert_eq!(
            service.top("1:5,2:4,3:3", Some(2)).unwrap(),
            "Top 2\n  1:5.0\n  2:4.0\n"
        );
    }
}
