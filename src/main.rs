use anyhow::Result;

use movie_ratings::cli::{Cli, Command};
use movie_ratings::{handle_completions, handle_demo, handle_query, interpret, load_config};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let cli = interpret();
    execute_command(&cli)
}

fn execute_command(cli: &Cli) -> Result<()> {
    let config = load_config(cli.no_color);

    match &cli.command {
        Command::Demo => handle_demo(config),
        Command::Show { ratings, json } => handle_query(config, |q| q.show(ratings, *json)),
        Command::Top { ratings, n } => handle_query(config, |q| q.top(ratings, *n)),
        Command::Range { ratings, low, high } => {
            handle_query(config, |q| q.range(ratings, *low, *high))
        }
        Command::Reverse { ratings } => handle_query(config, |q| q.reverse(ratings)),
        Command::Ids { ratings } => handle_query(config, |q| q.ids(ratings)),
        Command::Set {
            ratings,
            movie,
            rating,
        } => handle_query(config, |q| q.set(ratings, *movie, *rating)),
        Command::Correlate { left, right } => handle_query(config, |q| q.correlate(left, right)),
        Command::Completions { shell } => handle_completions(*shell),
    }
}
