use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser, Debug)]
#[command(author, version, about = "movie ratings lists")]
pub struct Cli {
    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Run every list operation on a small built-in example
    Demo,
    /// Print a ratings list sorted from best to worst
    Show {
        /// Ratings as id:rating pairs, e.g. "1:5.0,3:2.0"
        #[arg(short, long)]
        ratings: String,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the best rated movies
    Top {
        /// Ratings as id:rating pairs
        #[arg(short, long)]
        ratings: String,
        /// How many movies (optional, defaults to 3)
        #[arg(short)]
        n: Option<usize>,
    },
    /// Print the movies rated within an inclusive range
    Range {
        /// Ratings as id:rating pairs
        #[arg(short, long)]
        ratings: String,
        /// Lower bound (optional, defaults to 1.0)
        #[arg(long)]
        low: Option<f64>,
        /// Upper bound (optional, defaults to 2.0)
        #[arg(long)]
        high: Option<f64>,
    },
    /// Print a ratings list from worst to best
    Reverse {
        /// Ratings as id:rating pairs
        #[arg(short, long)]
        ratings: String,
    },
    /// Print the movie ids in list order
    Ids {
        /// Ratings as id:rating pairs
        #[arg(short, long)]
        ratings: String,
    },
    /// Change one rating and print the re-sorted list
    Set {
        /// Ratings as id:rating pairs
        #[arg(short, long)]
        ratings: String,
        /// Movie to change
        #[arg(short, long)]
        movie: i32,
        /// New rating
        #[arg(long)]
        rating: f64,
    },
    /// Pearson similarity between two users' ratings
    Correlate {
        /// First user's ratings as id:rating pairs
        #[arg(short, long)]
        left: String,
        /// Second user's ratings as id:rating pairs
        #[arg(short, long)]
        right: String,
    },
    /// Generate shell completions
    Completions {
        /// Target shell
        shell: Shell,
    },
}
