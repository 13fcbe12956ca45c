use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser, Debug)]
#[command(author, version, about = "Game revenue estimator")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Start the JSON API server
    Serve {
        /// Port number (optional, defaults to 3000)
        #[arg(short, long, default_value_t = 3000)]
        port: u16,
    },
    /// Estimate revenue for a game from the catalog
    Estimate {
        /// Catalog game id
        game_id: i64,
        /// Seed for the monthly variation, for reproducible output
        #[arg(long)]
        seed: Option<u64>,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Classify a game and compute its metrics without any network access
    Classify {
        /// Game title
        #[arg(short, long)]
        title: String,
        /// Genre tag, e.g. RPG (repeatable)
        #[arg(short, long = "genre")]
        genres: Vec<String>,
        /// Developer headcount range, e.g. "51-100"
        #[arg(short, long)]
        employees: Option<String>,
        /// Average monthly active users
        #[arg(short, long)]
        mau: Option<f64>,
    },
    /// List games from the catalog
    List,
    /// Search the catalog by title
    Search {
        /// Search text
        query: String,
    },
    /// Print shell completions
    Completions {
        /// Target shell
        shell: Shell,
    },
}
