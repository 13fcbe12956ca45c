use anyhow::Result;

use game_revenue_estimator::cli::Command;
use game_revenue_estimator::{
    handle_classify, handle_completions, handle_estimate, handle_list, handle_search,
    handle_serve, interpret,
};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Serve { port } => handle_serve(*port),
        Command::Estimate {
            game_id,
            seed,
            json,
        } => handle_estimate(*game_id, *seed, *json),
        Command::Classify {
            title,
            genres,
            employees,
            mau,
        } => handle_classify(title, genres, employees.as_deref(), *mau),
        Command::List => handle_list(),
        Command::Search { query } => handle_search(query),
        Command::Completions { shell } => handle_completions(*shell),
    }
}
