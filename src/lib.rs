pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod estimation;
pub mod http;
pub mod rate_limiter;
pub mod report;
pub mod services;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use cli::Cli;
use colored::Colorize;
use log::warn;

use crate::api::models::RevenueResponse;
use crate::cli::Command;
use crate::config::settings::AppConfig;
use crate::domain::{DeveloperScale, EmployeesBucket, GameRecord, Genre};
use crate::services::revenue::{RevenueRequest, RevenueService};
use crate::services::server::ServerService;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_serve(port: u16) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::new();
        let service = ServerService::new(port, config);
        service.run().await
    })
}

pub fn handle_estimate(game_id: i64, seed: Option<u64>, json: bool) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    let revenue = runtime.block_on(async {
        let config = AppConfig::new();
        let mut service = RevenueService::new(&config)?;
        if let Some(seed) = seed {
            service = service.with_seed(seed);
        }
        anyhow::Ok(service.estimate(&RevenueRequest::for_id(game_id)).await)
    })?;

    if json {
        let response = RevenueResponse::from(revenue);
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    println!("{}", report::render_report(&revenue));
    if report::build_chart(&revenue).is_none() {
        println!("\n{}", report::missing_chart_reason(&revenue).yellow());
    }
    Ok(())
}

pub fn handle_classify(
    title: &str,
    genres: &[String],
    employees: Option<&str>,
    mau: Option<f64>,
) -> Result<()> {
    let game = GameRecord {
        genres: genres.iter().map(|g| Genre::from_tag(g)).collect(),
        avg_monthly_active_users: mau.unwrap_or(0.0).max(0.0),
        ..GameRecord::bare(0, title)
    };

    let scale = employees.and_then(|text| {
        let bucket = EmployeesBucket::parse(text);
        if bucket.is_none() {
            warn!("Unrecognised headcount range '{}', using neutral studio scale", text);
        }
        bucket.map(DeveloperScale::new)
    });

    let metrics = estimation::compute_metrics(&game, scale.as_ref());

    println!("{}", title.bold());
    println!("  Game Type:                 {}", metrics.game_type.label().cyan());
    println!("  Conversion Rate:           {}", report::format_percentage(metrics.conversion_rate));
    println!("  ARPPU (per month):         {}", report::format_currency(metrics.arppu));
    if let Some(mau) = mau {
        let monthly = mau.max(0.0) * metrics.conversion_rate * metrics.arppu;
        println!(
            "  Estimated Monthly Revenue: {}",
            report::format_currency(monthly).green().bold()
        );
    }
    Ok(())
}

pub fn handle_list() -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    let games = runtime.block_on(async {
        let service = RevenueService::new(&AppConfig::new())?;
        service.catalog().list_games().await
    })?;
    println!("{}", report::render_game_list(&games));
    Ok(())
}

pub fn handle_search(query: &str) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    let games = runtime.block_on(async {
        let service = RevenueService::new(&AppConfig::new())?;
        service.catalog().search_games(query).await
    })?;
    println!("{}", report::render_game_list(&games));
    Ok(())
}

pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
    Ok(())
}
