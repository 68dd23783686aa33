//! # ventcast — window scheduling CLI
//!
//! Composition root that wires the weather source into the planner and
//! prints when to open or close the window.
//!
//! ## Responsibilities
//! - Parse configuration (CLI args, env vars, config file)
//! - Initialise logging
//! - Construct the Bright Sky weather source (adapter)
//! - Construct the plan service, injecting the source via its port trait
//! - Render the plan in local time (text or JSON)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no scheduling logic belongs here.

mod cli;
mod config;
mod render;

use anyhow::Context;
use chrono::Local;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use ventcast_adapter_brightsky::BrightSkyClient;
use ventcast_app::services::plan_service::PlanService;
use ventcast_domain::query::ForecastQuery;

use crate::cli::{Cli, OutputFormat};
use crate::config::Config;

fn init_tracing(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|err| {
        eprintln!("ignoring invalid log filter {filter:?}: {err}");
        EnvFilter::new("ventcast=info")
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::resolve(&cli).context("failed to load configuration")?;
    init_tracing(&config.logging.filter);

    let band = config.comfort.band()?;
    let date = cli.date.unwrap_or_else(|| Local::now().date_naive());
    let query = ForecastQuery::new(date, cli.lat, cli.lon);
    tracing::debug!(?config, %query, "configuration resolved");

    // Weather source
    let source = BrightSkyClient::new(config.source).context("failed to build HTTP client")?;

    // Services
    let service = PlanService::new(source);

    let plan = service
        .plan_for(&query, &band)
        .await
        .with_context(|| format!("failed to plan window actions for {query}"))?;

    let output = match cli.format {
        OutputFormat::Text => render::text(&plan, &Local),
        OutputFormat::Json => render::json(&plan, &Local).context("failed to encode plan")?,
    };
    print!("{output}");
    if cli.format == OutputFormat::Json {
        println!();
    }
    Ok(())
}
