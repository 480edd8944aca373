use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::{
    config::{Config, DEFAULT_CONFIG_PATH},
    dashboard::filter::JobFilter,
    page_scrapers::BrowserSession
};

mod aggregate;
mod config;
mod dashboard;
mod page_scrapers;
mod postings;
mod store;


#[derive(Parser)]
#[command(about = "Scrapes software engineering jobs from a portfolio job board and serves them on a dashboard")]
struct Cmd {
    /// Path to the TOML configuration. Defaults apply if it does not exist.
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,
    #[command(subcommand)]
    command: SubCommandType
}


#[derive(Subcommand)]
enum SubCommandType {
    /// Scrape every company and replace the saved job list
    Scrape,
    /// Serve the dashboard over the saved job list
    Serve {
        #[arg(long)]
        port: Option<u16>
    },
    /// Print saved jobs that pass the dashboard filters
    List {
        #[arg(long, default_value = "")]
        search: String,
        #[arg(long, default_value = "")]
        company: String,
        #[arg(long, default_value = "")]
        location: String
    }
}


#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Cmd::parse();
    let mut config = Config::load(&args.config)?;

    match args.command {
        SubCommandType::Scrape => scrape(config).await,
        SubCommandType::Serve { port } => {
            if let Some(port) = port {
                config.server.port = port;
            }
            dashboard::listen(&config.server, &config.output).await
        }
        SubCommandType::List { search, company, location } => {
            list(&config, &JobFilter { search, company, location })
        }
    }
}


async fn scrape(config: Config) -> anyhow::Result<()> {
    let scrape_config = config.scrape.clone();
    let jobs = tokio_rayon::spawn(move || -> anyhow::Result<_> {
        let session = BrowserSession::launch(&scrape_config)?;
        let jobs = aggregate::scrape_all_jobs(&session, &scrape_config);
        session.close();
        Ok(jobs?)
    }).await?;

    println!("{}", aggregate::summary(&jobs));

    let output = &config.output;
    store::save_json(&jobs, &output.json_path).context("Failed to save the job list")?;
    println!("Saved {} jobs to {}", jobs.len(), output.json_path.display());
    if store::save_csv(&jobs, &output.csv_path)? {
        println!("Saved {} jobs to {}", jobs.len(), output.csv_path.display());
    } else {
        println!("No jobs to save to {}", output.csv_path.display());
    }
    Ok(())
}


fn list(config: &Config, filter: &JobFilter) -> anyhow::Result<()> {
    let jobs = store::load_jobs(&config.output.json_path)?;
    let matched = filter.apply(&jobs);
    for job in &matched {
        println!("{} | {} | {} | {}", job.company, job.title, job.location, job.url);
    }
    println!("{} of {} jobs", matched.len(), jobs.len());
    Ok(())
}
