mod config;
mod error;
mod models;
mod pipeline;
mod report;
mod salary;
mod scrapers;

use config::Config;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging; stdout is reserved for the tables
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    info!("💼 Salary Scout - HeadHunter & SuperJob");

    let config = Config::from_env()?;
    info!(
        "Languages: {} (delay {:?} between requests)",
        config.languages.join(", "),
        config.request_delay
    );

    let tables = pipeline::run(&config).await?;
    println!("{}", tables);

    Ok(())
}
