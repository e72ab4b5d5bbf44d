mod archiver;
mod config;
mod fetcher;
mod models;
mod parser;
mod pipeline;
mod selectors;

use anyhow::Result;

use config::ScrapeConfig;
use fetcher::HttpFetcher;

fn main() -> Result<()> {
    env_logger::init();

    let config = ScrapeConfig::default();
    let fetcher = HttpFetcher::new()?;

    pipeline::run(&config, &fetcher)?;

    println!("Data successfully saved to {}", config.output_path);
    Ok(())
}
