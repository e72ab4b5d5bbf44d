use anyhow::{Context, Result};

use crate::archiver;
use crate::config::ScrapeConfig;
use crate::fetcher::Fetch;
use crate::models::{CharacteristicMap, ResultSet};
use crate::parser;

/// One full scrape pass: listing -> links -> per-item fetch+extract ->
/// JSON file. Returns the number of products written.
///
/// A listing-level failure aborts the run before any file is written.
/// Per-item failures are logged to stderr and skipped.
pub fn run(config: &ScrapeConfig, fetcher: &impl Fetch) -> Result<usize> {
    let listing_url = config.listing_url();
    log::info!("Fetching listing page {}", listing_url);
    let listing_html = fetcher
        .fetch(&listing_url)
        .with_context(|| format!("Failed to fetch listing page {}", listing_url))?;

    let links = parser::extract_links(&listing_html, &config.base_url);
    log::info!("Discovered {} detail links", links.len());

    let mut results = ResultSet::new();
    for link in links.iter().take(config.max_items) {
        match process_item(fetcher, link) {
            Ok(characteristics) => results.push(characteristics),
            Err(e) => eprintln!("Error processing {}: {:#}", link, e),
        }
    }

    archiver::save_to_file(&results, &config.output_path)?;
    log::info!(
        "Wrote {} products to {}",
        results.len(),
        config.output_path
    );
    Ok(results.len())
}

fn process_item(fetcher: &impl Fetch, url: &str) -> Result<CharacteristicMap> {
    log::debug!("Fetching detail page {}", url);
    let html = fetcher.fetch(url)?;
    Ok(parser::extract_characteristics(&html))
}
