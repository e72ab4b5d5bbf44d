/// Run parameters for one scrape pass.
///
/// The defaults are the production values; tests construct their own
/// config pointing at stub endpoints and temp output paths.
#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    /// Site origin, no trailing slash. Relative hrefs are joined onto this.
    pub base_url: String,
    /// Path of the catalog listing page, relative to `base_url`.
    pub listing_path: String,
    /// Detail pages past this cap are never visited.
    pub max_items: usize,
    /// Output file, fully overwritten each run.
    pub output_path: String,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        ScrapeConfig {
            base_url: "https://ecco.kz".to_string(),
            listing_path: "/catalog/420113/01001/".to_string(),
            max_items: 10,
            output_path: "boots.json".to_string(),
        }
    }
}

impl ScrapeConfig {
    pub fn listing_url(&self) -> String {
        format!("{}{}", self.base_url, self.listing_path)
    }
}
