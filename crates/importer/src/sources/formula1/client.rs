use std::time::Duration;

use crate::Result;
use crate::sources::HttpFetcher;

pub const FORMULA1_WEBSITE: &str = "https://www.formula1.com";

const DRIVERS_PATH: &str = "/en/drivers.html";
const TEAMS_PATH: &str = "/en/teams.html";
const RESULTS_PATH: &str = "/en/results.html";

pub struct Formula1Client {
    base_url: String,
    http: HttpFetcher,
}

impl Formula1Client {
    pub fn new(timeout: Duration) -> Result<Self> {
        Self::with_base_url(FORMULA1_WEBSITE, timeout)
    }

    pub fn with_base_url(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: HttpFetcher::new(timeout)?,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn fetch_drivers_page(&self) -> Result<String> {
        self.fetch_page(DRIVERS_PATH).await
    }

    pub async fn fetch_teams_page(&self) -> Result<String> {
        self.fetch_page(TEAMS_PATH).await
    }

    pub async fn fetch_results_page(&self) -> Result<String> {
        self.fetch_page(RESULTS_PATH).await
    }

    async fn fetch_page(&self, path: &str) -> Result<String> {
        let url = format!("{}{}", self.base_url, path);
        self.http.get_text(&url).await
    }
}
