use super::build_http_client;
use crate::config::HH_BASE_URL;
use crate::crawler::{Page, PaginatedSource, get_json};
use crate::models::HhVacancy;
use crate::Result;
use reqwest::blocking::Client;
use reqwest::header::HeaderMap;
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Clone, Copy)]
pub enum HhArea {
    Russia,
}

impl HhArea {
    pub fn to_code(&self) -> u32 {
        match self {
            Self::Russia => 113,
        }
    }
}

#[derive(Debug, Clone)]
pub struct HeadHunterConfig {
    pub base_url: String,
    pub area: HhArea,
    /// Only vacancies published within this many days.
    pub period_days: u32,
    pub per_page: u32,
    pub max_pages: usize,
    pub request_delay: Duration,
}

impl Default for HeadHunterConfig {
    fn default() -> Self {
        Self {
            base_url: HH_BASE_URL.to_string(),
            area: HhArea::Russia,
            period_days: 30,
            per_page: 100,
            max_pages: 25,
            request_delay: Duration::ZERO,
        }
    }
}

pub struct HeadHunterClient {
    client: Client,
    config: HeadHunterConfig,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<HhVacancy>,
    #[serde(default)]
    found: u64,
    #[serde(default)]
    pages: u64,
}

impl HeadHunterClient {
    pub fn new(config: HeadHunterConfig) -> Result<Self> {
        Ok(Self {
            client: build_http_client(HeaderMap::new())?,
            config,
        })
    }

    fn search_url(&self) -> String {
        format!("{}/vacancies", self.config.base_url.trim_end_matches('/'))
    }
}

impl PaginatedSource for HeadHunterClient {
    type Item = HhVacancy;

    fn name(&self) -> &str {
        "HeadHunter"
    }

    fn max_pages(&self) -> usize {
        self.config.max_pages
    }

    fn request_delay(&self) -> Duration {
        self.config.request_delay
    }

    fn fetch_page(&self, keyword: &str, page: usize) -> Result<Page<HhVacancy>> {
        let request = self.client.get(self.search_url()).query(&[
            ("text", keyword.to_string()),
            ("per_page", self.config.per_page.to_string()),
            ("page", page.to_string()),
            ("area", self.config.area.to_code().to_string()),
            ("only_with_salary", "true".to_string()),
            ("period", self.config.period_days.to_string()),
        ]);
        let response: SearchResponse = get_json(request)?;

        Ok(Page {
            has_more: (page as u64) + 1 < response.pages,
            found: response.found,
            items: response.items,
        })
    }
}
