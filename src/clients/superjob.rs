use super::build_http_client;
use crate::config::SUPERJOB_BASE_URL;
use crate::crawler::{Page, PaginatedSource, get_json};
use crate::models::SuperJobVacancy;
use crate::{Error, Result};
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue};
use serde::Deserialize;
use std::time::Duration;

const APP_ID_HEADER: &str = "X-Api-App-Id";

#[derive(Debug, Clone, Copy)]
pub enum SuperJobTown {
    Moscow,
}

impl SuperJobTown {
    pub fn to_code(&self) -> u32 {
        match self {
            Self::Moscow => 4,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum SuperJobCatalogue {
    Development,
}

impl SuperJobCatalogue {
    pub fn to_word(&self) -> &str {
        match self {
            Self::Development => "Разработка, программирование",
        }
    }
}

#[derive(Debug, Clone)]
pub struct SuperJobConfig {
    pub base_url: String,
    pub app_key: String,
    pub town: SuperJobTown,
    pub catalogue: SuperJobCatalogue,
    /// Vacancies per page.
    pub count: u32,
    pub max_pages: usize,
    pub request_delay: Duration,
}

impl Default for SuperJobConfig {
    fn default() -> Self {
        Self {
            base_url: SUPERJOB_BASE_URL.to_string(),
            app_key: String::new(),
            town: SuperJobTown::Moscow,
            catalogue: SuperJobCatalogue::Development,
            count: 50,
            max_pages: 25,
            request_delay: Duration::ZERO,
        }
    }
}

pub struct SuperJobClient {
    client: Client,
    config: SuperJobConfig,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    objects: Vec<SuperJobVacancy>,
    #[serde(default)]
    total: u64,
    #[serde(default)]
    more: bool,
}

impl SuperJobClient {
    pub fn new(config: SuperJobConfig) -> Result<Self> {
        let app_key = HeaderValue::from_str(config.app_key.trim())
            .map_err(|_| Error::Config("SuperJob app key is not a valid header value".into()))?;
        let mut headers = HeaderMap::new();
        headers.insert(APP_ID_HEADER, app_key);

        Ok(Self {
            client: build_http_client(headers)?,
            config,
        })
    }

    fn search_url(&self) -> String {
        format!("{}/2.0/vacancies/", self.config.base_url.trim_end_matches('/'))
    }
}

impl PaginatedSource for SuperJobClient {
    type Item = SuperJobVacancy;

    fn name(&self) -> &str {
        "SuperJob"
    }

    fn max_pages(&self) -> usize {
        self.config.max_pages
    }

    fn request_delay(&self) -> Duration {
        self.config.request_delay
    }

    fn fetch_page(&self, keyword: &str, page: usize) -> Result<Page<SuperJobVacancy>> {
        let request = self.client.get(self.search_url()).query(&[
            ("catalogues", self.config.catalogue.to_word().to_string()),
            ("keyword", keyword.to_string()),
            ("town", self.config.town.to_code().to_string()),
            ("count", self.config.count.to_string()),
            ("page", page.to_string()),
        ]);
        let response: SearchResponse = get_json(request)?;

        Ok(Page {
            has_more: response.more,
            found: response.total,
            items: response.objects,
        })
    }
}
