use crate::{Error, Result};
use log::{debug, info};
use reqwest::blocking::RequestBuilder;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// One decoded page of a search response.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Total number of matches as reported by the source.
    pub found: u64,
    pub has_more: bool,
}

#[derive(Debug, Clone)]
pub struct SearchResult<T> {
    pub found: u64,
    pub items: Vec<T>,
}

pub trait PaginatedSource {
    type Item;

    fn name(&self) -> &str;

    fn max_pages(&self) -> usize;

    fn request_delay(&self) -> Duration {
        Duration::ZERO
    }

    fn fetch_page(&self, keyword: &str, page: usize) -> Result<Page<Self::Item>>;

    fn fetch_all(&self, keyword: &str) -> Result<SearchResult<Self::Item>> {
        let mut found = 0;
        let mut all_items = Vec::new();

        for page in 0..self.max_pages() {
            if page > 0 {
                crate::utils::random_delay(self.request_delay());
            }

            let Page {
                items,
                found: page_found,
                has_more,
            } = self.fetch_page(keyword, page)?;

            if page == 0 {
                found = page_found;
            }

            debug!(
                "{} '{}' page {}: {} items, more: {}",
                self.name(),
                keyword,
                page,
                items.len(),
                has_more
            );
            all_items.extend(items);

            if !has_more {
                break;
            }
        }

        info!(
            "{} '{}': {} found, {} downloaded",
            self.name(),
            keyword,
            found,
            all_items.len()
        );

        Ok(SearchResult {
            found,
            items: all_items,
        })
    }
}

/// Sends the request and decodes a JSON body, turning non-2xx into an error.
pub(crate) fn get_json<T: DeserializeOwned>(request: RequestBuilder) -> Result<T> {
    let response = request.send()?;
    let status = response.status();
    if !status.is_success() {
        return Err(Error::Status {
            url: response.url().to_string(),
            status,
        });
    }
    Ok(response.json()?)
}
