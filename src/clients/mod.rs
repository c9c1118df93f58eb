pub mod headhunter;
pub mod superjob;

pub use headhunter::{HeadHunterClient, HeadHunterConfig, HhArea};
pub use superjob::{SuperJobCatalogue, SuperJobClient, SuperJobConfig, SuperJobTown};

use crate::Result;
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT};
use std::time::Duration;

const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

fn build_http_client(extra_headers: HeaderMap) -> Result<Client> {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static(APP_USER_AGENT));
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers.extend(extra_headers);

    let client = Client::builder()
        .timeout(Duration::from_secs(30))
        .default_headers(headers)
        .build()?;
    Ok(client)
}
