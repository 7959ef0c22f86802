pub mod de;
pub mod error;
pub mod listing;
pub mod method;

pub use error::{Error, Result};

use log::debug;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use reqwest::{Client, ClientBuilder};
use serde::Serialize;

// Base URL for the CoinMarketCap data API
pub const BASE_URL: &str = "https://api.coinmarketcap.com";

pub struct CoinMarketCapClient {
    base_url: String,
    reqwest: Client,
}

impl CoinMarketCapClient {
    pub fn new() -> Result<Self> {
        Self::with_base_url(BASE_URL)
    }

    pub fn with_base_url(base_url: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let reqwest = ClientBuilder::new().default_headers(headers).build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            reqwest,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `path` and return the whole body. Non-2xx statuses are errors.
    pub async fn get_raw<P: Serialize + ?Sized>(&self, path: &str, params: &P) -> Result<Vec<u8>> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {url}");

        let response = self
            .reqwest
            .get(&url)
            .query(params)
            .send()
            .await?
            .error_for_status()?;

        let body = response.bytes().await?;
        debug!("Received {} bytes from {url}", body.len());

        Ok(body.to_vec())
    }

    pub async fn fetch<M: method::Method>(&self, params: &M::Params) -> Result<Vec<u8>> {
        self.get_raw(M::PATH, params).await
    }

    /// Decode a body fetched for `M` and apply the method's response check.
    pub fn decode<M: method::Method>(body: &[u8]) -> Result<M::Response> {
        let response = serde_json::from_slice::<M::Response>(body)?;
        M::check(&response)?;

        Ok(response)
    }

    pub async fn call<M: method::Method>(&self, params: M::Params) -> Result<M::Response> {
        let body = self.fetch::<M>(&params).await?;
        Self::decode::<M>(&body)
    }
}
