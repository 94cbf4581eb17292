//! HTTP download of raw indicator files.

mod basic;
pub mod worldbank;

pub use basic::BasicClient;

use anyhow::Result;
use async_trait::async_trait;
use reqwest::{Request, Response};

/// Executes a prepared request. Implemented by [`BasicClient`]; tests and
/// callers needing retries or proxies can supply their own.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn execute(&self, req: Request) -> reqwest::Result<Response>;
}

/// GETs `url` and returns the body. Non-2xx statuses are errors.
pub async fn fetch_bytes<C: HttpClient>(client: &C, url: &str) -> Result<Vec<u8>> {
    let req = Request::new(reqwest::Method::GET, url.parse()?);

    let resp = client.execute(req).await?.error_for_status()?;
    Ok(resp.bytes().await?.to_vec())
}
