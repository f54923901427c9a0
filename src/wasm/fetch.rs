use gloo::net::http::Request;
use web_sys::RequestCache;

use crate::error::LoadError;
use crate::works::{parse_works, Work};

/// Fetch and parse the works document, bypassing the HTTP cache so edits
/// show up on reload.
pub(crate) async fn fetch_works(url: &str) -> Result<Vec<Option<Work>>, LoadError> {
    let response = Request::get(url)
        .cache(RequestCache::NoStore)
        .send()
        .await
        .map_err(|e| LoadError::Network(e.to_string()))?;
    if !response.ok() {
        return Err(LoadError::Status(response.status()));
    }
    let body = response
        .text()
        .await
        .map_err(|e| LoadError::Network(e.to_string()))?;
    let works = parse_works(&body)?;
    log::info!("loaded {} works from {url}", works.len());
    Ok(works)
}
