// src/core/net.rs

// One blocking GET per run. No retries, no timeout: a hung server hangs
// the run, which is acceptable for a one-shot tool.

use std::time::Duration;

use reqwest::blocking::Client;

use crate::error::ScrapeError;

const USER_AGENT: &str = concat!("tabjoin/", env!("CARGO_PKG_VERSION"));

pub fn http_get(url: &str) -> Result<String, ScrapeError> {
    let fetch_err = |source| ScrapeError::Fetch { url: s!(url), source };

    logf!("GET {url}");
    let client = Client::builder()
        .user_agent(USER_AGENT)
        .timeout(None::<Duration>)
        .build()
        .map_err(fetch_err)?;

    let response = client
        .get(url)
        .send()
        .map_err(fetch_err)?
        .error_for_status()
        .map_err(fetch_err)?;

    let body = response.text().map_err(fetch_err)?;
    logf!("GET {url} ok, {} bytes", body.len());
    Ok(body)
}
