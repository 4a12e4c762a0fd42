use anyhow::{Context, Result};
use tracing::info;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// GET one page and return its body. Network errors and non-2xx statuses
/// are returned as errors; nothing is retried.
pub async fn fetch_page(url: &str) -> Result<String> {
    let client = reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .context("Failed to build HTTP client")?;

    info!("Fetching issue page: {}", url);
    let response = client
        .get(url)
        .send()
        .await
        .with_context(|| format!("Failed to fetch {}", url))?
        .error_for_status()
        .with_context(|| format!("Bad response from {}", url))?;

    let body = response
        .text()
        .await
        .with_context(|| format!("Failed to read body of {}", url))?;
    info!("Fetched {} bytes", body.len());
    Ok(body)
}
