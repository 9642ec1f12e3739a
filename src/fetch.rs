use anyhow::{Context, Result};
use reqwest::Client;
use scraper::Html;
use tracing::debug;
use url::Url;

/// GET a results page and parse the body into a queryable document.
///
/// Any network failure, non-success status or unreadable body is fatal for
/// the request; there is no retry.
pub async fn document(client: &Client, url: &Url) -> Result<Html> {
    let body = client
        .get(url.clone())
        .send()
        .await
        .with_context(|| format!("GET {}", url))?
        .error_for_status()?
        .text()
        .await
        .with_context(|| format!("reading body from {}", url))?;

    debug!(%url, bytes = body.len(), "fetched page");
    Ok(Html::parse_document(&body))
}
