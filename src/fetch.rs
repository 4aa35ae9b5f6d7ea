use anyhow::{bail, Context, Result};
use reqwest::Client;

/// GET a single page and return its body as text. Non-2xx statuses and
/// transport failures are errors; the caller decides whether to fall back.
pub async fn fetch_html(client: &Client, url: &str) -> Result<String> {
    let response = client
        .get(url)
        .send()
        .await
        .with_context(|| format!("Request failed for {}", url))?;

    let status = response.status();
    if !status.is_success() {
        bail!("HTTP {} for {}", status.as_u16(), url);
    }

    response
        .text()
        .await
        .with_context(|| format!("Failed to read response body from {}", url))
}

// ── Tests ──
