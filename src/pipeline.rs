use anyhow::Result;
use reqwest::Client;
use tracing::{error, info, warn};

use crate::config::Config;
use crate::{chunk, extract, fetch, output};

/// Run the full pipeline: clear the output dir once, then fetch, extract,
/// chunk and save every configured class in order. Failures are isolated per
/// class and never halt the run.
pub async fn run(config: &Config) -> Result<()> {
    output::clear_output_dir(&config.output_dir)?;
    let client = Client::new();

    for class_name in &config.classes {
        if let Err(e) = process_class(&client, config, class_name).await {
            error!("Failed to process {}: {:#}", class_name, e);
        }
    }

    info!(
        "Done. Markdown files saved to {}",
        config.output_dir.display()
    );
    Ok(())
}

async fn process_class(client: &Client, config: &Config, class_name: &str) -> Result<()> {
    let Some(html) = fetch_with_fallback(client, config, class_name).await else {
        warn!("Skipping {} due to fetch failure", class_name);
        return Ok(());
    };

    let markdown = extract::extract_class_doc(&html, class_name, &config.not_found_marker)?;
    let Some(markdown) = markdown.filter(|md| !md.trim().is_empty()) else {
        warn!("Could not extract content for {}", class_name);
        return Ok(());
    };

    let chunks = chunk::split_markdown(&markdown, config.chunk_size);
    output::save_chunks(&config.output_dir, class_name, &chunks)?;
    Ok(())
}

/// Try each URL candidate in order, keeping the first body that does not
/// render the soft-404 marker. A body that does carry the marker is kept as
/// a last resort so the extractor can report the in-page 404.
async fn fetch_with_fallback(
    client: &Client,
    config: &Config,
    class_name: &str,
) -> Option<String> {
    let mut html = None;
    for url in config.url_candidates(class_name) {
        info!("Fetching: {}", url);
        match fetch::fetch_html(client, &url).await {
            Ok(body) => {
                let soft_404 = body.contains(&config.not_found_marker);
                html = Some(body);
                if !soft_404 {
                    break;
                }
                warn!("{} looks like an in-page 404, trying next candidate", url);
            }
            Err(e) => warn!("{:#}", e),
        }
    }
    html
}

// ── Tests ──
