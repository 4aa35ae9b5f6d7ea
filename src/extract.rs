use std::sync::LazyLock;

use anyhow::{Context, Result};
use scraper::{Html, Selector};
use tracing::warn;

static MAIN_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(r#"[role="main"]"#).unwrap());
static BODY_SELECTOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("body").unwrap());

/// Extract the main content region of a class reference page and convert it
/// to markdown. Returns `None` when the page is a soft 404 (a 200 response
/// whose body renders the host's "not found" message) or has no content.
pub fn extract_class_doc(
    html: &str,
    class_name: &str,
    not_found_marker: &str,
) -> Result<Option<String>> {
    let document = Html::parse_document(html);

    // The docs host serves some missing pages with a 200 status, so the
    // body text has to be scanned even after a successful fetch.
    if document
        .root_element()
        .text()
        .any(|t| t.contains(not_found_marker))
    {
        warn!(
            "'{}' appears to be a missing page (in-page 404), skipping",
            class_name
        );
        return Ok(None);
    }

    if let Some(main) = document.select(&MAIN_SELECTOR).next() {
        let markdown = htmd::convert(&main.html())
            .with_context(|| format!("Markdown conversion failed for {}", class_name))?;
        return Ok(Some(markdown));
    }

    warn!(
        "Could not find main content for {}, dumping full page",
        class_name
    );
    match document.select(&BODY_SELECTOR).next() {
        Some(body) => {
            let markdown = htmd::convert(&body.html())
                .with_context(|| format!("Markdown conversion failed for {}", class_name))?;
            Ok(Some(markdown))
        }
        None => Ok(None),
    }
}

// ── Tests ──
