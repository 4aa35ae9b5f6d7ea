/// Split markdown into chunks of at most `chunk_size` characters, cutting at
/// the last newline before the boundary. A chunk may reach exactly the limit
/// when no newline exists in the window (a long line gets split mid-content;
/// accepted tradeoff for bounded chunk size). Chunks are trimmed.
pub fn split_markdown(markdown: &str, chunk_size: usize) -> Vec<String> {
    let chunk_size = chunk_size.max(1);
    let mut chunks = Vec::new();
    let mut rest = markdown.trim();

    // char_indices().nth(chunk_size) is the first character past the limit;
    // None means the remainder fits in one chunk. Counting characters keeps
    // every cut on a char boundary.
    while let Some((limit, _)) = rest.char_indices().nth(chunk_size) {
        let cut = rest[..limit].rfind('\n').unwrap_or(limit);
        chunks.push(rest[..cut].trim().to_string());
        rest = rest[cut..].trim_start();
    }

    if !rest.is_empty() {
        chunks.push(rest.to_string());
    }
    chunks
}

// ── Tests ──
