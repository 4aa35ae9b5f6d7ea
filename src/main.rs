mod chunk;
mod config;
mod extract;
mod fetch;
mod output;
mod pipeline;

use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;

use config::Config;

#[derive(Parser)]
#[command(
    name = "godot_docs_scraper",
    about = "Godot class reference scraper: fetch, convert to markdown, chunk"
)]
struct Cli {
    /// URL template with one {} placeholder for the class name
    #[arg(long, default_value = config::DEFAULT_BASE_URL)]
    base_url: String,
    /// Output directory (cleared at the start of every run)
    #[arg(short, long, default_value = config::DEFAULT_OUTPUT_DIR)]
    output: PathBuf,
    /// Max characters per markdown chunk
    #[arg(long, default_value_t = config::DEFAULT_CHUNK_SIZE)]
    chunk_size: usize,
    /// Phrase marking an in-page 404 on the docs host
    #[arg(long, default_value = config::DEFAULT_NOT_FOUND_MARKER)]
    not_found_marker: String,
    /// Class names to fetch (default: Node, Area3D, Camera3D, CharacterBody3D)
    classes: Vec<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();

    let mut config = Config {
        base_url: cli.base_url,
        output_dir: cli.output,
        chunk_size: cli.chunk_size,
        not_found_marker: cli.not_found_marker,
        ..Config::default()
    };
    if !cli.classes.is_empty() {
        config.classes = cli.classes;
    }

    println!("=== Godot Docs Scraper ===");
    let result = pipeline::run(&config).await;

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("\nDone in {:.1}s", elapsed.as_secs_f64());
    }

    result
}
