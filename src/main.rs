use std::path::Path;

use anyhow::{bail, Result};
use reqwest::Client;
use tracing_subscriber::{fmt, EnvFilter};
use volbyscraper::pipeline::{self, SITE_ROOT};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();

    // ─── 2) arguments: <region_url> <output_file.csv> ────────────────
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Wrong number of arguments. Use: volbyscraper <region_url> <output_file.csv>");
        return Ok(());
    }
    let link = &args[1];
    let output = Path::new(&args[2]);
    if !link.starts_with(SITE_ROOT) {
        bail!("invalid link: expected a URL starting with {SITE_ROOT}");
    }

    // ─── 3) scrape ───────────────────────────────────────────────────
    let client = Client::new();
    pipeline::run(&client, link, output).await
}
