//! Resolve one reference and print the verses as JSON.
//!
//! Usage: cargo run --bin resolve -- [KOR|SPA|ENG] [--text] <query...>

use anyhow::{bail, Context};
use tracing_subscriber::EnvFilter;

use versefinder::bible::{BookCatalog, Language};
use versefinder::config::Config;
use versefinder::resolver::Resolver;
use versefinder::services;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let config = Config::load().context("Failed to load config")?;

    let mut language = config.default_language;
    let mut plain_text = false;
    let mut words = Vec::new();
    for (i, arg) in std::env::args().skip(1).enumerate() {
        match arg.as_str() {
            "--text" => plain_text = true,
            code if i == 0 && Language::from_code(code).is_some() => {
                language = code.parse()?;
            }
            _ => words.push(arg),
        }
    }
    if words.is_empty() {
        bail!("usage: resolve [KOR|SPA|ENG] [--text] <query>");
    }
    let query = words.join(" ");

    let provider = services::from_config(&config).context("Failed to set up verse provider")?;
    let resolver = Resolver::new(BookCatalog::shared_standard(), provider);
    tracing::info!(provider = resolver.provider_name(), %language, query, "resolving");

    let resolution = resolver.resolve(&query, language).await?;

    if plain_text {
        println!("{}", resolution.to_plain_text());
    } else {
        println!("{}", serde_json::to_string_pretty(&resolution)?);
    }
    Ok(())
}
