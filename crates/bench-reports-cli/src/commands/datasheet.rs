use anyhow::{Context, Result};
use bench_reports::{ContentFetcher, Version};

pub async fn run(
    fetcher: &dyn ContentFetcher,
    version: &Version,
    path: &str,
    raw: bool,
) -> Result<()> {
    let doc = fetcher
        .fetch_datasheet(version, path)
        .await
        .with_context(|| format!("could not fetch datasheet/{path} for {version}"))?;

    println!("{}", render(&doc, raw)?);
    Ok(())
}

/// Pretty JSON by default, compact with `--raw`.
pub fn render(doc: &serde_json::Value, raw: bool) -> Result<String> {
    let out = if raw {
        serde_json::to_string(doc)?
    } else {
        serde_json::to_string_pretty(doc)?
    };
    Ok(out)
}
