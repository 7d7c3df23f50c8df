use anyhow::{Context, Result};
use bench_reports::{ContentFetcher, Version};

pub async fn run(fetcher: &dyn ContentFetcher, version: &Version, path: &str) -> Result<()> {
    let body = fetcher
        .fetch_applications_benchmarks(version, path)
        .await
        .with_context(|| format!("could not fetch benchmarks/{path} for {version}"))?;

    print!("{body}");
    Ok(())
}
