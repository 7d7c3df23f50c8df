use anyhow::{Context, Result};
use bench_reports::{ContentFetcher, Version};

pub async fn run(fetcher: &dyn ContentFetcher, version: &Version) -> Result<()> {
    let hash = fetcher
        .fetch_applications_benchmarks_commit_hash(version)
        .await
        .with_context(|| format!("could not fetch benchmark commit hash for {version}"))?;

    println!("{}", hash.trim_end());
    Ok(())
}
