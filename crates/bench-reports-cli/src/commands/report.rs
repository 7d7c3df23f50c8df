use anyhow::{Result, bail};
use bench_reports::{ContentFetcher, Feedback, FetchError, Version};

use super::{datasheet, print_feedback};

/// Everything published for one release, as far as it could be fetched.
#[derive(Debug, Default)]
pub struct Report {
    pub commit_hash: Option<String>,
    pub benchmarks: Option<String>,
    pub datasheet: Option<serde_json::Value>,
    pub feedback: Vec<Feedback>,
}

impl Report {
    pub fn is_empty(&self) -> bool {
        self.commit_hash.is_none() && self.benchmarks.is_none() && self.datasheet.is_none()
    }
}

/// Run the three fetches concurrently. Each one stands alone: a failure
/// becomes an error feedback entry and leaves its section empty.
pub async fn collect(
    fetcher: &dyn ContentFetcher,
    version: &Version,
    benchmarks_path: &str,
    datasheet_path: &str,
) -> Report {
    let (commit_hash, benchmarks, datasheet) = futures::join!(
        fetcher.fetch_applications_benchmarks_commit_hash(version),
        fetcher.fetch_applications_benchmarks(version, benchmarks_path),
        fetcher.fetch_datasheet(version, datasheet_path),
    );

    let mut feedback = Vec::new();
    let commit_hash = keep("commit hash", commit_hash, &mut feedback);
    let benchmarks = keep("benchmarks", benchmarks, &mut feedback);
    let datasheet = keep("datasheet", datasheet, &mut feedback);

    let fetched = [commit_hash.is_some(), benchmarks.is_some(), datasheet.is_some()]
        .into_iter()
        .filter(|ok| *ok)
        .count();
    if fetched > 0 && fetched < 3 {
        feedback.push(Feedback::info(format!(
            "fetched {fetched} of 3 sections for {version}"
        )));
    }

    Report {
        commit_hash,
        benchmarks,
        datasheet,
        feedback,
    }
}

fn keep<T>(label: &str, result: Result<T, FetchError>, feedback: &mut Vec<Feedback>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            feedback.push(Feedback::from_fetch_error(label, &e));
            None
        }
    }
}

pub async fn run(
    fetcher: &dyn ContentFetcher,
    version: &Version,
    benchmarks_path: &str,
    datasheet_path: &str,
) -> Result<()> {
    let report = collect(fetcher, version, benchmarks_path, datasheet_path).await;

    print_feedback(&report.feedback);

    if report.is_empty() {
        bail!("nothing could be fetched for {version}");
    }

    println!("Version:     {version}");
    if let Some(hash) = &report.commit_hash {
        println!("Commit:      {}", hash.trim_end());
    }
    if let Some(body) = &report.benchmarks {
        println!();
        println!("== benchmarks/{benchmarks_path}");
        print!("{body}");
        if !body.ends_with('\n') {
            println!();
        }
    }
    if let Some(doc) = &report.datasheet {
        println!();
        println!("== datasheet/{datasheet_path}");
        println!("{}", datasheet::render(doc, false)?);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use bench_reports::Resource;
    use bench_reports::test_support::{CannedResponse, InMemoryFetcher};

    use super::*;

    const ORIGIN: &str = "https://content.test/ghpages";

    fn v1() -> Version {
        Version::new("v1.0.0")
    }

    #[tokio::test]
    async fn collect_gathers_all_three_sections() {
        let mut fetcher = InMemoryFetcher::new(ORIGIN);
        fetcher.respond(&v1(), &Resource::BenchmarksCommitHash, CannedResponse::Body("abc\n".into()));
        fetcher.respond(&v1(), &Resource::benchmarks("m3.csv"), CannedResponse::Body("fib,10\n".into()));
        fetcher.respond(
            &v1(),
            &Resource::datasheet("sheet.json"),
            CannedResponse::Body(r#"{"cycles": 100}"#.into()),
        );

        let report = collect(&fetcher, &v1(), "m3.csv", "sheet.json").await;

        assert_eq!(report.commit_hash.as_deref(), Some("abc\n"));
        assert_eq!(report.benchmarks.as_deref(), Some("fib,10\n"));
        assert_eq!(report.datasheet, Some(serde_json::json!({ "cycles": 100 })));
        assert!(report.feedback.is_empty());
        assert_eq!(fetcher.requests().len(), 3);
    }

    #[tokio::test]
    async fn one_failure_does_not_sink_the_others() {
        let mut fetcher = InMemoryFetcher::new(ORIGIN);
        fetcher.respond(&v1(), &Resource::BenchmarksCommitHash, CannedResponse::Body("abc".into()));
        fetcher.respond(&v1(), &Resource::benchmarks("m3.csv"), CannedResponse::Status(500));
        fetcher.respond(
            &v1(),
            &Resource::datasheet("sheet.json"),
            CannedResponse::Body("[]".into()),
        );

        let report = collect(&fetcher, &v1(), "m3.csv", "sheet.json").await;

        assert_eq!(report.commit_hash.as_deref(), Some("abc"));
        assert!(report.benchmarks.is_none());
        assert!(report.datasheet.is_some());
        assert_eq!(report.feedback.len(), 2);
        assert!(report.feedback[0].is_error());
        assert!(report.feedback[0].message().starts_with("benchmarks: "));
        assert!(report.feedback[0].message().contains("HTTP 500"));
        assert_eq!(
            report.feedback[1],
            Feedback::info("fetched 2 of 3 sections for v1.0.0")
        );
    }

    #[tokio::test]
    async fn run_fails_when_nothing_was_fetched() {
        let fetcher = InMemoryFetcher::new(ORIGIN);

        let report = collect(&fetcher, &v1(), "a.csv", "a.json").await;
        assert!(report.is_empty());
        assert_eq!(report.feedback.len(), 3);

        let result = run(&fetcher, &v1(), "a.csv", "a.json").await;
        assert!(result.is_err());
    }
}
