mod commands;
mod config;

use anyhow::Result;
use bench_reports::Version;
use bench_reports_github::RawContentClient;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "bench-reports")]
#[command(about = "Fetch published benchmark and datasheet content for a release")]
struct Cli {
    /// Content origin to fetch from (overrides the config file)
    #[arg(long, global = true)]
    origin: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the commit hash the benchmarks were produced from
    CommitHash {
        /// Release version (e.g. v1.0.0)
        version: String,
    },
    /// Print a benchmark file
    Benchmarks {
        /// Release version (e.g. v1.0.0)
        version: String,
        /// File path under the release's benchmarks directory
        path: String,
    },
    /// Print a datasheet document
    Datasheet {
        /// Release version (e.g. v1.0.0)
        version: String,
        /// File path under the release's datasheet directory
        path: String,
        /// Print compact JSON instead of pretty output
        #[arg(long)]
        raw: bool,
    },
    /// Fetch commit hash, a benchmark file and a datasheet together
    Report {
        /// Release version (e.g. v1.0.0)
        version: String,
        /// Benchmark file path
        #[arg(long)]
        benchmarks: String,
        /// Datasheet file path
        #[arg(long)]
        datasheet: String,
    },
}

fn github_token() -> Option<String> {
    std::env::var("GITHUB_TOKEN").ok()
}

fn build_client(origin: Option<String>) -> RawContentClient {
    let (app_config, feedback) = config::load_config();
    commands::print_feedback(&feedback);
    RawContentClient::new(app_config.client_config(origin, github_token()))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let client = build_client(cli.origin);

    match cli.command {
        Command::CommitHash { version } => {
            commands::commit_hash::run(&client, &Version::new(version)).await
        }
        Command::Benchmarks { version, path } => {
            commands::benchmarks::run(&client, &Version::new(version), &path).await
        }
        Command::Datasheet { version, path, raw } => {
            commands::datasheet::run(&client, &Version::new(version), &path, raw).await
        }
        Command::Report {
            version,
            benchmarks,
            datasheet,
        } => {
            commands::report::run(&client, &Version::new(version), &benchmarks, &datasheet).await
        }
    }
}
