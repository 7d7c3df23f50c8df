use std::path::{Path, PathBuf};
use std::time::Duration;

use bench_reports::Feedback;
use bench_reports_github::RawContentClientConfig;
use serde::{Deserialize, Serialize};

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    /// Content origin; the published ghpages host when unset.
    pub origin: Option<String>,
    /// Revalidate interval sent with every request, in seconds.
    pub revalidate_secs: Option<u64>,
}

impl AppConfig {
    /// Build the client config. `origin_override` (from `--origin`) wins over
    /// the file.
    pub fn client_config(
        &self,
        origin_override: Option<String>,
        token: Option<String>,
    ) -> RawContentClientConfig {
        RawContentClientConfig {
            origin: origin_override.or_else(|| self.origin.clone()),
            token,
            revalidate: self.revalidate_secs.map(Duration::from_secs),
        }
    }
}

/// Config file path: `~/.config/bench-reports/config.toml`
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("bench-reports").join("config.toml"))
}

/// Load config from file, falling back to defaults if missing.
pub fn load_config() -> (AppConfig, Vec<Feedback>) {
    if let Some(path) = config_path()
        && let Ok(contents) = std::fs::read_to_string(&path)
    {
        return parse_config(&path, &contents);
    }

    (AppConfig::default(), Vec::new())
}

/// Parse config file contents. A file that does not parse yields defaults
/// and a warning.
pub fn parse_config(path: &Path, contents: &str) -> (AppConfig, Vec<Feedback>) {
    match toml::from_str::<AppConfig>(contents) {
        Ok(config) => (config, Vec::new()),
        Err(_) => (
            AppConfig::default(),
            vec![Feedback::warning(format!(
                "failed to parse config at {}, using defaults",
                path.display()
            ))],
        ),
    }
}
