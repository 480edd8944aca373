use std::{path::{Path, PathBuf}, time::Duration};

use anyhow::Context;
use serde::Deserialize;
use validator::Validate;

pub(super) const DEFAULT_CONFIG_PATH: &str = "config.toml";

const DEFAULT_KEYWORDS: [&str; 9] = [
    "software", "engineer", "developer", "sde", "backend",
    "frontend", "full stack", "fullstack", "full-stack"
];


/// Everything read from `config.toml`. Every section is optional.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default)]
pub(crate) struct Config {
    #[validate]
    pub(crate) scrape: ScrapeConfig,
    pub(crate) output: OutputConfig,
    pub(crate) server: ServerConfig
}


#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(default)]
pub(crate) struct ScrapeConfig {
    /// Root of the job board, without a trailing slash.
    ///
    /// Relative job links are appended to this verbatim.
    #[validate(url)]
    pub(crate) base_url: String,
    /// Path of the page that lists every portfolio company
    pub(crate) companies_path: String,
    /// Path segment that precedes a company identifier, e.g. `/jobs/acme`
    pub(crate) company_path: String,
    pub(crate) user_agent: String,
    pub(crate) headless: bool,
    /// Fixed wait after navigating, before checking readiness
    pub(crate) settle_delay_ms: u64,
    /// A page is ready once this selector matches something
    pub(crate) ready_selector: String,
    #[validate(range(min = 1))]
    pub(crate) ready_timeout_ms: u64,
    /// Pause between two companies. Independent of the settle delay.
    pub(crate) politeness_delay_ms: u64,
    /// A job is kept when its title contains any of these, ignoring case
    #[validate(length(min = 1))]
    pub(crate) keywords: Vec<String>
}


impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            base_url: "https://jobs.a16z.com".into(),
            companies_path: "/companies".into(),
            company_path: "/jobs/".into(),
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36".into(),
            headless: true,
            settle_delay_ms: 3000,
            ready_selector: "body".into(),
            ready_timeout_ms: 10_000,
            politeness_delay_ms: 2000,
            keywords: DEFAULT_KEYWORDS.iter().map(|x| x.to_string()).collect()
        }
    }
}


impl ScrapeConfig {
    pub(crate) fn companies_url(&self) -> String {
        format!("{}{}", self.base_url, self.companies_path)
    }

    pub(crate) fn company_url(&self, company: &str) -> String {
        format!("{}{}{company}", self.base_url, self.company_path)
    }

    pub(crate) fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }

    pub(crate) fn ready_timeout(&self) -> Duration {
        Duration::from_millis(self.ready_timeout_ms)
    }

    pub(crate) fn politeness_delay(&self) -> Duration {
        Duration::from_millis(self.politeness_delay_ms)
    }
}


#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub(crate) struct OutputConfig {
    pub(crate) json_path: PathBuf,
    pub(crate) csv_path: PathBuf
}


impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            json_path: "a16z_sde_jobs.json".into(),
            csv_path: "a16z_sde_jobs.csv".into()
        }
    }
}


#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub(crate) struct ServerConfig {
    pub(crate) host: String,
    pub(crate) port: u16
}


impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "0.0.0.0".into(), port: 3000 }
    }
}


impl Config {
    /// Reads and validates the config at `path`. A missing file means all defaults.
    pub(crate) fn load(path: &Path) -> anyhow::Result<Self> {
        let mut config = if path.exists() {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            Self::parse(&text).with_context(|| format!("Invalid config in {}", path.display()))?
        } else {
            tracing::info!("{} not found, using default configuration", path.display());
            Self::default()
        };
        config.scrape.base_url = config.scrape.base_url.trim_end_matches('/').to_string();
        Ok(config)
    }

    fn parse(text: &str) -> anyhow::Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_defaults() {
        let config = Config::parse(
            r#"
            [scrape]
            base_url = "https://jobs.example.com"
            politeness_delay_ms = 0

            [server]
            port = 8080
            "#
        ).unwrap();
        assert_eq!(config.scrape.base_url, "https://jobs.example.com");
        assert_eq!(config.scrape.politeness_delay(), Duration::ZERO);
        assert_eq!(config.scrape.settle_delay(), Duration::from_secs(3));
        assert_eq!(config.scrape.keywords.len(), 9);
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.output.json_path, PathBuf::from("a16z_sde_jobs.json"));
    }

    #[test]
    fn rejects_empty_keywords() {
        assert!(Config::parse("[scrape]\nkeywords = []\n").is_err());
    }

    #[test]
    fn rejects_bad_base_url() {
        assert!(Config::parse("[scrape]\nbase_url = \"not a url\"\n").is_err());
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(config.scrape.companies_url(), "https://jobs.a16z.com/companies");
        assert_eq!(config.scrape.company_url("acme"), "https://jobs.a16z.com/jobs/acme");
    }

    #[test]
    fn trailing_slash_is_trimmed_from_base_url() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[scrape]\nbase_url = \"https://jobs.example.com/\"\n").unwrap();
        let config = Config::load(&path).unwrap();
        assert_eq!(config.scrape.base_url, "https://jobs.example.com");
    }
}
