use std::path::PathBuf;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use app_logging::LogDestination;
use log::LevelFilter;
use resumo_core::WorkflowConfig;
use resumo_engine::ClientSettings;

/// Demo front-end configuration, read from `RESUMO_*` environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub client: ClientSettings,
    pub workflow: WorkflowConfig,
    pub log_destination: LogDestination,
    pub log_level: LevelFilter,
    pub log_file: PathBuf,
    /// Page checked once at startup for toast meta tags.
    pub landing_page: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut client = ClientSettings::default();
        if let Some(base) = lookup("RESUMO_API_BASE") {
            client.base_url = base;
        }
        if let Some(raw) = lookup("RESUMO_DEMO_DELAY_MS") {
            let ms = raw
                .trim()
                .parse::<u64>()
                .with_context(|| format!("RESUMO_DEMO_DELAY_MS must be milliseconds, got '{raw}'"))?;
            client.demo_analysis_delay = Duration::from_millis(ms);
            client.demo_optimize_delay = Duration::from_millis(ms);
        }

        let mut workflow = WorkflowConfig::default();
        if let Some(raw) = lookup("RESUMO_REFILL_SUGGESTIONS") {
            workflow.refill_empty_suggestions = parse_bool(&raw)
                .with_context(|| "RESUMO_REFILL_SUGGESTIONS must be true or false")?;
        }

        let log_destination = match lookup("RESUMO_LOG") {
            Some(raw) => LogDestination::parse(&raw)
                .ok_or_else(|| anyhow!("RESUMO_LOG must be file, terminal or both, got '{raw}'"))?,
            None => LogDestination::default(),
        };
        let log_level = match lookup("RESUMO_LOG_LEVEL") {
            Some(raw) => raw
                .trim()
                .parse::<LevelFilter>()
                .with_context(|| format!("RESUMO_LOG_LEVEL is not a log level: '{raw}'"))?,
            None => LevelFilter::Info,
        };
        let log_file = lookup("RESUMO_LOG_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(app_logging::DEFAULT_LOG_FILE));

        Ok(Self {
            client,
            workflow,
            log_destination,
            log_level,
            log_file,
            landing_page: lookup("RESUMO_LANDING_PAGE").map(PathBuf::from),
        })
    }
}

fn parse_bool(raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(anyhow!("not a boolean: '{other}'")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<AppConfig> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn defaults_without_environment() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.client.base_url, "http://127.0.0.1:8000");
        assert_eq!(config.client.demo_analysis_delay, Duration::from_millis(2000));
        assert_eq!(config.log_destination, LogDestination::Terminal);
        assert_eq!(config.log_level, LevelFilter::Info);
        assert!(config.workflow.refill_empty_suggestions);
        assert!(config.landing_page.is_none());
    }

    #[test]
    fn overrides_are_applied() {
        let config = config_from(&[
            ("RESUMO_API_BASE", "http://api.local:9000"),
            ("RESUMO_DEMO_DELAY_MS", "25"),
            ("RESUMO_LOG", "both"),
            ("RESUMO_LOG_LEVEL", "debug"),
            ("RESUMO_REFILL_SUGGESTIONS", "off"),
            ("RESUMO_LANDING_PAGE", "index.html"),
        ])
        .unwrap();
        assert_eq!(config.client.base_url, "http://api.local:9000");
        assert_eq!(config.client.demo_optimize_delay, Duration::from_millis(25));
        assert_eq!(config.log_destination, LogDestination::Both);
        assert_eq!(config.log_level, LevelFilter::Debug);
        assert!(!config.workflow.refill_empty_suggestions);
        assert_eq!(config.landing_page, Some(PathBuf::from("index.html")));
    }

    #[test]
    fn invalid_values_are_reported() {
        let err = config_from(&[("RESUMO_DEMO_DELAY_MS", "soon")]).unwrap_err();
        assert!(err.to_string().contains("RESUMO_DEMO_DELAY_MS"));

        let err = config_from(&[("RESUMO_LOG", "syslog")]).unwrap_err();
        assert!(err.to_string().contains("RESUMO_LOG"));

        assert!(config_from(&[("RESUMO_REFILL_SUGGESTIONS", "maybe")]).is_err());
    }
}
