use anyhow::{ensure, Context, Result};

use crate::llm_client::DEFAULT_API_URL;

/// Application configuration loaded from environment variables.
///
/// The provider key is optional here: without it the service still starts and
/// serves listings and previews, and each submitted job fails with a generation error.
#[derive(Debug, Clone)]
pub struct Config {
    pub anthropic_api_key: Option<String>,
    pub anthropic_api_url: String,
    pub port: u16,
    /// Size of the job worker pool.
    pub max_concurrent_jobs: usize,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let max_concurrent_jobs = lookup("MAX_CONCURRENT_JOBS")
            .unwrap_or_else(|| "16".to_string())
            .parse::<usize>()
            .context("MAX_CONCURRENT_JOBS must be a positive integer")?;
        ensure!(
            max_concurrent_jobs > 0,
            "MAX_CONCURRENT_JOBS must be at least 1"
        );

        Ok(Config {
            anthropic_api_key: lookup("ANTHROPIC_API_KEY").filter(|k| !k.is_empty()),
            anthropic_api_url: lookup("ANTHROPIC_API_URL")
                .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            port: lookup("PORT")
                .unwrap_or_else(|| "8000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            max_concurrent_jobs,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config(&[]).unwrap();
        assert!(config.anthropic_api_key.is_none());
        assert_eq!(config.anthropic_api_url, DEFAULT_API_URL);
        assert_eq!(config.port, 8000);
        assert_eq!(config.max_concurrent_jobs, 16);
        assert_eq!(config.rust_log, "info");
    }

    #[test]
    fn test_overrides() {
        let config = config(&[
            ("ANTHROPIC_API_KEY", "sk-ant-test"),
            ("PORT", "9090"),
            ("MAX_CONCURRENT_JOBS", "4"),
            ("RUST_LOG", "debug"),
        ])
        .unwrap();
        assert_eq!(config.anthropic_api_key.as_deref(), Some("sk-ant-test"));
        assert_eq!(config.port, 9090);
        assert_eq!(config.max_concurrent_jobs, 4);
        assert_eq!(config.rust_log, "debug");
    }

    #[test]
    fn test_empty_api_key_is_unset() {
        let config = config(&[("ANTHROPIC_API_KEY", "")]).unwrap();
        assert!(config.anthropic_api_key.is_none());
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        assert!(config(&[("PORT", "not-a-port")]).is_err());
        assert!(config(&[("PORT", "70000")]).is_err());
    }

    #[test]
    fn test_zero_workers_is_rejected() {
        assert!(config(&[("MAX_CONCURRENT_JOBS", "0")]).is_err());
    }
}
