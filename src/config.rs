use crate::error::{Error, Result};
use dotenvy::dotenv;
use std::env;
use std::time::Duration;

const DEFAULT_LANGUAGES: [&str; 3] = ["Python", "Java", "Javascript"];
const DEFAULT_REQUEST_DELAY_MS: u64 = 500;

/// Startup configuration handed to the orchestrator
#[derive(Debug, Clone)]
pub struct Config {
    pub superjob_secret_key: String,
    pub languages: Vec<String>,
    /// Pause inserted after every page request
    pub request_delay: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let superjob_secret_key = lookup("SJ_SECRET_KEY")
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| Error::Config("Missing environment variable: SJ_SECRET_KEY".to_string()))?;

        let languages = match lookup("LANGUAGES") {
            Some(raw) => parse_languages(&raw)?,
            None => DEFAULT_LANGUAGES.iter().map(|l| l.to_string()).collect(),
        };

        let delay_ms = match lookup("REQUEST_DELAY_MS") {
            Some(raw) => raw.trim().parse::<u64>().map_err(|e| {
                Error::Config(format!("Invalid value for REQUEST_DELAY_MS: {}", e))
            })?,
            None => DEFAULT_REQUEST_DELAY_MS,
        };

        Ok(Self {
            superjob_secret_key,
            languages,
            request_delay: Duration::from_millis(delay_ms),
        })
    }
}

fn parse_languages(raw: &str) -> Result<Vec<String>> {
    let languages: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(String::from)
        .collect();

    if languages.is_empty() {
        return Err(Error::Config("LANGUAGES must name at least one language".to_string()));
    }

    Ok(languages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn defaults_apply_when_only_key_is_set() {
        let config = Config::from_lookup(lookup_from(&[("SJ_SECRET_KEY", "v3.r.secret")])).unwrap();

        assert_eq!(config.superjob_secret_key, "v3.r.secret");
        assert_eq!(config.languages, vec!["Python", "Java", "Javascript"]);
        assert_eq!(config.request_delay, Duration::from_millis(500));
    }

    #[test]
    fn missing_secret_key_is_a_config_error() {
        let err = Config::from_lookup(lookup_from(&[])).unwrap_err();
        assert!(matches!(err, Error::Config(msg) if msg.contains("SJ_SECRET_KEY")));
    }

    #[test]
    fn blank_secret_key_is_rejected() {
        let err = Config::from_lookup(lookup_from(&[("SJ_SECRET_KEY", "  ")])).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn overrides_are_parsed() {
        let config = Config::from_lookup(lookup_from(&[
            ("SJ_SECRET_KEY", "key"),
            ("LANGUAGES", "Rust, Go ,,C++"),
            ("REQUEST_DELAY_MS", "0"),
        ]))
        .unwrap();

        assert_eq!(config.languages, vec!["Rust", "Go", "C++"]);
        assert_eq!(config.request_delay, Duration::ZERO);
    }

    #[test]
    fn bad_delay_is_rejected() {
        let err = Config::from_lookup(lookup_from(&[
            ("SJ_SECRET_KEY", "key"),
            ("REQUEST_DELAY_MS", "half a second"),
        ]))
        .unwrap_err();

        assert!(matches!(err, Error::Config(msg) if msg.contains("REQUEST_DELAY_MS")));
    }

    #[test]
    fn empty_language_list_is_rejected() {
        let err = Config::from_lookup(lookup_from(&[("SJ_SECRET_KEY", "key"), ("LANGUAGES", " , ")]))
            .unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
