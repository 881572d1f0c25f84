//! Configuration from environment variables: API keys and endpoints for the
//! remote fallback services, plus the default angle mode.

use std::env;

use crate::core::session::AngleMode;

const WOLFRAM_INSTANT_URL: &str = "https://api.wolframalpha.com/v1/result";
const GEMINI_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-flash:generateContent";
const WOLFRAM_LLM_URL: &str = "https://api.wolframalpha.com/v1/llm-api";

/// Endpoint plus credential for one remote service.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub endpoint: String,
    pub api_key: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub wolfram_instant: Option<ServiceConfig>,
    pub gemini: Option<ServiceConfig>,
    pub wolfram_llm: Option<ServiceConfig>,
    pub angle_mode: AngleMode,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidAngleMode(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidAngleMode(value) => {
                write!(f, "ANSR_ANGLE_MODE must be \"deg\" or \"rad\", got {value:?}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Load configuration from environment. Every API key is optional; a missing
/// key disables that stage of the fallback chain rather than failing startup.
pub fn load() -> Result<Config, ConfigError> {
    load_with(|name| env::var(name).ok())
}

/// Like [`load`], but reads variables through `lookup` instead of the
/// process environment.
pub fn load_with(lookup: impl Fn(&str) -> Option<String>) -> Result<Config, ConfigError> {
    let service = |key_var: &str, url_var: &str, default_url: &str| -> Option<ServiceConfig> {
        let api_key = lookup(key_var).filter(|key| !key.is_empty())?;
        let endpoint = lookup(url_var).unwrap_or_else(|| default_url.to_string());
        Some(ServiceConfig { endpoint, api_key })
    };

    let wolfram_instant = service(
        "WOLFRAMALPHA_INSTANT_CALCULATOR_API_KEY",
        "WOLFRAMALPHA_INSTANT_URL",
        WOLFRAM_INSTANT_URL,
    );
    let gemini = service("GEMINI_API_KEY", "GEMINI_API_URL", GEMINI_URL);
    let wolfram_llm = service(
        "WOLFRAMALPHA_LLM_API_KEY",
        "WOLFRAMALPHA_LLM_URL",
        WOLFRAM_LLM_URL,
    );

    let angle_mode = match lookup("ANSR_ANGLE_MODE") {
        Some(raw) => {
            AngleMode::parse(&raw).ok_or_else(|| ConfigError::InvalidAngleMode(raw))?
        }
        None => AngleMode::default(),
    };

    Ok(Config {
        wolfram_instant,
        gemini,
        wolfram_llm,
        angle_mode,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env_of<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |name| {
            pairs
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| value.to_string())
        }
    }

    #[test]
    fn missing_keys_disable_services() {
        let config = load_with(env_of(&[])).unwrap();
        assert!(config.wolfram_instant.is_none());
        assert!(config.gemini.is_none());
        assert!(config.wolfram_llm.is_none());
        assert_eq!(config.angle_mode, AngleMode::Degrees);
    }

    #[test]
    fn empty_key_counts_as_missing() {
        let config = load_with(env_of(&[("GEMINI_API_KEY", "")])).unwrap();
        assert!(config.gemini.is_none());
    }

    #[test]
    fn configured_service_gets_default_endpoint() {
        let config = load_with(env_of(&[(
            "WOLFRAMALPHA_INSTANT_CALCULATOR_API_KEY",
            "DEMO-KEY",
        )]))
        .unwrap();
        let instant = config.wolfram_instant.unwrap();
        assert_eq!(instant.api_key, "DEMO-KEY");
        assert_eq!(instant.endpoint, WOLFRAM_INSTANT_URL);
    }

    #[test]
    fn endpoint_override_applies() {
        let config = load_with(env_of(&[
            ("GEMINI_API_KEY", "k"),
            ("GEMINI_API_URL", "http://localhost:9999/generate"),
        ]))
        .unwrap();
        assert_eq!(
            config.gemini.unwrap().endpoint,
            "http://localhost:9999/generate"
        );
    }

    #[test]
    fn angle_mode_from_env() {
        let config = load_with(env_of(&[("ANSR_ANGLE_MODE", "rad")])).unwrap();
        assert_eq!(config.angle_mode, AngleMode::Radians);

        let err = load_with(env_of(&[("ANSR_ANGLE_MODE", "grad")])).unwrap_err();
        assert!(err.to_string().contains("grad"));
    }
}
