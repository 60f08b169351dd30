use crate::core::committer::RetryPolicy;
use crate::utils::error::{NestlyError, Result};
use crate::utils::validation::{validate_positive_number, validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const ENV_BASE_URL: &str = "NESTLY_API_BASE_URL";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub api: ApiConfig,
    #[serde(default)]
    pub booking: BookingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookingConfig {
    pub max_attempts: Option<u32>,
    pub retry_delay_ms: Option<u64>,
    pub backoff_multiplier: Option<f64>,
}

impl AppConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(NestlyError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| NestlyError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Without a config file the base URL must come from the environment,
    /// mirroring the front-end's hard failure when its base URL was unset.
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var(ENV_BASE_URL).map_err(|_| NestlyError::ConfigError {
            message: format!("{} is not set and no config file was given", ENV_BASE_URL),
        })?;

        Ok(Self {
            api: ApiConfig {
                base_url,
                timeout_seconds: None,
            },
            booking: BookingConfig::default(),
        })
    }

    /// Replace `${VAR_NAME}` placeholders with environment values. Unset
    /// variables are left as-is so validation can report them.
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").expect("static pattern");

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.api.timeout_seconds.unwrap_or(30))
    }

    pub fn max_attempts(&self) -> u32 {
        self.booking.max_attempts.unwrap_or(3)
    }

    pub fn retry_delay(&self) -> Duration {
        Duration::from_millis(self.booking.retry_delay_ms.unwrap_or(1500))
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            max_attempts: self.max_attempts(),
            initial_backoff: self.retry_delay(),
            multiplier: self.booking.backoff_multiplier.unwrap_or(1.0),
        }
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_url("api.base_url", &self.api.base_url)?;

        if let Some(timeout) = self.api.timeout_seconds {
            validate_positive_number("api.timeout_seconds", timeout, 1)?;
        }

        if let Some(attempts) = self.booking.max_attempts {
            validate_positive_number("booking.max_attempts", u64::from(attempts), 1)?;
        }

        if let Some(delay) = self.booking.retry_delay_ms {
            validate_positive_number("booking.retry_delay_ms", delay, 1)?;
        }

        if let Some(multiplier) = self.booking.backoff_multiplier {
            if multiplier < 1.0 {
                return Err(NestlyError::InvalidConfigValueError {
                    field: "booking.backoff_multiplier".to_string(),
                    value: multiplier.to_string(),
                    reason: "Multiplier must be at least 1.0".to_string(),
                });
            }
        }

        Ok(())
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_config() {
        let toml_content = r#"
[api]
base_url = "https://api.nestly.example"
timeout_seconds = 10

[booking]
max_attempts = 5
retry_delay_ms = 500
"#;

        let config = AppConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.api.base_url, "https://api.nestly.example");
        assert_eq!(config.request_timeout(), Duration::from_secs(10));
        assert_eq!(config.max_attempts(), 5);
        assert_eq!(config.retry_delay(), Duration::from_millis(500));
    }

    #[test]
    fn test_booking_section_is_optional() {
        let config = AppConfig::from_toml_str(
            r#"
[api]
base_url = "https://api.nestly.example"
"#,
        )
        .unwrap();

        let policy = config.retry_policy();
        assert_eq!(policy.max_attempts, 3);
        assert_eq!(policy.initial_backoff, Duration::from_millis(1500));
        assert_eq!(policy.multiplier, 1.0);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("NESTLY_TEST_BASE_URL", "https://test.nestly.example");

        let config = AppConfig::from_toml_str(
            r#"
[api]
base_url = "${NESTLY_TEST_BASE_URL}"
"#,
        )
        .unwrap();

        assert_eq!(config.api.base_url, "https://test.nestly.example");

        std::env::remove_var("NESTLY_TEST_BASE_URL");
    }

    #[test]
    fn test_config_validation() {
        let config = AppConfig::from_toml_str(
            r#"
[api]
base_url = "invalid-url"
"#,
        )
        .unwrap();

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_zero_attempts() {
        let config = AppConfig::from_toml_str(
            r#"
[api]
base_url = "https://api.nestly.example"

[booking]
max_attempts = 0
"#,
        )
        .unwrap();

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_shrinking_multiplier() {
        let config = AppConfig::from_toml_str(
            r#"
[api]
base_url = "https://api.nestly.example"

[booking]
backoff_multiplier = 0.5
"#,
        )
        .unwrap();

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(
                br#"
[api]
base_url = "https://api.nestly.example"
"#,
            )
            .unwrap();

        let config = AppConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.api.base_url, "https://api.nestly.example");
    }
}
