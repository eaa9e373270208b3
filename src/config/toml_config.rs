use crate::config::{AppConfig, UpstreamConfig};
use crate::utils::error::{Result, SolarError};
use crate::utils::validation::{
    validate_header_value, validate_non_empty_string, validate_positive_number, validate_url,
    Validate,
};
use regex::Regex;
use std::path::Path;

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SolarError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string. Missing sections fall back to defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| SolarError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replace `${VAR}` references with environment values; unknown variables are kept verbatim.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| SolarError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl Validate for UpstreamConfig {
    fn validate(&self) -> Result<()> {
        validate_url("upstream.viacep_base_url", &self.viacep_base_url)?;
        validate_url("upstream.nominatim_base_url", &self.nominatim_base_url)?;
        validate_url("upstream.pvgis_base_url", &self.pvgis_base_url)?;
        validate_non_empty_string("upstream.user_agent", &self.user_agent)?;
        validate_header_value("upstream.user_agent", &self.user_agent)?;

        if let Some(timeout) = self.timeout_seconds {
            validate_positive_number("upstream.timeout_seconds", timeout, 1)?;
        }

        Ok(())
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("server.host", &self.server.host)?;
        validate_positive_number("server.port", u64::from(self.server.port), 1)?;
        self.upstream.validate()?;

        for origin in &self.cors.allowed_origins {
            validate_non_empty_string("cors.allowed_origins", origin)?;
        }

        Ok(())
    }
}
