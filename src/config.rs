use std::env;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::errors::RegistryError;

/// Environment variable holding the portal base address.
pub const ENV_BASE_ADDRESS: &str = "CONFPORTAL_BASE_ADDRESS";

/// Registry configuration, fixed for the lifetime of the process.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct RegistryConfig {
    /// Address prefix (scheme, host, port) prepended to every endpoint
    /// path. Empty emits bare paths for same-origin use.
    #[serde(default)]
    #[validate(custom(function = validate_base_address))]
    pub base_address: String,
}

impl RegistryConfig {
    pub fn with_base_address<S: Into<String>>(base_address: S) -> Self {
        Self {
            base_address: base_address.into(),
        }
    }

    /// Read the configuration from the process environment, honoring a
    /// `.env` file when present. An absent variable means an empty base.
    pub fn from_env() -> Result<Self, RegistryError> {
        dotenvy::dotenv().ok();
        let base_address = env::var(ENV_BASE_ADDRESS).unwrap_or_default();
        let config = Self { base_address };
        config
            .validate()
            .map_err(|_| RegistryError::InvalidBaseAddress(config.base_address.clone()))?;
        Ok(config)
    }
}

fn validate_base_address(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Ok(());
    }
    if value.chars().any(char::is_whitespace) {
        return Err(ValidationError::new("base_address_whitespace"));
    }
    let rest = value
        .strip_prefix("http://")
        .or_else(|| value.strip_prefix("https://"))
        .ok_or_else(|| ValidationError::new("base_address_scheme"))?;
    if rest.trim_end_matches('/').is_empty() {
        return Err(ValidationError::new("base_address_host"));
    }
    Ok(())
}
