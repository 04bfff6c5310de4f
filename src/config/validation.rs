//! Configuration validation logic.

use url::Url;

use crate::config::options::Config;
use crate::error::{Error, Result};

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_url(&config.url)?;
    if let Some(password) = &config.password {
        validate_password(password)?;
    }
    if config.user_agent.trim().is_empty() {
        return Err(Error::ConfigValidation {
            field: "user_agent".to_string(),
            message: "User agent must not be empty".to_string(),
        });
    }

    Ok(())
}

/// Validate the target URL.
pub fn validate_url(input: &str) -> Result<()> {
    let input = input.trim();

    if input.is_empty() {
        return Err(Error::Config("url (a video or series page URL is required)".into()));
    }

    let url = Url::parse(input).map_err(|e| Error::ConfigValidation {
        field: "url".to_string(),
        message: format!("'{}' is not a valid URL: {}", input, e),
    })?;

    if url.scheme() != "https" && url.scheme() != "http" {
        return Err(Error::ConfigValidation {
            field: "url".to_string(),
            message: format!("Unsupported scheme '{}' (expected http or https)", url.scheme()),
        });
    }

    if url.host_str().is_none() {
        return Err(Error::ConfigValidation {
            field: "url".to_string(),
            message: format!("URL has no host: {}", input),
        });
    }

    Ok(())
}

/// Validate a supplied password.
pub fn validate_password(password: &str) -> Result<()> {
    if password.trim().is_empty() {
        return Err(Error::ConfigValidation {
            field: "password".to_string(),
            message: "Password must not be blank".to_string(),
        });
    }

    Ok(())
}
