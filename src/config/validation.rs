//! Configuration validation logic.

use crate::config::loader::Config;
use crate::error::{Error, Result};

/// Validate the entire configuration.
///
/// Structural problems (missing fields, wrong types) are already caught at
/// load time; this pass rejects values that are present but unusable.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_client_identity(&config.client_name, &config.client_version)?;
    validate_dl_base(config)?;
    validate_e6_username(&config.e6.username)?;

    Ok(())
}

/// Validate the client name and version used to build User-Agent strings.
pub fn validate_client_identity(name: &str, version: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::MissingConfig("client_name".to_string()));
    }

    if version.trim().is_empty() {
        return Err(Error::MissingConfig("client_version".to_string()));
    }

    // A slash would corrupt the "{name}/{version}" User-Agent format
    if name.contains('/') {
        return Err(Error::ConfigValidation {
            field: "client_name".to_string(),
            message: format!("must not contain '/': '{}'", name),
        });
    }

    Ok(())
}

/// Validate the download root directory.
pub fn validate_dl_base(config: &Config) -> Result<()> {
    if config.dl_base.as_os_str().is_empty() {
        return Err(Error::MissingConfig("dl_base".to_string()));
    }

    Ok(())
}

/// Validate the e621 username.
///
/// e621 asks API clients to identify the operating user in their
/// User-Agent, so an empty username is rejected up front.
pub fn validate_e6_username(username: &str) -> Result<()> {
    if username.trim().is_empty() {
        return Err(Error::MissingConfig("e6.username".to_string()));
    }

    Ok(())
}
