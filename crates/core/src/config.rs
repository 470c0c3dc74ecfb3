//! Booking runtime configuration.
//!
//! This module defines configuration that should be resolved once at process startup and then
//! passed into core services. The intent is to avoid reading process-wide environment variables
//! during request handling, which can lead to inconsistent behaviour in multi-threaded runtimes
//! and test harnesses.

use springlab_types::{EmailAddress, NonEmptyText, TextError};

/// Site name used in notification emails when none is configured.
pub const DEFAULT_SITE_NAME: &str = "SpringHealth Lab";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("operator notification address is not configured (set ADMIN_EMAIL)")]
    MissingOperatorAddress,
    #[error("invalid operator notification address: {0}")]
    InvalidOperatorAddress(TextError),
    #[error("invalid site name: {0}")]
    InvalidSiteName(TextError),
}

/// Booking configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct BookingConfig {
    operator_address: EmailAddress,
    site_name: NonEmptyText,
}

impl BookingConfig {
    /// Builds a configuration from optional environment values.
    ///
    /// The operator address is required; a booking flow with nowhere to send
    /// alerts would accept requests nobody ever sees, so its absence is a
    /// startup failure rather than a per-request surprise. The site name
    /// falls back to [`DEFAULT_SITE_NAME`].
    ///
    /// # Errors
    /// Returns an error if:
    /// - the operator address is unset, blank, or not a valid email address, or
    /// - a site name is supplied but blank.
    pub fn from_env_values(
        operator_address: Option<String>,
        site_name: Option<String>,
    ) -> Result<Self, ConfigError> {
        let operator_raw = operator_address
            .filter(|address| !address.trim().is_empty())
            .ok_or(ConfigError::MissingOperatorAddress)?;
        let operator_address =
            EmailAddress::parse(&operator_raw).map_err(ConfigError::InvalidOperatorAddress)?;
        let site_name = NonEmptyText::new(site_name.as_deref().unwrap_or(DEFAULT_SITE_NAME))
            .map_err(ConfigError::InvalidSiteName)?;
        Ok(Self {
            operator_address,
            site_name,
        })
    }

    /// Where operator alerts are sent.
    pub fn operator_address(&self) -> &EmailAddress {
        &self.operator_address
    }

    /// Site name shown in notification emails.
    pub fn site_name(&self) -> &str {
        self.site_name.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_address_is_required() {
        assert!(matches!(
            BookingConfig::from_env_values(None, None),
            Err(ConfigError::MissingOperatorAddress)
        ));
        assert!(matches!(
            BookingConfig::from_env_values(Some("   ".into()), None),
            Err(ConfigError::MissingOperatorAddress)
        ));
    }

    #[test]
    fn test_malformed_operator_address_is_rejected() {
        assert!(matches!(
            BookingConfig::from_env_values(Some("not-an-address".into()), None),
            Err(ConfigError::InvalidOperatorAddress(_))
        ));
    }

    #[test]
    fn test_site_name_defaults() {
        let config =
            BookingConfig::from_env_values(Some("lab@springhealthlabs.com".into()), None).unwrap();
        assert_eq!(config.site_name(), DEFAULT_SITE_NAME);
        assert_eq!(config.operator_address().as_str(), "lab@springhealthlabs.com");
    }

    #[test]
    fn test_site_name_override() {
        let config = BookingConfig::from_env_values(
            Some("lab@springhealthlabs.com".into()),
            Some("Acme Lab".into()),
        )
        .unwrap();
        assert_eq!(config.site_name(), "Acme Lab");
    }

    #[test]
    fn test_blank_site_name_is_rejected() {
        assert!(matches!(
            BookingConfig::from_env_values(
                Some("lab@springhealthlabs.com".into()),
                Some("  ".into())
            ),
            Err(ConfigError::InvalidSiteName(_))
        ));
    }
}
