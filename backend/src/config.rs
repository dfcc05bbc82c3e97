//! Contract configuration loaded via OrthoConfig.
//!
//! Values layer from defaults, configuration files, `CONTRACTS_*`
//! environment variables and command-line flags.

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::domain::{ParseUnknownFieldPolicyError, UnknownFieldPolicy};

/// Environment variable selecting the unknown-field policy.
pub const UNKNOWN_FIELDS_ENV: &str = "CONTRACTS_UNKNOWN_FIELDS";

/// Errors raised while interpreting contract configuration.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ContractConfigError {
    /// The configured unknown-field policy is not recognised.
    #[error("invalid value for CONTRACTS_UNKNOWN_FIELDS: {source}")]
    InvalidUnknownFieldPolicy {
        /// Parse failure carrying the rejected value.
        #[source]
        source: ParseUnknownFieldPolicyError,
    },
}

/// Settings that shape how request contracts are validated.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "CONTRACTS")]
pub struct ContractSettings {
    /// Treatment of undeclared request fields: `strict` or `lenient`.
    #[ortho_config(default = "lenient".to_owned())]
    pub unknown_fields: String,
}

impl ContractSettings {
    /// Parse the configured unknown-field policy.
    ///
    /// # Examples
    /// ```
    /// use capabilities::config::ContractSettings;
    /// use capabilities::domain::UnknownFieldPolicy;
    ///
    /// let settings = ContractSettings { unknown_fields: "strict".into() };
    /// assert_eq!(settings.unknown_field_policy(), Ok(UnknownFieldPolicy::Strict));
    /// ```
    pub fn unknown_field_policy(&self) -> Result<UnknownFieldPolicy, ContractConfigError> {
        self.unknown_fields
            .parse()
            .map_err(|source| ContractConfigError::InvalidUnknownFieldPolicy { source })
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for contract configuration parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    fn load_from_empty_args() -> ContractSettings {
        ContractSettings::load_from_iter([OsString::from("capabilities")])
            .expect("config should load")
    }

    #[rstest]
    fn lenient_is_used_when_missing() {
        let _guard = lock_env([(UNKNOWN_FIELDS_ENV, None::<String>)]);

        let settings = load_from_empty_args();
        assert_eq!(settings.unknown_fields, "lenient");
        assert_eq!(
            settings.unknown_field_policy(),
            Ok(UnknownFieldPolicy::Lenient)
        );
    }

    #[rstest]
    fn environment_override_is_respected() {
        let _guard = lock_env([(UNKNOWN_FIELDS_ENV, Some("strict".to_owned()))]);

        let settings = load_from_empty_args();
        assert_eq!(
            settings.unknown_field_policy(),
            Ok(UnknownFieldPolicy::Strict)
        );
    }

    #[rstest]
    fn invalid_policy_is_reported() {
        let settings = ContractSettings {
            unknown_fields: "sometimes".to_owned(),
        };
        let err = settings
            .unknown_field_policy()
            .expect_err("unrecognised policy");
        assert!(err.to_string().contains("sometimes"));
        assert!(err.to_string().contains(UNKNOWN_FIELDS_ENV));
    }
}
