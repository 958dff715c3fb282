//! Shared configuration primitives
//!
//! Every binary in the workspace loads its settings from environment variables.
//! Config structs implement [`FromEnv`] and use the helpers below so that missing
//! or malformed variables all surface as a [`ConfigError`] naming the variable.

pub mod tracing;

use std::env;
use std::str::FromStr;
use thiserror::Error;

/// Configuration error type
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Environment variable '{0}' is required but not set")]
    MissingEnvVar(String),

    #[error("Failed to parse environment variable '{key}': {details}")]
    ParseError { key: String, details: String },
}

/// Application environment
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Environment {
    Development, // Local runs, pretty logs
    Production,  // JSON logs for aggregation
}

impl Environment {
    pub fn from_env() -> Self {
        let app_env = env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());

        if app_env.eq_ignore_ascii_case("production") {
            Environment::Production
        } else {
            Environment::Development
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }

    pub fn is_development(&self) -> bool {
        matches!(self, Environment::Development)
    }
}

/// Trait for configuration that can be loaded from environment variables
pub trait FromEnv: Sized {
    fn from_env() -> Result<Self, ConfigError>;
}

/// Read an environment variable, falling back to `default` when unset
pub fn env_or_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Read an environment variable or fail with [`ConfigError::MissingEnvVar`]
pub fn env_required(key: &str) -> Result<String, ConfigError> {
    env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Read and parse an environment variable, falling back to `default` when unset
///
/// The default goes through the same parser, so a bad default is reported
/// exactly like a bad value.
pub fn env_parse_or_default<T>(key: &str, default: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    env_or_default(key, default)
        .parse()
        .map_err(|e: T::Err| ConfigError::ParseError {
            key: key.to_string(),
            details: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_defaults_to_development() {
        temp_env::with_var_unset("APP_ENV", || {
            let env = Environment::from_env();
            assert_eq!(env, Environment::Development);
            assert!(env.is_development());
            assert!(!env.is_production());
        });
    }

    #[test]
    fn test_environment_production_case_insensitive() {
        for value in ["production", "PRODUCTION", "Production"] {
            temp_env::with_var("APP_ENV", Some(value), || {
                assert_eq!(Environment::from_env(), Environment::Production);
            });
        }
    }

    #[test]
    fn test_environment_unknown_defaults_to_development() {
        temp_env::with_var("APP_ENV", Some("staging"), || {
            assert_eq!(Environment::from_env(), Environment::Development);
        });
    }

    #[test]
    fn test_env_or_default() {
        temp_env::with_var("USERS_TEST_VAR", Some("set"), || {
            assert_eq!(env_or_default("USERS_TEST_VAR", "fallback"), "set");
        });
        temp_env::with_var_unset("USERS_TEST_VAR", || {
            assert_eq!(env_or_default("USERS_TEST_VAR", "fallback"), "fallback");
        });
    }

    #[test]
    fn test_env_required_missing() {
        temp_env::with_var_unset("USERS_MISSING_REQUIRED", || {
            let err = env_required("USERS_MISSING_REQUIRED").unwrap_err();
            assert!(err.to_string().contains("USERS_MISSING_REQUIRED"));
            assert!(err.to_string().contains("required"));
        });
    }

    #[test]
    fn test_env_parse_or_default() {
        temp_env::with_var_unset("USERS_PORT", || {
            let port: u16 = env_parse_or_default("USERS_PORT", "5432").unwrap();
            assert_eq!(port, 5432);
        });

        temp_env::with_var("USERS_PORT", Some("6543"), || {
            let port: u16 = env_parse_or_default("USERS_PORT", "5432").unwrap();
            assert_eq!(port, 6543);
        });
    }

    #[test]
    fn test_env_parse_or_default_invalid() {
        temp_env::with_var("USERS_PORT", Some("not-a-port"), || {
            let err = env_parse_or_default::<u16>("USERS_PORT", "5432").unwrap_err();
            assert!(matches!(err, ConfigError::ParseError { ref key, .. } if key == "USERS_PORT"));
        });
    }
}
