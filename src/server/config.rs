//! Environment configuration for the portal backend.

use std::time::Duration;

use crate::server::error::config::ConfigError;

/// Days of inactivity before a server session expires when not configured.
pub const DEFAULT_SESSION_INACTIVITY_DAYS: i64 = 7;

/// Environment variable overriding the session inactivity window in days.
pub const SESSION_INACTIVITY_DAYS_VAR: &str = "PORTAL_SESSION_INACTIVITY_DAYS";
/// Environment variable setting the simulated authentication latency in milliseconds.
pub const AUTH_LATENCY_MS_VAR: &str = "PORTAL_AUTH_LATENCY_MS";

/// Runtime settings of the portal backend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Days a session survives without requests.
    pub session_inactivity_days: i64,
    /// Delay applied by the authentication provider before answering.
    pub auth_latency: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            session_inactivity_days: DEFAULT_SESSION_INACTIVITY_DAYS,
            auth_latency: Duration::ZERO,
        }
    }
}

impl Config {
    /// Reads the configuration from the process environment.
    ///
    /// Every variable is optional; unset variables keep their default.
    ///
    /// # Returns
    /// - `Ok(Config)` - All present variables parsed
    /// - `Err(ConfigError::InvalidEnvValue)` - A variable is set to a value that can't be used
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(SESSION_INACTIVITY_DAYS_VAR) {
            let days = parse_number(SESSION_INACTIVITY_DAYS_VAR, &value)?;

            if days == 0 {
                return Err(ConfigError::InvalidEnvValue {
                    var: SESSION_INACTIVITY_DAYS_VAR.to_string(),
                    reason: "must be at least 1 day".to_string(),
                });
            }

            config.session_inactivity_days = days as i64;
        }

        if let Some(value) = lookup(AUTH_LATENCY_MS_VAR) {
            let millis = parse_number(AUTH_LATENCY_MS_VAR, &value)?;

            config.auth_latency = Duration::from_millis(millis);
        }

        Ok(config)
    }
}

fn parse_number(var: &str, value: &str) -> Result<u64, ConfigError> {
    value
        .trim()
        .parse::<u32>()
        .map(u64::from)
        .map_err(|e| ConfigError::InvalidEnvValue {
            var: var.to_string(),
            reason: format!("{:?} is not a non-negative integer ({})", value, e),
        })
}

#[cfg(test)]
mod tests {
    use std::{collections::HashMap, time::Duration};

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        move |var| vars.get(var).cloned()
    }

    #[test]
    /// Expect defaults when nothing is set
    fn uses_defaults_when_unset() {
        let config = Config::from_lookup(lookup(&[])).unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.session_inactivity_days, 7);
        assert_eq!(config.auth_latency, Duration::ZERO);
    }

    #[test]
    /// Expect present variables to override the defaults
    fn reads_overrides() {
        let config = Config::from_lookup(lookup(&[
            (SESSION_INACTIVITY_DAYS_VAR, "30"),
            (AUTH_LATENCY_MS_VAR, " 250 "),
        ]))
        .unwrap();

        assert_eq!(config.session_inactivity_days, 30);
        assert_eq!(config.auth_latency, Duration::from_millis(250));
    }

    #[test]
    /// Expect an error naming the variable for unparsable or out of range values
    fn rejects_invalid_values() {
        let cases = [
            (SESSION_INACTIVITY_DAYS_VAR, "0"),
            (SESSION_INACTIVITY_DAYS_VAR, "siete"),
            (AUTH_LATENCY_MS_VAR, "-5"),
        ];

        for (var, value) in cases {
            let result = Config::from_lookup(lookup(&[(var, value)]));

            match result {
                Err(ConfigError::InvalidEnvValue { var: reported, .. }) => {
                    assert_eq!(reported, var)
                }
                other => panic!("expected invalid value for {var}={value}, got {other:?}"),
            }
        }
    }
}
