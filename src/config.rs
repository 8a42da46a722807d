//! Configuration for the diagnostic log
//!
//! Defaults are tuned for an interactive debugging panel: a small routine
//! buffer, a separate bound for sticky errors, and aggressive throttling of
//! chatty categories. Every field can be overridden from the environment
//! with a `DIAGLOG_` prefixed variable.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Environment variable prefix for overrides
pub const ENV_PREFIX: &str = "DIAGLOG_";

/// Diagnostic log configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Maximum routine (non-error) events kept
    pub routine_capacity: usize,
    /// Maximum sticky errors kept
    pub sticky_capacity: usize,
    /// Rate limiter window length
    pub rate_limit_window_ms: i64,
    /// Events of one category accepted per window
    pub rate_limit_max_per_window: u32,
    /// Identical (category, message) pairs inside this window are dropped
    pub dedup_window_ms: i64,
    /// Dedup entries older than `factor * dedup_window_ms` are pruned
    pub dedup_prune_factor: i64,
    /// Dedup map size that triggers an inline prune on write
    pub dedup_max_keys: usize,
    /// Age after which routine info/success events are swept
    pub retention_ttl_ms: i64,
    /// Interval between retention sweeps
    pub sweep_interval_ms: u64,
    /// Routine count the sweeper trims down to
    pub soft_cap: usize,
    /// Re-emit accepted events through `tracing`
    pub mirror_to_tracing: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            routine_capacity: 30,
            sticky_capacity: 15,
            rate_limit_window_ms: 1_000,
            rate_limit_max_per_window: 3,
            dedup_window_ms: 500,
            dedup_prune_factor: 4,
            dedup_max_keys: 256,
            retention_ttl_ms: 30_000,
            sweep_interval_ms: 15_000,
            soft_cap: 25,
            mirror_to_tracing: true,
        }
    }
}

impl LogConfig {
    /// Config for local development (faster sweeps, mirrored to tracing)
    pub fn development() -> Self {
        Self {
            retention_ttl_ms: 15_000,
            sweep_interval_ms: 5_000,
            ..Default::default()
        }
    }

    /// Config for tests: no mirroring, sweeps effectively disabled
    pub fn testing() -> Self {
        Self {
            sweep_interval_ms: 3_600_000,
            mirror_to_tracing: false,
            ..Default::default()
        }
    }

    /// Load defaults, then apply `DIAGLOG_*` environment overrides
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        override_field(&lookup, "ROUTINE_CAPACITY", &mut config.routine_capacity)?;
        override_field(&lookup, "STICKY_CAPACITY", &mut config.sticky_capacity)?;
        override_field(&lookup, "RATE_LIMIT_WINDOW_MS", &mut config.rate_limit_window_ms)?;
        override_field(
            &lookup,
            "RATE_LIMIT_MAX_PER_WINDOW",
            &mut config.rate_limit_max_per_window,
        )?;
        override_field(&lookup, "DEDUP_WINDOW_MS", &mut config.dedup_window_ms)?;
        override_field(&lookup, "DEDUP_PRUNE_FACTOR", &mut config.dedup_prune_factor)?;
        override_field(&lookup, "DEDUP_MAX_KEYS", &mut config.dedup_max_keys)?;
        override_field(&lookup, "RETENTION_TTL_MS", &mut config.retention_ttl_ms)?;
        override_field(&lookup, "SWEEP_INTERVAL_MS", &mut config.sweep_interval_ms)?;
        override_field(&lookup, "SOFT_CAP", &mut config.soft_cap)?;
        override_field(&lookup, "MIRROR_TO_TRACING", &mut config.mirror_to_tracing)?;

        config.validate()?;
        Ok(config)
    }

    /// Check that bounds are usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.routine_capacity == 0 || self.sticky_capacity == 0 {
            return Err(ConfigError::Invalid(
                "capacities must be greater than zero".to_string(),
            ));
        }
        if self.rate_limit_window_ms <= 0 || self.dedup_window_ms <= 0 {
            return Err(ConfigError::Invalid(
                "windows must be greater than zero".to_string(),
            ));
        }
        if self.sweep_interval_ms == 0 {
            return Err(ConfigError::Invalid(
                "sweep interval must be greater than zero".to_string(),
            ));
        }
        if self.soft_cap > self.routine_capacity {
            return Err(ConfigError::Invalid(format!(
                "soft cap {} exceeds routine capacity {}",
                self.soft_cap, self.routine_capacity
            )));
        }
        Ok(())
    }

    /// Copy with every bound forced into a usable range
    ///
    /// Used by constructors that must not fail.
    pub fn clamped(mut self) -> Self {
        self.routine_capacity = self.routine_capacity.max(1);
        self.sticky_capacity = self.sticky_capacity.max(1);
        self.rate_limit_window_ms = self.rate_limit_window_ms.max(1);
        self.dedup_window_ms = self.dedup_window_ms.max(1);
        self.dedup_prune_factor = self.dedup_prune_factor.max(1);
        self.dedup_max_keys = self.dedup_max_keys.max(1);
        self.sweep_interval_ms = self.sweep_interval_ms.max(1);
        self.soft_cap = self.soft_cap.min(self.routine_capacity);
        self
    }

    /// Sweep interval as a `Duration`
    pub fn sweep_interval(&self) -> Duration {
        Duration::from_millis(self.sweep_interval_ms)
    }

    /// Age beyond which dedup entries are forgotten
    pub fn dedup_retention_ms(&self) -> i64 {
        self.dedup_window_ms.saturating_mul(self.dedup_prune_factor)
    }
}

fn override_field<F, T>(lookup: &F, suffix: &str, field: &mut T) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    let key = format!("{}{}", ENV_PREFIX, suffix);
    if let Some(raw) = lookup(&key) {
        *field = raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
            key: key.clone(),
            value: raw.clone(),
        })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_default_is_valid() {
        assert!(LogConfig::default().validate().is_ok());
        assert!(LogConfig::development().validate().is_ok());
        assert!(LogConfig::testing().validate().is_ok());
    }

    #[test]
    fn test_env_overrides() {
        let config = LogConfig::from_lookup(lookup_from(&[
            ("DIAGLOG_ROUTINE_CAPACITY", "40"),
            ("DIAGLOG_STICKY_CAPACITY", " 12 "),
            ("DIAGLOG_MIRROR_TO_TRACING", "false"),
        ]))
        .unwrap();

        assert_eq!(config.routine_capacity, 40);
        assert_eq!(config.sticky_capacity, 12);
        assert!(!config.mirror_to_tracing);
        assert_eq!(config.rate_limit_max_per_window, 3);
    }

    #[test]
    fn test_env_invalid_value() {
        let err = LogConfig::from_lookup(lookup_from(&[("DIAGLOG_SOFT_CAP", "lots")])).unwrap_err();
        match err {
            ConfigError::InvalidValue { key, value } => {
                assert_eq!(key, "DIAGLOG_SOFT_CAP");
                assert_eq!(value, "lots");
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_validate_rejects_soft_cap_above_capacity() {
        let config = LogConfig {
            routine_capacity: 10,
            soft_cap: 20,
            ..Default::default()
        };
        assert!(config.validate().is_err());
        assert_eq!(config.clamped().soft_cap, 10);
    }

    #[test]
    fn test_clamped_fixes_zero_capacities() {
        let config = LogConfig {
            routine_capacity: 0,
            sticky_capacity: 0,
            soft_cap: 0,
            ..Default::default()
        }
        .clamped();

        assert_eq!(config.routine_capacity, 1);
        assert_eq!(config.sticky_capacity, 1);
        assert!(config.validate().is_ok());
    }
}
