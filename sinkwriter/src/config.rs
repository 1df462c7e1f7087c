//! Configuration for [`SinkWriter`](crate::writer::SinkWriter).

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Environment variable overriding the buffer capacity.
pub const BUFFER_CAPACITY_ENV: &str = "SINKWRITER_BUFFER_CAPACITY";

/// Writer configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WriterConfig {
    /// Size in bytes of the encode buffer. Zero is treated as one.
    #[serde(default = "default_buffer_capacity")]
    pub buffer_capacity: usize,
}

const fn default_buffer_capacity() -> usize {
    8192
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            buffer_capacity: default_buffer_capacity(),
        }
    }
}

impl WriterConfig {
    /// Creates a new configuration with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the buffer capacity.
    #[must_use]
    pub const fn with_buffer_capacity(mut self, capacity: usize) -> Self {
        self.buffer_capacity = capacity;
        self
    }

    /// Buffer capacity actually used by a writer.
    #[must_use]
    pub fn effective_capacity(&self) -> usize {
        self.buffer_capacity.max(1)
    }

    /// Parses a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads defaults, overridden by `SINKWRITER_BUFFER_CAPACITY` if set.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(raw) = lookup(BUFFER_CAPACITY_ENV) {
            config.buffer_capacity =
                raw.trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidValue {
                        key: BUFFER_CAPACITY_ENV.to_string(),
                        value: raw.clone(),
                    })?;
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = WriterConfig::new();
        assert_eq!(config.buffer_capacity, 8192);
        assert_eq!(config.effective_capacity(), 8192);
    }

    #[test]
    fn test_zero_capacity_is_clamped() {
        let config = WriterConfig::new().with_buffer_capacity(0);
        assert_eq!(config.effective_capacity(), 1);
    }

    #[test]
    fn test_from_json_fills_defaults() {
        let config = WriterConfig::from_json("{}").unwrap();
        assert_eq!(config, WriterConfig::default());

        let config = WriterConfig::from_json(r#"{"buffer_capacity": 16}"#).unwrap();
        assert_eq!(config.buffer_capacity, 16);

        assert!(WriterConfig::from_json(r#"{"buffer_capacity": "big"}"#).is_err());
    }

    #[test]
    fn test_lookup_override() {
        let config = WriterConfig::from_lookup(|_| Some(" 64 ".to_string())).unwrap();
        assert_eq!(config.buffer_capacity, 64);

        let config = WriterConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.buffer_capacity, 8192);
    }

    #[test]
    fn test_lookup_invalid_value() {
        let err = WriterConfig::from_lookup(|_| Some("lots".to_string())).unwrap_err();
        match err {
            ConfigError::InvalidValue { key, value } => {
                assert_eq!(key, BUFFER_CAPACITY_ENV);
                assert_eq!(value, "lots");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
