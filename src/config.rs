// src/config.rs

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_MAX_SPAN: f64 = 5.0;
pub const DEFAULT_MIN_SPAN: f64 = 1.5;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{field} must be finite, got {value}")]
    NonFinite { field: &'static str, value: f64 },

    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f64 },

    #[error("min_span ({min_span}) must be smaller than max_span ({max_span})")]
    InvertedSpans { min_span: f64, max_span: f64 },

    #[error("invalid grid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Span limits for a [`LayoutGrid`](crate::grid::LayoutGrid).
///
/// Built through [`GridConfig::new`] or one of the loaders, all of which
/// reject non-finite or negative spans and `min_span >= max_span`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawGridConfig")]
pub struct GridConfig {
    max_span: f64,
    min_span: f64,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawGridConfig {
    #[serde(default = "default_max_span")]
    max_span: f64,
    #[serde(default = "default_min_span")]
    min_span: f64,
}

fn default_max_span() -> f64 {
    DEFAULT_MAX_SPAN
}

fn default_min_span() -> f64 {
    DEFAULT_MIN_SPAN
}

impl TryFrom<RawGridConfig> for GridConfig {
    type Error = ConfigError;

    fn try_from(raw: RawGridConfig) -> Result<Self, Self::Error> {
        GridConfig::new(raw.max_span, raw.min_span)
    }
}

impl GridConfig {
    pub fn new(max_span: f64, min_span: f64) -> Result<Self, ConfigError> {
        check_span("max_span", max_span)?;
        check_span("min_span", min_span)?;
        if min_span >= max_span {
            return Err(ConfigError::InvertedSpans { min_span, max_span });
        }
        Ok(Self { max_span, min_span })
    }

    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    /// Returns a copy with the given spans replaced, re-validated.
    pub fn with_overrides(
        &self,
        max_span: Option<f64>,
        min_span: Option<f64>,
    ) -> Result<Self, ConfigError> {
        Self::new(
            max_span.unwrap_or(self.max_span),
            min_span.unwrap_or(self.min_span),
        )
    }

    pub fn max_span(&self) -> f64 {
        self.max_span
    }

    pub fn min_span(&self) -> f64 {
        self.min_span
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            max_span: DEFAULT_MAX_SPAN,
            min_span: DEFAULT_MIN_SPAN,
        }
    }
}

fn check_span(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if !value.is_finite() {
        return Err(ConfigError::NonFinite { field, value });
    }
    if value < 0.0 {
        return Err(ConfigError::Negative { field, value });
    }
    Ok(())
}
