// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

use std::path::Path;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::errors::Error;
use crate::interaction::DEFAULT_SKEW_THRESHOLD_MS;

/// Environment variable overriding `skew_threshold_ms`.
pub const THRESHOLD_ENV_VAR: &str = "DD_SKEW_THRESHOLD_MS";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Skew (ms) at and above which a snapshot is flagged.
    pub skew_threshold_ms: f64,
    /// Start with the state bands hidden.
    pub reference_area_hidden: bool,
}

impl Default for ViewConfig {
    fn default() -> Self {
        ViewConfig {
            skew_threshold_ms: DEFAULT_SKEW_THRESHOLD_MS,
            reference_area_hidden: false,
        }
    }
}

/// Loads the view config from an optional YAML file, then applies the
/// environment override. A missing path means defaults.
pub fn load_config(path: Option<&Path>) -> Result<ViewConfig, Error> {
    let mut config = match path {
        Some(path) => parse_config(path)?,
        None => ViewConfig::default(),
    };

    if let Ok(raw) = std::env::var(THRESHOLD_ENV_VAR) {
        debug!(value = %raw, "skew threshold overridden from {THRESHOLD_ENV_VAR}");
        config.skew_threshold_ms = raw
            .trim()
            .parse()
            .map_err(|_| Error::InvalidThreshold { value: raw.clone() })?;
    }

    config.skew_threshold_ms = validate_threshold(config.skew_threshold_ms)?;
    Ok(config)
}

fn parse_config(path: &Path) -> Result<ViewConfig, Error> {
    let contents = std::fs::read_to_string(path).map_err(|source| Error::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;

    if contents.trim().is_empty() {
        warn!("config file {} is empty, using defaults", path.display());
        return Ok(ViewConfig::default());
    }

    serde_yaml::from_str(&contents).map_err(|source| Error::ConfigParsing {
        path: path.to_path_buf(),
        source,
    })
}

/// Accepts only finite, strictly positive thresholds.
pub fn validate_threshold(value: f64) -> Result<f64, Error> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(Error::InvalidThreshold {
            value: value.to_string(),
        })
    }
}
