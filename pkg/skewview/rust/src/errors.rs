// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("could not decode event log: {0}")]
    LogDecoding(#[from] serde_json::Error),

    #[error("could not read config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("could not parse config file {path}: {source}")]
    ConfigParsing {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("skew threshold must be a positive number of milliseconds, got {value}")]
    InvalidThreshold { value: String },
}
