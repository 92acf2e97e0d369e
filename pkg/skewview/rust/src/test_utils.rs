// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

use serde_json::json;

use crate::log_event::{LogEvent, SNAPSHOT_SUCCEEDED};

/// Builds a snapshot event with one object per `(timestamp, skew, state)`.
pub fn snapshot_event(key: i64, snapshots: &[(&str, i64, &str)]) -> LogEvent {
    LogEvent {
        key,
        text: SNAPSHOT_SUCCEEDED.to_string(),
        objects: snapshots
            .iter()
            .map(|(timestamp, skew, state)| {
                json!({
                    "snapshot": {
                        "snapshotTimestamp": timestamp,
                        "skew": skew,
                        "state": { "name": state },
                    }
                })
            })
            .collect(),
    }
}

/// Builds an event the extractor must ignore.
pub fn other_event(key: i64, text: &str) -> LogEvent {
    LogEvent {
        key,
        text: text.to_string(),
        objects: vec![json!({ "contact": { "state": "CONNECTED" } })],
    }
}

/// A snapshot event at `second` past midnight, 2023-01-01 UTC.
pub fn state_at(key: i64, second: u32, skew: i64, state: &str) -> LogEvent {
    let timestamp = format!("2023-01-01T00:00:{second:02}.000Z");
    snapshot_event(key, &[(timestamp.as_str(), skew, state)])
}
