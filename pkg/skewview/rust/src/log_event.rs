// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

//! Wire types for the raw event log handed to the metrics view.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::Error;

/// Text of the events that carry agent snapshots.
pub const SNAPSHOT_SUCCEEDED: &str = "GET_AGENT_SNAPSHOT succeeded.";

/// One entry of the event log.
///
/// Objects are kept as raw JSON because only snapshot events have a known
/// shape; the extractor decodes them on demand.
///
/// The key is read from `_key`, falling back to `key`. An event carrying both
/// uses `_key`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawLogEvent")]
pub struct LogEvent {
    #[serde(rename = "_key")]
    pub key: i64,
    pub text: String,
    #[serde(default)]
    pub objects: Vec<Value>,
}

#[derive(Deserialize)]
struct RawLogEvent {
    #[serde(rename = "_key")]
    viewer_key: Option<i64>,
    key: Option<i64>,
    text: String,
    #[serde(default)]
    objects: Vec<Value>,
}

impl TryFrom<RawLogEvent> for LogEvent {
    type Error = String;

    fn try_from(raw: RawLogEvent) -> Result<Self, Self::Error> {
        let key = raw
            .viewer_key
            .or(raw.key)
            .ok_or_else(|| "missing field `_key`".to_string())?;
        Ok(LogEvent {
            key,
            text: raw.text,
            objects: raw.objects,
        })
    }
}

impl LogEvent {
    pub fn is_snapshot(&self) -> bool {
        self.text == SNAPSHOT_SUCCEEDED
    }
}

/// Object embedded in a snapshot event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotObject {
    pub snapshot: SnapshotRecord,
}

/// The agent snapshot as reported by the contact center API.
///
/// Fields the view does not interpret are preserved in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotRecord {
    pub snapshot_timestamp: String,
    pub skew: i64,
    pub state: AgentState,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentState {
    pub name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Parses a JSON array of log events.
pub fn parse_log(json: &str) -> Result<Vec<LogEvent>, Error> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_log_reads_viewer_key_field() {
        let log = parse_log(
            r#"[
                {"_key": 3, "text": "GET_AGENT_SNAPSHOT succeeded.", "objects": []},
                {"key": 4, "text": "something else"}
            ]"#,
        )
        .unwrap();

        assert_eq!(log.len(), 2);
        assert_eq!(log[0].key, 3);
        assert!(log[0].is_snapshot());
        assert_eq!(log[1].key, 4);
        assert!(!log[1].is_snapshot());
        assert!(log[1].objects.is_empty());
    }

    #[test]
    fn test_parse_log_prefers_viewer_key_when_both_present() {
        let log = parse_log(
            r#"[
                {"_key": 1, "key": 1, "text": "a"},
                {"_key": 2, "key": 9, "text": "b"}
            ]"#,
        )
        .unwrap();

        assert_eq!(log.len(), 2);
        assert_eq!(log[0].key, 1);
        assert_eq!(log[1].key, 2);
    }

    #[test]
    fn test_parse_log_rejects_event_without_key() {
        let err = parse_log(r#"[{"text": "a"}]"#).unwrap_err();
        assert!(matches!(err, Error::LogDecoding(_)));
        assert!(err.to_string().contains("_key"));
    }

    #[test]
    fn test_serialized_event_uses_viewer_key() {
        let value = serde_json::to_value(LogEvent {
            key: 5,
            text: "a".to_string(),
            objects: vec![],
        })
        .unwrap();
        assert_eq!(value["_key"], 5);
        assert!(value.get("key").is_none());
    }

    #[test]
    fn test_parse_log_rejects_non_array() {
        let err = parse_log(r#"{"_key": 1}"#).unwrap_err();
        assert!(matches!(err, Error::LogDecoding(_)));
    }

    #[test]
    fn test_snapshot_record_keeps_unknown_fields() {
        let object: SnapshotObject = serde_json::from_str(
            r#"{"snapshot": {
                "snapshotTimestamp": "2023-01-01T00:00:00.000Z",
                "skew": -12,
                "state": {"name": "Busy", "startTimestamp": "2022-12-31T23:59:00.000Z"},
                "agentStatus": {"name": "Available"}
            }}"#,
        )
        .unwrap();

        let record = object.snapshot;
        assert_eq!(record.skew, -12);
        assert_eq!(record.state.name, "Busy");
        assert!(record.state.extra.contains_key("startTimestamp"));
        assert_eq!(record.extra["agentStatus"]["name"], "Available");

        let round = serde_json::to_value(&record).unwrap();
        assert_eq!(round["snapshotTimestamp"], "2023-01-01T00:00:00.000Z");
        assert_eq!(round["agentStatus"]["name"], "Available");
    }

    #[test]
    fn test_sentinel_match_is_exact() {
        let event = LogEvent {
            key: 1,
            text: "GET_AGENT_SNAPSHOT succeeded".to_string(),
            objects: vec![],
        };
        assert!(!event.is_snapshot());
    }
}
